use actix_web::web;

pub mod get_author;
pub mod list_authors;
pub mod search_authors;

// `/{id}` goes last so it cannot shadow the named routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list_authors::list_authors))
        .route("/search", web::get().to(search_authors::search_authors))
        .route("/{id}", web::get().to(get_author::get_author));
}
