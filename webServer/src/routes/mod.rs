use actix_web::web;

pub mod bot;
pub mod track;

/// A sub-route module: mounted under `/{name}` by [`mount`].
pub type Subroute = (&'static str, fn(&mut web::ServiceConfig));

const SUBROUTES: &[Subroute] = &[("track", track::configure), ("bot", bot::configure)];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    mount(cfg, SUBROUTES);
}

pub fn mount(cfg: &mut web::ServiceConfig, subroutes: &[Subroute]) {
    for (name, configure) in subroutes {
        cfg.service(web::scope(&format!("/{name}")).configure(*configure));
    }
}
