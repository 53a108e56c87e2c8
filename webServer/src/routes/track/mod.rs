use actix_web::web;

use super::{mount, Subroute};

pub mod author;

const SUBROUTES: &[Subroute] = &[("author", author::configure)];

pub fn configure(cfg: &mut web::ServiceConfig) {
    mount(cfg, SUBROUTES);
}
