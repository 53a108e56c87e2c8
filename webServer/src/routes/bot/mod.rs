use actix_web::web;

use super::{mount, Subroute};

pub mod channels;

const SUBROUTES: &[Subroute] = &[("channels", channels::configure)];

pub fn configure(cfg: &mut web::ServiceConfig) {
    mount(cfg, SUBROUTES);
}
