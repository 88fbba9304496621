pub mod ack;
pub mod docs;
pub mod donate;
pub mod login;
pub mod profile;
pub mod register;

use actix_web::web;

// Each group puts the POST guard on the route, not the resource, so other methods get 405.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(register::init_routes)
        .configure(login::init_routes)
        .configure(profile::init_routes)
        .configure(donate::init_routes);
}
