pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod routes;
