//! HTTP request handlers.

pub mod doctor_handler;

pub use doctor_handler::doctor_routes;
