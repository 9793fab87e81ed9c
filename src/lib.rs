pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

pub use database::activity_store::ActivityStore;
pub use web::build_router;
