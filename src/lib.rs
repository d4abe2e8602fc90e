pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod money;
pub mod store;
pub mod templates_structs;
