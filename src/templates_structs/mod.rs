pub mod auth;
pub mod common;
pub mod dashboard;
pub mod inbox;
pub mod report;
