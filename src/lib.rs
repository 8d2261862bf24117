pub mod app;
pub mod config;
pub mod constants;
pub mod cors;
pub mod database;
pub mod error;
pub mod handlers;
