pub mod api;
pub mod config;
pub mod errors;
pub mod handler;
pub mod launch;
pub mod render;
