pub mod data;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

pub use routes::{AppState, app};
