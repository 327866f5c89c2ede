//! HTTP front end for the natal chart renderer.

pub mod handlers;
pub mod routes;

pub use routes::{create_router, AppState};
