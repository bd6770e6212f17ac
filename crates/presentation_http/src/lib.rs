//! Skycast HTTP presentation layer
//!
//! HTML form, JSON API and health endpoint over the forecast service.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{ApiError, ErrorResponse};
pub use routes::{create_app, create_router};
pub use state::AppState;
pub use views::{PageRenderer, TemplateError};
