//! Application layer - Use cases and orchestration
//!
//! Contains the forecast use case, its request/response shapes and the
//! port definitions for geocoding and weather providers. Orchestrates
//! domain objects and infrastructure adapters.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use dto::{DailyForecastView, ForecastRequest, ForecastResponse, UnitsView};
pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
