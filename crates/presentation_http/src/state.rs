//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

use crate::views::PageRenderer;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast use case
    pub forecast_service: Arc<ForecastService>,
    /// HTML page renderer
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Build state around a service, compiling the embedded templates
    pub fn new(forecast_service: ForecastService) -> Result<Self, crate::views::TemplateError> {
        Ok(Self {
            forecast_service: Arc::new(forecast_service),
            pages: Arc::new(PageRenderer::new()?),
        })
    }
}
