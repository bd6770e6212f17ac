//! HTML views rendered with Tera
//!
//! Templates are compiled into the binary; see `templates/` in this crate.

use application::ForecastResponse;
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("weather.html", include_str!("../templates/weather.html")),
    ("error.html", include_str!("../templates/error.html")),
];

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Renders the HTML pages of the web interface
pub struct PageRenderer {
    tera: Tera,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}

impl PageRenderer {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Search form, optionally showing a flash message
    pub fn index(&self, error: Option<&str>) -> Result<String, TemplateError> {
        let mut context = Context::new();
        if let Some(error) = error.filter(|e| !e.is_empty()) {
            context.insert("error", error);
        }
        self.render("index.html", &context)
    }

    /// Forecast result page
    pub fn weather(&self, weather: &ForecastResponse) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("weather", weather);
        self.render("weather.html", &context)
    }

    /// Generic error page
    pub fn error(&self, message: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("error", message);
        self.render("error.html", &context)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(name, context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }
}
