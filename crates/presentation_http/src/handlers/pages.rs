//! HTML form pages

use application::ForecastRequest;
use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use super::MISSING_LOCATION;
use crate::state::AppState;

/// Query string of the index page
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Flash message from a failed search
    pub error: Option<String>,
}

/// Redirect back to the form with a flash message
pub fn flash_redirect(message: &str) -> Redirect {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    Redirect::to(&format!("/?error={encoded}"))
}

fn render(page: Result<String, crate::views::TemplateError>) -> Response {
    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        },
    }
}

/// Search form
pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    render(state.pages.index(query.error.as_deref()))
}

/// `GET /weather` has nothing to show; send the browser to the form
pub async fn weather_redirect() -> Redirect {
    Redirect::to("/")
}

/// Form submission: render results or bounce back with a flash message
#[instrument(skip(state, form))]
pub async fn submit_weather(
    State(state): State<AppState>,
    form: Result<Form<ForecastRequest>, FormRejection>,
) -> Response {
    let request = match form {
        Ok(Form(request)) => request.trimmed(),
        Err(rejection) => {
            warn!(error = %rejection, "Rejected form submission");
            return flash_redirect(MISSING_LOCATION).into_response();
        },
    };

    if !request.has_location() {
        return flash_redirect(MISSING_LOCATION).into_response();
    }

    match state.forecast_service.get_forecast(&request).await {
        Ok(weather) => {
            info!(location = %weather.location, "Rendered weather page");
            render(state.pages.weather(&weather))
        },
        Err(e) => {
            warn!(error = %e, kind = ?e.kind(), "Weather lookup failed");
            flash_redirect(&e.user_message()).into_response()
        },
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;

    use super::*;

    #[test]
    fn flash_redirect_encodes_message() {
        let response = flash_redirect("Location not found: Zipcode not found: 00000").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            "/?error=Location+not+found%3A+Zipcode+not+found%3A+00000"
        );
    }
}
