//! HTTP request handlers

pub mod fallback;
pub mod health;
pub mod pages;
pub mod weather;

/// Message for requests that name no usable location
pub(crate) const MISSING_LOCATION: &str =
    "Please provide either a zipcode or city with state/country";
