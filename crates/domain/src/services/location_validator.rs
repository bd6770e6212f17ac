//! Syntactic checks for user-supplied location fields
//!
//! All checks trim their inputs first and never fail; they report
//! validity as a `bool`.

/// Check a US zipcode: five digits, optionally followed by `-` and four digits
///
/// # Examples
///
/// ```
/// use domain::services::validate_zipcode;
///
/// assert!(validate_zipcode("90210"));
/// assert!(validate_zipcode(" 90210-1234 "));
/// assert!(!validate_zipcode("9021"));
/// assert!(!validate_zipcode("90210-12"));
/// ```
#[must_use]
pub fn validate_zipcode(zipcode: &str) -> bool {
    let zipcode = zipcode.trim();
    let (base, extension) = match zipcode.split_once('-') {
        Some((base, extension)) => (base, Some(extension)),
        None => (zipcode, None),
    };

    is_digits(base, 5) && extension.is_none_or(|ext| is_digits(ext, 4))
}

/// Check that both city and state are non-blank
#[must_use]
pub fn validate_city_state(city: &str, state: &str) -> bool {
    !city.trim().is_empty() && !state.trim().is_empty()
}

/// Check that city, state and country are all non-blank
#[must_use]
pub fn validate_city_state_country(city: &str, state: &str, country: &str) -> bool {
    validate_city_state(city, state) && !country.trim().is_empty()
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
