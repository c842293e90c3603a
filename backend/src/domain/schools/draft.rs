//! Candidate school records and their validation.

use std::fmt;

use geodesy::{CoordinateError, Coordinates, validate_latitude, validate_longitude};

use super::NewSchool;

/// A single violated rule.
///
/// The `Display` output is the message shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchoolValidationError {
    #[error("School name is required")]
    MissingName,
    #[error("School name must be at most 255 characters")]
    NameTooLong,
    #[error("Address is required")]
    MissingAddress,
    #[error("Address must be at most 500 characters")]
    AddressTooLong,
    #[error("Valid latitude is required")]
    InvalidLatitude,
    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("Valid longitude is required")]
    InvalidLongitude,
    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

/// Longest accepted school name, in characters.
pub const MAX_NAME_CHARS: usize = 255;

/// Longest accepted address, in characters.
pub const MAX_ADDRESS_CHARS: usize = 500;

/// Every rule a draft violated, in rule order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolValidationErrors(Vec<SchoolValidationError>);

impl SchoolValidationErrors {
    pub(super) fn new(errors: Vec<SchoolValidationError>) -> Self {
        Self(errors)
    }

    /// Client-facing messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for SchoolValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for SchoolValidationErrors {}

/// Untyped school submission as received from a client.
///
/// Coordinates arrive as text. JSON numbers are rendered to their decimal
/// form by the adapter before reaching this type, so `0` stays distinct from
/// an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolDraft {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl SchoolDraft {
    /// Check every rule and collect all violations.
    ///
    /// # Examples
    /// ```
    /// use school_locator::domain::{SchoolDraft, SchoolValidationError};
    ///
    /// let draft = SchoolDraft {
    ///     name: Some(String::new()),
    ///     address: Some("1 Road".into()),
    ///     latitude: Some("0".into()),
    ///     longitude: Some("0".into()),
    /// };
    /// assert_eq!(draft.violations(), vec![SchoolValidationError::MissingName]);
    /// ```
    pub fn violations(&self) -> Vec<SchoolValidationError> {
        let mut errors = Vec::new();
        errors.extend(name_violation(self.name.as_deref().unwrap_or_default()));
        errors.extend(address_violation(self.address.as_deref().unwrap_or_default()));
        if let Err(err) = parse_latitude(self.latitude.as_deref()) {
            errors.push(err);
        }
        if let Err(err) = parse_longitude(self.longitude.as_deref()) {
            errors.push(err);
        }
        errors
    }

    /// Validate the draft, producing the record the store accepts.
    pub fn validate(self) -> Result<NewSchool, SchoolValidationErrors> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(SchoolValidationErrors::new(violations));
        }
        let latitude = parse_latitude(self.latitude.as_deref())
            .map_err(|err| SchoolValidationErrors::new(vec![err]))?;
        let longitude = parse_longitude(self.longitude.as_deref())
            .map_err(|err| SchoolValidationErrors::new(vec![err]))?;
        let location = Coordinates::new(latitude, longitude).map_err(|err| {
            SchoolValidationErrors::new(vec![match err {
                CoordinateError::NonFiniteLatitude => SchoolValidationError::InvalidLatitude,
                CoordinateError::LatitudeOutOfRange { .. } => {
                    SchoolValidationError::LatitudeOutOfRange
                }
                CoordinateError::NonFiniteLongitude => SchoolValidationError::InvalidLongitude,
                CoordinateError::LongitudeOutOfRange { .. } => {
                    SchoolValidationError::LongitudeOutOfRange
                }
            }])
        })?;
        NewSchool::new(
            self.name.unwrap_or_default(),
            self.address.unwrap_or_default(),
            location,
        )
    }
}

/// Rule broken by a school name, if any. Length is measured after trimming.
pub(super) fn name_violation(name: &str) -> Option<SchoolValidationError> {
    text_violation(
        name,
        MAX_NAME_CHARS,
        SchoolValidationError::MissingName,
        SchoolValidationError::NameTooLong,
    )
}

/// Rule broken by an address, if any. Length is measured after trimming.
pub(super) fn address_violation(address: &str) -> Option<SchoolValidationError> {
    text_violation(
        address,
        MAX_ADDRESS_CHARS,
        SchoolValidationError::MissingAddress,
        SchoolValidationError::AddressTooLong,
    )
}

fn text_violation(
    text: &str,
    max_chars: usize,
    missing: SchoolValidationError,
    too_long: SchoolValidationError,
) -> Option<SchoolValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Some(missing)
    } else if trimmed.chars().count() > max_chars {
        Some(too_long)
    } else {
        None
    }
}

/// Parse a decimal number, treating blank input as absent.
///
/// The whole trimmed text must be a number: unlike JavaScript's
/// `parseFloat`, a numeric prefix such as `12abc` is rejected rather than
/// read as `12`. `NaN` and infinities are rejected too.
pub(super) fn parse_number(value: Option<&str>) -> Option<f64> {
    let text = value?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn parse_latitude(value: Option<&str>) -> Result<f64, SchoolValidationError> {
    let latitude = parse_number(value).ok_or(SchoolValidationError::InvalidLatitude)?;
    validate_latitude(latitude).map_err(|_| SchoolValidationError::LatitudeOutOfRange)?;
    Ok(latitude)
}

fn parse_longitude(value: Option<&str>) -> Result<f64, SchoolValidationError> {
    let longitude = parse_number(value).ok_or(SchoolValidationError::InvalidLongitude)?;
    validate_longitude(longitude).map_err(|_| SchoolValidationError::LongitudeOutOfRange)?;
    Ok(longitude)
}
