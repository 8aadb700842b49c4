//! The "add a new party" form

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::party::NewParty;

/// The raw contents of the creation form, as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartyForm {
    pub name: String,
    pub description: String,
    /// Usually a `YYYY-MM-DD` string, as produced by a date input
    pub date: String,
    pub location: String,
}

/// Why a form cannot be submitted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// At least one field is empty, or only made of whitespace
    MissingField,
    /// The date cannot be understood
    InvalidDate,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingField => write!(f, "Please fill in all fields."),
            FormError::InvalidDate => write!(f, "Please enter a valid date."),
        }
    }
}

impl std::error::Error for FormError {}

impl PartyForm {
    pub fn new<S: ToString>(name: S, description: S, date: S, location: S) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            location: location.to_string(),
        }
    }

    /// Empty every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field is filled, and build the payload to send to the remote service
    pub fn validate(&self) -> Result<NewParty, FormError> {
        let name = self.name.trim();
        let description = self.description.trim();
        let date = self.date.trim();
        let location = self.location.trim();

        if name.is_empty() || description.is_empty() || date.is_empty() || location.is_empty() {
            return Err(FormError::MissingField);
        }

        Ok(NewParty {
            name: name.to_string(),
            description: description.to_string(),
            date: to_iso_date(date)?,
            location: location.to_string(),
        })
    }
}

/// Convert a date input to a full ISO-8601 UTC timestamp
///
/// A bare date means midnight UTC.
fn to_iso_date(input: &str) -> Result<String, FormError> {
    let datetime = match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => {
            let midnight = date.and_hms_opt(0, 0, 0).ok_or(FormError::InvalidDate)?;
            Utc.from_utc_datetime(&midnight)
        },
        Err(_) => DateTime::parse_from_rfc3339(input)
            .map_err(|_| FormError::InvalidDate)?
            .with_timezone(&Utc),
    };
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}
