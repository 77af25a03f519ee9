//! Prüfung der Texteingaben, bevor ein Polygon erstellt wird.
//!
//! Jede Funktion prüft genau ein Feld und liefert den geparsten Wert oder
//! einen [`InputError`], der Titel und Meldung für den Dialog mitbringt.

use super::state::MessageKind;
use crate::shared::{ID_DIGITS, MIN_SIDES};

/// Obergrenze für Seiten, damit die Eckpunkt-Liste im Speicher bleibt.
pub const MAX_SIDES: u32 = 100_000;

/// Eingabefeld, auf das sich ein Fehler bezieht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// ID-Feld der Eingabemaske
    Id,
    /// ID-Feld des Such-Dialogs
    SearchId,
    /// Seitenzahl
    Sides,
    /// Startwinkel
    Angle,
    /// Radius
    Radius,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InputField::Id => "ID",
            InputField::SearchId => "Search ID",
            InputField::Sides => "number of sides",
            InputField::Angle => "angle",
            InputField::Radius => "radius",
        })
    }
}

/// Abgelehnte Eingabe
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a value for the {field}")]
    Missing { field: InputField },

    #[error("Invalid {field} {text} - {field} must be a valid 6 digit number e.g. 126658")]
    IdNotNumeric { field: InputField, text: String },

    #[error("Invalid {field} {text} ({len} characters) - {field} must be a 6 digit number e.g. 126658")]
    IdLength {
        field: InputField,
        text: String,
        len: usize,
    },

    #[error("ID {id} already exists - use a new ID value")]
    DuplicateId { id: String },

    #[error("Invalid side number {text} - number of sides must be a whole integer number e.g. 8")]
    SidesNotInteger { text: String },

    #[error("Invalid side number {sides} - number of sides must be a positive whole number")]
    NegativeSides { sides: i64 },

    #[error(
        "Invalid side number {sides} - please enter three or above for a valid polygon \
         (0-2 sides give an empty display or a single straight line)"
    )]
    TooFewSides { sides: i64 },

    #[error("Invalid side number {sides} - at most {max} sides are supported")]
    TooManySides { sides: i64, max: u32 },

    #[error("Invalid angle {text} - angle must be a valid number (can be decimal)")]
    AngleNotNumeric { text: String },

    #[error("Invalid radius {text} - radius must be a valid number (can be decimal)")]
    RadiusNotNumeric { text: String },

    #[error("Invalid radius {radius} - radius must be a positive number such as 40")]
    NegativeRadius { radius: f64 },

    #[error("Radius set to 0 - polygon will not be displayed; enter a radius above 0")]
    ZeroRadius,
}

impl InputError {
    /// Feld, das nach der Meldung geleert wird.
    pub fn field(&self) -> InputField {
        match self {
            InputError::Missing { field }
            | InputError::IdNotNumeric { field, .. }
            | InputError::IdLength { field, .. } => *field,
            InputError::DuplicateId { .. } => InputField::Id,
            InputError::SidesNotInteger { .. }
            | InputError::NegativeSides { .. }
            | InputError::TooFewSides { .. }
            | InputError::TooManySides { .. } => InputField::Sides,
            InputError::AngleNotNumeric { .. } => InputField::Angle,
            InputError::RadiusNotNumeric { .. }
            | InputError::NegativeRadius { .. }
            | InputError::ZeroRadius => InputField::Radius,
        }
    }

    /// Fenstertitel der Meldung.
    pub fn title(&self) -> &'static str {
        match self {
            InputError::Missing { .. } => "Missing Value",
            InputError::IdNotNumeric { field, .. } | InputError::IdLength { field, .. } => {
                match field {
                    InputField::SearchId => "Invalid Search ID",
                    _ => "Invalid ID",
                }
            }
            InputError::DuplicateId { .. } => "Duplicate ID",
            InputError::SidesNotInteger { .. }
            | InputError::NegativeSides { .. }
            | InputError::TooFewSides { .. }
            | InputError::TooManySides { .. } => "Invalid Sides",
            InputError::AngleNotNumeric { .. } => "Invalid Angle",
            InputError::RadiusNotNumeric { .. }
            | InputError::NegativeRadius { .. }
            | InputError::ZeroRadius => "Invalid Radius",
        }
    }

    /// Fehlende Werte sind Warnungen, alles andere Fehler.
    pub fn kind(&self) -> MessageKind {
        match self {
            InputError::Missing { .. } => MessageKind::Warning,
            _ => MessageKind::Error,
        }
    }
}

fn non_empty(text: &str, field: InputField) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(InputError::Missing { field })
    } else {
        Ok(trimmed)
    }
}

fn six_digit_id(text: &str, field: InputField) -> Result<u32, InputError> {
    let text = non_empty(text, field)?;

    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::IdNotNumeric {
            field,
            text: text.to_string(),
        });
    }

    let len = text.chars().count();
    if len != ID_DIGITS {
        return Err(InputError::IdLength {
            field,
            text: text.to_string(),
            len,
        });
    }

    text.parse().map_err(|_| InputError::IdNotNumeric {
        field,
        text: text.to_string(),
    })
}

/// Prüft das ID-Feld der Eingabemaske (genau 6 Ziffern).
///
/// Duplikate prüft der Aufrufer gegen die Polygon-Liste.
pub fn validate_id(text: &str) -> Result<u32, InputError> {
    six_digit_id(text, InputField::Id)
}

/// Prüft die Such-ID (gleiche Regeln wie [`validate_id`]).
pub fn validate_search_id(text: &str) -> Result<u32, InputError> {
    six_digit_id(text, InputField::SearchId)
}

/// Prüft die Seitenzahl (ganze Zahl, mindestens 3).
pub fn validate_sides(text: &str) -> Result<u32, InputError> {
    let text = non_empty(text, InputField::Sides)?;
    let sides: i64 = text.parse().map_err(|_| InputError::SidesNotInteger {
        text: text.to_string(),
    })?;

    if sides < 0 {
        return Err(InputError::NegativeSides { sides });
    }
    if sides < i64::from(MIN_SIDES) {
        return Err(InputError::TooFewSides { sides });
    }
    if sides > i64::from(MAX_SIDES) {
        return Err(InputError::TooManySides {
            sides,
            max: MAX_SIDES,
        });
    }

    u32::try_from(sides).map_err(|_| InputError::SidesNotInteger {
        text: text.to_string(),
    })
}

/// Prüft den Startwinkel (beliebige endliche Dezimalzahl in Radiant).
pub fn validate_angle(text: &str) -> Result<f64, InputError> {
    let text = non_empty(text, InputField::Angle)?;
    text.parse::<f64>()
        .ok()
        .filter(|angle| angle.is_finite())
        .ok_or_else(|| InputError::AngleNotNumeric {
            text: text.to_string(),
        })
}

/// Prüft den Radius (endliche Dezimalzahl größer 0).
pub fn validate_radius(text: &str) -> Result<f64, InputError> {
    let text = non_empty(text, InputField::Radius)?;
    let radius = text
        .parse::<f64>()
        .ok()
        .filter(|radius| radius.is_finite())
        .ok_or_else(|| InputError::RadiusNotNumeric {
            text: text.to_string(),
        })?;

    if radius < 0.0 {
        return Err(InputError::NegativeRadius { radius });
    }
    if radius == 0.0 {
        return Err(InputError::ZeroRadius);
    }
    Ok(radius)
}
