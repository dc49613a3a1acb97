use thiserror::Error;

/// A source document did not have the shape the extractors expect.
///
/// Extraction is strict: any of these aborts the whole category, since a
/// silently defaulted field would corrupt identity matching later on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{weapon}: missing required field '{field}'")]
    Missing { weapon: String, field: &'static str },

    #[error("{weapon}: unrecognized {field} '{token}'")]
    Unrecognized {
        weapon: String,
        field: &'static str,
        token: String,
    },

    #[error("{weapon}: malformed {field}: {message}")]
    Malformed {
        weapon: String,
        field: &'static str,
        message: String,
    },

    #[error("malformed document: {0}")]
    Document(String),
}

impl FormatError {
    pub fn missing(weapon: impl Into<String>, field: &'static str) -> Self {
        Self::Missing {
            weapon: weapon.into(),
            field,
        }
    }

    pub fn unrecognized(
        weapon: impl Into<String>,
        field: &'static str,
        token: impl Into<String>,
    ) -> Self {
        Self::Unrecognized {
            weapon: weapon.into(),
            field,
            token: token.into(),
        }
    }

    pub fn malformed(
        weapon: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            weapon: weapon.into(),
            field,
            message: message.into(),
        }
    }

    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Name of the weapon being extracted when the error occurred.
    pub fn weapon(&self) -> Option<&str> {
        match self {
            Self::Missing { weapon, .. }
            | Self::Unrecognized { weapon, .. }
            | Self::Malformed { weapon, .. } => Some(weapon),
            Self::Document(_) => None,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field, .. }
            | Self::Unrecognized { field, .. }
            | Self::Malformed { field, .. } => Some(field),
            Self::Document(_) => None,
        }
    }
}
