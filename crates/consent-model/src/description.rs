//! Output records produced by the consent code decoder.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::DecodeError;
use crate::flags::{ConsentFlag, ConsentFlags};

/// Literal written into every field of a record for a code that was never filled in.
pub const UNSPECIFIED: &str = "Unspecified";

/// Title used in place of the short text when decoding hit an error.
pub const ERROR_TITLE: &str = "ERROR";

/// Result of decoding a real consent code.
///
/// Flags and disease fields are populated even when `error` is set, because
/// the decoder always scans the whole code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedConsent {
    #[serde(flatten)]
    pub flags: ConsentFlags,
    /// Raw parameter text of the DS symbol.
    pub disease_code: String,
    /// Full disease name when the DS parameter matched a known abbreviation.
    pub disease_text: String,
    pub long_description: String,
    pub title: String,
    #[serde(skip)]
    pub error: Option<DecodeError>,
}

impl DecodedConsent {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Human-readable description of a consent code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentDescription {
    /// The code was empty or a placeholder such as `TBD`.
    Unspecified,
    Decoded(DecodedConsent),
}

impl ConsentDescription {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, ConsentDescription::Unspecified)
    }

    pub fn decoded(&self) -> Option<&DecodedConsent> {
        match self {
            ConsentDescription::Unspecified => None,
            ConsentDescription::Decoded(decoded) => Some(decoded),
        }
    }

    /// Flag value, or `None` for unspecified codes.
    pub fn flag(&self, flag: ConsentFlag) -> Option<bool> {
        self.decoded().map(|decoded| decoded.flags.get(flag))
    }

    pub fn title(&self) -> &str {
        self.decoded()
            .map_or(UNSPECIFIED, |decoded| decoded.title.as_str())
    }

    pub fn long_description(&self) -> &str {
        self.decoded()
            .map_or(UNSPECIFIED, |decoded| decoded.long_description.as_str())
    }

    pub fn disease_code(&self) -> &str {
        self.decoded()
            .map_or(UNSPECIFIED, |decoded| decoded.disease_code.as_str())
    }

    pub fn disease_text(&self) -> &str {
        self.decoded()
            .map_or(UNSPECIFIED, |decoded| decoded.disease_text.as_str())
    }

    pub fn error(&self) -> Option<&DecodeError> {
        self.decoded().and_then(|decoded| decoded.error.as_ref())
    }

    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }
}

impl Serialize for ConsentDescription {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConsentDescription::Decoded(decoded) => decoded.serialize(serializer),
            ConsentDescription::Unspecified => {
                let mut state =
                    serializer.serialize_struct("ConsentDescription", ConsentFlag::ALL.len() + 4)?;
                for flag in ConsentFlag::ALL {
                    state.serialize_field(flag.symbol(), UNSPECIFIED)?;
                }
                state.serialize_field("diseaseCode", UNSPECIFIED)?;
                state.serialize_field("diseaseText", UNSPECIFIED)?;
                state.serialize_field("longDescription", UNSPECIFIED)?;
                state.serialize_field("title", UNSPECIFIED)?;
                state.end()
            }
        }
    }
}
