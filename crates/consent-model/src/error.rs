use thiserror::Error;

use crate::symbol::SymbolClass;

/// First problem found while scanning a consent code.
///
/// Decoding never fails outright; this is carried inside the decoded record
/// and rendered into its long description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unknown symbol \"{name}\"")]
    UnknownSymbol { name: String },
    #[error("Invalid position for {class} symbol \"{name}\"")]
    InvalidPosition { class: SymbolClass, name: String },
    #[error("Missing required parameter to \"{name}\"")]
    MissingParameter { name: String },
}

impl DecodeError {
    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        Self::UnknownSymbol { name: name.into() }
    }

    pub fn invalid_position(class: SymbolClass, name: impl Into<String>) -> Self {
        Self::InvalidPosition {
            class,
            name: name.into(),
        }
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Name of the symbol the error refers to.
    pub fn symbol(&self) -> &str {
        match self {
            Self::UnknownSymbol { name }
            | Self::InvalidPosition { name, .. }
            | Self::MissingParameter { name } => name,
        }
    }
}
