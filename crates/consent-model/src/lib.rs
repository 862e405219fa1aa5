pub mod description;
pub mod error;
pub mod flags;
pub mod symbol;

pub use description::{ConsentDescription, DecodedConsent, ERROR_TITLE, UNSPECIFIED};
pub use error::DecodeError;
pub use flags::{ConsentFlag, ConsentFlags};
pub use symbol::{LongText, PARAM_PLACEHOLDER, ParamRequirement, SymbolClass, SymbolDefinition};
