#![deny(unsafe_code)]

pub mod diseases;
pub mod error;
pub mod paths;
pub mod symbols;

pub use crate::diseases::{
    DiseaseEntry, load_default_disease_table, load_disease_table, parse_disease_table,
};
pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, default_disease_table_path, standards_root};
pub use crate::symbols::{DISEASE_SYMBOL, SYMBOL_DEFINITIONS};
