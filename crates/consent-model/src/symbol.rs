//! Consent symbol definitions.
//!
//! A consent code is a sequence of symbols. Exactly one primary symbol comes
//! first, followed by any number of secondary symbols. Some symbols take a
//! parameter (a disease abbreviation, a research type, a region, ...).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder substituted by the resolved parameter text in long-text templates.
pub const PARAM_PLACEHOLDER: &str = "[]";

/// Ordering tier of a consent symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolClass {
    /// Must be the first symbol of a code.
    Primary,
    /// May follow the primary symbol, any number of times.
    Secondary,
}

impl SymbolClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolClass::Primary => "primary",
            SymbolClass::Secondary => "secondary",
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SymbolClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(SymbolClass::Primary),
            "secondary" => Ok(SymbolClass::Secondary),
            _ => Err(format!("Unknown symbol class: {s}")),
        }
    }
}

/// Whether a symbol takes a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamRequirement {
    None,
    Required,
}

impl ParamRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamRequirement::None => "none",
            ParamRequirement::Required => "required",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ParamRequirement::Required)
    }
}

impl fmt::Display for ParamRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Long description of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LongText {
    /// Fixed sentence for symbols without a parameter.
    Plain(&'static str),
    /// Sentence containing exactly one [`PARAM_PLACEHOLDER`].
    Template(&'static str),
}

impl LongText {
    /// Render the long text, substituting `param` into templates.
    ///
    /// Plain texts ignore `param`.
    pub fn render(&self, param: &str) -> String {
        match self {
            LongText::Plain(text) => (*text).to_string(),
            LongText::Template(template) => template.replacen(PARAM_PLACEHOLDER, param, 1),
        }
    }

    pub fn raw(&self) -> &'static str {
        match self {
            LongText::Plain(text) | LongText::Template(text) => text,
        }
    }
}

/// A single entry of the consent symbol catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolDefinition {
    pub name: &'static str,
    pub class: SymbolClass,
    pub param: ParamRequirement,
    /// Text used in the title when this symbol is primary.
    pub short_text: &'static str,
    pub long_text: LongText,
}

impl SymbolDefinition {
    pub const fn primary(name: &'static str, short_text: &'static str, long: &'static str) -> Self {
        Self {
            name,
            class: SymbolClass::Primary,
            param: ParamRequirement::None,
            short_text,
            long_text: LongText::Plain(long),
        }
    }

    pub const fn secondary(
        name: &'static str,
        short_text: &'static str,
        long: &'static str,
    ) -> Self {
        Self {
            name,
            class: SymbolClass::Secondary,
            param: ParamRequirement::None,
            short_text,
            long_text: LongText::Plain(long),
        }
    }

    /// Turn this definition into one that requires a parameter rendered by `template`.
    pub const fn with_param(mut self, template: &'static str) -> Self {
        self.param = ParamRequirement::Required;
        self.long_text = LongText::Template(template);
        self
    }

    pub fn requires_param(&self) -> bool {
        self.param.is_required()
    }
}
