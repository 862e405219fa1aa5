//! Symbol lookup for tokens.

use std::collections::BTreeMap;
use std::fmt;

use consent_model::{SymbolClass, SymbolDefinition};
use consent_standards::SYMBOL_DEFINITIONS;

use crate::tokenizer::RawToken;

/// Catalog of known consent symbols indexed by name.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_name: BTreeMap<&'static str, &'static SymbolDefinition>,
}

impl SymbolTable {
    pub fn new(definitions: &'static [SymbolDefinition]) -> Self {
        let by_name = definitions.iter().map(|def| (def.name, def)).collect();
        Self { by_name }
    }

    /// The built-in consent symbol catalog.
    pub fn standard() -> Self {
        Self::new(&SYMBOL_DEFINITIONS)
    }

    pub fn get(&self, name: &str) -> Option<&'static SymbolDefinition> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &'static SymbolDefinition> + '_ {
        self.by_name.values().copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Class a token takes part in during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Symbol(SymbolClass),
    /// Not a known symbol, so only usable as parameter text.
    Parameter,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenClass::Symbol(class) => write!(f, "{class}"),
            TokenClass::Parameter => write!(f, "parameter"),
        }
    }
}

/// What a token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRef<'a> {
    Known(&'static SymbolDefinition),
    Unknown(&'a str),
}

/// A token with its symbol resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedToken<'a> {
    pub separator: &'a str,
    pub name: &'a str,
    pub symbol: SymbolRef<'a>,
}

impl ResolvedToken<'_> {
    pub fn class(&self) -> TokenClass {
        match self.symbol {
            SymbolRef::Known(def) => TokenClass::Symbol(def.class),
            SymbolRef::Unknown(_) => TokenClass::Parameter,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self.symbol, SymbolRef::Unknown(_))
    }

    pub fn definition(&self) -> Option<&'static SymbolDefinition> {
        match self.symbol {
            SymbolRef::Known(def) => Some(def),
            SymbolRef::Unknown(_) => None,
        }
    }
}

/// Attach a symbol to every token by exact name.
pub fn classify<'a>(tokens: &[RawToken<'a>], symbols: &SymbolTable) -> Vec<ResolvedToken<'a>> {
    tokens
        .iter()
        .map(|token| ResolvedToken {
            separator: token.separator,
            name: token.text,
            symbol: symbols
                .get(token.text)
                .map_or(SymbolRef::Unknown(token.text), SymbolRef::Known),
        })
        .collect()
}
