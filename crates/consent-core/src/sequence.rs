//! Symbol sequence state machine.
//!
//! Walks classified tokens left to right. The first recognized symbol must be
//! primary; everything after it must be secondary. Parameterized symbols
//! absorb the unknown tokens that follow them (and, for `DS`, any tokens that
//! continue a disease abbreviation in the trie). The scan never stops early,
//! so flags stay accurate when the code is malformed; only the first problem
//! is reported.

use consent_model::{
    ConsentFlag, DecodeError, DecodedConsent, ERROR_TITLE, SymbolClass, SymbolDefinition,
};
use consent_standards::DISEASE_SYMBOL;
use tracing::trace;

use crate::classifier::{ResolvedToken, SymbolRef};
use crate::trie::{DiseaseTrie, DiseaseTrieNode};

/// Prefix of the long description when decoding failed.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Parameter text absorbed after a parameterized symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsorbedParameter<'t> {
    /// Raw text, joined with the original separators.
    pub text: String,
    /// Number of tokens absorbed.
    pub consumed: usize,
    /// Trie position reached, if the parameter was matched against diseases.
    pub cursor: Option<&'t DiseaseTrieNode>,
}

impl<'t> AbsorbedParameter<'t> {
    /// Full disease name when the text spelled a known abbreviation.
    pub fn disease_name(&self) -> Option<&'t str> {
        self.cursor.and_then(DiseaseTrieNode::value)
    }
}

/// Greedily collect the parameter following `tokens[symbol_index]`.
///
/// Unknown tokens are always absorbed. With a trie cursor, known symbols are
/// absorbed too while they continue an abbreviation (`DS-EP-SZ` reads `SZ`
/// as part of the disease even if `SZ` were a symbol).
pub fn absorb_parameter<'t>(
    tokens: &[ResolvedToken<'_>],
    symbol_index: usize,
    trie_root: Option<&'t DiseaseTrieNode>,
) -> AbsorbedParameter<'t> {
    let mut text = String::new();
    let mut cursor = trie_root;
    let mut consumed = 0;
    for token in tokens.iter().skip(symbol_index + 1) {
        let continues_abbreviation = cursor.is_some_and(|node| node.has_child(token.name));
        if !token.is_parameter() && !continues_abbreviation {
            break;
        }
        if consumed > 0 {
            text.push_str(token.separator);
        }
        text.push_str(token.name);
        cursor = cursor.and_then(|node| node.child(token.name));
        consumed += 1;
    }
    AbsorbedParameter {
        text,
        consumed,
        cursor,
    }
}

struct SequenceState {
    expected: SymbolClass,
    short: String,
    long: String,
    paren_open: bool,
    error: Option<DecodeError>,
    record: DecodedConsent,
}

impl SequenceState {
    fn new() -> Self {
        Self {
            expected: SymbolClass::Primary,
            short: String::new(),
            long: String::new(),
            paren_open: false,
            error: None,
            record: DecodedConsent::default(),
        }
    }

    fn record_error(&mut self, error: DecodeError) {
        trace!(%error, "consent code error");
        self.error.get_or_insert(error);
    }

    fn open_paren(&mut self) {
        self.short.push_str(" (");
        self.paren_open = true;
    }

    /// Process the token at `index` and return how many tokens it used.
    fn step(&mut self, tokens: &[ResolvedToken<'_>], index: usize, diseases: &DiseaseTrie) -> usize {
        let token = &tokens[index];
        let def = match token.symbol {
            SymbolRef::Unknown(name) => {
                self.record_error(DecodeError::unknown_symbol(name));
                return 1;
            }
            SymbolRef::Known(def) if def.class != self.expected => {
                self.record_error(DecodeError::invalid_position(def.class, def.name));
                return 1;
            }
            SymbolRef::Known(def) => def,
        };

        if let Some(flag) = ConsentFlag::from_symbol(def.name) {
            self.record.flags.set(flag);
        }

        let is_primary = self.expected == SymbolClass::Primary;
        if is_primary {
            self.short.push_str(def.short_text);
        } else {
            if !self.short.ends_with('(') {
                self.short.push_str(", ");
            }
            self.short.push_str(def.name);
            self.long.push(' ');
        }

        let consumed = if def.requires_param() {
            self.apply_parameter(tokens, index, def, diseases)
        } else {
            if is_primary && index + 1 < tokens.len() {
                self.open_paren();
            }
            self.long.push_str(def.long_text.raw());
            1
        };

        if is_primary {
            self.expected = SymbolClass::Secondary;
        }
        consumed
    }

    fn apply_parameter(
        &mut self,
        tokens: &[ResolvedToken<'_>],
        index: usize,
        def: &SymbolDefinition,
        diseases: &DiseaseTrie,
    ) -> usize {
        let is_disease = def.name == DISEASE_SYMBOL;
        let trie_root = is_disease.then_some(diseases.root());
        let param = absorb_parameter(tokens, index, trie_root);
        if param.consumed == 0 {
            self.record_error(DecodeError::missing_parameter(def.name));
        }

        let disease_name = param.disease_name();
        let display = match disease_name {
            Some(name) => name.to_string(),
            None if is_disease => format!("disease \"{}\"", param.text),
            None => param.text.clone(),
        };

        if def.class == SymbolClass::Primary {
            self.open_paren();
        } else {
            let separator = tokens.get(index + 1).map_or("", |next| next.separator);
            self.short.push_str(separator);
        }
        self.short.push_str(&param.text);
        self.long.push_str(&def.long_text.render(&display));

        if is_disease {
            if let Some(name) = disease_name {
                self.record.disease_text = name.to_string();
            }
            self.record.disease_code = param.text;
        }
        1 + param.consumed
    }

    fn finish(mut self) -> DecodedConsent {
        if self.paren_open {
            self.short.push(')');
        }
        let (long_description, title) = match &self.error {
            None => (self.long, self.short),
            Some(error) => (format!("{ERROR_PREFIX}{error}"), ERROR_TITLE.to_string()),
        };
        DecodedConsent {
            long_description,
            title,
            error: self.error,
            ..self.record
        }
    }
}

/// Run the state machine over classified tokens.
pub fn decode_sequence(tokens: &[ResolvedToken<'_>], diseases: &DiseaseTrie) -> DecodedConsent {
    let mut state = SequenceState::new();
    let mut index = 0;
    while index < tokens.len() {
        index += state.step(tokens, index, diseases);
    }
    state.finish()
}
