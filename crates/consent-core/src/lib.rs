pub mod classifier;
pub mod decoder;
pub mod sequence;
pub mod tokenizer;
pub mod trie;

pub use classifier::{ResolvedToken, SymbolRef, SymbolTable, TokenClass, classify};
pub use decoder::{ConsentDecoder, SENTINEL_CODES, is_sentinel};
pub use sequence::{AbsorbedParameter, ERROR_PREFIX, absorb_parameter, decode_sequence};
pub use tokenizer::{RawToken, tokenize};
pub use trie::{DiseaseTrie, DiseaseTrieNode};
