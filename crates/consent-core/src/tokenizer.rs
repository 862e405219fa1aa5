//! Splits a consent code into separator/token pairs.
//!
//! Separators are `-`, `_`, or a comma followed by any whitespace. The first
//! pair always has an empty separator. Tokens may be empty, e.g. between two
//! adjacent separators. Concatenating every separator and token gives back
//! the original input.

/// One symbol slot of a consent code together with the separator before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub separator: &'a str,
    pub text: &'a str,
}

fn is_separator_start(ch: char) -> bool {
    matches!(ch, '-' | '_' | ',')
}

/// Tokenize `code`. Always yields at least one pair.
pub fn tokenize(code: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut separator_start = 0;
    let mut pos = 0;
    loop {
        let rest = &code[pos..];
        let token_len = rest.find(is_separator_start).unwrap_or(rest.len());
        tokens.push(RawToken {
            separator: &code[separator_start..pos],
            text: &rest[..token_len],
        });
        pos += token_len;

        let mut chars = code[pos..].chars();
        separator_start = pos;
        match chars.next() {
            None => break,
            Some(',') => {
                pos += 1;
                let whitespace: usize = chars
                    .take_while(|ch| ch.is_whitespace())
                    .map(char::len_utf8)
                    .sum();
                pos += whitespace;
            }
            Some(_) => pos += 1,
        }
    }
    tokens
}
