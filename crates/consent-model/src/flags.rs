//! Symbols that get their own boolean field in the output record.

use serde::Serialize;
use std::fmt;

/// A consent symbol reported as a boolean output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsentFlag {
    Nres,
    Gru,
    Hmb,
    Irb,
    Pub,
    Col,
    Npu,
    Mds,
    Gso,
}

impl ConsentFlag {
    /// All flagged symbols, in output field order.
    pub const ALL: [ConsentFlag; 9] = [
        ConsentFlag::Nres,
        ConsentFlag::Gru,
        ConsentFlag::Hmb,
        ConsentFlag::Irb,
        ConsentFlag::Pub,
        ConsentFlag::Col,
        ConsentFlag::Npu,
        ConsentFlag::Mds,
        ConsentFlag::Gso,
    ];

    /// Symbol name as written in consent codes and output field names.
    pub fn symbol(&self) -> &'static str {
        match self {
            ConsentFlag::Nres => "NRES",
            ConsentFlag::Gru => "GRU",
            ConsentFlag::Hmb => "HMB",
            ConsentFlag::Irb => "IRB",
            ConsentFlag::Pub => "PUB",
            ConsentFlag::Col => "COL",
            ConsentFlag::Npu => "NPU",
            ConsentFlag::Mds => "MDS",
            ConsentFlag::Gso => "GSO",
        }
    }

    pub fn from_symbol(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.symbol() == name)
    }
}

impl fmt::Display for ConsentFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Presence of each flagged symbol in a decoded code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsentFlags {
    #[serde(rename = "NRES")]
    pub nres: bool,
    #[serde(rename = "GRU")]
    pub gru: bool,
    #[serde(rename = "HMB")]
    pub hmb: bool,
    #[serde(rename = "IRB")]
    pub irb: bool,
    #[serde(rename = "PUB")]
    pub publication: bool,
    #[serde(rename = "COL")]
    pub col: bool,
    #[serde(rename = "NPU")]
    pub npu: bool,
    #[serde(rename = "MDS")]
    pub mds: bool,
    #[serde(rename = "GSO")]
    pub gso: bool,
}

impl ConsentFlags {
    pub fn get(&self, flag: ConsentFlag) -> bool {
        match flag {
            ConsentFlag::Nres => self.nres,
            ConsentFlag::Gru => self.gru,
            ConsentFlag::Hmb => self.hmb,
            ConsentFlag::Irb => self.irb,
            ConsentFlag::Pub => self.publication,
            ConsentFlag::Col => self.col,
            ConsentFlag::Npu => self.npu,
            ConsentFlag::Mds => self.mds,
            ConsentFlag::Gso => self.gso,
        }
    }

    pub fn set(&mut self, flag: ConsentFlag) {
        let slot = match flag {
            ConsentFlag::Nres => &mut self.nres,
            ConsentFlag::Gru => &mut self.gru,
            ConsentFlag::Hmb => &mut self.hmb,
            ConsentFlag::Irb => &mut self.irb,
            ConsentFlag::Pub => &mut self.publication,
            ConsentFlag::Col => &mut self.col,
            ConsentFlag::Npu => &mut self.npu,
            ConsentFlag::Mds => &mut self.mds,
            ConsentFlag::Gso => &mut self.gso,
        };
        *slot = true;
    }

    /// Flags that are set, in output field order.
    pub fn present(&self) -> Vec<ConsentFlag> {
        ConsentFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_matches_exact_names_only() {
        assert_eq!(ConsentFlag::from_symbol("IRB"), Some(ConsentFlag::Irb));
        assert_eq!(ConsentFlag::from_symbol("irb"), None);
        assert_eq!(ConsentFlag::from_symbol("DS"), None);
    }

    #[test]
    fn set_and_present() {
        let mut flags = ConsentFlags::default();
        flags.set(ConsentFlag::Gso);
        flags.set(ConsentFlag::Gru);
        assert!(flags.get(ConsentFlag::Gru));
        assert!(!flags.get(ConsentFlag::Nres));
        assert_eq!(flags.present(), vec![ConsentFlag::Gru, ConsentFlag::Gso]);
    }
}
