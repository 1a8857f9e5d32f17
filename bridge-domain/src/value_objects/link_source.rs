// Link provenance value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which Bloxlink endpoint a lookup is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    Guild,
    Global,
}

/// Which lookup stage produced (or failed to produce) a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    Guild,
    Global,
    None,
    Error,
}

impl LinkSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkSource::Guild => "guild",
            LinkSource::Global => "global",
            LinkSource::None => "none",
            LinkSource::Error => "error",
        }
    }
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
