use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the owner keeps a persisted active tab between page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceType {
    #[default]
    Local,
    Session,
    Memory,
}

impl PersistenceType {
    pub fn code(&self) -> &'static str {
        match self {
            PersistenceType::Local => "local",
            PersistenceType::Session => "session",
            PersistenceType::Memory => "memory",
        }
    }

    pub fn all() -> Vec<PersistenceType> {
        vec![
            PersistenceType::Local,
            PersistenceType::Session,
            PersistenceType::Memory,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "local" => Some(PersistenceType::Local),
            "session" => Some(PersistenceType::Session),
            "memory" => Some(PersistenceType::Memory),
            _ => None,
        }
    }
}

impl fmt::Display for PersistenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersistenceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown persistence type: {}", s))
    }
}
