//! Configuration structures for ticket parsing.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Month-name table used to resolve the long date format.
///
/// Position in the table is the month number minus one. The table travels as
/// an explicit value inside the parser configuration; nothing touches
/// process-wide locale state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthNames {
    names: [String; 12],
}

impl MonthNames {
    /// Full Italian month names, the ticket format's fixed convention.
    pub fn italian() -> Self {
        Self {
            names: [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ]
            .map(String::from),
        }
    }

    /// Build a table from custom names, ordered January through December.
    pub fn custom(names: [String; 12]) -> Self {
        Self { names }
    }

    /// Resolve a month name to its 1-based number, ignoring case.
    pub fn number_of(&self, name: &str) -> Option<u32> {
        let wanted = name.to_lowercase();
        self.names
            .iter()
            .position(|n| n.to_lowercase() == wanted)
            .map(|i| i as u32 + 1)
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::italian()
    }
}

/// Parsing policy carried by the ticket parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Reject candidate item rows with a wrong field count instead of
    /// silently skipping them.
    pub strict_rows: bool,

    /// Month names used when parsing the `Data:` header line.
    pub months: MonthNames,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict_rows: false,
            months: MonthNames::italian(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
