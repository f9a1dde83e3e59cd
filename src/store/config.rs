//! Store configuration
//!
//! The draw style picks which store variant every cell of a grid uses;
//! the capacity bounds how many layers a single store tracks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayerPaintError, Result};

/// Default maximum number of layers tracked by one store
pub const DEFAULT_CAPACITY: usize = 1000;

/// Which store variant a grid's cells use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    /// One layer at a time; special inverts the output
    Set,
    /// Layers stack in insertion order; special reverses the stack
    #[serde(alias = "add")]
    Additive,
    /// Each layer type toggles on or off; special evicts the median name
    Sequence,
}

impl DrawStyle {
    /// All draw styles, in declaration order
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Additive, DrawStyle::Sequence];

    /// Lower-case name used in scripts and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Set => "set",
            DrawStyle::Additive => "additive",
            DrawStyle::Sequence => "sequence",
        }
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DrawStyle {
    type Err = LayerPaintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "set" => Ok(DrawStyle::Set),
            "add" | "additive" => Ok(DrawStyle::Additive),
            "sequence" => Ok(DrawStyle::Sequence),
            _ => Err(LayerPaintError::UnknownDrawStyle {
                style: s.to_string(),
            }),
        }
    }
}

/// Limits applied to every store of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of layers a store tracks; `add` beyond it is rejected
    pub capacity: usize,
}

impl StoreConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_style_parse() {
        assert_eq!("SET".parse::<DrawStyle>().unwrap(), DrawStyle::Set);
        assert_eq!("add".parse::<DrawStyle>().unwrap(), DrawStyle::Additive);
        assert_eq!("Sequence".parse::<DrawStyle>().unwrap(), DrawStyle::Sequence);
        assert!("stack".parse::<DrawStyle>().is_err());
    }

    #[test]
    fn test_draw_style_serde() {
        let style: DrawStyle = serde_json::from_str("\"add\"").unwrap();
        assert_eq!(style, DrawStyle::Additive);
        assert_eq!(serde_json::to_string(&DrawStyle::Sequence).unwrap(), "\"sequence\"");
    }

    #[test]
    fn test_store_config_default() {
        assert_eq!(StoreConfig::default().capacity, DEFAULT_CAPACITY);
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }
}
