//! Closed enumerations describing a chain SKU.
//!
//! Each enum parses case-insensitively from its display name ("Rose Gold")
//! as well as the snake-case form used in data files ("rose_gold").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Normalize an enum token for lookup: trim, lowercase, and fold `_`/`-`
/// into single spaces.
fn normalize_token(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Chain link style.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum ChainStyle {
    #[default]
    Rope,
    Curb,
    Figaro,
    Box,
    Franco,
    Cuban,
    Wheat,
    Snake,
}

impl ChainStyle {
    /// All styles in the order the inquiry form lists them.
    pub const ALL: [ChainStyle; 8] = [
        ChainStyle::Rope,
        ChainStyle::Curb,
        ChainStyle::Figaro,
        ChainStyle::Box,
        ChainStyle::Franco,
        ChainStyle::Cuban,
        ChainStyle::Wheat,
        ChainStyle::Snake,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainStyle::Rope => "Rope",
            ChainStyle::Curb => "Curb",
            ChainStyle::Figaro => "Figaro",
            ChainStyle::Box => "Box",
            ChainStyle::Franco => "Franco",
            ChainStyle::Cuban => "Cuban",
            ChainStyle::Wheat => "Wheat",
            ChainStyle::Snake => "Snake",
        }
    }
}

impl fmt::Display for ChainStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        ChainStyle::ALL
            .into_iter()
            .find(|style| style.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownStyle(s.to_string()))
    }
}

impl TryFrom<String> for ChainStyle {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainStyle> for String {
    fn from(value: ChainStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Base metal (plating colour) of a chain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Metal {
    #[default]
    Gold,
    Silver,
    RoseGold,
}

impl Metal {
    pub const ALL: [Metal; 3] = [Metal::Gold, Metal::Silver, Metal::RoseGold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
            Metal::RoseGold => "Rose Gold",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Metal::ALL
            .into_iter()
            .find(|metal| metal.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownMetal(s.to_string()))
    }
}

impl TryFrom<String> for Metal {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metal> for String {
    fn from(value: Metal) -> Self {
        value.as_str().to_string()
    }
}

/// Surface finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Finish {
    Polished,
    Matte,
    DiamondCut,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Polished, Finish::Matte, Finish::DiamondCut];

    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Polished => "Polished",
            Finish::Matte => "Matte",
            Finish::DiamondCut => "Diamond Cut",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Finish {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Finish::ALL
            .into_iter()
            .find(|finish| finish.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownFinish(s.to_string()))
    }
}

impl TryFrom<String> for Finish {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Finish> for String {
    fn from(value: Finish) -> Self {
        value.as_str().to_string()
    }
}
