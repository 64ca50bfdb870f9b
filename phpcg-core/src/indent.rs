//! Indentation configuration for generated PHP.

use serde::{Deserialize, Deserializer};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PSR-2).
    pub const PHP: Self = Self::Spaces(4);

    /// One indent level as text. Widths above 16 are capped.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "                ";
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}

/// Accepts either a number of spaces or the string `"tab"`.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Width(u8),
            Named(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Width(n) => Ok(Self::Spaces(n)),
            Repr::Named(s) if s.eq_ignore_ascii_case("tab") => Ok(Self::Tab),
            Repr::Named(s) => Err(serde::de::Error::custom(format!(
                "invalid indent '{s}', expected a number of spaces or \"tab\""
            ))),
        }
    }
}
