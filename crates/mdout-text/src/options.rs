//! Style and format option sets

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An inline Markdown style wrapped around text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleOption {
    #[default]
    None,
    /// `*text*`
    Italic,
    /// `**text**`
    Bold,
    /// `***text***`
    BoldItalic,
    /// `` `text` ``
    Code,
    /// `~~text~~`
    StrikeThrough,
}

impl StyleOption {
    /// Every style, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Italic,
        Self::Bold,
        Self::BoldItalic,
        Self::Code,
        Self::StrikeThrough,
    ];

    /// Kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Italic => "italic",
            Self::Bold => "bold",
            Self::BoldItalic => "bold-italic",
            Self::Code => "code",
            Self::StrikeThrough => "strike-through",
        }
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match fold_name(s).as_str() {
            "none" => Ok(Self::None),
            "italic" => Ok(Self::Italic),
            "bold" => Ok(Self::Bold),
            "bolditalic" => Ok(Self::BoldItalic),
            "code" => Ok(Self::Code),
            "strikethrough" => Ok(Self::StrikeThrough),
            _ => Err(Error::invalid_option("style", s)),
        }
    }
}

impl TryFrom<u8> for StyleOption {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| Error::invalid_option("style", ordinal.to_string()))
    }
}

/// A block-level Markdown format prefixed to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatOption {
    #[default]
    None,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Quote,
    UnorderedListItem,
    OrderedListItem,
}

impl FormatOption {
    /// Every format, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::None,
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Heading4,
        Self::Heading5,
        Self::Heading6,
        Self::Quote,
        Self::UnorderedListItem,
        Self::OrderedListItem,
    ];

    /// Heading format for `level` (1 through 6).
    pub fn heading(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::Heading1),
            2 => Ok(Self::Heading2),
            3 => Ok(Self::Heading3),
            4 => Ok(Self::Heading4),
            5 => Ok(Self::Heading5),
            6 => Ok(Self::Heading6),
            _ => Err(Error::invalid_option("heading level", level.to_string())),
        }
    }

    /// Kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Heading4 => "heading4",
            Self::Heading5 => "heading5",
            Self::Heading6 => "heading6",
            Self::Quote => "quote",
            Self::UnorderedListItem => "unordered-list-item",
            Self::OrderedListItem => "ordered-list-item",
        }
    }
}

impl fmt::Display for FormatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match fold_name(s).as_str() {
            "none" => Ok(Self::None),
            "heading1" => Ok(Self::Heading1),
            "heading2" => Ok(Self::Heading2),
            "heading3" => Ok(Self::Heading3),
            "heading4" => Ok(Self::Heading4),
            "heading5" => Ok(Self::Heading5),
            "heading6" => Ok(Self::Heading6),
            "quote" => Ok(Self::Quote),
            "unorderedlistitem" => Ok(Self::UnorderedListItem),
            "orderedlistitem" => Ok(Self::OrderedListItem),
            _ => Err(Error::invalid_option("format", s)),
        }
    }
}

impl TryFrom<u8> for FormatOption {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| Error::invalid_option("format", ordinal.to_string()))
    }
}

/// Lowercase and drop separators so `BoldItalic`, `bold-italic` and
/// `bold_italic` all compare equal.
fn fold_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
