//! Marker strings for every style and format option.
//!
//! These literals are the output wire format: separators must match byte
//! for byte.

use crate::{FormatOption, StyleOption};

/// Replacement for a tab character (four spaces).
pub const TAB: &str = "    ";

/// Hard line break: a newline followed by two spaces.
pub const LINE_BREAK: &str = "\r\n  ";

/// Paragraph break: two newlines.
pub const PARAGRAPH_BREAK: &str = "\r\n\r\n";

pub const ITALIC_WRAP: &str = "*";
pub const BOLD_WRAP: &str = "**";
/// Italic wrap followed by bold wrap.
pub const BOLD_ITALIC_WRAP: &str = "***";
pub const CODE_WRAP: &str = "`";
pub const STRIKE_THROUGH_WRAP: &str = "~~";

pub const HEADING1_PREFIX: &str = "# ";
pub const HEADING2_PREFIX: &str = "## ";
pub const HEADING3_PREFIX: &str = "### ";
pub const HEADING4_PREFIX: &str = "#### ";
pub const HEADING5_PREFIX: &str = "##### ";
pub const HEADING6_PREFIX: &str = "###### ";
pub const QUOTE_PREFIX: &str = "> ";
pub const UNORDERED_LIST_ITEM_PREFIX: &str = "- ";

/// Ordinal written into [`ORDERED_LIST_ITEM_PREFIX`].
pub const DEFAULT_LIST_ITEM_NUMBER: u32 = 1;
pub const ORDERED_LIST_ITEM_PREFIX: &str = "1. ";

/// Indent unit for nested list items. Five spaces line continuation text
/// up under a two or three character list marker.
pub const LIST_ITEM_INDENT: &str = "     ";

/// The string wrapped around both sides of text for `style`.
pub fn wrap(style: StyleOption) -> &'static str {
    match style {
        StyleOption::None => "",
        StyleOption::Italic => ITALIC_WRAP,
        StyleOption::Bold => BOLD_WRAP,
        StyleOption::BoldItalic => BOLD_ITALIC_WRAP,
        StyleOption::Code => CODE_WRAP,
        StyleOption::StrikeThrough => STRIKE_THROUGH_WRAP,
    }
}

/// The string prepended to text for `format`.
pub fn prefix(format: FormatOption) -> &'static str {
    match format {
        FormatOption::None => "",
        FormatOption::Heading1 => HEADING1_PREFIX,
        FormatOption::Heading2 => HEADING2_PREFIX,
        FormatOption::Heading3 => HEADING3_PREFIX,
        FormatOption::Heading4 => HEADING4_PREFIX,
        FormatOption::Heading5 => HEADING5_PREFIX,
        FormatOption::Heading6 => HEADING6_PREFIX,
        FormatOption::Quote => QUOTE_PREFIX,
        FormatOption::UnorderedListItem => UNORDERED_LIST_ITEM_PREFIX,
        FormatOption::OrderedListItem => ORDERED_LIST_ITEM_PREFIX,
    }
}
