//! Style, format, indent and normalize transformations
//!
//! Styling is always applied before formatting. Wrapping a formatted line
//! in a style would put the style markers around the block prefix too, so
//! the only way to do both is [`style_and_format`].

use crate::catalog;
use crate::{FormatOption, StyleOption};
use std::fmt::Display;

/// Wrap `text` on both sides with the marker for `style`.
///
/// # Examples
///
/// ```
/// use mdout_text::{style, StyleOption};
///
/// assert_eq!(style("loud", StyleOption::Bold), "**loud**");
/// assert_eq!(style("plain", StyleOption::None), "plain");
/// ```
pub fn style(text: impl Display, style: StyleOption) -> String {
    let wrap = catalog::wrap(style);
    format!("{wrap}{text}{wrap}")
}

/// Prepend the marker for `format` to `text`.
///
/// If styling is also wanted use [`style_and_format`]; formatting first
/// and styling afterwards produces output that may not parse.
pub fn format(text: impl Display, format: FormatOption) -> String {
    format!("{}{text}", catalog::prefix(format))
}

/// Style `text`, then format the result.
///
/// # Examples
///
/// ```
/// use mdout_text::{style_and_format, FormatOption, StyleOption};
///
/// let line = style_and_format("Intro", StyleOption::Italic, FormatOption::Heading2);
/// assert_eq!(line, "## *Intro*");
/// ```
pub fn style_and_format(
    text: impl Display,
    style_option: StyleOption,
    format_option: FormatOption,
) -> String {
    format(style(text, style_option), format_option)
}

/// Ordered list prefix carrying `item_number` instead of the default
/// ordinal.
///
/// Only the raw text changes: Markdown renderers number list items
/// themselves regardless of the digits written.
pub fn ordered_list_marker(item_number: u32) -> String {
    let rest = catalog::ORDERED_LIST_ITEM_PREFIX.trim_start_matches(|c: char| c.is_ascii_digit());
    format!("{item_number}{rest}")
}

/// Style `text` and prefix it as ordered list item number `item_number`.
pub fn numbered_list_item(text: impl Display, item_number: u32, style_option: StyleOption) -> String {
    format!("{}{}", ordered_list_marker(item_number), style(text, style_option))
}

/// Prepend `level` list indent units to `text`.
///
/// Zero and negative levels leave the text untouched.
pub fn indent(text: &str, level: i32) -> String {
    match usize::try_from(level) {
        Ok(units) if units > 0 => {
            let mut out = catalog::LIST_ITEM_INDENT.repeat(units);
            out.push_str(text);
            out
        }
        _ => text.to_string(),
    }
}

/// Replace tabs with spaces and make every newline `\r\n`.
///
/// Existing `\r\n` pairs are collapsed to `\n` before all newlines are
/// expanded, so the result is the same however many times it is applied.
pub fn normalize(text: &str) -> String {
    text.replace('\t', catalog::TAB)
        .replace("\r\n", "\n")
        .replace('\n', "\r\n")
}
