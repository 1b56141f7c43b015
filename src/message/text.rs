// cz-emoji - A commit wizard writing emoji-flavoured commit messages.
// Copyright (C) 2024 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Text layout helpers.
//!
//! Widths are counted in terminal columns: most emojis take two.

use itertools::Itertools as _;
use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

/// The mark appended to truncated lines.
pub const ELLIPSIS: char = '…';

/// Truncates `line` to `width` columns, ellipsis included.
///
/// The cut happens at the last word boundary when there is one, so that words
/// are not split. A line that fits is returned untouched.
pub fn truncate(line: &str, width: usize) -> String {
    if line.width() <= width {
        return line.to_owned();
    }

    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));

    let mut used = 0;
    let mut kept_chars = 0;
    for character in line.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        kept_chars += 1;
    }

    let hard_cut: String = line.chars().take(kept_chars).collect();
    let cuts_a_word = line
        .chars()
        .nth(kept_chars)
        .is_some_and(|next| !next.is_whitespace());

    let kept = if cuts_a_word {
        hard_cut
            .rfind(char::is_whitespace)
            .and_then(|boundary| hard_cut.get(..boundary))
            .map(str::trim_end)
            .filter(|kept| !kept.is_empty())
            .unwrap_or(hard_cut.as_str())
    } else {
        hard_cut.trim_end()
    };

    format!("{kept}{ELLIPSIS}")
}

/// Wraps `text` at word boundaries so that lines fit in `width` columns.
///
/// Existing line breaks are kept, and runs of spaces are collapsed. Words
/// longer than `width` are put on their own line, not split. Wrapping an
/// already wrapped text with the same width gives the same text.
pub fn wrap(text: &str, width: usize) -> String {
    text.lines().map(|line| wrap_line(line, width)).join("\n")
}

/// Wraps a single line.
fn wrap_line(line: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.width();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    lines.push(current);
    lines.join("\n")
}
