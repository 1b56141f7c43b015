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

//! Formatting of the commit message.

pub mod text;

use std::sync::LazyLock;

use itertools::Itertools as _;
use regex::{Captures, Regex};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::{answers::Answers, catalog::CommitType, config::Config};

use self::text::{truncate, wrap};

/// The layout of the commit message.
///
/// Sections are separated by a blank line, and empty sections are omitted.
const MESSAGE_TEMPLATE: &str = "{{ head }}
{%- if body %}

{{ body }}
{%- endif %}
{%- if breaking %}

{{ breaking }}
{%- endif %}
{%- if footer %}

{{ footer }}
{%- endif %}
";

/// The prefix of the breaking change section.
const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE: ";

/// Matches the placeholders in the head line format.
#[expect(clippy::unwrap_used, reason = "The regex is known to be valid.")]
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(type|emoji|scope|subject)\}").unwrap());

/// Matches runs of whitespace.
#[expect(clippy::unwrap_used, reason = "The regex is known to be valid.")]
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Matches issue references like `#42`.
#[expect(clippy::unwrap_used, reason = "The regex is known to be valid.")]
static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+").unwrap());

/// Errors that can occur when formatting a commit message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The selected type is not in the configured types.
    #[error("The commit type `{key}` is not in the configured list of types")]
    UnknownType {
        /// The key of the selected type.
        key: String,
    },
    /// The message cannot be rendered.
    #[error("Failed to render the commit message")]
    Template(#[from] tera::Error),
}

/// The sections of a commit message.
#[derive(Debug, Serialize)]
struct Sections {
    /// The head line.
    head: String,
    /// The wrapped body.
    body: Option<String>,
    /// The wrapped breaking change description.
    breaking: Option<String>,
    /// The closed issues.
    footer: Option<String>,
}

/// Formats the commit message from the answers.
///
/// Lines are truncated or wrapped to fit in `width` characters.
#[tracing::instrument(level = "trace", skip(config))]
pub fn format(
    answers: &Answers,
    config: &Config,
    width: usize,
) -> Result<String, FormatError> {
    let width = width.max(1);

    let ty = config.find_type(&answers.r#type).ok_or_else(|| {
        FormatError::UnknownType {
            key: answers.r#type.clone(),
        }
    })?;

    let sections = Sections {
        head: truncate(&head(ty, answers, &config.format), width),
        body: non_empty(answers.body.as_deref()).map(|body| wrap(body, width)),
        breaking: non_empty(answers.breaking_body.as_deref()).map(|breaking| {
            wrap(&format!("{BREAKING_CHANGE_PREFIX}{breaking}"), width)
        }),
        footer: answers.issues.as_deref().and_then(closed_issues),
    };

    tracing::debug!(?sections);

    let message = Tera::one_off(
        MESSAGE_TEMPLATE,
        &Context::from_serialize(sections)?,
        false,
    )?;

    Ok(message.trim().to_owned())
}

/// Builds the head line from the format.
fn head(ty: &CommitType, answers: &Answers, format: &str) -> String {
    let scope = non_empty(answers.scope.as_deref())
        .map(|scope| format!("({scope})"))
        .unwrap_or_default();

    let head = PLACEHOLDER_REGEX.replace_all(format, |captures: &Captures<'_>| {
        match captures.get(1).map(|placeholder| placeholder.as_str()) {
            Some("type") => ty.name.clone(),
            Some("emoji") => ty.emoji.clone(),
            Some("scope") => scope.clone(),
            Some("subject") => answers.subject.trim().to_owned(),
            _ => String::new(),
        }
    });

    WHITESPACE_REGEX.replace_all(&head, " ").trim().to_owned()
}

/// Builds the footer closing the issues referenced in `issues`.
fn closed_issues(issues: &str) -> Option<String> {
    let footer = ISSUE_REGEX
        .find_iter(issues)
        .map(|issue| format!("closes {}", issue.as_str()))
        .join(", ");

    let mut chars = footer.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().collect::<String>() + chars.as_str())
}

/// Trims `text`, returning `None` if nothing is left.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::indoc;

    use super::*;
    use crate::config::ConfigOverrides;

    const WIDTH: usize = 100;

    fn answers(ty: &str, subject: &str) -> Answers {
        Answers {
            r#type: String::from(ty),
            subject: String::from(subject),
            ..Answers::default()
        }
    }

    fn conventional() -> Config {
        Config::with_overrides(ConfigOverrides {
            conventional: Some(true),
            ..ConfigOverrides::default()
        })
    }

    #[test]
    fn head_without_scope_has_no_double_space() {
        let message =
            format(&answers(":bug:", "fix bug"), &Config::default(), WIDTH);
        assert_eq!(message.unwrap(), "🐛 fix bug");
    }

    #[test]
    fn head_with_scope() {
        let answers = Answers {
            scope: Some(String::from(" api ")),
            ..answers(":bug:", "fix bug")
        };

        let message = format(&answers, &Config::default(), WIDTH);
        assert_eq!(message.unwrap(), "🐛 (api) fix bug");
    }

    #[test]
    fn conventional_head_with_scope() {
        let answers = Answers {
            scope: Some(String::from("api")),
            ..answers(":bug:", "fix bug")
        };

        let message = format(&answers, &conventional(), WIDTH);
        assert_eq!(message.unwrap(), "fix(api): 🐛 fix bug");
    }

    #[test]
    fn conventional_head_without_scope() {
        let message =
            format(&answers(":bug:", "fix bug"), &conventional(), WIDTH);
        assert_eq!(message.unwrap(), "fix: 🐛 fix bug");
    }

    #[test]
    fn head_with_symbol_keys() {
        let config = Config::with_overrides(ConfigOverrides {
            symbol: Some(true),
            ..ConfigOverrides::default()
        });

        let message = format(&answers("🐛", "fix bug"), &config, WIDTH);
        assert_eq!(message.unwrap(), "🐛 fix bug");
    }

    #[test]
    fn subject_placeholders_are_not_substituted() {
        let message = format(
            &answers(":bug:", "keep {type} as is"),
            &conventional(),
            WIDTH,
        );
        assert_eq!(message.unwrap(), "fix: 🐛 keep {type} as is");
    }

    #[test]
    fn subject_is_trimmed() {
        let message =
            format(&answers(":bug:", "  fix bug  "), &Config::default(), WIDTH);
        assert_eq!(message.unwrap(), "🐛 fix bug");
    }

    #[test]
    fn head_is_truncated_to_the_width() {
        let message = format(
            &answers(":bug:", "fix a rather annoying bug"),
            &Config::default(),
            20,
        );
        assert_eq!(message.unwrap(), "🐛 fix a rather…");
    }

    #[test]
    fn head_width_counts_the_emoji_as_two_columns() {
        let fitting =
            format(&answers(":bug:", "abcdefg"), &Config::default(), 10);
        assert_eq!(fitting.unwrap(), "🐛 abcdefg");

        let overflowing =
            format(&answers(":bug:", "abcdefgh"), &Config::default(), 10);
        assert_eq!(overflowing.unwrap(), "🐛…");
    }

    #[test]
    fn head_only_message_has_no_blank_lines() {
        let answers = Answers {
            body: Some(String::new()),
            breaking_body: Some(String::from("  ")),
            issues: Some(String::new()),
            ..answers(":sparkles:", "add things")
        };

        let message = format(&answers, &Config::default(), WIDTH).unwrap();
        assert_eq!(message, "✨ add things");
    }

    #[test]
    fn full_message() {
        let answers = Answers {
            scope: Some(String::from("api")),
            body: Some(String::from(
                "The endpoint now accepts pagination parameters.",
            )),
            breaking_body: Some(String::from("The page size defaults to 10.")),
            issues: Some(String::from("closes #1 and #23 please")),
            ..answers(":sparkles:", "paginate results")
        };

        let message = format(&answers, &Config::default(), 30).unwrap();
        assert_eq!(
            message,
            indoc! {"
                ✨ (api) paginate results

                The endpoint now accepts
                pagination parameters.

                BREAKING CHANGE: The page size
                defaults to 10.

                Closes #1, closes #23"}
        );
    }

    #[test]
    fn issues_without_references_are_omitted() {
        let answers = Answers {
            issues: Some(String::from("none really")),
            ..answers(":bug:", "fix bug")
        };

        let message = format(&answers, &Config::default(), WIDTH);
        assert_eq!(message.unwrap(), "🐛 fix bug");
    }

    #[test]
    fn issue_references_are_extracted_in_order() {
        assert_eq!(
            closed_issues("closes #1 and #23 please").as_deref(),
            Some("Closes #1, closes #23")
        );
        assert_eq!(closed_issues("#7").as_deref(), Some("Closes #7"));
        assert_eq!(closed_issues("# and #x"), None);
        assert_eq!(closed_issues("#١٢ and #3").as_deref(), Some("Closes #3"));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let message =
            format(&answers(":nope:", "fix bug"), &Config::default(), WIDTH);
        assert!(matches!(
            message,
            Err(FormatError::UnknownType { key }) if key == ":nope:"
        ));
    }

    #[test]
    fn type_key_must_match_the_symbol_setting() {
        let message =
            format(&answers("🐛", "fix bug"), &Config::default(), WIDTH);
        assert!(matches!(message, Err(FormatError::UnknownType { .. })));
    }

    #[test]
    fn custom_format() {
        let config = Config::with_overrides(ConfigOverrides {
            format: Some(String::from("[{type}] {subject} {emoji}")),
            ..ConfigOverrides::default()
        });

        let message =
            format(&answers(":memo:", "explain things"), &config, WIDTH);
        assert_eq!(message.unwrap(), "[docs] explain things 📝");
    }

    #[test]
    fn blank_subject_gives_a_degenerate_head() {
        let message =
            format(&answers(":bug:", "   "), &Config::default(), WIDTH);
        assert_eq!(message.unwrap(), "🐛");
    }
}
