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

//! The questions of the commit wizard.

pub mod fuzzy;

use std::{fmt, num::NonZeroUsize};

use crate::{catalog::CommitType, config::Config};

pub use self::fuzzy::FuzzyChoices;

/// The label of the scope choice meaning “no scope”.
pub const NO_SCOPE_LABEL: &str = "[none]";

/// The name of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionName {
    /// The type of commit.
    Type,
    /// The scope of the changes.
    Scope,
    /// The short description.
    Subject,
    /// The long description.
    Body,
    /// The description of a breaking change.
    BreakingBody,
    /// The issues closed by the commit.
    Issues,
}

/// A question to ask the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// What the answer is for.
    pub name: QuestionName,
    /// The prompt message.
    pub message: String,
    /// How to ask.
    pub kind: QuestionKind,
}

/// The kind of input expected for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text.
    PlainText,
    /// Free text limited to a number of characters.
    MaxLengthText(NonZeroUsize),
    /// A choice in a list.
    SingleSelect(Vec<Choice>),
    /// A choice in a list filtered by a fuzzy search.
    FuzzySelect(FuzzyChoices),
}

/// A choice in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// What is displayed.
    pub label: String,
    /// The answer when selected.
    pub value: String,
}

impl QuestionName {
    /// All the questions, in the order they are asked.
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::Scope,
        Self::Subject,
        Self::Body,
        Self::BreakingBody,
        Self::Issues,
    ];

    /// Returns the name of the question, as used in the configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::BreakingBody => "breakingBody",
            Self::Issues => "issues",
        }
    }

    /// Returns the keys skipping this question in `skipQuestions`.
    ///
    /// The type and subject cannot be skipped.
    pub fn skip_keys(self) -> &'static [&'static str] {
        match self {
            Self::Type | Self::Subject => &[],
            Self::Scope => &["scope"],
            Self::Body => &["body"],
            Self::BreakingBody => &["breaking", "breakingBody"],
            Self::Issues => &["issues"],
        }
    }

    /// Returns the prompt message used when none is configured.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Type => "Select the type of change you're committing:",
            Self::Scope => "Specify a scope:",
            Self::Subject => "Write a short description:",
            Self::Body => "Provide a longer description:",
            Self::BreakingBody => "List any breaking changes:",
            Self::Issues => "List any issue closed (#1, #2, ...):",
        }
    }

    /// Checks whether the configuration skips this question.
    pub fn is_skipped(self, config: &Config) -> bool {
        self.skip_keys()
            .iter()
            .any(|key| config.skip_questions.contains(*key))
    }
}

impl fmt::Display for QuestionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Choice {
    /// Builds a choice.
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Builds the questions to ask, in order.
#[tracing::instrument(level = "trace", skip_all)]
pub fn build(config: &Config) -> Vec<Question> {
    let questions: Vec<_> = QuestionName::ALL
        .into_iter()
        .filter(|name| !name.is_skipped(config))
        .map(|name| Question {
            name,
            message: message(config, name),
            kind: kind(config, name),
        })
        .collect();

    tracing::debug!(
        questions = ?questions.iter().map(|q| q.name).collect::<Vec<_>>()
    );

    questions
}

/// Returns the configured prompt message for a question.
fn message(config: &Config, name: QuestionName) -> String {
    config
        .questions
        .get(name.as_str())
        .map_or_else(|| name.default_message().to_owned(), Clone::clone)
}

/// Returns how to ask a question.
fn kind(config: &Config, name: QuestionName) -> QuestionKind {
    match name {
        QuestionName::Type => QuestionKind::FuzzySelect(type_choices(config)),
        QuestionName::Scope => match &config.scopes {
            Some(scopes) => QuestionKind::SingleSelect(scope_choices(scopes)),
            None => QuestionKind::PlainText,
        },
        QuestionName::Subject => {
            QuestionKind::MaxLengthText(config.subject_max_length)
        }
        QuestionName::Body
        | QuestionName::BreakingBody
        | QuestionName::Issues => QuestionKind::PlainText,
    }
}

/// Builds the searchable list of types.
fn type_choices(config: &Config) -> FuzzyChoices {
    let width = config
        .types
        .iter()
        .map(|ty| ty.name.chars().count())
        .max()
        .unwrap_or_default();

    FuzzyChoices::new(config.types.iter().map(|ty| {
        let label = type_label(ty, width);
        let choice = Choice::new(&label, ty.key(config.symbol));
        (choice, vec![label, ty.code.clone()])
    }))
}

/// Formats the label of a type, its name padded to `width`.
fn type_label(ty: &CommitType, width: usize) -> String {
    let CommitType {
        name,
        emoji,
        description,
        ..
    } = ty;

    format!("{name:<width$}  {emoji}  {description}")
}

/// Builds the list of scopes, starting with the choice for no scope.
fn scope_choices(scopes: &[String]) -> Vec<Choice> {
    std::iter::once(Choice::new(NO_SCOPE_LABEL, ""))
        .chain(scopes.iter().map(|scope| Choice::new(scope, scope)))
        .collect()
}
