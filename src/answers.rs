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

//! Answers to the wizard questions.

use crate::question::QuestionName;

/// The answers to the wizard questions.
///
/// Optional answers are `None` when missing or blank: a whitespace-only answer
/// is the same as no answer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Answers {
    /// The key of the selected type, its code or its emoji.
    pub r#type: String,
    /// The scope of the changes.
    pub scope: Option<String>,
    /// The short description.
    pub subject: String,
    /// The long description.
    pub body: Option<String>,
    /// The description of a breaking change.
    pub breaking_body: Option<String>,
    /// Free text referencing closed issues.
    pub issues: Option<String>,
}

impl Answers {
    /// Records the answer to a question.
    pub fn record(&mut self, name: QuestionName, answer: String) {
        match name {
            QuestionName::Type => self.r#type = answer,
            QuestionName::Scope => self.scope = non_blank(answer),
            QuestionName::Subject => self.subject = answer,
            QuestionName::Body => self.body = non_blank(answer),
            QuestionName::BreakingBody => {
                self.breaking_body = non_blank(answer);
            }
            QuestionName::Issues => self.issues = non_blank(answer),
        }
    }
}

/// Returns `Some(answer)` unless it is blank.
pub fn non_blank(answer: String) -> Option<String> {
    (!answer.trim().is_empty()).then_some(answer)
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn blank_optional_answers_are_absent() {
        let mut answers = Answers::default();

        answers.record(QuestionName::Scope, String::new());
        answers.record(QuestionName::Body, String::from("   "));
        answers.record(QuestionName::BreakingBody, String::from("\n\t"));
        answers.record(QuestionName::Issues, String::from(""));

        assert_eq!(answers, Answers::default());
    }

    #[test]
    fn answers_are_recorded_untouched() {
        let mut answers = Answers::default();

        answers.record(QuestionName::Type, String::from(":bug:"));
        answers.record(QuestionName::Scope, String::from(" api "));
        answers.record(QuestionName::Subject, String::from("fix bug"));

        assert_eq!(answers.r#type, ":bug:");
        assert_eq!(answers.scope.as_deref(), Some(" api "));
        assert_eq!(answers.subject, "fix bug");
    }
}
