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

//! A prompter asking the questions in the terminal.

use inquire::{
    CustomUserError, InquireError, Select, Text, validator::Validation,
};

use crate::{
    answers::Answers,
    question::{Choice, FuzzyChoices, Question, QuestionKind},
    wizard::Prompter,
};

/// The size of a page in the terminal.
const PAGE_SIZE: usize = 15;

/// A prompter using Inquire.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    type Error = InquireError;

    #[tracing::instrument(name = "inquire_prompter", level = "trace", skip_all)]
    fn prompt(
        &mut self,
        questions: &[Question],
    ) -> Result<Answers, Self::Error> {
        let mut answers = Answers::default();

        for question in questions {
            let answer = ask(question)?;
            tracing::debug!(question = %question.name, ?answer);
            answers.record(question.name, answer);
        }

        Ok(answers)
    }
}

/// Asks a question.
fn ask(question: &Question) -> Result<String, InquireError> {
    let message = question.message.as_str();

    match &question.kind {
        QuestionKind::PlainText => Text::new(message).prompt(),

        QuestionKind::MaxLengthText(max_length) => {
            let max_length = max_length.get();
            let help_message = format!("At most {max_length} characters.");

            Text::new(message)
                .with_help_message(&help_message)
                .with_validator(move |subject: &str| {
                    validate_subject(subject, max_length)
                })
                .prompt()
        }

        QuestionKind::SingleSelect(choices) => {
            let choice = Select::new(message, choices.clone())
                .with_page_size(PAGE_SIZE)
                .prompt()?;
            Ok(choice.value)
        }

        QuestionKind::FuzzySelect(choices) => ask_fuzzy(message, choices),
    }
}

/// Asks for a choice in a list filtered by a fuzzy search.
fn ask_fuzzy(
    message: &str,
    choices: &FuzzyChoices,
) -> Result<String, InquireError> {
    let count = choices.choices().len();

    // Inquire puts the highest scores first. Ties are broken by index to keep
    // the catalog order.
    let scorer = |query: &str, _: &Choice, _: &str, index: usize| {
        choices
            .score(query, index)
            .and_then(|score| score.checked_mul(count)?.checked_add(index))
            .and_then(|rank| i64::try_from(rank).ok())
            .map(|rank| -rank)
    };

    let choice = Select::new(message, choices.choices().to_vec())
        .with_page_size(PAGE_SIZE)
        .with_scorer(&scorer)
        .prompt()?;

    Ok(choice.value)
}

/// Validates the subject.
#[expect(
    clippy::unnecessary_wraps,
    reason = "The signature of the function is imposed by Inquire."
)]
fn validate_subject(
    subject: &str,
    max_length: usize,
) -> Result<Validation, CustomUserError> {
    let length = subject.trim().chars().count();

    if length == 0 {
        Ok(Validation::Invalid("The subject must not be empty".into()))
    } else if length > max_length {
        Ok(Validation::Invalid(
            format!(
                "The subject must not be longer than {max_length} characters"
            )
            .into(),
        ))
    } else {
        Ok(Validation::Valid)
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn subject_within_the_limit_is_valid() {
        assert!(matches!(
            validate_subject("fix bug", 10).unwrap(),
            Validation::Valid
        ));
        assert!(matches!(
            validate_subject("0123456789", 10).unwrap(),
            Validation::Valid
        ));
    }

    #[test]
    fn subject_over_the_limit_is_invalid() {
        assert!(matches!(
            validate_subject("01234567890", 10).unwrap(),
            Validation::Invalid(_)
        ));
    }

    #[test]
    fn blank_subject_is_invalid() {
        assert!(matches!(
            validate_subject("   ", 10).unwrap(),
            Validation::Invalid(_)
        ));
    }

    #[test]
    fn subject_length_counts_characters() {
        assert!(matches!(
            validate_subject("ééééé", 5).unwrap(),
            Validation::Valid
        ));
    }
}
