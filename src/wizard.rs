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

//! The commit wizard.
//!
//! The wizard does not render anything itself: a host provides a [`Prompter`]
//! asking the questions, and a callback doing the actual commit.

use eyre::Result;

use crate::{
    answers::Answers,
    config::Config,
    message,
    question::{self, Question},
    tracing::LogResult as _,
};

/// Something able to ask questions to the user.
pub trait Prompter {
    /// The error returned when the questions cannot be answered.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Asks the questions, in order, and returns the answers.
    fn prompt(
        &mut self,
        questions: &[Question],
    ) -> Result<Answers, Self::Error>;
}

/// Runs the wizard with the configuration from the current directory.
///
/// See [`run_with_config`].
pub fn run<P, C>(prompter: &mut P, width: usize, commit: C) -> Result<()>
where
    P: Prompter,
    C: FnOnce(String) -> Result<()>,
{
    let config = Config::resolve();
    run_with_config(&config, prompter, width, commit)
}

/// Runs the wizard with an explicit configuration.
///
/// Asks the questions through `prompter`, formats the commit message for a
/// terminal `width` columns wide and calls `commit` with it. If the questions
/// cannot be answered or the message cannot be formatted, `commit` is not
/// called.
#[tracing::instrument(name = "wizard", level = "trace", skip_all)]
pub fn run_with_config<P, C>(
    config: &Config,
    prompter: &mut P,
    width: usize,
    commit: C,
) -> Result<()>
where
    P: Prompter,
    C: FnOnce(String) -> Result<()>,
{
    let questions = question::build(config);
    let answers = prompter.prompt(&questions).log_err()?;
    tracing::debug!(?answers);

    let message = message::format(&answers, config, width).log_err()?;
    tracing::info!(?message, "commit message ready");

    commit(message)
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use std::{cell::Cell, io};

    use super::*;
    use crate::{
        config::ConfigOverrides,
        message::FormatError,
        question::QuestionName,
    };

    /// A prompter giving scripted answers.
    struct ScriptedPrompter {
        answers: Vec<(QuestionName, &'static str)>,
        asked: Vec<QuestionName>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[(QuestionName, &'static str)]) -> Self {
            Self {
                answers: answers.to_vec(),
                asked: vec![],
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        type Error = io::Error;

        fn prompt(
            &mut self,
            questions: &[Question],
        ) -> Result<Answers, Self::Error> {
            let mut answers = Answers::default();

            for question in questions {
                self.asked.push(question.name);
                if let Some((_, answer)) =
                    self.answers.iter().find(|(name, _)| *name == question.name)
                {
                    answers.record(question.name, String::from(*answer));
                }
            }

            Ok(answers)
        }
    }

    /// A prompter cancelled by the user.
    struct CancelledPrompter;

    impl Prompter for CancelledPrompter {
        type Error = io::Error;

        fn prompt(&mut self, _: &[Question]) -> Result<Answers, Self::Error> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"))
        }
    }

    #[test]
    fn commits_the_formatted_message_once() {
        let mut prompter = ScriptedPrompter::new(&[
            (QuestionName::Type, ":bug:"),
            (QuestionName::Subject, "fix bug"),
            (QuestionName::Issues, "#42"),
        ]);
        let calls = Cell::new(0);
        let mut committed = None;

        run_with_config(&Config::default(), &mut prompter, 80, |message| {
            calls.set(calls.get() + 1);
            committed = Some(message);
            Ok(())
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(committed.as_deref(), Some("🐛 fix bug\n\nCloses #42"));
    }

    #[test]
    fn asks_only_the_questions_not_skipped() {
        let config = Config::with_overrides(ConfigOverrides {
            skip_questions: Some(
                ["body", "breaking"].map(String::from).into_iter().collect(),
            ),
            ..ConfigOverrides::default()
        });
        let mut prompter = ScriptedPrompter::new(&[
            (QuestionName::Type, ":bug:"),
            (QuestionName::Subject, "fix bug"),
        ]);

        run_with_config(&config, &mut prompter, 80, |_| Ok(())).unwrap();

        assert_eq!(
            prompter.asked,
            [
                QuestionName::Type,
                QuestionName::Scope,
                QuestionName::Subject,
                QuestionName::Issues,
            ]
        );
    }

    #[test]
    fn does_not_commit_when_the_prompt_fails() {
        let mut committed = false;

        let result = run_with_config(
            &Config::default(),
            &mut CancelledPrompter,
            80,
            |_| {
                committed = true;
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().downcast_ref::<io::Error>().is_some());
        assert!(!committed);
    }

    #[test]
    fn does_not_commit_when_the_type_is_unknown() {
        let mut prompter = ScriptedPrompter::new(&[
            (QuestionName::Type, ":unknown:"),
            (QuestionName::Subject, "fix bug"),
        ]);
        let mut committed = false;

        let result =
            run_with_config(&Config::default(), &mut prompter, 80, |_| {
                committed = true;
                Ok(())
            });

        assert!(
            result
                .unwrap_err()
                .downcast_ref::<FormatError>()
                .is_some_and(|e| matches!(e, FormatError::UnknownType { .. }))
        );
        assert!(!committed);
    }

    #[test]
    fn commit_errors_are_propagated() {
        let mut prompter = ScriptedPrompter::new(&[
            (QuestionName::Type, ":bug:"),
            (QuestionName::Subject, "fix bug"),
        ]);

        let result =
            run_with_config(&Config::default(), &mut prompter, 80, |_| {
                Err(eyre::eyre!("git failed"))
            });

        assert_eq!(result.unwrap_err().to_string(), "git failed");
    }
}
