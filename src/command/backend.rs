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

//! Backends doing the actual commit.

use std::{io, process::Command};

use thiserror::Error;

use crate::tracing::LogResult as _;

/// The placeholder for the commit message in custom commands.
pub const MESSAGE_PLACEHOLDER: &str = "$message";

/// A commit backend.
pub trait Backend {
    /// Commits with the given message.
    fn call(&self, commit_message: &str) -> Result<(), BackendError>;
}

/// Errors that can occur when running the backend command.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend command cannot be run.
    #[error("Failed to run `{command}`")]
    CannotRun {
        /// The command that cannot be run.
        command: String,
        /// The OS error.
        #[source]
        os_error: io::Error,
    },
    /// The backend command has returned an error.
    #[error("`{command}` has returned an error")]
    ExecutionError {
        /// The command that has failed.
        command: String,
        /// The status code returned by the command.
        status_code: Option<i32>,
    },
}

/// Errors that can occur when building a custom command backend.
#[derive(Debug, Error)]
pub enum CustomCommandBackendError {
    /// The command contains a syntax error.
    #[error("Failed to parse `{command}`")]
    Syntax {
        /// The command that cannot be parsed.
        command: String,
        /// The parsing error.
        #[source]
        parse_error: shell_words::ParseError,
    },
    /// The command is empty.
    #[error("The commit command is empty")]
    Empty,
}

/// A backend running `git commit -em "$message"`.
#[derive(Debug)]
pub struct GitBackend {
    /// Extra arguments to pass to `git commit`.
    extra_args: Vec<String>,
}

/// A backend running a user-provided command.
#[derive(Debug)]
pub struct CustomCommandBackend {
    /// The program to run.
    program: String,
    /// Its arguments, possibly containing the message placeholder.
    args: Vec<String>,
}

/// A backend printing the message on stdout.
#[derive(Debug)]
pub struct PrintBackend;

impl GitBackend {
    /// Builds a Git backend.
    pub fn new(extra_args: &[String]) -> Self {
        Self {
            extra_args: extra_args.to_owned(),
        }
    }
}

impl Backend for GitBackend {
    #[tracing::instrument(name = "git_backend", level = "trace", skip_all)]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        let mut git_commit = Command::new("git");
        git_commit
            .arg("commit")
            .args(&self.extra_args)
            .args(["-em", commit_message]);

        tracing::info!(?git_commit, "calling git commit");
        run(git_commit, "git commit")
    }
}

impl CustomCommandBackend {
    /// Builds a backend from a command line.
    #[tracing::instrument(
        name = "new_custom_command_backend",
        level = "trace"
    )]
    pub fn new(command: &str) -> Result<Self, CustomCommandBackendError> {
        let command_line = shell_words::split(command)
            .map_err(|parse_error| CustomCommandBackendError::Syntax {
                command: command.to_owned(),
                parse_error,
            })
            .log_err()?;

        let (program, args) = command_line
            .split_first()
            .ok_or(CustomCommandBackendError::Empty)
            .log_err()?;

        Ok(Self {
            program: program.clone(),
            args: args.to_owned(),
        })
    }
}

impl Backend for CustomCommandBackend {
    #[tracing::instrument(
        name = "custom_command_backend",
        level = "trace",
        skip_all
    )]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        let mut custom_command = Command::new(&self.program);
        custom_command.args(embed_message_in_args(&self.args, commit_message));

        tracing::info!(?custom_command, "calling a custom command");

        let command_line = format!("{} {}", self.program, self.args.join(" "));
        run(custom_command, command_line.trim())
    }
}

impl Backend for PrintBackend {
    #[tracing::instrument(name = "print_backend", level = "trace", skip_all)]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        println!("{commit_message}");
        Ok(())
    }
}

/// Runs a command, checking its exit status.
fn run(mut command: Command, display: &str) -> Result<(), BackendError> {
    let status = command
        .status()
        .map_err(|os_error| BackendError::CannotRun {
            command: display.to_owned(),
            os_error,
        })
        .log_err()?;

    tracing::debug!(?status);

    if status.success() {
        Ok(())
    } else {
        Err(BackendError::ExecutionError {
            command: display.to_owned(),
            status_code: status.code(),
        })
        .log_err()
    }
}

/// Replaces the message placeholder with the commit message in `args`.
fn embed_message_in_args(args: &[String], commit_message: &str) -> Vec<String> {
    args.iter()
        .map(|arg| arg.replace(MESSAGE_PLACEHOLDER, commit_message))
        .collect()
}
