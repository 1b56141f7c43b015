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

//! The command line interface.

pub mod backend;
pub mod helpers;
pub mod prompter;

use clap::Parser;
use eyre::Result;
use inquire::InquireError;
use terminal_size::{Width, terminal_size};

use self::{
    backend::{
        Backend, BackendError, CustomCommandBackend, CustomCommandBackendError,
        GitBackend, PrintBackend,
    },
    helpers::{NotInGitWorktree, ensure_in_git_worktree},
    prompter::InquirePrompter,
};
use crate::{error, hint, message::FormatError, wizard};

/// The width used when the terminal size is unknown.
const DEFAULT_WIDTH: usize = 100;

/// The exit code when the user aborts the wizard.
const ABORTED: exitcode::ExitCode = 1;

/// A commit wizard writing emoji-flavoured commit messages.
#[derive(Debug, Parser)]
#[command(author, version = env!("VERSION_WITH_GIT"))]
pub struct CzEmoji {
    /// Print the commit message instead of calling `git commit`.
    #[arg(long, conflicts_with = "command")]
    print_only: bool,
    /// Commit by running COMMAND instead of `git commit`.
    ///
    /// `$message` is replaced by the commit message in the arguments, like in
    /// `--command 'jj describe -m "$message"'`.
    #[arg(long, value_name = "COMMAND")]
    command: Option<String>,
    /// The width to wrap the commit message at.
    ///
    /// Defaults to the width of the terminal.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,
    /// Extra arguments to be passed to `git commit`.
    #[arg(last = true)]
    extra_args: Vec<String>,
}

impl CzEmoji {
    /// Runs cz-emoji.
    pub fn run() -> Result<()> {
        let result = Self::parse().commit();

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }

    /// Runs the wizard and commits.
    #[tracing::instrument(name = "cz_emoji", level = "trace", skip_all)]
    fn commit(&self) -> Result<()> {
        tracing::debug!(args = ?self);

        let backend = self.backend()?;
        let width = self.width();

        wizard::run(&mut InquirePrompter, width, |message| {
            Ok(backend.call(&message)?)
        })
    }

    /// Selects the backend from the command line arguments.
    fn backend(&self) -> Result<Box<dyn Backend>> {
        if self.print_only {
            Ok(Box::new(PrintBackend))
        } else if let Some(command) = &self.command {
            Ok(Box::new(CustomCommandBackend::new(command)?))
        } else {
            ensure_in_git_worktree()?;
            Ok(Box::new(GitBackend::new(&self.extra_args)))
        }
    }

    /// Returns the width to format the commit message for.
    fn width(&self) -> usize {
        self.width
            .or_else(|| terminal_size().map(|(Width(width), _)| width))
            .map_or(DEFAULT_WIDTH, usize::from)
    }
}

#[expect(clippy::exit, reason = "Usage errors are reported with an exit code.")]
fn handle_errors(report: color_eyre::Report) -> Result<()> {
    match usage_error_code(&report) {
        Some(code) => std::process::exit(code),
        None => Err(report),
    }
}

/// Reports usage errors to the user, returning the exit code to use.
///
/// Returns `None` for errors that are not usage errors.
fn usage_error_code(report: &color_eyre::Report) -> Option<exitcode::ExitCode> {
    if let Some(e) = report.downcast_ref::<InquireError>() {
        match e {
            InquireError::OperationCanceled
            | InquireError::OperationInterrupted => {
                error!("The commit wizard has been aborted");
                Some(ABORTED)
            }
            _ => None,
        }
    } else if let Some(e) = report.downcast_ref::<FormatError>() {
        match e {
            FormatError::UnknownType { .. } => {
                error!("{e}");
                hint!("Check the types in your cz-emoji configuration.");
                Some(exitcode::CONFIG)
            }
            FormatError::Template(_) => None,
        }
    } else if let Some(e) = report.downcast_ref::<NotInGitWorktree>() {
        error!("{e}");
        hint!("You can print the commit message with `cz-emoji --print-only`.");
        Some(exitcode::USAGE)
    } else if let Some(e) = report.downcast_ref::<CustomCommandBackendError>() {
        error!("{e}");
        Some(exitcode::USAGE)
    } else if let Some(BackendError::ExecutionError { status_code, .. }) =
        report.downcast_ref::<BackendError>()
    {
        Some(status_code.unwrap_or(exitcode::SOFTWARE))
    } else {
        None
    }
}
