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

//! A commit wizard writing emoji-flavoured commit messages.
//!
//! The wizard asks for a type of commit, each tagged with an emoji, an
//! optional scope, a subject, a body, a breaking change and the closed issues,
//! then formats everything into a commit message. The configuration is read
//! from the `config["cz-emoji"]` key of the nearest `package.json` or `.czrc`,
//! or from `~/.czrc`.
//!
//! The library exposes the core of the wizard. Hosts provide a
//! [`wizard::Prompter`] and call [`wizard::run`] with a commit callback.

pub mod answers;
pub mod catalog;
pub mod command;
pub mod config;
pub mod message;
pub mod question;
pub mod tracing;
pub mod wizard;

pub use self::{
    answers::Answers,
    catalog::CommitType,
    command::CzEmoji,
    config::Config,
    question::{Question, QuestionKind, QuestionName},
    wizard::Prompter,
};
