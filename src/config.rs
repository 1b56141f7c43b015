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

//! Configuration for cz-emoji.
//!
//! The configuration lives under the `config["cz-emoji"]` key of either the
//! nearest `package.json`, the nearest `.czrc` or the `.czrc` from the home
//! directory, the first one being used. Whatever is found there is merged over
//! the defaults, one level deep.

mod source;

pub use source::{CONFIG_KEY, ConfigSource, SOURCES};

use std::{collections::BTreeSet, env, num::NonZeroUsize, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::{
    catalog::{self, CommitType},
    tracing::LogResult as _,
};

/// The default template for the head line of the commit message.
pub const DEFAULT_FORMAT: &str = "{emoji} {scope} {subject}";
/// The head line template used when `conventional` is set.
pub const CONVENTIONAL_FORMAT: &str = "{type}{scope}: {emoji} {subject}";
/// The default maximum length of the subject.
pub const DEFAULT_SUBJECT_MAX_LENGTH: NonZeroUsize =
    NonZeroUsize::MIN.saturating_add(74);

/// The effective cz-emoji configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The available commit types.
    pub types: Vec<CommitType>,
    /// The accepted scopes, if restricted to a list.
    pub scopes: Option<Vec<String>>,
    /// Whether types are identified by their emoji instead of their code.
    pub symbol: bool,
    /// The questions not to ask.
    pub skip_questions: BTreeSet<String>,
    /// The maximum length of the subject.
    pub subject_max_length: NonZeroUsize,
    /// The template for the head line.
    pub format: String,
    /// Custom prompt messages, by question name.
    pub questions: IndexMap<String, String>,
}

/// A configuration as written by the user.
///
/// Every field is optional: missing fields keep their default value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    /// The available commit types, replacing the built-in ones.
    pub types: Option<Vec<CommitType>>,
    /// The accepted scopes.
    pub scopes: Option<Vec<String>>,
    /// Whether types are identified by their emoji.
    #[serde(default, deserialize_with = "truthy")]
    pub symbol: Option<bool>,
    /// The questions not to ask.
    pub skip_questions: Option<BTreeSet<String>>,
    /// The maximum length of the subject.
    pub subject_max_length: Option<NonZeroUsize>,
    /// The template for the head line.
    pub format: Option<String>,
    /// Custom prompt messages.
    pub questions: Option<IndexMap<String, String>>,
    /// Whether to default to the conventional head line template.
    #[serde(default, deserialize_with = "truthy")]
    pub conventional: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: catalog::default_types(),
            scopes: None,
            symbol: false,
            skip_questions: BTreeSet::new(),
            subject_max_length: DEFAULT_SUBJECT_MAX_LENGTH,
            format: String::from(DEFAULT_FORMAT),
            questions: IndexMap::new(),
        }
    }
}

impl Config {
    /// Resolves the configuration from the current directory.
    ///
    /// This never fails: any source that cannot be used is ignored, and the
    /// defaults are used when no source is usable.
    #[tracing::instrument(name = "resolve_config", level = "trace")]
    pub fn resolve() -> Self {
        let cwd = env::current_dir().log_err().ok();
        let home = dirs::home_dir();
        Self::resolve_from(cwd.as_deref(), home.as_deref())
    }

    /// Resolves the configuration from explicit directories.
    #[tracing::instrument(level = "trace")]
    pub fn resolve_from(cwd: Option<&Path>, home: Option<&Path>) -> Self {
        for source in SOURCES {
            if let Some(overrides) = source.load(cwd, home) {
                tracing::debug!(?source, ?overrides, "using configuration");
                return Self::with_overrides(overrides);
            }
        }

        tracing::debug!("no configuration found, using the defaults");
        Self::default()
    }

    /// Merges user overrides over the default configuration.
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        let defaults = Self::default();

        let ConfigOverrides {
            types,
            scopes,
            symbol,
            skip_questions,
            subject_max_length,
            format,
            questions,
            conventional,
        } = overrides;

        let default_format = if conventional.unwrap_or(false) {
            String::from(CONVENTIONAL_FORMAT)
        } else {
            defaults.format
        };

        Self {
            types: types.unwrap_or(defaults.types),
            scopes: scopes.or(defaults.scopes),
            symbol: symbol.unwrap_or(defaults.symbol),
            skip_questions: skip_questions.unwrap_or(defaults.skip_questions),
            subject_max_length: subject_max_length
                .unwrap_or(defaults.subject_max_length),
            format: format.unwrap_or(default_format),
            questions: questions.unwrap_or(defaults.questions),
        }
    }

    /// Finds the commit type matching a key from the answers.
    pub fn find_type(&self, key: &str) -> Option<&CommitType> {
        catalog::find(&self.types, key, self.symbol)
    }
}

/// Deserializes a flag from any JSON value.
///
/// `null`, `false`, `0` and `""` are false, anything else is true.
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    let flag = match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Number(number) => {
            number.as_f64().is_some_and(|number| number.abs() > 0.0)
        }
        serde_json::Value::String(string) => !string.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    };

    Ok(Some(flag))
}
