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

//! Sources of configuration.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize as _;
use thiserror::Error;

use super::ConfigOverrides;
use crate::catalog;

/// The key of the cz-emoji configuration in the `config` object.
pub const CONFIG_KEY: &str = "cz-emoji";

/// The name of the npm manifest.
const PACKAGE_JSON: &str = "package.json";
/// The name of the commitizen configuration file.
const CZRC: &str = ".czrc";

/// A place where the configuration can be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The nearest `package.json` from the current directory.
    NearestPackageJson,
    /// The nearest `.czrc` from the current directory.
    NearestCzrc,
    /// The `.czrc` in the home directory.
    HomeCzrc,
}

/// The configuration sources, by order of precedence.
pub const SOURCES: [ConfigSource; 3] = [
    ConfigSource::NearestPackageJson,
    ConfigSource::NearestCzrc,
    ConfigSource::HomeCzrc,
];

/// Reasons for a source not to be usable.
#[derive(Debug, Error)]
enum SourceError {
    /// The file cannot be read.
    #[error("Failed to read the file")]
    Read(#[source] io::Error),
    /// The file or the configuration is not valid.
    #[error("Invalid configuration")]
    Parse(#[source] serde_json::Error),
    /// There is no `config["cz-emoji"]` object.
    #[error("No configuration for {CONFIG_KEY}")]
    Missing,
    /// The configuration object is empty.
    #[error("Empty configuration")]
    Empty,
    /// The list of types is empty.
    #[error("The list of types is empty")]
    NoTypes,
    /// A code or emoji is used by several types.
    #[error("Duplicate commit type {0}")]
    DuplicateType(String),
}

impl ConfigSource {
    /// Loads the user configuration from this source.
    ///
    /// Returns `None` when the source is absent or cannot be used.
    pub fn load(
        self,
        cwd: Option<&Path>,
        home: Option<&Path>,
    ) -> Option<ConfigOverrides> {
        let path = self.path(cwd, home)?;

        match read_overrides(&path) {
            Ok(overrides) => Some(overrides),
            Err(error) => {
                tracing::debug!(
                    source = ?self,
                    ?path,
                    ?error,
                    "ignoring configuration source"
                );
                None
            }
        }
    }

    /// Returns the path of the file for this source, if it exists.
    fn path(self, cwd: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
        match self {
            Self::NearestPackageJson => find_up(cwd?, PACKAGE_JSON),
            Self::NearestCzrc => find_up(cwd?, CZRC),
            Self::HomeCzrc => {
                Some(home?.join(CZRC)).filter(|path| path.is_file())
            }
        }
    }
}

/// Finds the nearest file named `file_name` in `start` or its ancestors.
fn find_up(start: &Path, file_name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|path| path.is_file())
}

/// Reads the overrides from a JSON file.
fn read_overrides(path: &Path) -> Result<ConfigOverrides, SourceError> {
    let content = fs::read_to_string(path).map_err(SourceError::Read)?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(SourceError::Parse)?;

    let section = json
        .get("config")
        .and_then(|config| config.get(CONFIG_KEY))
        .ok_or(SourceError::Missing)?;

    if section.as_object().is_none_or(serde_json::Map::is_empty) {
        return Err(SourceError::Empty);
    }

    let overrides =
        ConfigOverrides::deserialize(section).map_err(SourceError::Parse)?;

    if let Some(types) = &overrides.types {
        if types.is_empty() {
            return Err(SourceError::NoTypes);
        }

        if let Some(duplicate) = catalog::first_duplicate(types) {
            return Err(SourceError::DuplicateType(duplicate.to_owned()));
        }
    }

    Ok(overrides)
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use assert_fs::{TempDir, prelude::*};
    use indoc::indoc;

    use super::*;

    #[test]
    fn finds_the_nearest_file_upwards() {
        let root = TempDir::new().unwrap();
        let nested = root.child("a/b/c");
        nested.create_dir_all().unwrap();
        root.child(".czrc").write_str("{}").unwrap();
        root.child("a/.czrc").write_str("{}").unwrap();

        assert_eq!(
            find_up(nested.path(), CZRC),
            Some(root.child("a/.czrc").path().to_owned())
        );
    }

    #[test]
    fn nearest_package_json_without_config_is_not_skipped_for_a_farther_one() {
        let root = TempDir::new().unwrap();
        let nested = root.child("packages/app");
        nested.create_dir_all().unwrap();
        root.child("package.json")
            .write_str(r#"{ "config": { "cz-emoji": { "symbol": true } } }"#)
            .unwrap();
        nested.child("package.json").write_str("{}").unwrap();

        assert_eq!(
            ConfigSource::NearestPackageJson.load(Some(nested.path()), None),
            None
        );
    }

    #[test]
    fn empty_section_is_not_a_match() {
        let root = TempDir::new().unwrap();
        root.child(".czrc")
            .write_str(r#"{ "config": { "cz-emoji": {} } }"#)
            .unwrap();

        assert!(matches!(
            read_overrides(root.child(".czrc").path()),
            Err(SourceError::Empty)
        ));
    }

    #[test]
    fn empty_type_list_is_not_a_match() {
        let root = TempDir::new().unwrap();
        root.child(".czrc")
            .write_str(r#"{ "config": { "cz-emoji": { "types": [] } } }"#)
            .unwrap();

        assert!(matches!(
            read_overrides(root.child(".czrc").path()),
            Err(SourceError::NoTypes)
        ));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let root = TempDir::new().unwrap();
        root.child(".czrc")
            .write_str(indoc! {r#"
                { "config": { "cz-emoji": { "symbol": true, "other": 1 } } }
            "#})
            .unwrap();

        let overrides = read_overrides(root.child(".czrc").path()).unwrap();
        assert_eq!(overrides.symbol, Some(true));
    }

    #[test]
    fn home_czrc_requires_a_home_directory() {
        assert_eq!(ConfigSource::HomeCzrc.load(None, None), None);
    }
}
