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

//! The catalog of commit types.

use serde::{Deserialize, Serialize};

/// A type of commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    /// The emoji shortcode, like `:bug:`.
    pub code: String,
    /// The name of the type, like `fix`.
    pub name: String,
    /// The emoji itself.
    pub emoji: String,
    /// What the type is about.
    pub description: String,
}

impl CommitType {
    /// Builds a commit type.
    pub fn new(code: &str, name: &str, emoji: &str, description: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            emoji: emoji.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Returns the key identifying this type in the answers.
    ///
    /// When `symbol` is set, types are identified by their emoji, otherwise by
    /// their shortcode.
    pub fn key(&self, symbol: bool) -> &str {
        if symbol { &self.emoji } else { &self.code }
    }
}

/// The built-in commit types, as `(code, name, emoji, description)`.
const DEFAULT_TYPES: &[(&str, &str, &str, &str)] = &[
    (":art:", "style", "🎨", "Improving structure / format of the code."),
    (":zap:", "perf", "⚡️", "Improving performance."),
    (":fire:", "prune", "🔥", "Removing code or files."),
    (":bug:", "fix", "🐛", "Fixing a bug."),
    (":ambulance:", "quickfix", "🚑", "Critical hotfix."),
    (":sparkles:", "feature", "✨", "Introducing new features."),
    (":memo:", "docs", "📝", "Writing docs."),
    (":rocket:", "deploy", "🚀", "Deploying stuff."),
    (":lipstick:", "ui", "💄", "Updating the UI and style files."),
    (":tada:", "init", "🎉", "Initial commit."),
    (":white_check_mark:", "test", "✅", "Adding tests."),
    (":lock:", "security", "🔒", "Fixing security issues."),
    (":apple:", "osx", "🍎", "Fixing something on macOS."),
    (":penguin:", "linux", "🐧", "Fixing something on Linux."),
    (":checkered_flag:", "windows", "🏁", "Fixing something on Windows."),
    (":robot:", "android", "🤖", "Fixing something on Android."),
    (":green_apple:", "ios", "🍏", "Fixing something on iOS."),
    (":bookmark:", "release", "🔖", "Releasing / Version tags."),
    (":rotating_light:", "lint", "🚨", "Removing linter warnings."),
    (":construction:", "wip", "🚧", "Work in progress."),
    (":green_heart:", "fix-ci", "💚", "Fixing CI Build."),
    (":arrow_down:", "downgrade", "⬇️", "Downgrading dependencies."),
    (":arrow_up:", "upgrade", "⬆️", "Upgrading dependencies."),
    (":pushpin:", "pushpin", "📌", "Pinning dependencies to specific versions."),
    (":construction_worker:", "ci", "👷", "Adding CI build system."),
    (
        ":chart_with_upwards_trend:",
        "analytics",
        "📈",
        "Adding analytics or tracking code.",
    ),
    (":recycle:", "refactoring", "♻️", "Refactoring code."),
    (":whale:", "docker", "🐳", "Work about Docker."),
    (":heavy_plus_sign:", "dep-add", "➕", "Adding a dependency."),
    (":heavy_minus_sign:", "dep-rm", "➖", "Removing a dependency."),
    (":wrench:", "config", "🔧", "Changing configuration files."),
    (
        ":globe_with_meridians:",
        "i18n",
        "🌐",
        "Internationalization and localization.",
    ),
    (":pencil2:", "typo", "✏️", "Fixing typos."),
    (":poop:", "poo", "💩", "Writing bad code that needs to be improved."),
    (":rewind:", "revert", "⏪", "Reverting changes."),
    (":twisted_rightwards_arrows:", "merge", "🔀", "Merging branches."),
    (":package:", "dep-up", "📦", "Updating compiled files or packages."),
    (":alien:", "compat", "👽", "Updating code due to external API changes."),
    (":truck:", "mv", "🚚", "Moving or renaming files."),
    (":page_facing_up:", "license", "📄", "Adding or updating license."),
    (":boom:", "breaking", "💥", "Introducing breaking changes."),
    (":bento:", "assets", "🍱", "Adding or updating assets."),
    (":ok_hand:", "review", "👌", "Updating code due to code review changes."),
    (":wheelchair:", "access", "♿️", "Improving accessibility."),
    (":bulb:", "docs-code", "💡", "Documenting source code."),
    (":beers:", "beer", "🍻", "Writing code drunkenly."),
    (":speech_balloon:", "texts", "💬", "Updating text and literals."),
    (":card_file_box:", "db", "🗃", "Performing database related changes."),
    (":loud_sound:", "logs", "🔊", "Adding logs."),
    (":mute:", "remove-logs", "🔇", "Removing logs."),
    (":busts_in_silhouette:", "contrib-add", "👥", "Adding contributor(s)."),
    (
        ":children_crossing:",
        "ux",
        "🚸",
        "Improving user experience / usability.",
    ),
    (
        ":building_construction:",
        "arch",
        "🏗",
        "Making architectural changes.",
    ),
    (":iphone:", "iphone", "📱", "Working on responsive design."),
    (":clown_face:", "clown-face", "🤡", "Mocking things."),
    (":egg:", "egg", "🥚", "Adding an easter egg."),
    (
        ":see_no_evil:",
        "see-no-evil",
        "🙈",
        "Adding or updating a .gitignore file.",
    ),
    (":camera_flash:", "camera-flash", "📸", "Adding or updating snapshots."),
    (":alembic:", "experiment", "⚗", "Experimenting new things."),
    (":mag:", "seo", "🔍", "Improving SEO."),
    (":wheel_of_dharma:", "k8s", "☸️", "Work about Kubernetes."),
    (":label:", "types", "🏷️", "Adding or updating types."),
];

/// Returns the built-in commit types.
pub fn default_types() -> Vec<CommitType> {
    DEFAULT_TYPES
        .iter()
        .map(|&(code, name, emoji, description)| {
            CommitType::new(code, name, emoji, description)
        })
        .collect()
}

/// Finds a commit type from its key.
pub fn find<'a>(
    types: &'a [CommitType],
    key: &str,
    symbol: bool,
) -> Option<&'a CommitType> {
    types.iter().find(|ty| ty.key(symbol) == key)
}

/// Checks that codes and emojis are unique in `types`.
///
/// Returns the first duplicated code or emoji, if any.
pub fn first_duplicate(types: &[CommitType]) -> Option<&str> {
    types.iter().enumerate().find_map(|(index, ty)| {
        types.iter().skip(index + 1).find_map(|other| {
            if other.code == ty.code {
                Some(ty.code.as_str())
            } else if other.emoji == ty.emoji {
                Some(ty.emoji.as_str())
            } else {
                None
            }
        })
    })
}
