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

//! Fuzzy search among choices.
//!
//! Each choice is searched through one or more fields, and scores the best of
//! its fields. Scores are expressed in thousandths and lower is better. A match
//! scores the number of characters skipped inside the match relative to the
//! query length, plus its distance from the start of the field relative to
//! [`DISTANCE`]. Matches scoring above [`THRESHOLD`] are discarded.

use fuzzy_matcher::{FuzzyMatcher as _, skim::SkimMatcherV2};
use itertools::Itertools as _;

use super::Choice;

/// The score threshold above which a match is discarded.
pub const THRESHOLD: usize = 400;
/// How far from the start of the text a match can be.
pub const DISTANCE: usize = 100;
/// The unit of scores.
const SCALE: usize = 1_000;

/// A list of choices searchable with a fuzzy query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyChoices {
    /// The choices, in catalog order.
    choices: Vec<Choice>,
    /// The fields searched for each choice.
    fields: Vec<Vec<String>>,
}

impl FuzzyChoices {
    /// Builds a searchable list from choices and the fields to search for each.
    pub fn new(
        entries: impl IntoIterator<Item = (Choice, Vec<String>)>,
    ) -> Self {
        let (choices, fields) = entries.into_iter().unzip();
        Self { choices, fields }
    }

    /// Returns all the choices, in their original order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Scores the choice at `index` against `query`.
    ///
    /// Returns `None` when the choice does not match. An empty query matches
    /// everything with the best score.
    pub fn score(&self, query: &str, index: usize) -> Option<usize> {
        let fields = self.fields.get(index)?;
        let query = query.trim();

        if query.is_empty() {
            return Some(0);
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let score = fields
            .iter()
            .filter_map(|field| score_field(&matcher, field, query))
            .min()?;

        tracing::trace!(query, index, score);
        (score <= THRESHOLD).then_some(score)
    }

    /// Searches the choices matching `query`, best matches first.
    ///
    /// Choices with the same score keep their original order. An empty query
    /// returns all choices in their original order.
    pub fn search(&self, query: &str) -> Vec<&Choice> {
        self.choices
            .iter()
            .enumerate()
            .filter_map(|(index, choice)| {
                self.score(query, index).map(|score| (score, choice))
            })
            .sorted_by_key(|&(score, _)| score)
            .map(|(_, choice)| choice)
            .collect()
    }
}

/// Scores a non-empty `query` against a single field.
fn score_field(
    matcher: &SkimMatcherV2,
    field: &str,
    query: &str,
) -> Option<usize> {
    let (_, indices) = matcher.fuzzy_indices(field, query)?;
    let first = *indices.first()?;
    let last = *indices.last()?;

    let query_len = query.chars().count();
    let errors = (last - first + 1).saturating_sub(query_len);

    Some(errors * SCALE / query_len + first * SCALE / DISTANCE)
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    fn choices() -> FuzzyChoices {
        FuzzyChoices::new(
            [
                ("fix", "fix  Patching a bug.", ":bug:"),
                ("feature", "feature  Introducing new stuff.", ":sparkles:"),
                ("quickfix", "quickfix  Critical hotfix.", ":ambulance:"),
                ("docs", "docs  Writing docs.", ":memo:"),
            ]
            .map(|(value, label, code)| {
                (
                    Choice::new(value, value),
                    vec![String::from(label), String::from(code)],
                )
            }),
        )
    }

    fn values(found: Vec<&Choice>) -> Vec<&str> {
        found.into_iter().map(|choice| choice.value.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let choices = choices();

        assert_eq!(
            values(choices.search("")),
            ["fix", "feature", "quickfix", "docs"]
        );
        assert_eq!(values(choices.search("  ")).len(), 4);
    }

    #[test]
    fn matches_near_the_start_rank_first() {
        let choices = choices();
        let found = values(choices.search("fix"));

        assert_eq!(found.first(), Some(&"fix"));
        assert!(found.contains(&"quickfix"));
        assert!(!found.contains(&"docs"));
    }

    #[test]
    fn exact_prefix_scores_zero() {
        assert_eq!(choices().score("feature", 1), Some(0));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(values(choices().search("DOCS")).first(), Some(&"docs"));
    }

    #[test]
    fn scattered_matches_are_discarded() {
        assert_eq!(choices().score("fxbg", 0), None);
    }

    #[test]
    fn non_matching_queries_return_nothing() {
        assert!(choices().search("zzz").is_empty());
    }

    #[test]
    fn each_field_is_searched_from_its_start() {
        let choices = choices();

        assert_eq!(choices.score(":sparkles:", 1), Some(0));
        assert_eq!(values(choices.search("ambulance")), ["quickfix"]);
    }

    #[test]
    fn out_of_range_index_does_not_match() {
        assert_eq!(choices().score("fix", 42), None);
    }
}
