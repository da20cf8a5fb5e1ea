// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Count-aware wording for human-readable renderings.

use std::fmt::{Display, Formatter};

/// A noun with its singular and plural spellings.
///
/// Irregular plurals are spelled out rather than derived, so `Noun::new("solidus", "soliduses")`
/// and `Noun::new("denier", "deniers")` are both expressed the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Noun {
    singular: &'static str,
    plural: &'static str,
}

impl Noun {
    /// Creates a new [`Noun`] instance.
    #[must_use]
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// Returns the singular spelling.
    #[must_use]
    pub const fn singular(&self) -> &'static str {
        self.singular
    }

    /// Returns the plural spelling.
    #[must_use]
    pub const fn plural(&self) -> &'static str {
        self.plural
    }

    /// Returns the spelling agreeing with `count`: singular for exactly one, plural otherwise
    /// (including zero).
    #[must_use]
    pub const fn for_count(&self, count: u64) -> &'static str {
        if count == 1 {
            self.singular
        } else {
            self.plural
        }
    }

    /// Returns a displayable `"{count} {noun}"` pair with the agreeing spelling.
    #[must_use]
    pub const fn with_count(self, count: u64) -> Counted {
        Counted { count, noun: self }
    }
}

impl Display for Noun {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.singular)
    }
}

/// A count paired with a [`Noun`], rendered as `"{count} {noun}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counted {
    count: u64,
    noun: Noun,
}

impl Display for Counted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.noun.for_count(self.count))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SOLIDUS: Noun = Noun::new("solidus", "soliduses");

    #[rstest]
    #[case(0, "soliduses")]
    #[case(1, "solidus")]
    #[case(2, "soliduses")]
    #[case(12, "soliduses")]
    #[case(u64::MAX, "soliduses")]
    fn test_for_count(#[case] count: u64, #[case] expected: &str) {
        assert_eq!(SOLIDUS.for_count(count), expected);
    }

    #[rstest]
    #[case(0, "0 soliduses")]
    #[case(1, "1 solidus")]
    #[case(11, "11 soliduses")]
    fn test_with_count_display(#[case] count: u64, #[case] expected: &str) {
        assert_eq!(SOLIDUS.with_count(count).to_string(), expected);
    }

    #[rstest]
    fn test_accessors() {
        assert_eq!(SOLIDUS.singular(), "solidus");
        assert_eq!(SOLIDUS.plural(), "soliduses");
        assert_eq!(SOLIDUS.to_string(), "solidus");
    }
}
