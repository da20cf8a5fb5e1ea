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

//! The outcome of comparing two quantities component-wise.

use std::cmp::Ordering;

use strum::{AsRefStr, Display, EnumIter};

/// The four possible outcomes of comparing two [`Quantity`](super::Quantity) values.
///
/// Quantities are ordered component-wise, which is a partial order: a bag holding more livres
/// but fewer deniers than another is neither greater nor less than it, it is
/// [`QuantityOrdering::Unordered`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityOrdering {
    /// Every component is pairwise equal.
    Equivalent,
    /// Every component of the left operand is >= the right, and at least one is strictly greater.
    Greater,
    /// Every component of the left operand is <= the right, and at least one is strictly less.
    Less,
    /// Some component is greater and some other component is less.
    Unordered,
}

impl QuantityOrdering {
    /// Returns `true` if the outcome is [`QuantityOrdering::Equivalent`].
    #[must_use]
    pub const fn is_eq(self) -> bool {
        matches!(self, Self::Equivalent)
    }

    /// Returns `true` if the outcome is [`QuantityOrdering::Less`].
    #[must_use]
    pub const fn is_lt(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns `true` if the outcome is [`QuantityOrdering::Less`] or
    /// [`QuantityOrdering::Equivalent`].
    #[must_use]
    pub const fn is_le(self) -> bool {
        matches!(self, Self::Less | Self::Equivalent)
    }

    /// Returns `true` if the outcome is [`QuantityOrdering::Greater`].
    #[must_use]
    pub const fn is_gt(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Returns `true` if the outcome is [`QuantityOrdering::Greater`] or
    /// [`QuantityOrdering::Equivalent`].
    #[must_use]
    pub const fn is_ge(self) -> bool {
        matches!(self, Self::Greater | Self::Equivalent)
    }

    /// Returns `true` if the outcome is [`QuantityOrdering::Unordered`].
    #[must_use]
    pub const fn is_unordered(self) -> bool {
        matches!(self, Self::Unordered)
    }

    /// Returns the outcome seen from the other operand.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Greater => Self::Less,
            Self::Less => Self::Greater,
            other => other,
        }
    }
}

impl From<QuantityOrdering> for Option<Ordering> {
    fn from(value: QuantityOrdering) -> Self {
        match value {
            QuantityOrdering::Equivalent => Some(Ordering::Equal),
            QuantityOrdering::Greater => Some(Ordering::Greater),
            QuantityOrdering::Less => Some(Ordering::Less),
            QuantityOrdering::Unordered => None,
        }
    }
}

impl From<Ordering> for QuantityOrdering {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Equal => Self::Equivalent,
            Ordering::Greater => Self::Greater,
            Ordering::Less => Self::Less,
        }
    }
}
