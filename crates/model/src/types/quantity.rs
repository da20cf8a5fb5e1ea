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

//! Represents an immutable bag of livre, solidus and denier coins.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use moneybag_core::{correctness::FAILED, formatting::Noun};

use super::ordering::QuantityOrdering;

/// The number of soliduses in one livre.
pub const SOLIDI_PER_LIVRE: u64 = 20;

/// The number of deniers in one solidus.
pub const DENIERS_PER_SOLIDUS: u64 = 12;

/// The number of deniers in one livre.
pub const DENIERS_PER_LIVRE: u64 = SOLIDI_PER_LIVRE * DENIERS_PER_SOLIDUS;

const LIVRE_NOUN: Noun = Noun::new("livre", "livres");
const SOLIDUS_NOUN: Noun = Noun::new("solidus", "soliduses");
const DENIER_NOUN: Noun = Noun::new("denier", "deniers");

/// The error returned when a [`Quantity`] operation leaves the representable range.
///
/// Operations are all-or-nothing: when an error is returned no component of any operand
/// has been changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Adding `rhs` to `lhs` would exceed `u64::MAX` in at least one component.
    #[error("Overflow occurred when adding `Quantity` {rhs} to {lhs}")]
    AddOverflow { lhs: Quantity, rhs: Quantity },
    /// Multiplying `lhs` by `factor` would exceed `u64::MAX` in at least one component.
    #[error("Overflow occurred when multiplying `Quantity` {lhs} by {factor}")]
    MulOverflow { lhs: Quantity, factor: u64 },
    /// Subtracting `rhs` from `lhs` would make at least one component negative.
    #[error("Underflow occurred when subtracting `Quantity` {rhs} from {lhs}")]
    Underflow { lhs: Quantity, rhs: Quantity },
}

impl QuantityError {
    /// Returns `true` for either overflow variant.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::AddOverflow { .. } | Self::MulOverflow { .. })
    }

    /// Returns `true` for [`QuantityError::Underflow`].
    #[must_use]
    pub const fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }
}

/// Represents an immutable bag of coins in three denominations.
///
/// One livre is worth 20 soliduses, and one solidus is worth 12 deniers. Components are stored
/// exactly as given and never normalized across denominations: 36 soliduses and 3 livres are
/// different quantities even though they have the same [`Worth`](super::Worth).
///
/// Quantities are compared component-wise with [`Quantity::compare`], which is a partial order.
/// `Quantity` implements [`PartialOrd`] through it and deliberately does not implement [`Ord`].
///
/// All arithmetic is checked. The `checked_*` methods return a [`QuantityError`], the operator
/// impls panic with the same error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Quantity {
    livres: u64,
    soliduses: u64,
    deniers: u64,
}

/// A quantity of exactly one livre.
pub const LIVRE: Quantity = Quantity::new(1, 0, 0);

/// A quantity of exactly one solidus.
pub const SOLIDUS: Quantity = Quantity::new(0, 1, 0);

/// A quantity of exactly one denier.
pub const DENIER: Quantity = Quantity::new(0, 0, 1);

impl Quantity {
    /// The empty quantity.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a new [`Quantity`] instance holding the given coin counts verbatim.
    #[must_use]
    pub const fn new(livres: u64, soliduses: u64, deniers: u64) -> Self {
        Self {
            livres,
            soliduses,
            deniers,
        }
    }

    /// Creates a new empty [`Quantity`] instance.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the number of livres.
    #[must_use]
    pub const fn livres(&self) -> u64 {
        self.livres
    }

    /// Returns the number of soliduses.
    #[must_use]
    pub const fn soliduses(&self) -> u64 {
        self.soliduses
    }

    /// Returns the number of deniers.
    #[must_use]
    pub const fn deniers(&self) -> u64 {
        self.deniers
    }

    /// Returns `true` if every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.livres == 0 && self.soliduses == 0 && self.deniers == 0
    }

    /// Returns `true` if any component is non-zero.
    #[must_use]
    pub const fn is_nonempty(&self) -> bool {
        !self.is_zero()
    }

    /// Adds `rhs` component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::AddOverflow`] if any resulting component would exceed `u64::MAX`.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        if rhs.livres > u64::MAX - self.livres
            || rhs.soliduses > u64::MAX - self.soliduses
            || rhs.deniers > u64::MAX - self.deniers
        {
            log::debug!("Rejected `Quantity` addition: {self} + {rhs}");
            return Err(QuantityError::AddOverflow { lhs: self, rhs });
        }

        Ok(Self::new(
            self.livres + rhs.livres,
            self.soliduses + rhs.soliduses,
            self.deniers + rhs.deniers,
        ))
    }

    /// Subtracts `rhs` component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Underflow`] if any component of `rhs` exceeds the corresponding
    /// component of `self`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        if rhs.livres > self.livres || rhs.soliduses > self.soliduses || rhs.deniers > self.deniers
        {
            log::debug!("Rejected `Quantity` subtraction: {self} - {rhs}");
            return Err(QuantityError::Underflow { lhs: self, rhs });
        }

        Ok(Self::new(
            self.livres - rhs.livres,
            self.soliduses - rhs.soliduses,
            self.deniers - rhs.deniers,
        ))
    }

    /// Multiplies every component by `factor`.
    ///
    /// A zero `factor` always succeeds and yields the empty quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MulOverflow`] if any resulting component would exceed `u64::MAX`.
    pub fn checked_mul(self, factor: u64) -> Result<Self, QuantityError> {
        if factor > 0 {
            // Compare against the quotient so the check itself cannot overflow
            let limit = u64::MAX / factor;
            if self.livres > limit || self.soliduses > limit || self.deniers > limit {
                log::debug!("Rejected `Quantity` multiplication: {self} * {factor}");
                return Err(QuantityError::MulOverflow { lhs: self, factor });
            }
        }

        Ok(Self::new(
            self.livres * factor,
            self.soliduses * factor,
            self.deniers * factor,
        ))
    }

    /// Adds `rhs` in place, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::AddOverflow`] under the same conditions as
    /// [`Quantity::checked_add`].
    pub fn checked_add_assign(&mut self, rhs: Self) -> Result<(), QuantityError> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// Subtracts `rhs` in place, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Underflow`] under the same conditions as
    /// [`Quantity::checked_sub`].
    pub fn checked_sub_assign(&mut self, rhs: Self) -> Result<(), QuantityError> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// Multiplies by `factor` in place, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::MulOverflow`] under the same conditions as
    /// [`Quantity::checked_mul`].
    pub fn checked_mul_assign(&mut self, factor: u64) -> Result<(), QuantityError> {
        *self = self.checked_mul(factor)?;
        Ok(())
    }

    /// Computes a component-wise saturating subtraction, logging when any component is clamped.
    ///
    /// Each component of the result is `self - rhs` or zero where `rhs` holds more coins of
    /// that denomination.
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        let result = Self::new(
            self.livres.saturating_sub(rhs.livres),
            self.soliduses.saturating_sub(rhs.soliduses),
            self.deniers.saturating_sub(rhs.deniers),
        );

        if !self.compare(&rhs).is_ge() {
            log::warn!("Saturating `Quantity` subtraction: {self} - {rhs} clamped to {result}");
        }

        result
    }

    /// Sums `quantities` with [`Quantity::checked_add`], stopping at the first overflow.
    ///
    /// An empty iterator sums to [`Quantity::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::AddOverflow`] for the first addition that would overflow.
    pub fn checked_sum<I>(quantities: I) -> Result<Self, QuantityError>
    where
        I: IntoIterator<Item = Self>,
    {
        quantities.into_iter().try_fold(Self::ZERO, Self::checked_add)
    }

    /// Compares `self` with `other` component-wise.
    ///
    /// The result is [`QuantityOrdering::Unordered`] whenever one component is greater and
    /// another is less.
    #[must_use]
    pub const fn compare(&self, other: &Self) -> QuantityOrdering {
        if self.livres == other.livres
            && self.soliduses == other.soliduses
            && self.deniers == other.deniers
        {
            return QuantityOrdering::Equivalent;
        }
        if self.livres >= other.livres
            && self.soliduses >= other.soliduses
            && self.deniers >= other.deniers
        {
            return QuantityOrdering::Greater;
        }
        if self.livres <= other.livres
            && self.soliduses <= other.soliduses
            && self.deniers <= other.deniers
        {
            return QuantityOrdering::Less;
        }
        QuantityOrdering::Unordered
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.compare(other).into()
    }
}

impl From<Quantity> for bool {
    fn from(value: Quantity) -> Self {
        value.is_nonempty()
    }
}

impl Add for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any component overflows, see [`Quantity::checked_add`].
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Sub for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any component underflows, see [`Quantity::checked_sub`].
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Mul<u64> for Quantity {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any component overflows, see [`Quantity::checked_mul`].
    fn mul(self, rhs: u64) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{FAILED}: {e}"))
    }
}

impl Mul<Quantity> for u64 {
    type Output = Quantity;

    /// # Panics
    ///
    /// Panics if any component overflows, see [`Quantity::checked_mul`].
    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs * self
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<u64> for Quantity {
    fn mul_assign(&mut self, rhs: u64) {
        *self = *self * rhs;
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            LIVRE_NOUN.with_count(self.livres),
            SOLIDUS_NOUN.with_count(self.soliduses),
            DENIER_NOUN.with_count(self.deniers),
        )
    }
}
