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

//! Represents the total worth of a quantity of coins, counted in deniers.

use std::{cmp::Ordering, fmt::Display};

use super::quantity::{DENIERS_PER_LIVRE, DENIERS_PER_SOLIDUS, Quantity};

/// Represents a total worth in deniers.
///
/// The worth is stored as a `u128` so that converting any [`Quantity`], including one with
/// every component at `u64::MAX`, is exact: the largest possible result is
/// `252 * u64::MAX`, which needs fewer than 72 bits.
///
/// Worth is totally ordered. There is no conversion back to a [`Quantity`] since many
/// quantities share the same worth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Worth {
    deniers: u128,
}

impl Worth {
    /// A worth of zero deniers.
    pub const ZERO: Self = Self { deniers: 0 };

    /// Creates a new [`Worth`] instance from a count of deniers.
    #[must_use]
    pub const fn new(deniers: u64) -> Self {
        Self {
            deniers: deniers as u128,
        }
    }

    /// Creates a new [`Worth`] instance from a raw count of deniers which may exceed `u64`.
    #[must_use]
    pub const fn from_raw(deniers: u128) -> Self {
        Self { deniers }
    }

    /// Creates a new [`Worth`] instance of zero deniers.
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the exact worth of `quantity`.
    #[must_use]
    pub const fn from_quantity(quantity: &Quantity) -> Self {
        let deniers = quantity.livres() as u128 * DENIERS_PER_LIVRE as u128
            + quantity.soliduses() as u128 * DENIERS_PER_SOLIDUS as u128
            + quantity.deniers() as u128;
        Self { deniers }
    }

    /// Returns the worth in deniers.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.deniers
    }

    /// Returns `true` if the worth is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.deniers == 0
    }

    /// Compares this worth against a plain count of deniers.
    #[must_use]
    pub fn cmp_deniers(&self, deniers: u64) -> Ordering {
        self.deniers.cmp(&u128::from(deniers))
    }
}

impl From<Quantity> for Worth {
    fn from(value: Quantity) -> Self {
        Self::from_quantity(&value)
    }
}

impl From<&Quantity> for Worth {
    fn from(value: &Quantity) -> Self {
        Self::from_quantity(value)
    }
}

impl From<u64> for Worth {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Worth> for u128 {
    fn from(value: Worth) -> Self {
        value.deniers
    }
}

impl From<Worth> for String {
    fn from(value: Worth) -> Self {
        value.to_string()
    }
}

impl PartialEq<u64> for Worth {
    fn eq(&self, other: &u64) -> bool {
        self.cmp_deniers(*other).is_eq()
    }
}

impl PartialOrd<u64> for Worth {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.cmp_deniers(*other))
    }
}

impl PartialEq<Worth> for u64 {
    fn eq(&self, other: &Worth) -> bool {
        other == self
    }
}

impl PartialOrd<Worth> for u64 {
    fn partial_cmp(&self, other: &Worth) -> Option<Ordering> {
        Some(other.cmp_deniers(*self).reverse())
    }
}

impl Display for Worth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deniers)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::types::{
        quantity::{DENIER, LIVRE, SOLIDUS},
        stubs::*,
    };

    /// Multiplies a decimal digit string by a small factor, digit by digit.
    fn decimal_mul(digits: &str, factor: u32) -> String {
        let mut out = Vec::with_capacity(digits.len() + 4);
        let mut carry = 0_u32;
        for c in digits.bytes().rev() {
            let product = u32::from(c - b'0') * factor + carry;
            out.push(b'0' + (product % 10) as u8);
            carry = product / 10;
        }
        while carry > 0 {
            out.push(b'0' + (carry % 10) as u8);
            carry /= 10;
        }
        out.reverse();
        String::from_utf8(out).unwrap()
    }

    /// Adds two decimal digit strings, digit by digit.
    fn decimal_add(a: &str, b: &str) -> String {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
        let mut carry = 0_u8;
        for i in 0..a.len().max(b.len()) {
            let da = if i < a.len() { a[a.len() - 1 - i] - b'0' } else { 0 };
            let db = if i < b.len() { b[b.len() - 1 - i] - b'0' } else { 0 };
            let sum = da + db + carry;
            out.push(b'0' + sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(b'0' + carry);
        }
        out.reverse();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn test_decimal_helpers() {
        assert_eq!(decimal_mul("99", 240), "23760");
        assert_eq!(decimal_add("999", "1"), "1000");
        assert_eq!(decimal_add("1", "23760"), "23761");
    }

    #[rstest]
    fn test_default_is_zero() {
        assert_eq!(Worth::default(), Worth::ZERO);
        assert_eq!(Worth::zero(), 0_u64);
        assert!(Worth::zero().is_zero());
        assert_eq!(Worth::zero().to_string(), "0");
    }

    #[rstest]
    #[case(LIVRE, 240)]
    #[case(SOLIDUS, 12)]
    #[case(DENIER, 1)]
    #[case(Quantity::new(1, 1, 1), 253)]
    #[case(Quantity::new(0, 20, 0), 240)]
    #[case(Quantity::ZERO, 0)]
    fn test_from_quantity(#[case] quantity: Quantity, #[case] expected: u64) {
        assert_eq!(Worth::from(quantity), expected);
        assert_eq!(Worth::from(&quantity), Worth::new(expected));
    }

    #[rstest]
    fn test_from_quantity_is_const() {
        const WORTH: Worth = Worth::from_quantity(&Quantity::new(2, 0, 5));
        assert_eq!(WORTH.raw(), 485);
    }

    #[rstest]
    fn test_max_quantity_is_exact(worth_max_quantity: Worth) {
        let max = u64::MAX.to_string();
        let expected = decimal_add(
            &decimal_add(&decimal_mul(&max, 240), &decimal_mul(&max, 12)),
            &max,
        );
        assert_eq!(worth_max_quantity.to_string(), expected);
        assert_eq!(String::from(worth_max_quantity), "4667026250648516558595");
        assert_eq!(worth_max_quantity.raw(), u128::from(u64::MAX) * 253);
    }

    #[rstest]
    fn test_equal_worth_for_distinct_quantities() {
        let livres = Quantity::new(3, 0, 0);
        let soliduses = Quantity::new(0, 60, 0);
        assert_ne!(livres, soliduses);
        assert_eq!(Worth::from(livres), Worth::from(soliduses));
    }

    #[rstest]
    fn test_total_order() {
        let low = Worth::from(Quantity::new(1, 0, 0));
        let high = Worth::from(Quantity::new(0, 0, 241));
        assert!(low < high);
        assert_eq!(low.cmp(&high), Ordering::Less);
        assert_eq!(high.cmp(&low), Ordering::Greater);
        assert_eq!(low.cmp(&Worth::new(240)), Ordering::Equal);
    }

    #[rstest]
    #[case(Worth::new(240), 240, Ordering::Equal)]
    #[case(Worth::new(240), 239, Ordering::Greater)]
    #[case(Worth::new(240), 241, Ordering::Less)]
    #[case(Worth::from_raw(u128::from(u64::MAX) + 1), u64::MAX, Ordering::Greater)]
    fn test_cmp_deniers(#[case] worth: Worth, #[case] deniers: u64, #[case] expected: Ordering) {
        assert_eq!(worth.cmp_deniers(deniers), expected);
        assert_eq!(worth.partial_cmp(&deniers), Some(expected));
        assert_eq!(deniers.partial_cmp(&worth), Some(expected.reverse()));
        assert_eq!(worth == deniers, expected.is_eq());
        assert_eq!(deniers == worth, expected.is_eq());
    }

    #[rstest]
    fn test_raw_count_comparison_operators(quantity_one_each: Quantity) {
        let worth = Worth::from(quantity_one_each);
        assert!(worth > 252_u64);
        assert!(worth >= 253_u64);
        assert!(worth <= 253_u64);
        assert!(worth < 254_u64);
        assert!(252_u64 < worth);
    }

    #[rstest]
    fn test_from_raw_beyond_u64() {
        let raw = u128::from(u64::MAX) * 1_000;
        let worth = Worth::from_raw(raw);
        assert_eq!(worth.raw(), raw);
        assert_eq!(u128::from(worth), raw);
        assert_eq!(worth.to_string(), raw.to_string());
    }

    #[rstest]
    fn test_linearity(quantity_purse: Quantity, quantity_one_each: Quantity) {
        let sum = Worth::from(quantity_purse + quantity_one_each);
        assert_eq!(
            sum.raw(),
            Worth::from(quantity_purse).raw() + Worth::from(quantity_one_each).raw()
        );
        assert_eq!(
            Worth::from(quantity_purse * 7).raw(),
            7 * Worth::from(quantity_purse).raw()
        );
    }
}
