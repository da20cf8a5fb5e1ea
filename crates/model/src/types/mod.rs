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

//! Value types for coin quantities and their worth.
//!
//! This module provides two immutable value types: [`Quantity`], a bag of livre, solidus and
//! denier coins, and [`Worth`], the total value of such a bag counted in deniers.
//!
//! # Immutability
//!
//! Both types are **immutable** `Copy` values. Arithmetic returns new instances; the compound
//! assignment operators replace the caller's binding only once the whole result is known.
//!
//! # Arithmetic operations
//!
//! | Operation             | Result     | Notes                                        |
//! |-----------------------|------------|----------------------------------------------|
//! | `Quantity + Quantity` | `Quantity` | Panics if any component would overflow.      |
//! | `Quantity - Quantity` | `Quantity` | Panics if any component would go negative.   |
//! | `Quantity * u64`      | `Quantity` | Also `u64 * Quantity`. Panics on overflow.   |
//!
//! Each operator has a `checked_*` counterpart returning a [`QuantityError`] instead.
//!
//! # Ordering
//!
//! - [`Quantity`]: Partial order, component-wise. See [`Quantity::compare`] and
//!   [`QuantityOrdering`].
//! - [`Worth`]: Total order, also comparable against a plain `u64` count of deniers.
//!
//! # Denominations
//!
//! 1 livre = [`SOLIDI_PER_LIVRE`] soliduses = [`DENIERS_PER_LIVRE`] deniers. The unit
//! constants [`LIVRE`], [`SOLIDUS`] and [`DENIER`] build arbitrary quantities:
//!
//! ```
//! use moneybag_model::types::{DENIER, LIVRE, SOLIDUS, Quantity, Worth};
//!
//! let purse = 5_u64 * LIVRE + 3_u64 * SOLIDUS + DENIER;
//! assert_eq!(purse, Quantity::new(5, 3, 1));
//! assert_eq!(Worth::from(purse), 1_237_u64);
//! ```

pub mod ordering;
pub mod quantity;
pub mod worth;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use ordering::QuantityOrdering;
pub use quantity::{
    DENIER, DENIERS_PER_LIVRE, DENIERS_PER_SOLIDUS, LIVRE, Quantity, QuantityError, SOLIDI_PER_LIVRE,
    SOLIDUS,
};
pub use worth::Worth;
