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

//! Type stubs to facilitate testing.

use rstest::fixture;

use super::{DENIER, LIVRE, Quantity, SOLIDUS, Worth};

#[fixture]
pub fn quantity_empty() -> Quantity {
    Quantity::ZERO
}

/// One coin of each denomination, worth 253 deniers.
#[fixture]
pub fn quantity_one_each() -> Quantity {
    LIVRE + SOLIDUS + DENIER
}

/// Every component at `u64::MAX`.
#[fixture]
pub fn quantity_max() -> Quantity {
    Quantity::new(u64::MAX, u64::MAX, u64::MAX)
}

/// A purse of 5 livres, 3 soliduses and 7 deniers.
#[fixture]
pub fn quantity_purse() -> Quantity {
    5_u64 * LIVRE + 3_u64 * SOLIDUS + 7_u64 * DENIER
}

#[fixture]
pub fn worth_max_quantity(quantity_max: Quantity) -> Worth {
    Worth::from(quantity_max)
}
