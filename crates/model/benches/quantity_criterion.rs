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

use std::hint::black_box;

use criterion::{Criterion, criterion_group};
use moneybag_model::types::{DENIER, LIVRE, Quantity, Worth};

pub fn bench_checked_add(c: &mut Criterion) {
    let purse = Quantity::new(5, 3, 7);
    c.bench_function("quantity_checked_add", |b| {
        b.iter(|| black_box(purse).checked_add(black_box(LIVRE)));
    });
}

pub fn bench_checked_add_overflow(c: &mut Criterion) {
    let full = Quantity::new(0, 0, u64::MAX);
    c.bench_function("quantity_checked_add_overflow", |b| {
        b.iter(|| black_box(full).checked_add(black_box(DENIER)));
    });
}

pub fn bench_checked_mul(c: &mut Criterion) {
    let purse = Quantity::new(5, 3, 7);
    c.bench_function("quantity_checked_mul", |b| {
        b.iter(|| black_box(purse).checked_mul(black_box(1_000)));
    });
}

pub fn bench_compare(c: &mut Criterion) {
    let lhs = Quantity::new(5, 3, 7);
    let rhs = Quantity::new(4, 9, 7);
    c.bench_function("quantity_compare_unordered", |b| {
        b.iter(|| black_box(lhs).compare(black_box(&rhs)));
    });
}

pub fn bench_worth_from_quantity(c: &mut Criterion) {
    let full = Quantity::new(u64::MAX, u64::MAX, u64::MAX);
    c.bench_function("worth_from_quantity_max", |b| {
        b.iter(|| Worth::from(black_box(full)));
    });
}

pub fn bench_worth_to_string(c: &mut Criterion) {
    let worth = Worth::from(Quantity::new(u64::MAX, u64::MAX, u64::MAX));
    c.bench_function("worth_to_string_max", |b| {
        b.iter(|| black_box(worth).to_string());
    });
}

criterion_group!(
    benches,
    bench_checked_add,
    bench_checked_add_overflow,
    bench_checked_mul,
    bench_compare,
    bench_worth_from_quantity,
    bench_worth_to_string,
);
criterion::criterion_main!(benches);
