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
use moneta::{
    Money, Pattern,
    currencies::{AED, USD},
};
use rust_decimal_macros::dec;

pub fn bench_pattern_parse(c: &mut Criterion) {
    c.bench_function("pattern_parse", |b| {
        b.iter(|| Pattern::new_checked(black_box("2.,3%-%s%u")));
    });
}

pub fn bench_display_western(c: &mut Criterion) {
    let money = Money::new(dec!(-1234567.891), USD.clone());
    c.bench_function("display_western", |b| {
        b.iter(|| black_box(&money).to_string());
    });
}

pub fn bench_display_transliterated(c: &mut Criterion) {
    let money = Money::new(dec!(-1234567.891), AED.clone());
    c.bench_function("display_transliterated", |b| {
        b.iter(|| black_box(&money).to_string());
    });
}

pub fn bench_international_view(c: &mut Criterion) {
    let money = Money::new(dec!(-1234567.891), AED.clone());
    c.bench_function("international_view", |b| {
        b.iter(|| black_box(&money).international(None));
    });
}

pub fn bench_from_formatted(c: &mut Criterion) {
    let formatted = Money::new(dec!(-1234567.89), USD.clone()).to_string();
    c.bench_function("from_formatted", |b| {
        b.iter(|| Money::from_formatted(black_box(&formatted), USD.clone()));
    });
}

pub fn bench_arithmetic(c: &mut Criterion) {
    let lhs = Money::new(dec!(1234.5678), USD.clone());
    let rhs = Money::new(dec!(8765.4321), USD.clone());
    c.bench_function("add_then_scale", |b| {
        b.iter(|| (black_box(lhs.clone()) + black_box(rhs.clone())) * 3_i64);
    });
}

criterion_group!(
    benches,
    bench_pattern_parse,
    bench_display_western,
    bench_display_transliterated,
    bench_international_view,
    bench_from_formatted,
    bench_arithmetic,
);
criterion::criterion_main!(benches);
