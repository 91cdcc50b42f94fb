/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! A static mapping of ISO 4217 currency codes to their common display
//! symbols, with pure functions for bidirectional lookup.
//!
//! The table is compiled in and never mutated, so every query is a
//! deterministic computation over shared immutable data and is safe to call
//! from any number of threads without synchronization.
//!
//! ```
//! use ccy_core::{code_for_symbol, symbol_for_code};
//!
//! assert_eq!(symbol_for_code("eur"), Some("€"));
//! assert_eq!(code_for_symbol("$"), Some("USD"));
//! ```

pub mod data;
pub mod lookup;

pub use data::{currency_table, CurrencyEntry, CURRENCY_SYMBOLS};
pub use lookup::{all_symbols, code_for_symbol, codes_for_symbol, is_valid_code, symbol_for_code};
