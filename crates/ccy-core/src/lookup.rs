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

//! Pure queries over the currency table.
//!
//! Every function is total over arbitrary string input, including the empty
//! string: absence is reported through `None`, an empty `Vec`, or `false`,
//! never through an error.

use std::collections::HashSet;

use crate::data::{currency_table, CURRENCY_SYMBOLS};

/// Look up the display symbol for an ISO 4217 code.
///
/// The code is matched case-insensitively; empty input yields `None`.
///
/// ```
/// assert_eq!(ccy_core::symbol_for_code("USD"), Some("$"));
/// assert_eq!(ccy_core::symbol_for_code("usd"), Some("$"));
/// assert_eq!(ccy_core::symbol_for_code("XYZ"), None);
/// ```
pub fn symbol_for_code(code: &str) -> Option<&'static str> {
  if code.is_empty() {
    return None;
  }
  currency_table().get(code.to_uppercase().as_str()).copied()
}

/// True iff the input is a currency code present in the table,
/// case-insensitively. Empty input is never valid.
pub fn is_valid_code(code: &str) -> bool {
  !code.is_empty() && currency_table().contains_key(code.to_uppercase().as_str())
}

/// All codes whose symbol equals the input exactly, in table order.
///
/// Symbols are matched case-sensitively with no normalization. An unknown
/// or empty symbol yields an empty vector, never an error.
///
/// ```
/// assert_eq!(ccy_core::codes_for_symbol("€"), vec!["EUR"]);
/// assert!(ccy_core::codes_for_symbol("?").is_empty());
/// ```
pub fn codes_for_symbol(symbol: &str) -> Vec<&'static str> {
  if symbol.is_empty() {
    return Vec::new();
  }
  CURRENCY_SYMBOLS.iter().filter(|entry| entry.symbol == symbol).map(|entry| entry.code).collect()
}

/// Look up a single code for a symbol.
///
/// "$", "£" and "¥" are each shared by several currencies; those three
/// resolve to their most prominent holders USD, GBP and JPY. Exactly these
/// three overrides exist — every other symbol, shared or not (e.g. "₨"),
/// resolves to the first matching code in table order.
///
/// ```
/// assert_eq!(ccy_core::code_for_symbol("$"), Some("USD"));
/// assert_eq!(ccy_core::code_for_symbol("€"), Some("EUR"));
/// assert_eq!(ccy_core::code_for_symbol("?"), None);
/// ```
pub fn code_for_symbol(symbol: &str) -> Option<&'static str> {
  match symbol {
    "" => None,
    "$" => Some("USD"),
    "£" => Some("GBP"),
    "¥" => Some("JPY"),
    _ => codes_for_symbol(symbol).first().copied(),
  }
}

/// Every distinct symbol in the table, deduplicated first-seen in table
/// order. The order is deterministic but not part of the contract.
pub fn all_symbols() -> Vec<&'static str> {
  let mut seen = HashSet::new();
  CURRENCY_SYMBOLS.iter().map(|entry| entry.symbol).filter(|symbol| seen.insert(*symbol)).collect()
}
