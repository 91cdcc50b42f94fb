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

use ccy_core::{codes_for_symbol, is_valid_code, symbol_for_code};
use tracing::debug;

/// What a query argument turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The argument was a currency code; its symbol.
  Symbol(&'static str),
  /// The argument matched as a symbol; every code using it, in table order.
  Codes(Vec<&'static str>),
  /// Neither a known code nor a known symbol.
  NoMatch,
}

/// Resolve a query as a currency code first, then as a symbol.
pub fn resolve(query: &str) -> Outcome {
  if is_valid_code(query) {
    debug!("'{query}' is a currency code");
    match symbol_for_code(query) {
      Some(symbol) => Outcome::Symbol(symbol),
      None => Outcome::NoMatch,
    }
  } else {
    debug!("'{query}' is not a code, trying it as a symbol");
    let codes = codes_for_symbol(query);
    if codes.is_empty() {
      Outcome::NoMatch
    } else {
      Outcome::Codes(codes)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_code_resolves_to_its_symbol() {
    assert_eq!(resolve("EUR"), Outcome::Symbol("€"));
    assert_eq!(resolve("eur"), Outcome::Symbol("€"));
  }

  #[test]
  fn test_symbol_resolves_to_codes_in_table_order() {
    match resolve("$") {
      Outcome::Codes(codes) => {
        assert_eq!(codes[0], "USD");
        assert!(codes.contains(&"CAD"));
        assert!(codes.contains(&"AUD"));
      }
      other => panic!("expected codes, got {other:?}"),
    }
  }

  #[test]
  fn test_codes_win_over_symbols() {
    // "R" is ZAR's symbol but no currency's code, so it resolves as a symbol
    assert_eq!(resolve("R"), Outcome::Codes(vec!["ZAR"]));
    // "ALL" is a code even though "L" appears in several symbols
    assert_eq!(resolve("ALL"), Outcome::Symbol("L"));
  }

  #[test]
  fn test_unknown_query_has_no_match() {
    assert_eq!(resolve("ZZZ"), Outcome::NoMatch);
    assert_eq!(resolve(""), Outcome::NoMatch);
  }
}
