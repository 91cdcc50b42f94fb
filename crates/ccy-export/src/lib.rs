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

//! JSON snapshot export of the currency table.
//!
//! Produces a one-way derived artifact for consumers outside the Rust
//! ecosystem at packaging time. The lookup API never reads this file back.

use std::fs;
use std::path::Path;

use ccy_core::CURRENCY_SYMBOLS;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Errors raised while producing the snapshot artifact.
#[derive(Debug, Error)]
pub enum ExportError {
  /// Filesystem failure writing the artifact
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Serialization failure
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

// Serializing the ordered slice directly keeps the artifact in table order;
// collecting into a map first would re-key it.
struct Snapshot;

impl Serialize for Snapshot {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(CURRENCY_SYMBOLS.len()))?;
    for entry in &CURRENCY_SYMBOLS {
      map.serialize_entry(entry.code, entry.symbol)?;
    }
    map.end()
  }
}

/// Render the full code to symbol table as a pretty-printed JSON object,
/// entries in table order.
pub fn to_json_string() -> Result<String, ExportError> {
  Ok(serde_json::to_string_pretty(&Snapshot)?)
}

/// Write the JSON snapshot, newline-terminated, to `path`.
pub fn write_snapshot<P: AsRef<Path>>(path: P) -> Result<(), ExportError> {
  let mut document = to_json_string()?;
  document.push('\n');
  fs::write(path, document)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn test_snapshot_round_trips_the_table() {
    let document = to_json_string().unwrap();
    let parsed: HashMap<String, String> = serde_json::from_str(&document).unwrap();

    assert_eq!(parsed.len(), CURRENCY_SYMBOLS.len());
    for entry in &CURRENCY_SYMBOLS {
      assert_eq!(parsed[entry.code], entry.symbol, "mismatch for {}", entry.code);
    }
  }

  #[test]
  fn test_snapshot_preserves_table_order() {
    let document = to_json_string().unwrap();
    let first_key = document
      .lines()
      .find_map(|line| line.trim().strip_prefix('"').and_then(|rest| rest.split('"').next()));
    assert_eq!(first_key, Some("USD"));
  }

  #[test]
  fn test_write_snapshot_creates_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_symbols.json");

    write_snapshot(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with('\n'));
    assert_eq!(written.trim_end(), to_json_string().unwrap());
  }
}
