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

//! End-to-end scenarios against the built `ccy` binary.

use std::process::{Command, Output};

fn ccy(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_ccy")).args(args).output().expect("failed to run ccy")
}

fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_usage_and_succeeds() {
  let output = ccy(&[]);
  assert!(output.status.success());
  assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_known_code_prints_its_symbol() {
  let output = ccy(&["EUR"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output).trim(), "€");
}

#[test]
fn test_code_lookup_is_case_insensitive() {
  let output = ccy(&["eur"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output).trim(), "€");
}

#[test]
fn test_shared_symbol_lists_codes_comma_separated() {
  let output = ccy(&["$"]);
  assert!(output.status.success());
  let printed = stdout(&output);
  assert!(printed.starts_with("USD, "));
  assert!(printed.contains("CAD"));
  assert!(printed.contains("AUD"));
}

#[test]
fn test_unknown_argument_reports_no_match_and_fails() {
  let output = ccy(&["ZZZ"]);
  assert_eq!(output.status.code(), Some(1));
  assert!(stdout(&output).contains("No match found for 'ZZZ'"));
}
