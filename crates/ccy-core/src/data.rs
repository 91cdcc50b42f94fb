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

//! The canonical ISO 4217 code to symbol dataset.
//!
//! Sourced from CLDR and Unicode character data; a fixed, hand-curated
//! snapshot rather than a live registry. The 16 major global currencies come
//! first, followed by the remaining currencies in alphabetical code order.
//! Several query functions depend on this ordering, so entries must not be
//! re-sorted.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A single code/symbol association in the currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyEntry {
  /// ISO 4217 alpha-3 code, uppercase (e.g. "USD")
  pub code: &'static str,
  /// Common display symbol (e.g. "$"); shared by several codes in places
  pub symbol: &'static str,
}

/// The full currency dataset, in canonical table order.
pub static CURRENCY_SYMBOLS: [CurrencyEntry; 157] = [
  // Major global currencies
  CurrencyEntry { code: "USD", symbol: "$" }, // United States Dollar
  CurrencyEntry { code: "EUR", symbol: "€" }, // Euro
  CurrencyEntry { code: "GBP", symbol: "£" }, // British Pound Sterling
  CurrencyEntry { code: "JPY", symbol: "¥" }, // Japanese Yen
  CurrencyEntry { code: "CNY", symbol: "¥" }, // Chinese Yuan Renminbi
  CurrencyEntry { code: "AUD", symbol: "$" }, // Australian Dollar
  CurrencyEntry { code: "CAD", symbol: "$" }, // Canadian Dollar
  CurrencyEntry { code: "CHF", symbol: "CHF" }, // Swiss Franc
  CurrencyEntry { code: "HKD", symbol: "$" }, // Hong Kong Dollar
  CurrencyEntry { code: "SGD", symbol: "$" }, // Singapore Dollar
  CurrencyEntry { code: "INR", symbol: "₹" }, // Indian Rupee
  CurrencyEntry { code: "RUB", symbol: "₽" }, // Russian Ruble
  CurrencyEntry { code: "BRL", symbol: "R$" }, // Brazilian Real
  CurrencyEntry { code: "KRW", symbol: "₩" }, // South Korean Won
  CurrencyEntry { code: "MXN", symbol: "$" }, // Mexican Peso
  CurrencyEntry { code: "ZAR", symbol: "R" }, // South African Rand

  // Other significant currencies
  CurrencyEntry { code: "AED", symbol: "د.إ" }, // United Arab Emirates Dirham
  CurrencyEntry { code: "AFN", symbol: "؋" }, // Afghan Afghani
  CurrencyEntry { code: "ALL", symbol: "L" }, // Albanian Lek
  CurrencyEntry { code: "AMD", symbol: "֏" }, // Armenian Dram
  CurrencyEntry { code: "ANG", symbol: "ƒ" }, // Netherlands Antillean Guilder
  CurrencyEntry { code: "AOA", symbol: "Kz" }, // Angolan Kwanza
  CurrencyEntry { code: "ARS", symbol: "$" }, // Argentine Peso
  CurrencyEntry { code: "AWG", symbol: "ƒ" }, // Aruban Florin
  CurrencyEntry { code: "AZN", symbol: "₼" }, // Azerbaijani Manat
  CurrencyEntry { code: "BAM", symbol: "KM" }, // Bosnia and Herzegovina Convertible Mark
  CurrencyEntry { code: "BBD", symbol: "$" }, // Barbadian Dollar
  CurrencyEntry { code: "BDT", symbol: "৳" }, // Bangladeshi Taka
  CurrencyEntry { code: "BGN", symbol: "лв" }, // Bulgarian Lev
  CurrencyEntry { code: "BHD", symbol: ".د.ب" }, // Bahraini Dinar
  CurrencyEntry { code: "BIF", symbol: "FBu" }, // Burundian Franc
  CurrencyEntry { code: "BMD", symbol: "$" }, // Bermudian Dollar
  CurrencyEntry { code: "BND", symbol: "$" }, // Brunei Dollar
  CurrencyEntry { code: "BOB", symbol: "Bs." }, // Bolivian Boliviano
  CurrencyEntry { code: "BSD", symbol: "$" }, // Bahamian Dollar
  CurrencyEntry { code: "BTN", symbol: "Nu." }, // Bhutanese Ngultrum
  CurrencyEntry { code: "BWP", symbol: "P" }, // Botswana Pula
  CurrencyEntry { code: "BYN", symbol: "Br" }, // Belarusian Ruble
  CurrencyEntry { code: "BZD", symbol: "BZ$" }, // Belize Dollar
  CurrencyEntry { code: "CDF", symbol: "FC" }, // Congolese Franc
  CurrencyEntry { code: "CLP", symbol: "$" }, // Chilean Peso
  CurrencyEntry { code: "COP", symbol: "$" }, // Colombian Peso
  CurrencyEntry { code: "CRC", symbol: "₡" }, // Costa Rican Colón
  CurrencyEntry { code: "CUC", symbol: "$" }, // Cuban Convertible Peso
  CurrencyEntry { code: "CUP", symbol: "₱" }, // Cuban Peso
  CurrencyEntry { code: "CVE", symbol: "$" }, // Cape Verdean Escudo
  CurrencyEntry { code: "CZK", symbol: "Kč" }, // Czech Koruna
  CurrencyEntry { code: "DJF", symbol: "Fdj" }, // Djiboutian Franc
  CurrencyEntry { code: "DKK", symbol: "kr" }, // Danish Krone
  CurrencyEntry { code: "DOP", symbol: "RD$" }, // Dominican Peso
  CurrencyEntry { code: "DZD", symbol: "د.ج" }, // Algerian Dinar
  CurrencyEntry { code: "EGP", symbol: "£" }, // Egyptian Pound
  CurrencyEntry { code: "ERN", symbol: "Nfk" }, // Eritrean Nakfa
  CurrencyEntry { code: "ETB", symbol: "Br" }, // Ethiopian Birr
  CurrencyEntry { code: "FJD", symbol: "$" }, // Fijian Dollar
  CurrencyEntry { code: "FKP", symbol: "£" }, // Falkland Islands Pound
  CurrencyEntry { code: "GEL", symbol: "₾" }, // Georgian Lari
  CurrencyEntry { code: "GHS", symbol: "₵" }, // Ghanaian Cedi
  CurrencyEntry { code: "GIP", symbol: "£" }, // Gibraltar Pound
  CurrencyEntry { code: "GMD", symbol: "D" }, // Gambian Dalasi
  CurrencyEntry { code: "GNF", symbol: "FG" }, // Guinean Franc
  CurrencyEntry { code: "GTQ", symbol: "Q" }, // Guatemalan Quetzal
  CurrencyEntry { code: "GYD", symbol: "$" }, // Guyanese Dollar
  CurrencyEntry { code: "HNL", symbol: "L" }, // Honduran Lempira
  CurrencyEntry { code: "HRK", symbol: "kn" }, // Croatian Kuna
  CurrencyEntry { code: "HTG", symbol: "G" }, // Haitian Gourde
  CurrencyEntry { code: "HUF", symbol: "Ft" }, // Hungarian Forint
  CurrencyEntry { code: "IDR", symbol: "Rp" }, // Indonesian Rupiah
  CurrencyEntry { code: "ILS", symbol: "₪" }, // Israeli New Shekel
  CurrencyEntry { code: "IQD", symbol: "ع.د" }, // Iraqi Dinar
  CurrencyEntry { code: "IRR", symbol: "﷼" }, // Iranian Rial
  CurrencyEntry { code: "ISK", symbol: "kr" }, // Icelandic Króna
  CurrencyEntry { code: "JMD", symbol: "J$" }, // Jamaican Dollar
  CurrencyEntry { code: "JOD", symbol: "د.ا" }, // Jordanian Dinar
  CurrencyEntry { code: "KES", symbol: "KSh" }, // Kenyan Shilling
  CurrencyEntry { code: "KGS", symbol: "с" }, // Kyrgyzstani Som
  CurrencyEntry { code: "KHR", symbol: "៛" }, // Cambodian Riel
  CurrencyEntry { code: "KMF", symbol: "CF" }, // Comorian Franc
  CurrencyEntry { code: "KPW", symbol: "₩" }, // North Korean Won
  CurrencyEntry { code: "KWD", symbol: "د.ك" }, // Kuwaiti Dinar
  CurrencyEntry { code: "KYD", symbol: "$" }, // Cayman Islands Dollar
  CurrencyEntry { code: "KZT", symbol: "₸" }, // Kazakhstani Tenge
  CurrencyEntry { code: "LAK", symbol: "₭" }, // Lao Kip
  CurrencyEntry { code: "LBP", symbol: "ل.ل" }, // Lebanese Pound
  CurrencyEntry { code: "LKR", symbol: "₨" }, // Sri Lankan Rupee
  CurrencyEntry { code: "LRD", symbol: "$" }, // Liberian Dollar
  CurrencyEntry { code: "LSL", symbol: "L" }, // Lesotho Loti
  CurrencyEntry { code: "LYD", symbol: "ل.د" }, // Libyan Dinar
  CurrencyEntry { code: "MAD", symbol: "د.م." }, // Moroccan Dirham
  CurrencyEntry { code: "MDL", symbol: "L" }, // Moldovan Leu
  CurrencyEntry { code: "MGA", symbol: "Ar" }, // Malagasy Ariary
  CurrencyEntry { code: "MKD", symbol: "ден" }, // Macedonian Denar
  CurrencyEntry { code: "MMK", symbol: "K" }, // Myanmar Kyat
  CurrencyEntry { code: "MNT", symbol: "₮" }, // Mongolian Tögrög
  CurrencyEntry { code: "MOP", symbol: "MOP$" }, // Macanese Pataca
  CurrencyEntry { code: "MRU", symbol: "UM" }, // Mauritanian Ouguiya
  CurrencyEntry { code: "MUR", symbol: "₨" }, // Mauritian Rupee
  CurrencyEntry { code: "MVR", symbol: "Rf" }, // Maldivian Rufiyaa
  CurrencyEntry { code: "MWK", symbol: "MK" }, // Malawian Kwacha
  CurrencyEntry { code: "MYR", symbol: "RM" }, // Malaysian Ringgit
  CurrencyEntry { code: "MZN", symbol: "MT" }, // Mozambican Metical
  CurrencyEntry { code: "NAD", symbol: "$" }, // Namibian Dollar
  CurrencyEntry { code: "NGN", symbol: "₦" }, // Nigerian Naira
  CurrencyEntry { code: "NIO", symbol: "C$" }, // Nicaraguan Córdoba
  CurrencyEntry { code: "NOK", symbol: "kr" }, // Norwegian Krone
  CurrencyEntry { code: "NPR", symbol: "₨" }, // Nepalese Rupee
  CurrencyEntry { code: "NZD", symbol: "$" }, // New Zealand Dollar
  CurrencyEntry { code: "OMR", symbol: "ر.ع." }, // Omani Rial
  CurrencyEntry { code: "PAB", symbol: "B/." }, // Panamanian Balboa
  CurrencyEntry { code: "PEN", symbol: "S/" }, // Peruvian Sol
  CurrencyEntry { code: "PGK", symbol: "K" }, // Papua New Guinean Kina
  CurrencyEntry { code: "PHP", symbol: "₱" }, // Philippine Peso
  CurrencyEntry { code: "PKR", symbol: "₨" }, // Pakistani Rupee
  CurrencyEntry { code: "PLN", symbol: "zł" }, // Polish Złoty
  CurrencyEntry { code: "PYG", symbol: "₲" }, // Paraguayan Guaraní
  CurrencyEntry { code: "QAR", symbol: "ر.ق" }, // Qatari Riyal
  CurrencyEntry { code: "RON", symbol: "lei" }, // Romanian Leu
  CurrencyEntry { code: "RSD", symbol: "дин." }, // Serbian Dinar
  CurrencyEntry { code: "RWF", symbol: "R₣" }, // Rwandan Franc
  CurrencyEntry { code: "SAR", symbol: "ر.س" }, // Saudi Riyal
  CurrencyEntry { code: "SBD", symbol: "$" }, // Solomon Islands Dollar
  CurrencyEntry { code: "SCR", symbol: "₨" }, // Seychellois Rupee
  CurrencyEntry { code: "SDG", symbol: "ج.س." }, // Sudanese Pound
  CurrencyEntry { code: "SEK", symbol: "kr" }, // Swedish Krona
  CurrencyEntry { code: "SHP", symbol: "£" }, // Saint Helena Pound
  CurrencyEntry { code: "SLL", symbol: "Le" }, // Sierra Leonean Leone
  CurrencyEntry { code: "SOS", symbol: "S" }, // Somali Shilling
  CurrencyEntry { code: "SRD", symbol: "$" }, // Surinamese Dollar
  CurrencyEntry { code: "SSP", symbol: "£" }, // South Sudanese Pound
  CurrencyEntry { code: "STN", symbol: "Db" }, // São Tomé and Príncipe Dobra
  CurrencyEntry { code: "SVC", symbol: "$" }, // Salvadoran Colón
  CurrencyEntry { code: "SYP", symbol: "£" }, // Syrian Pound
  CurrencyEntry { code: "SZL", symbol: "E" }, // Swazi Lilangeni
  CurrencyEntry { code: "THB", symbol: "฿" }, // Thai Baht
  CurrencyEntry { code: "TJS", symbol: "ЅМ" }, // Tajikistani Somoni
  CurrencyEntry { code: "TMT", symbol: "m" }, // Turkmenistani Manat
  CurrencyEntry { code: "TND", symbol: "د.ت" }, // Tunisian Dinar
  CurrencyEntry { code: "TOP", symbol: "T$" }, // Tongan Paʻanga
  CurrencyEntry { code: "TRY", symbol: "₺" }, // Turkish Lira
  CurrencyEntry { code: "TTD", symbol: "TT$" }, // Trinidad and Tobago Dollar
  CurrencyEntry { code: "TWD", symbol: "NT$" }, // New Taiwan Dollar
  CurrencyEntry { code: "TZS", symbol: "TSh" }, // Tanzanian Shilling
  CurrencyEntry { code: "UAH", symbol: "₴" }, // Ukrainian Hryvnia
  CurrencyEntry { code: "UGX", symbol: "USh" }, // Ugandan Shilling
  CurrencyEntry { code: "UYU", symbol: "$U" }, // Uruguayan Peso
  CurrencyEntry { code: "UZS", symbol: "лв" }, // Uzbekistani Som
  CurrencyEntry { code: "VES", symbol: "Bs.S" }, // Venezuelan Bolívar Soberano
  CurrencyEntry { code: "VND", symbol: "₫" }, // Vietnamese Đồng
  CurrencyEntry { code: "VUV", symbol: "VT" }, // Vanuatu Vatu
  CurrencyEntry { code: "WST", symbol: "WS$" }, // Samoan Tālā
  CurrencyEntry { code: "XAF", symbol: "FCFA" }, // Central African CFA Franc
  CurrencyEntry { code: "XCD", symbol: "EC$" }, // East Caribbean Dollar
  CurrencyEntry { code: "XOF", symbol: "CFA" }, // West African CFA Franc
  CurrencyEntry { code: "XPF", symbol: "₣" }, // CFP Franc
  CurrencyEntry { code: "YER", symbol: "﷼" }, // Yemeni Rial
  CurrencyEntry { code: "ZMW", symbol: "ZK" }, // Zambian Kwacha
  CurrencyEntry { code: "ZWL", symbol: "$" }, // Zimbabwean Dollar
];

static SYMBOL_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
  Lazy::new(|| CURRENCY_SYMBOLS.iter().map(|entry| (entry.code, entry.symbol)).collect());

/// Read-only code to symbol view of the dataset, with O(1) exact-key lookup.
///
/// Keys are the uppercase ISO 4217 codes of [`CURRENCY_SYMBOLS`]; callers
/// needing the canonical ordering should iterate the array instead.
pub fn currency_table() -> &'static HashMap<&'static str, &'static str> {
  &SYMBOL_BY_CODE
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_table_is_non_empty_and_indexed() {
    assert!(!CURRENCY_SYMBOLS.is_empty());
    assert_eq!(currency_table().len(), CURRENCY_SYMBOLS.len());
  }

  #[test]
  fn test_well_known_pairs() {
    let table = currency_table();
    assert_eq!(table["USD"], "$");
    assert_eq!(table["EUR"], "€");
    assert_eq!(table["GBP"], "£");
    assert_eq!(table["JPY"], "¥");
    assert_eq!(table["INR"], "₹");
  }

  #[test]
  fn test_codes_are_unique_uppercase_alpha3() {
    let mut seen = HashSet::new();
    for entry in &CURRENCY_SYMBOLS {
      assert_eq!(entry.code.len(), 3, "{} is not a 3-letter code", entry.code);
      assert!(
        entry.code.chars().all(|c| c.is_ascii_uppercase()),
        "{} is not uppercase ASCII",
        entry.code
      );
      assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
    }
  }

  #[test]
  fn test_no_entry_has_an_empty_symbol() {
    for entry in &CURRENCY_SYMBOLS {
      assert!(!entry.symbol.is_empty(), "{} has an empty symbol", entry.code);
    }
  }

  #[test]
  fn test_symbol_collisions_are_expected() {
    let dollar_users =
      CURRENCY_SYMBOLS.iter().filter(|entry| entry.symbol == "$").count();
    assert!(dollar_users > 1, "several currencies share the dollar sign");
  }
}
