use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale-aware number and currency conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    /// Non-breaking space between symbol and number.
    pub symbol_spacing: bool,
}

impl LocaleConfig {
    /// Conventions for a known locale tag, or `None` when the runtime has no
    /// data for it.
    pub fn lookup(tag: &str) -> Option<Self> {
        let (decimal, grouping, position, spacing) = match tag {
            "pt-BR" => (',', '.', SymbolPosition::Prefix, true),
            "en-US" | "en-GB" => ('.', ',', SymbolPosition::Prefix, false),
            "de-DE" | "es-ES" => (',', '.', SymbolPosition::Suffix, true),
            "pt-PT" | "fr-FR" => (',', '\u{202f}', SymbolPosition::Suffix, true),
            _ => return None,
        };
        Some(Self {
            language_tag: tag.to_string(),
            decimal_separator: decimal,
            grouping_separator: grouping,
            symbol_position: position,
            symbol_spacing: spacing,
        })
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_position: SymbolPosition::Prefix,
            symbol_spacing: true,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders prices as currency text.
///
/// With locale data available the amount follows the locale's separators and
/// symbol placement; otherwise it falls back to `"<symbol> 0,00"` style.
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    currency: CurrencyCode,
    locale: Option<LocaleConfig>,
}

impl PriceFormatter {
    pub fn new(currency: CurrencyCode, locale: Option<LocaleConfig>) -> Self {
        Self { currency, locale }
    }

    /// Builds a formatter from a locale tag; unknown tags select the fallback.
    pub fn for_locale(tag: &str, currency: &str) -> Self {
        Self::new(CurrencyCode::new(currency), LocaleConfig::lookup(tag))
    }

    /// Formatter that always uses the fixed two-decimal fallback.
    pub fn fallback(currency: &str) -> Self {
        Self::new(CurrencyCode::new(currency), None)
    }

    pub fn is_localized(&self) -> bool {
        self.locale.is_some()
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn format(&self, amount: f64) -> String {
        // `+ 0.0` turns -0.0 into 0.0.
        let amount = if amount.is_finite() { amount + 0.0 } else { 0.0 };
        match &self.locale {
            Some(locale) => self.format_localized(locale, amount),
            None => self.format_fallback(amount),
        }
    }

    fn format_localized(&self, locale: &LocaleConfig, amount: f64) -> String {
        let code = self.currency.as_str();
        let precision = minor_units_for(code);
        let body = format_number(locale, amount.abs(), precision);
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        let symbol = symbol_for(code);
        let gap = if locale.symbol_spacing { "\u{a0}" } else { "" };
        match locale.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{symbol}{gap}{body}"),
            SymbolPosition::Suffix => format!("{sign}{body}{gap}{symbol}"),
        }
    }

    fn format_fallback(&self, amount: f64) -> String {
        let fixed = format!("{:.2}", amount).replace('.', ",");
        format!("{} {}", symbol_for(self.currency.as_str()), fixed)
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(CurrencyCode::default(), Some(LocaleConfig::default()))
    }
}
