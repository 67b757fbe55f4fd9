use std::borrow::Cow;
use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::*;

pub(crate) const DEFAULT_PATTERN: &str = "#.#";

pub(crate) static DEFAULT_NUMBER_FORMAT: NumberFormat = NumberFormat {
    pattern: Cow::Borrowed(DEFAULT_PATTERN),
    min_integer_digits: 0,
    min_fraction_digits: 0,
    max_fraction_digits: 1,
    grouping_size: 0,
    decimal_separator: '.',
    grouping_separator: ',',
};

/// Decimal number format driven by a `#,##0.0#`-style pattern.
///
/// In the integer part `0` marks a mandatory digit, `#` an optional one, and `,` a grouping
/// boundary. In the fraction part mandatory `0`s come before optional `#`s. The separator
/// characters used when rendering and parsing are configured separately from the pattern,
/// which always uses `.` and `,`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NumberFormatConfig")]
pub struct NumberFormat {
    pattern: Cow<'static, str>,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping_size: usize,
    decimal_separator: char,
    grouping_separator: char,
}

/// Serialized shape of a [`NumberFormat`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct NumberFormatConfig {
    pattern: String,
    decimal_separator: char,
    grouping_separator: char,
}

impl Default for NumberFormatConfig {
    fn default() -> Self {
        Self {
            pattern: String::from(DEFAULT_PATTERN),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl TryFrom<NumberFormatConfig> for NumberFormat {
    type Error = Error;

    fn try_from(config: NumberFormatConfig) -> Result<Self> {
        NumberFormat::new(
            config.pattern,
            config.decimal_separator,
            config.grouping_separator,
        )
    }
}

impl NumberFormat {
    pub fn new(
        pattern: impl Into<String>,
        decimal_separator: char,
        grouping_separator: char,
    ) -> Result<Self> {
        let pattern = pattern.into();
        let invalid = || Error::InvalidPattern(pattern.clone());
        if decimal_separator == grouping_separator {
            return Err(Error::AmbiguousSeparators(decimal_separator));
        }
        // Separators must not be confused with digits or a sign when parsing
        let reserved = |c: char| c.is_ascii_digit() || c == '-' || c == '+';
        if reserved(decimal_separator) || reserved(grouping_separator) {
            return Err(invalid());
        }

        let (integer, fraction) = match pattern.find('.') {
            Some(index) => (&pattern[..index], Some(&pattern[index + 1..])),
            None => (pattern.as_str(), None),
        };

        let mut min_integer_digits = 0;
        let mut seen_zero = false;
        for c in integer.chars() {
            match c {
                '#' if seen_zero => return Err(invalid()),
                '#' | ',' => {}
                '0' => {
                    seen_zero = true;
                    min_integer_digits += 1;
                }
                _ => return Err(invalid()),
            }
        }
        let grouping_size = match integer.rfind(',') {
            Some(index) => integer.len() - index - 1,
            None => 0,
        };
        if integer.contains(',') && grouping_size == 0 {
            return Err(invalid());
        }

        let mut min_fraction_digits = 0;
        let mut max_fraction_digits = 0;
        if let Some(fraction) = fraction {
            let mut seen_hash = false;
            for c in fraction.chars() {
                match c {
                    '0' if seen_hash => return Err(invalid()),
                    '0' => min_fraction_digits += 1,
                    '#' => seen_hash = true,
                    _ => return Err(invalid()),
                }
                max_fraction_digits += 1;
            }
        }

        if integer.is_empty() && max_fraction_digits == 0 {
            return Err(invalid());
        }

        Ok(Self {
            pattern: Cow::Owned(pattern),
            min_integer_digits,
            min_fraction_digits,
            max_fraction_digits,
            grouping_size,
            decimal_separator,
            grouping_separator,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = match rounded.find('.') {
            Some(index) => (&rounded[..index], &rounded[index + 1..]),
            None => (rounded.as_str(), ""),
        };

        let mut fraction = fraction;
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction = &fraction[..fraction.len() - 1];
        }

        let integer = integer.trim_start_matches('0');
        let mut digits = String::with_capacity(integer.len() + self.min_integer_digits);
        for _ in integer.len()..self.min_integer_digits {
            digits.push('0');
        }
        digits.push_str(integer);
        // "#.#" renders 0 as "0" rather than an empty string
        if digits.is_empty() && fraction.is_empty() {
            digits.push('0');
        }

        let mut output = String::with_capacity(digits.len() * 2 + fraction.len() + 2);
        let is_zero = digits.chars().chain(fraction.chars()).all(|c| c == '0');
        if value.is_sign_negative() && !is_zero {
            output.push('-');
        }
        output.push_str(&self.group(&digits));
        if !fraction.is_empty() {
            output.push(self.decimal_separator);
            output.push_str(fraction);
        }
        output
    }

    fn group(&self, digits: &str) -> String {
        if self.grouping_size == 0 || digits.len() <= self.grouping_size {
            return digits.to_string();
        }
        let mut grouped = String::with_capacity(digits.len() * 2);
        let first = digits.len() % self.grouping_size;
        for (index, c) in digits.chars().enumerate() {
            if index != 0 && (index + self.grouping_size - first) % self.grouping_size == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }

    /// Reads a number rendered in this format. The whole of `text` must be consumed.
    pub fn parse(&self, text: &str) -> ParseResult<f64> {
        let invalid = || ParseError::InvalidNumber {
            input: text.to_string(),
            number: text.to_string(),
        };

        let mut normalized = String::with_capacity(text.len());
        let mut digits = 0;
        let mut seen_point = false;
        for (index, c) in text.chars().enumerate() {
            match c {
                '-' | '+' if index == 0 => normalized.push(c),
                c if c.is_ascii_digit() => {
                    digits += 1;
                    normalized.push(c);
                }
                c if c == self.decimal_separator && !seen_point => {
                    seen_point = true;
                    normalized.push('.');
                }
                c if c == self.grouping_separator && !seen_point && digits > 0 => {}
                _ => return Err(invalid()),
            }
        }
        if digits == 0 {
            return Err(invalid());
        }

        // Overlong digit strings overflow to infinity, which cannot be written back out
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(invalid()),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        DEFAULT_NUMBER_FORMAT.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(pattern: &str, value: f64) -> String {
        NumberFormat::new(pattern, '.', ',').unwrap().format(value)
    }

    #[test]
    fn default_pattern() {
        let default = NumberFormat::default();
        assert_eq!(default, NumberFormat::new("#.#", '.', ',').unwrap());
        assert_eq!(default.format(5.0), "5");
        assert_eq!(default.format(3.5), "3.5");
        assert_eq!(default.format(0.0), "0");
        assert_eq!(default.format(0.5), ".5");
        assert_eq!(default.format(1.24), "1.2");
        assert_eq!(default.format(1.26), "1.3");
        assert_eq!(default.format(1000.0), "1000");
        assert_eq!(default.format(-2.5), "-2.5");
        assert_eq!(default.format(-0.01), "0");
    }

    #[test]
    fn mandatory_digits_and_grouping() {
        assert_eq!(format("#,##0.00", 1234567.891), "1,234,567.89");
        assert_eq!(format("#,##0.00", 0.5), "0.50");
        assert_eq!(format("0.0#", 7.0), "7.0");
        assert_eq!(format("0.0#", 7.123), "7.12");
        assert_eq!(format("000", 7.0), "007");
        assert_eq!(format("#,##0", 999.0), "999");
        assert_eq!(format("#,##0", 1000.0), "1,000");
    }

    #[test]
    fn custom_separators() {
        let german = NumberFormat::new("#,##0.##", ',', '.').unwrap();
        assert_eq!(german.format(12345.5), "12.345,5");
        assert_eq!(german.parse("12.345,5").unwrap(), 12345.5);
        assert_eq!(german.decimal_separator(), ',');
        assert_eq!(german.grouping_separator(), '.');
    }

    #[test]
    fn parse() {
        let default = NumberFormat::default();
        assert_eq!(default.parse("5").unwrap(), 5.0);
        assert_eq!(default.parse("3.5").unwrap(), 3.5);
        assert_eq!(default.parse(".5").unwrap(), 0.5);
        assert_eq!(default.parse("-2").unwrap(), -2.0);
        assert_eq!(default.parse("1,000").unwrap(), 1000.0);
        assert!(default.parse("").is_err());
        assert!(default.parse("-").is_err());
        assert!(default.parse("1.2.3").is_err());
        assert!(default.parse("1.2,3").is_err());
        assert!(default.parse("1a").is_err());
        assert!(default.parse(",5").is_err());
        assert!(default.parse(&"9".repeat(400)).is_err());
        assert_eq!(
            default.parse("x1"),
            Err(ParseError::InvalidNumber {
                input: String::from("x1"),
                number: String::from("x1"),
            })
        );
    }

    #[test]
    fn invalid_patterns() {
        assert!(matches!(
            NumberFormat::new("#.#", '.', '.'),
            Err(Error::AmbiguousSeparators('.'))
        ));
        assert!(NumberFormat::new("0#", '.', ',').is_err());
        assert!(NumberFormat::new("#,##0", '.', '5').is_err());
        assert!(NumberFormat::new("#,##0", '.', '-').is_err());
        assert!(NumberFormat::new("#,##0", '+', ',').is_err());
        assert!(NumberFormat::new("#.#0", '.', ',').is_err());
        assert!(NumberFormat::new("#,", '.', ',').is_err());
        assert!(NumberFormat::new("#x", '.', ',').is_err());
        assert!(NumberFormat::new(".", '.', ',').is_err());
        assert!(NumberFormat::new(".#", '.', ',').is_ok());
    }
}
