//! Number formatting mini-language used by table column formats.
//!
//! A format spec has the shape
//!
//! ```text
//! [prefix][[fill]align][sign][#][0][width][grouping][.precision][type][suffix]
//! ```
//!
//! `prefix` is a run of literal characters such as `$` or `€`, `suffix` is
//! trailing literal text such as ` USD` or `%`. The part in between follows
//! the usual fill/align/sign/width/precision/type conventions:
//!
//! | type | meaning |
//! |------|---------|
//! | `d`  | decimal integer |
//! | `x` `X` `o` `b` | hex, octal, binary integer |
//! | `f` `F` | fixed point, default precision 6 |
//! | `e` `E` | scientific, exponent with sign and at least two digits |
//! | `g` `G` `n` | general: fixed or scientific depending on magnitude |
//! | `%`  | multiply by 100, fixed point, append `%` |
//! | none | integers as `d`; floats as shortest round-trip, or general with precision |
//!
//! Failures are reported as [`FormatError`]; the table renderer treats any
//! failure as "use plain text".
//!
//! ```
//! use deckbook::table::format::{format_number, Number};
//!
//! assert_eq!(format_number(Number::Float(0.99), "$.2f").unwrap(), "$0.99");
//! assert_eq!(format_number(Number::Int(1234567), ",").unwrap(), "1,234,567");
//! assert_eq!(format_number(Number::Float(0.256), ".1%").unwrap(), "25.6%");
//! assert!(format_number(Number::Float(1.5), "d").is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Largest accepted field width.
const MAX_WIDTH: usize = 1_000;
/// Largest accepted precision.
const MAX_PRECISION: usize = 1_000;

/// A numeric value accepted by the formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn kind_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Float(_) => "float",
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// Why a spec could not be parsed or applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid format spec '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("unknown format code '{code}' for {value} value")]
    TypeMismatch { code: char, value: &'static str },

    #[error("{0}")]
    Incompatible(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    AfterSign,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            '=' => Some(Self::AfterSign),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Sign {
    #[default]
    Negative,
    Always,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    Decimal,
    Hex { upper: bool },
    Octal,
    Binary,
    Fixed { upper: bool },
    Exponent { upper: bool },
    General { upper: bool },
    Number,
    Percent,
}

impl Presentation {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Decimal,
            'x' => Self::Hex { upper: false },
            'X' => Self::Hex { upper: true },
            'o' => Self::Octal,
            'b' => Self::Binary,
            'f' => Self::Fixed { upper: false },
            'F' => Self::Fixed { upper: true },
            'e' => Self::Exponent { upper: false },
            'E' => Self::Exponent { upper: true },
            'g' => Self::General { upper: false },
            'G' => Self::General { upper: true },
            'n' => Self::Number,
            '%' => Self::Percent,
            _ => return None,
        })
    }

    fn code(&self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Hex { upper: false } => 'x',
            Self::Hex { upper: true } => 'X',
            Self::Octal => 'o',
            Self::Binary => 'b',
            Self::Fixed { upper: false } => 'f',
            Self::Fixed { upper: true } => 'F',
            Self::Exponent { upper: false } => 'e',
            Self::Exponent { upper: true } => 'E',
            Self::General { upper: false } => 'g',
            Self::General { upper: true } => 'G',
            Self::Number => 'n',
            Self::Percent => '%',
        }
    }

    fn is_integer_only(&self) -> bool {
        matches!(
            self,
            Self::Decimal | Self::Hex { .. } | Self::Octal | Self::Binary
        )
    }

    fn radix_prefix(&self) -> &'static str {
        match self {
            Self::Hex { upper: false } => "0x",
            Self::Hex { upper: true } => "0X",
            Self::Octal => "0o",
            Self::Binary => "0b",
            _ => "",
        }
    }
}

/// A parsed format spec, reusable across many values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    prefix: String,
    fill: Option<char>,
    align: Option<Align>,
    sign: Sign,
    alternate: bool,
    zero_pad: bool,
    width: Option<usize>,
    grouping: Option<char>,
    precision: Option<usize>,
    presentation: Option<Presentation>,
    suffix: String,
}

fn is_format_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '<' | '>' | '^' | '=' | '+' | '-' | ' ' | '#' | ',' | '_' | '.' | '%'
        )
}

impl NumberFormat {
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let invalid = |reason: &str| FormatError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        let chars: Vec<char> = spec.chars().collect();
        let mut pos = 0;

        // Literal prefix, stopping early if a character is the fill of a fill+align pair
        while pos < chars.len() && !is_format_char(chars[pos]) {
            if chars.get(pos + 1).copied().and_then(Align::from_char).is_some() {
                break;
            }
            pos += 1;
        }
        let prefix: String = chars[..pos].iter().collect();

        let mut fill = None;
        let mut align = None;
        if let Some(a) = chars.get(pos + 1).copied().and_then(Align::from_char) {
            fill = Some(chars[pos]);
            align = Some(a);
            pos += 2;
        } else if let Some(a) = chars.get(pos).copied().and_then(Align::from_char) {
            align = Some(a);
            pos += 1;
        }

        let mut sign = Sign::Negative;
        match chars.get(pos) {
            Some('+') => {
                sign = Sign::Always;
                pos += 1;
            },
            Some('-') => pos += 1,
            Some(' ') => {
                sign = Sign::Space;
                pos += 1;
            },
            _ => {},
        }

        let mut alternate = false;
        if chars.get(pos) == Some(&'#') {
            alternate = true;
            pos += 1;
        }

        let mut zero_pad = false;
        if chars.get(pos) == Some(&'0') {
            zero_pad = true;
            pos += 1;
        }

        let width = Self::parse_digits(&chars, &mut pos).map_err(|r| invalid(&r))?;
        if width.is_some_and(|w| w > MAX_WIDTH) {
            return Err(invalid("Too many decimal digits in format string"));
        }

        let mut grouping = None;
        if let Some(&c @ (',' | '_')) = chars.get(pos) {
            grouping = Some(c);
            pos += 1;
        }

        let mut precision = None;
        if chars.get(pos) == Some(&'.') {
            pos += 1;
            precision = Self::parse_digits(&chars, &mut pos).map_err(|r| invalid(&r))?;
            match precision {
                None => return Err(invalid("format specifier missing precision")),
                Some(p) if p > MAX_PRECISION => return Err(invalid("precision too big")),
                Some(_) => {},
            }
        }

        let mut presentation = None;
        if let Some(p) = chars.get(pos).copied().and_then(Presentation::from_char) {
            presentation = Some(p);
            pos += 1;
        }

        let suffix: String = chars[pos..].iter().collect();
        if suffix.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return Err(invalid("unexpected text after format type"));
        }

        if let Some(p) = presentation {
            if p.is_integer_only() && precision.is_some() {
                return Err(FormatError::Incompatible(
                    "Precision not allowed in integer format specifier".to_string(),
                ));
            }
            if grouping == Some(',') && matches!(p, Presentation::Hex { .. } | Presentation::Octal | Presentation::Binary) {
                return Err(FormatError::Incompatible(format!(
                    "Cannot specify ',' with '{}'",
                    p.code()
                )));
            }
            if grouping.is_some() && p == Presentation::Number {
                return Err(FormatError::Incompatible(
                    "Cannot specify grouping with 'n'".to_string(),
                ));
            }
        }

        Ok(Self {
            prefix,
            fill,
            align,
            sign,
            alternate,
            zero_pad,
            width,
            grouping,
            precision,
            presentation,
            suffix,
        })
    }

    fn parse_digits(chars: &[char], pos: &mut usize) -> Result<Option<usize>, String> {
        let start = *pos;
        while *pos < chars.len() && chars[*pos].is_ascii_digit() {
            *pos += 1;
        }
        if *pos == start {
            return Ok(None);
        }
        let digits: String = chars[start..*pos].iter().collect();
        digits
            .parse()
            .map(Some)
            .map_err(|_| "Too many decimal digits in format string".to_string())
    }

    pub fn apply(&self, number: Number) -> Result<String, FormatError> {
        let (negative, body) = match (number, self.presentation) {
            (Number::Float(_), Some(p)) if p.is_integer_only() => {
                return Err(FormatError::TypeMismatch {
                    code: p.code(),
                    value: number.kind_name(),
                });
            },
            (Number::Int(v), None | Some(Presentation::Number)) => {
                (v < 0, self.integer_body(v.unsigned_abs(), Presentation::Decimal))
            },
            (Number::Int(v), Some(p)) if p.is_integer_only() => {
                (v < 0, self.integer_body(v.unsigned_abs(), p))
            },
            (Number::Int(v), p) => {
                let v = v as f64;
                (v.is_sign_negative(), self.float_body(v.abs(), p))
            },
            (Number::Float(v), p) => (v.is_sign_negative() && !v.is_nan(), self.float_body(v.abs(), p)),
        };

        let sign = match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Always) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Negative) => "",
        };
        let radix_prefix = if self.alternate {
            self.presentation.map(|p| p.radix_prefix()).unwrap_or("")
        } else {
            ""
        };

        let padded = self.pad(sign, radix_prefix, body);
        Ok(format!("{}{}{}", self.prefix, padded, self.suffix))
    }

    fn integer_body(&self, magnitude: u64, presentation: Presentation) -> Body {
        let (digits, group_size) = match presentation {
            Presentation::Hex { upper: false } => (format!("{:x}", magnitude), 4),
            Presentation::Hex { upper: true } => (format!("{:X}", magnitude), 4),
            Presentation::Octal => (format!("{:o}", magnitude), 4),
            Presentation::Binary => (format!("{:b}", magnitude), 4),
            _ => (itoa::Buffer::new().format(magnitude).to_string(), 3),
        };
        Body {
            int_digits: digits,
            rest: String::new(),
            group_size,
        }
    }

    fn float_body(&self, value: f64, presentation: Option<Presentation>) -> Body {
        if !value.is_finite() {
            let upper = matches!(
                presentation,
                Some(
                    Presentation::Fixed { upper: true }
                        | Presentation::Exponent { upper: true }
                        | Presentation::General { upper: true }
                )
            );
            let mut text = if value.is_nan() { "nan" } else { "inf" }.to_string();
            if upper {
                text = text.to_uppercase();
            }
            if presentation == Some(Presentation::Percent) {
                text.push('%');
            }
            return Body::literal(text);
        }

        let text = match presentation {
            Some(Presentation::Fixed { .. }) => format!("{:.*}", self.precision.unwrap_or(6), value),
            Some(Presentation::Percent) => {
                format!("{:.*}%", self.precision.unwrap_or(6), value * 100.0)
            },
            Some(Presentation::Exponent { upper }) => {
                let text = exponent_form(value, self.precision.unwrap_or(6), self.alternate);
                if upper { text.to_uppercase() } else { text }
            },
            Some(Presentation::General { upper }) => {
                let text = general_form(value, self.precision.unwrap_or(6), self.alternate, false);
                if upper { text.to_uppercase() } else { text }
            },
            Some(Presentation::Number) => general_form(value, self.precision.unwrap_or(6), self.alternate, false),
            None => match self.precision {
                Some(p) => general_form(value, p, self.alternate, true),
                None => shortest_form(value),
            },
            // integer-only presentations are rejected before reaching here
            Some(_) => shortest_form(value),
        };

        Body::split(text)
    }

    fn pad(&self, sign: &str, radix_prefix: &str, body: Body) -> String {
        let width = self.width.unwrap_or(0);
        let fill = self.fill.unwrap_or(if self.zero_pad { '0' } else { ' ' });
        let align = self.align.unwrap_or(if self.zero_pad {
            Align::AfterSign
        } else {
            Align::Right
        });

        // Zero padding with grouping pads the digits so separators land inside the padding
        if align == Align::AfterSign && fill == '0' && self.grouping.is_some() && !body.is_literal() {
            let fixed = sign.chars().count() + radix_prefix.chars().count() + body.rest.chars().count();
            let mut digits = body.int_digits.clone();
            let mut grouped = body.grouped(&digits, self.grouping);
            while fixed + grouped.chars().count() < width {
                digits.insert(0, '0');
                grouped = body.grouped(&digits, self.grouping);
            }
            return format!("{}{}{}{}", sign, radix_prefix, grouped, body.rest);
        }

        let core = format!(
            "{}{}",
            body.grouped(&body.int_digits, self.grouping),
            body.rest
        );
        let len = sign.chars().count() + radix_prefix.chars().count() + core.chars().count();
        if len >= width {
            return format!("{}{}{}", sign, radix_prefix, core);
        }

        let padding = width - len;
        let repeat = |n: usize| fill.to_string().repeat(n);
        match align {
            Align::Left => format!("{}{}{}{}", sign, radix_prefix, core, repeat(padding)),
            Align::Right => format!("{}{}{}{}", repeat(padding), sign, radix_prefix, core),
            Align::Center => {
                let left = padding / 2;
                format!(
                    "{}{}{}{}{}",
                    repeat(left),
                    sign,
                    radix_prefix,
                    core,
                    repeat(padding - left)
                )
            },
            Align::AfterSign => format!("{}{}{}{}", sign, radix_prefix, repeat(padding), core),
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if let Some(align) = self.align {
            if let Some(fill) = self.fill {
                write!(f, "{}", fill)?;
            }
            let c = match align {
                Align::Left => '<',
                Align::Right => '>',
                Align::Center => '^',
                Align::AfterSign => '=',
            };
            write!(f, "{}", c)?;
        }
        match self.sign {
            Sign::Always => f.write_str("+")?,
            Sign::Space => f.write_str(" ")?,
            Sign::Negative => {},
        }
        if self.alternate {
            f.write_str("#")?;
        }
        if self.zero_pad {
            f.write_str("0")?;
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        if let Some(grouping) = self.grouping {
            write!(f, "{}", grouping)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        if let Some(p) = self.presentation {
            write!(f, "{}", p.code())?;
        }
        f.write_str(&self.suffix)
    }
}

/// Parse `spec` and apply it to `number` in one step.
pub fn format_number(number: impl Into<Number>, spec: &str) -> Result<String, FormatError> {
    NumberFormat::parse(spec)?.apply(number.into())
}

/// Unsigned formatted number split into the integer digits (which take
/// grouping separators) and everything after them.
struct Body {
    int_digits: String,
    rest: String,
    group_size: usize,
}

impl Body {
    fn split(text: String) -> Self {
        let split_at = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (int_digits, rest) = text.split_at(split_at);
        Self {
            int_digits: int_digits.to_string(),
            rest: rest.to_string(),
            group_size: 3,
        }
    }

    fn literal(text: String) -> Self {
        Self {
            int_digits: String::new(),
            rest: text,
            group_size: 3,
        }
    }

    fn is_literal(&self) -> bool {
        self.int_digits.is_empty()
    }

    fn grouped(&self, digits: &str, separator: Option<char>) -> String {
        let Some(separator) = separator else {
            return digits.to_string();
        };
        let count = digits.chars().count();
        let mut out = String::with_capacity(count + count / self.group_size);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (count - i) % self.group_size == 0 {
                out.push(separator);
            }
            out.push(c);
        }
        out
    }
}

/// `d.ddddde+XX` with an exponent of at least two digits.
fn exponent_form(value: f64, precision: usize, alternate: bool) -> String {
    let raw = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mut mantissa = mantissa.to_string();
    if alternate && !mantissa.contains('.') {
        mantissa.push('.');
    }
    format!(
        "{}e{}{:02}",
        mantissa,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs()
    )
}

/// Decimal exponent of `value` once rounded to `significant` digits.
fn rounded_exponent(value: f64, significant: usize) -> i32 {
    if value == 0.0 {
        return 0;
    }
    let raw = format!("{:.*e}", significant.saturating_sub(1), value);
    raw.split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

fn strip_fraction_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// General format: fixed point for moderate exponents, scientific otherwise.
///
/// `keep_point` forces at least one fractional digit in fixed notation,
/// which is how a precision without a type code behaves.
fn general_form(value: f64, precision: usize, alternate: bool, keep_point: bool) -> String {
    let significant = precision.max(1);
    let exponent = rounded_exponent(value, significant);

    if exponent >= -4 && (exponent as i64) < significant as i64 {
        let decimals = (significant as i64 - 1 - exponent as i64).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if alternate {
            return if fixed.contains('.') { fixed } else { format!("{}.", fixed) };
        }
        let stripped = strip_fraction_zeros(&fixed);
        if keep_point && !stripped.contains('.') {
            format!("{}.0", stripped)
        } else {
            stripped
        }
    } else {
        let text = exponent_form(value, significant - 1, alternate);
        if alternate {
            return text;
        }
        match text.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", strip_fraction_zeros(mantissa), exp),
            None => text,
        }
    }
}

/// Shortest round-trip representation, switching to scientific notation
/// outside `1e-4 <= |v| < 1e16`.
pub(crate) fn shortest_form(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if (-4..16).contains(&exponent) {
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format_finite(value);
        if text.contains('e') {
            // ryu picks scientific notation for some values in this range
            let plain = format!("{}", value);
            if plain.contains('.') { plain } else { format!("{}.0", plain) }
        } else {
            text.to_string()
        }
    } else {
        let raw = format!("{:e}", value);
        match raw.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                format!(
                    "{}e{}{:02}",
                    mantissa,
                    if exp < 0 { '-' } else { '+' },
                    exp.abs()
                )
            },
            None => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(n: impl Into<Number>, spec: &str) -> String {
        format_number(n, spec).unwrap()
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(fmt(0.99, "$.2f"), "$0.99");
        assert_eq!(fmt(0.59, "$.2f"), "$0.59");
        assert_eq!(fmt(1234.5, "$,.2f"), "$1,234.50");
        assert_eq!(fmt(-3.5, "€.1f"), "€-3.5");
    }

    #[test]
    fn test_literal_suffix() {
        assert_eq!(fmt(25.55, ".1f%"), "25.6%");
        assert_eq!(fmt(12.0, ".0f units"), "12 units");
        assert!(NumberFormat::parse(".2fx").is_err());
    }

    #[test]
    fn test_fixed_and_grouping() {
        assert_eq!(fmt(3.14159, ".3f"), "3.142");
        assert_eq!(fmt(2.0, "f"), "2.000000");
        assert_eq!(fmt(1234567.891, ",.2f"), "1,234,567.89");
        assert_eq!(fmt(1234567i64, "_"), "1_234_567");
        assert_eq!(fmt(1234i64, ","), "1,234");
        assert_eq!(fmt(-1234i64, ","), "-1,234");
    }

    #[test]
    fn test_int_converted_for_float_types() {
        assert_eq!(fmt(120i64, ".2f"), "120.00");
        assert_eq!(fmt(3i64, "e"), "3.000000e+00");
        assert_eq!(fmt(1i64, "%"), "100.000000%");
    }

    #[test]
    fn test_percent() {
        assert_eq!(fmt(0.256, ".1%"), "25.6%");
        assert_eq!(fmt(0.5, ".0%"), "50%");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(fmt(12345.678, ".2e"), "1.23e+04");
        assert_eq!(fmt(0.00012, ".1E"), "1.2E-04");
        assert_eq!(fmt(0.0, ".2e"), "0.00e+00");
    }

    #[test]
    fn test_general() {
        assert_eq!(fmt(1234.5, "g"), "1234.5");
        assert_eq!(fmt(0.00001234, "g"), "1.234e-05");
        assert_eq!(fmt(123456789.0, ".3g"), "1.23e+08");
        assert_eq!(fmt(100.0, ".3g"), "100");
        assert_eq!(fmt(1.0, ".3"), "1.0");
        assert_eq!(fmt(1e20, "G"), "1E+20");
    }

    #[test]
    fn test_no_type() {
        assert_eq!(fmt(120.0, ""), "120.0");
        assert_eq!(fmt(0.99, ""), "0.99");
        assert_eq!(fmt(1e16, ""), "1e+16");
        assert_eq!(fmt(0.00001, ""), "1e-05");
        assert_eq!(fmt(42i64, ""), "42");
    }

    #[test]
    fn test_integer_presentations() {
        assert_eq!(fmt(255i64, "x"), "ff");
        assert_eq!(fmt(255i64, "#X"), "0XFF");
        assert_eq!(fmt(8i64, "o"), "10");
        assert_eq!(fmt(5i64, "#b"), "0b101");
        assert_eq!(fmt(65535i64, "_x"), "ffff");
        assert_eq!(fmt(1048575i64, "_x"), "f_ffff");
        assert_eq!(fmt(-42i64, "d"), "-42");
    }

    #[test]
    fn test_alignment_and_sign() {
        assert_eq!(fmt(42i64, "5"), "   42");
        assert_eq!(fmt(42i64, "<5"), "42   ");
        assert_eq!(fmt(42i64, "^6"), "  42  ");
        assert_eq!(fmt(42i64, "*>6"), "****42");
        assert_eq!(fmt(-42i64, "=6"), "-   42");
        assert_eq!(fmt(42i64, "+"), "+42");
        assert_eq!(fmt(42i64, " "), " 42");
        assert_eq!(fmt(-7i64, "05"), "-0007");
        assert_eq!(fmt(3.5, "08.2f"), "00003.50");
        assert_eq!(fmt(1234i64, "010,"), "00,001,234");
    }

    #[test]
    fn test_float_with_integer_type_fails() {
        assert_eq!(
            format_number(1.5, "d"),
            Err(FormatError::TypeMismatch {
                code: 'd',
                value: "float"
            })
        );
        assert!(format_number(1.0, "x").is_err());
    }

    #[test]
    fn test_incompatible_options() {
        assert!(matches!(
            NumberFormat::parse(".2d"),
            Err(FormatError::Incompatible(_))
        ));
        assert!(matches!(
            NumberFormat::parse(",x"),
            Err(FormatError::Incompatible(_))
        ));
        assert!(matches!(
            NumberFormat::parse(".f"),
            Err(FormatError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_oversized_width_and_precision() {
        for spec in ["9999999999999999999.2f", "1001d", ".9999999999999999999f", ".1001e", "99999999999999999999999"] {
            assert!(
                matches!(NumberFormat::parse(spec), Err(FormatError::InvalidSpec { .. })),
                "{spec:?} should be rejected"
            );
        }
        assert_eq!(fmt(1.5, "1000").len(), 1000);
        assert_eq!(fmt(1.5, ".1000f").len(), 1002);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::INFINITY, ".2f"), "inf");
        assert_eq!(fmt(f64::NEG_INFINITY, "F"), "-INF");
        assert_eq!(fmt(f64::NAN, "%"), "nan%");
    }

    #[test]
    fn test_display_round_trips_spec() {
        for spec in ["$.2f", "*>10,.1f", "+#010_x", " .3e units", ""] {
            assert_eq!(NumberFormat::parse(spec).unwrap().to_string(), spec);
        }
    }

    mod property_tests {
        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_fixed_matches_std(value in -1.0e9f64..1.0e9, precision in 0usize..8) {
                let spec = format!(".{}f", precision);
                prop_assert_eq!(fmt(value, &spec), format!("{:.*}", precision, value));
            }

            #[test]
            fn prop_grouping_strips_to_plain(value in any::<i64>()) {
                let grouped = fmt(value, ",");
                prop_assert_eq!(grouped.replace(',', ""), value.to_string());
            }

            #[test]
            fn prop_width_is_minimum(value in any::<i32>(), width in 0usize..20) {
                let spec = format!("{}", width);
                let spec = if width == 0 { String::new() } else { spec };
                let out = fmt(i64::from(value), &spec);
                prop_assert!(out.chars().count() >= width);
                prop_assert_eq!(out.trim_start(), value.to_string());
            }

            #[test]
            fn prop_prefix_is_preserved(value in -1.0e6f64..1.0e6) {
                let out = fmt(value, "$.2f");
                prop_assert!(out.starts_with('$'));
                prop_assert_eq!(&out[1..], format!("{:.2}", value));
            }
        }
    }
}
