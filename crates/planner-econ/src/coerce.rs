//! Total numeric coercion of free-text inputs.
//!
//! Every value coerces to a finite [`Decimal`]; anything unreadable is zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Values that can be read as an amount.
pub trait Coerce {
    fn to_amount(&self) -> Decimal;
}

impl Coerce for Decimal {
    fn to_amount(&self) -> Decimal {
        *self
    }
}

impl Coerce for f64 {
    fn to_amount(&self) -> Decimal {
        if !self.is_finite() {
            return Decimal::ZERO;
        }
        Decimal::from_f64(*self).unwrap_or(Decimal::ZERO)
    }
}

impl Coerce for str {
    fn to_amount(&self) -> Decimal {
        parse_amount(self)
    }
}

impl Coerce for String {
    fn to_amount(&self) -> Decimal {
        parse_amount(self)
    }
}

impl<T: Coerce + ?Sized> Coerce for &T {
    fn to_amount(&self) -> Decimal {
        (**self).to_amount()
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn to_amount(&self) -> Decimal {
        match self {
            Some(v) => v.to_amount(),
            None => Decimal::ZERO,
        }
    }
}

/// Coerce any supported value to an amount.
///
/// Example:
/// assert_eq!(to_amount("$1,200.50"), Decimal::new(120050, 2));
/// assert_eq!(to_amount(&None::<&str>), Decimal::ZERO);
pub fn to_amount<T: Coerce + ?Sized>(value: &T) -> Decimal {
    value.to_amount()
}

/// Parse decorated text such as `"$1,200.50"` or `"12 %"`.
///
/// `$`, `,`, `%` and whitespace are removed wherever they occur, then the
/// longest leading decimal literal is read. No literal, or a value outside
/// the representable range, yields zero.
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
        .collect();
    let Some(lit) = leading_literal(&cleaned) else {
        return Decimal::ZERO;
    };
    lit.to_decimal().unwrap_or(Decimal::ZERO)
}

/// Pieces of a decimal literal found at the start of a string.
struct Literal<'a> {
    negative: bool,
    int: &'a str,
    frac: &'a str,
    exp: Option<i64>,
}

impl Literal<'_> {
    fn to_decimal(&self) -> Option<Decimal> {
        let int = if self.int.is_empty() { "0" } else { self.int };
        let text = if self.frac.is_empty() {
            int.to_string()
        } else {
            format!("{int}.{}", self.frac)
        };
        let mut value = Decimal::from_str(&text).ok()?;
        if let Some(exp) = self.exp {
            value = scale_by_exponent(value, exp)?;
        }
        if self.negative {
            value.set_sign_negative(true);
        }
        Some(value)
    }
}

fn leading_literal(s: &str) -> Option<Literal<'_>> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&b) = bytes.first() {
        if b == b'+' || b == b'-' {
            negative = b == b'-';
            i = 1;
        }
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int = &s[int_start..i];
    let mut frac = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac = &s[frac_start..j];
        i = j;
    }
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let exp = exponent(&s[i..]);
    Some(Literal {
        negative,
        int,
        frac,
        exp,
    })
}

/// An `e`/`E` exponent with at least one digit, if the text starts with one.
fn exponent(rest: &str) -> Option<i64> {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let mut i = 1;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    // Saturate absurd exponents; they fall outside the range anyway.
    Some(rest[1..i].parse::<i64>().unwrap_or(if bytes[1] == b'-' {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn scale_by_exponent(mantissa: Decimal, exp: i64) -> Option<Decimal> {
    if mantissa.is_zero() || exp == 0 {
        return Some(mantissa);
    }
    if exp > 28 {
        return None;
    }
    if exp < -28 {
        return Some(Decimal::ZERO);
    }
    let mut value = mantissa;
    for _ in 0..exp.unsigned_abs() {
        value = if exp > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_currency_decoration() {
        assert_eq!(to_amount("$1,200.50"), Decimal::new(120050, 2));
        assert_eq!(to_amount("12%"), Decimal::new(12, 0));
        assert_eq!(to_amount(" 16.30 "), Decimal::new(1630, 2));
        assert_eq!(to_amount("$ 1 000"), Decimal::new(1000, 0));
    }

    #[test]
    fn unreadable_text_is_zero() {
        assert_eq!(to_amount(""), Decimal::ZERO);
        assert_eq!(to_amount("abc"), Decimal::ZERO);
        assert_eq!(to_amount("-"), Decimal::ZERO);
        assert_eq!(to_amount("."), Decimal::ZERO);
        assert_eq!(to_amount("$"), Decimal::ZERO);
        assert_eq!(to_amount(&None::<&str>), Decimal::ZERO);
        assert_eq!(to_amount(&f64::NAN), Decimal::ZERO);
        assert_eq!(to_amount(&f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn reads_leading_literal() {
        assert_eq!(to_amount("12 students"), Decimal::new(12, 0));
        assert_eq!(to_amount("1.2.3"), Decimal::new(12, 1));
        assert_eq!(to_amount("-5"), Decimal::new(-5, 0));
        assert_eq!(to_amount("+7"), Decimal::new(7, 0));
        assert_eq!(to_amount(".5"), Decimal::new(5, 1));
        assert_eq!(to_amount("5."), Decimal::new(5, 0));
        assert_eq!(to_amount("-.25"), Decimal::new(-25, 2));
    }

    #[test]
    fn reads_exponents() {
        assert_eq!(to_amount("1e3"), Decimal::new(1000, 0));
        assert_eq!(to_amount("2.5E-1"), Decimal::new(25, 2));
        assert_eq!(to_amount("1e"), Decimal::ONE);
        assert_eq!(to_amount("4e+x"), Decimal::new(4, 0));
        assert_eq!(to_amount("1e40"), Decimal::ZERO);
        assert_eq!(to_amount("1e-40"), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_is_zero() {
        assert_eq!(to_amount("999999999999999999999999999999999"), Decimal::ZERO);
        assert_eq!(to_amount(&Decimal::MAX.to_string()), Decimal::MAX);
    }

    #[test]
    fn numbers_pass_through() {
        let d = Decimal::new(-4250, 2);
        assert_eq!(to_amount(&d), d);
        assert_eq!(to_amount(&Some(d)), d);
        assert_eq!(to_amount(&0.5f64), Decimal::new(5, 1));
        assert_eq!(to_amount(&String::from("7")), Decimal::new(7, 0));
    }

    proptest! {
        #[test]
        fn coercion_is_total(s in "\\PC*") {
            let _ = to_amount(s.as_str());
        }

        #[test]
        fn decorated_cents_read_back(cents in -10_000_000i64..10_000_000) {
            let value = Decimal::new(cents, 2);
            let text = format!("${value}%");
            prop_assert_eq!(to_amount(text.as_str()), value);
        }
    }
}
