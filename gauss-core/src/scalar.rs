//! Fraction-to-float parsing
//!
//! Scalars typed at the prompt come in three shapes: plain decimals
//! ("3.5"), simple fractions ("3/4") and mixed numbers with a whole part
//! and a space before the fraction ("-1 1/2" meaning -1.5). A negative
//! whole part subtracts the fractional part.

use crate::error::GaussError;

/// Parse a scalar token into a finite `f64`.
///
/// Returns `GaussError::Parse` for malformed tokens and for tokens whose
/// value is not finite (e.g. "1/0").
pub fn parse_scalar(token: &str) -> Result<f64, GaussError> {
    let trimmed = token.trim();
    let value = match trimmed.parse::<f64>() {
        Ok(v) => v,
        Err(_) => parse_fraction(trimmed).ok_or_else(|| GaussError::Parse(token.to_string()))?,
    };
    if !value.is_finite() {
        return Err(GaussError::Parse(token.to_string()));
    }
    Ok(value)
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (lead, den) = s.split_once('/')?;
    let den: f64 = den.trim().parse().ok()?;
    // The part before '/' is either "num" or "whole num".
    let (whole, num) = match lead.trim().rsplit_once(' ') {
        Some((whole, num)) => (whole.trim().parse::<f64>().ok()?, num.trim().parse::<f64>().ok()?),
        None => (0.0, lead.trim().parse::<f64>().ok()?),
    };
    let frac = num / den;
    if whole < 0.0 {
        Some(whole - frac)
    } else {
        Some(whole + frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_scalar("5").unwrap(), 5.0);
        assert_eq!(parse_scalar("3.5").unwrap(), 3.5);
        assert_eq!(parse_scalar("-42").unwrap(), -42.0);
        assert_eq!(parse_scalar(" 2.25 ").unwrap(), 2.25);
    }

    #[test]
    fn parses_simple_fractions() {
        assert_eq!(parse_scalar("3/4").unwrap(), 0.75);
        assert_eq!(parse_scalar("-3/4").unwrap(), -0.75);
        assert_eq!(parse_scalar("1 / 2").unwrap(), 0.5);
    }

    #[test]
    fn parses_mixed_numbers() {
        assert_eq!(parse_scalar("-1 1/2").unwrap(), -1.5);
        assert_eq!(parse_scalar("2 1/4").unwrap(), 2.25);
        assert_eq!(parse_scalar("-2 3/4").unwrap(), -2.75);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(parse_scalar("abc/def"), Err(GaussError::Parse(_))));
        assert!(matches!(parse_scalar(""), Err(GaussError::Parse(_))));
        assert!(matches!(parse_scalar("1/2/3"), Err(GaussError::Parse(_))));
        assert!(matches!(parse_scalar("one"), Err(GaussError::Parse(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(parse_scalar("1/0"), Err(GaussError::Parse(_))));
        assert!(matches!(parse_scalar("inf"), Err(GaussError::Parse(_))));
        assert!(matches!(parse_scalar("NaN"), Err(GaussError::Parse(_))));
    }
}
