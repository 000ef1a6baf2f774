use crate::store::AggregateOp;

/// Returns true when `field` looks like a non-negative decimal: numeric
/// characters with at most one `.` and at least one digit (`"12"`, `"4.5"`,
/// `".5"`, `"5."`).
///
/// Any Unicode numeric character counts as a digit here, so `"²"` or `"٣"`
/// pass the check even though [`fast_float`] cannot convert them; callers
/// treat that as a conversion error. Signs, exponents, whitespace and
/// `inf`/`nan` spellings are rejected.
pub fn is_unsigned_decimal(field: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;

    for c in field.chars() {
        match c {
            '.' if dots == 0 => dots += 1,
            c if c.is_numeric() => digits += 1,
            _ => return false,
        }
    }

    digits > 0
}

/// Coerces a cell to a number if it passes [`is_unsigned_decimal`].
pub fn parse_numeric(field: &str) -> Option<f64> {
    if !is_unsigned_decimal(field) {
        return None;
    }
    fast_float::parse::<f64, _>(field).ok()
}

/// Scalar reduction over already-validated values.
///
/// Empty input has no aggregate and yields `None`.
pub fn aggregate_f64(values: &[f64], op: AggregateOp) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let v = match op {
        AggregateOp::Sum => values.iter().sum(),
        AggregateOp::Count => values.len() as f64,
        AggregateOp::Average => values.iter().sum::<f64>() / values.len() as f64,
        AggregateOp::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregateOp::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_decimal_accepts_plain_numbers() {
        assert!(is_unsigned_decimal("25"));
        assert!(is_unsigned_decimal("41.9"));
        assert!(is_unsigned_decimal(".5"));
        assert!(is_unsigned_decimal("5."));
    }

    #[test]
    fn test_unsigned_decimal_accepts_unicode_digits() {
        assert!(is_unsigned_decimal("²"));
        assert!(is_unsigned_decimal("٣.٥"));
        assert!(!is_unsigned_decimal("²-"));
    }

    #[test]
    fn test_unsigned_decimal_rejects_everything_else() {
        for field in ["", ".", "-3.2", "+1", "1e5", "1.2.3", " 7", "abc", "NaN", "inf"] {
            assert!(!is_unsigned_decimal(field), "accepted {field:?}");
        }
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("45.4"), Some(45.4));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric(".25"), Some(0.25));
        assert_eq!(parse_numeric("-1"), None);
        assert_eq!(parse_numeric("n/a"), None);
        // passes the digit check but does not convert
        assert_eq!(parse_numeric("²"), None);
    }

    #[test]
    fn test_aggregate_f64() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(aggregate_f64(&values, AggregateOp::Average), Some(20.0));
        assert_eq!(aggregate_f64(&values, AggregateOp::Sum), Some(60.0));
        assert_eq!(aggregate_f64(&values, AggregateOp::Count), Some(3.0));
        assert_eq!(aggregate_f64(&values, AggregateOp::Min), Some(10.0));
        assert_eq!(aggregate_f64(&values, AggregateOp::Max), Some(30.0));
    }

    #[test]
    fn test_aggregate_f64_empty() {
        assert_eq!(aggregate_f64(&[], AggregateOp::Average), None);
        assert_eq!(aggregate_f64(&[], AggregateOp::Min), None);
    }
}
