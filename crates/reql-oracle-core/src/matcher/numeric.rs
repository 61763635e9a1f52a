use std::cmp::Ordering;

/// 2^63 as an f64: the first float past the end of the i64 range.
const I64_EDGE: f64 = 9_223_372_036_854_775_808.0;

/// Float ordering with NaN placed by `total_cmp` so that NaN only equals NaN.
pub(super) fn cmp_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Orders an integer against a float without rounding the integer through
/// f64. `None` when the float is NaN.
pub(super) fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_EDGE {
        return Some(Ordering::Less);
    }
    if f < -I64_EDGE {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    let ord = match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f)?,
        other => other,
    };
    Some(ord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_and_floats_order_exactly() {
        assert_eq!(cmp_int_float(3, 3.0), Some(Ordering::Equal));
        assert_eq!(cmp_int_float(3, 3.5), Some(Ordering::Less));
        assert_eq!(cmp_int_float(-2, -2.5), Some(Ordering::Greater));
        assert_eq!(cmp_int_float(i64::MAX, 9.3e18), Some(Ordering::Less));
        assert_eq!(cmp_int_float(i64::MIN, f64::NEG_INFINITY), Some(Ordering::Greater));
        // i64::MAX rounds to 2^63 as an f64, which would claim equality.
        assert_eq!(cmp_int_float(i64::MAX, I64_EDGE), Some(Ordering::Less));
        assert_eq!(cmp_int_float(1, f64::NAN), None);
    }

    #[test]
    fn nan_only_equals_nan() {
        assert_eq!(cmp_floats(f64::NAN, f64::NAN), Ordering::Equal);
        assert_ne!(cmp_floats(f64::NAN, 1.0), Ordering::Equal);
        assert_eq!(cmp_floats(0.0, -0.0), Ordering::Equal);
    }
}
