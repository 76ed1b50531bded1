/// Formats a number with `precision` significant digits, like C's `%.*g`.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation (`1.5e+20`) otherwise. Trailing zeros
/// in the fraction are removed. A precision of zero is treated as one.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    #[allow(clippy::float_cmp)]
    if value == 0.0 {
        return "0".to_owned();
    }

    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i64 = exp.parse().unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exp < -4 || exp >= digits {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs());
    }

    // exp >= -4 and exp < digits, so this is non-negative.
    let decimals = usize::try_from(digits - 1 - exp).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_drop_the_fraction() {
        assert_eq!(format_general(-4.0, 10), "-4");
        assert_eq!(format_general(3.0, 10), "3");
        assert_eq!(format_general(0.0, 10), "0");
        assert_eq!(format_general(-0.0, 10), "0");
    }

    #[test]
    fn rounds_to_significant_digits() {
        assert_eq!(format_general(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_general(17.877_600_579_251_723, 10), "17.87760058");
        assert_eq!(format_general(0.056_994_945_705_248_4, 10), "0.05699494571");
        assert_eq!(format_general(2.0 / 3.0, 3), "0.667");
        assert_eq!(format_general(0.5, 10), "0.5");
    }

    #[test]
    fn rounding_can_carry_into_a_new_digit() {
        assert_eq!(format_general(9.999_999_999_9, 10), "10");
        assert_eq!(format_general(99_999.9, 5), "1e+05");
    }

    #[test]
    fn switches_to_scientific_notation() {
        assert_eq!(format_general(1e18, 10), "1e+18");
        assert_eq!(format_general(1.5e-7, 10), "1.5e-07");
        assert_eq!(format_general(-2.5e10, 10), "-2.5e+10");
        assert_eq!(format_general(1234.5, 3), "1.23e+03");
        assert_eq!(format_general(0.0001, 10), "0.0001");
    }

    #[test]
    fn zero_precision_is_one_digit() {
        assert_eq!(format_general(3.7, 0), "4");
        assert_eq!(format_general(0.26, 0), "0.3");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_general(f64::NAN, 10), "nan");
        assert_eq!(format_general(f64::INFINITY, 10), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 10), "-inf");
    }
}
