//! Value and stack formatting shared by every shell
//!
//! Integral values print without a decimal point; everything else prints with
//! ten significant digits in the style of C's `%.10g`.

/// Significant digits used for non-integral values
const SIGNIFICANT_DIGITS: usize = 10;

/// Default number of stack rows shown by [`render_stack`]
pub const DEFAULT_DEPTH: usize = 5;

/// Largest number of stack rows [`render_stack`] will produce
pub const MAX_DEPTH: usize = 1000;

/// Format a value for display
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.fract() == 0.0 {
        // -0.0 prints as "0"
        return format!("{:.0}", value + 0.0);
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// `%.{precision}g` for finite, non-zero values
fn format_general(value: f64, precision: usize) -> String {
    // Scientific rendering already applies the rounding, which tells us the
    // decimal exponent of the value as it will be printed.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Render the last `depth` stack entries, bottom to top
///
/// Missing rows are padded with placeholders at the top of the listing; the
/// visible entries are numbered by their 1-based position from the bottom of
/// the whole stack. `depth` is capped at [`MAX_DEPTH`].
pub fn render_stack(stack: &[f64], depth: usize) -> Vec<String> {
    let depth = depth.min(MAX_DEPTH);
    let visible = &stack[stack.len().saturating_sub(depth)..];
    let padding = depth - visible.len();
    let mut lines = Vec::with_capacity(padding + visible.len());

    lines.extend((0..padding).map(|_| "  -: ".to_string()));

    let start_index = stack.len() - visible.len() + 1;
    for (offset, value) in visible.iter().enumerate() {
        lines.push(format!(" {:>2}: {}", start_index + offset, format_value(*value)));
    }
    lines
}

/// Serde adapter for values that may be NaN or infinite
///
/// JSON has no literal for them, so they are written as the strings `"nan"`,
/// `"inf"` and `"-inf"` and read back from those strings. Finite values stay
/// plain numbers.
pub mod lossless {
    use super::format_value;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_value(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "nan" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!(
                    "expected a number, \"nan\", \"inf\" or \"-inf\", found {:?}",
                    other
                ))),
            },
        }
    }

    /// Serialize a run of values, each one as [`serialize`] would
    pub fn serialize_slice<S: Serializer>(
        values: &[f64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| Lossless(*value)))
    }

    struct Lossless(f64);

    impl Serialize for Lossless {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize(&self.0, serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_value(14.0), "14");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(1e20), "100000000000000000000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(2.0 * std::f64::consts::PI), "6.283185307");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_value(-2.25), "-2.25");
        assert_eq!(format_value(std::f64::consts::E), "2.718281828");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_value(0.000015), "1.5e-05");
        assert_eq!(format_value(1.2345678912e-7), "1.234567891e-07");
        assert_eq!(format_value(12345678901.5), "1.23456789e+10");
        assert_eq!(format_value(0.0001), "0.0001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_render_short_stack() {
        let lines = render_stack(&[3.0, 4.5], DEFAULT_DEPTH);
        assert_eq!(
            lines,
            vec!["  -: ", "  -: ", "  -: ", "  1: 3", "  2: 4.5"]
        );
    }

    #[test]
    fn test_render_deep_stack() {
        let stack: Vec<f64> = (1..=12).map(f64::from).collect();
        let lines = render_stack(&stack, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  8: 8");
        assert_eq!(lines[4], " 12: 12");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_stack(&[], 2), vec!["  -: ", "  -: "]);
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Sample(#[serde(with = "lossless")] f64);

    #[test]
    fn test_lossless_json() {
        assert_eq!(serde_json::to_string(&Sample(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Sample(f64::NAN)).unwrap(), "\"nan\"");
        assert_eq!(
            serde_json::to_string(&Sample(f64::NEG_INFINITY)).unwrap(),
            "\"-inf\""
        );

        let back: Sample = serde_json::from_str("\"inf\"").unwrap();
        assert_eq!(back.0, f64::INFINITY);
        let back: Sample = serde_json::from_str("8").unwrap();
        assert_eq!(back.0, 8.0);
        assert!(serde_json::from_str::<Sample>("\"lots\"").is_err());
    }

    #[test]
    fn test_render_depth_is_capped() {
        let lines = render_stack(&[1.0], usize::MAX);
        assert_eq!(lines.len(), MAX_DEPTH);
        assert_eq!(lines[0], "  -: ");
        assert_eq!(lines[MAX_DEPTH - 1], "  1: 1");
    }
}
