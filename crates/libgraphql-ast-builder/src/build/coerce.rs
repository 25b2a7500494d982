//! Primitive coercions applied while lowering props into value nodes.
//!
//! Numeric literals are stored as the stringified *re-parse* of their input
//! (`parseInt`/`parseFloat` semantics) rather than the raw input text, and
//! booleans fall back to generic truthiness when the input isn't one of the
//! literal strings `"true"`/`"false"`.

use serde_json::Value;

/// The string form of a props primitive, as a dynamic-language `String(x)`
/// would render it.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(number) => match number.as_i64() {
            Some(i) => i.to_string(),
            None => match number.as_u64() {
                Some(u) => u.to_string(),
                None => format_number(number.as_f64().unwrap_or(f64::NAN)),
            },
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `String(parseInt(String(value), 10))`.
pub fn parse_int_literal(value: &Value) -> String {
    let text = stringify(value);
    let trimmed = text.trim_start();
    let (sign, rest) = split_sign(trimmed);
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return "NaN".to_string();
    }
    match digits.parse::<f64>() {
        Ok(parsed) => format_number(sign * parsed),
        Err(_) => "NaN".to_string(),
    }
}

/// `String(parseFloat(String(value)))`.
pub fn parse_float_literal(value: &Value) -> String {
    let text = stringify(value);
    let trimmed = text.trim_start();
    let (sign, rest) = split_sign(trimmed);
    if rest.starts_with("Infinity") {
        return format_number(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            mantissa_digits += 1;
        }
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "NaN".to_string();
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let literal = rest[..end].trim_end_matches('.');
    let literal = if literal.starts_with('.') {
        format!("0{literal}")
    } else {
        literal.to_string()
    };
    match literal.parse::<f64>() {
        Ok(parsed) => format_number(sign * parsed),
        Err(_) => "NaN".to_string(),
    }
}

/// `{ true: true, false: false }[String(value)] ?? Boolean(value)`.
///
/// Anything other than the two literal strings falls back to truthiness, so
/// e.g. `"no"` coerces to `true`. This is a lenient default, not a
/// validation gate.
pub fn coerce_boolean(value: &Value) -> bool {
    match stringify(value).as_str() {
        "true" => true,
        "false" => false,
        _ => is_truthy(value),
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(number) => match number.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => true,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders an `f64` the way a dynamic-language `String(number)` would:
/// integral values print without a fractional part, very large/small
/// magnitudes use `e+N`/`e-N` notation, and the non-finite values print as
/// `NaN`/`Infinity`/`-Infinity`.
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    let magnitude = number.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{number:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }
    format!("{number}")
}

fn split_sign(text: &str) -> (f64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, text)
    }
}
