//! Loosely-typed values returned by the lookup function.

use std::fmt;

use mlua::{Table, Value};

/// Significant digits Lua uses when printing floats (`%.14g`).
const FLOAT_DIGITS: i32 = 14;

/// A value returned by the script, tagged by its dynamic type.
///
/// Integers and floats share the `Number` tag. `Nil` and `Other` cover the
/// remaining Lua types, including strings that are not valid UTF-8; no typed
/// accessor accepts them.
#[derive(Debug, Clone)]
pub enum DynamicValue {
    Nil,
    Boolean(bool),
    Number(Number),
    String(String),
    Table(Table),
    Other(&'static str),
}

/// A Lua number. The integer subtype is kept so its text stays exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Matches Lua's `tostring`, except that integral floats print without `.0`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(n) => f.write_str(&format_float(n)),
        }
    }
}

impl DynamicValue {
    /// Name of the dynamic type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicValue::Nil => "nil",
            DynamicValue::Boolean(_) => "boolean",
            DynamicValue::Number(_) => "number",
            DynamicValue::String(_) => "string",
            DynamicValue::Table(_) => "table",
            DynamicValue::Other(name) => *name,
        }
    }

    /// Short description used in type mismatch errors, e.g. ``boolean `true` ``.
    pub fn describe(&self) -> String {
        match self {
            DynamicValue::Boolean(b) => format!("boolean `{b}`"),
            DynamicValue::Number(n) => format!("number `{n}`"),
            DynamicValue::String(s) => format!("string {s:?}"),
            DynamicValue::Nil | DynamicValue::Table(_) | DynamicValue::Other(_) => {
                self.type_name().to_string()
            }
        }
    }

    /// Textual form of strings and numbers. Every other tag has none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            DynamicValue::String(s) => Some(s.clone()),
            DynamicValue::Number(n) => Some(n.to_string()),
            DynamicValue::Nil
            | DynamicValue::Boolean(_)
            | DynamicValue::Table(_)
            | DynamicValue::Other(_) => None,
        }
    }
}

impl From<Value> for DynamicValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Nil => DynamicValue::Nil,
            Value::Boolean(b) => DynamicValue::Boolean(b),
            Value::Integer(i) => DynamicValue::Number(Number::Integer(i)),
            Value::Number(n) => DynamicValue::Number(Number::Float(n)),
            Value::String(s) => match s.to_str() {
                Ok(text) => DynamicValue::String(String::from(&*text)),
                Err(_) => DynamicValue::Other("string (invalid UTF-8)"),
            },
            Value::Table(t) => DynamicValue::Table(t),
            other => DynamicValue::Other(other.type_name()),
        }
    }
}

/// C's `%.14g`: fixed or exponent notation by magnitude, trailing zeros removed.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return if n.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first decides which notation applies.
    let sci = format!("{:.*e}", (FLOAT_DIGITS - 1) as usize, n);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= FLOAT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (FLOAT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{n:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
