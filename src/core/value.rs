//! Argument values and their canonical text rendering
//!
//! Log calls take a variable number of loosely typed arguments. [`Value`] is the
//! closed set of shapes an argument can have:
//!
//! - booleans, signed and unsigned integers, `f32`/`f64` floats and text keep
//!   their native type so the JSON formatter can emit real numbers and booleans;
//! - `Null` stands in for an absent value (`Option::None`) and renders as `<nil>`;
//! - anything else is captured once as an [`Opaque`] value: its `Display` (or
//!   `Debug`) text for plain-text output plus, when available, its `serde` form.
//!
//! References, `Box`, `Arc` and `Option` are unwrapped on conversion, so
//! `Value::from(&count)` and `Value::from(count)` are the same value.

use super::error::{LoggerError, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// One log call argument
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Float32(f32),
    String(String),
    Other(Opaque),
}

/// A value outside the primitive set, captured at conversion time
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
    text: String,
    json: std::result::Result<serde_json::Value, String>,
}

impl Opaque {
    /// Capture a value that has both a text form and a `serde` form
    pub fn new<T: Serialize + fmt::Display + ?Sized>(value: &T) -> Self {
        Self {
            text: value.to_string(),
            json: serde_json::to_value(value).map_err(|e| e.to_string()),
        }
    }

    /// Capture a value through `Display` only; it encodes as a JSON string
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        let text = value.to_string();
        Self {
            json: Ok(serde_json::Value::String(text.clone())),
            text,
        }
    }

    /// Capture a value through `Debug` only; it encodes as a JSON string
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        let text = format!("{:?}", value);
        Self {
            json: Ok(serde_json::Value::String(text.clone())),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `serde` form, or the reason it could not be produced
    pub fn json(&self) -> std::result::Result<&serde_json::Value, &str> {
        self.json.as_ref().map_err(String::as_str)
    }
}

impl Value {
    /// Wrap any `Serialize + Display` value
    pub fn serialized<T: Serialize + fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Other(Opaque::new(value))
    }

    /// Wrap any `Display` value; the JSON form is its text
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Other(Opaque::display(value))
    }

    /// Wrap any `Debug` value; the JSON form is its debug text
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Other(Opaque::debug(value))
    }

    /// The text if this value is a string, used to recognise keys
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert to a native JSON value.
    ///
    /// `key` only labels the error. Non-finite floats and opaque values whose
    /// serialization failed cannot be encoded.
    pub fn to_json(&self, key: &str) -> Result<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(i) => Ok(serde_json::Value::Number((*i).into())),
            Value::Uint(u) => Ok(serde_json::Value::Number((*u).into())),
            Value::Float(f) => float_to_json(key, *f),
            Value::Float32(f) => {
                if !f.is_finite() {
                    return Err(non_finite(key, &format_float(*f)));
                }
                // Go through the shortest f32 text so 0.1f32 stays 0.1
                let widened = f.to_string().parse::<f64>().unwrap_or(f64::from(*f));
                float_to_json(key, widened)
            }
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Other(opaque) => opaque
                .json()
                .cloned()
                .map_err(|reason| LoggerError::unsupported_value(key, reason)),
        }
    }
}

fn float_to_json(key: &str, f: f64) -> Result<serde_json::Value> {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .ok_or_else(|| non_finite(key, &format_float(f)))
}

fn non_finite(key: &str, text: &str) -> LoggerError {
    LoggerError::unsupported_value(key, format!("{} cannot be encoded as JSON", text))
}

/// Shortest round-trip text for a float, switching to `d.dddde±XX` when the
/// decimal exponent is below -4 or at least 6.
fn format_float<F>(value: F) -> String
where
    F: fmt::Display + fmt::LowerExp,
{
    let plain = value.to_string();
    match plain.as_str() {
        "NaN" => return "NaN".to_string(),
        "inf" => return "+Inf".to_string(),
        "-inf" => return "-Inf".to_string(),
        _ => {}
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain;
    };

    if exponent < -4 || exponent >= 6 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        plain
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => f.write_str(&format_float(*fl)),
            Value::Float32(fl) => f.write_str(&format_float(*fl)),
            Value::String(s) => f.write_str(s),
            Value::Other(opaque) => f.write_str(opaque.text()),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty => $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }

            impl From<&$t> for Value {
                fn from(v: &$t) -> Self {
                    Value::$variant(*v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64 => i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64 => u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&bool> for Value {
    fn from(b: &bool) -> Self {
        Value::Bool(*b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&f64> for Value {
    fn from(f: &f64) -> Self {
        Value::Float(*f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float32(f)
    }
}

impl From<&f32> for Value {
    fn from(f: &f32) -> Self {
        Value::Float32(*f)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&&str> for Value {
    fn from(s: &&str) -> Self {
        Value::String((*s).to_string())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Other(opaque)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        (*v).into()
    }
}

impl<T: Clone + Into<Value>> From<Arc<T>> for Value {
    fn from(v: Arc<T>) -> Self {
        T::clone(&v).into()
    }
}
