//! Key/value interpretation of a log call's positional arguments
//!
//! A single argument is an implicit `msg` value. Otherwise arguments alternate
//! key, value, key, value. A key position holding something other than text is
//! named `undef[<index>]`, and a trailing key without a value is dropped.

use super::value::Value;
use std::fmt;

/// Key used for the lone argument of a one-argument call
pub const IMPLICIT_KEY: &str = "msg";

/// Ordered key/value pairs; duplicate keys are kept in call order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pairs: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Interpret positional arguments as key/value pairs
    pub fn from_args(args: &[Value]) -> Self {
        if let [only] = args {
            return Self::new().with_field(IMPLICIT_KEY, only.clone());
        }

        let pairs = args
            .chunks_exact(2)
            .enumerate()
            .map(|(pair, chunk)| {
                let key = match chunk[0].as_str() {
                    Some(key) => key.to_string(),
                    None => format!("undef[{}]", pair * 2),
                };
                (key, chunk[1].clone())
            })
            .collect();

        Self { pairs }
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.add_field(key, value);
        self
    }

    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.pairs.push((key.into(), value.into()));
    }

    /// Last value recorded under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: Vec<Value>) -> Fields {
        Fields::from_args(&values)
    }

    #[test]
    fn test_single_argument_is_msg() {
        let fields = args(vec!["hello".into()]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("msg"), Some(&Value::from("hello")));

        // A lone non-text argument still lands under msg
        let fields = args(vec![42.into()]);
        assert_eq!(fields.get("msg"), Some(&Value::Int(42)));
    }

    #[test]
    fn test_pairs() {
        let fields = args(vec!["a".into(), 1.into(), "b".into(), 2.5.into()]);
        assert_eq!(fields.format_fields(), "a=1 b=2.5");
        assert_eq!(fields.get("a"), Some(&Value::Int(1)));
        assert_eq!(fields.get("b"), Some(&Value::Float(2.5)));
    }

    #[test]
    fn test_non_text_key_placeholder() {
        let fields = args(vec![1.into(), "x".into()]);
        assert_eq!(fields.get("undef[0]"), Some(&Value::from("x")));

        let fields = args(vec!["a".into(), 1.into(), true.into(), 2.into()]);
        assert_eq!(fields.get("undef[2]"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_dangling_key_dropped() {
        let fields = args(vec!["a".into(), 1.into(), "orphan".into()]);
        assert_eq!(fields.len(), 1);
        assert!(fields.get("orphan").is_none());
    }

    #[test]
    fn test_no_arguments() {
        assert!(args(Vec::new()).is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let fields = args(vec!["k".into(), 1.into(), "k".into(), 2.into()]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("k"), Some(&Value::Int(2)));
    }
}
