//! Event payloads
//!
//! A log call carries at most one [`Message`]. The payload is a closed set of
//! variants that all know how to render themselves as text:
//! - `Text`: a free-form line, escaped before being written
//! - `Fields`: ordered key/value pairs
//! - `Raw`: a pre-formatted blob written verbatim

use std::fmt;

/// Value type for structured fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Ordered key/value pairs
///
/// Insertion order is kept so rendered output is stable. Setting a key that
/// already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    fields: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder version)
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    /// Add a field (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.add_field(key, value);
        }
        fields
    }
}

/// The payload of a log event
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Free-form text
    Text(String),
    /// Structured key/value pairs
    Fields(Fields),
    /// Pre-formatted output, written as is
    Raw(String),
}

impl Message {
    /// Build a text message from anything displayable.
    pub fn display(value: impl fmt::Display) -> Self {
        Message::Text(value.to_string())
    }

    /// Build a message that bypasses escaping.
    pub fn raw(value: impl Into<String>) -> Self {
        Message::Raw(value.into())
    }

    /// The message text, when this is a `Text` or `Raw` payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(s) | Message::Raw(s) => Some(s),
            Message::Fields(_) => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(s) | Message::Raw(s) => f.write_str(s),
            Message::Fields(fields) => fmt::Display::fmt(fields, f),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Message::Text(s.to_string())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Message::Text(s)
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Message::Text(args.to_string())
    }
}

impl From<Fields> for Message {
    fn from(fields: Fields) -> Self {
        Message::Fields(fields)
    }
}

/// Anything a rank method accepts as its payload.
///
/// Implemented for the types that convert into a [`Message`], plus
/// `Option<Message>` so a call may carry no payload at all:
///
/// ```
/// use rust_fanout_logger::{Logger, Message};
///
/// let logger = Logger::builder().no_default_appender().build();
/// logger.info("text");
/// logger.info(None);
/// logger.info(Some(Message::raw("pre-formatted")));
/// ```
pub trait IntoPayload {
    fn into_payload(self) -> Option<Message>;
}

impl IntoPayload for Message {
    fn into_payload(self) -> Option<Message> {
        Some(self)
    }
}

impl IntoPayload for Option<Message> {
    fn into_payload(self) -> Option<Message> {
        self
    }
}

impl IntoPayload for &str {
    fn into_payload(self) -> Option<Message> {
        Some(self.into())
    }
}

impl IntoPayload for String {
    fn into_payload(self) -> Option<Message> {
        Some(self.into())
    }
}

impl IntoPayload for fmt::Arguments<'_> {
    fn into_payload(self) -> Option<Message> {
        Some(self.into())
    }
}

impl IntoPayload for Fields {
    fn into_payload(self) -> Option<Message> {
        Some(self.into())
    }
}

impl PartialEq<str> for Message {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Message::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Message {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let fields = Fields::new()
            .with_field("user_id", 12345)
            .with_field("action", "login")
            .with_field("ok", true);
        assert_eq!(fields.to_string(), "user_id=12345 action=login ok=true");
    }

    #[test]
    fn test_fields_replace_existing_key() {
        let mut fields = Fields::new().with_field("attempt", 1);
        fields.add_field("attempt", 2);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("attempt"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn test_fields_from_iter() {
        let fields: Fields = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(fields.to_string(), "a=1 b=2");
    }

    #[test]
    fn test_field_value_from_option() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::String("x".into()));
    }

    #[test]
    fn test_message_display() {
        assert_eq!(Message::from("hello").to_string(), "hello");
        assert_eq!(Message::display(42).to_string(), "42");
        assert_eq!(Message::raw("a\nb").to_string(), "a\nb");
        let fields = Fields::new().with_field("k", 1.5);
        assert_eq!(Message::from(fields).to_string(), "k=1.5");
    }

    #[test]
    fn test_into_payload() {
        assert_eq!("a".into_payload(), Some(Message::from("a")));
        assert_eq!(Fields::new().into_payload(), Some(Message::Fields(Fields::new())));
        assert_eq!(None::<Message>.into_payload(), None);
        assert_eq!(Some(Message::raw("r")).into_payload(), Some(Message::raw("r")));
    }

    #[test]
    fn test_message_compares_with_str() {
        let message = Message::from(format!("value {}", 7));
        assert_eq!(message, "value 7");
        assert!(Message::raw("x") != "x");
    }
}
