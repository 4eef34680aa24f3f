//! Parameter types and the parsers that coerce raw command-line text into values.
//!
//! Every parameter a command declares carries a [`ParamType`]. Each variant maps to one pure
//! parsing function (`raw text -> value`), so adding a new kind of parameter means adding a
//! variant and its parser here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Default separator between array items and between map entries.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Default separator between a map key and its value.
pub const DEFAULT_KEY_VALUE_SEPARATOR: &str = ":";

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_key_value_separator() -> String {
    DEFAULT_KEY_VALUE_SEPARATOR.to_string()
}

/// The declared type of a command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array {
        #[serde(default = "default_separator")]
        separator: String,
    },
    Map {
        #[serde(default = "default_separator")]
        entry_separator: String,
        #[serde(default = "default_key_value_separator")]
        key_value_separator: String,
    },
}

impl ParamType {
    /// Array type split on `separator`.
    pub fn array<S: Into<String>>(separator: S) -> Self {
        Self::Array { separator: separator.into() }
    }

    /// Map type with custom entry and key/value separators.
    pub fn map<E: Into<String>, K: Into<String>>(entry_separator: E, key_value_separator: K) -> Self {
        Self::Map {
            entry_separator: entry_separator.into(),
            key_value_separator: key_value_separator.into(),
        }
    }

    /// Resolves a shorthand type name (`string`, `number`, `boolean`, `array`, `map`)
    /// to a type with default separators.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" | "bool" => Some(Self::Boolean),
            "array" => Some(Self::array(DEFAULT_SEPARATOR)),
            "map" => Some(Self::map(DEFAULT_SEPARATOR, DEFAULT_KEY_VALUE_SEPARATOR)),
            _ => None,
        }
    }

    /// Boolean parameters may appear as bare flags on the command line.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    /// Coerces raw text into a value of this type. `None` means the option
    /// was given without any value.
    pub fn parse(&self, raw: Option<&str>) -> ParamValue {
        match self {
            Self::String => ParamValue::String(parse_string(raw)),
            Self::Number => ParamValue::Number(parse_number(raw)),
            Self::Boolean => ParamValue::Boolean(parse_boolean(raw)),
            Self::Array { separator } => ParamValue::Array(parse_array(raw, separator)),
            Self::Map { entry_separator, key_value_separator } => {
                ParamValue::Map(parse_map(raw, entry_separator, key_value_separator))
            }
        }
    }

    /// Separators that must be non-empty for the type to be usable.
    pub(crate) fn separators(&self) -> Vec<&str> {
        match self {
            Self::Array { separator } => vec![separator.as_str()],
            Self::Map { entry_separator, key_value_separator } => {
                vec![entry_separator.as_str(), key_value_separator.as_str()]
            }
            _ => Vec::new(),
        }
    }
}

/// A parsed parameter value, as seen by the templates.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    /// Unparseable input is kept as NaN rather than rejected
    Number(f64),
    Boolean(bool),
    Array(Vec<String>),
    /// Entries without a key/value separator map to `None`
    Map(IndexMap<String, Option<String>>),
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::String(value) => serializer.serialize_str(value),
            // Whole numbers render as `12`, not `12.0`
            ParamValue::Number(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                serializer.serialize_i64(*value as i64)
            }
            ParamValue::Number(value) => serializer.serialize_f64(*value),
            ParamValue::Boolean(value) => serializer.serialize_bool(*value),
            ParamValue::Array(items) => items.serialize(serializer),
            ParamValue::Map(entries) => entries.serialize(serializer),
        }
    }
}

/// Identity coercion; a missing value becomes the empty string.
pub fn parse_string(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

/// Numeric coercion. Empty text is `0`, a missing value or non-numeric text is NaN.
pub fn parse_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map(|n| n as f64).unwrap_or(f64::NAN);
        }
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts "inf" and "nan" spellings, which are not numbers here.
    if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Permissive boolean coercion: `"true"` and `"false"` map as written, any other
/// non-empty text is `true`, empty or missing input is `false`.
pub fn parse_boolean(raw: Option<&str>) -> bool {
    match raw {
        Some("true") => true,
        Some("false") => false,
        Some(other) => !other.is_empty(),
        None => false,
    }
}

/// Splits delimited text into trimmed items. Empty items are kept.
pub fn parse_array(raw: Option<&str>, separator: &str) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    strip_quotes(raw).split(separator).map(|item| item.trim().to_string()).collect()
}

/// Splits delimited `key<sep>value` entries into an ordered map.
pub fn parse_map(
    raw: Option<&str>,
    entry_separator: &str,
    key_value_separator: &str,
) -> IndexMap<String, Option<String>> {
    let mut map = IndexMap::new();
    let Some(raw) = raw else {
        return map;
    };

    for entry in strip_quotes(raw).split(entry_separator).map(str::trim) {
        let mut parts = entry.split(key_value_separator).map(str::trim);
        let key = parts.next().unwrap_or_default().to_string();
        let value = parts.next().map(str::to_string);
        map.insert(key, value);
    }

    map
}

/// Removes one optional leading and one optional trailing quote character.
fn strip_quotes(raw: &str) -> &str {
    const QUOTES: &[char] = &['"', '\''];
    let raw = raw.strip_prefix(QUOTES).unwrap_or(raw);
    raw.strip_suffix(QUOTES).unwrap_or(raw)
}
