//! Literal values and their PHP source representation.
//!
//! [`export`] is the single place where a runtime value turns into PHP
//! literal syntax. Constant values, property defaults and parameter defaults
//! all go through it.

use std::fmt::Write as _;

use indexmap::IndexMap;

/// A value that can appear as a constant value or a default value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered key/value array. Lists use consecutive integer keys.
    Array(IndexMap<ArrayKey, Literal>),
}

/// Key of a PHP array element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

impl Literal {
    /// An empty array.
    pub fn empty_array() -> Self {
        Self::Array(IndexMap::new())
    }

    /// A list keyed `0..n`.
    pub fn list<T: Into<Literal>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Int(i as i64), v.into()))
                .collect(),
        )
    }

    /// A keyed array preserving the given order.
    pub fn map<K: Into<ArrayKey>, V: Into<Literal>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Array(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for an array without elements.
    pub fn is_empty_array(&self) -> bool {
        matches!(self, Self::Array(items) if items.is_empty())
    }

    /// Render as PHP literal syntax. See [`export`].
    pub fn export(&self) -> String {
        export(self)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::list(items),
            Value::Object(entries) => Self::map(entries),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArrayKey {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

/// Decimal integer strings become integer keys, as PHP does on insertion.
impl From<&str> for ArrayKey {
    fn from(v: &str) -> Self {
        if is_canonical_int(v) {
            if let Ok(i) = v.parse() {
                return Self::Int(i);
            }
        }
        Self::String(v.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(v: String) -> Self {
        match ArrayKey::from(v.as_str()) {
            Self::Int(i) => Self::Int(i),
            Self::String(_) => Self::String(v),
        }
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => s.len() == 1,
        [first, rest @ ..] => {
            first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit)
        }
    }
}

/// Render a value with PHP `var_export` syntax.
///
/// An empty array renders as `[]` at any depth.
pub fn export(value: &Literal) -> String {
    let mut out = String::new();
    write_literal(&mut out, value, 1);
    out
}

fn write_literal(out: &mut String, value: &Literal, level: usize) {
    match value {
        Literal::Null => out.push_str("NULL"),
        Literal::Bool(true) => out.push_str("true"),
        Literal::Bool(false) => out.push_str("false"),
        Literal::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Literal::Float(f) => out.push_str(&export_float(*f)),
        Literal::String(s) => out.push_str(&export_string(s)),
        Literal::Array(items) if items.is_empty() => out.push_str("[]"),
        Literal::Array(items) => {
            if level > 1 {
                out.push('\n');
                push_spaces(out, level - 1);
            }
            out.push_str("array (\n");
            for (key, item) in items {
                push_spaces(out, level + 1);
                match key {
                    ArrayKey::Int(i) => {
                        let _ = write!(out, "{i}");
                    }
                    ArrayKey::String(s) => {
                        out.push('\'');
                        out.push_str(&escape_single_quoted(s));
                        out.push('\'');
                    }
                }
                out.push_str(" => ");
                write_literal(out, item, level + 2);
                out.push_str(",\n");
            }
            if level > 1 {
                push_spaces(out, level - 1);
            }
            out.push(')');
        }
    }
}

fn push_spaces(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

fn export_string(s: &str) -> String {
    let escaped = escape_single_quoted(s).replace('\0', "' . \"\\0\" . '");
    format!("'{escaped}'")
}

/// Shortest round-trip digits, laid out the way PHP prints doubles with
/// `serialize_precision = -1`.
fn export_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let sign = if f.is_sign_negative() { "-" } else { "" };
    if f == 0.0 {
        return format!("{sign}0.0");
    }

    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let decpt = exp + 1;

    let body = if decpt < -3 || decpt > 17 {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if decpt - 1 < 0 { '-' } else { '+' };
        format!("{first}.{rest}E{exp_sign}{}", (decpt - 1).abs())
    } else if decpt <= 0 {
        format!("0.{}{digits}", "0".repeat(decpt.unsigned_abs() as usize))
    } else {
        let decpt = decpt as usize;
        if digits.len() <= decpt {
            format!("{digits}{}.0", "0".repeat(decpt - digits.len()))
        } else {
            format!("{}.{}", &digits[..decpt], &digits[decpt..])
        }
    };

    format!("{sign}{body}")
}
