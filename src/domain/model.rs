use crate::utils::error::{Result, SvcError};
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use url::Url;

/// A validated numeric operand.
///
/// Integers stay exact as long as they fit in an `i64`; anything else is
/// carried as an `f64`. Equality is by value, so `Int(5) == Float(5.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns `None` unless the value is a JSON number.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Number::Int)
                .or_else(|| n.as_f64().map(Number::Float)),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // i64 溢位時改用浮點數
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(a as f64 + b as f64)),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for serde_json::Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => serde_json::Value::from(i),
            Number::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

/// A request for metadata about one video, identified by its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoRequest {
    url: Url,
}

impl VideoRequest {
    pub fn new(url: &str) -> Result<Self> {
        validate_url("url", url)?;
        let url = Url::parse(url).map_err(|e| SvcError::InvalidConfigValueError {
            field: "url".to_string(),
            value: url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl TryFrom<String> for VideoRequest {
    type Error = SvcError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<VideoRequest> for String {
    fn from(value: VideoRequest) -> Self {
        value.url.into()
    }
}

/// Parsed JSON body returned by the metadata API.
pub type Metadata = serde_json::Value;
