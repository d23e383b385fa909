use crate::EvalError;
use serde::{Deserialize, Serialize};

/// Flat result-pair handed to callers.
///
/// Exactly one side holds: on success `message` is empty, on failure
/// `value` is `0.0` and `message` is one of the [`crate::ErrorKind`]
/// catalogue strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub success: bool,
    #[serde(with = "number_or_symbol")]
    pub value: f64,
    pub message: String,
}

impl Evaluation {
    /// A successful evaluation.
    pub fn ok(value: f64) -> Self {
        Self {
            success: true,
            value,
            message: String::new(),
        }
    }

    /// A failed evaluation carrying the error's catalogue message.
    pub fn failed(err: &EvalError) -> Self {
        Self {
            success: false,
            value: 0.0,
            message: err.message().to_string(),
        }
    }

    /// Serialize to a JSON object `{"success":…,"value":…,"message":…}`.
    ///
    /// Finite values are JSON numbers; infinities and NaN are written as
    /// the strings `"inf"`, `"-inf"` and `"NaN"`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<crate::Result<f64>> for Evaluation {
    fn from(result: crate::Result<f64>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::failed(&err),
        }
    }
}

/// `f64` as a JSON number when finite, otherwise as `"inf"`, `"-inf"` or
/// `"NaN"`. JSON has no literal for non-finite numbers.
mod number_or_symbol {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";
    const NAN: &str = "NaN";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(INF)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INF)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberOrSymbol)
    }

    struct NumberOrSymbol;

    impl Visitor<'_> for NumberOrSymbol {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a number or one of \"{INF}\", \"{NEG_INF}\", \"{NAN}\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }
}
