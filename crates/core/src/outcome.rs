//! The result-of-fallible-operation container.
//!
//! Only construction and conversion live here. Callers that need combinators
//! convert into a standard `Result` first.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Success (`Ok`) or failure (`Err`) of an operation.
///
/// Serializes as `{"type":"ok","value":...}` or `{"type":"err","error":...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

pub fn make_ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

pub fn make_err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

// The two variants use different payload field names, which no single serde
// enum representation expresses with tuple variants.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireRef<'a, T, E> {
    Ok { value: &'a T },
    Err { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Wire<T, E> {
    Ok { value: T },
    Err { error: E },
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire: WireRef<'_, T, E> = match self {
            Outcome::Ok(value) => WireRef::Ok { value },
            Outcome::Err(error) => WireRef::Err { error },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Ok { value } => Outcome::Ok(value),
            Wire::Err { error } => Outcome::Err(error),
        })
    }
}
