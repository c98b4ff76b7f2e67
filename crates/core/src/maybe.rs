//! The optional-value container and its construction, mapping and unwrapping helpers.
//!
//! [`Maybe`] mirrors the standard `Option` but carries a stable wire shape:
//! `{"type":"some","value":...}` and `{"type":"none"}`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Presence (`Some`) or absence (`None`) of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Maybe<T> {
    /// Shared absent value.
    pub const NONE: Self = Maybe::None;

    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Same as [`map_option`].
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        map_option(self, f)
    }

    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

/// Wrap a value in `Some`.
pub fn make_some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// The absent value. Equivalent to [`Maybe::NONE`].
pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

/// Apply `f` to the contained value. `f` is never called on `None`, and a
/// panic inside `f` is not caught.
pub fn map_option<T, U, F>(option: Maybe<T>, f: F) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    match option {
        Maybe::Some(value) => Maybe::Some(f(value)),
        Maybe::None => Maybe::None,
    }
}

/// Return the contained value, or [`Error::UnwrapNone`] on `None`.
pub fn unwrap<T>(option: Maybe<T>) -> Result<T, Error> {
    match option {
        Maybe::Some(value) => Ok(value),
        Maybe::None => Err(Error::UnwrapNone),
    }
}

/// Return the contained value, or `fallback` on `None`.
pub fn unwrap_or<T>(option: Maybe<T>, fallback: T) -> T {
    match option {
        Maybe::Some(value) => value,
        Maybe::None => fallback,
    }
}

/// Return the contained value, or an error whose message is exactly `message`.
pub fn unwrap_expect<T>(option: Maybe<T>, message: impl Into<String>) -> Result<T, Error> {
    match option {
        Maybe::Some(value) => Ok(value),
        Maybe::None => Err(Error::Expect(message.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ============================================================================
    // construction tests
    // ============================================================================

    #[test]
    fn test_make_some_wraps_value() {
        assert_eq!(make_some("hello"), Maybe::Some("hello"));
    }

    #[test]
    fn test_none_matches_shared_constant() {
        assert_eq!(none::<u8>(), Maybe::<u8>::NONE);
        assert!(none::<u8>().is_none());
        assert!(!make_some(1).is_none());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }

    #[test]
    fn test_std_option_conversions() {
        assert_eq!(Maybe::from(Some(3)), make_some(3));
        assert_eq!(Maybe::<i32>::from(None), none());
        assert_eq!(Option::from(make_some('a')), Some('a'));
        assert_eq!(Option::<char>::from(none()), None);
    }

    // ============================================================================
    // map_option tests
    // ============================================================================

    #[test]
    fn test_map_option_on_some_applies_function() {
        assert_eq!(map_option(make_some(20), |v| v + 1), make_some(21));
    }

    #[test]
    fn test_map_option_on_none_never_calls_function() {
        let calls = Cell::new(0);
        let result = map_option(none::<i32>(), |v| {
            calls.set(calls.get() + 1);
            v * 2
        });

        assert_eq!(result, none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_option_changes_type() {
        assert_eq!(
            make_some(5).map(|v| format!("n={v}")),
            make_some("n=5".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "mapper failed")]
    fn test_map_option_propagates_panic() {
        let _ = map_option(make_some(1), |_: i32| -> i32 { panic!("mapper failed") });
    }

    #[test]
    fn test_and_then_flattens() {
        let half = |v: i32| if v % 2 == 0 { make_some(v / 2) } else { none() };
        assert_eq!(make_some(8).and_then(half), make_some(4));
        assert_eq!(make_some(7).and_then(half), none());
        assert_eq!(none().and_then(half), none());
    }

    // ============================================================================
    // unwrap tests
    // ============================================================================

    #[test]
    fn test_unwrap_some_returns_value() {
        assert_eq!(unwrap(make_some(vec![1, 2])), Ok(vec![1, 2]));
    }

    #[test]
    fn test_unwrap_none_fails() {
        let err = unwrap(none::<i32>()).unwrap_err();
        assert_eq!(err, Error::UnwrapNone);
        assert_eq!(err.to_string(), "Cannot unwrap None");
    }

    #[test]
    fn test_unwrap_or_prefers_contained_value() {
        assert_eq!(unwrap_or(make_some(1), 99), 1);
        assert_eq!(unwrap_or(none(), 99), 99);
    }

    #[test]
    fn test_unwrap_expect_some_returns_value() {
        assert_eq!(unwrap_expect(make_some("v"), "msg"), Ok("v"));
    }

    #[test]
    fn test_unwrap_expect_none_carries_exact_message() {
        let err = unwrap_expect(none::<()>(), "msg").unwrap_err();
        assert_eq!(err, Error::Expect("msg".to_string()));
        assert_eq!(err.to_string(), "msg");
    }

    // ============================================================================
    // wire shape tests
    // ============================================================================

    #[test]
    fn test_some_serializes_with_type_tag() {
        let json = serde_json::to_value(make_some(42)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "some", "value": 42}));
    }

    #[test]
    fn test_none_serializes_without_value() {
        let json = serde_json::to_value(none::<i32>()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "none"}));
    }

    #[test]
    fn test_deserialize_wire_shapes() {
        let some: Maybe<String> =
            serde_json::from_str(r#"{"type":"some","value":"x"}"#).unwrap();
        let absent: Maybe<String> = serde_json::from_str(r#"{"type":"none"}"#).unwrap();

        assert_eq!(some, make_some("x".to_string()));
        assert_eq!(absent, none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_tag() {
        let result: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"type":"maybe","value":1}"#);
        assert!(result.is_err());
    }
}
