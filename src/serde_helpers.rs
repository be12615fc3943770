//! Serde helpers for the loosely typed fields of Podcast Index responses.
//!
//! When the `tracing` feature is enabled, this module also logs warnings for values it
//! drops and for fields a target type does not capture, helping detect API changes.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize as _, Serialize};
use serde_json::Value;
use serde_with::ser::SerializeAsWrap;
use serde_with::{DeserializeAs, Same, SerializeAs};

/// A `serde_as` type that deserializes strings, integers or booleans as `String`.
///
/// The API reports `status` as `"true"`, but a few endpoints have been seen answering with a
/// bare boolean. Use with `#[serde_as(as = "Option<StringFromAny>")]`.
pub struct StringFromAny;

impl<'de> DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StringOrScalarVisitor;

        impl Visitor<'_> for StringOrScalarVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string, integer or boolean")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrScalarVisitor)
    }
}

impl SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}

/// A `serde_as` type that deserializes booleans, `0`/`1` integers or `"true"`/`"false"` strings
/// as `bool`.
///
/// Feeds report `explicit` as a boolean while episodes report it as an integer.
pub struct BoolFromAny;

impl<'de> DeserializeAs<'de, bool> for BoolFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<bool, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BoolOrIntVisitor;

        impl Visitor<'_> for BoolOrIntVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("boolean, integer or boolean string")
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v != 0)
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v != 0)
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "true" | "1" => Ok(true),
                    "false" | "0" => Ok(false),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(BoolOrIntVisitor)
    }
}

impl SerializeAs<bool> for BoolFromAny {
    fn serialize_as<S>(source: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(*source)
    }
}

/// A `serde_as` type for optional fields whose JSON type the API does not guarantee.
///
/// A value that does not decode as `U` becomes `None` instead of failing the whole response,
/// and is logged at `warn` when the `tracing` feature is enabled. Use together with
/// `#[serde(default)]` so a missing key is `None` as well.
pub struct Lenient<U = Same>(PhantomData<U>);

impl<'de, T, U> DeserializeAs<'de, Option<T>> for Lenient<U>
where
    U: DeserializeAs<'de, T>,
{
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }

        #[cfg(feature = "tracing")]
        let raw = value.clone();

        match U::deserialize_as(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    type_name = %std::any::type_name::<T>(),
                    value = %raw,
                    error = %e,
                    "ignoring response field with unexpected type"
                );
                #[cfg(not(feature = "tracing"))]
                let _: serde_json::Error = e;
                Ok(None)
            }
        }
    }
}

impl<T, U> SerializeAs<Option<T>> for Lenient<U>
where
    U: SerializeAs<T>,
{
    fn serialize_as<S>(source: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match source {
            Some(value) => serializer.serialize_some(&SerializeAsWrap::<T, U>::new(value)),
            None => serializer.serialize_none(),
        }
    }
}

/// A `serde_as` type for lookup payloads: `null` and an empty array decode as `None`.
///
/// The API answers a lookup that matched nothing with `[]` in place of the object. Anything else
/// is decoded as `T`, and failures are reported.
pub struct EmptyArrayAsNone;

impl<'de, T> DeserializeAs<'de, Option<T>> for EmptyArrayAsNone
where
    T: serde::Deserialize<'de>,
{
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Array(items) if items.is_empty() => Ok(None),
            value => T::deserialize(value).map(Some).map_err(de::Error::custom),
        }
    }
}

impl<T: Serialize> SerializeAs<Option<T>> for EmptyArrayAsNone {
    fn serialize_as<S>(source: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        source.serialize(serializer)
    }
}

/// Deserialize JSON with unknown field warnings.
///
/// Fields that are not captured by the target type are logged at `warn` and then dropped;
/// they never cause deserialization to fail. On failure, the offending path and value are
/// logged at `error` before the error is returned.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let json_str = original.to_string();
        let jd = &mut serde_json::Deserializer::from_str(&json_str);
        let path_result: Result<T, _> = serde_path_to_error::deserialize(jd);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            let value_display = format_value(lookup_value(&original, &path));

            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %value_display,
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    if !unknown_paths.is_empty() {
        let type_name = type_name::<T>();
        for path in unknown_paths {
            let value_display = format_value(lookup_value(&original, &path));

            tracing::warn!(
                type_name = %type_name,
                field = %path,
                value = %value_display,
                "unknown field in API response"
            );
        }
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Look up a value in a JSON structure by path.
///
/// Handles paths from both `serde_ignored` and `serde_path_to_error`:
/// `?` markers for Option wrappers are skipped, array indices may be written
/// `items.0` or `items[0]`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in parse_path_segments(path) {
        if segment == "?" {
            continue;
        }

        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Splits `"feeds[3].categories"` into `["feeds", "3", "categories"]`.
#[cfg(feature = "tracing")]
fn parse_path_segments(path: &str) -> Vec<String> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<unable to retrieve>".to_owned(),
    }
}
