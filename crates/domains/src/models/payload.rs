//! Field access over untyped JSON payloads.
//!
//! Every entity validates in two passes: presence of all required fields
//! first, then their types. Callers must finish the presence pass before
//! reading any field so that an incomplete and mistyped payload reports
//! `MissingProperty`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::errors::{DomainError, EntityKind, Result};

pub(crate) struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
    entity: EntityKind,
}

impl<'a> Payload<'a> {
    /// Anything other than a JSON object behaves as an object with no fields.
    pub(crate) fn new(value: &'a Value, entity: EntityKind) -> Self {
        Self {
            fields: value.as_object(),
            entity,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(key))
            .filter(|value| !value.is_null())
    }

    /// Each key must be present, non-null and not an empty string.
    pub(crate) fn require(&self, keys: &[&str]) -> Result<()> {
        let missing = keys.iter().any(|key| match self.get(key) {
            None => true,
            Some(Value::String(text)) => text.is_empty(),
            Some(_) => false,
        });
        if missing {
            return Err(DomainError::missing(self.entity));
        }
        Ok(())
    }

    /// Each key must be present and non-null; empty strings are allowed.
    pub(crate) fn require_present(&self, keys: &[&str]) -> Result<()> {
        if keys.iter().any(|key| self.get(key).is_none()) {
            return Err(DomainError::missing(self.entity));
        }
        Ok(())
    }

    fn field(&self, key: &str) -> Result<&'a Value> {
        self.get(key).ok_or(DomainError::missing(self.entity))
    }

    pub(crate) fn string(&self, key: &str) -> Result<&'a str> {
        self.field(key)?
            .as_str()
            .ok_or(DomainError::wrong_type(self.entity))
    }

    pub(crate) fn boolean(&self, key: &str) -> Result<bool> {
        self.field(key)?
            .as_bool()
            .ok_or(DomainError::wrong_type(self.entity))
    }

    pub(crate) fn array(&self, key: &str) -> Result<&'a Vec<Value>> {
        self.field(key)?
            .as_array()
            .ok_or(DomainError::wrong_type(self.entity))
    }

    /// A string field holding a timestamp, normalized to canonical form.
    pub(crate) fn timestamp(&self, key: &str) -> Result<String> {
        let raw = self.string(key)?;
        parse_timestamp(raw)
            .map(format_timestamp)
            .ok_or(DomainError::wrong_type(self.entity))
    }

    pub(crate) fn wrong_type(&self) -> DomainError {
        DomainError::wrong_type(self.entity)
    }
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` read as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
