//! # Record Model
//!
//! [`Book`] is the only entity. On disk each book is a JSON object; the
//! conversion goes through a plain [`Map`] so the storage layer never relies on
//! derive-generated shapes:
//!
//! - [`Book::to_structured`] always emits `id, title, author, year, isbn`, in
//!   that order, with `null` for absent optional fields.
//! - [`Book::from_structured`] is lenient on everything except `id`. Missing
//!   text fields become empty strings, unknown keys are ignored, and values of
//!   the wrong JSON type are coerced where a sensible reading exists.
//!
//! `id` is the only relational key, so an entry without a usable one is a
//! [`CatalogError::MalformedRecord`].

use crate::error::{CatalogError, Result};
use serde_json::{Map, Value};
use std::fmt;

pub type BookId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    pub isbn: Option<String>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: None,
            isbn: None,
        }
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn to_structured(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".into(), Value::from(self.id));
        map.insert("title".into(), Value::from(self.title.clone()));
        map.insert("author".into(), Value::from(self.author.clone()));
        map.insert(
            "year".into(),
            self.year.map(Value::from).unwrap_or(Value::Null),
        );
        map.insert(
            "isbn".into(),
            self.isbn.clone().map(Value::from).unwrap_or(Value::Null),
        );
        map
    }

    pub fn from_structured(map: &Map<String, Value>) -> Result<Self> {
        let id = match map.get("id") {
            None => return Err(CatalogError::malformed("missing \"id\"")),
            Some(raw) => coerce_int(raw).ok_or_else(|| {
                CatalogError::malformed(format!("\"id\" is not an integer: {}", raw))
            })?,
        };

        let year = match map.get("year") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let year = coerce_int(raw);
                if year.is_none() {
                    tracing::warn!(id, value = %raw, "ignoring unusable year");
                }
                year
            }
        };

        Ok(Self {
            id,
            title: map.get("title").map(coerce_text).unwrap_or_default(),
            author: map.get("author").map(coerce_text).unwrap_or_default(),
            year,
            isbn: match map.get("isbn") {
                None | Some(Value::Null) => None,
                Some(raw) => Some(coerce_text(raw)),
            },
        })
    }

    pub fn apply(&self, patch: &BookPatch) -> Book {
        Book {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            year: patch.year.or(self.year),
            isbn: patch.isbn.clone().or_else(|| self.isbn.clone()),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)?;
        if !self.author.is_empty() {
            write!(f, " by {}", self.author)?;
        }
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        if let Some(isbn) = self.isbn.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " ISBN: {}", isbn)?;
        }
        Ok(())
    }
}

/// Fields explicitly supplied to an update. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    pub isbn: Option<String>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none() && self.isbn.is_none()
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
