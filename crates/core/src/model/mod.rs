//! Book and quote model.
//!
//! Value types for the collections a reconstructed passage gets filed into.
//! The library file format is nothing more than these types' serde derives.

pub mod library;

pub use library::Library;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved passage, filed under a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub text: String,
    /// Page reference as entered by the user, e.g. "212" or "xii".
    pub page: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Creates a quote with no page reference or note.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_details(text, None, None)
    }

    /// Creates a quote with optional page reference and note.
    pub fn with_details(
        text: impl Into<String>,
        page: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            page,
            note,
            created_at: Utc::now(),
        }
    }
}

/// A book holding zero or more quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub quotes: Vec<Quote>,
}

impl Book {
    /// Creates an empty book.
    pub fn new(title: impl Into<String>, author: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author,
            created_at: Utc::now(),
            quotes: Vec::new(),
        }
    }

    /// The most recent time this book or any of its quotes was created.
    pub fn last_updated_at(&self) -> DateTime<Utc> {
        self.quotes
            .iter()
            .map(|quote| quote.created_at)
            .max()
            .map_or(self.created_at, |latest| self.created_at.max(latest))
    }

    /// Convenience accessor for the number of quotes in this book.
    pub fn quotes_count(&self) -> usize {
        self.quotes.len()
    }
}
