//! The quote library: a collection of books persisted as a JSON file.
//!
//! This is the persistence collaborator of the reconstruction pipeline. The
//! caller hands over reconstructed (or user-selected) text plus a target
//! book id; everything about how books and quotes are kept lives here.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{Book, Quote};
use crate::error::{PassageError, Result};

/// All books and their quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub books: Vec<Book>,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty book and returns its id.
    pub fn add_book(&mut self, title: impl Into<String>, author: Option<String>) -> Uuid {
        let book = Book::new(title, author);
        let id = book.id;
        self.books.push(book);
        id
    }

    /// Looks up a book by id.
    pub fn book(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Looks up a book by id for mutation.
    pub fn book_mut(&mut self, id: Uuid) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id == id)
    }

    /// Looks up a book by exact title. With duplicate titles the first
    /// added wins; disambiguate by id instead.
    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    /// Files text as a new quote under the given book.
    ///
    /// The text is trimmed first; empty or whitespace-only text is an
    /// [`PassageError::InvalidArgument`], and an unknown book id is a
    /// [`PassageError::BookNotFound`].
    pub fn save_quote(
        &mut self,
        book_id: Uuid,
        text: &str,
        page: Option<String>,
        note: Option<String>,
    ) -> Result<&Quote> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PassageError::InvalidArgument(
                "quote text is empty".to_string(),
            ));
        }

        let book = self
            .book_mut(book_id)
            .ok_or(PassageError::BookNotFound(book_id))?;

        book.quotes.push(Quote::with_details(trimmed, page, note));
        debug!(book = %book.title, chars = trimmed.len(), "saved quote");

        Ok(book.quotes.last().expect("quote was just pushed"))
    }

    /// Reads a library from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Reads a library from a JSON file, treating a missing file as an
    /// empty library.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read(path) {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the library to a JSON file, replacing any existing contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(&path, data)?;
        debug!(
            path = %path.as_ref().display(),
            books = self.books.len(),
            "wrote library"
        );
        Ok(())
    }
}
