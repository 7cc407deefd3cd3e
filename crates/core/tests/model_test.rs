//! Tests for the book/quote model and the library file.

use chrono::{Duration, Utc};
use passage_core::error::PassageError;
use passage_core::model::{Book, Library, Quote};
use uuid::Uuid;

// ============================================================================
// Book accessors
// ============================================================================

#[test]
fn last_updated_is_creation_time_for_empty_book() {
    let book = Book::new("Walden", None);
    assert_eq!(book.last_updated_at(), book.created_at);
}

#[test]
fn last_updated_tracks_latest_quote() {
    let mut book = Book::new("Walden", Some("Henry David Thoreau".to_string()));

    let mut early = Quote::new("Simplicity, simplicity, simplicity!");
    early.created_at = book.created_at - Duration::days(1);
    let mut late = Quote::new("The mass of men lead lives of quiet desperation.");
    late.created_at = book.created_at + Duration::hours(2);

    book.quotes.push(early);
    book.quotes.push(late.clone());

    assert_eq!(book.last_updated_at(), late.created_at);
    assert_eq!(book.quotes_count(), 2);
}

// ============================================================================
// Quote filing
// ============================================================================

#[test]
fn save_quote_trims_text_and_appends() {
    let mut library = Library::new();
    let id = library.add_book("Walden", None);

    let quote = library
        .save_quote(id, "  To be awake is to be alive.  ", Some("90".to_string()), None)
        .unwrap();
    assert_eq!(quote.text, "To be awake is to be alive.");
    assert_eq!(quote.page.as_deref(), Some("90"));

    let book = library.book(id).unwrap();
    assert_eq!(book.quotes_count(), 1);
}

#[test]
fn save_quote_rejects_whitespace_only_text() {
    let mut library = Library::new();
    let id = library.add_book("Walden", None);

    let err = library.save_quote(id, "   \n ", None, None).unwrap_err();
    assert!(matches!(err, PassageError::InvalidArgument(_)));
    assert_eq!(library.book(id).unwrap().quotes_count(), 0);
}

#[test]
fn save_quote_to_unknown_book_fails() {
    let mut library = Library::new();
    let missing = Uuid::new_v4();

    let err = library.save_quote(missing, "text", None, None).unwrap_err();
    assert!(matches!(err, PassageError::BookNotFound(id) if id == missing));
}

#[test]
fn book_mut_allows_in_place_edits() {
    let mut library = Library::new();
    let id = library.add_book("Waldon", None);

    library.book_mut(id).unwrap().title = "Walden".to_string();
    assert_eq!(library.book(id).unwrap().title, "Walden");
    assert!(library.book_mut(Uuid::new_v4()).is_none());
}

#[test]
fn book_by_title_finds_first_match() {
    let mut library = Library::new();
    let first = library.add_book("Walden", None);
    library.add_book("Walden", Some("someone else".to_string()));

    assert_eq!(library.book_by_title("Walden").unwrap().id, first);
    assert!(library.book_by_title("walden").is_none());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn library_round_trips_through_json() {
    let mut library = Library::new();
    let id = library.add_book("Walden", Some("Henry David Thoreau".to_string()));
    library
        .save_quote(id, "Our life is frittered away by detail.", None, Some("ch. 2".to_string()))
        .unwrap();

    let json = serde_json::to_string(&library).unwrap();
    let restored: Library = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, library);
}

#[test]
fn load_or_default_treats_missing_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    let library = Library::load_or_default(&path).unwrap();
    assert!(library.books.is_empty());
}

#[test]
fn save_then_load_preserves_the_library() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    let mut library = Library::new();
    let id = library.add_book("Walden", None);
    library.save_quote(id, "Time is but the stream I go a-fishing in.", None, None).unwrap();
    library.save(&path).unwrap();

    assert_eq!(Library::load(&path).unwrap(), library);
    assert_eq!(Library::load_or_default(&path).unwrap(), library);
}

#[test]
fn load_of_garbage_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, b"not json").unwrap();

    let err = Library::load(&path).unwrap_err();
    assert!(matches!(err, PassageError::Json(_)));
}
