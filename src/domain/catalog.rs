use tracing::info;

use crate::Record;

/// The capability of storing book records.
///
/// Anything that can insert, remove by title, and list its records can stand
/// in as a catalog.
pub trait Catalog {
    /// Appends a record to the end of the catalog.
    fn insert(&mut self, record: Record);

    /// Removes every record whose title equals `title` exactly.
    ///
    /// Matching is case-sensitive and whole-string. The relative order of the
    /// remaining records is preserved.
    ///
    /// Returns the number of records removed; zero means no record had that
    /// title.
    fn remove_by_title(&mut self, title: &str) -> usize;

    /// Returns a snapshot of the records in insertion order.
    fn list_all(&self) -> Vec<Record>;
}

/// An in-memory catalog backed by a vector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    books: Vec<Record>,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// The number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the library holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Catalog for Library {
    fn insert(&mut self, record: Record) {
        info!("Book added: {record}");
        self.books.push(record);
    }

    fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title() != title);
        let removed = before - self.books.len();

        if removed > 0 {
            info!(removed, "Book removed: {title}");
        } else {
            info!("No book found with title: {title}");
        }
        removed
    }

    fn list_all(&self) -> Vec<Record> {
        self.books.clone()
    }
}

impl FromIterator<Record> for Library {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut library = Self::new();
        for record in iter {
            library.insert(record);
        }
        library
    }
}
