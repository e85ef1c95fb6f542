use crate::{Catalog, Record};

/// Front desk for a catalog.
///
/// The manager only knows the [`Catalog`] capability, so any implementation
/// can be plugged in.
#[derive(Debug, Default)]
pub struct Manager<C> {
    catalog: C,
}

impl<C: Catalog> Manager<C> {
    /// Wraps a catalog.
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Builds a record from the given fields and adds it to the catalog.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) {
        self.catalog.insert(Record::new(title, author, year));
    }

    /// Removes every book with the given title, returning how many went.
    pub fn remove_book(&mut self, title: &str) -> usize {
        self.catalog.remove_by_title(title)
    }

    /// The books currently in the catalog, in insertion order.
    pub fn show_books(&self) -> Vec<Record> {
        self.catalog.list_all()
    }

    /// Gives back the underlying catalog.
    pub fn into_inner(self) -> C {
        self.catalog
    }
}
