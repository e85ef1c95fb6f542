use std::fmt;

/// A book stored in the catalog.
///
/// Records carry no identity beyond their field values. None of the fields
/// are validated; the year in particular is free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    title: String,
    author: String,
    year: String,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// The title, used as the removal key.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The publication year, as entered.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let record = Record::new("Dune", "Herbert", "1965");
        assert_eq!(record.to_string(), "Title: Dune, Author: Herbert, Year: 1965");
    }

    #[test]
    fn empty_fields_are_accepted() {
        let record = Record::new("", "", "");
        assert_eq!(record.to_string(), "Title: , Author: , Year: ");
    }

    #[test]
    fn year_is_free_text() {
        let record = Record::new("Beowulf", "Unknown", "c. 1000");
        assert_eq!(record.year(), "c. 1000");
    }
}
