use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

struct SeedAuthor {
    id: i32,
    name: &'static str,
}

struct SeedBook {
    id: i32,
    name: &'static str,
    author_id: i32,
}

static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor {
        id: 1,
        name: "J. K. Rowling",
    },
    SeedAuthor {
        id: 2,
        name: "J. R. R. Tolkien",
    },
    SeedAuthor {
        id: 3,
        name: "Brent Weeks",
    },
];

static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: 1,
        name: "Harry Potter and the Chamber of Secrets",
        author_id: 1,
    },
    SeedBook {
        id: 2,
        name: "Harry Potter and the Prisoner of Azkaban",
        author_id: 1,
    },
    SeedBook {
        id: 3,
        name: "Harry Potter and the Goblet of Fire",
        author_id: 1,
    },
    SeedBook {
        id: 4,
        name: "The Fellowship of the Ring",
        author_id: 2,
    },
    SeedBook {
        id: 5,
        name: "The Two Towers",
        author_id: 2,
    },
    SeedBook {
        id: 6,
        name: "The Return of the King",
        author_id: 2,
    },
    SeedBook {
        id: 7,
        name: "The Way of Shadows",
        author_id: 3,
    },
    SeedBook {
        id: 8,
        name: "Beyond the Shadows",
        author_id: 3,
    },
];

#[derive(Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// The in-memory authors and books.
///
/// Cloning the store hands out another handle to the same collections. Both
/// collections sit behind one lock, so an id derived from the current length
/// is always assigned and appended under the same write guard.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            inner: Default::default(),
        }
    }

    /// A store holding the sample library: three authors and eight books.
    pub fn seeded() -> Self {
        let authors = SEED_AUTHORS
            .iter()
            .map(|a| Author {
                id: a.id,
                name: a.name.into(),
            })
            .collect();
        let books = SEED_BOOKS
            .iter()
            .map(|b| Book {
                id: b.id,
                name: b.name.into(),
                author_id: b.author_id,
            })
            .collect();

        Self {
            inner: Arc::new(RwLock::new(Collections { authors, books })),
        }
    }

    // Every write is a single push, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// All books written by `author_id`, in the order they were added.
    pub fn books_by(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.read().authors.iter().find(|a| a.id == id).cloned()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// Appends a book with the next id. `author_id` is not checked against
    /// the known authors.
    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book> {
        let mut inner = self.write();
        let book = Book {
            id: next_id("book", inner.books.len())?,
            name,
            author_id,
        };
        inner.books.push(book.clone());
        Ok(book)
    }

    pub fn add_author(&self, name: String) -> Result<Author> {
        let mut inner = self.write();
        let author = Author {
            id: next_id("author", inner.authors.len())?,
            name,
        };
        inner.authors.push(author.clone());
        Ok(author)
    }
}

/// One past `len`, as long as that still fits a GraphQL `Int`.
fn next_id(kind: &'static str, len: usize) -> Result<i32> {
    i32::try_from(len)
        .ok()
        .and_then(|len| len.checked_add(1))
        .ok_or(Error::IdsExhausted(kind))
}
