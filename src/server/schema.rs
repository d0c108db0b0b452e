use async_graphql::{ComplexObject, Context, Object, SimpleObject};

use crate::datamodel::{self, Store};

trait StoreExt {
    fn store(&self) -> &Store;
}

impl StoreExt for Context<'_> {
    fn store(&self) -> &Store {
        // `build_schema` always registers the store.
        self.data_unchecked::<Store>()
    }
}

/// A book, linked to its author only through `authorId`
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Book {
    id: i32,
    name: String,
    author_id: i32,
}

impl From<datamodel::Book> for Book {
    fn from(book: datamodel::Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
        }
    }
}

#[ComplexObject]
impl Book {
    /// The author referenced by `authorId`, or null if there is none
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        let author = ctx.store().author(self.author_id);
        if author.is_none() {
            tracing::debug!(
                book = self.id,
                author_id = self.author_id,
                "book has no matching author"
            );
        }
        author.map(Into::into)
    }
}

/// A person who wrote one or more books
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

impl From<datamodel::Author> for Author {
    fn from(author: datamodel::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

#[ComplexObject]
impl Author {
    /// Every book whose `authorId` points at this author, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Book>> {
        let books = ctx.store().books_by(self.id);
        Some(books.into_iter().map(Into::into).collect())
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book by id
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        let book = id.and_then(|id| ctx.store().book(id));
        tracing::debug!(?id, found = book.is_some(), "looked up book");
        book.map(Into::into)
    }

    /// All books, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.store().books().into_iter().map(Into::into).collect()
    }

    /// A single author by id
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        let author = id.and_then(|id| ctx.store().author(id));
        tracing::debug!(?id, found = author.is_some(), "looked up author");
        author.map(Into::into)
    }

    /// All authors, in the order they were added
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        ctx.store().authors().into_iter().map(Into::into).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Append a new book; its id is one past the current number of books
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = ctx.store().add_book(name, author_id)?;
        tracing::info!(id = book.id, name = %book.name, author_id, "added book");
        Ok(book.into())
    }

    /// Append a new author; its id is one past the current number of authors
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Author> {
        let author = ctx.store().add_author(name)?;
        tracing::info!(id = author.id, name = %author.name, "added author");
        Ok(author.into())
    }
}
