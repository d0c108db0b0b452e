use cynic::{MutationBuilder as _, QueryBuilder as _};

use crate::client::{
    AddAuthor, AddBook, AllAuthors, AllBooks, AuthorById, AuthorRef, BookById, BookRef, ById,
    NewAuthor, NewBook,
};
use crate::datamodel::Store;
use crate::server::{build_schema, make_app};


use testserver::Server;

#[tokio::test]
async fn lists_seeded_books() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    let res = client.query(AllBooks::build(())).await;
    assert!(res.errors.is_none());
    let books = res.data.unwrap().books;

    assert_eq!(books.len(), 8);
    assert_eq!(books[0], BookRef { id: 1, author_id: 1 });
    assert_eq!(books[7], BookRef { id: 8, author_id: 3 });
}

#[tokio::test]
async fn book_resolves_its_author() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    let res = client.query(BookById::build(ById { id: Some(1) })).await;
    let book = res.data.unwrap().book.unwrap();

    assert_eq!(book.name, "Harry Potter and the Chamber of Secrets");
    assert_eq!(
        book.author,
        Some(AuthorRef {
            id: 1,
            name: "J. K. Rowling".into()
        })
    );
}

#[tokio::test]
async fn missing_book_is_null_without_errors() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    for id in [Some(999), None] {
        let res = client.query(BookById::build(ById { id })).await;
        assert!(res.errors.is_none());
        assert!(res.data.unwrap().book.is_none());
    }
}

#[tokio::test]
async fn author_lists_own_books() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    let res = client.query(AuthorById::build(ById { id: Some(3) })).await;
    let author = res.data.unwrap().author.unwrap();

    assert_eq!(author.name, "Brent Weeks");
    let books = author.books.unwrap();
    let ids: Vec<_> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids, [7, 8]);
    assert!(books.iter().all(|b| b.author_id == 3));
}

#[tokio::test]
async fn add_author_then_list() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    let res = client
        .query(AddAuthor::build(NewAuthor {
            name: "New Author".into(),
        }))
        .await;
    let author = res.data.unwrap().add_author;
    assert_eq!(author.id, 4);
    assert_eq!(author.name, "New Author");
    assert_eq!(author.books, Some(vec![]));

    let res = client.query(AllAuthors::build(())).await;
    assert_eq!(res.data.unwrap().authors.len(), 4);
}

#[tokio::test]
async fn add_book_appends_every_call() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    for expected_id in [9, 10] {
        let res = client
            .query(AddBook::build(NewBook {
                name: "The Hobbit".into(),
                author_id: 2,
            }))
            .await;
        let book = res.data.unwrap().add_book;
        assert_eq!(book.id, expected_id);
        assert_eq!(book.author.unwrap().name, "J. R. R. Tolkien");
    }

    let books = client.query(AllBooks::build(())).await.data.unwrap().books;
    assert_eq!(books.len(), 10);
    assert_eq!(books[9], BookRef { id: 10, author_id: 2 });
}

#[tokio::test]
async fn orphaned_book_has_no_author() {
    let server = Server::with_store(Store::seeded());
    let client = server.client();

    let res = client
        .query(AddBook::build(NewBook {
            name: "Nobody's".into(),
            author_id: 42,
        }))
        .await;
    assert!(res.errors.is_none());
    let book = res.data.unwrap().add_book;
    assert_eq!(book.id, 9);
    assert!(book.author.is_none());
}

#[tokio::test]
async fn servers_do_not_share_state() {
    let first = Server::with_store(Store::seeded());
    let second = Server::with_store(Store::seeded());

    first
        .client()
        .query(AddAuthor::build(NewAuthor {
            name: "Only here".into(),
        }))
        .await;

    let authors = second.client().query(AllAuthors::build(())).await;
    assert_eq!(authors.data.unwrap().authors.len(), 3);
}

#[tokio::test]
async fn get_requests_execute_queries() {
    let server = Server::with_store(Store::seeded());

    let mut url = server.url("/graphql");
    url.query_pairs_mut()
        .append_pair("query", "{ author(id: 2) { name } }");
    let body: serde_json::Value = reqwest::get(url).await.unwrap().json().await.unwrap();

    assert_eq!(body["data"]["author"]["name"], "J. R. R. Tolkien");
}

#[tokio::test]
async fn graphiql_console_can_be_disabled() {
    let with_console = Server::with_store(Store::seeded());
    let res = reqwest::get(with_console.url("/")).await.unwrap();
    assert!(res.status().is_success());
    assert!(res.text().await.unwrap().contains("graphiql"));

    let without_console = Server::with_router(make_app(build_schema(Store::seeded()), false));
    let res = reqwest::get(without_console.url("/")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}
