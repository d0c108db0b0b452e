use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::datamodel::Store;

mod schema;

pub use schema::{MutationRoot, QueryRoot};

pub const GRAPHQL_PATH: &str = "/graphql";

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Assembles the root query and mutation into one schema resolving against `store`.
pub fn build_schema(store: Store) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[axum::debug_handler]
async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Mounts `schema` on [`GRAPHQL_PATH`] for both `GET` and `POST`, with the
/// GraphiQL console at `/` when `with_graphiql` is set.
pub fn make_app(schema: LibrarySchema, with_graphiql: bool) -> Router {
    let mut router =
        Router::new().route(GRAPHQL_PATH, get(graphql_handler).post(graphql_handler));
    if with_graphiql {
        router = router.route("/", get(graphiql));
    }

    router.layer(TraceLayer::new_for_http()).with_state(schema)
}
