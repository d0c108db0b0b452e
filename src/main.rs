use std::net::SocketAddr;

use clap::Parser;

use config::Config;
use datamodel::Store;
use error::{Error, Result};
use server::{GRAPHQL_PATH, build_schema, make_app};

mod config;
mod datamodel;
mod error;
mod logging;
mod server;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    let schema = build_schema(Store::seeded());

    if config.print_schema {
        print!("{}", schema.sdl());
        return Ok(());
    }

    logging::init(config.verbose);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    tracing::info!("GraphQL endpoint: http://{addr}{GRAPHQL_PATH}");
    if !config.no_graphiql {
        tracing::info!("GraphiQL console: http://{addr}/");
    }

    let app = make_app(schema, !config.no_graphiql);
    axum::serve(listener, app).await.map_err(Error::Serve)
}
