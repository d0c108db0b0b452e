use std::net::IpAddr;

use clap::Parser;

/// Serve an in-memory library of authors and books over GraphQL.
#[derive(Parser, Debug)]
#[command(name = "library", version)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "LIBRARY_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "LIBRARY_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Do not serve the GraphiQL console at `/`
    #[arg(long, env = "LIBRARY_NO_GRAPHIQL")]
    pub no_graphiql: bool,

    /// Print the schema in SDL and exit
    #[arg(long)]
    pub print_schema: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}
