use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),

    #[error("no {0} ids left in the Int range")]
    IdsExhausted(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
