//! Error kinds for the benchmark pipeline.
//!
//! No error is retried anywhere: retries would distort the latencies the
//! benchmark exists to measure. Everything propagates to the binary entry
//! point and aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Opening the database file or creating the schema failed.
    #[error("storage initialization failed")]
    StorageInit(#[source] rusqlite::Error),

    /// A generated token collided with one already inserted in the same
    /// population run. Fatal: skipping it would leave the store with fewer
    /// rows than requested.
    #[error("duplicate token generated during population: {token}")]
    DuplicateToken {
        token: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The benchmark was invoked against an empty corpus.
    #[error("corpus is empty; populate the store before benchmarking")]
    EmptyCorpus,

    /// A query against the persistent store failed.
    #[error("store query failed")]
    Query(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
