//! Error types for querying and decoding switch data
//!
//! Each failure class maps to a different recovery policy in the rate command:
//! gateway and parse failures are fatal for mandatory data sources and degrade
//! to "no data" for optional ones, record failures only drop a single row.

use thiserror::Error;

use crate::collectors::sources::DataSource;

/// A query could not be executed by the command gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway program could not be started
    #[error("failed to launch `{program}`: {io}")]
    Spawn {
        program: String,
        #[source]
        io: std::io::Error,
    },

    /// The gateway ran but reported a failure
    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Raw output was not in the structured form expected for a data source
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{data_source} returned no output")]
    Empty { data_source: DataSource },

    #[error("{data_source} returned malformed XML: {message}")]
    Malformed {
        data_source: DataSource,
        message: String,
    },

    #[error("{data_source} output contains no {row_type} rows")]
    MissingRowType {
        data_source: DataSource,
        row_type: &'static str,
    },
}

/// Failure to turn one parsed row into a typed record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{record}: missing field `{field}`")]
    MissingField { record: String, field: &'static str },

    #[error("{record}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("{record}: duplicate interface entry")]
    Duplicate { record: String },
}

/// Either half of a query (execute, then parse) failing
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl QueryError {
    /// True when the source answered but simply had no rows of its type
    pub fn is_missing_rows(&self) -> bool {
        matches!(self, QueryError::Parse(ParseError::MissingRowType { .. }))
    }
}
