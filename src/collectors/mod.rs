pub mod errors;
pub mod gateway;
pub mod parser;
pub mod records;
pub mod remove_list;
pub mod sources;

pub use errors::{GatewayError, ParseError, QueryError, RecordError};
pub use gateway::{CommandGateway, ShellGateway, query_rows};
pub use parser::{Row, parse_rows};
pub use records::InterfaceTable;
pub use remove_list::RemoveList;
pub use sources::DataSource;
