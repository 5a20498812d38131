pub mod commands;
pub mod rate_command;
pub mod table;

pub use commands::Cli;
pub use rate_command::{RateCommandHandler, RateOptions, RunSummary};
pub use table::{Columns, DisplayRow, TableRenderer};
