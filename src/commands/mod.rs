//! Request handling shared by the HTTP server and the CLI.

pub mod search;

pub use search::{SearchCommand, SearchRequest, ValidatedSearch};
