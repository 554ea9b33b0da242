//! lowprice - Lowest-price shopping search backend
//!
//! Forwards product queries to the Naver Shopping API, normalizes the items
//! and reports the cheapest offer and the price range.

pub mod commands;
pub mod config;
pub mod error;
pub mod naver;
pub mod server;

pub use commands::{SearchCommand, SearchRequest};
pub use config::Config;
pub use error::SearchError;
pub use naver::{NormalizedItem, PriceRange, SearchResult};
