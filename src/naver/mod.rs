//! Naver Shopping API client, upstream models and response normalization.

pub mod client;
pub mod models;
pub mod normalizer;

pub use client::{NaverClient, ShopSearch, MAX_DISPLAY};
pub use models::{NormalizedItem, PriceRange, RawItem, SearchResult, ShopResponse};
