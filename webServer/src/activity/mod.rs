pub mod aggregator;
pub mod cache;
