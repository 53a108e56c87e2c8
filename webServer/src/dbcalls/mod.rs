pub mod authors;
pub mod throughput;
