pub mod author;
pub mod directory_channel;
pub mod throughput;
