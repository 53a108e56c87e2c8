pub mod channel_directory;
