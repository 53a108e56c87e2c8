pub mod channel_activity;
pub mod channel_table;
pub mod error_page;
pub mod layout;
