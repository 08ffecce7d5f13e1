pub mod board;
pub mod config;
pub mod data_storage;
pub mod discussion;
pub mod formatter;
pub mod messages;
pub mod store;
pub mod task;
pub mod view;
