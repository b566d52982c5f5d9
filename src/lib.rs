pub mod api;
pub mod client;
pub mod config;
pub mod directory;
pub mod dirs;
pub mod display;
pub mod filelock;
pub mod guard;
pub mod logs;
pub mod session;
pub mod storage;
pub mod table;
pub mod types;
pub mod validate;
