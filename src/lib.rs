pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod money;
pub mod shutdown;
pub mod storage;
pub mod ui;
