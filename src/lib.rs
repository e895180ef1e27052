// Library for tests to access modules

pub mod cli;
pub mod collectors;
pub mod config;
pub mod export;
pub mod history;
pub mod models;
pub mod monitor;
pub mod provider;
pub mod report;
pub mod version;
