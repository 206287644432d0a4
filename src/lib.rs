pub mod activity;
pub mod cli;
pub mod formatters;
pub mod github;
pub mod types;
