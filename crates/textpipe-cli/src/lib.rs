pub mod cli;
pub mod commands;
pub mod listing;
pub mod logging;
