//! madds - command-line tools for the MADDS taxonomy

pub mod commands;
pub mod config;
