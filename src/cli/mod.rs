mod cli;
mod commands;

pub use cli::Cli;
