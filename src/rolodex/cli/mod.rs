mod commands;
mod render;
mod repl;
mod setup;

pub use commands::run;
