// server/src/cli/mod.rs

// Declares the modules of the interactive clinic shell and re-exports the
// pieces the binary and the tests reach for.

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod input;
pub mod interactive;

pub use cli::{init_logging, resolve_config, start_cli};
pub use commands::{CliArgs, MenuChoice};
pub use config::{load_cli_config, parse_cli_config, CliConfig, LoggingConfig, ShellConfig};
pub use input::{InputClosed, LineReader};
pub use interactive::{SessionState, Shell};
