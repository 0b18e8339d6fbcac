//! Shell command execution and PATH lookup.

pub mod command;
pub mod path;

pub use command::{display_command, CommandRunner, SystemRunner};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
