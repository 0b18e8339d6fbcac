//! System clipboard access through the platform's clipboard commands.

use crate::error::{EnvinfoError, Result};
use crate::host::Platform;
use crate::shell::{display_command, CommandRunner};

/// A clipboard program and its arguments.
pub type ClipboardCommand = (&'static str, &'static [&'static str]);

const MACOS_COMMANDS: &[ClipboardCommand] = &[("pbcopy", &[])];

const LINUX_COMMANDS: &[ClipboardCommand] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

const WINDOWS_COMMANDS: &[ClipboardCommand] = &[("clip", &[])];

/// Clipboard commands to try, in order, for a platform.
pub fn clipboard_commands(platform: Platform) -> &'static [ClipboardCommand] {
    match platform {
        Platform::MacOS => MACOS_COMMANDS,
        Platform::Linux => LINUX_COMMANDS,
        Platform::Windows => WINDOWS_COMMANDS,
        Platform::Other => &[],
    }
}

/// Put `text` on the system clipboard.
///
/// Tries each clipboard command for the platform until one accepts the text.
pub fn copy_to_clipboard(runner: &dyn CommandRunner, platform: Platform, text: &str) -> Result<()> {
    let mut last_error = None;

    for (program, args) in clipboard_commands(platform) {
        match runner.run_with_input(program, args, text) {
            Ok(()) => {
                tracing::debug!("Copied report with {}", display_command(program, args));
                return Ok(());
            }
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    Err(EnvinfoError::Clipboard {
        message: last_error.unwrap_or_else(|| format!("no clipboard command for {:?}", platform)),
    })
}
