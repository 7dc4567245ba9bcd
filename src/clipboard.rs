use std::io::Write;
use std::process::{Command, Stdio};

use tracing::warn;

/// Platform clipboard utilities, tried in order.
const BACKENDS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];

/// Copies `text` to the clipboard through the first working backend.
///
/// Returns `false` after printing guidance if no backend is available;
/// clipboard failure never aborts the run.
pub fn copy(text: &str) -> bool {
    for (name, args) in BACKENDS {
        match pipe_to(name, args, text) {
            Ok(true) => {
                eprintln!("First secret copied to clipboard using {name}.");
                return true;
            }
            Ok(false) => warn!("{name} found but the copy failed"),
            Err(_) => continue, // backend not installed
        }
    }

    eprintln!(
        "Warning: clipboard copy unavailable. Typical causes:\n\
         - no clipboard utility installed (install xclip, xsel, or wl-clipboard),\n\
         - no X/Wayland display available (headless sessions have no clipboard).\n\
         Skip --copy and capture stdout instead (redirect or pipe)."
    );
    false
}

fn pipe_to(name: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(name)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(stdin) = child.stdin.take() {
        let mut stdin = stdin;
        stdin.write_all(text.as_bytes())?;
    }

    Ok(child.wait()?.success())
}
