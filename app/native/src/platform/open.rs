//! Opening files with the platform's default application.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opener program and its leading arguments.
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Opens `path` with the default application without waiting for it to exit.
///
/// # Errors
///
/// Returns an error if the opener program cannot be started.
pub fn open_path(path: &Path) -> io::Result<()> {
    let (program, args) = OPENER;

    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}
