use std::fs;
use std::path::PathBuf;

use crate::Result;

/// `prog 5` becomes `prog_5.pid`.
pub fn pid_file_name(args: &[String]) -> String {
    format!("{}.pid", args.join("_"))
}

/// Writes the current process id for an external supervisor such as monit.
/// The file is left behind on exit.
pub fn write_pid_file(args: &[String]) -> Result<PathBuf> {
    let path = PathBuf::from(pid_file_name(args));
    fs::write(&path, std::process::id().to_string())?;

    Ok(path)
}
