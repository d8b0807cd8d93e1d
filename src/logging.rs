use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};

/// Sends `tracing` output to `path`, appending plain text lines.
///
/// The terminal belongs to the dashboard, so nothing is logged unless a file
/// is given.
pub fn init_file_logging(path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_dir_is_created() {
        let root = std::env::temp_dir().join(format!("hostwatch_log_test_{}", std::process::id()));
        let path = root.join("nested").join("hostwatch.log");
        ensure_parent_dir(&path).unwrap();
        assert!(root.join("nested").is_dir());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn bare_file_name_needs_no_dir() {
        ensure_parent_dir(Path::new("hostwatch.log")).unwrap();
    }
}
