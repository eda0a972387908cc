use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use crate::error::KeypairError;

/// Layout of the JSON array written to keypair files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonFormat {
    /// One byte per line, two-space indent
    #[default]
    Pretty,
    /// Single line, as written by `solana-keygen`
    Compact,
}

/// Write keypair bytes to `path` as a JSON array, replacing any existing file.
pub fn save_keypair_to_file<P: AsRef<Path>>(
    bytes: &[u8],
    path: P,
    format: JsonFormat,
) -> Result<(), KeypairError> {
    let path = path.as_ref();
    let write_failure = |message: String| KeypairError::WriteFailure {
        path: path.display().to_string(),
        message,
    };

    let data = bytes.to_vec();
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&data),
        JsonFormat::Compact => serde_json::to_string(&data),
    }
    .map_err(|e| write_failure(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| write_failure(e.to_string()))?;
        }
    }

    let mut file = create_owner_only(path).map_err(|e| write_failure(e.to_string()))?;
    file.write_all(json.as_bytes())
        .map_err(|e| write_failure(e.to_string()))?;

    log::debug!("Keypair saved to: {}", path.display());

    Ok(())
}

/// Open `path` for writing, truncated, readable only by the owner.
#[cfg(unix)]
fn create_owner_only(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .mode(0o600)
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;
    // mode() only applies on creation; an overwritten file keeps its old bits.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn create_owner_only(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
}
