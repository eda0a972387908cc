use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{error::KeypairError, persister::JsonFormat};

/// Environment variable overriding the location of the keygen config file.
pub const ENV_CONFIG_FILE: &str = "DOUBLEZERO_KEYGEN_CONFIG_FILE";

/// Filename used when a keypair is saved without an explicit destination.
pub const DEFAULT_OUTFILE: &str = "keypair.json";

/// The default path to the keygen configuration file.
///
/// > `~/.config/doublezero/keygen/config.yml`
///
/// It will only be `None` if it is unable to identify the user's home
/// directory, which should not happen under typical OS environments.
fn get_cfg_filename() -> Option<PathBuf> {
    match env::var_os(ENV_CONFIG_FILE) {
        Some(path) => Some(PathBuf::from(path)),
        None => directories_next::UserDirs::new().map(|dirs| {
            let mut buf = dirs.home_dir().to_path_buf();
            buf.extend([".config", "doublezero", "keygen", "config.yml"]);
            buf
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeygenConfig {
    #[serde(default = "default_outfile")]
    pub default_outfile: PathBuf,
    #[serde(default)]
    pub json_format: JsonFormat,
}

fn default_outfile() -> PathBuf {
    PathBuf::from(DEFAULT_OUTFILE)
}

impl Default for KeygenConfig {
    fn default() -> Self {
        KeygenConfig {
            default_outfile: default_outfile(),
            json_format: JsonFormat::default(),
        }
    }
}

/// Read the keygen config, falling back to defaults when the file is absent.
///
/// `path_override` takes precedence over `DOUBLEZERO_KEYGEN_CONFIG_FILE`,
/// which takes precedence over the default location.
pub fn read_keygen_config(
    path_override: Option<&Path>,
) -> Result<(Option<PathBuf>, KeygenConfig), KeypairError> {
    let filename = match path_override {
        Some(path) => Some(path.to_path_buf()),
        None => get_cfg_filename(),
    };

    let Some(filename) = filename else {
        log::warn!("Unable to locate home directory, using default keygen config");
        return Ok((None, KeygenConfig::default()));
    };

    match fs::read_to_string(&filename) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No keygen config at {}, using defaults", filename.display());
            Ok((Some(filename), KeygenConfig::default()))
        }
        Err(e) => Err(KeypairError::Config {
            path: filename.display().to_string(),
            message: e.to_string(),
        }),
        Ok(content) => {
            let config: KeygenConfig =
                serde_yaml::from_str(&content).map_err(|e| KeypairError::Config {
                    path: filename.display().to_string(),
                    message: e.to_string(),
                })?;
            Ok((Some(filename), config))
        }
    }
}
