//! Keypair generation, loading and persistence for DoubleZero accounts.
//!
//! Keypair files are JSON arrays of byte values. Two layouts are accepted
//! when loading:
//! - 32 bytes: the raw ed25519 secret seed
//! - 64 bytes: the secret seed followed by its public key, as written by
//!   [`save_keypair_to_file`] and `solana-keygen`
//!
//! # Example
//!
//! ```ignore
//! use doublezero_keypair::{generate_keypair, load_keypair_from_file, save_keypair_to_file, JsonFormat};
//!
//! let generated = generate_keypair()?;
//! save_keypair_to_file(&generated.to_bytes(), "keypair.json", JsonFormat::Pretty)?;
//!
//! let loaded = load_keypair_from_file("keypair.json")?;
//! assert_eq!(loaded.encoded_secret, generated.encoded_secret);
//! ```

mod config;
mod error;
mod generator;
mod loader;
mod material;
mod persister;

pub use config::{read_keygen_config, KeygenConfig, DEFAULT_OUTFILE, ENV_CONFIG_FILE};
pub use error::KeypairError;
pub use generator::{generate_keypair, generate_keypair_with};
pub use loader::{keypair_from_bytes, load_keypair_from_file, parse_keypair_json};
pub use material::{encode_secret, KeypairMaterial, SECRET_KEY_LENGTH};
pub use persister::{save_keypair_to_file, JsonFormat};

#[cfg(test)]
#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
