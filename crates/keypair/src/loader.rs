use serde_json::Value;
use solana_sdk::signer::Signer;
use std::{fs, io::ErrorKind, path::Path};

use crate::{
    error::KeypairError,
    material::{KeypairMaterial, KEYPAIR_LENGTH, SECRET_KEY_LENGTH},
};

/// Parse a JSON array of byte values into raw bytes.
fn parse_byte_array(json_str: &str, origin: &str) -> Result<Vec<u8>, KeypairError> {
    let malformed = |message: String| KeypairError::MalformedInput {
        origin: origin.to_string(),
        message,
    };

    let value: Value = serde_json::from_str(json_str).map_err(|e| malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(malformed(
            "expected keypair file to contain an array of bytes".to_string(),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_u64()
                .and_then(|b| u8::try_from(b).ok())
                .ok_or_else(|| malformed(format!("element {i} is not a byte value: {item}")))
        })
        .collect()
}

/// Reconstruct a keypair from a 32-byte secret seed or a 64-byte keypair.
///
/// A 64-byte input must carry the public key derived from its first 32 bytes.
pub fn keypair_from_bytes(bytes: &[u8], origin: &str) -> Result<KeypairMaterial, KeypairError> {
    log::info!("Loaded seed bytes length: {}", bytes.len());

    if bytes.len() != SECRET_KEY_LENGTH && bytes.len() != KEYPAIR_LENGTH {
        return Err(KeypairError::InvalidSecretLength {
            origin: origin.to_string(),
            len: bytes.len(),
        });
    }

    let mut secret = [0u8; SECRET_KEY_LENGTH];
    secret.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
    let material = KeypairMaterial::from_secret(secret);

    if bytes.len() == KEYPAIR_LENGTH && bytes[SECRET_KEY_LENGTH..] != material.pubkey().to_bytes() {
        return Err(KeypairError::InvalidSecret {
            origin: origin.to_string(),
            expected: material.pubkey().to_string(),
            found: bs58::encode(&bytes[SECRET_KEY_LENGTH..]).into_string(),
        });
    }

    Ok(material)
}

/// Parse keypair from JSON string
pub fn parse_keypair_json(json_str: &str, origin: &str) -> Result<KeypairMaterial, KeypairError> {
    let bytes = parse_byte_array(json_str, origin)?;
    keypair_from_bytes(&bytes, origin)
}

/// Load a keypair from a JSON seed file.
pub fn load_keypair_from_file<P: AsRef<Path>>(path: P) -> Result<KeypairMaterial, KeypairError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => KeypairError::FileNotFound {
            path: display.clone(),
        },
        _ => KeypairError::FileRead {
            path: display.clone(),
            message: e.to_string(),
        },
    })?;

    parse_keypair_json(&content, &display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;
    use std::{io::Write, path::PathBuf};
    use tempfile::TempDir;

    fn sequential_seed() -> Vec<u8> {
        (1..=32).collect()
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_keypair_json_full_keypair() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();

        let parsed = parse_keypair_json(&json, "test").unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
        assert_eq!(parsed.to_bytes(), keypair.to_bytes());
    }

    #[test]
    fn test_parse_keypair_json_sequential_seed_is_deterministic() {
        let json = serde_json::to_string(&sequential_seed()).unwrap();

        let first = parse_keypair_json(&json, "test").unwrap();
        let second = parse_keypair_json(&json, "test").unwrap();

        assert_eq!(first.pubkey(), second.pubkey());
        assert_eq!(first.encoded_secret, second.encoded_secret);
        assert_eq!(
            first.encoded_secret,
            bs58::encode(sequential_seed()).into_string()
        );
    }

    #[test]
    fn test_parse_keypair_json_seed_matches_full_keypair() {
        let seed = parse_keypair_json(&serde_json::to_string(&sequential_seed()).unwrap(), "seed")
            .unwrap();
        let full =
            parse_keypair_json(&serde_json::to_string(&seed.to_bytes().to_vec()).unwrap(), "full")
                .unwrap();

        assert_eq!(seed.pubkey(), full.pubkey());
        assert_eq!(seed.encoded_secret, full.encoded_secret);
    }

    #[test]
    fn test_parse_keypair_json_invalid() {
        let result = parse_keypair_json("not json", "test");
        assert!(matches!(result, Err(KeypairError::MalformedInput { .. })));
    }

    #[test]
    fn test_parse_keypair_json_object() {
        let result = parse_keypair_json(r#"{"secret": [1, 2, 3]}"#, "test");
        assert!(matches!(result, Err(KeypairError::MalformedInput { .. })));
    }

    #[test]
    fn test_parse_keypair_json_out_of_range_element() {
        let mut seed: Vec<u64> = (1..=32).collect();
        seed[4] = 256;
        let result = parse_keypair_json(&serde_json::to_string(&seed).unwrap(), "test");
        assert!(matches!(result, Err(KeypairError::MalformedInput { .. })));

        let result = parse_keypair_json(r#"[1, "2", 3]"#, "test");
        assert!(matches!(result, Err(KeypairError::MalformedInput { .. })));
    }

    #[test]
    fn test_parse_keypair_json_wrong_length() {
        for len in [0usize, 31, 33, 63, 65] {
            let bytes = vec![1u8; len];
            let result = parse_keypair_json(&serde_json::to_string(&bytes).unwrap(), "test");
            match result {
                Err(KeypairError::InvalidSecretLength { len: found, .. }) => assert_eq!(found, len),
                other => panic!("expected InvalidSecretLength for {len}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_keypair_json_mismatched_public_key() {
        let mut bytes = Keypair::new().to_bytes().to_vec();
        bytes[32..].copy_from_slice(&Keypair::new().pubkey().to_bytes());

        let result = parse_keypair_json(&serde_json::to_string(&bytes).unwrap(), "test");
        assert!(matches!(result, Err(KeypairError::InvalidSecret { .. })));
    }

    #[test]
    fn test_load_keypair_from_file() {
        let tmp = TempDir::new().unwrap();
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let path = write_file(&tmp, "id.json", &json);

        let loaded = load_keypair_from_file(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_keypair_from_file_not_found() {
        let result = load_keypair_from_file("/nonexistent/path/keypair.json");
        match result {
            Err(KeypairError::FileNotFound { path }) => {
                assert_eq!(path, "/nonexistent/path/keypair.json")
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_keypair_from_file_is_directory() {
        let tmp = TempDir::new().unwrap();
        let result = load_keypair_from_file(tmp.path());
        assert!(matches!(result, Err(KeypairError::FileRead { .. })));
    }

    #[test]
    fn test_load_keypair_from_file_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "bad.json", "[1, 2, 3");

        let result = load_keypair_from_file(&path);
        match result {
            Err(KeypairError::MalformedInput { origin, .. }) => {
                assert_eq!(origin, path.display().to_string())
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }
}
