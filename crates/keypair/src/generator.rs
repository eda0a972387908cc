use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{
    error::KeypairError,
    material::{KeypairMaterial, SECRET_KEY_LENGTH},
};

/// Generate a fresh keypair from the operating system's random source.
pub fn generate_keypair() -> Result<KeypairMaterial, KeypairError> {
    generate_keypair_with(&mut OsRng)
}

/// Generate a fresh keypair from the given random source.
pub fn generate_keypair_with<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<KeypairMaterial, KeypairError> {
    let mut secret = [0u8; SECRET_KEY_LENGTH];
    rng.try_fill_bytes(&mut secret)
        .map_err(|e| KeypairError::RandomSourceFailure {
            message: e.to_string(),
        })?;

    let material = KeypairMaterial::from_secret(secret);
    log::debug!("Generated keypair {}", material.pubkey());

    Ok(material)
}
