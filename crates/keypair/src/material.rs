use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::fmt;

/// Length of an ed25519 secret seed.
pub const SECRET_KEY_LENGTH: usize = 32;
/// Length of a full keypair: secret seed followed by public key.
pub const KEYPAIR_LENGTH: usize = 64;

/// A keypair together with the encodings derived from it.
pub struct KeypairMaterial {
    /// The keypair itself
    pub keypair: Keypair,
    /// Base58 encoding of the 32-byte secret seed
    pub encoded_secret: String,
}

impl KeypairMaterial {
    /// Derive a keypair from a 32-byte secret seed.
    pub fn from_secret(secret: [u8; SECRET_KEY_LENGTH]) -> Self {
        let encoded_secret = encode_secret(&secret);
        Self {
            keypair: Keypair::new_from_array(secret),
            encoded_secret,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// The 64-byte layout written to keypair files.
    pub fn to_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        self.keypair.to_bytes()
    }
}

// Keep the secret out of debug output.
impl fmt::Debug for KeypairMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairMaterial")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}

/// Base58 text of a secret seed.
pub fn encode_secret(secret: &[u8]) -> String {
    bs58::encode(secret).into_string()
}
