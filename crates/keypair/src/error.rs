use thiserror::Error;

/// Error type for keypair generation, loading and persistence.
#[derive(Debug, Error)]
pub enum KeypairError {
    /// The keypair file does not exist
    #[error("Keypair file not found: {path}")]
    FileNotFound {
        /// Path that was attempted
        path: String,
    },

    /// The keypair file exists but could not be read
    #[error("Failed to read keypair file '{path}': {message}")]
    FileRead {
        /// Path that was attempted
        path: String,
        /// Error message
        message: String,
    },

    /// The content is not JSON, or not an array of byte values
    #[error("Invalid keypair JSON format from {origin}: {message}")]
    MalformedInput {
        /// Source description
        origin: String,
        /// Error message
        message: String,
    },

    /// The byte array has a length other than 32 or 64
    #[error("Invalid keypair bytes from {origin}: expected 32 or 64 bytes, got {len}")]
    InvalidSecretLength {
        /// Source description
        origin: String,
        /// Number of bytes found
        len: usize,
    },

    /// The public half of a 64-byte keypair does not match its secret half
    #[error("Invalid keypair bytes from {origin}: public key {found} does not match secret key (expected {expected})")]
    InvalidSecret {
        /// Source description
        origin: String,
        /// Public key derived from the secret half
        expected: String,
        /// Public key stored in the trailing 32 bytes
        found: String,
    },

    /// The system random source failed to produce entropy
    #[error("Failed to read from the system random source: {message}")]
    RandomSourceFailure {
        /// Error message
        message: String,
    },

    /// The keypair file could not be written
    #[error("Failed to write keypair file '{path}': {message}")]
    WriteFailure {
        /// Path that was attempted
        path: String,
        /// Error message
        message: String,
    },

    /// The keygen configuration file could not be read or written
    #[error("Invalid keygen config '{path}': {message}")]
    Config {
        /// Path of the configuration file
        path: String,
        /// Error message
        message: String,
    },
}
