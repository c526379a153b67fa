//! Content Hash and Integrity Value Objects
//!
//! `ContentHash` is the SHA-256 digest of an asset's final bytes. It drives
//! both the fingerprint token embedded in filenames and the default
//! subresource-integrity string written to the manifest.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Content hash value object
///
/// Wraps a raw SHA-256 digest. Displayed as `sha256:<hex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Prefix used by the display form
    pub const PREFIX: &'static str = "sha256:";

    /// Compute SHA-256 of content
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        let mut raw = [0u8; 32];
        raw.copy_from_slice(&digest);
        Self(raw)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form (64 chars)
    pub fn hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First `len` hex chars, used as the filename token
    pub fn token(&self, len: usize) -> String {
        let mut hex = self.hex();
        hex.truncate(len);
        hex
    }

    /// SRI string for this digest (`sha256-<base64>`)
    pub fn integrity(&self) -> Integrity {
        Integrity::from_digest(IntegrityAlgorithm::Sha256, &self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.hex())
    }
}

/// Hash algorithms accepted in integrity strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl IntegrityAlgorithm {
    /// Name as it appears in an SRI string
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Parse an algorithm name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    fn digest(self, content: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(content).to_vec(),
            Self::Sha384 => Sha384::digest(content).to_vec(),
            Self::Sha512 => Sha512::digest(content).to_vec(),
        }
    }
}

impl fmt::Display for IntegrityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Subresource-integrity string: `<algorithm>-<base64 digest>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Integrity {
    algorithm: IntegrityAlgorithm,
    value: String,
}

/// Why an integrity string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityParseError {
    #[error("missing '-' separator in integrity string '{0}'")]
    MissingSeparator(String),

    #[error("unsupported integrity algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("invalid base64 digest in '{0}'")]
    InvalidDigest(String),
}

impl Integrity {
    /// Compute the integrity string of `content` with `algorithm`
    pub fn compute(algorithm: IntegrityAlgorithm, content: &[u8]) -> Self {
        Self::from_digest(algorithm, &algorithm.digest(content))
    }

    fn from_digest(algorithm: IntegrityAlgorithm, digest: &[u8]) -> Self {
        Self {
            algorithm,
            value: format!("{}-{}", algorithm.name(), STANDARD.encode(digest)),
        }
    }

    /// Parse and validate an integrity string
    pub fn parse(s: &str) -> Result<Self, IntegrityParseError> {
        let (name, encoded) = s
            .split_once('-')
            .ok_or_else(|| IntegrityParseError::MissingSeparator(s.to_string()))?;
        let algorithm = IntegrityAlgorithm::from_name(name)
            .ok_or_else(|| IntegrityParseError::UnsupportedAlgorithm(name.to_string()))?;

        // SRI allows `?options` after the digest; they carry no meaning here
        let encoded = encoded.split('?').next().unwrap_or(encoded);
        let digest = STANDARD
            .decode(encoded)
            .map_err(|_| IntegrityParseError::InvalidDigest(s.to_string()))?;
        if digest.len() != algorithm.digest_len() {
            return Err(IntegrityParseError::InvalidDigest(s.to_string()));
        }

        Ok(Self::from_digest(algorithm, &digest))
    }

    /// Algorithm of this integrity string
    pub fn algorithm(&self) -> IntegrityAlgorithm {
        self.algorithm
    }

    /// Full string form
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check whether `content` hashes to this integrity value
    pub fn matches(&self, content: &[u8]) -> bool {
        Self::compute(self.algorithm, content) == *self
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
