use std::str::FromStr;

use crate::crc32::Crc32;
use crate::error::{Error, Result};
use crate::md::{Compressor, Digest};
use crate::{sha1, sha256, sha384};

/// Engine is the object-safe face shared by all digest engines, for
/// callers that pick an algorithm at runtime. Each instance owns its
/// state; distinct instances may run on distinct threads.
pub trait Engine {
    /// Absorbs a chunk of input. Chunk boundaries never affect the digest.
    fn update(&mut self, p: &[u8]) -> Result<()>;
    /// Terminal: renders the digest as lowercase hex.
    fn finalize_hex(&mut self) -> Result<String>;
    /// Restores the initial constants, making the engine reusable.
    fn reset(&mut self);
    /// Digest length in bytes.
    fn size(&self) -> usize;
    /// Input block length in bytes (1 for the byte-at-a-time CRC).
    fn block_size(&self) -> usize;
}

impl<C: Compressor> Engine for Digest<C> {
    fn update(&mut self, p: &[u8]) -> Result<()> {
        Digest::update(self, p)
    }

    fn finalize_hex(&mut self) -> Result<String> {
        Digest::finalize_hex(self)
    }

    fn reset(&mut self) {
        Digest::reset(self)
    }

    fn size(&self) -> usize {
        Digest::size(self)
    }

    fn block_size(&self) -> usize {
        Digest::block_size(self)
    }
}

impl Engine for Crc32 {
    fn update(&mut self, p: &[u8]) -> Result<()> {
        Crc32::update(self, p)
    }

    fn finalize_hex(&mut self) -> Result<String> {
        Crc32::finalize_hex(self)
    }

    fn reset(&mut self) {
        Crc32::reset(self)
    }

    fn size(&self) -> usize {
        4
    }

    fn block_size(&self) -> usize {
        1
    }
}

/// Algorithm names the digest engines this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Reflected IEEE 802.3 CRC-32.
    Crc32,
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Crc32,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
    ];

    /// name returns the conventional display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Crc32 => "CRC-32",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
        }
    }

    /// engine returns a fresh engine for this algorithm.
    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Algorithm::Crc32 => Box::new(Crc32::new()),
            Algorithm::Sha1 => Box::new(sha1::new()),
            Algorithm::Sha256 => Box::new(sha256::new()),
            Algorithm::Sha384 => Box::new(sha384::new()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    // Accepts the display names and common spellings: "SHA-256", "sha256",
    // "Sha_256" all resolve to the same engine.
    fn from_str(s: &str) -> Result<Algorithm> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "crc32" => Ok(Algorithm::Crc32),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
