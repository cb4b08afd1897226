use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Reflected IEEE 802.3 polynomial.
const POLY: u32 = 0xEDB8_8320;

// Built on first use, immutable afterwards, shared by every engine
// instance in the process.
static TABLE: Lazy<[u32; 256]> = Lazy::new(|| {
    let mut table = [0u32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut crc = i as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
        }
        *entry = crc;
    }
    table
});

/// Crc32 is a streaming CRC-32 engine. Unlike the Merkle–Damgård engines
/// it consumes input byte at a time, so there is no block buffer and no
/// padding step; `finalize` is still terminal by contract.
pub struct Crc32 {
    register: u32,
    finalized: bool,
}

impl Crc32 {
    /// new returns an engine with the register seeded to 0xFFFFFFFF.
    pub fn new() -> Crc32 {
        Crc32 {
            register: 0xFFFF_FFFF,
            finalized: false,
        }
    }

    /// update absorbs `p` through the lookup table.
    pub fn update(&mut self, p: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        for &b in p {
            let idx = ((self.register ^ b as u32) & 0xFF) as usize;
            self.register = (self.register >> 8) ^ TABLE[idx];
        }
        Ok(())
    }

    /// finalize returns the checksum, the register XORed with 0xFFFFFFFF.
    pub fn finalize(&mut self) -> Result<u32> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        self.finalized = true;
        Ok(self.register ^ 0xFFFF_FFFF)
    }

    /// finalize_hex renders the checksum as 8 lowercase hex digits,
    /// most-significant byte first.
    pub fn finalize_hex(&mut self) -> Result<String> {
        Ok(hex::encode(self.finalize()?.to_be_bytes()))
    }

    /// reset restores the seed value, making the engine reusable.
    pub fn reset(&mut self) {
        self.register = 0xFFFF_FFFF;
        self.finalized = false;
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}
