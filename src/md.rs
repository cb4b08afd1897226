use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

/// Compressor is the per-block transform of a Merkle–Damgård hash. The
/// implementor owns the state vector carried from block N to block N+1.
pub trait Compressor {
    /// Size in bytes of one input block.
    const BLOCK_SIZE: usize;
    /// Width in bytes of the big-endian bit-length field that closes the
    /// final block (8 for the 32-bit family, 16 for SHA-384).
    const LENGTH_BYTES: usize;
    /// Size in bytes of the rendered digest.
    const DIGEST_SIZE: usize;

    /// Runs the compression function over one full block.
    /// `block` is exactly `BLOCK_SIZE` bytes.
    fn compress(&mut self, block: &[u8]);
    /// Serializes the state words big-endian, in state order, into `out`
    /// (`DIGEST_SIZE` bytes).
    fn output(&self, out: &mut [u8]);
    /// Restores the initial state constants.
    fn reset(&mut self);
}

// The buffering strategy follows crypto/sha256 in the Go standard library:
// top up a partial block first, compress full blocks straight from the
// caller's slice, stash the tail.
/// Digest is a streaming Merkle–Damgård engine over any [`Compressor`]. It
/// buffers a partial block between `update` calls, so the final digest is
/// independent of how the input was split into chunks.
pub struct Digest<C: Compressor> {
    c: C,
    x: Vec<u8>, // data written since last compression, len == BLOCK_SIZE
    nx: usize,  // number of buffered bytes in x, always < BLOCK_SIZE
    len: u64,   // total number of input bytes written overall
    finalized: bool,
}

impl<C: Compressor> Digest<C> {
    /// new returns an engine seeded with the algorithm's initial constants.
    pub fn new(c: C) -> Digest<C> {
        Digest {
            c,
            x: vec![0; C::BLOCK_SIZE],
            nx: 0,
            len: 0,
            finalized: false,
        }
    }

    /// size returns the digest length in bytes.
    pub fn size(&self) -> usize {
        C::DIGEST_SIZE
    }

    /// block_size returns the input block length in bytes.
    pub fn block_size(&self) -> usize {
        C::BLOCK_SIZE
    }

    /// update absorbs `p`, which may be empty and may be split at any
    /// boundary relative to previous calls. Fails once the engine is
    /// finalized or the byte counter would overflow its length field.
    pub fn update(&mut self, p: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        self.write(p)
    }

    fn write(&mut self, mut p: &[u8]) -> Result<()> {
        // An 8-byte length field stores a bit count, so the byte counter
        // must stay below 2^61. The 16-byte field is limited only by the
        // u64 counter itself.
        self.len = self
            .len
            .checked_add(p.len() as u64)
            .filter(|&n| C::LENGTH_BYTES > 8 || n < 1 << 61)
            .ok_or(Error::LengthOverflow {
                limit_bits: C::LENGTH_BYTES as u32 * 8,
            })?;

        if self.nx > 0 {
            // continue with the existing partial block
            let n = (C::BLOCK_SIZE - self.nx).min(p.len());
            self.x[self.nx..self.nx + n].copy_from_slice(&p[..n]);
            self.nx += n;
            if self.nx == C::BLOCK_SIZE {
                self.c.compress(&self.x);
                self.nx = 0;
            }
            p = &p[n..];
        }

        // full blocks straight from the input
        while p.len() >= C::BLOCK_SIZE {
            self.c.compress(&p[..C::BLOCK_SIZE]);
            p = &p[C::BLOCK_SIZE..];
        }

        if !p.is_empty() {
            self.x[..p.len()].copy_from_slice(p);
            self.nx = p.len();
        }
        Ok(())
    }

    /// finalize pads the message, runs the last one or two compressions
    /// and returns the digest bytes. The engine is terminal afterwards
    /// until `reset`.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        let bit_len = (self.len as u128) << 3;

        // Padding: a 0x80 marker, then zeros until the buffered length is
        // BLOCK_SIZE - LENGTH_BYTES (mod BLOCK_SIZE). If fewer than
        // LENGTH_BYTES + 1 bytes are free in the current block, the length
        // spills into a second all-zero block.
        let b = C::BLOCK_SIZE as u64;
        let p = (C::BLOCK_SIZE - C::LENGTH_BYTES) as u64;
        let rem = self.len % b;
        let n = if rem < p { p - rem } else { b + p - rem };

        let mut pad = vec![0u8; C::BLOCK_SIZE];
        pad[0] = 0x80;
        self.write(&pad[..n as usize])?;

        // Length in bits, big-endian. The slice keeps the low LENGTH_BYTES
        // of the 128-bit encoding; the high half is always zero for a
        // 64-bit byte counter.
        let mut len_field = [0u8; 16];
        BigEndian::write_u128(&mut len_field, bit_len);
        self.write(&len_field[16 - C::LENGTH_BYTES..])?;

        debug_assert_eq!(self.nx, 0, "padding must close the final block");

        self.finalized = true;
        let mut out = vec![0; C::DIGEST_SIZE];
        self.c.output(&mut out);
        Ok(out)
    }

    /// finalize_hex renders the digest as lowercase hex, most-significant
    /// nibble first.
    pub fn finalize_hex(&mut self) -> Result<String> {
        Ok(hex::encode(self.finalize()?))
    }

    /// reset restores the initial constants and zeroes the buffer and byte
    /// counter, making the engine reusable after `finalize`.
    pub fn reset(&mut self) {
        self.c.reset();
        self.nx = 0;
        self.len = 0;
        self.finalized = false;
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::sha256;

    #[test]
    fn empty_updates_are_noops() {
        let mut h = sha256::new();
        h.update(&[]).unwrap();
        h.update(b"abc").unwrap();
        h.update(&[]).unwrap();
        assert_eq!(
            h.finalize_hex().unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn update_after_finalize_is_rejected() {
        let mut h = sha256::new();
        h.update(b"abc").unwrap();
        h.finalize().unwrap();
        assert!(matches!(h.update(b"more"), Err(Error::Finalized)));
        assert!(matches!(h.finalize(), Err(Error::Finalized)));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut h = sha256::new();
        h.update(b"some earlier input").unwrap();
        h.finalize().unwrap();

        h.reset();
        h.update(b"abc").unwrap();
        assert_eq!(
            h.finalize_hex().unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sizes() {
        let h = sha256::new();
        assert_eq!(h.size(), 32);
        assert_eq!(h.block_size(), 64);
    }
}
