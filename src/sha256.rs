use byteorder::{BigEndian, ByteOrder};
use digest::{
    block_buffer::Eager,
    core_api::{Buffer, BufferKindUser, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U32, U64},
    HashMarker, Output, OutputSizeUser, Reset,
};

use crate::md::{Compressor, Digest};

/// The size in bytes of a SHA-256 digest.
pub const DIGEST_SIZE: usize = 32;

/// Block size, in bytes, of the SHA-256 hash function.
pub const BLOCK_SIZE: usize = 64;

const IV: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

// FIPS 180-4 round constants.
#[rustfmt::skip]
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Sha256State carries H0..H7 between block compressions.
#[derive(Clone)]
pub struct Sha256State {
    h: [u32; 8],
}

impl Sha256State {
    fn new() -> Sha256State {
        Sha256State { h: IV }
    }

    fn compress_block(&mut self, block: &[u8]) {
        let mut w = [0u32; 64];
        for (i, word) in w[..16].iter_mut().enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..64 {
            let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
            let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;
        for i in 0..64 {
            let big_s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ (!e & g);
            let temp1 = h
                .wrapping_add(big_s1)
                .wrapping_add(ch)
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let big_s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let temp2 = big_s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        for (word, v) in self.h.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(v);
        }
    }
}

impl Compressor for Sha256State {
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const LENGTH_BYTES: usize = 8;
    const DIGEST_SIZE: usize = DIGEST_SIZE;

    fn compress(&mut self, block: &[u8]) {
        self.compress_block(block)
    }

    fn output(&self, out: &mut [u8]) {
        for (i, &word) in self.h.iter().enumerate() {
            BigEndian::write_u32(&mut out[i * 4..], word);
        }
    }

    fn reset(&mut self) {
        self.h = IV;
    }
}

/// new returns a streaming SHA-256 engine.
pub fn new() -> Digest<Sha256State> {
    Digest::new(Sha256State::new())
}

/// Sha256Core is the `digest` crate core for SHA-256, usable through
/// `CoreWrapper`.
#[derive(Clone)]
pub struct Sha256Core {
    state: Sha256State,
    blocks: u64,
}

impl Default for Sha256Core {
    fn default() -> Self {
        Sha256Core {
            state: Sha256State::new(),
            blocks: 0,
        }
    }
}

impl HashMarker for Sha256Core {}

impl BlockSizeUser for Sha256Core {
    type BlockSize = U64;
}

impl BufferKindUser for Sha256Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha256Core {
    type OutputSize = U32;
}

impl UpdateCore for Sha256Core {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.blocks += blocks.len() as u64;
        for b in blocks {
            self.state.compress_block(b)
        }
    }
}

impl FixedOutputCore for Sha256Core {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = (self.blocks * BLOCK_SIZE as u64 + buffer.get_pos() as u64) << 3;
        let mut tmp = [0; 8];
        BigEndian::write_u64(&mut tmp, bit_len);
        let state = &mut self.state;
        buffer.digest_pad(0x80, &tmp, |b| state.compress_block(b));

        self.state.output(out);
    }
}

impl Reset for Sha256Core {
    fn reset(&mut self) {
        Compressor::reset(&mut self.state);
        self.blocks = 0;
    }
}
