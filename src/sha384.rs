use byteorder::{BigEndian, ByteOrder};
use digest::{
    block_buffer::Eager,
    core_api::{Buffer, BufferKindUser, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U128, U48},
    HashMarker, Output, OutputSizeUser, Reset,
};

use crate::md::{Compressor, Digest};

/// The size in bytes of a SHA-384 digest.
pub const DIGEST_SIZE: usize = 48;

/// Block size, in bytes, of the SHA-384 hash function.
pub const BLOCK_SIZE: usize = 128;

// SHA-384 has its own initial constants; it is not SHA-512 state with a
// shorter printout. The two trailing words still participate in the
// compression feedback, they are just never emitted.
const IV: [u64; 8] = [
    0xcbbb_9d5d_c105_9ed8,
    0x629a_292a_367c_d507,
    0x9159_015a_3070_dd17,
    0x152f_ecd8_f70e_5939,
    0x6733_2667_ffc0_0b31,
    0x8eb4_4a87_6858_1511,
    0xdb0c_2e0d_64f9_8fa7,
    0x47b5_481d_befa_4fa4,
];

// SHA-512 round constants (FIPS 180-4).
#[rustfmt::skip]
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Sha384State carries the eight 64-bit state words between block
/// compressions.
#[derive(Clone)]
pub struct Sha384State {
    h: [u64; 8],
}

impl Sha384State {
    fn new() -> Sha384State {
        Sha384State { h: IV }
    }

    fn compress_block(&mut self, block: &[u8]) {
        let mut w = [0u64; 80];
        for (i, word) in w[..16].iter_mut().enumerate() {
            *word = BigEndian::read_u64(&block[i * 8..]);
        }
        for i in 16..80 {
            let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
            let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;
        for i in 0..80 {
            let big_s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
            let ch = (e & f) ^ (!e & g);
            let temp1 = h
                .wrapping_add(big_s1)
                .wrapping_add(ch)
                .wrapping_add(K[i])
                .wrapping_add(w[i]);
            let big_s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
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

impl Compressor for Sha384State {
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const LENGTH_BYTES: usize = 16;
    const DIGEST_SIZE: usize = DIGEST_SIZE;

    fn compress(&mut self, block: &[u8]) {
        self.compress_block(block)
    }

    // Truncated output: only the first six of the eight state words.
    fn output(&self, out: &mut [u8]) {
        for (i, &word) in self.h[..6].iter().enumerate() {
            BigEndian::write_u64(&mut out[i * 8..], word);
        }
    }

    fn reset(&mut self) {
        self.h = IV;
    }
}

/// new returns a streaming SHA-384 engine.
pub fn new() -> Digest<Sha384State> {
    Digest::new(Sha384State::new())
}

/// Sha384Core is the `digest` crate core for SHA-384, usable through
/// `CoreWrapper`.
#[derive(Clone)]
pub struct Sha384Core {
    state: Sha384State,
    blocks: u64,
}

impl Default for Sha384Core {
    fn default() -> Self {
        Sha384Core {
            state: Sha384State::new(),
            blocks: 0,
        }
    }
}

impl HashMarker for Sha384Core {}

impl BlockSizeUser for Sha384Core {
    type BlockSize = U128;
}

impl BufferKindUser for Sha384Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha384Core {
    type OutputSize = U48;
}

impl UpdateCore for Sha384Core {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.blocks += blocks.len() as u64;
        for b in blocks {
            self.state.compress_block(b)
        }
    }
}

impl FixedOutputCore for Sha384Core {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len =
            ((self.blocks as u128 * BLOCK_SIZE as u128) + buffer.get_pos() as u128) << 3;
        let mut tmp = [0; 16];
        BigEndian::write_u128(&mut tmp, bit_len);
        let state = &mut self.state;
        buffer.digest_pad(0x80, &tmp, |b| state.compress_block(b));

        self.state.output(out);
    }
}

impl Reset for Sha384Core {
    fn reset(&mut self) {
        Compressor::reset(&mut self.state);
        self.blocks = 0;
    }
}
