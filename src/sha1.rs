use byteorder::{BigEndian, ByteOrder};
use digest::{
    block_buffer::Eager,
    core_api::{Buffer, BufferKindUser, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U20, U64},
    HashMarker, Output, OutputSizeUser, Reset,
};

use crate::md::{Compressor, Digest};

/// The size in bytes of a SHA-1 digest.
pub const DIGEST_SIZE: usize = 20;

/// Block size, in bytes, of the SHA-1 hash function.
pub const BLOCK_SIZE: usize = 64;

const IV: [u32; 5] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

// One round constant per 20-round group.
const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Sha1State carries h0..h4 between block compressions.
#[derive(Clone)]
pub struct Sha1State {
    h: [u32; 5],
}

impl Sha1State {
    fn new() -> Sha1State {
        Sha1State { h: IV }
    }

    fn compress_block(&mut self, block: &[u8]) {
        let mut w = [0u32; 80];
        for (i, word) in w[..16].iter_mut().enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;
        for (i, &wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
    }
}

impl Compressor for Sha1State {
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

/// new returns a streaming SHA-1 engine.
pub fn new() -> Digest<Sha1State> {
    Digest::new(Sha1State::new())
}

/// Sha1Core is the `digest` crate core for SHA-1, usable through
/// `CoreWrapper`.
#[derive(Clone)]
pub struct Sha1Core {
    state: Sha1State,
    blocks: u64,
}

impl Default for Sha1Core {
    fn default() -> Self {
        Sha1Core {
            state: Sha1State::new(),
            blocks: 0,
        }
    }
}

impl HashMarker for Sha1Core {}

impl BlockSizeUser for Sha1Core {
    type BlockSize = U64;
}

impl BufferKindUser for Sha1Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha1Core {
    type OutputSize = U20;
}

impl UpdateCore for Sha1Core {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.blocks += blocks.len() as u64;
        for b in blocks {
            self.state.compress_block(b)
        }
    }
}

impl FixedOutputCore for Sha1Core {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = (self.blocks * BLOCK_SIZE as u64 + buffer.get_pos() as u64) << 3;
        let mut tmp = [0; 8];
        BigEndian::write_u64(&mut tmp, bit_len);
        let state = &mut self.state;
        buffer.digest_pad(0x80, &tmp, |b| state.compress_block(b));

        self.state.output(out);
    }
}

impl Reset for Sha1Core {
    fn reset(&mut self) {
        Compressor::reset(&mut self.state);
        self.blocks = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use digest::{core_api::CoreWrapper, FixedOutput, Update};

    struct TestElement {
        input: &'static str,
        output: &'static str,
    }

    static TEST_VECTOR: &[TestElement] = &[
        TestElement {
            input: "",
            output: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        TestElement {
            input: "abc",
            output: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        // 56 bytes, forces the two-block padding spill
        TestElement {
            input: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            output: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        },
        TestElement {
            input: "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                     hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
            output: "a49b2446a02c645bf419f995b67091253a04a259",
        },
    ];

    #[test]
    fn test_vector() {
        TEST_VECTOR.iter().enumerate().for_each(|(i, element)| {
            let mut h = new();
            h.update(element.input.as_bytes()).unwrap();
            let sum = h.finalize_hex().unwrap();
            assert_eq!(
                element.output, sum,
                "test vector element mismatched on index {}! got {}, want {}",
                i, sum, element.output
            );
        })
    }

    #[test]
    fn test_vector_core() {
        TEST_VECTOR.iter().for_each(|element| {
            let mut h = CoreWrapper::<Sha1Core>::default();
            h.update(element.input.as_bytes());
            assert_eq!(element.output, hex::encode(h.finalize_fixed()));
        })
    }

    #[test]
    fn million_a() {
        let mut h = new();
        for _ in 0..1_000 {
            h.update(&[b'a'; 1_000]).unwrap();
        }
        assert_eq!(
            h.finalize_hex().unwrap(),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
        );
    }
}
