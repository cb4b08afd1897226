#![warn(missing_docs)]
//! Streaming digest engines: CRC-32 (IEEE 802.3), SHA-1, SHA-256 and
//! SHA-384.
//!
//! Every engine consumes an unbounded byte stream through repeated
//! `update` calls and renders a fixed-size digest on `finalize`; the
//! result never depends on how the input was split into chunks. The three
//! Merkle–Damgård engines also ship `digest`-crate cores
//! ([`sha1::Sha1Core`], [`sha256::Sha256Core`], [`sha384::Sha384Core`])
//! for use through `digest::core_api::CoreWrapper`.
//!
//! # Example
//! ```
//! use anyhow::Result;
//! use streamsum::sha256;
//!
//! fn main() -> Result<()> {
//!   let mut h = sha256::new();
//!   h.update("hello world".as_bytes())?;
//!   println!("Result: {}", h.finalize_hex()?);
//!
//!   Ok(())
//! }
//! ```
/// `crc32` is the table-driven CRC-32 checksum engine.
pub mod crc32;
/// `engine` is the runtime algorithm registry and the object-safe engine trait.
pub mod engine;
/// `error` is the crate error type.
pub mod error;
/// `io` streams byte sources into engines at the crate boundary.
pub mod io;
/// `md` is the generic streaming Merkle–Damgård driver.
pub mod md;
/// `progress` is per-session progress threshold tracking.
pub mod progress;
/// `sha1` is the SHA-1 hash engine.
pub mod sha1;
/// `sha256` is the SHA-256 hash engine.
pub mod sha256;
/// `sha384` is the SHA-384 hash engine, a truncated SHA-512 round function.
pub mod sha384;

pub use crate::engine::{Algorithm, Engine};
pub use crate::error::{Error, Result};
