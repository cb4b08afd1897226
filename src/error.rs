use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error describes every failure an engine or its boundary helpers can
/// report. Digest math itself never fails; errors come from contract
/// violations and from the byte source.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine was already finalized. Call `reset` before writing more
    /// input; the digest already produced stays valid.
    #[error("engine is finalized; reset it before further use")]
    Finalized,

    /// The total input length no longer fits the algorithm's bit-length
    /// field. This is a hard capacity limit, not a wrap.
    #[error("input exceeds the capacity of the {limit_bits}-bit length field")]
    LengthOverflow {
        /// Width of the length field that would overflow.
        limit_bits: u32,
    },

    /// The byte source failed before reaching end of stream. Distinct from
    /// normal completion: a digest of a truncated stream is never returned
    /// silently.
    #[error("input source failed before end of stream")]
    Input(#[from] std::io::Error),

    /// An algorithm name did not match any registered engine.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
