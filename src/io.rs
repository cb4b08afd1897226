use std::io::{ErrorKind, Read};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::progress::ProgressTracker;

/// Read granularity for streaming sources.
const CHUNK_SIZE: usize = 1 << 20;

/// copy_into streams `reader` to exhaustion into `engine`, invoking
/// `notify` with each percentage the tracker decides to surface. Returns
/// the total number of bytes fed.
///
/// End of stream is only ever `Ok(0)` from the reader; a read failure is
/// returned as [`Error::Input`] and no digest should be taken from the
/// engine afterwards. The engine is left unfinalized so the caller decides
/// when to call `finalize_hex`.
pub fn copy_into<R, F>(
    reader: &mut R,
    engine: &mut dyn Engine,
    progress: &mut ProgressTracker,
    mut notify: F,
) -> Result<u64>
where
    R: Read,
    F: FnMut(u64),
{
    let mut buf = vec![0; CHUNK_SIZE];
    let mut total = 0u64;

    if let Some(percentage) = progress.update(0) {
        notify(percentage);
    }

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Input(e)),
        };
        engine.update(&buf[..n])?;
        total += n as u64;
        if let Some(percentage) = progress.update(total) {
            notify(percentage);
        }
    }

    Ok(total)
}
