use log::debug;

/// Reassembles newline-delimited text lines from a stream of byte chunks.
///
/// Chunk boundaries are arbitrary: a chunk may split a line or even a
/// multi-byte UTF-8 codepoint. Bytes are carried over until a `\n` arrives,
/// which keeps decoding stateful across chunks — a `\n` byte never occurs
/// inside a multi-byte UTF-8 sequence, so the byte-level split is safe.
/// Complete lines are decoded best-effort: malformed sequences become
/// replacement characters instead of aborting the stream.
#[derive(Debug, Default)]
pub struct LineDecoder {
    carry: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk and returns every line it completes, in order, with
    /// the newline stripped. A trailing fragment without a `\n` is retained
    /// for the next chunk.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.carry.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(pos) = self.carry[start..].iter().position(|&b| b == b'\n') {
            let end = start + pos;
            lines.push(String::from_utf8_lossy(&self.carry[start..end]).into_owned());
            start = end + 1;
        }
        if start > 0 {
            self.carry.drain(..start);
        }
        lines
    }

    /// Signals end of stream. A non-terminated trailing fragment is not a
    /// complete line and is dropped.
    pub fn finish(self) {
        if !self.carry.is_empty() {
            debug!(
                "dropping {} trailing bytes without a line terminator",
                self.carry.len()
            );
        }
    }
}
