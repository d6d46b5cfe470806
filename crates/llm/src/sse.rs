//! Line-buffered Server-Sent Events decoder.
//!
//! Network chunks may split an event (or a UTF-8 sequence) anywhere, so
//! bytes are held until a full line is available.

/// The sentinel closing an OpenAI-compatible stream.
pub const DONE: &str = "[DONE]";

/// Accumulates raw bytes and yields the payload of each `data:` line.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    /// Feed a network chunk and return the `data:` payloads it completed.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);
        let mut payloads = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(data) = Self::data(&line) {
                payloads.push(data);
            }
        }
        payloads
    }

    /// Flush a trailing line that was not newline-terminated.
    pub fn finish(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.buffer);
        Self::data(&line)
    }

    fn data(line: &[u8]) -> Option<String> {
        let line = String::from_utf8_lossy(line);
        let line = line.trim_end_matches(['\r', '\n']);
        let data = line.strip_prefix("data:")?;
        let data = data.strip_prefix(' ').unwrap_or(data);
        if data.is_empty() {
            return None;
        }
        Some(data.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::SseDecoder;

    #[test]
    fn event_split_across_chunks() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.feed(b"data: {\"a\"").is_empty());
        assert_eq!(decoder.feed(b":1}\n\ndata: [DONE]\n\n"), [r#"{"a":1}"#, "[DONE]"]);
    }

    #[test]
    fn ignores_comments_and_other_fields() {
        let mut decoder = SseDecoder::default();
        let out = decoder.feed(b": keep-alive\nevent: message\nid: 1\ndata:{}\r\n\r\n");
        assert_eq!(out, ["{}"]);
    }

    #[test]
    fn utf8_sequence_split_across_chunks() {
        let mut decoder = SseDecoder::default();
        let bytes = "data: é\n".as_bytes();
        assert!(decoder.feed(&bytes[..7]).is_empty());
        assert_eq!(decoder.feed(&bytes[7..]), ["é"]);
    }

    #[test]
    fn finish_flushes_unterminated_line() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.feed(b"data: tail").is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("tail"));
        assert_eq!(decoder.finish(), None);
    }
}
