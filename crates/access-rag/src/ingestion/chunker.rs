//! Fixed-size sliding-window chunking with overlap

use unicode_segmentation::UnicodeSegmentation;

use crate::config::ChunkingConfig;
use crate::types::{DocumentChunk, RawDocument};

/// Splits document text into overlapping character windows
///
/// Window boundaries prefer word breaks when a cut would land mid-word;
/// beyond that, sentence structure is ignored.
pub struct TextChunker {
    /// Target window size in characters
    chunk_size: usize,
    /// Overlap between consecutive windows
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        // A window must outgrow its overlap for the scan to advance
        let overlap = overlap.min(chunk_size.saturating_sub(1));
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split a document into ordered, metadata-tagged chunks
    pub fn chunk_document(&self, doc: &RawDocument) -> Vec<DocumentChunk> {
        let chars: Vec<char> = doc.content.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0usize;
        let mut index = 0u32;

        while start < chars.len() {
            let hard_end = (start + self.chunk_size).min(chars.len());
            let end = if hard_end < chars.len() {
                self.separator_break(&chars, start, hard_end)
            } else {
                hard_end
            };

            let content: String = chars[start..end].iter().collect();
            let content = content.trim();
            if !content.is_empty() {
                chunks.push(DocumentChunk::new(doc, content.to_string(), index));
                index += 1;
            }

            if end >= chars.len() {
                break;
            }
            let next = end.saturating_sub(self.overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }

    /// Back a mid-word cut up to the nearest word boundary
    ///
    /// Looks at most `overlap` characters behind the cut; hard-cuts when
    /// the tail holds no boundary at all.
    fn separator_break(&self, chars: &[char], start: usize, end: usize) -> usize {
        if chars[end].is_whitespace() || chars[end - 1].is_whitespace() {
            return end;
        }

        let floor = end.saturating_sub(self.overlap).max(start + 1);
        if floor >= end {
            return end;
        }

        let tail: String = chars[floor..end].iter().collect();
        let segments: Vec<&str> = tail.split_word_bounds().collect();
        if segments.len() < 2 {
            return end;
        }

        let trailing = segments
            .last()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        let candidate = end - trailing;
        if candidate > start {
            candidate
        } else {
            end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> RawDocument {
        RawDocument {
            category: "blindness".to_string(),
            filename: "braille.txt".to_string(),
            source: "data/categories/blindness/braille.txt".to_string(),
            content: content.to_string(),
        }
    }

    /// Unbroken text: no whitespace, so no separator adjustment kicks in
    fn cyclic(len: usize) -> String {
        (0..len)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect()
    }

    #[test]
    fn test_window_count_formula() {
        let chunker = TextChunker::new(500, 50);

        // ceil((len - overlap) / (size - overlap))
        for len in [1000usize, 2000, 4567] {
            let chunks = chunker.chunk_document(&doc(&cyclic(len)));
            let expected = (len - 50).div_ceil(450);
            assert_eq!(chunks.len(), expected, "len = {}", len);
        }
    }

    #[test]
    fn test_windows_bounded_and_overlapping() {
        let chunker = TextChunker::new(500, 50);
        let chunks = chunker.chunk_document(&doc(&cyclic(1000)));

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.content.chars().count() <= 500);
        }

        // Consecutive windows share exactly the configured overlap
        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].content.chars().collect();
            let next: Vec<char> = pair[1].content.chars().collect();
            let tail: String = prev[prev.len() - 50..].iter().collect();
            let head: String = next[..50].iter().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_short_text_is_a_single_window() {
        let chunker = TextChunker::new(500, 50);
        let chunks = chunker.chunk_document(&doc("Braille is a tactile writing system."));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Braille is a tactile writing system.");
        assert_eq!(chunks[0].chunk_index, 0);
    }

    #[test]
    fn test_break_prefers_word_boundary() {
        let chunker = TextChunker::new(500, 50);
        // 7-char tokens, so the 500-char cut lands mid-word
        let text = "abcdef ".repeat(100);
        let chunks = chunker.chunk_document(&doc(&text));

        assert!(chunks.len() > 1);
        assert!(chunks[0].content.ends_with("abcdef"));
    }

    #[test]
    fn test_chunks_inherit_document_metadata() {
        let chunker = TextChunker::new(500, 50);
        let chunks = chunker.chunk_document(&doc(&cyclic(1200)));

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.category, "blindness");
            assert_eq!(chunk.filename, "braille.txt");
            assert_eq!(chunk.source, "data/categories/blindness/braille.txt");
            assert_eq!(chunk.chunk_index, i as u32);
        }
    }

    #[test]
    fn test_empty_and_blank_text_produce_no_chunks() {
        let chunker = TextChunker::new(500, 50);
        assert!(chunker.chunk_document(&doc("")).is_empty());
        assert!(chunker.chunk_document(&doc("   \n\n  ")).is_empty());
    }
}
