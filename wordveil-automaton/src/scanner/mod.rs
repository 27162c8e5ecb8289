//! Single-pass keyword scanner and rewriter.
//!
//! The scanner walks an input buffer one Unicode code point at a time,
//! driving a read-only [`Automaton`] and rewriting the text as it goes:
//! every recognized keyword span is replaced by a fixed mask token,
//! symbols are transparent inside a candidate match, and malformed UTF-8
//! degrades to byte-for-byte passthrough. The scan keeps no failure or
//! suffix links; a failed candidate restarts just past its first code
//! point, so worst-case cost is input length times trie depth.
//!
//! Scanning is total: every input, including empty, symbol-only, and
//! corrupted buffers, produces a defined output and never fails.

use std::str;
use std::sync::Arc;

use log::trace;

use crate::automaton::Automaton;
use crate::symbols::is_symbol;
use crate::{KeywordId, StateId};

/// The mask token emitted for every match, regardless of keyword length.
pub const DEFAULT_MASK: &str = "***";

/// One recognized keyword occurrence, in byte offsets of the input.
///
/// The span runs from the first content code point of the candidate
/// through the code point that completed the keyword, inclusive of any
/// symbols elided inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch {
    pub start: usize,
    pub end: usize,
    pub keyword: KeywordId,
}

/// The result of one scan: the rewritten buffer plus every match found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub output: Vec<u8>,
    pub matches: Vec<ScanMatch>,
}

/// A reusable scanner over a built automaton.
///
/// The automaton is shared read-only, so one scanner (or many) may serve
/// any number of concurrent scans.
#[derive(Debug, Clone)]
pub struct Scanner {
    automaton: Arc<Automaton>,
    mask: String,
}

impl Scanner {
    /// Creates a scanner emitting the default `"***"` mask.
    pub fn new(automaton: Arc<Automaton>) -> Self {
        Self::with_mask(automaton, DEFAULT_MASK)
    }

    /// Creates a scanner with a custom mask token.
    pub fn with_mask(automaton: Arc<Automaton>, mask: impl Into<String>) -> Self {
        Self {
            automaton,
            mask: mask.into(),
        }
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Rewrites `input`, masking every keyword occurrence.
    ///
    /// Valid UTF-8 in, valid UTF-8 out: the output consists of input
    /// substrings plus mask tokens.
    pub fn filter(&self, input: &str) -> String {
        let outcome = self.scan(input.as_bytes());
        match String::from_utf8(outcome.output) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Byte-level variant of [`Scanner::filter`]; malformed sequences in
    /// `input` survive unchanged in the output.
    pub fn filter_bytes(&self, input: &[u8]) -> Vec<u8> {
        self.scan(input).output
    }

    /// Runs the single-pass rewrite, returning the output buffer and the
    /// byte span of every recognized keyword.
    pub fn scan(&self, input: &[u8]) -> ScanOutcome {
        let mut output = Vec::with_capacity(input.len());
        let mut matches = Vec::new();

        // Cursor: `start` is where the current uncommitted candidate
        // begins, `position` is the code point under examination, `state`
        // is root whenever no candidate is in progress.
        let mut start = 0usize;
        let mut position = 0usize;
        let mut state: StateId = Automaton::ROOT;

        while position < input.len() {
            let Some((ch, width)) = decode_code_point(input, position) else {
                // Malformed encoding: pass the offending byte through and
                // restart the scan right after it.
                output.push(input[position]);
                position += 1;
                start = position;
                state = Automaton::ROOT;
                continue;
            };

            if is_symbol(ch) {
                if state == Automaton::ROOT {
                    // At rest, symbols pass through and do not interrupt
                    // later matching.
                    output.extend_from_slice(&input[position..position + width]);
                    position += width;
                    start = position;
                } else {
                    // Inside a candidate, the symbol is elided; it is only
                    // preserved if the candidate fails and the restart
                    // re-scans it at root.
                    position += width;
                }
                continue;
            }

            match self.automaton.transition(state, ch) {
                None => {
                    // The span at `start` is not, and cannot become, a
                    // keyword prefix. Commit its first code point and
                    // restart right after it.
                    let head = decode_code_point(input, start)
                        .map(|(_, w)| w)
                        .unwrap_or(1);
                    output.extend_from_slice(&input[start..start + head]);
                    position = start + head;
                    start = position;
                    state = Automaton::ROOT;
                }
                Some(next) => {
                    position += width;
                    if let Some(keyword) = self.automaton.keyword_at(next) {
                        trace!(
                            "keyword match: bytes {}..{} masked with {:?}",
                            start, position, self.mask
                        );
                        output.extend_from_slice(self.mask.as_bytes());
                        matches.push(ScanMatch {
                            start,
                            end: position,
                            keyword,
                        });
                        start = position;
                        state = Automaton::ROOT;
                    } else {
                        state = next;
                    }
                }
            }
        }

        // A trailing partial match has no further code points to resolve
        // it; flush it verbatim as ordinary text.
        output.extend_from_slice(&input[start..]);

        ScanOutcome { output, matches }
    }
}

/// Decodes the code point starting at `pos`, returning it with its byte
/// width, or `None` when the bytes at `pos` are not valid UTF-8.
fn decode_code_point(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    let end = bytes.len().min(pos + 4);
    let window = &bytes[pos..end];
    let valid = match str::from_utf8(window) {
        Ok(s) => s,
        Err(e) if e.valid_up_to() > 0 => str::from_utf8(&window[..e.valid_up_to()]).ok()?,
        Err(_) => return None,
    };
    let ch = valid.chars().next()?;
    Some((ch, ch.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner_for(keywords: &[&str]) -> Scanner {
        let mut automaton = Automaton::new();
        for keyword in keywords {
            automaton.insert(keyword);
        }
        Scanner::new(Arc::new(automaton))
    }

    #[test]
    fn empty_dictionary_is_the_identity_function() {
        let scanner = scanner_for(&[]);
        for text in ["", "hello", "a-b-c!", "开票hshvse赌博"] {
            assert_eq!(scanner.filter(text), text);
        }
    }

    #[test]
    fn non_matching_text_passes_through() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("abd"), "abd");
        assert_eq!(scanner.filter("xyz 123"), "xyz 123");
        assert_eq!(scanner.filter("!!!"), "!!!");
    }

    #[test]
    fn exact_match_is_masked() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("abc"), "***");
    }

    #[test]
    fn match_embedded_in_text_is_masked() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("xxabcyy"), "xx***yy");
        assert_eq!(scanner.filter("abcabc"), "******");
    }

    #[test]
    fn greedy_leftmost_match_consumes_its_span() {
        // "ab" wins; the leftover "c" alone cannot match "bc".
        let scanner = scanner_for(&["ab", "bc"]);
        assert_eq!(scanner.filter("abc"), "***c");
    }

    #[test]
    fn shortest_terminal_fires_first() {
        let scanner = scanner_for(&["ab", "abc"]);
        assert_eq!(scanner.filter("abc"), "***c");
    }

    #[test]
    fn symbols_are_transparent_inside_a_match() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("a-b-c"), "***");
        assert_eq!(scanner.filter("a - b - c"), "***");
    }

    #[test]
    fn symbols_at_rest_pass_through() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("--abc--"), "--***--");
    }

    #[test]
    fn symbols_inside_a_failed_candidate_are_rescanned_at_root() {
        // 'd' kills the "ab" candidate; the restart re-scans '-' at root
        // and passes it through.
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("a-b-d"), "a-b-d");
    }

    #[test]
    fn cjk_ideographs_are_exempt_from_symbol_elision() {
        let scanner = scanner_for(&["赌博"]);
        assert_eq!(scanner.filter("开票hshvse赌博"), "开票hshvse***");
    }

    #[test]
    fn malformed_bytes_pass_through_unchanged() {
        let scanner = scanner_for(&["abc"]);
        let input = b"bad \xFF\xFE byte abc end".to_vec();
        let output = scanner.filter_bytes(&input);
        assert_eq!(output, b"bad \xFF\xFE byte *** end".to_vec());
    }

    #[test]
    fn truncated_multibyte_tail_survives() {
        // "赌" is E8 B5 8C; cut it short.
        let scanner = scanner_for(&["abc"]);
        let input = b"abc \xE8\xB5".to_vec();
        assert_eq!(scanner.filter_bytes(&input), b"*** \xE8\xB5".to_vec());
    }

    #[test]
    fn malformed_byte_inside_open_candidate_drops_the_candidate() {
        // Pinned behavior: the raw byte restarts the cursor at the byte
        // after it, so the unresolved "ab" prefix is not replayed.
        let scanner = scanner_for(&["abcd"]);
        let input = b"ab\xFFz".to_vec();
        assert_eq!(scanner.filter_bytes(&input), b"\xFFz".to_vec());
    }

    #[test]
    fn trailing_partial_match_is_flushed_verbatim() {
        let scanner = scanner_for(&["abc"]);
        assert_eq!(scanner.filter("xx ab"), "xx ab");
        assert_eq!(scanner.filter("ab"), "ab");
    }

    #[test]
    fn filtering_is_idempotent_when_mask_is_unmatched() {
        let scanner = scanner_for(&["abc", "赌博"]);
        for text in ["abc", "xxabcyy", "开票赌博", "a-b-c!", "no match here"] {
            let once = scanner.filter(text);
            assert_eq!(scanner.filter(&once), once);
        }
    }

    #[test]
    fn custom_mask_is_emitted() {
        let mut automaton = Automaton::new();
        automaton.insert("abc");
        let scanner = Scanner::with_mask(Arc::new(automaton), "[BLOCKED]");
        assert_eq!(scanner.filter("say abc"), "say [BLOCKED]");
    }

    #[test]
    fn scan_reports_match_spans_and_keywords() {
        let scanner = scanner_for(&["abc"]);
        let outcome = scanner.scan("x a-b-c y abc".as_bytes());
        assert_eq!(outcome.matches.len(), 2);

        let first = &outcome.matches[0];
        assert_eq!((first.start, first.end), (2, 7));
        assert_eq!(
            scanner.automaton().keyword_text(first.keyword),
            Some("abc")
        );

        let second = &outcome.matches[1];
        assert_eq!((second.start, second.end), (10, 13));
    }

    #[test]
    fn decode_code_point_handles_multibyte_and_garbage() {
        let text = "a赌".as_bytes();
        assert_eq!(decode_code_point(text, 0), Some(('a', 1)));
        assert_eq!(decode_code_point(text, 1), Some(('赌', 3)));
        assert_eq!(decode_code_point(b"\xFFabc", 0), None);
        assert_eq!(decode_code_point(b"\xE8\xB5", 0), None);
    }
}
