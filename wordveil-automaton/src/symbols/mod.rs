//! Symbol classification for the scanner.
//!
//! A "symbol" is decoration rather than matchable content: the scanner
//! passes symbols through at rest and elides them inside a candidate
//! match, which is what lets a keyword match across interleaved
//! punctuation ("a-b-c" still matches "abc").

/// First code point of the CJK range exempted from symbol treatment.
pub const CJK_IDEOGRAPH_START: u32 = 0x2E80;

/// Last code point of the CJK range exempted from symbol treatment.
pub const CJK_IDEOGRAPH_END: u32 = 0x9FFF;

/// True iff `ch` is transparent decoration: not a letter, not a digit,
/// and outside the CJK Unified Ideograph block.
pub fn is_symbol(ch: char) -> bool {
    if ch.is_alphabetic() || ch.is_numeric() {
        return false;
    }
    !matches!(u32::from(ch), CJK_IDEOGRAPH_START..=CJK_IDEOGRAPH_END)
}
