//! Buffer and cursor state for the stemming virtual machine
//!
//! A [`StemContext`] holds the word being stemmed as a buffer of characters
//! plus the cursor/limit bookkeeping that every primitive operates on.
//! Primitives return `bool`: `true` means the operation matched and consumed
//! input (or mutated the buffer), `false` means it failed and, unless noted
//! otherwise, left the cursor where it was. Rule programs chain primitives
//! and restore the cursor themselves when an alternative fails.
//!
//! Backward-mode primitives (the `_b` variants) read leftward from the
//! cursor and never cross `limit_backward`.

use smallvec::SmallVec;

/// Inline capacity of the working buffer. Words at most this long never
/// touch the heap.
const INLINE_CHARS: usize = 24;

/// A character class encoded as a byte-packed bitset over a code point
/// range.
///
/// Bit `code - min` (least significant bit of `mask[0]` first) is set when
/// `code` belongs to the class. Code points outside `min..=max` are never
/// members.
#[derive(Debug, Clone, Copy)]
pub struct Grouping {
    /// Lowest code point in the class.
    pub min: u32,
    /// Highest code point in the class.
    pub max: u32,
    /// One bit per code point starting at `min`.
    pub mask: &'static [u8],
}

impl Grouping {
    /// Membership test for a single character.
    pub fn contains(&self, ch: char) -> bool {
        let code = ch as u32;
        if code < self.min || code > self.max {
            return false;
        }
        let bit = code - self.min;
        self.mask[(bit >> 3) as usize] & (1 << (bit & 7)) != 0
    }
}

/// Mutable stemming state: the character buffer and all cursor bookkeeping.
///
/// Invariant outside of primitive calls:
/// `0 <= limit_backward <= cursor <= limit <= current.len()` and
/// `bra <= ket` whenever a slice operation is about to run.
#[derive(Debug, Clone, Default)]
pub struct StemContext {
    /// The word being stemmed, one element per character.
    pub current: SmallVec<[char; INLINE_CHARS]>,
    /// Position the forward primitives read at.
    pub cursor: usize,
    /// Upper bound for forward reads.
    pub limit: usize,
    /// Lower bound for backward reads.
    pub limit_backward: usize,
    /// Left edge of the pending slice.
    pub bra: usize,
    /// Right edge of the pending slice.
    pub ket: usize,
}

impl StemContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new word and reset every marker.
    pub fn set_current(&mut self, word: &str) {
        self.current.clear();
        self.current.extend(word.chars());
        self.cursor = 0;
        self.limit = self.current.len();
        self.limit_backward = 0;
        self.bra = 0;
        self.ket = self.limit;
    }

    /// The buffer contents as an owned string.
    pub fn get_current(&self) -> String {
        self.current.iter().collect()
    }

    /// Adopt the complete state of another context.
    pub fn copy_from(&mut self, other: &StemContext) {
        self.current.clear();
        self.current.extend_from_slice(&other.current);
        self.cursor = other.cursor;
        self.limit = other.limit;
        self.limit_backward = other.limit_backward;
        self.bra = other.bra;
        self.ket = other.ket;
    }

    // Character-class primitives

    /// Consume one character belonging to `g`.
    pub fn in_grouping(&mut self, g: &Grouping) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        if !g.contains(self.current[self.cursor]) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward mirror of [`in_grouping`](Self::in_grouping).
    pub fn in_grouping_b(&mut self, g: &Grouping) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        if !g.contains(self.current[self.cursor - 1]) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Consume one character not belonging to `g`.
    pub fn out_grouping(&mut self, g: &Grouping) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        if g.contains(self.current[self.cursor]) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward mirror of [`out_grouping`](Self::out_grouping).
    pub fn out_grouping_b(&mut self, g: &Grouping) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        if g.contains(self.current[self.cursor - 1]) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Consume one character whose code point lies in `lo..=hi`.
    pub fn in_range(&mut self, lo: u32, hi: u32) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        let code = self.current[self.cursor] as u32;
        if code < lo || code > hi {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward mirror of [`in_range`](Self::in_range).
    pub fn in_range_b(&mut self, lo: u32, hi: u32) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        let code = self.current[self.cursor - 1] as u32;
        if code < lo || code > hi {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Consume one character whose code point lies outside `lo..=hi`.
    pub fn out_range(&mut self, lo: u32, hi: u32) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        let code = self.current[self.cursor] as u32;
        if (lo..=hi).contains(&code) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward mirror of [`out_range`](Self::out_range).
    pub fn out_range_b(&mut self, lo: u32, hi: u32) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        let code = self.current[self.cursor - 1] as u32;
        if (lo..=hi).contains(&code) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    // Exact-match primitives

    /// Match `s` at the cursor, consuming it on success. The cursor does
    /// not move on failure.
    pub fn eq_s(&mut self, s: &str) -> bool {
        let size = s.chars().count();
        if self.limit - self.cursor < size {
            return false;
        }
        if !s
            .chars()
            .enumerate()
            .all(|(i, ch)| self.current[self.cursor + i] == ch)
        {
            return false;
        }
        self.cursor += size;
        true
    }

    /// Match `s` ending at the cursor, consuming it leftward on success.
    pub fn eq_s_b(&mut self, s: &str) -> bool {
        let size = s.chars().count();
        if self.cursor < self.limit_backward + size {
            return false;
        }
        if !s
            .chars()
            .rev()
            .enumerate()
            .all(|(i, ch)| self.current[self.cursor - 1 - i] == ch)
        {
            return false;
        }
        self.cursor -= size;
        true
    }

    // Slice mutation primitives

    /// Replace `bra..ket` with `s`, adjusting `limit` and `cursor`.
    ///
    /// Returns the signed length change. A cursor at or beyond `ket` is
    /// shifted by that change; a cursor strictly inside the replaced span
    /// collapses to `bra`.
    pub fn replace_s(&mut self, bra: usize, ket: usize, s: &str) -> isize {
        let adjustment = s.chars().count() as isize - (ket - bra) as isize;
        self.current.drain(bra..ket);
        self.current.insert_many(bra, s.chars());
        self.limit = (self.limit as isize + adjustment) as usize;
        if self.cursor >= ket {
            self.cursor = (self.cursor as isize + adjustment) as usize;
        } else if self.cursor > bra {
            self.cursor = bra;
        }
        adjustment
    }

    /// Whether `bra`/`ket` currently describe a valid slice.
    pub fn slice_check(&self) -> bool {
        self.bra <= self.ket && self.ket <= self.limit && self.limit <= self.current.len()
    }

    /// Replace the `bra..ket` slice with `s`. Fails (without mutating) when
    /// the slice markers are inconsistent.
    pub fn slice_from(&mut self, s: &str) -> bool {
        if !self.slice_check() {
            return false;
        }
        self.replace_s(self.bra, self.ket, s);
        true
    }

    /// Delete the `bra..ket` slice.
    pub fn slice_del(&mut self) -> bool {
        self.slice_from("")
    }

    /// Insert `s` over `c_bra..c_ket`, shifting `bra`/`ket` when the
    /// insertion point lies at or before them.
    pub fn insert(&mut self, c_bra: usize, c_ket: usize, s: &str) {
        let adjustment = self.replace_s(c_bra, c_ket, s);
        if c_bra <= self.bra {
            self.bra = (self.bra as isize + adjustment) as usize;
        }
        if c_bra <= self.ket {
            self.ket = (self.ket as isize + adjustment) as usize;
        }
    }

    /// Copy of the `bra..ket` slice, or an empty string when the markers
    /// are inconsistent.
    pub fn slice_to(&self) -> String {
        if !self.slice_check() {
            return String::new();
        }
        self.current[self.bra..self.ket].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "aeiou" over the ASCII range
    static VOWELS: Grouping = Grouping {
        min: 97,
        max: 117,
        mask: &[17, 65, 16],
    };

    fn ctx(word: &str) -> StemContext {
        let mut env = StemContext::new();
        env.set_current(word);
        env
    }

    #[test]
    fn set_current_resets_markers() {
        let mut env = ctx("abc");
        env.cursor = 2;
        env.limit_backward = 1;
        env.set_current("de");
        assert_eq!(env.cursor, 0);
        assert_eq!(env.limit, 2);
        assert_eq!(env.limit_backward, 0);
        assert_eq!(env.bra, 0);
        assert_eq!(env.ket, 2);
    }

    #[test]
    fn grouping_membership() {
        assert!(VOWELS.contains('a'));
        assert!(VOWELS.contains('u'));
        assert!(!VOWELS.contains('b'));
        assert!(!VOWELS.contains('z'));
        assert!(!VOWELS.contains('я'));
    }

    #[test]
    fn in_out_grouping_move_only_on_success() {
        let mut env = ctx("ab");
        assert!(env.in_grouping(&VOWELS));
        assert_eq!(env.cursor, 1);
        assert!(!env.in_grouping(&VOWELS));
        assert_eq!(env.cursor, 1);
        assert!(env.out_grouping(&VOWELS));
        assert_eq!(env.cursor, 2);
        assert!(!env.out_grouping(&VOWELS)); // at limit
    }

    #[test]
    fn backward_grouping_respects_limit_backward() {
        let mut env = ctx("ba");
        env.cursor = env.limit;
        env.limit_backward = 1;
        assert!(env.in_grouping_b(&VOWELS));
        assert_eq!(env.cursor, 1);
        assert!(!env.out_grouping_b(&VOWELS)); // would cross limit_backward
        assert_eq!(env.cursor, 1);
    }

    #[test]
    fn ranges() {
        let mut env = ctx("am");
        assert!(env.in_range('a' as u32, 'l' as u32));
        assert!(!env.in_range('a' as u32, 'l' as u32));
        assert!(env.out_range('a' as u32, 'l' as u32));
        env.cursor = env.limit;
        assert!(env.in_range_b('m' as u32, 'z' as u32));
        assert!(env.out_range_b('m' as u32, 'z' as u32));
    }

    #[test]
    fn eq_s_moves_cursor_only_on_match() {
        let mut env = ctx("abcd");
        assert!(!env.eq_s("abd"));
        assert_eq!(env.cursor, 0);
        assert!(env.eq_s("ab"));
        assert_eq!(env.cursor, 2);
        assert!(!env.eq_s("cde")); // would pass limit
        assert_eq!(env.cursor, 2);
    }

    #[test]
    fn eq_s_b_matches_leftward() {
        let mut env = ctx("abcd");
        env.cursor = env.limit;
        assert!(!env.eq_s_b("bcd "));
        assert!(env.eq_s_b("cd"));
        assert_eq!(env.cursor, 2);
        env.limit_backward = 1;
        assert!(!env.eq_s_b("ab")); // crosses limit_backward
        assert_eq!(env.cursor, 2);
    }

    #[test]
    fn replace_shrink_adjusts_limit_and_cursor() {
        let mut env = ctx("abcdef");
        env.cursor = 5; // past the replaced span
        let adj = env.replace_s(1, 4, "x");
        assert_eq!(adj, -2);
        assert_eq!(env.get_current(), "axef");
        assert_eq!(env.limit, 4);
        assert_eq!(env.cursor, 3);
    }

    #[test]
    fn replace_grow_shifts_cursor_past_ket() {
        let mut env = ctx("abc");
        env.cursor = 3;
        let adj = env.replace_s(2, 3, "xyz");
        assert_eq!(adj, 2);
        assert_eq!(env.get_current(), "abxyz");
        assert_eq!(env.cursor, 5);
        assert_eq!(env.limit, 5);
    }

    #[test]
    fn cursor_inside_replaced_span_collapses_to_bra() {
        let mut env = ctx("abcdef");
        env.cursor = 3;
        env.replace_s(2, 5, "");
        assert_eq!(env.cursor, 2);
        assert_eq!(env.get_current(), "abf");
    }

    #[test]
    fn slice_from_and_del() {
        let mut env = ctx("walking");
        env.bra = 4;
        env.ket = 7;
        assert!(env.slice_del());
        assert_eq!(env.get_current(), "walk");
        assert_eq!(env.limit, 4);

        let mut env = ctx("pony");
        env.bra = 3;
        env.ket = 4;
        assert!(env.slice_from("ies"));
        assert_eq!(env.get_current(), "ponies");
    }

    #[test]
    fn slice_from_rejects_inverted_markers() {
        let mut env = ctx("abc");
        env.bra = 2;
        env.ket = 1;
        assert!(!env.slice_from("x"));
        assert_eq!(env.get_current(), "abc");
    }

    #[test]
    fn insert_shifts_markers_at_or_after_point() {
        let mut env = ctx("abcd");
        env.bra = 1;
        env.ket = 3;
        env.insert(1, 1, "xy");
        assert_eq!(env.get_current(), "axybcd");
        assert_eq!(env.bra, 3);
        assert_eq!(env.ket, 5);

        // insertion after ket moves nothing
        let mut env = ctx("abcd");
        env.bra = 0;
        env.ket = 1;
        env.insert(2, 2, "z");
        assert_eq!(env.bra, 0);
        assert_eq!(env.ket, 1);
    }

    #[test]
    fn slice_to_copies_the_marked_region() {
        let mut env = ctx("abcdef");
        env.bra = 2;
        env.ket = 5;
        assert_eq!(env.slice_to(), "cde");
    }

    #[test]
    fn copy_from_clones_everything() {
        let mut a = ctx("поток");
        a.cursor = 3;
        a.bra = 1;
        a.ket = 4;
        let mut b = StemContext::new();
        b.copy_from(&a);
        assert_eq!(b.get_current(), "поток");
        assert_eq!(b.cursor, 3);
        assert_eq!(b.bra, 1);
        assert_eq!(b.ket, 4);
    }
}
