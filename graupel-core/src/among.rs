//! Multi-way suffix and prefix matching over sorted pattern tables
//!
//! An among table is a binary-searchable array of patterns, each carrying an
//! outcome code, an optional guard predicate, and a backlink to the longest
//! entry that is a proper prefix of it in comparison order. Backward tables
//! are sorted by the code points of the *reversed* pattern, so that matching
//! leftward from the cursor walks the table the same way forward matching
//! does.
//!
//! The search tracks how many characters the text has in common with the
//! lower and upper bracket of the shrinking range (`common_i`/`common_j`),
//! so each character of the input is compared at most once per bracket
//! move. After the search settles on a candidate, the backlink chain is
//! walked toward shorter entries until one fully matches and its guard (if
//! any) accepts.

use crate::context::StemContext;

/// One entry of an among table.
pub struct Among<C: 'static> {
    /// The literal to match; compared in reverse for backward tables.
    pub pattern: &'static str,
    /// Index of the longest proper prefix entry in comparison order, or a
    /// negative value when there is none.
    pub backlink: i32,
    /// Value reported when this entry wins.
    pub outcome: i32,
    /// Extra acceptance predicate, run with the cursor already moved past
    /// the matched pattern. Cursor movement inside the guard is discarded;
    /// the matcher re-asserts the match-end position afterwards.
    pub guard: Option<fn(&mut StemContext, &mut C) -> bool>,
}

impl<C> Among<C> {
    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    /// Whether the pattern is the empty string.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

impl StemContext {
    /// Find the longest table entry matching forward at the cursor.
    ///
    /// Returns the entry's outcome with the cursor moved past the match, or
    /// 0 with the cursor unchanged when nothing matches. When a guard
    /// rejects a fully matched entry the cursor stays advanced past that
    /// pattern while the backlink chain continues; a shorter entry accepted
    /// afterwards re-positions the cursor to its own end. Guards may scan
    /// freely: the cursor is reset to the match end when they return.
    pub fn find_among<C>(&mut self, amongs: &[Among<C>], ctx: &mut C) -> i32 {
        let mut i = 0usize;
        let mut j = amongs.len();
        let c = self.cursor;
        let l = self.limit;
        let mut common_i = 0usize;
        let mut common_j = 0usize;
        let mut first_key_inspected = false;
        loop {
            let k = i + ((j - i) >> 1);
            let mut diff = 0i32;
            let mut common = common_i.min(common_j);
            let w = &amongs[k];
            for pch in w.pattern.chars().skip(common) {
                if c + common == l {
                    diff = -1;
                    break;
                }
                diff = self.current[c + common] as i32 - pch as i32;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }
        loop {
            let w = &amongs[i];
            if common_i >= w.len() {
                self.cursor = c + w.len();
                match w.guard {
                    None => return w.outcome,
                    Some(guard) => {
                        let accepted = guard(self, ctx);
                        // whatever the guard did with the cursor is discarded
                        self.cursor = c + w.len();
                        if accepted {
                            return w.outcome;
                        }
                    }
                }
            }
            if w.backlink < 0 {
                return 0;
            }
            i = w.backlink as usize;
        }
    }

    /// Find the longest table entry matching leftward from the cursor.
    ///
    /// Mirror of [`find_among`](Self::find_among) over a reversed-order
    /// table, bounded by `limit_backward`, with the same guard-failure
    /// cursor behavior.
    pub fn find_among_b<C>(&mut self, amongs: &[Among<C>], ctx: &mut C) -> i32 {
        let mut i = 0usize;
        let mut j = amongs.len();
        let c = self.cursor;
        let lb = self.limit_backward;
        let mut common_i = 0usize;
        let mut common_j = 0usize;
        let mut first_key_inspected = false;
        loop {
            let k = i + ((j - i) >> 1);
            let mut diff = 0i32;
            let mut common = common_i.min(common_j);
            let w = &amongs[k];
            for pch in w.pattern.chars().rev().skip(common) {
                if c - common == lb {
                    diff = -1;
                    break;
                }
                diff = self.current[c - 1 - common] as i32 - pch as i32;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }
        loop {
            let w = &amongs[i];
            if common_i >= w.len() {
                self.cursor = c - w.len();
                match w.guard {
                    None => return w.outcome,
                    Some(guard) => {
                        let accepted = guard(self, ctx);
                        self.cursor = c - w.len();
                        if accepted {
                            return w.outcome;
                        }
                    }
                }
            }
            if w.backlink < 0 {
                return 0;
            }
            i = w.backlink as usize;
        }
    }
}

#[cfg(test)]
pub(crate) mod table_check {
    use super::Among;

    fn key<C>(a: &Among<C>, backward: bool) -> Vec<char> {
        if backward {
            a.pattern.chars().rev().collect()
        } else {
            a.pattern.chars().collect()
        }
    }

    /// Assert the sort order and backlink consistency an among table must
    /// satisfy for the binary search to be valid.
    pub(crate) fn assert_well_formed<C>(amongs: &[Among<C>], backward: bool) {
        let keys: Vec<Vec<char>> = amongs.iter().map(|a| key(a, backward)).collect();
        for w in keys.windows(2) {
            assert!(w[0] < w[1], "table not sorted: {:?} !< {:?}", w[0], w[1]);
        }
        for (i, a) in amongs.iter().enumerate() {
            let mut best: Option<usize> = None;
            for (j, kj) in keys.iter().enumerate() {
                if j != i
                    && kj.len() < keys[i].len()
                    && keys[i].starts_with(kj)
                    && best.map_or(true, |b| kj.len() > keys[b].len())
                {
                    best = Some(j);
                }
            }
            match best {
                None => assert!(a.backlink < 0, "entry {i} should have no backlink"),
                Some(j) => assert_eq!(a.backlink, j as i32, "entry {i} backlink"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(word: &str) -> StemContext {
        let mut env = StemContext::new();
        env.set_current(word);
        env
    }

    // Backward table over {"s", "es", "ies"}; comparison keys are the
    // reversed patterns: "s" < "se" < "sei".
    static PLURALS: &[Among<()>] = &[
        Among {
            pattern: "s",
            backlink: -1,
            outcome: 1,
            guard: None,
        },
        Among {
            pattern: "es",
            backlink: 0,
            outcome: 2,
            guard: None,
        },
        Among {
            pattern: "ies",
            backlink: 1,
            outcome: 3,
            guard: None,
        },
    ];

    #[test]
    fn plural_table_is_well_formed() {
        super::table_check::assert_well_formed(PLURALS, true);
    }

    #[test]
    fn backward_longest_match_wins() {
        let mut env = ctx("ponies");
        env.cursor = env.limit;
        assert_eq!(env.find_among_b(PLURALS, &mut ()), 3);
        assert_eq!(env.cursor, 3);
    }

    #[test]
    fn backlink_falls_back_to_shorter_entry() {
        let mut env = ctx("goes");
        env.cursor = env.limit;
        // "ies" misses at the third character; "es" wins via the chain
        assert_eq!(env.find_among_b(PLURALS, &mut ()), 2);
        assert_eq!(env.cursor, 2);
    }

    #[test]
    fn no_match_returns_zero_without_moving() {
        let mut env = ctx("ox");
        env.cursor = env.limit;
        assert_eq!(env.find_among_b(PLURALS, &mut ()), 0);
        assert_eq!(env.cursor, 2);
    }

    #[test]
    fn match_respects_limit_backward() {
        let mut env = ctx("ies");
        env.cursor = env.limit;
        env.limit_backward = 1;
        // only "es" fits between limit_backward and the cursor
        assert_eq!(env.find_among_b(PLURALS, &mut ()), 2);
        assert_eq!(env.cursor, 1);
    }

    // Forward table with an empty-pattern default entry, as the postlude
    // scanners use.
    static MARKS: &[Among<()>] = &[
        Among {
            pattern: "",
            backlink: -1,
            outcome: 9,
            guard: None,
        },
        Among {
            pattern: "I",
            backlink: 0,
            outcome: 1,
            guard: None,
        },
        Among {
            pattern: "U",
            backlink: 0,
            outcome: 2,
            guard: None,
        },
    ];

    #[test]
    fn forward_match_and_empty_default() {
        let mut env = ctx("Ua");
        assert_eq!(env.find_among(MARKS, &mut ()), 2);
        assert_eq!(env.cursor, 1);
        // 'a' matches nothing but the empty entry
        assert_eq!(env.find_among(MARKS, &mut ()), 9);
        assert_eq!(env.cursor, 1);
    }

    fn reject(_: &mut StemContext, hits: &mut Vec<i32>) -> bool {
        hits.push(2);
        false
    }

    fn accept(_: &mut StemContext, hits: &mut Vec<i32>) -> bool {
        hits.push(1);
        true
    }

    static GUARDED: &[Among<Vec<i32>>] = &[
        Among {
            pattern: "s",
            backlink: -1,
            outcome: 1,
            guard: Some(accept),
        },
        Among {
            pattern: "es",
            backlink: 0,
            outcome: 2,
            guard: Some(reject),
        },
    ];

    #[test]
    fn rejected_guard_leaves_cursor_advanced_and_chains() {
        let mut env = ctx("makes");
        env.cursor = env.limit;
        let mut hits = Vec::new();
        // "es" matches fully but its guard rejects; the chain falls back to
        // "s", which repositions the cursor to its own end.
        assert_eq!(env.find_among_b(GUARDED, &mut hits), 1);
        assert_eq!(hits, vec![2, 1]);
        assert_eq!(env.cursor, 4);
    }

    fn reject_all(_: &mut StemContext, _: &mut ()) -> bool {
        false
    }

    static ALL_REJECTED: &[Among<()>] = &[Among {
        pattern: "ed",
        backlink: -1,
        outcome: 1,
        guard: Some(reject_all),
    }];

    #[test]
    fn guard_failure_with_no_fallback_keeps_cursor_moved() {
        let mut env = ctx("walked");
        env.cursor = env.limit;
        assert_eq!(env.find_among_b(ALL_REJECTED, &mut ()), 0);
        // the cursor stays where the failed guard saw it
        assert_eq!(env.cursor, 4);
    }

    fn accept_after_scan(env: &mut StemContext, _: &mut ()) -> bool {
        env.cursor = env.limit_backward;
        true
    }

    fn reject_after_scan(env: &mut StemContext, _: &mut ()) -> bool {
        env.cursor = env.limit_backward;
        false
    }

    static SCANNING_ACCEPT: &[Among<()>] = &[Among {
        pattern: "ed",
        backlink: -1,
        outcome: 1,
        guard: Some(accept_after_scan),
    }];

    static SCANNING_REJECT: &[Among<()>] = &[Among {
        pattern: "ed",
        backlink: -1,
        outcome: 1,
        guard: Some(reject_after_scan),
    }];

    #[test]
    fn scanning_guard_cursor_is_reset_on_accept() {
        let mut env = ctx("walked");
        env.cursor = env.limit;
        assert_eq!(env.find_among_b(SCANNING_ACCEPT, &mut ()), 1);
        assert_eq!(env.cursor, 4);
    }

    #[test]
    fn scanning_guard_cursor_is_reset_on_reject() {
        let mut env = ctx("walked");
        env.cursor = env.limit;
        assert_eq!(env.find_among_b(SCANNING_REJECT, &mut ()), 0);
        assert_eq!(env.cursor, 4);
    }

    static SCANNING_FORWARD: &[Among<()>] = &[Among {
        pattern: "I",
        backlink: -1,
        outcome: 1,
        guard: Some(accept_after_scan),
    }];

    #[test]
    fn forward_scanning_guard_cursor_is_reset() {
        let mut env = ctx("Ia");
        assert_eq!(env.find_among(SCANNING_FORWARD, &mut ()), 1);
        assert_eq!(env.cursor, 1);
    }
}
