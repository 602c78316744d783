//! Property tests for the buffer primitives and the among matcher

use graupel_core::{Among, StemContext};
use proptest::prelude::*;

static SUFFIXES: &[Among<()>] = &[
    Among { pattern: "a", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ista", backlink: 0, outcome: 7, guard: None },
    Among { pattern: "e", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "mente", backlink: 2, outcome: 10, guard: None },
    Among { pattern: "amente", backlink: 3, outcome: 11, guard: None },
    Among { pattern: "ción", backlink: -1, outcome: 9, guard: None },
    Among { pattern: "oso", backlink: -1, outcome: 8, guard: None },
    Among { pattern: "s", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "as", backlink: 7, outcome: 5, guard: None },
    Among { pattern: "es", backlink: 7, outcome: 4, guard: None },
    Among { pattern: "os", backlink: 7, outcome: 6, guard: None },
];

static PREFIXES: &[Among<()>] = &[
    Among { pattern: "a", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ab", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "abc", backlink: 1, outcome: 3, guard: None },
    Among { pattern: "b", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ba", backlink: 3, outcome: 5, guard: None },
    Among { pattern: "ca", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "cab", backlink: 5, outcome: 7, guard: None },
];

/// Longest suffix of `current[..cursor]` matching a table pattern.
fn naive_longest_suffix(env: &StemContext, amongs: &[Among<()>]) -> (i32, usize) {
    let mut best: Option<&Among<()>> = None;
    for a in amongs {
        let len = a.pattern.chars().count();
        if env.cursor < env.limit_backward + len {
            continue;
        }
        let tail: String = env.current[env.cursor - len..env.cursor].iter().collect();
        if tail == a.pattern
            && best.map_or(true, |b| len > b.pattern.chars().count())
        {
            best = Some(a);
        }
    }
    match best {
        Some(a) => (a.outcome, env.cursor - a.pattern.chars().count()),
        None => (0, env.cursor),
    }
}

/// Longest prefix of `current[cursor..limit]` matching a table pattern.
fn naive_longest_prefix(env: &StemContext, amongs: &[Among<()>]) -> (i32, usize) {
    let mut best: Option<&Among<()>> = None;
    for a in amongs {
        let len = a.pattern.chars().count();
        if env.cursor + len > env.limit {
            continue;
        }
        let head: String = env.current[env.cursor..env.cursor + len].iter().collect();
        if head == a.pattern
            && best.map_or(true, |b| len > b.pattern.chars().count())
        {
            best = Some(a);
        }
    }
    match best {
        Some(a) => (a.outcome, env.cursor + a.pattern.chars().count()),
        None => (0, env.cursor),
    }
}

proptest! {
    #[test]
    fn replace_preserves_slice_invariant(
        word in "[a-zñéíó]{1,16}",
        a in 0usize..16,
        b in 0usize..16,
        replacement in "[a-z]{0,6}",
    ) {
        let mut env = StemContext::new();
        env.set_current(&word);
        let len = env.limit;
        let bra = a.min(b).min(len);
        let ket = a.max(b).min(len);
        env.bra = bra;
        env.ket = ket;
        prop_assert!(env.slice_from(&replacement));
        prop_assert!(env.bra <= env.ket);
        prop_assert!(env.ket <= env.limit);
        prop_assert!(env.limit <= env.current.len());
        prop_assert!(env.cursor <= env.limit);
    }

    #[test]
    fn insert_preserves_slice_invariant(
        word in "[a-z]{1,12}",
        at in 0usize..12,
        s in "[a-z]{0,4}",
    ) {
        let mut env = StemContext::new();
        env.set_current(&word);
        let at = at.min(env.limit);
        env.bra = at;
        env.ket = at;
        env.insert(at, at, &s);
        prop_assert!(env.bra <= env.ket);
        prop_assert!(env.ket <= env.limit);
        prop_assert!(env.limit <= env.current.len());
    }

    #[test]
    fn find_among_b_matches_naive_scan(word in "[aeos]{0,10}(|a|e|s|es|as|os|ista|oso|ción|mente|amente)") {
        let mut env = StemContext::new();
        env.set_current(&word);
        env.cursor = env.limit;
        let (want_outcome, want_cursor) = naive_longest_suffix(&env, SUFFIXES);
        let got = env.find_among_b(SUFFIXES, &mut ());
        prop_assert_eq!(got, want_outcome);
        if got != 0 {
            prop_assert_eq!(env.cursor, want_cursor);
        }
    }

    #[test]
    fn find_among_matches_naive_scan(word in "[abc]{0,8}") {
        let mut env = StemContext::new();
        env.set_current(&word);
        let (want_outcome, want_cursor) = naive_longest_prefix(&env, PREFIXES);
        let got = env.find_among(PREFIXES, &mut ());
        prop_assert_eq!(got, want_outcome);
        if got != 0 {
            prop_assert_eq!(env.cursor, want_cursor);
        }
    }

    #[test]
    fn programs_never_panic_and_keep_invariants(word in "\\PC{0,20}") {
        let programs: [fn(&mut StemContext) -> bool; 4] = [
            graupel_core::language::romanian::stem,
            graupel_core::language::russian::stem,
            graupel_core::language::spanish::stem,
            graupel_core::language::turkish::stem,
        ];
        for program in programs {
            let mut env = StemContext::new();
            env.set_current(&word);
            program(&mut env);
            prop_assert!(env.limit <= env.current.len());
            prop_assert!(env.cursor <= env.limit);
        }
    }
}
