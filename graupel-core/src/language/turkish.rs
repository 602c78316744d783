//! Turkish rule program
//!
//! Purely suffix-stripping, entirely in backward mode. Every suffix class
//! has a recogniser (`mark_*`) that checks vowel harmony against the last
//! stem vowel and handles the optional buffer letters (`y`, `n`, `s`, and
//! the high vowels written `U`). The nominal verb group runs first; a bare
//! `lAr` there stops further stemming. Words with fewer than two vowels
//! are left alone.

use crate::among::Among;
use crate::context::{Grouping, StemContext};

struct Markers {
    continue_stemming: bool,
}

type Mark = fn(&mut StemContext, &mut Markers) -> bool;

static G_VOWEL: Grouping = Grouping { min: 97, max: 305, mask: &[17, 65, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 32, 8, 0, 0, 0, 0, 0, 0, 1] };
static G_U: Grouping = Grouping { min: 105, max: 305, mask: &[1, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0, 0, 0, 1] };
static G_VOWEL1: Grouping = Grouping { min: 97, max: 305, mask: &[1, 64, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1] };
static G_VOWEL2: Grouping = Grouping { min: 101, max: 252, mask: &[17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 130] };
static G_VOWEL3: Grouping = Grouping { min: 97, max: 305, mask: &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1] };
static G_VOWEL4: Grouping = Grouping { min: 101, max: 105, mask: &[17] };
static G_VOWEL5: Grouping = Grouping { min: 111, max: 117, mask: &[65] };
static G_VOWEL6: Grouping = Grouping { min: 246, max: 252, mask: &[65] };

static A_POSSESSIVE: &[Among<Markers>] = &[
    Among { pattern: "m", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "n", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "miz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "niz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "muz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nuz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "müz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nüz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "mız", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nız", backlink: -1, outcome: 1, guard: None },
];

static A_LARI: &[Among<Markers>] = &[
    Among { pattern: "leri", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ları", backlink: -1, outcome: 1, guard: None },
];

static A_NU: &[Among<Markers>] = &[
    Among { pattern: "ni", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nu", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nü", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nı", backlink: -1, outcome: 1, guard: None },
];

static A_NUN: &[Among<Markers>] = &[
    Among { pattern: "in", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "un", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ün", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ın", backlink: -1, outcome: 1, guard: None },
];

static A_YA: &[Among<Markers>] = &[
    Among { pattern: "a", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "e", backlink: -1, outcome: 1, guard: None },
];

static A_NA: &[Among<Markers>] = &[
    Among { pattern: "na", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ne", backlink: -1, outcome: 1, guard: None },
];

static A_DA: &[Among<Markers>] = &[
    Among { pattern: "da", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ta", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "de", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "te", backlink: -1, outcome: 1, guard: None },
];

static A_NDA: &[Among<Markers>] = &[
    Among { pattern: "nda", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nde", backlink: -1, outcome: 1, guard: None },
];

static A_DAN: &[Among<Markers>] = &[
    Among { pattern: "dan", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tan", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "den", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ten", backlink: -1, outcome: 1, guard: None },
];

static A_NDAN: &[Among<Markers>] = &[
    Among { pattern: "ndan", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nden", backlink: -1, outcome: 1, guard: None },
];

static A_YLA: &[Among<Markers>] = &[
    Among { pattern: "la", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "le", backlink: -1, outcome: 1, guard: None },
];

static A_NCA: &[Among<Markers>] = &[
    Among { pattern: "ca", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ce", backlink: -1, outcome: 1, guard: None },
];

static A_YUM: &[Among<Markers>] = &[
    Among { pattern: "im", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "um", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "üm", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ım", backlink: -1, outcome: 1, guard: None },
];

static A_SUN: &[Among<Markers>] = &[
    Among { pattern: "sin", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sun", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sün", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sın", backlink: -1, outcome: 1, guard: None },
];

static A_YUZ: &[Among<Markers>] = &[
    Among { pattern: "iz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "uz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "üz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ız", backlink: -1, outcome: 1, guard: None },
];

static A_SUNUZ: &[Among<Markers>] = &[
    Among { pattern: "siniz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sunuz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sünüz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sınız", backlink: -1, outcome: 1, guard: None },
];

static A_LAR: &[Among<Markers>] = &[
    Among { pattern: "lar", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ler", backlink: -1, outcome: 1, guard: None },
];

static A_NUZ: &[Among<Markers>] = &[
    Among { pattern: "niz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nuz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nüz", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "nız", backlink: -1, outcome: 1, guard: None },
];

static A_DUR: &[Among<Markers>] = &[
    Among { pattern: "dir", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tir", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dur", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tur", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dür", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tür", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dır", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tır", backlink: -1, outcome: 1, guard: None },
];

static A_CASINA: &[Among<Markers>] = &[
    Among { pattern: "casına", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "cesine", backlink: -1, outcome: 1, guard: None },
];

static A_YDU: &[Among<Markers>] = &[
    Among { pattern: "di", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ti", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dik", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tik", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "duk", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tuk", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dük", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tük", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dık", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tık", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dim", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tim", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dum", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tum", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "düm", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tüm", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dım", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tım", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "din", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tin", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dun", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tun", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dün", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tün", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dın", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tın", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "du", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tu", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dü", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tü", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "dı", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "tı", backlink: -1, outcome: 1, guard: None },
];

static A_YSA: &[Among<Markers>] = &[
    Among { pattern: "sa", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "se", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sak", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sek", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sam", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sem", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "san", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "sen", backlink: -1, outcome: 1, guard: None },
];

static A_YMUS: &[Among<Markers>] = &[
    Among { pattern: "miş", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "muş", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "müş", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "mış", backlink: -1, outcome: 1, guard: None },
];

static A_DEVOICE: &[Among<Markers>] = &[
    Among { pattern: "b", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "c", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "d", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ğ", backlink: -1, outcome: 1, guard: None },
];

/// Backward `goto`: stop with the next grouping character still unconsumed.
fn goto_b(env: &mut StemContext, g: &Grouping) -> bool {
    loop {
        let save = env.cursor;
        if env.in_grouping_b(g) {
            env.cursor = save;
            return true;
        }
        env.cursor = save;
        if env.cursor <= env.limit_backward {
            return false;
        }
        env.cursor -= 1;
    }
}

/// The suffix vowel (just before the cursor) must harmonise with the last
/// vowel of the remaining stem. Never moves the cursor.
fn check_vowel_harmony(env: &mut StemContext) -> bool {
    let dist = env.limit - env.cursor;
    let ok = harmony_inner(env);
    env.cursor = env.limit - dist;
    ok
}

fn harmony_inner(env: &mut StemContext) -> bool {
    if !goto_b(env, &G_VOWEL) {
        return false;
    }
    let pairs: &[(&str, &Grouping)] = &[
        ("a", &G_VOWEL1),
        ("e", &G_VOWEL2),
        ("ı", &G_VOWEL3),
        ("i", &G_VOWEL4),
        ("o", &G_VOWEL5),
        ("ö", &G_VOWEL6),
        ("u", &G_VOWEL5),
        ("ü", &G_VOWEL6),
    ];
    for (letter, grp) in pairs {
        let save = env.cursor;
        if env.eq_s_b(letter) && goto_b(env, grp) {
            return true;
        }
        env.cursor = save;
    }
    false
}

/// An optional buffer consonant is valid when present before a vowel, or
/// absent with the next character a vowel. Never moves the cursor.
fn opt_consonant(env: &mut StemContext, letter: &str) -> bool {
    let save = env.cursor;
    if env.eq_s_b(letter) {
        let after = env.cursor;
        if env.in_grouping_b(&G_VOWEL) {
            env.cursor = after;
            return true;
        }
    }
    env.cursor = save;
    if env.eq_s_b(letter) {
        env.cursor = save;
        return false;
    }
    env.cursor = save;
    if env.cursor <= env.limit_backward {
        return false;
    }
    env.cursor -= 1;
    let ok = env.in_grouping_b(&G_VOWEL);
    env.cursor = save;
    ok
}

/// Same shape as [`opt_consonant`] for the optional high vowel, which must
/// sit next to a non-vowel.
fn opt_u(env: &mut StemContext) -> bool {
    let save = env.cursor;
    if env.in_grouping_b(&G_U) {
        let after = env.cursor;
        if env.out_grouping_b(&G_VOWEL) {
            env.cursor = after;
            return true;
        }
    }
    env.cursor = save;
    if env.in_grouping_b(&G_U) {
        env.cursor = save;
        return false;
    }
    env.cursor = save;
    if env.cursor <= env.limit_backward {
        return false;
    }
    env.cursor -= 1;
    let ok = env.out_grouping_b(&G_VOWEL);
    env.cursor = save;
    ok
}

// Suffix recognisers. Each leaves the cursor at the start of the matched
// suffix on success.

fn mark_possessives(env: &mut StemContext, m: &mut Markers) -> bool {
    env.find_among_b(A_POSSESSIVE, m) != 0 && opt_u(env)
}

fn mark_su(env: &mut StemContext, _m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.in_grouping_b(&G_U) && opt_consonant(env, "s")
}

fn mark_lari(env: &mut StemContext, m: &mut Markers) -> bool {
    env.find_among_b(A_LARI, m) != 0
}

fn mark_yu(env: &mut StemContext, _m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.in_grouping_b(&G_U) && opt_consonant(env, "y")
}

fn mark_nu(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NU, m) != 0
}

fn mark_nun(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NUN, m) != 0 && opt_consonant(env, "n")
}

fn mark_ya(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YA, m) != 0 && opt_consonant(env, "y")
}

fn mark_na(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NA, m) != 0
}

fn mark_da(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_DA, m) != 0
}

fn mark_nda(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NDA, m) != 0
}

fn mark_dan(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_DAN, m) != 0
}

fn mark_ndan(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NDAN, m) != 0
}

fn mark_yla(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YLA, m) != 0 && opt_consonant(env, "y")
}

fn mark_ki(env: &mut StemContext, _m: &mut Markers) -> bool {
    env.eq_s_b("ki")
}

fn mark_nca(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NCA, m) != 0 && opt_consonant(env, "n")
}

fn mark_yum(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YUM, m) != 0 && opt_consonant(env, "y")
}

fn mark_sun(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_SUN, m) != 0
}

fn mark_yuz(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YUZ, m) != 0 && opt_consonant(env, "y")
}

fn mark_sunuz(env: &mut StemContext, m: &mut Markers) -> bool {
    env.find_among_b(A_SUNUZ, m) != 0
}

fn mark_lar(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_LAR, m) != 0
}

fn mark_nuz(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_NUZ, m) != 0
}

fn mark_dur(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_DUR, m) != 0
}

fn mark_casina(env: &mut StemContext, m: &mut Markers) -> bool {
    env.find_among_b(A_CASINA, m) != 0
}

fn mark_ydu(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YDU, m) != 0 && opt_consonant(env, "y")
}

fn mark_ysa(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YSA, m) != 0 && opt_consonant(env, "y")
}

fn mark_ymus(env: &mut StemContext, m: &mut Markers) -> bool {
    check_vowel_harmony(env) && env.find_among_b(A_YMUS, m) != 0 && opt_consonant(env, "y")
}

fn mark_ken(env: &mut StemContext, _m: &mut Markers) -> bool {
    env.eq_s_b("ken") && opt_consonant(env, "y")
}

/// First recogniser that succeeds wins; each attempt starts from the same
/// distance behind the limit.
fn alt(env: &mut StemContext, m: &mut Markers, dist: usize, marks: &[Mark]) -> bool {
    for mark in marks {
        env.cursor = env.limit - dist;
        if mark(env, m) {
            return true;
        }
    }
    false
}

fn stem_nominal_verb_suffixes(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    m.continue_stemming = true;
    let d1 = env.limit - env.cursor;
    loop {
        if alt(env, m, d1, &[mark_ymus, mark_ydu, mark_ysa, mark_ken]) {
            break;
        }
        env.cursor = env.limit - d1;
        if mark_casina(env, m) {
            let d2 = env.limit - env.cursor;
            if !alt(
                env,
                m,
                d2,
                &[mark_sunuz, mark_lar, mark_yum, mark_sun, mark_yuz],
            ) {
                env.cursor = env.limit - d2;
            }
            if mark_ymus(env, m) {
                break;
            }
        }
        env.cursor = env.limit - d1;
        if mark_lar(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            let d2 = env.limit - env.cursor;
            env.ket = env.cursor;
            if !alt(env, m, d2, &[mark_dur, mark_ydu, mark_ysa, mark_ymus]) {
                env.cursor = env.limit - d2;
            }
            // a bare plural ends the pass; noun suffixes stay untouched
            m.continue_stemming = false;
            break;
        }
        env.cursor = env.limit - d1;
        if mark_nuz(env, m) {
            let d2 = env.limit - env.cursor;
            if alt(env, m, d2, &[mark_ydu, mark_ysa]) {
                break;
            }
        }
        env.cursor = env.limit - d1;
        if alt(env, m, d1, &[mark_sunuz, mark_yuz, mark_sun, mark_yum]) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            let d2 = env.limit - env.cursor;
            env.ket = env.cursor;
            if !mark_ymus(env, m) {
                env.cursor = env.limit - d2;
            }
            break;
        }
        env.cursor = env.limit - d1;
        if mark_dur(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            let d2 = env.limit - env.cursor;
            env.ket = env.cursor;
            let d3 = env.limit - env.cursor;
            if !alt(
                env,
                m,
                d3,
                &[mark_sunuz, mark_lar, mark_yum, mark_sun, mark_yuz],
            ) {
                env.cursor = env.limit - d3;
            }
            if !mark_ymus(env, m) {
                env.cursor = env.limit - d2;
            }
            break;
        }
        return false;
    }
    env.bra = env.cursor;
    env.slice_del()
}

/// `try([lAr] delete chain-before-ki)`.
fn try_lar_chain(env: &mut StemContext, m: &mut Markers) -> bool {
    let dist = env.limit - env.cursor;
    env.ket = env.cursor;
    if mark_lar(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        if !stem_suffix_chain_before_ki(env, m) {
            env.cursor = env.limit - d2;
        }
    } else {
        env.cursor = env.limit - dist;
    }
    true
}

/// Strip the locative/genitive material that may pile up in front of a
/// relativising `ki`, recursing so `evdekilerin`-style stacks collapse in
/// one pass. `ket` stays at the original word end the whole time.
fn stem_suffix_chain_before_ki(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if !mark_ki(env, m) {
        return false;
    }
    let d1 = env.limit - env.cursor;
    if mark_da(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_lar(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            let d3 = env.limit - env.cursor;
            if !stem_suffix_chain_before_ki(env, m) {
                env.cursor = env.limit - d3;
            }
        } else {
            env.cursor = env.limit - d2;
            env.ket = env.cursor;
            if mark_possessives(env, m) {
                env.bra = env.cursor;
                if !env.slice_del() {
                    return false;
                }
                if !try_lar_chain(env, m) {
                    return false;
                }
            } else {
                env.cursor = env.limit - d2;
            }
        }
        return true;
    }
    env.cursor = env.limit - d1;
    if mark_nun(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_lari(env, m) {
            env.bra = env.cursor;
            return env.slice_del();
        }
        env.cursor = env.limit - d2;
        env.ket = env.cursor;
        let possessive = mark_possessives(env, m) || {
            env.cursor = env.limit - d2;
            mark_su(env, m)
        };
        if possessive {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            if !try_lar_chain(env, m) {
                return false;
            }
            return true;
        }
        env.cursor = env.limit - d2;
        if !stem_suffix_chain_before_ki(env, m) {
            env.cursor = env.limit - d2;
        }
        return true;
    }
    env.cursor = env.limit - d1;
    if mark_nda(env, m) {
        let d2 = env.limit - env.cursor;
        if mark_lari(env, m) {
            env.bra = env.cursor;
            return env.slice_del();
        }
        env.cursor = env.limit - d2;
        if mark_su(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            return try_lar_chain(env, m);
        }
        env.cursor = env.limit - d2;
        return stem_suffix_chain_before_ki(env, m);
    }
    false
}

fn stem_noun_suffixes(env: &mut StemContext, m: &mut Markers) -> bool {
    let d1 = env.limit - env.cursor;
    env.ket = env.cursor;
    if mark_lar(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        if !stem_suffix_chain_before_ki(env, m) {
            env.cursor = env.limit - d2;
        }
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if mark_nca(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_lari(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
        } else {
            env.cursor = env.limit - d2;
            env.ket = env.cursor;
            let possessive = mark_possessives(env, m) || {
                env.cursor = env.limit - d2;
                mark_su(env, m)
            };
            if possessive {
                env.bra = env.cursor;
                if !env.slice_del() {
                    return false;
                }
                if !try_lar_chain(env, m) {
                    return false;
                }
            } else {
                env.cursor = env.limit - d2;
                env.ket = env.cursor;
                if mark_lar(env, m) {
                    env.bra = env.cursor;
                    if !env.slice_del() {
                        return false;
                    }
                    if !stem_suffix_chain_before_ki(env, m) {
                        env.cursor = env.limit;
                    }
                } else {
                    env.cursor = env.limit - d2;
                }
            }
        }
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    let locative = mark_nda(env, m) || {
        env.cursor = env.limit - d1;
        mark_na(env, m)
    };
    if locative {
        let d2 = env.limit - env.cursor;
        if mark_lari(env, m) {
            env.bra = env.cursor;
            return env.slice_del();
        }
        env.cursor = env.limit - d2;
        if mark_su(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            return try_lar_chain(env, m);
        }
        env.cursor = env.limit - d2;
        if stem_suffix_chain_before_ki(env, m) {
            return true;
        }
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    let ablative = mark_ndan(env, m) || {
        env.cursor = env.limit - d1;
        mark_nu(env, m)
    };
    if ablative {
        let d2 = env.limit - env.cursor;
        if mark_su(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            return try_lar_chain(env, m);
        }
        env.cursor = env.limit - d2;
        if mark_lari(env, m) {
            env.bra = env.cursor;
            return env.slice_del();
        }
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if mark_dan(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_possessives(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            if !try_lar_chain(env, m) {
                return false;
            }
        } else {
            env.cursor = env.limit - d2;
            env.ket = env.cursor;
            if mark_lar(env, m) {
                env.bra = env.cursor;
                if !env.slice_del() {
                    return false;
                }
                let d3 = env.limit - env.cursor;
                if !stem_suffix_chain_before_ki(env, m) {
                    env.cursor = env.limit - d3;
                }
            } else {
                env.cursor = env.limit - d2;
                if !stem_suffix_chain_before_ki(env, m) {
                    env.cursor = env.limit - d2;
                }
            }
        }
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    let genitive = mark_nun(env, m) || {
        env.cursor = env.limit - d1;
        mark_yla(env, m)
    };
    if genitive {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_lar(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            if !stem_suffix_chain_before_ki(env, m) {
                env.cursor = env.limit - d2;
            }
        } else {
            env.cursor = env.limit - d2;
            env.ket = env.cursor;
            let possessive = mark_possessives(env, m) || {
                env.cursor = env.limit - d2;
                mark_su(env, m)
            };
            if possessive {
                env.bra = env.cursor;
                if !env.slice_del() {
                    return false;
                }
                if !try_lar_chain(env, m) {
                    return false;
                }
            } else {
                env.cursor = env.limit - d2;
                if !stem_suffix_chain_before_ki(env, m) {
                    env.cursor = env.limit - d2;
                }
            }
        }
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if mark_lari(env, m) {
        env.bra = env.cursor;
        return env.slice_del();
    }
    env.cursor = env.limit - d1;
    if stem_suffix_chain_before_ki(env, m) {
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if mark_su(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        return try_lar_chain(env, m);
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if alt(env, m, d1, &[mark_da, mark_yu, mark_ya]) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        let d2 = env.limit - env.cursor;
        env.ket = env.cursor;
        if mark_possessives(env, m) {
            env.bra = env.cursor;
            if !env.slice_del() {
                return false;
            }
            if !try_lar_chain(env, m) {
                return false;
            }
        } else {
            env.cursor = env.limit - d2;
            env.ket = env.cursor;
            if mark_lar(env, m) {
                env.bra = env.cursor;
                if !env.slice_del() {
                    return false;
                }
                let d3 = env.limit - env.cursor;
                if !stem_suffix_chain_before_ki(env, m) {
                    env.cursor = env.limit - d3;
                }
            } else {
                env.cursor = env.limit - d2;
            }
        }
        return true;
    }
    env.cursor = env.limit - d1;
    env.ket = env.cursor;
    if mark_possessives(env, m) {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
        return try_lar_chain(env, m);
    }
    false
}

/// Words need at least two vowels before any suffix comes off.
fn more_than_one_syllable_word(env: &mut StemContext) -> bool {
    let save = env.cursor;
    let mut count = 0;
    while count < 2 {
        loop {
            if env.cursor >= env.limit {
                env.cursor = save;
                return false;
            }
            if env.in_grouping(&G_VOWEL) {
                break;
            }
            env.cursor += 1;
        }
        count += 1;
    }
    env.cursor = save;
    true
}

/// After a stem ending in `d` or `g`, append the high vowel that harmonises
/// with the last stem vowel (kitaplığı ends up as kitaplık via ğ→k after
/// this runs).
fn append_u(env: &mut StemContext) -> bool {
    let dist = env.limit - env.cursor;
    let save = env.cursor;
    let mut ends_dg = env.eq_s_b("d");
    if !ends_dg {
        env.cursor = save;
        ends_dg = env.eq_s_b("g");
    }
    env.cursor = env.limit - dist;
    if !ends_dg {
        return false;
    }
    let classes: &[(&[&str], &str)] = &[
        (&["a", "ı"], "ı"),
        (&["e", "i"], "i"),
        (&["o", "u"], "u"),
        (&["ö", "ü"], "ü"),
    ];
    for (letters, u) in classes {
        let d2 = env.limit - env.cursor;
        if goto_b(env, &G_VOWEL) {
            let mut matched = false;
            for letter in *letters {
                let s2 = env.cursor;
                if env.eq_s_b(letter) {
                    matched = true;
                    env.cursor = s2;
                    break;
                }
                env.cursor = s2;
            }
            env.cursor = env.limit - d2;
            if matched {
                env.insert(env.cursor, env.cursor, u);
                return true;
            }
        }
        env.cursor = env.limit - d2;
    }
    false
}

/// Undo final-consonant voicing: b/c/d/ğ back to p/ç/t/k.
fn post_process_last_consonants(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_DEVOICE, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    let rep = match env.current[env.bra] {
        'b' => "p",
        'c' => "ç",
        'd' => "t",
        _ => "k",
    };
    env.slice_from(rep)
}

/// Run the Turkish program over the word held by `env`.
pub fn stem(env: &mut StemContext) -> bool {
    if !more_than_one_syllable_word(env) {
        return false;
    }
    let mut m = Markers {
        continue_stemming: true,
    };
    env.limit_backward = env.cursor;
    env.cursor = env.limit;
    stem_nominal_verb_suffixes(env, &mut m);
    if !m.continue_stemming {
        env.cursor = env.limit_backward;
        return false;
    }
    env.cursor = env.limit;
    stem_noun_suffixes(env, &mut m);
    env.cursor = env.limit;
    append_u(env);
    env.cursor = env.limit;
    post_process_last_consonants(env, &mut m);
    env.cursor = env.limit_backward;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::among::table_check::assert_well_formed;

    fn stem_word(word: &str) -> String {
        let mut env = StemContext::new();
        env.set_current(word);
        stem(&mut env);
        env.get_current()
    }

    #[test]
    fn tables_are_well_formed() {
        for table in [
            A_POSSESSIVE,
            A_LARI,
            A_NU,
            A_NUN,
            A_YA,
            A_NA,
            A_DA,
            A_NDA,
            A_DAN,
            A_NDAN,
            A_YLA,
            A_NCA,
            A_YUM,
            A_SUN,
            A_YUZ,
            A_SUNUZ,
            A_LAR,
            A_NUZ,
            A_DUR,
            A_CASINA,
            A_YDU,
            A_YSA,
            A_YMUS,
            A_DEVOICE,
        ] {
            assert_well_formed(table, true);
        }
    }

    #[test]
    fn plural_and_case_endings() {
        assert_eq!(stem_word("kitaplar"), "kitap");
        assert_eq!(stem_word("kitabı"), "kitap");
        assert_eq!(stem_word("evde"), "ev");
        assert_eq!(stem_word("sokaklarda"), "sokak");
        assert_eq!(stem_word("koyunlardan"), "koyun");
        assert_eq!(stem_word("gözlerimde"), "göz");
    }

    #[test]
    fn possessive_chains() {
        assert_eq!(stem_word("arabası"), "araba");
        assert_eq!(stem_word("arabasında"), "araba");
        assert_eq!(stem_word("arabalarında"), "araba");
        assert_eq!(stem_word("çocuklarımın"), "çocuk");
        assert_eq!(stem_word("kedileriyle"), "kedi");
    }

    #[test]
    fn ki_chains() {
        assert_eq!(stem_word("evdeki"), "ev");
        assert_eq!(stem_word("türkiyedeki"), "türkiye");
    }

    #[test]
    fn nominal_verb_endings() {
        assert_eq!(stem_word("güzeldir"), "güzel");
        assert_eq!(stem_word("yazmışsınız"), "yaz");
        assert_eq!(stem_word("geldiysen"), "geldi");
        assert_eq!(stem_word("iyiyim"), "iy");
    }

    #[test]
    fn devoicing_and_append_u() {
        assert_eq!(stem_word("kitaplığı"), "kitaplık");
    }

    #[test]
    fn single_syllable_words_survive() {
        assert_eq!(stem_word("ev"), "ev");
        assert_eq!(stem_word("bu"), "bu");
        assert_eq!(stem_word(""), "");
    }
}
