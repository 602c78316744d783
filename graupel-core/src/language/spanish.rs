//! Spanish rule program
//!
//! Backward passes: attached pronouns (two-stage match that re-brackets to
//! keep the verb ending), standard suffixes, then y-verb or general verb
//! endings inside the pV region, and residual single-letter endings. The
//! postlude removes acute accents.

use crate::among::Among;
use crate::context::{Grouping, StemContext};

use super::{gopast_in, gopast_out};

struct Markers {
    pv: usize,
    p1: usize,
    p2: usize,
}

static G_V: Grouping = Grouping { min: 97, max: 252, mask: &[17, 65, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 17, 4, 10] };

static A_POSTLUDE: &[Among<Markers>] = &[
    Among { pattern: "", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "á", backlink: 0, outcome: 1, guard: None },
    Among { pattern: "é", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "í", backlink: 0, outcome: 3, guard: None },
    Among { pattern: "ó", backlink: 0, outcome: 4, guard: None },
    Among { pattern: "ú", backlink: 0, outcome: 5, guard: None },
];

static A_PRONOUN: &[Among<Markers>] = &[
    Among { pattern: "la", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "sela", backlink: 0, outcome: -1, guard: None },
    Among { pattern: "le", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "me", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "se", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "lo", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "selo", backlink: 5, outcome: -1, guard: None },
    Among { pattern: "las", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "selas", backlink: 7, outcome: -1, guard: None },
    Among { pattern: "les", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "los", backlink: -1, outcome: -1, guard: None },
    Among { pattern: "selos", backlink: 10, outcome: -1, guard: None },
    Among { pattern: "nos", backlink: -1, outcome: -1, guard: None },
];

static A_PRONOUN_STEM: &[Among<Markers>] = &[
    Among { pattern: "ando", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "iendo", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "yendo", backlink: -1, outcome: 7, guard: None },
    Among { pattern: "ándo", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iéndo", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ar", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "er", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ir", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ár", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ér", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ír", backlink: -1, outcome: 5, guard: None },
];

static A_STANDARD: &[Among<Markers>] = &[
    Among { pattern: "ica", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ancia", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "encia", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "adora", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "osa", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ista", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "iva", backlink: -1, outcome: 9, guard: None },
    Among { pattern: "anza", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "logía", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "idad", backlink: -1, outcome: 8, guard: None },
    Among { pattern: "able", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ible", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ante", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "mente", backlink: -1, outcome: 7, guard: None },
    Among { pattern: "amente", backlink: 13, outcome: 6, guard: None },
    Among { pattern: "ación", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ución", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ico", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ismo", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "oso", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "amiento", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "imiento", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivo", backlink: -1, outcome: 9, guard: None },
    Among { pattern: "ador", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "icas", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ancias", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "encias", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "adoras", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "osas", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "istas", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivas", backlink: -1, outcome: 9, guard: None },
    Among { pattern: "anzas", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "logías", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "idades", backlink: -1, outcome: 8, guard: None },
    Among { pattern: "ables", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibles", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "aciones", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "uciones", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "adores", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "antes", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "icos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ismos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "osos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "amientos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "imientos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivos", backlink: -1, outcome: 9, guard: None },
];

static A_Y_VERB: &[Among<Markers>] = &[
    Among { pattern: "ya", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ye", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yan", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yen", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yeron", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yendo", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yo", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yas", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yes", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yais", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yamos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "yó", backlink: -1, outcome: 1, guard: None },
];

static A_VERB: &[Among<Markers>] = &[
    Among { pattern: "aba", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ada", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ida", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ara", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iera", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ía", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aría", backlink: 5, outcome: 2, guard: None },
    Among { pattern: "ería", backlink: 5, outcome: 2, guard: None },
    Among { pattern: "iría", backlink: 5, outcome: 2, guard: None },
    Among { pattern: "ad", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ed", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "id", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ase", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iese", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aste", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iste", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "an", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aban", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "aran", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "ieran", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "ían", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "arían", backlink: 20, outcome: 2, guard: None },
    Among { pattern: "erían", backlink: 20, outcome: 2, guard: None },
    Among { pattern: "irían", backlink: 20, outcome: 2, guard: None },
    Among { pattern: "en", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "asen", backlink: 24, outcome: 2, guard: None },
    Among { pattern: "iesen", backlink: 24, outcome: 2, guard: None },
    Among { pattern: "aron", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ieron", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "arán", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "erán", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "irán", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ado", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ido", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ando", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iendo", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ar", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "er", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ir", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "as", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "abas", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "adas", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "idas", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "aras", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "ieras", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "ías", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "arías", backlink: 45, outcome: 2, guard: None },
    Among { pattern: "erías", backlink: 45, outcome: 2, guard: None },
    Among { pattern: "irías", backlink: 45, outcome: 2, guard: None },
    Among { pattern: "es", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ases", backlink: 49, outcome: 2, guard: None },
    Among { pattern: "ieses", backlink: 49, outcome: 2, guard: None },
    Among { pattern: "abais", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "arais", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ierais", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "íais", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aríais", backlink: 55, outcome: 2, guard: None },
    Among { pattern: "eríais", backlink: 55, outcome: 2, guard: None },
    Among { pattern: "iríais", backlink: 55, outcome: 2, guard: None },
    Among { pattern: "aseis", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ieseis", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "asteis", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "isteis", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "áis", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "éis", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "aréis", backlink: 64, outcome: 2, guard: None },
    Among { pattern: "eréis", backlink: 64, outcome: 2, guard: None },
    Among { pattern: "iréis", backlink: 64, outcome: 2, guard: None },
    Among { pattern: "ados", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "idos", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "amos", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ábamos", backlink: 70, outcome: 2, guard: None },
    Among { pattern: "áramos", backlink: 70, outcome: 2, guard: None },
    Among { pattern: "iéramos", backlink: 70, outcome: 2, guard: None },
    Among { pattern: "íamos", backlink: 70, outcome: 2, guard: None },
    Among { pattern: "aríamos", backlink: 74, outcome: 2, guard: None },
    Among { pattern: "eríamos", backlink: 74, outcome: 2, guard: None },
    Among { pattern: "iríamos", backlink: 74, outcome: 2, guard: None },
    Among { pattern: "emos", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "aremos", backlink: 78, outcome: 2, guard: None },
    Among { pattern: "eremos", backlink: 78, outcome: 2, guard: None },
    Among { pattern: "iremos", backlink: 78, outcome: 2, guard: None },
    Among { pattern: "ásemos", backlink: 78, outcome: 2, guard: None },
    Among { pattern: "iésemos", backlink: 78, outcome: 2, guard: None },
    Among { pattern: "imos", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "arás", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "erás", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "irás", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ís", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ará", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "erá", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "irá", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aré", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "eré", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iré", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ió", backlink: -1, outcome: 2, guard: None },
];

static A_RESIDUAL: &[Among<Markers>] = &[
    Among { pattern: "a", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "e", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "o", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "os", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "á", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "é", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "í", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ó", backlink: -1, outcome: 1, guard: None },
];

fn mark_regions(env: &mut StemContext, m: &mut Markers) {
    let start = env.cursor;
    let mut found = false;
    if env.in_grouping(&G_V) {
        let save = env.cursor;
        if env.out_grouping(&G_V) && gopast_in(env, &G_V) {
            found = true;
        } else {
            env.cursor = save;
            if env.in_grouping(&G_V) && gopast_out(env, &G_V) {
                found = true;
            }
        }
    }
    if !found {
        env.cursor = start;
        if env.out_grouping(&G_V) {
            let save = env.cursor;
            if env.out_grouping(&G_V) && gopast_in(env, &G_V) {
                found = true;
            } else {
                env.cursor = save;
                if env.in_grouping(&G_V) && env.cursor < env.limit {
                    env.cursor += 1;
                    found = true;
                }
            }
        }
    }
    if found {
        m.pv = env.cursor;
    }
    env.cursor = start;
    if gopast_in(env, &G_V) && gopast_out(env, &G_V) {
        m.p1 = env.cursor;
        if gopast_in(env, &G_V) && gopast_out(env, &G_V) {
            m.p2 = env.cursor;
        }
    }
    env.cursor = start;
}

fn postlude(env: &mut StemContext, m: &mut Markers) {
    loop {
        env.bra = env.cursor;
        let res = env.find_among(A_POSTLUDE, m);
        if res == 0 {
            return;
        }
        env.ket = env.cursor;
        let replacement = match res {
            1 => "a",
            2 => "e",
            3 => "i",
            4 => "o",
            5 => "u",
            _ => {
                if env.cursor >= env.limit {
                    return;
                }
                env.cursor += 1;
                continue;
            }
        };
        if !env.slice_from(replacement) {
            return;
        }
    }
}

fn attached_pronoun(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_PRONOUN, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    let res = env.find_among_b(A_PRONOUN_STEM, m);
    if res == 0 {
        return false;
    }
    if m.pv > env.cursor {
        return false;
    }
    match res {
        // accented gerund/infinitive stems keep a de-accented ending
        1 => {
            env.bra = env.cursor;
            env.slice_from("iendo")
        }
        2 => {
            env.bra = env.cursor;
            env.slice_from("ando")
        }
        3 => {
            env.bra = env.cursor;
            env.slice_from("ar")
        }
        4 => {
            env.bra = env.cursor;
            env.slice_from("er")
        }
        5 => {
            env.bra = env.cursor;
            env.slice_from("ir")
        }
        6 => env.slice_del(),
        _ => {
            // 'yendo' needs a preceding u, which stays in place
            if !env.eq_s_b("u") {
                return false;
            }
            env.cursor += 1;
            env.slice_del()
        }
    }
}

/// `try([lit] R2 delete)` over the first literal that matches.
fn try_r2_delete(env: &mut StemContext, m: &Markers, literals: &[&str]) -> bool {
    let dist = env.limit - env.cursor;
    env.ket = env.cursor;
    for lit in literals {
        if env.eq_s_b(lit) {
            env.bra = env.cursor;
            if m.p2 <= env.cursor {
                return env.slice_del();
            }
            env.cursor = env.limit - dist;
            return true;
        }
        env.cursor = env.limit - dist;
    }
    true
}

fn standard_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_STANDARD, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    match res {
        1 => {
            if m.p2 > env.cursor {
                return false;
            }
            env.slice_del()
        }
        2 => {
            if m.p2 > env.cursor {
                return false;
            }
            if !env.slice_del() {
                return false;
            }
            try_r2_delete(env, m, &["ic"])
        }
        3 => {
            if m.p2 > env.cursor {
                return false;
            }
            env.slice_from("log")
        }
        4 => {
            if m.p2 > env.cursor {
                return false;
            }
            env.slice_from("u")
        }
        5 => {
            if m.p2 > env.cursor {
                return false;
            }
            env.slice_from("ente")
        }
        6 => {
            if m.p1 > env.cursor {
                return false;
            }
            if !env.slice_del() {
                return false;
            }
            // 'amente' may shed iv(at), os, ic or ad in R2
            let dist = env.limit - env.cursor;
            env.ket = env.cursor;
            if env.eq_s_b("iv") {
                env.bra = env.cursor;
                if m.p2 <= env.cursor {
                    if !env.slice_del() {
                        return false;
                    }
                    return try_r2_delete(env, m, &["at"]);
                }
                env.cursor = env.limit - dist;
            } else {
                env.cursor = env.limit - dist;
            }
            try_r2_delete(env, m, &["os", "ic", "ad"])
        }
        7 => {
            if m.p2 > env.cursor {
                return false;
            }
            if !env.slice_del() {
                return false;
            }
            try_r2_delete(env, m, &["ante", "able", "ible"])
        }
        8 => {
            if m.p2 > env.cursor {
                return false;
            }
            if !env.slice_del() {
                return false;
            }
            try_r2_delete(env, m, &["abil", "ic", "iv"])
        }
        _ => {
            if m.p2 > env.cursor {
                return false;
            }
            if !env.slice_del() {
                return false;
            }
            try_r2_delete(env, m, &["at"])
        }
    }
}

fn y_verb_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    if env.cursor < m.pv {
        return false;
    }
    let dist = env.limit - env.cursor;
    let old_lb = env.limit_backward;
    env.cursor = m.pv;
    env.limit_backward = env.cursor;
    env.cursor = env.limit - dist;
    env.ket = env.cursor;
    let res = env.find_among_b(A_Y_VERB, m);
    env.bra = env.cursor;
    env.limit_backward = old_lb;
    if res == 0 {
        return false;
    }
    // the preceding u stays in place
    if !env.eq_s_b("u") {
        return false;
    }
    env.cursor += 1;
    env.slice_del()
}

fn verb_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    if env.cursor < m.pv {
        return false;
    }
    let dist = env.limit - env.cursor;
    let old_lb = env.limit_backward;
    env.cursor = m.pv;
    env.limit_backward = env.cursor;
    env.cursor = env.limit - dist;
    env.ket = env.cursor;
    let res = env.find_among_b(A_VERB, m);
    env.limit_backward = old_lb;
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if res == 1 {
        // drop a preceding u only after g (sigue, llegue, ...)
        let d2 = env.limit - env.cursor;
        if env.eq_s_b("u") {
            let save = env.cursor;
            if env.eq_s_b("g") {
                env.cursor = save;
            } else {
                env.cursor = env.limit - d2;
            }
        } else {
            env.cursor = env.limit - d2;
        }
        env.bra = env.cursor;
    }
    env.slice_del()
}

fn residual_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_RESIDUAL, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if res == 1 {
        if m.pv > env.cursor {
            return false;
        }
        return env.slice_del();
    }
    if m.pv > env.cursor {
        return false;
    }
    if !env.slice_del() {
        return false;
    }
    let dist = env.limit - env.cursor;
    env.ket = env.cursor;
    if env.eq_s_b("u") {
        env.bra = env.cursor;
        let save = env.cursor;
        if env.eq_s_b("g") {
            env.cursor = save;
            if m.pv <= env.cursor {
                return env.slice_del();
            }
        }
        env.cursor = env.limit - dist;
    } else {
        env.cursor = env.limit - dist;
    }
    true
}

/// Run the Spanish program over the word held by `env`.
pub fn stem(env: &mut StemContext) -> bool {
    let mut m = Markers {
        pv: env.limit,
        p1: env.limit,
        p2: env.limit,
    };
    let start = env.cursor;
    mark_regions(env, &mut m);
    env.cursor = start;
    env.limit_backward = env.cursor;
    env.cursor = env.limit;
    attached_pronoun(env, &mut m);
    env.cursor = env.limit;
    if !standard_suffix(env, &mut m) {
        env.cursor = env.limit;
        if !y_verb_suffix(env, &mut m) {
            env.cursor = env.limit;
            verb_suffix(env, &mut m);
        }
    }
    env.cursor = env.limit;
    residual_suffix(env, &mut m);
    env.cursor = env.limit_backward;
    postlude(env, &mut m);
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
        assert_well_formed(A_POSTLUDE, false);
        assert_well_formed(A_PRONOUN, true);
        assert_well_formed(A_PRONOUN_STEM, true);
        assert_well_formed(A_STANDARD, true);
        assert_well_formed(A_Y_VERB, true);
        assert_well_formed(A_VERB, true);
        assert_well_formed(A_RESIDUAL, true);
    }

    #[test]
    fn standard_suffixes() {
        assert_eq!(stem_word("absoluto"), "absolut");
        assert_eq!(stem_word("generosidad"), "gener");
        assert_eq!(stem_word("felicidades"), "felic");
        assert_eq!(stem_word("rápidamente"), "rapid");
        assert_eq!(stem_word("tranquilamente"), "tranquil");
    }

    #[test]
    fn verb_endings() {
        assert_eq!(stem_word("trabajando"), "trabaj");
        assert_eq!(stem_word("cantarían"), "cant");
        assert_eq!(stem_word("construyeron"), "constru");
        assert_eq!(stem_word("llegue"), "lleg");
    }

    #[test]
    fn attached_pronouns() {
        assert_eq!(stem_word("comiéndoselo"), "com");
        assert_eq!(stem_word("besándola"), "bes");
    }

    #[test]
    fn residual_and_postlude() {
        assert_eq!(stem_word("niños"), "niñ");
        assert_eq!(stem_word("canciones"), "cancion");
    }

    #[test]
    fn short_words_survive() {
        assert_eq!(stem_word("no"), "no");
        assert_eq!(stem_word(""), "");
    }

    #[test]
    fn regions_are_monotonic() {
        for word in ["absoluto", "tranquilamente", "aéreo", "construyeron", "y"] {
            let mut env = StemContext::new();
            env.set_current(word);
            let mut m = Markers {
                pv: env.limit,
                p1: env.limit,
                p2: env.limit,
            };
            mark_regions(&mut env, &mut m);
            assert!(m.pv <= env.limit, "{word}");
            assert!(m.p1 <= m.p2 && m.p2 <= env.limit, "{word}");
        }
    }
}
