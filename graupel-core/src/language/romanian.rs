//! Romanian rule program
//!
//! Pipeline: prelude (i/u between vowels become the consonant markers I/U),
//! region marking (pV/p1/p2), then backward passes over plural/article
//! endings, combinable derivational suffixes, standard suffixes, verb
//! endings (only when no standard suffix was removed), and a final vowel
//! ending, followed by the postlude that restores I/U to i/u.
//!
//! The tables use the cedilla forms ş (U+015F) and ţ (U+0163).

use crate::among::Among;
use crate::context::{Grouping, StemContext};

use super::{gopast_in, gopast_out};

struct Markers {
    pv: usize,
    p1: usize,
    p2: usize,
    standard_suffix_removed: bool,
}

static G_V: Grouping = Grouping { min: 97, max: 259, mask: &[17, 65, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 32, 0, 0, 4] };

static A_POSTLUDE: &[Among<Markers>] = &[
    Among { pattern: "", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "I", backlink: 0, outcome: 1, guard: None },
    Among { pattern: "U", backlink: 0, outcome: 2, guard: None },
];

static A_STEP0: &[Among<Markers>] = &[
    Among { pattern: "ea", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "aţia", backlink: -1, outcome: 7, guard: None },
    Among { pattern: "aua", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iua", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "aţie", backlink: -1, outcome: 7, guard: None },
    Among { pattern: "ele", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ile", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "iile", backlink: 6, outcome: 4, guard: None },
    Among { pattern: "iei", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "atei", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ii", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ului", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ul", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "elor", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ilor", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "iilor", backlink: 14, outcome: 4, guard: None },
];

static A_COMBO: &[Among<Markers>] = &[
    Among { pattern: "icala", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "iciva", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ativa", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itiva", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "icale", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "aţiune", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "iţiune", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "atoare", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itoare", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ătoare", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "icitate", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "abilitate", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibilitate", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ivitate", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "icive", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ative", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itive", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "icali", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "atori", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "icatori", backlink: 18, outcome: 4, guard: None },
    Among { pattern: "itori", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ători", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "icitati", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "abilitati", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivitati", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "icivi", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ativi", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itivi", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "icităi", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "abilităi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivităi", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "icităţi", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "abilităţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ivităţi", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ical", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ator", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "icator", backlink: 35, outcome: 4, guard: None },
    Among { pattern: "itor", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "ător", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "iciv", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ativ", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itiv", backlink: -1, outcome: 6, guard: None },
    Among { pattern: "icală", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "icivă", backlink: -1, outcome: 4, guard: None },
    Among { pattern: "ativă", backlink: -1, outcome: 5, guard: None },
    Among { pattern: "itivă", backlink: -1, outcome: 6, guard: None },
];

static A_STANDARD: &[Among<Markers>] = &[
    Among { pattern: "ica", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "abila", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibila", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "oasa", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ata", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ita", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "anta", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ista", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "iva", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ic", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ice", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "abile", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibile", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "isme", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "iune", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "oase", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ate", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "itate", backlink: 16, outcome: 1, guard: None },
    Among { pattern: "ite", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ante", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "iste", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ive", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ici", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "abili", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibili", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "iuni", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "atori", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "osi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ati", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "itati", backlink: 28, outcome: 1, guard: None },
    Among { pattern: "iti", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "anti", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "isti", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "işti", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ivi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ităi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "oşi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ităţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "abil", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibil", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ism", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ator", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "os", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "at", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "it", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ant", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ist", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "iv", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ică", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "abilă", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ibilă", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "oasă", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ată", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ită", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "antă", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "istă", backlink: -1, outcome: 3, guard: None },
    Among { pattern: "ivă", backlink: -1, outcome: 1, guard: None },
];

static A_VERB: &[Among<Markers>] = &[
    Among { pattern: "ea", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ia", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "esc", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ăsc", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ind", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ând", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "are", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ere", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ire", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "âre", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "se", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ase", backlink: 10, outcome: 1, guard: None },
    Among { pattern: "sese", backlink: 10, outcome: 2, guard: None },
    Among { pattern: "ise", backlink: 10, outcome: 1, guard: None },
    Among { pattern: "use", backlink: 10, outcome: 1, guard: None },
    Among { pattern: "âse", backlink: 10, outcome: 1, guard: None },
    Among { pattern: "eşte", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ăşte", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "eze", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ai", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "eai", backlink: 19, outcome: 1, guard: None },
    Among { pattern: "iai", backlink: 19, outcome: 1, guard: None },
    Among { pattern: "sei", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "eşti", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ăşti", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ui", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ezi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "âi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "aşi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "seşi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aseşi", backlink: 29, outcome: 1, guard: None },
    Among { pattern: "seseşi", backlink: 29, outcome: 2, guard: None },
    Among { pattern: "iseşi", backlink: 29, outcome: 1, guard: None },
    Among { pattern: "useşi", backlink: 29, outcome: 1, guard: None },
    Among { pattern: "âseşi", backlink: 29, outcome: 1, guard: None },
    Among { pattern: "işi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "uşi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "âşi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "aţi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "eaţi", backlink: 38, outcome: 1, guard: None },
    Among { pattern: "iaţi", backlink: 38, outcome: 1, guard: None },
    Among { pattern: "eţi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "iţi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "âţi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "arăţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "serăţi", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aserăţi", backlink: 45, outcome: 1, guard: None },
    Among { pattern: "seserăţi", backlink: 45, outcome: 2, guard: None },
    Among { pattern: "iserăţi", backlink: 45, outcome: 1, guard: None },
    Among { pattern: "userăţi", backlink: 45, outcome: 1, guard: None },
    Among { pattern: "âserăţi", backlink: 45, outcome: 1, guard: None },
    Among { pattern: "irăţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "urăţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ârăţi", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "am", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "eam", backlink: 54, outcome: 1, guard: None },
    Among { pattern: "iam", backlink: 54, outcome: 1, guard: None },
    Among { pattern: "em", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "asem", backlink: 57, outcome: 1, guard: None },
    Among { pattern: "sesem", backlink: 57, outcome: 2, guard: None },
    Among { pattern: "isem", backlink: 57, outcome: 1, guard: None },
    Among { pattern: "usem", backlink: 57, outcome: 1, guard: None },
    Among { pattern: "âsem", backlink: 57, outcome: 1, guard: None },
    Among { pattern: "im", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "âm", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ăm", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "arăm", backlink: 65, outcome: 1, guard: None },
    Among { pattern: "serăm", backlink: 65, outcome: 2, guard: None },
    Among { pattern: "aserăm", backlink: 67, outcome: 1, guard: None },
    Among { pattern: "seserăm", backlink: 67, outcome: 2, guard: None },
    Among { pattern: "iserăm", backlink: 67, outcome: 1, guard: None },
    Among { pattern: "userăm", backlink: 67, outcome: 1, guard: None },
    Among { pattern: "âserăm", backlink: 67, outcome: 1, guard: None },
    Among { pattern: "irăm", backlink: 65, outcome: 1, guard: None },
    Among { pattern: "urăm", backlink: 65, outcome: 1, guard: None },
    Among { pattern: "ârăm", backlink: 65, outcome: 1, guard: None },
    Among { pattern: "au", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "eau", backlink: 76, outcome: 1, guard: None },
    Among { pattern: "iau", backlink: 76, outcome: 1, guard: None },
    Among { pattern: "indu", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ându", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ez", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ească", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ară", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "seră", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "aseră", backlink: 84, outcome: 1, guard: None },
    Among { pattern: "seseră", backlink: 84, outcome: 2, guard: None },
    Among { pattern: "iseră", backlink: 84, outcome: 1, guard: None },
    Among { pattern: "useră", backlink: 84, outcome: 1, guard: None },
    Among { pattern: "âseră", backlink: 84, outcome: 1, guard: None },
    Among { pattern: "iră", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ură", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "âră", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ează", backlink: -1, outcome: 1, guard: None },
];

static A_VOWEL: &[Among<Markers>] = &[
    Among { pattern: "a", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "e", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ie", backlink: 1, outcome: 1, guard: None },
    Among { pattern: "i", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ă", backlink: -1, outcome: 1, guard: None },
];

fn prelude_step(env: &mut StemContext) -> bool {
    if !env.in_grouping(&G_V) {
        return false;
    }
    env.bra = env.cursor;
    let save = env.cursor;
    if env.eq_s("u") {
        env.ket = env.cursor;
        if env.in_grouping(&G_V) {
            return env.slice_from("U");
        }
    }
    env.cursor = save;
    if env.eq_s("i") {
        env.ket = env.cursor;
        if env.in_grouping(&G_V) {
            return env.slice_from("I");
        }
    }
    false
}

fn prelude(env: &mut StemContext) {
    loop {
        let mut matched = false;
        loop {
            let pos = env.cursor;
            if prelude_step(env) {
                env.cursor = pos;
                matched = true;
                break;
            }
            env.cursor = pos;
            if env.cursor >= env.limit {
                break;
            }
            env.cursor += 1;
        }
        if !matched {
            return;
        }
    }
}

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
        match res {
            1 => {
                if !env.slice_from("i") {
                    return;
                }
            }
            2 => {
                if !env.slice_from("u") {
                    return;
                }
            }
            _ => {
                if env.cursor >= env.limit {
                    return;
                }
                env.cursor += 1;
            }
        }
    }
}

fn step_0(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_STEP0, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if m.p1 > env.cursor {
        return false;
    }
    match res {
        1 => env.slice_del(),
        2 => env.slice_from("a"),
        3 => env.slice_from("e"),
        4 => env.slice_from("i"),
        5 => {
            // "ile" stays untouched after "ab" (abile and friends)
            let save = env.cursor;
            if env.eq_s_b("ab") {
                env.cursor = save;
                return false;
            }
            env.cursor = save;
            env.slice_from("i")
        }
        6 => env.slice_from("at"),
        _ => env.slice_from("aţi"),
    }
}

/// One pass over the combinable derivational suffixes; repeated by
/// `standard_suffix` until nothing more strips.
fn combo_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    let dist = env.limit - env.cursor;
    env.ket = env.cursor;
    let res = env.find_among_b(A_COMBO, m);
    if res == 0 {
        env.cursor = env.limit - dist;
        return false;
    }
    env.bra = env.cursor;
    if m.p1 > env.cursor {
        env.cursor = env.limit - dist;
        return false;
    }
    let replacement = match res {
        1 => "abil",
        2 => "ibil",
        3 => "iv",
        4 => "ic",
        5 => "at",
        _ => "it",
    };
    if !env.slice_from(replacement) {
        env.cursor = env.limit - dist;
        return false;
    }
    m.standard_suffix_removed = true;
    env.cursor = env.limit - dist;
    true
}

fn standard_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    m.standard_suffix_removed = false;
    while combo_suffix(env, m) {}
    env.ket = env.cursor;
    let res = env.find_among_b(A_STANDARD, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if m.p2 > env.cursor {
        return false;
    }
    let ok = match res {
        1 => env.slice_del(),
        2 => {
            if !env.eq_s_b("ţ") {
                return false;
            }
            env.bra = env.cursor;
            env.slice_from("t")
        }
        _ => env.slice_from("ist"),
    };
    if !ok {
        return false;
    }
    m.standard_suffix_removed = true;
    true
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
    let ok = verb_suffix_inner(env, m);
    env.limit_backward = old_lb;
    ok
}

fn verb_suffix_inner(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_VERB, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if res == 1 {
        // these endings need a preceding consonant or 'u'
        let save = env.cursor;
        if !env.out_grouping_b(&G_V) {
            env.cursor = save;
            if !env.eq_s_b("u") {
                return false;
            }
        }
        env.cursor = save;
    }
    env.slice_del()
}

fn vowel_suffix(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_VOWEL, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    if m.pv > env.cursor {
        return false;
    }
    env.slice_del()
}

/// Run the Romanian program over the word held by `env`.
pub fn stem(env: &mut StemContext) -> bool {
    let mut m = Markers {
        pv: env.limit,
        p1: env.limit,
        p2: env.limit,
        standard_suffix_removed: false,
    };
    let start = env.cursor;
    prelude(env);
    env.cursor = start;
    mark_regions(env, &mut m);
    env.limit_backward = env.cursor;
    env.cursor = env.limit;
    step_0(env, &mut m);
    env.cursor = env.limit;
    standard_suffix(env, &mut m);
    env.cursor = env.limit;
    if !m.standard_suffix_removed {
        verb_suffix(env, &mut m);
    }
    env.cursor = env.limit;
    vowel_suffix(env, &mut m);
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
        assert_well_formed(A_STEP0, true);
        assert_well_formed(A_COMBO, true);
        assert_well_formed(A_STANDARD, true);
        assert_well_formed(A_VERB, true);
        assert_well_formed(A_VOWEL, true);
    }

    #[test]
    fn articles_and_plurals() {
        assert_eq!(stem_word("absolutul"), "absolut");
        assert_eq!(stem_word("alegerile"), "aleger");
        assert_eq!(stem_word("lucrurile"), "lucrur");
        assert_eq!(stem_word("cuvintele"), "cuvint");
        assert_eq!(stem_word("florilor"), "flor");
    }

    #[test]
    fn derivational_suffixes() {
        assert_eq!(stem_word("abilitate"), "abil");
        assert_eq!(stem_word("marturisitoare"), "marturis");
        assert_eq!(stem_word("frumoasa"), "frumoas");
        assert_eq!(stem_word("importanta"), "import");
    }

    #[test]
    fn verb_and_vowel_endings() {
        assert_eq!(stem_word("iubire"), "iubir");
        assert_eq!(stem_word("jucarii"), "jucar");
        assert_eq!(stem_word("copiii"), "copii");
    }

    #[test]
    fn short_words_survive() {
        assert_eq!(stem_word("om"), "om");
        assert_eq!(stem_word(""), "");
    }

    #[test]
    fn regions_are_monotonic() {
        for word in ["absolutul", "abilitate", "frumoasa", "ea", "b"] {
            let mut env = StemContext::new();
            env.set_current(word);
            let mut m = Markers {
                pv: env.limit,
                p1: env.limit,
                p2: env.limit,
                standard_suffix_removed: false,
            };
            mark_regions(&mut env, &mut m);
            assert!(m.pv <= env.limit, "{word}");
            assert!(m.p1 <= m.p2, "{word}");
            assert!(m.p2 <= env.limit, "{word}");
        }
    }
}
