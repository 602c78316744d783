//! Russian rule program
//!
//! ё is normalized to е up front, then suffixes are stripped backward
//! inside the pV region: perfective gerund, or reflexive followed by
//! adjectival/verb/noun endings; then a trailing и, a derivational suffix
//! in R2, and the tidy-up pass (superlatives, double н, soft sign).

use crate::among::Among;
use crate::context::{Grouping, StemContext};

use super::{gopast_in, gopast_out};

struct Markers {
    pv: usize,
    p2: usize,
}

static G_V: Grouping = Grouping { min: 1072, max: 1103, mask: &[33, 65, 8, 232] };

static A_PERFECTIVE: &[Among<Markers>] = &[
    Among { pattern: "в", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ив", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "ыв", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "вши", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ивши", backlink: 3, outcome: 2, guard: None },
    Among { pattern: "ывши", backlink: 3, outcome: 2, guard: None },
    Among { pattern: "вшись", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ившись", backlink: 6, outcome: 2, guard: None },
    Among { pattern: "ывшись", backlink: 6, outcome: 2, guard: None },
];

static A_ADJECTIVE: &[Among<Markers>] = &[
    Among { pattern: "ее", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ие", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ое", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ые", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ими", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ыми", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ей", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ий", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ой", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ый", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ем", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "им", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ом", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ым", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "его", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ого", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ему", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ому", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "их", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ых", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ею", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ою", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ую", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "юю", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ая", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "яя", backlink: -1, outcome: 1, guard: None },
];

static A_PARTICIPLE: &[Among<Markers>] = &[
    Among { pattern: "ем", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "нн", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "вш", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ивш", backlink: 2, outcome: 2, guard: None },
    Among { pattern: "ывш", backlink: 2, outcome: 2, guard: None },
    Among { pattern: "щ", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ющ", backlink: 5, outcome: 1, guard: None },
    Among { pattern: "ующ", backlink: 6, outcome: 2, guard: None },
];

static A_REFLEXIVE: &[Among<Markers>] = &[
    Among { pattern: "сь", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ся", backlink: -1, outcome: 1, guard: None },
];

static A_VERB: &[Among<Markers>] = &[
    Among { pattern: "ла", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ила", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "ыла", backlink: 0, outcome: 2, guard: None },
    Among { pattern: "на", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ена", backlink: 3, outcome: 2, guard: None },
    Among { pattern: "ете", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ите", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "йте", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ейте", backlink: 7, outcome: 2, guard: None },
    Among { pattern: "уйте", backlink: 7, outcome: 2, guard: None },
    Among { pattern: "ли", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "или", backlink: 10, outcome: 2, guard: None },
    Among { pattern: "ыли", backlink: 10, outcome: 2, guard: None },
    Among { pattern: "й", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ей", backlink: 13, outcome: 2, guard: None },
    Among { pattern: "уй", backlink: 13, outcome: 2, guard: None },
    Among { pattern: "л", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ил", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "ыл", backlink: 16, outcome: 2, guard: None },
    Among { pattern: "ем", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "им", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ым", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "н", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ен", backlink: 22, outcome: 2, guard: None },
    Among { pattern: "ло", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ило", backlink: 24, outcome: 2, guard: None },
    Among { pattern: "ыло", backlink: 24, outcome: 2, guard: None },
    Among { pattern: "но", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ено", backlink: 27, outcome: 2, guard: None },
    Among { pattern: "нно", backlink: 27, outcome: 1, guard: None },
    Among { pattern: "ет", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ует", backlink: 30, outcome: 2, guard: None },
    Among { pattern: "ит", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ыт", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ют", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "уют", backlink: 34, outcome: 2, guard: None },
    Among { pattern: "ят", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ны", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ены", backlink: 37, outcome: 2, guard: None },
    Among { pattern: "ть", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ить", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "ыть", backlink: 39, outcome: 2, guard: None },
    Among { pattern: "ешь", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ишь", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ю", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ую", backlink: 44, outcome: 2, guard: None },
];

static A_NOUN: &[Among<Markers>] = &[
    Among { pattern: "а", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ев", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ов", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "е", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ие", backlink: 3, outcome: 1, guard: None },
    Among { pattern: "ье", backlink: 3, outcome: 1, guard: None },
    Among { pattern: "и", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "еи", backlink: 6, outcome: 1, guard: None },
    Among { pattern: "ии", backlink: 6, outcome: 1, guard: None },
    Among { pattern: "ами", backlink: 6, outcome: 1, guard: None },
    Among { pattern: "ями", backlink: 6, outcome: 1, guard: None },
    Among { pattern: "иями", backlink: 10, outcome: 1, guard: None },
    Among { pattern: "й", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ей", backlink: 12, outcome: 1, guard: None },
    Among { pattern: "ией", backlink: 13, outcome: 1, guard: None },
    Among { pattern: "ий", backlink: 12, outcome: 1, guard: None },
    Among { pattern: "ой", backlink: 12, outcome: 1, guard: None },
    Among { pattern: "ам", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ем", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ием", backlink: 18, outcome: 1, guard: None },
    Among { pattern: "ом", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ям", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "иям", backlink: 21, outcome: 1, guard: None },
    Among { pattern: "о", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "у", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ах", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ях", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "иях", backlink: 26, outcome: 1, guard: None },
    Among { pattern: "ы", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ь", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ю", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ию", backlink: 30, outcome: 1, guard: None },
    Among { pattern: "ью", backlink: 30, outcome: 1, guard: None },
    Among { pattern: "я", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ия", backlink: 33, outcome: 1, guard: None },
    Among { pattern: "ья", backlink: 33, outcome: 1, guard: None },
];

static A_DERIVATIONAL: &[Among<Markers>] = &[
    Among { pattern: "ост", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ость", backlink: -1, outcome: 1, guard: None },
];

static A_TIDY: &[Among<Markers>] = &[
    Among { pattern: "ейше", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "н", backlink: -1, outcome: 2, guard: None },
    Among { pattern: "ейш", backlink: -1, outcome: 1, guard: None },
    Among { pattern: "ь", backlink: -1, outcome: 3, guard: None },
];

fn normalize_yo(env: &mut StemContext) -> bool {
    loop {
        let mut found = false;
        while env.cursor < env.limit {
            env.bra = env.cursor;
            if env.eq_s("ё") {
                env.ket = env.cursor;
                found = true;
                break;
            }
            env.cursor += 1;
        }
        if !found {
            return true;
        }
        if !env.slice_from("е") {
            return false;
        }
    }
}

fn mark_regions(env: &mut StemContext, m: &mut Markers) {
    let start = env.cursor;
    if gopast_in(env, &G_V) {
        m.pv = env.cursor;
        if gopast_out(env, &G_V) && gopast_in(env, &G_V) && gopast_out(env, &G_V) {
            m.p2 = env.cursor;
        }
    }
    env.cursor = start;
}

/// Check for а or я directly before the cursor without consuming it.
fn preceded_by_a_or_ya(env: &mut StemContext) -> bool {
    let save = env.cursor;
    if env.eq_s_b("а") {
        env.cursor = save;
        return true;
    }
    env.cursor = save;
    if env.eq_s_b("я") {
        env.cursor = save;
        return true;
    }
    env.cursor = save;
    false
}

fn perfective_gerund(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_PERFECTIVE, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if res == 1 && !preceded_by_a_or_ya(env) {
        return false;
    }
    env.slice_del()
}

fn reflexive(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_REFLEXIVE, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    env.slice_del()
}

fn adjective(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_ADJECTIVE, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    env.slice_del()
}

/// An adjective ending, optionally preceded by a participle suffix.
fn adjectival(env: &mut StemContext, m: &mut Markers) -> bool {
    if !adjective(env, m) {
        return false;
    }
    let dist = env.limit - env.cursor;
    env.ket = env.cursor;
    let res = env.find_among_b(A_PARTICIPLE, m);
    let mut stripped = false;
    if res != 0 {
        env.bra = env.cursor;
        if res != 1 || preceded_by_a_or_ya(env) {
            stripped = env.slice_del();
        }
    }
    if !stripped {
        env.cursor = env.limit - dist;
    }
    true
}

fn verb(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_VERB, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    if res == 1 && !preceded_by_a_or_ya(env) {
        return false;
    }
    env.slice_del()
}

fn noun(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_NOUN, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    env.slice_del()
}

fn derivational(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    if env.find_among_b(A_DERIVATIONAL, m) == 0 {
        return false;
    }
    env.bra = env.cursor;
    if m.p2 > env.cursor {
        return false;
    }
    env.slice_del()
}

fn tidy_up(env: &mut StemContext, m: &mut Markers) -> bool {
    env.ket = env.cursor;
    let res = env.find_among_b(A_TIDY, m);
    if res == 0 {
        return false;
    }
    env.bra = env.cursor;
    match res {
        1 => {
            // superlative; then prune a doubled н
            if !env.slice_del() {
                return false;
            }
            env.ket = env.cursor;
            if !env.eq_s_b("н") {
                return false;
            }
            env.bra = env.cursor;
            if !env.eq_s_b("н") {
                return false;
            }
            env.slice_del()
        }
        2 => {
            if !env.eq_s_b("н") {
                return false;
            }
            env.slice_del()
        }
        _ => env.slice_del(),
    }
}

/// Run the Russian program over the word held by `env`.
pub fn stem(env: &mut StemContext) -> bool {
    let mut m = Markers {
        pv: env.limit,
        p2: env.limit,
    };
    let start = env.cursor;
    normalize_yo(env);
    env.cursor = start;
    mark_regions(env, &mut m);
    env.cursor = start;
    env.limit_backward = env.cursor;
    env.cursor = env.limit;
    if env.cursor < m.pv {
        return false;
    }
    let dist = env.limit - env.cursor;
    let old_lb = env.limit_backward;
    env.cursor = m.pv;
    env.limit_backward = env.cursor;
    env.cursor = env.limit - dist;

    let d = env.limit - env.cursor;
    if !perfective_gerund(env, &mut m) {
        env.cursor = env.limit - d;
        let d2 = env.limit - env.cursor;
        if !reflexive(env, &mut m) {
            env.cursor = env.limit - d2;
        }
        if !adjectival(env, &mut m) && !verb(env, &mut m) {
            noun(env, &mut m);
        }
    }

    env.cursor = env.limit;
    let d = env.limit - env.cursor;
    env.ket = env.cursor;
    if env.eq_s_b("и") {
        env.bra = env.cursor;
        if !env.slice_del() {
            return false;
        }
    } else {
        env.cursor = env.limit - d;
    }

    env.cursor = env.limit;
    derivational(env, &mut m);
    env.cursor = env.limit;
    tidy_up(env, &mut m);

    env.limit_backward = old_lb;
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
        assert_well_formed(A_PERFECTIVE, true);
        assert_well_formed(A_ADJECTIVE, true);
        assert_well_formed(A_PARTICIPLE, true);
        assert_well_formed(A_REFLEXIVE, true);
        assert_well_formed(A_VERB, true);
        assert_well_formed(A_NOUN, true);
        assert_well_formed(A_DERIVATIONAL, true);
        assert_well_formed(A_TIDY, true);
    }

    #[test]
    fn noun_and_adjective_endings() {
        assert_eq!(stem_word("дома"), "дом");
        assert_eq!(stem_word("книги"), "книг");
        assert_eq!(stem_word("красивая"), "красив");
        assert_eq!(stem_word("программы"), "программ");
        assert_eq!(stem_word("студентами"), "студент");
        assert_eq!(stem_word("жизнью"), "жизн");
    }

    #[test]
    fn verb_and_gerund_endings() {
        assert_eq!(stem_word("читала"), "чита");
        assert_eq!(stem_word("говорить"), "говор");
        assert_eq!(stem_word("сделавшись"), "сдела");
        assert_eq!(stem_word("бегающая"), "бега");
    }

    #[test]
    fn derivational_and_tidy_up() {
        assert_eq!(stem_word("важность"), "важност");
        assert_eq!(stem_word("прекраснейшего"), "прекрасн");
    }

    #[test]
    fn yo_is_normalized() {
        assert_eq!(stem_word("ёлка"), "елк");
        assert_eq!(stem_word("нёс"), "нес");
    }

    #[test]
    fn non_cyrillic_words_pass_through() {
        assert_eq!(stem_word("xyz"), "xyz");
        assert_eq!(stem_word(""), "");
    }
}
