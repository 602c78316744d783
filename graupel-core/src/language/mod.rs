//! Per-language rule programs
//!
//! Each module exposes a single `stem` entry point that rewrites the word
//! held by a [`StemContext`](crate::StemContext) in place. Programs reset
//! their region markers on every call; running one leaves the cursor at the
//! start of the (possibly shortened) word.
//!
//! The among tables in these modules are stored pre-sorted in comparison
//! order (reversed-string order for backward tables) with backlinks
//! pointing at the longest proper prefix entry; tests assert both
//! properties.

pub mod romanian;
pub mod russian;
pub mod spanish;
pub mod turkish;

use crate::context::{Grouping, StemContext};

/// Advance the cursor until a character of `g` has been consumed.
pub(crate) fn gopast_in(env: &mut StemContext, g: &Grouping) -> bool {
    loop {
        if env.in_grouping(g) {
            return true;
        }
        if env.cursor >= env.limit {
            return false;
        }
        env.cursor += 1;
    }
}

/// Advance the cursor until a character outside `g` has been consumed.
pub(crate) fn gopast_out(env: &mut StemContext, g: &Grouping) -> bool {
    loop {
        if env.out_grouping(g) {
            return true;
        }
        if env.cursor >= env.limit {
            return false;
        }
        env.cursor += 1;
    }
}
