//! Locale-aware string ordering
//!
//! Approximates the default collation used by directory listings, level by
//! level:
//!
//! 1. Base letters, with accents stripped and case folded, so `Émile` files
//!    under `E` ahead of `Frank`.
//! 2. Accents, at the first position that differs. An unaccented letter
//!    sorts before an accented one.
//! 3. Case, at the first position that differs. Lowercase sorts first.
//! 4. Raw code points, so the order is total and sorting is deterministic.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// One base character with the combining marks that follow it in NFD form
struct CollationUnit {
    base: char,
    marks: Vec<char>,
}

fn units(s: &str) -> Vec<CollationUnit> {
    let mut units: Vec<CollationUnit> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(unit) = units.last_mut() {
                unit.marks.push(c);
                continue;
            }
        }
        units.push(CollationUnit {
            base: c,
            marks: Vec::new(),
        });
    }
    units
}

/// Compare two strings the way a human-facing sorted list expects.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (ua, ub) = (units(a), units(b));

    let primary = ua
        .iter()
        .flat_map(|u| u.base.to_lowercase())
        .cmp(ub.iter().flat_map(|u| u.base.to_lowercase()));
    if primary != Ordering::Equal {
        return primary;
    }

    let accents = ua.iter().map(|u| &u.marks).cmp(ub.iter().map(|u| &u.marks));
    if accents != Ordering::Equal {
        return accents;
    }

    // `false` sorts first, so lowercase wins at the first case difference
    let case = ua
        .iter()
        .map(|u| !u.base.is_lowercase())
        .cmp(ub.iter().map(|u| !u.base.is_lowercase()));
    if case != Ordering::Equal {
        return case;
    }

    a.cmp(b)
}
