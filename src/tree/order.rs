//! Locale-aware name ordering for tree siblings.

use feruca::{Collator, Locale, Tailoring};
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    // Non-ignorable punctuation: `_` < `-` < `.` < digits < letters.
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(Locale::Root), false, true));
}

/// Compare two segment names with the Unicode Collation Algorithm (CLDR root order).
///
/// Base letters first, then accents, then case (lowercase first). Names that collate equal
/// fall back to byte order so the result is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
