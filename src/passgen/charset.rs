//! Character classes and pool construction

use crate::config::GenerationRequest;

/// Symbol class, in pool order
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>/?";
/// Digit class
pub const NUMBERS: &str = "0123456789";
/// Uppercase letter class
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letter class
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Alphabet used to replace sequential runs, independent of the enabled classes
pub const REPLACEMENT_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Visually ambiguous characters removed when `no_similar` is set
pub const SIMILAR_CHARACTERS: &str = "iIl1Lo0O";

/// Returns true if `c` belongs to [`SIMILAR_CHARACTERS`]
pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARACTERS.contains(c)
}

/// Build the sampling pool from the four inclusion flags.
///
/// Classes are concatenated in a fixed order: symbols, numbers,
/// uppercase, lowercase. The classes are disjoint, so the pool never
/// contains a character twice. An empty result means no class is enabled.
pub fn build_pool(request: &GenerationRequest) -> Vec<char> {
    let mut pool = String::new();

    if request.include_symbols {
        pool.push_str(SYMBOLS);
    }
    if request.include_numbers {
        pool.push_str(NUMBERS);
    }
    if request.include_upper {
        pool.push_str(UPPER);
    }
    if request.include_lower {
        pool.push_str(LOWER);
    }

    pool.chars().collect()
}

/// Pool restricted to the enabled letter classes, used for the first
/// position when `begin_with_letter` is set.
pub fn letter_pool(request: &GenerationRequest) -> Vec<char> {
    let mut pool = String::new();

    if request.include_upper {
        pool.push_str(UPPER);
    }
    if request.include_lower {
        pool.push_str(LOWER);
    }

    pool.chars().collect()
}
