//! Post-generation structural constraints
//!
//! Stages run in a fixed order: similar removal, duplicate removal, then
//! sequential repair. The first two stages delete characters and never
//! re-pad, so with `no_similar` or `no_duplicates` enabled the result can be
//! shorter than the requested length. Sequential repair always replaces
//! three characters with three, and its replacements are not filtered
//! against the similar or duplicate rules.

use log::trace;
use std::collections::HashSet;

use super::charset::{REPLACEMENT_CHARS, is_similar};
use super::entropy::{EntropySource, sample};
use crate::config::GenerationRequest;
use crate::error::Result;

/// True if `b` is exactly one ordinal step above or below `a`
pub fn is_adjacent(a: char, b: char) -> bool {
    let (a, b) = (a as u32, b as u32);
    a.abs_diff(b) == 1
}

/// True if `a, b, c` is a strictly ascending or descending run with step 1
pub fn is_sequential(a: char, b: char, c: char) -> bool {
    let (a, b, c) = (a as u32, b as u32, c as u32);
    (b == a + 1 && c == b + 1) || (a == b + 1 && b == c + 1)
}

/// Drop every character from the similar set
pub fn remove_similar(candidate: &[char]) -> Vec<char> {
    candidate.iter().copied().filter(|&c| !is_similar(c)).collect()
}

/// Keep the first occurrence of each character, case-sensitive
pub fn remove_duplicates(candidate: &[char]) -> Vec<char> {
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate.iter().copied().filter(|&c| seen.insert(c)).collect()
}

/// Replace every ascending or descending three-character run.
///
/// The scan walks left to right. A run at `i` is overwritten in place with
/// three characters from [`REPLACEMENT_CHARS`]; a drawn character is
/// rejected if it is adjacent to the character before the run or the one
/// after it, and a full replacement is rejected if it forms a run itself.
/// The scan then resumes after the replaced run.
pub fn remove_sequential<S: EntropySource + ?Sized>(
    source: &mut S,
    candidate: &mut [char],
) -> Result<()> {
    let pool: Vec<char> = REPLACEMENT_CHARS.chars().collect();
    let len = candidate.len();

    let mut i = 0;
    while i + 2 < len {
        if !is_sequential(candidate[i], candidate[i + 1], candidate[i + 2]) {
            i += 1;
            continue;
        }

        let left = if i > 0 { Some(candidate[i - 1]) } else { None };
        let right = candidate.get(i + 3).copied();
        let replacement = replacement_run(source, &pool, left, right)?;
        candidate[i..i + 3].copy_from_slice(&replacement);
        trace!("replaced sequential run at position {}", i);

        i += 3;
    }

    Ok(())
}

fn replacement_run<S: EntropySource + ?Sized>(
    source: &mut S,
    pool: &[char],
    left: Option<char>,
    right: Option<char>,
) -> Result<[char; 3]> {
    loop {
        let mut run = ['\0'; 3];
        for slot in run.iter_mut() {
            *slot = loop {
                let c = sample(source, pool)?;
                let touches_left = left.is_some_and(|l| is_adjacent(l, c));
                let touches_right = right.is_some_and(|r| is_adjacent(c, r));
                if !touches_left && !touches_right {
                    break c;
                }
            };
        }
        if !is_sequential(run[0], run[1], run[2]) {
            return Ok(run);
        }
    }
}

/// Apply the enabled constraints to a raw candidate, in stage order
pub fn enforce<S: EntropySource + ?Sized>(
    source: &mut S,
    candidate: Vec<char>,
    request: &GenerationRequest,
) -> Result<Vec<char>> {
    let mut candidate = candidate;

    if request.no_similar {
        candidate = remove_similar(&candidate);
        trace!("similar removal left {} characters", candidate.len());
    }
    if request.no_duplicates {
        candidate = remove_duplicates(&candidate);
        trace!("duplicate removal left {} characters", candidate.len());
    }
    if request.no_sequential {
        remove_sequential(source, &mut candidate)?;
    }

    Ok(candidate)
}
