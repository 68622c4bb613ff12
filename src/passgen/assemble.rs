//! Raw candidate assembly

use super::entropy::{EntropySource, sample};
use crate::error::{GeneratorError, Result};

/// Draw `length` independent characters from `pool`.
///
/// When `begin_with_letter` is set, position 0 is drawn from `letter_pool`
/// instead. No position depends on any other at this stage.
pub fn assemble<S: EntropySource + ?Sized>(
    source: &mut S,
    pool: &[char],
    length: usize,
    begin_with_letter: bool,
    letter_pool: &[char],
) -> Result<Vec<char>> {
    if pool.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "at least one character type must be selected".to_string(),
        ));
    }
    if begin_with_letter && letter_pool.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "beginning with a letter requires uppercase or lowercase letters".to_string(),
        ));
    }

    let mut candidate = Vec::with_capacity(length);
    for i in 0..length {
        let c = if i == 0 && begin_with_letter {
            sample(source, letter_pool)?
        } else {
            sample(source, pool)?
        };
        candidate.push(c);
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::super::entropy::SystemEntropy;
    use super::super::entropy::testing::{BrokenEntropy, ScriptedEntropy};
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_assemble_length() {
        let pool = chars("abcdef");
        for length in [1, 6, 32, 100] {
            let candidate = assemble(&mut SystemEntropy, &pool, length, false, &[]).unwrap();
            assert_eq!(candidate.len(), length);
            assert!(candidate.iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_assemble_first_from_letter_pool() {
        let pool = chars("0123456789");
        let letters = chars("XY");
        for _ in 0..50 {
            let candidate = assemble(&mut SystemEntropy, &pool, 8, true, &letters).unwrap();
            assert!(letters.contains(&candidate[0]));
            assert!(candidate[1..].iter().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_assemble_scripted_positions() {
        // Power-of-two pools never reject, so each word maps to one position
        let pool = chars("abcd");
        let letters = chars("WXYZ");
        let mut source = ScriptedEntropy::new(&[3, 0, 1, 2]);
        let candidate = assemble(&mut source, &pool, 4, true, &letters).unwrap();
        assert_eq!(candidate, chars("Zabc"));
    }

    #[test]
    fn test_assemble_empty_pool() {
        let err = assemble(&mut SystemEntropy, &[], 8, false, &[]).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_assemble_letter_required_without_letters() {
        let pool = chars("0123");
        let err = assemble(&mut SystemEntropy, &pool, 8, true, &[]).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_assemble_entropy_failure() {
        let pool = chars("abcd");
        let err = assemble(&mut BrokenEntropy, &pool, 4, false, &[]).unwrap_err();
        assert!(err.is_entropy_failure());
    }
}
