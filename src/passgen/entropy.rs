//! Secure sampling from a character pool
//!
//! All randomness comes from an [`EntropySource`]. The production source is
//! the operating system CSPRNG; a failing source surfaces as
//! [`GeneratorError::EntropySourceFailure`] and is never replaced by a
//! weaker generator.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{GeneratorError, Result};

/// Source of uniformly distributed 32-bit words
pub trait EntropySource {
    /// Next random word, or an error if the source cannot produce output
    fn next_u32(&mut self) -> Result<u32>;
}

/// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn next_u32(&mut self) -> Result<u32> {
        OsRng
            .try_next_u32()
            .map_err(|e| GeneratorError::EntropySourceFailure(e.to_string()))
    }
}

/// Draw an index uniformly from `0..n`.
///
/// Words below `2^32 mod n` are rejected so the remaining range is an exact
/// multiple of `n` and the final modulus carries no bias.
pub fn sample_index<S: EntropySource + ?Sized>(source: &mut S, n: usize) -> Result<usize> {
    let range = u32::try_from(n)
        .ok()
        .filter(|&r| r > 0)
        .ok_or_else(|| {
            GeneratorError::InvalidConfiguration(format!("cannot sample from a pool of size {}", n))
        })?;

    let threshold = range.wrapping_neg() % range;
    loop {
        let word = source.next_u32()?;
        if word >= threshold {
            return Ok((word % range) as usize);
        }
    }
}

/// Draw one character uniformly from `pool`
pub fn sample<S: EntropySource + ?Sized>(source: &mut S, pool: &[char]) -> Result<char> {
    let idx = sample_index(source, pool.len())?;
    Ok(pool[idx])
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of words, then fails
    pub struct ScriptedEntropy {
        words: VecDeque<u32>,
    }

    impl ScriptedEntropy {
        pub fn new(words: &[u32]) -> Self {
            Self { words: words.iter().copied().collect() }
        }
    }

    impl EntropySource for ScriptedEntropy {
        fn next_u32(&mut self) -> Result<u32> {
            self.words
                .pop_front()
                .ok_or_else(|| GeneratorError::EntropySourceFailure("script exhausted".to_string()))
        }
    }

    /// Always fails
    pub struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn next_u32(&mut self) -> Result<u32> {
            Err(GeneratorError::EntropySourceFailure("source unavailable".to_string()))
        }
    }

    /// Delegates to the system source for a fixed number of words, then fails
    pub struct ExhaustingEntropy {
        pub remaining: usize,
    }

    impl EntropySource for ExhaustingEntropy {
        fn next_u32(&mut self) -> Result<u32> {
            if self.remaining == 0 {
                return Err(GeneratorError::EntropySourceFailure("source drained".to_string()));
            }
            self.remaining -= 1;
            SystemEntropy.next_u32()
        }
    }
}
