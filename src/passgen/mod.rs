//! Constrained password generation
//!
//! A request flows one way through the pipeline:
//! character pool -> raw candidate -> constrained candidate -> output.
//! Every call builds its own pool and candidate buffer, so independent
//! calls can run on separate threads without coordination.
//!
//! The pipeline never prints and does not log at batch level; batch logging
//! belongs to [`crate::GeneratorController`]. The constraint stages emit
//! `trace!` records (lengths and positions only) through the `log` facade,
//! which are discarded unless the host installs a logger.

pub mod charset;
pub mod entropy;
pub mod assemble;
pub mod constraints;

pub use charset::{SIMILAR_CHARACTERS, build_pool, letter_pool};
pub use entropy::{EntropySource, SystemEntropy};

use crate::config::GenerationRequest;
use crate::error::Result;

/// Generate one password from the OS CSPRNG.
///
/// With `no_similar` or `no_duplicates` set the result may be shorter than
/// `request.length`; removed characters are not replaced.
///
/// # Example
/// ```
/// use passforge::{generate_one, GenerationRequest};
///
/// let request = GenerationRequest { length: 16, ..Default::default() };
/// let password = generate_one(&request).unwrap();
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate_one(request: &GenerationRequest) -> Result<String> {
    generate_one_with(&mut SystemEntropy, request)
}

/// Generate `request.quantity` passwords from the OS CSPRNG.
///
/// The first failure aborts the batch; no partial list is returned.
pub fn generate_many(request: &GenerationRequest) -> Result<Vec<String>> {
    generate_many_with(&mut SystemEntropy, request)
}

/// [`generate_one`] with an explicit entropy source
pub fn generate_one_with<S: EntropySource + ?Sized>(
    source: &mut S,
    request: &GenerationRequest,
) -> Result<String> {
    request.validate()?;
    build_password(source, request)
}

/// [`generate_many`] with an explicit entropy source
pub fn generate_many_with<S: EntropySource + ?Sized>(
    source: &mut S,
    request: &GenerationRequest,
) -> Result<Vec<String>> {
    request.validate()?;

    let mut passwords = Vec::with_capacity(request.quantity);
    for _ in 0..request.quantity {
        passwords.push(build_password(source, request)?);
    }

    Ok(passwords)
}

fn build_password<S: EntropySource + ?Sized>(
    source: &mut S,
    request: &GenerationRequest,
) -> Result<String> {
    let pool = build_pool(request);
    let letters = if request.begin_with_letter {
        letter_pool(request)
    } else {
        Vec::new()
    };

    let candidate = assemble::assemble(
        source,
        &pool,
        request.length,
        request.begin_with_letter,
        &letters,
    )?;
    let candidate = constraints::enforce(source, candidate, request)?;

    Ok(candidate.into_iter().collect())
}
