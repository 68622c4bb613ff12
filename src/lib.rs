//! # passforge
//!
//! Randomized password generation under structural constraints.
//!
//! ## Features
//!
//! - Character pool built from symbols, digits, uppercase and lowercase classes
//! - Uniform sampling from the operating system CSPRNG with rejection of biased words
//! - Optional letter-first passwords
//! - Removal of similar-looking and duplicate characters
//! - Repair of ascending/descending three-character runs
//! - JSON settings with length bounds
//!
//! ## Length drift
//!
//! Similar and duplicate removal delete characters without replacing them,
//! so with `no_similar` or `no_duplicates` enabled a password can come back
//! shorter than the requested length.
//!
//! ## Example
//!
//! ```
//! use passforge::{generate_many, GenerationRequest};
//!
//! let request = GenerationRequest {
//!     length: 16,
//!     quantity: 3,
//!     include_symbols: false,
//!     begin_with_letter: true,
//!     ..Default::default()
//! };
//!
//! let passwords = generate_many(&request).unwrap();
//! assert_eq!(passwords.len(), 3);
//! for password in &passwords {
//!     assert!(password.chars().next().unwrap().is_ascii_alphabetic());
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod passgen;

// Re-export main types
pub use config::{GenerationRequest, LengthBounds, Settings};
pub use controller::GeneratorController;
pub use error::{GeneratorError, Result};
pub use passgen::{
    EntropySource, SystemEntropy, generate_many, generate_many_with, generate_one,
    generate_one_with,
};

/// Minimum password length offered by the default bounds
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum password length offered by the default bounds
pub const PASSWORD_MAX_LENGTH: usize = 32;

/// Default password length
pub const PASSWORD_DEFAULT_LENGTH: usize = 12;

/// Default number of passwords per request
pub const DEFAULT_QUANTITY: usize = 1;
