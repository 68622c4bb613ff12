//! Generation requests, length bounds and default settings
//!
//! Settings are plain values. [`Settings::defaults`] builds a fresh value on
//! every call; nothing here is shared or mutated globally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{GeneratorError, Result};
use crate::{DEFAULT_QUANTITY, PASSWORD_DEFAULT_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Everything one generation call needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    /// Target length of each password
    pub length: usize,
    /// Number of independent passwords
    pub quantity: usize,
    /// Include `!@#$%^&*()-_=+[]{}|;:,.<>/?`
    pub include_symbols: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include uppercase letters (A-Z)
    pub include_upper: bool,
    /// Include lowercase letters (a-z)
    pub include_lower: bool,
    /// Draw the first character from the enabled letter classes
    pub begin_with_letter: bool,
    /// Remove characters from the similar set
    pub no_similar: bool,
    /// Keep only the first occurrence of each character
    pub no_duplicates: bool,
    /// Replace ascending/descending three-character runs
    pub no_sequential: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: PASSWORD_DEFAULT_LENGTH,
            quantity: DEFAULT_QUANTITY,
            include_symbols: true,
            include_numbers: true,
            include_upper: true,
            include_lower: true,
            begin_with_letter: false,
            no_similar: false,
            no_duplicates: false,
            no_sequential: false,
        }
    }
}

impl GenerationRequest {
    /// True if at least one character class is enabled
    pub fn has_any_class(&self) -> bool {
        self.include_symbols || self.include_numbers || self.include_upper || self.include_lower
    }

    /// True if at least one letter class is enabled
    pub fn has_letter_class(&self) -> bool {
        self.include_upper || self.include_lower
    }

    /// Check the request before any sampling happens
    pub fn validate(&self) -> Result<()> {
        if !self.has_any_class() {
            return Err(GeneratorError::InvalidConfiguration(
                "at least one character type must be selected".to_string(),
            ));
        }
        if self.begin_with_letter && !self.has_letter_class() {
            return Err(GeneratorError::InvalidConfiguration(
                "beginning with a letter requires uppercase or lowercase letters".to_string(),
            ));
        }
        if self.length == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "length must be greater than zero".to_string(),
            ));
        }
        if self.quantity == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "quantity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Length limits for the presentation layer's length control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: PASSWORD_MIN_LENGTH,
            max: PASSWORD_MAX_LENGTH,
            default: PASSWORD_DEFAULT_LENGTH,
        }
    }
}

impl LengthBounds {
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    pub fn clamp(&self, length: usize) -> usize {
        length.clamp(self.min, self.max)
    }

    /// Requires `1 <= min <= default <= max`
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(GeneratorError::InvalidConfiguration(
                "minimum length must be greater than zero".to_string(),
            ));
        }
        if self.min > self.max {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "minimum length {} exceeds maximum length {}",
                self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "default length {} is outside {}..={}",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Length bounds plus the request the controls start from.
///
/// When the serialized form has no request length, the length is taken
/// from `bounds.default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SettingsFile")]
pub struct Settings {
    pub bounds: LengthBounds,
    pub request: GenerationRequest,
}

/// On-disk layout; the request stays untyped until the length default is known
#[derive(Deserialize, Default)]
#[serde(default)]
struct SettingsFile {
    bounds: LengthBounds,
    request: Map<String, Value>,
}

impl TryFrom<SettingsFile> for Settings {
    type Error = serde_json::Error;

    fn try_from(file: SettingsFile) -> std::result::Result<Self, Self::Error> {
        let mut request = file.request;
        request
            .entry("length")
            .or_insert_with(|| Value::from(file.bounds.default));
        Ok(Self {
            bounds: file.bounds,
            request: serde_json::from_value(Value::Object(request))?,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    /// Fresh default settings: lengths 6..=32 (default 12), one password,
    /// every character class on, every structure flag off
    pub fn defaults() -> Self {
        let bounds = LengthBounds::default();
        let request = GenerationRequest {
            length: bounds.default,
            ..Default::default()
        };
        Self { bounds, request }
    }

    /// Parse settings from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Bounds must be consistent and the stored request must be generatable
    /// with a length inside the bounds
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        self.request.validate()?;
        if !self.bounds.contains(self.request.length) {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "length {} is outside {}..={}",
                self.request.length, self.bounds.min, self.bounds.max
            )));
        }
        Ok(())
    }

    /// Copy of the stored request with `length` clamped to the bounds
    pub fn request_with_length(&self, length: usize) -> GenerationRequest {
        GenerationRequest {
            length: self.bounds.clamp(length),
            ..self.request.clone()
        }
    }
}
