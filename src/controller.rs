//! Entry point for presentation layers
//!
//! The controller carries the settings a UI starts from and hands
//! requests to the generator unchanged.

use log::debug;

use crate::config::{GenerationRequest, LengthBounds, Settings};
use crate::error::Result;
use crate::passgen;

/// Owns the settings for one UI session
#[derive(Debug, Clone, Default)]
pub struct GeneratorController {
    settings: Settings,
}

impl GeneratorController {
    /// Controller with fresh default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::defaults())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> LengthBounds {
        self.settings.bounds
    }

    /// The request the UI controls start from
    pub fn default_request(&self) -> GenerationRequest {
        self.settings.request.clone()
    }

    /// Generate `request.quantity` passwords
    pub fn generate_passwords(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        debug!(
            "generating {} passwords: length={} symbols={} numbers={} upper={} lower={} \
             begin_with_letter={} no_similar={} no_duplicates={} no_sequential={}",
            request.quantity,
            request.length,
            request.include_symbols,
            request.include_numbers,
            request.include_upper,
            request.include_lower,
            request.begin_with_letter,
            request.no_similar,
            request.no_duplicates,
            request.no_sequential,
        );

        let passwords = passgen::generate_many(request)?;
        debug!("generated {} passwords", passwords.len());
        Ok(passwords)
    }
}
