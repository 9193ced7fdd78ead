// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::models::Configuration;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~`";

/// Characters a password may be drawn from.
///
/// Letters are always present; digits and symbols are appended when their
/// toggle is on. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
}

impl Alphabet {
    pub fn new(digits_allowed: bool, symbols_allowed: bool) -> Self {
        let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

        chars.extend(LETTERS.bytes());
        if digits_allowed {
            chars.extend(DIGITS.bytes());
        }
        if symbols_allowed {
            chars.extend(SYMBOLS.bytes());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    #[cfg(test)]
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Draws `length` characters independently and uniformly from the alphabet.
    ///
    /// `length` is taken as-is; range checks belong to the length control.
    pub fn generate(&mut self, length: usize, digits_allowed: bool, symbols_allowed: bool) -> String {
        let alphabet = Alphabet::new(digits_allowed, symbols_allowed);
        if alphabet.is_empty() || length == 0 {
            return String::new();
        }
        let index = Uniform::from(0..alphabet.len());

        let password: String = (0..length)
            .map(|_| alphabet.chars[index.sample(&mut self.rng)] as char)
            .collect();

        log::debug!(
            "Generated password of length {} (numbers: {}, characters: {}, alphabet: {})",
            length,
            digits_allowed,
            symbols_allowed,
            alphabet.len()
        );

        password
    }

    pub fn generate_password(&mut self, config: &Configuration) -> String {
        self.generate(config.length, config.digits_allowed, config.symbols_allowed)
    }
}
