// src/core/state.rs
//! Form state and the rule that keeps the password in sync with it.
//!
//! The password is a [`Derived`] value: a compute function plus the list of
//! form fields it reads. Every setter on [`FormState`] reports which field it
//! changed, and the derived value is recomputed once per change of a field it
//! depends on. Writing a field's current value back is not a change.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::generators::PasswordGenerator;
use crate::models::{clamp_length, Configuration};

/// Inputs of the form that derived values can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    DigitsAllowed,
    SymbolsAllowed,
}

pub const ALL_FIELDS: [Field; 3] = [Field::Length, Field::DigitsAllowed, Field::SymbolsAllowed];

pub struct Derived<T> {
    inputs: Vec<Field>,
    compute: Box<dyn FnMut(&Configuration) -> T>,
    value: T,
    recomputations: u64,
}

impl<T: Default> Derived<T> {
    pub fn new<F>(inputs: &[Field], compute: F) -> Self
    where
        F: FnMut(&Configuration) -> T + 'static,
    {
        Self {
            inputs: inputs.to_vec(),
            compute: Box::new(compute),
            value: T::default(),
            recomputations: 0,
        }
    }
}

impl<T> Derived<T> {
    pub fn depends_on(&self, field: Field) -> bool {
        self.inputs.contains(&field)
    }

    // Overwrites the current value
    pub fn recompute(&mut self, config: &Configuration) {
        self.value = (self.compute)(config);
        self.recomputations += 1;
    }

    /// Recomputes if `changed` is one of the inputs. Returns whether it did.
    pub fn notify(&mut self, changed: Field, config: &Configuration) -> bool {
        if !self.depends_on(changed) {
            return false;
        }
        self.recompute(config);
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

pub struct FormState {
    config: Configuration,
    password: Derived<String>,
}

impl FormState {
    /// Mounts the form with the thread-local RNG.
    pub fn new(config: Configuration) -> Self {
        Self::with_generator(config, PasswordGenerator::<ThreadRng>::new())
    }

    pub fn with_generator<R: Rng + 'static>(config: Configuration, mut generator: PasswordGenerator<R>) -> Self {
        let password = Derived::new(&ALL_FIELDS, move |config: &Configuration| {
            generator.generate_password(config)
        });

        let mut state = Self {
            config: Configuration::new(config.length, config.digits_allowed, config.symbols_allowed),
            password,
        };

        // Mount counts as a change of every input
        state.password.recompute(&state.config);
        log::debug!("Form mounted with {:?}", state.config);
        state
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn password(&self) -> &str {
        self.password.get()
    }

    pub fn regenerations(&self) -> u64 {
        self.password.recomputations()
    }

    /// Sets the length, clamped to the slider range. Returns whether the
    /// password was regenerated.
    pub fn set_length(&mut self, length: usize) -> bool {
        let length = clamp_length(length);
        if self.config.length == length {
            return false;
        }
        self.config.length = length;
        self.changed(Field::Length)
    }

    pub fn set_digits_allowed(&mut self, allowed: bool) -> bool {
        if self.config.digits_allowed == allowed {
            return false;
        }
        self.config.digits_allowed = allowed;
        self.changed(Field::DigitsAllowed)
    }

    pub fn set_symbols_allowed(&mut self, allowed: bool) -> bool {
        if self.config.symbols_allowed == allowed {
            return false;
        }
        self.config.symbols_allowed = allowed;
        self.changed(Field::SymbolsAllowed)
    }

    pub fn toggle_digits(&mut self) -> bool {
        self.set_digits_allowed(!self.config.digits_allowed)
    }

    pub fn toggle_symbols(&mut self) -> bool {
        self.set_symbols_allowed(!self.config.symbols_allowed)
    }

    fn changed(&mut self, field: Field) -> bool {
        log::debug!("{:?} changed: {:?}", field, self.config);
        self.password.notify(field, &self.config)
    }
}
