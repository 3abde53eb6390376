//! Configuration for a dice engine.

use crate::locale::Locale;

/// Configuration for a [`GroupDiceEngine`](crate::GroupDiceEngine).
#[derive(Debug, Clone, Default)]
pub struct DiceConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Locale applied by front ends when a context does not name one.
    pub locale: Locale,
}

impl DiceConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the fallback locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
