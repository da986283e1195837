//! Packer configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position-search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Plain raster scan: lowest layer first, first free anchor wins.
    #[default]
    RasterScan,
    /// Stacking-biased scan: rest items on supported layers before
    /// spreading across the base.
    StackingFirst,
}

impl Strategy {
    /// Returns the human-readable strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RasterScan => "RasterScan",
            Strategy::StackingFirst => "StackingFirst",
        }
    }
}

/// Configuration for a [`Packer`](crate::Packer).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Position-search strategy.
    pub strategy: Strategy,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position-search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
