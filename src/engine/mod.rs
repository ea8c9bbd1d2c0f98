//! The sorting engine: one explicit owner for everything a visualizer
//! session mutates.
//!
//! [`SortingEngine`] holds the displayed array (inside its
//! [`PlaybackScheduler`]), the selected algorithm, the frame delay and the
//! random source used to regenerate the array. Every transition is a method
//! on it, so there is exactly one writer for the array at any time.

mod accessors;
mod playback;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use self::playback::PlayRequest;
use crate::algorithm::Algorithm;
use crate::error::SortvizError;
use crate::options::EngineOptions;
use crate::playback::PlaybackScheduler;
use crate::util::random::random_values;

/// Frame generator, playback scheduler and array source for one session.
pub struct SortingEngine {
    options: EngineOptions,
    algorithm: Algorithm,
    scheduler: PlaybackScheduler,
    rng: StdRng,
}

impl SortingEngine {
    /// Engine with a freshly generated random array.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::InvalidOptions`] if `options` fail
    /// validation.
    pub fn new(options: EngineOptions) -> Result<Self, SortvizError> {
        options.validate()?;
        let mut rng = match options.array.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let values = random_values(
            &mut rng,
            options.array.length,
            options.array.min_value,
            options.array.max_value,
        );
        Ok(Self::assemble(options, values, rng))
    }

    /// Engine displaying `values` instead of a random array. Later resets
    /// still draw random arrays as configured.
    ///
    /// # Errors
    ///
    /// Returns [`SortvizError::InvalidOptions`] if `options` fail
    /// validation.
    pub fn with_values(
        options: EngineOptions,
        values: Vec<u32>,
    ) -> Result<Self, SortvizError> {
        options.validate()?;
        let rng = match options.array.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::assemble(options, values, rng))
    }

    fn assemble(options: EngineOptions, values: Vec<u32>, rng: StdRng) -> Self {
        log::debug!(
            "engine ready: {} values, {} at {}ms",
            values.len(),
            options.algorithm,
            options.speed.default_ms
        );
        Self {
            algorithm: options.algorithm,
            scheduler: PlaybackScheduler::new(
                values,
                options.speed.to_speed(),
            ),
            options,
            rng,
        }
    }

    /// A fresh random array drawn with the configured length and range.
    fn draw_values(&mut self) -> Vec<u32> {
        let array = &self.options.array;
        random_values(
            &mut self.rng,
            array.length,
            array.min_value,
            array.max_value,
        )
    }
}

impl std::fmt::Debug for SortingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortingEngine")
            .field("algorithm", &self.algorithm)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
