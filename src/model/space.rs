//! Architecture-space enumerator
//!
//! A lazy, finite walk over the cross product of the three swept parameter
//! ranges. Cache size varies fastest, then input width, then pipe count,
//! like the digits of an odometer. The walk is replayable via `restart`.

use crate::constants::{CACHE_SIZE_SWEEP, INPUT_WIDTH_SWEEP, NUM_PIPES_SWEEP};
use crate::model::architecture::{ArchParams, SpmvArchitecture};
use crate::model::cycles::CycleModel;
use crate::model::range::Range;

/// Enumerates one owned `SpmvArchitecture` per parameter combination.
///
/// Yields `None` once the pipe-count range wraps; `restart` rewinds all
/// three ranges and clears the exhaustion flag. The enumerator owns none of
/// the architectures it produces.
#[derive(Debug, Clone)]
pub struct ArchitectureSpace {
    cache_size: Range,
    input_width: Range,
    num_pipes: Range,
    model: CycleModel,
    exhausted: bool,
}

impl ArchitectureSpace {
    /// # Panics
    ///
    /// Panics if any range starts at zero; every visited triple must be a
    /// valid architecture configuration.
    pub fn new(
        cache_size: Range,
        input_width: Range,
        num_pipes: Range,
        model: CycleModel,
    ) -> Self {
        assert!(cache_size.start > 0, "cache_size range must start above zero");
        assert!(input_width.start > 0, "input_width range must start above zero");
        assert!(num_pipes.start > 0, "num_pipes range must start above zero");
        Self { cache_size, input_width, num_pipes, model, exhausted: false }
    }

    /// The default sweep from `constants`, for the given cycle policy.
    pub fn with_defaults(model: CycleModel) -> Self {
        Self::new(
            CACHE_SIZE_SWEEP.into(),
            INPUT_WIDTH_SWEEP.into(),
            NUM_PIPES_SWEEP.into(),
            model,
        )
    }

    /// Total number of parameter combinations in the space.
    pub fn len(&self) -> usize {
        self.cache_size.len() * self.input_width.len() * self.num_pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rewinds the walk to the first combination.
    pub fn restart(&mut self) {
        self.cache_size.restart();
        self.input_width.restart();
        self.num_pipes.restart();
        self.exhausted = false;
    }
}

impl Iterator for ArchitectureSpace {
    type Item = SpmvArchitecture;

    fn next(&mut self) -> Option<SpmvArchitecture> {
        if self.exhausted {
            return None;
        }

        // ranges are checked positive at construction, so the triple is valid
        let params = ArchParams::new(
            self.cache_size.crt(),
            self.input_width.crt(),
            self.num_pipes.crt(),
        )
        .ok()?;
        let result = SpmvArchitecture::new(params, self.model);

        self.cache_size.advance();
        if self.cache_size.at_start() {
            self.input_width.advance();
            if self.input_width.at_start() {
                self.num_pipes.advance();
                if self.num_pipes.at_start() {
                    self.exhausted = true;
                }
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, Some(self.len()))
        }
    }
}
