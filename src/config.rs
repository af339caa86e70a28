use serde::{Deserialize, Serialize};

use crate::lattice::LatticeKind;
use crate::position::Dimension;
use crate::seed::AttractorKind;

/// Default per-particle step budget before a walk is abandoned and
/// respawned (see SPEC_FULL.md §7 and §8 scenario 5).
pub const DEFAULT_MAX_WALK_STEPS: u64 = 10_000_000;

/// Default spawn-region margin.
pub const DEFAULT_B_OFFSET: i64 = 6;

/// Construction parameters for an [`crate::Aggregate`].
///
/// Validated once, in [`crate::Aggregate::new`]. Derives `Serialize`/
/// `Deserialize` so a binding crate can round-trip it through whatever
/// format it chooses — this crate itself performs no file I/O, per
/// SPEC_FULL.md §1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub dim: Dimension,
    pub lattice: LatticeKind,
    pub attractor: AttractorKind,
    /// Probability, in `[0, 1]`, that a coincident collision actually
    /// sticks.
    pub stickiness: f64,
    /// Characteristic seed size. Ignored (treated as `1`) for `Point`;
    /// required to be `>= 1` for every other attractor.
    pub att_size: i64,
    /// Spawn-region margin constant.
    pub b_offset: i64,
    /// Per-particle walk-step budget before the walker is abandoned.
    pub max_walk_steps: u64,
    /// `Some(seed)` for a reproducible run; `None` draws a seed from OS
    /// entropy once, at construction.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// A config with sane defaults for the given dimension/lattice/
    /// attractor: stickiness 1.0, att_size 1 (valid for `Point` only, so
    /// callers must override it for the other four shapes), wall-clock
    /// seeding.
    pub fn new(dim: Dimension, lattice: LatticeKind, attractor: AttractorKind) -> Self {
        GeneratorConfig {
            dim,
            lattice,
            attractor,
            stickiness: 1.0,
            att_size: 1,
            b_offset: DEFAULT_B_OFFSET,
            max_walk_steps: DEFAULT_MAX_WALK_STEPS,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_att_size(mut self, att_size: i64) -> Self {
        self.att_size = att_size;
        self
    }

    pub fn with_stickiness(mut self, stickiness: f64) -> Self {
        self.stickiness = stickiness;
        self
    }

    /// Panics (a contract violation, per SPEC_FULL.md §7) if the
    /// dim/attractor pairing is disallowed, `stickiness` is out of
    /// `[0, 1]`, or `att_size` is not `>= 1` for a shape that needs it.
    pub(crate) fn validate(&self) {
        assert!(
            (0.0..=1.0).contains(&self.stickiness),
            "stickiness must be within [0, 1], got {}",
            self.stickiness
        );

        let allowed = match self.dim {
            Dimension::Two => matches!(
                self.attractor,
                AttractorKind::Point | AttractorKind::Line | AttractorKind::Circle
            ),
            Dimension::Three => true,
        };
        assert!(
            allowed,
            "attractor {:?} is not valid for dimension {:?}",
            self.attractor, self.dim
        );

        let needs_att_size = !matches!(self.attractor, AttractorKind::Point);
        if needs_att_size {
            assert!(
                self.att_size >= 1,
                "att_size must be >= 1 for attractor {:?}, got {}",
                self.attractor,
                self.att_size
            );
        }
    }
}
