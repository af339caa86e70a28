use rand_pcg::Pcg64;

use crate::lattice::LatticeKind;
use crate::position::{Dimension, Position};
use crate::seed::AttractorKind;

/// A single diffusion-limited-aggregation run.
///
/// Constructed once via [`Aggregate::new`], grown by repeated calls to
/// [`Aggregate::generate`], and read through the accessors below. There is
/// no explicit teardown — storage is released when the value is dropped.
pub struct Aggregate {
    pub(crate) dim: Dimension,
    pub(crate) lattice: LatticeKind,
    pub(crate) attractor: AttractorKind,
    pub(crate) stickiness: f64,

    pub(crate) stuck: Vec<Position>,
    pub(crate) seed: Vec<Position>,
    pub(crate) required_steps: Vec<u64>,
    pub(crate) boundary_collisions: Vec<u64>,

    pub(crate) max_x: i64,
    pub(crate) max_y: i64,
    pub(crate) max_z: i64,
    pub(crate) max_r_sqd: i64,

    pub(crate) b_offset: i64,
    pub(crate) spawn_diam: i64,
    pub(crate) att_size: i64,

    pub(crate) max_walk_steps: u64,

    pub(crate) rng: Pcg64,
}

impl Aggregate {
    /// Number of particles currently stuck, including the seed prefix.
    pub fn len(&self) -> usize {
        self.stuck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stuck.is_empty()
    }

    /// The stuck particle at index `i`, in insertion order. Panics (as any
    /// `Vec` index does) if `i >= self.len()`.
    pub fn particle_at(&self, i: usize) -> Position {
        self.stuck[i]
    }

    /// Lattice-step counts, one per non-seed stuck particle, in the order
    /// they stuck.
    pub fn required_steps(&self) -> &[u64] {
        &self.required_steps
    }

    /// Boundary-collision counts, one per non-seed stuck particle, in the
    /// order they stuck.
    pub fn boundary_collisions(&self) -> &[u64] {
        &self.boundary_collisions
    }

    /// The seed prefix of `stuck`, kept separately so it stays
    /// identifiable after generation grows the cluster around it.
    pub fn seed(&self) -> &[Position] {
        &self.seed
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    /// Always `0` for a 2D aggregate.
    pub fn max_z(&self) -> i64 {
        self.max_z
    }

    pub fn max_r_sqd(&self) -> i64 {
        self.max_r_sqd
    }

    pub fn spawn_diam(&self) -> i64 {
        self.spawn_diam
    }

    pub fn att_size(&self) -> i64 {
        self.att_size
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn lattice(&self) -> LatticeKind {
        self.lattice
    }

    pub fn attractor(&self) -> AttractorKind {
        self.attractor
    }

    pub fn stickiness(&self) -> f64 {
        self.stickiness
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::lattice::LatticeKind;
    use crate::position::Dimension;
    use crate::seed::AttractorKind;
    use crate::Aggregate;

    #[test]
    fn invariant_one_holds_right_after_construction() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Line,
            stickiness: 1.0,
            att_size: 5,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(20),
        });
        assert_eq!(a.len(), a.seed().len() + a.required_steps().len());
        assert_eq!(a.len(), a.seed().len() + a.boundary_collisions().len());
        assert!(a.required_steps().is_empty());
    }
}
