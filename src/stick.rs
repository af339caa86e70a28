use rand::Rng;

use crate::aggregate::Aggregate;
use crate::position::{Dimension, Position};
use crate::seed::AttractorKind;

fn isqrt_floor(v: i64) -> i64 {
    (v as f64).sqrt().floor() as i64
}

impl Aggregate {
    /// Linear scan over `stuck` in insertion order, stopping at the first
    /// match. Correct and cache-friendly for the cluster sizes this engine
    /// targets; a spatial index is a legitimate optimization as long as it
    /// preserves observable stick order (SPEC_FULL.md §4.4).
    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.stuck.iter().any(|&p| p == pos)
    }

    /// Collision / stick rule: draw `u`; if `u > stickiness`, no stick.
    /// Otherwise test `curr` for membership; on a hit, stick at `prev`.
    /// Testing at `curr` but sticking at `prev` is what keeps every stuck
    /// position distinct (invariant 2) and produces the surface-hugging
    /// DLA silhouette.
    pub(crate) fn try_stick(&mut self, prev: Position, curr: Position) -> bool {
        let u: f64 = self.rng.gen();
        if u > self.stickiness {
            return false;
        }
        if !self.contains(curr) {
            return false;
        }
        self.record_stick(prev);
        true
    }

    /// Append `prev` to `stuck` and update the aggregate's growth
    /// metrics. The LINE/PLANE `spawn_diam` update uses the *signed*
    /// `prev.y`/`prev.z`, matching the reference exactly (SPEC_FULL.md
    /// open question 1); `spawn_diam` itself can still only grow, because
    /// the update is folded through `max`.
    pub(crate) fn record_stick(&mut self, prev: Position) {
        let grew_x = prev.x().abs() > self.max_x;
        if grew_x {
            self.max_x = prev.x().abs();
        }
        let grew_y = prev.y().abs() > self.max_y;
        if grew_y {
            self.max_y = prev.y().abs();
        }
        let grew_z = self.dim == Dimension::Three && prev.z().abs() > self.max_z;
        if grew_z {
            self.max_z = prev.z().abs();
        }

        match self.attractor {
            AttractorKind::Point => {
                let r2 = prev.radius_sqd();
                if r2 > self.max_r_sqd {
                    self.max_r_sqd = r2;
                    self.spawn_diam = self.spawn_diam.max(2 * isqrt_floor(r2) + self.b_offset);
                }
            }
            AttractorKind::Line => {
                if grew_y {
                    self.spawn_diam = self.spawn_diam.max(prev.y() + self.b_offset);
                }
                if grew_z {
                    self.spawn_diam = self.spawn_diam.max(prev.z() + self.b_offset);
                }
            }
            AttractorKind::Plane => {
                if grew_z {
                    self.spawn_diam = self.spawn_diam.max(prev.z() + self.b_offset);
                }
            }
            AttractorKind::Circle | AttractorKind::Sphere => {
                // spawn_diam does not adapt dynamically for these shapes.
            }
        }

        self.stuck.push(prev);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::lattice::LatticeKind;
    use crate::position::{Dimension, Position};
    use crate::seed::AttractorKind;
    use crate::Aggregate;

    #[test]
    fn contains_finds_seed_and_stuck_entries() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Point,
            stickiness: 1.0,
            att_size: 1,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(10),
        });
        assert!(a.contains(Position::P2 { x: 0, y: 0 }));
        assert!(!a.contains(Position::P2 { x: 5, y: 5 }));
    }

    #[test]
    fn record_stick_grows_max_r_sqd_and_spawn_diam_for_point() {
        let mut a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Point,
            stickiness: 1.0,
            att_size: 1,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(11),
        });
        let before = a.spawn_diam();
        a.record_stick(Position::P2 { x: 3, y: 4 });
        assert_eq!(a.max_r_sqd(), 25);
        assert!(a.spawn_diam() >= before);
        assert_eq!(a.spawn_diam(), 2 * 5 + 6);
    }

    #[test]
    fn record_stick_spawn_diam_never_shrinks_on_negative_line_growth() {
        let mut a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Line,
            stickiness: 1.0,
            att_size: 5,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(12),
        });
        let before = a.spawn_diam();
        // A negative-y growth step should never retract spawn_diam below
        // its starting value, even though the update itself is signed.
        a.record_stick(Position::P2 { x: 0, y: -50 });
        assert!(a.spawn_diam() >= before);
    }
}
