use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::position::{Dimension, Position};

/// Seed attractor geometry. 2D aggregates admit `Point`, `Line`, `Circle`;
/// 3D aggregates admit all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttractorKind {
    Point,
    Line,
    Circle,
    Sphere,
    Plane,
}

impl Aggregate {
    /// Materialize the initial seed geometry into `stuck` and `seed`.
    /// Called once, from `Aggregate::new`, before any walking occurs.
    pub(crate) fn seed_attractor(&mut self) {
        match self.attractor {
            AttractorKind::Point => self.seed_point(),
            AttractorKind::Line => self.seed_line(),
            AttractorKind::Circle => self.seed_circle(),
            AttractorKind::Sphere => self.seed_sphere(),
            AttractorKind::Plane => self.seed_plane(),
        }
    }

    fn push_seed(&mut self, p: Position) {
        self.seed.push(p);
        self.stuck.push(p);
    }

    fn seed_point(&mut self) {
        self.push_seed(Position::origin(self.dim));
    }

    fn seed_line(&mut self) {
        let half = self.att_size / 2;
        for i in 0..self.att_size {
            let x = i - half;
            let p = match self.dim {
                Dimension::Two => Position::P2 { x, y: 0 },
                Dimension::Three => Position::P3 { x, y: 0, z: 0 },
            };
            self.push_seed(p);
        }
    }

    /// Sweep theta from 0 to 2*pi inclusive in steps of 1/att_size.
    /// Coarse sweeps can revisit the same rounded lattice point — that
    /// duplication is kept (SPEC_FULL.md open question 3), not deduped.
    fn seed_circle(&mut self) {
        let n = self.att_size as f64;
        let step = 1.0 / n;
        let steps = (2.0 * PI / step).floor() as i64 + 1;
        for i in 0..=steps {
            let theta = (i as f64 * step).min(2.0 * PI);
            let x = (n * theta.cos()).floor() as i64;
            let y = (n * theta.sin()).floor() as i64;
            let p = match self.dim {
                Dimension::Two => Position::P2 { x, y },
                Dimension::Three => Position::P3 { x, y, z: 0 },
            };
            self.push_seed(p);
            if theta >= 2.0 * PI {
                break;
            }
        }
    }

    /// Double sweep: phi (azimuthal) 0..=2*pi, nested theta (polar)
    /// -pi/2..=pi/2, both stepped by 1/att_size.
    fn seed_sphere(&mut self) {
        let n = self.att_size as f64;
        let step = 1.0 / n;
        let phi_steps = (2.0 * PI / step).floor() as i64 + 1;
        let theta_steps = (PI / step).floor() as i64 + 1;

        for pi_idx in 0..=phi_steps {
            let phi = (pi_idx as f64 * step).min(2.0 * PI);
            for ti_idx in 0..=theta_steps {
                let theta = (-PI / 2.0 + ti_idx as f64 * step).min(PI / 2.0);
                let x = (n * theta.sin() * phi.cos()).floor() as i64;
                let y = (n * theta.sin() * phi.sin()).floor() as i64;
                let z = (n * theta.cos()).floor() as i64;
                self.push_seed(Position::P3 { x, y, z });
                if theta >= PI / 2.0 {
                    break;
                }
            }
            if phi >= 2.0 * PI {
                break;
            }
        }
    }

    fn seed_plane(&mut self) {
        let half = self.att_size / 2;
        for i in 0..self.att_size {
            for j in 0..self.att_size {
                self.push_seed(Position::P3 {
                    x: i - half,
                    y: j - half,
                    z: 0,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::lattice::LatticeKind;
    use crate::position::Dimension;
    use crate::Aggregate;

    #[test]
    fn point_seed_is_single_origin() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: super::AttractorKind::Point,
            stickiness: 1.0,
            att_size: 1,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(1),
        });
        assert_eq!(a.len(), 1);
        assert_eq!(a.seed().len(), 1);
        assert_eq!(a.particle_at(0).x(), 0);
        assert_eq!(a.particle_at(0).y(), 0);
    }

    #[test]
    fn line_seed_has_att_size_particles_centered_on_origin() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: super::AttractorKind::Line,
            stickiness: 1.0,
            att_size: 5,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(2),
        });
        assert_eq!(a.len(), 5);
        let xs: Vec<i64> = (0..5).map(|i| a.particle_at(i).x()).collect();
        assert_eq!(xs, vec![-2, -1, 0, 1, 2]);
        for i in 0..5 {
            assert_eq!(a.particle_at(i).y(), 0);
        }
    }

    #[test]
    fn plane_seed_has_att_size_squared_particles() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Three,
            lattice: LatticeKind::Square,
            attractor: super::AttractorKind::Plane,
            stickiness: 1.0,
            att_size: 4,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(5),
        });
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn sphere_seed_only_produces_3d_positions() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Three,
            lattice: LatticeKind::Square,
            attractor: super::AttractorKind::Sphere,
            stickiness: 1.0,
            att_size: 4,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(6),
        });
        assert!(a.len() > 0);
        for i in 0..a.len() {
            let p = a.particle_at(i);
            assert!(matches!(p, crate::Position::P3 { .. }));
        }
    }
}
