use crate::aggregate::Aggregate;
use crate::position::{Dimension, Position};
use crate::seed::AttractorKind;

/// Elastic margin applied to every bounding region.
const EPS: i64 = 2;

impl Aggregate {
    /// Revert `curr` back to `prev` if it left the attractor-specific
    /// bounding region. Returns the (possibly reverted) position and
    /// whether the event should be counted as a boundary collision.
    ///
    /// The 2D LINE region reverts without counting, matching the
    /// reference behavior documented as open question 2 in
    /// SPEC_FULL.md — this is preserved deliberately, not a bug.
    pub(crate) fn enforce_boundary(&self, prev: Position, curr: Position) -> (Position, bool) {
        let within = match self.attractor {
            AttractorKind::Point | AttractorKind::Circle | AttractorKind::Sphere => {
                let lim = self.spawn_diam / 2 + EPS;
                curr.x().abs() <= lim && curr.y().abs() <= lim && curr.z().abs() <= lim
            }
            AttractorKind::Line => {
                let x_ok = curr.x().abs() <= 2 * self.att_size;
                let y_ok = curr.y().abs() <= self.spawn_diam + EPS;
                match self.dim {
                    Dimension::Two => x_ok && y_ok,
                    Dimension::Three => {
                        let z_ok = curr.z().abs() <= self.spawn_diam + EPS;
                        x_ok && y_ok && z_ok
                    }
                }
            }
            AttractorKind::Plane => {
                let lim_xy = 2 * self.att_size;
                curr.x().abs() <= lim_xy
                    && curr.y().abs() <= lim_xy
                    && curr.z().abs() <= self.spawn_diam + EPS
            }
        };

        if within {
            (curr, false)
        } else {
            let counted = !(self.dim == Dimension::Two && self.attractor == AttractorKind::Line);
            (prev, counted)
        }
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
    fn point_region_reverts_and_counts_outside_margin() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Point,
            stickiness: 1.0,
            att_size: 1,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(3),
        });
        let lim = a.spawn_diam() / 2 + 2;
        let prev = Position::P2 { x: lim, y: 0 };
        let curr = Position::P2 { x: lim + 1, y: 0 };
        let (resolved, counted) = a.enforce_boundary(prev, curr);
        assert_eq!(resolved, prev);
        assert!(counted);
    }

    #[test]
    fn line_2d_region_reverts_without_counting() {
        let a = Aggregate::new(GeneratorConfig {
            dim: Dimension::Two,
            lattice: LatticeKind::Square,
            attractor: AttractorKind::Line,
            stickiness: 1.0,
            att_size: 5,
            b_offset: 6,
            max_walk_steps: 1_000,
            seed: Some(4),
        });
        let prev = Position::P2 { x: 0, y: 0 };
        let curr = Position::P2 { x: 2 * 5 + 1, y: 0 };
        let (resolved, counted) = a.enforce_boundary(prev, curr);
        assert_eq!(resolved, prev);
        assert!(!counted);
    }
}
