use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::position::{Dimension, Position};

/// Lattice move-set geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeKind {
    /// Square (2D) / cubic (3D) axis-aligned moves.
    Square,
    /// Triangular (2D) / tetrahedral-ish (3D) moves. The 3D move set is
    /// taken verbatim from the reference implementation and does not
    /// describe a true fcc/hcp neighbourhood (see SPEC_FULL.md open
    /// question 4) — it is not "fixed" here.
    Triangle,
}

impl Aggregate {
    /// Advance `pos` by one lattice step, drawing a single uniform value
    /// and comparing it against cumulative thresholds in the declared
    /// order of each move set. The final branch of every chain is an
    /// `else`, absorbing any floating-point residue.
    pub(crate) fn lattice_step(&mut self, pos: Position) -> Position {
        let u: f64 = self.rng.gen();
        match (self.lattice, self.dim) {
            (LatticeKind::Square, Dimension::Two) => {
                if u < 0.25 {
                    pos.translated(1, 0, 0)
                } else if u < 0.5 {
                    pos.translated(-1, 0, 0)
                } else if u < 0.75 {
                    pos.translated(0, 1, 0)
                } else {
                    pos.translated(0, -1, 0)
                }
            }
            (LatticeKind::Square, Dimension::Three) => {
                if u < 1.0 / 6.0 {
                    pos.translated(1, 0, 0)
                } else if u < 2.0 / 6.0 {
                    pos.translated(-1, 0, 0)
                } else if u < 3.0 / 6.0 {
                    pos.translated(0, 1, 0)
                } else if u < 4.0 / 6.0 {
                    pos.translated(0, -1, 0)
                } else if u < 5.0 / 6.0 {
                    pos.translated(0, 0, 1)
                } else {
                    pos.translated(0, 0, -1)
                }
            }
            (LatticeKind::Triangle, Dimension::Two) => {
                if u < 1.0 / 6.0 {
                    pos.translated(1, 0, 0)
                } else if u < 2.0 / 6.0 {
                    pos.translated(-1, 0, 0)
                } else if u < 3.0 / 6.0 {
                    pos.translated(1, 1, 0)
                } else if u < 4.0 / 6.0 {
                    pos.translated(1, -1, 0)
                } else if u < 5.0 / 6.0 {
                    pos.translated(-1, 1, 0)
                } else {
                    pos.translated(-1, -1, 0)
                }
            }
            (LatticeKind::Triangle, Dimension::Three) => {
                if u < 1.0 / 8.0 {
                    pos.translated(1, 1, 0)
                } else if u < 2.0 / 8.0 {
                    pos.translated(1, -1, 0)
                } else if u < 3.0 / 8.0 {
                    pos.translated(-1, -1, 0)
                } else if u < 4.0 / 8.0 {
                    pos.translated(-1, 1, 0)
                } else if u < 5.0 / 8.0 {
                    pos.translated(1, 0, 0)
                } else if u < 6.0 / 8.0 {
                    pos.translated(-1, 0, 0)
                } else if u < 7.0 / 8.0 {
                    pos.translated(0, 0, 1)
                } else {
                    pos.translated(0, 0, -1)
                }
            }
        }
    }
}
