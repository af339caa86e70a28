use serde::{Deserialize, Serialize};

/// Lattice dimensionality of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Two,
    Three,
}

/// An integer lattice coordinate.
///
/// `P2` carries `(x, y)`; `P3` carries `(x, y, z)`. Which variant appears in
/// a given [`crate::Aggregate`] is fixed by its [`Dimension`] at
/// construction and never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    P2 { x: i64, y: i64 },
    P3 { x: i64, y: i64, z: i64 },
}

impl Position {
    pub fn origin(dim: Dimension) -> Position {
        match dim {
            Dimension::Two => Position::P2 { x: 0, y: 0 },
            Dimension::Three => Position::P3 { x: 0, y: 0, z: 0 },
        }
    }

    pub fn x(&self) -> i64 {
        match *self {
            Position::P2 { x, .. } | Position::P3 { x, .. } => x,
        }
    }

    pub fn y(&self) -> i64 {
        match *self {
            Position::P2 { y, .. } | Position::P3 { y, .. } => y,
        }
    }

    /// `0` for `P2`, since a 2D point has no out-of-plane extent.
    pub fn z(&self) -> i64 {
        match *self {
            Position::P2 { .. } => 0,
            Position::P3 { z, .. } => z,
        }
    }

    /// Squared Euclidean distance from the origin.
    pub fn radius_sqd(&self) -> i64 {
        self.x() * self.x() + self.y() * self.y() + self.z() * self.z()
    }

    /// Offset this position by `(dx, dy, dz)`. `dz` is ignored for `P2`.
    pub fn translated(&self, dx: i64, dy: i64, dz: i64) -> Position {
        match *self {
            Position::P2 { x, y } => Position::P2 { x: x + dx, y: y + dy },
            Position::P3 { x, y, z } => Position::P3 {
                x: x + dx,
                y: y + dy,
                z: z + dz,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_defaults_to_zero_in_2d() {
        let p = Position::P2 { x: 3, y: -4 };
        assert_eq!(p.z(), 0);
        assert_eq!(p.radius_sqd(), 25);
    }

    #[test]
    fn translate_preserves_variant() {
        let p = Position::origin(Dimension::Three).translated(1, -1, 2);
        assert_eq!(p, Position::P3 { x: 1, y: -1, z: 2 });

        let p2 = Position::origin(Dimension::Two).translated(1, -1, 99);
        assert_eq!(p2, Position::P2 { x: 1, y: -1 });
    }
}
