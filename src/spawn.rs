use rand::Rng;

use crate::aggregate::Aggregate;
use crate::position::{Dimension, Position};
use crate::seed::AttractorKind;

impl Aggregate {
    /// Draw a starting position on the spawn surface for a fresh walker.
    /// CIRCLE and SPHERE reuse the POINT surface — they differ only in
    /// their seed geometry, not in where walkers are launched from.
    pub(crate) fn spawn_particle(&mut self) -> Position {
        match self.attractor {
            AttractorKind::Point | AttractorKind::Circle | AttractorKind::Sphere => {
                self.spawn_point_surface()
            }
            AttractorKind::Line => self.spawn_line_surface(),
            AttractorKind::Plane => self.spawn_plane_surface(),
        }
    }

    fn spawn_point_surface(&mut self) -> Position {
        let d = self.spawn_diam as f64;
        let r0: f64 = self.rng.gen();

        match self.dim {
            Dimension::Two => {
                let r1: f64 = self.rng.gen();
                if r0 < 0.5 {
                    // Horizontal edge.
                    let x = (d * (r1 - 0.5)) as i64;
                    let y = if r0 < 0.25 { self.spawn_diam / 2 } else { -self.spawn_diam / 2 };
                    Position::P2 { x, y }
                } else {
                    // Vertical edge, symmetric to the horizontal case.
                    let y = (d * (r1 - 0.5)) as i64;
                    let x = if r0 < 0.75 { self.spawn_diam / 2 } else { -self.spawn_diam / 2 };
                    Position::P2 { x, y }
                }
            }
            Dimension::Three => {
                let half = self.spawn_diam / 2;
                let in_plane = |rng: &mut rand_pcg::Pcg64| -> i64 {
                    let u: f64 = rng.gen();
                    (d * (u - 0.5)) as i64
                };
                if r0 < 1.0 / 3.0 {
                    let sign = if r0 < 1.0 / 6.0 { 1 } else { -1 };
                    let y = in_plane(&mut self.rng);
                    let z = in_plane(&mut self.rng);
                    Position::P3 { x: sign * half, y, z }
                } else if r0 < 2.0 / 3.0 {
                    let local = r0 - 1.0 / 3.0;
                    let sign = if local < 1.0 / 6.0 { 1 } else { -1 };
                    let x = in_plane(&mut self.rng);
                    let z = in_plane(&mut self.rng);
                    Position::P3 { x, y: sign * half, z }
                } else {
                    let local = r0 - 2.0 / 3.0;
                    let sign = if local < 1.0 / 6.0 { 1 } else { -1 };
                    let x = in_plane(&mut self.rng);
                    let y = in_plane(&mut self.rng);
                    Position::P3 { x, y, z: sign * half }
                }
            }
        }
    }

    fn line_x(&mut self) -> i64 {
        let u: f64 = self.rng.gen();
        2 * (self.att_size as f64 * (u - 0.5)) as i64
    }

    fn half_coin(&mut self) -> bool {
        self.rng.gen::<f64>() < 0.5
    }

    fn spawn_line_surface(&mut self) -> Position {
        let x = self.line_x();
        let positive = self.half_coin();
        let signed_diam = if positive { self.spawn_diam } else { -self.spawn_diam };

        match self.dim {
            Dimension::Two => Position::P2 { x, y: signed_diam },
            Dimension::Three => Position::P3 {
                x,
                y: signed_diam,
                z: signed_diam,
            },
        }
    }

    fn spawn_plane_surface(&mut self) -> Position {
        let x = self.line_x();
        let y = self.line_x();
        let z = if self.half_coin() { self.spawn_diam } else { -self.spawn_diam };
        Position::P3 { x, y, z }
    }
}
