//! Diffusion-limited aggregation: lattice random walks that stick to a
//! growing cluster.
//!
//! An [`Aggregate`] is seeded with an attractor geometry, then grown one
//! particle at a time via [`Aggregate::generate`]. Each particle is a
//! random walker released from an adaptive spawn surface; it steps on a
//! [`LatticeKind`] lattice, is reflected back by an elastic boundary when
//! it strays too far, and sticks (with probability `stickiness`) the
//! first time it lands on an already-stuck neighbor.
//!
//! This crate has no file I/O, no rendering, and no UI — it is the
//! simulation engine a binding crate builds those on top of.

mod aggregate;
mod boundary;
mod config;
mod error;
mod generator;
mod lattice;
mod position;
mod rng;
mod seed;
mod spawn;
mod stick;

pub use aggregate::Aggregate;
pub use config::{GeneratorConfig, DEFAULT_B_OFFSET, DEFAULT_MAX_WALK_STEPS};
pub use error::GenerateError;
pub use generator::WalkOutcome;
pub use lattice::LatticeKind;
pub use position::{Dimension, Position};
pub use seed::AttractorKind;
