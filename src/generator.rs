use crate::aggregate::Aggregate;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::rng;

/// Outcome of a single walker's attempt to reach the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The walker stuck after `steps` lattice steps, `boundary_collisions`
    /// of which were reverted by the boundary enforcer.
    Stuck { steps: u64, boundary_collisions: u64 },
    /// The walker exhausted its step budget without sticking. Normal
    /// flow, not an error — the driver abandons it and spawns a fresh
    /// walker (SPEC_FULL.md §7, §8 scenario 5).
    Exhausted { steps: u64, boundary_collisions: u64 },
}

impl Aggregate {
    /// Construct an empty, seeded aggregate. Panics if `config` describes
    /// a contract violation (SPEC_FULL.md §7).
    pub fn new(config: GeneratorConfig) -> Aggregate {
        config.validate();

        let mut aggregate = Aggregate {
            dim: config.dim,
            lattice: config.lattice,
            attractor: config.attractor,
            stickiness: config.stickiness,
            stuck: Vec::new(),
            seed: Vec::new(),
            required_steps: Vec::new(),
            boundary_collisions: Vec::new(),
            max_x: 0,
            max_y: 0,
            max_z: 0,
            max_r_sqd: 0,
            b_offset: config.b_offset,
            spawn_diam: config.b_offset,
            att_size: if matches!(config.attractor, crate::seed::AttractorKind::Point) {
                1
            } else {
                config.att_size
            },
            max_walk_steps: config.max_walk_steps,
            rng: rng::make_rng(config.seed),
        };

        aggregate.seed_attractor();
        tracing::debug!(
            dim = ?aggregate.dim,
            lattice = ?aggregate.lattice,
            attractor = ?aggregate.attractor,
            stickiness = aggregate.stickiness,
            seed_particles = aggregate.seed.len(),
            "aggregate initialized",
        );
        aggregate
    }

    /// Pre-size the particle and statistics storage for `additional` more
    /// particles. Fails with [`GenerateError::ResourceExhausted`] rather
    /// than aborting the process, per SPEC_FULL.md §7.
    pub fn reserve(&mut self, additional: usize) -> Result<(), GenerateError> {
        self.stuck.try_reserve(additional)?;
        self.required_steps.try_reserve(additional)?;
        self.boundary_collisions.try_reserve(additional)?;
        Ok(())
    }

    /// Run a single walker from spawn to either stick or step-budget
    /// exhaustion. Exposed (crate-visible) so tests can exercise the
    /// bounded-budget scenario directly without going through `generate`.
    pub(crate) fn attempt_particle(&mut self) -> WalkOutcome {
        let mut curr = self.spawn_particle();
        let mut steps: u64 = 0;
        let mut boundary_collisions: u64 = 0;

        loop {
            if steps >= self.max_walk_steps {
                return WalkOutcome::Exhausted { steps, boundary_collisions };
            }

            let prev = curr;
            let stepped = self.lattice_step(prev);
            steps += 1;

            let (resolved, counted) = self.enforce_boundary(prev, stepped);
            if counted {
                boundary_collisions += 1;
            }
            curr = resolved;

            if self.try_stick(prev, curr) {
                return WalkOutcome::Stuck { steps, boundary_collisions };
            }
        }
    }

    /// Generate until `n` more particles have stuck, or `cancel` returns
    /// `true` between particles. `progress`, if given, is called after
    /// every stick with `(stuck_so_far, n)`.
    pub fn generate(
        &mut self,
        n: usize,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
        mut cancel: Option<&mut dyn FnMut() -> bool>,
    ) -> Result<(), GenerateError> {
        self.reserve(n)?;

        let mut stuck_so_far = 0usize;
        while stuck_so_far < n {
            loop {
                match self.attempt_particle() {
                    WalkOutcome::Stuck { steps, boundary_collisions } => {
                        self.required_steps.push(steps);
                        self.boundary_collisions.push(boundary_collisions);
                        stuck_so_far += 1;
                        tracing::trace!(steps, boundary_collisions, stuck_so_far, "particle stuck");
                        if let Some(cb) = progress.as_deref_mut() {
                            cb(stuck_so_far, n);
                        }
                        break;
                    }
                    WalkOutcome::Exhausted { steps, boundary_collisions } => {
                        tracing::debug!(steps, boundary_collisions, "walk exhausted, respawning");
                    }
                }
            }

            if let Some(cb) = cancel.as_deref_mut() {
                if cb() {
                    tracing::debug!(stuck_so_far, n, "generate cancelled");
                    return Ok(());
                }
            }
        }

        tracing::debug!(stuck_so_far, n, "generate complete");
        Ok(())
    }
}
