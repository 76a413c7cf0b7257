use super::policy::Policy;
use super::session::Session;
use crate::error::Error;
use crate::game::Model;
use crate::Money;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// the Monte Carlo run: many independent sessions of the same experiment.
///
/// sessions are embarrassingly parallel. each gets its own rng stream derived
/// purely from (seed, session index), so no mutable random state is shared,
/// the result multiset cannot depend on execution order or thread count, and
/// the whole run is bit-for-bit reproducible from the seed. output order is
/// session-index order regardless of completion order.
#[derive(Debug, Clone)]
pub struct Engine {
    model: Model,
    policy: Policy,
    sessions: usize,
    rounds: usize,
    bankroll: Money,
    seed: u64,
    retain: bool,
}

impl Engine {
    /// a missing seed draws one from entropy: the run is still internally
    /// deterministic per index, just not reproducible across invocations.
    pub fn new(
        model: Model,
        policy: Policy,
        sessions: usize,
        rounds: usize,
        bankroll: Money,
        seed: Option<u64>,
    ) -> Self {
        Self {
            model,
            policy,
            sessions,
            rounds,
            bankroll,
            seed: seed.unwrap_or_else(|| rand::rng().random()),
            retain: false,
        }
    }

    /// keep full round-level history on every session. opt-in: it costs
    /// O(sessions x rounds) memory.
    pub fn retain(mut self) -> Self {
        self.retain = true;
        self
    }

    pub fn run(&self) -> Result<Vec<Session>, Error> {
        self.run_with(|_| {})
    }

    /// run with a completed-count callback. the callback observes progress
    /// and never alters control flow. an invalid bet in any session aborts
    /// the whole run with that session's context attached.
    pub fn run_with<F>(&self, tick: F) -> Result<Vec<Session>, Error>
    where
        F: Fn(usize) + Sync,
    {
        let done = AtomicUsize::new(0);
        (0..self.sessions)
            .into_par_iter()
            .map(|index| {
                let ref mut rng = self.stream(index);
                let session = Session::play(
                    index,
                    &self.model,
                    &self.policy,
                    self.rounds,
                    self.bankroll,
                    self.retain,
                    rng,
                )?;
                tick(done.fetch_add(1, Ordering::Relaxed) + 1);
                Ok(session)
            })
            .collect()
    }

    /// per-session stream: hash (seed, index) into a SmallRng seed. a pure
    /// function of its inputs, so any parallelism degree derives the same
    /// stream for the same session.
    fn stream(&self, index: usize) -> SmallRng {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        index.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}
