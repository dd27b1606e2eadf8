mod bfs_solver;
mod dfs_generator;
mod wall_policy;

pub use bfs_solver::BfsSolver;
pub use dfs_generator::DfsGenerator;
pub use wall_policy::WallPolicy;

use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeded generator when a seed is given, fresh entropy otherwise.
pub fn random_from_seed(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}
