//! Tuning knobs for modulus validation and the root search.

/// Candidate moduli below this bound are settled by exact trial division;
/// everything above goes through Miller-Rabin.
pub const TRIAL_DIVISION_BOUND: u64 = 1000;

/// Independent Miller-Rabin witness rounds. A composite survives all of them
/// with probability at most 4^-10.
pub const MILLER_RABIN_ROUNDS: u32 = 10;

/// Deterministic candidates t = 1..=SMALL_T_LIMIT tried before falling back
/// to random draws when searching for a non-residue omega = t^2 - a.
pub const SMALL_T_LIMIT: u64 = 10;

/// Upper bound on random t draws before the solver gives up and reports an
/// empty solution set.
pub const RANDOM_T_ATTEMPTS: usize = 100;
