//! Square roots in Z_p: a decimal big-integer engine, a Miller-Rabin
//! modulus check, and Cipolla's quadratic-residue solver.

pub mod bigint;
pub mod cipolla;
pub mod error;
pub mod params;
pub mod primes;
pub mod timers;

pub use bigint::BigInt;
pub use error::{Error, Result};
