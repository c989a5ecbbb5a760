//! Modulus validation: trial division for small candidates, Miller-Rabin
//! above the threshold.

use rand::Rng;

use crate::bigint::BigInt;
use crate::error::Result;
use crate::params::{MILLER_RABIN_ROUNDS, TRIAL_DIVISION_BOUND};

/// True iff `p` is an odd prime strictly greater than 2, which is what the
/// solver requires of its modulus. Probabilistic above
/// [`TRIAL_DIVISION_BOUND`].
pub fn is_acceptable_modulus(p: &BigInt, rng: &mut impl Rng) -> Result<bool> {
    let two = BigInt::from(2u64);
    if *p <= two {
        return Ok(false);
    }
    if p.try_rem(&two)?.is_zero() {
        return Ok(false);
    }
    if *p < BigInt::from(TRIAL_DIVISION_BOUND) {
        return trial_division(p);
    }
    miller_rabin(p, MILLER_RABIN_ROUNDS, rng)
}

/// Exact test for small odd candidates: divide by every odd integer from 3
/// up to p/2 inclusive.
fn trial_division(p: &BigInt) -> Result<bool> {
    let two = BigInt::from(2u64);
    let max = p.try_div(&two)?;
    let mut i = BigInt::from(3u64);
    while i <= max {
        if p.try_rem(&i)?.is_zero() {
            return Ok(false);
        }
        i = i + &two;
    }
    Ok(true)
}

/// Miller-Rabin with random witnesses. Decomposes `p - 1 = d * 2^s` with `d`
/// odd, then runs `rounds` independent rounds; any round that exposes a
/// nontrivial square root of unity proves `p` composite.
fn miller_rabin(p: &BigInt, rounds: u32, rng: &mut impl Rng) -> Result<bool> {
    let one = BigInt::one();
    let two = BigInt::from(2u64);
    let p_minus_1 = p - &one;

    let mut d = p_minus_1.clone();
    let mut s = 0u32;
    while d.try_rem(&two)?.is_zero() {
        d = d.try_div(&two)?;
        s += 1;
    }

    for _ in 0..rounds {
        let a = BigInt::random_below(rng, &(p - &two))? + &one;
        let mut x = a.modpow(&d, p)?;
        if x == one || x == p_minus_1 {
            continue;
        }
        let mut composite = true;
        for _ in 1..s {
            x = x.modpow(&two, p)?;
            if x == p_minus_1 {
                composite = false;
                break;
            }
            if x == one {
                return Ok(false);
            }
        }
        if composite {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn check(s: &str) -> bool {
        let mut rng = SmallRng::seed_from_u64(99);
        is_acceptable_modulus(&s.parse().unwrap(), &mut rng).unwrap()
    }

    #[test]
    fn small_table() {
        // 2 is prime but not an acceptable modulus
        for rejected in ["-5", "0", "1", "2", "4", "9", "15", "999", "561"] {
            assert!(!check(rejected), "{} should be rejected", rejected);
        }
        for accepted in ["3", "5", "7", "13", "101", "661", "997"] {
            assert!(check(accepted), "{} should be accepted", accepted);
        }
    }

    #[test]
    fn probabilistic_path_above_threshold() {
        // first primes above the trial-division bound
        assert!(check("1009"));
        assert!(check("1013"));
        assert!(check("104729"));
        // 1001 = 7 * 11 * 13, 8911 is a Carmichael number
        assert!(!check("1001"));
        assert!(!check("8911"));
        assert!(!check("104730"));
    }
}
