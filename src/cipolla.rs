//! Square roots modulo an odd prime via Cipolla's algorithm.
//!
//! Given a quadratic residue `a` mod `p`, find some `t` with `t^2 - a` a
//! non-residue `omega`, then compute `(t + sqrt(omega))^((p+1)/2)` in
//! `GF(p)[sqrt(omega)]`; the real component of the result is a square root
//! of `a`. See algorithm 2.3.9 in Prime Numbers: A Computational Perspective.

use rand::Rng;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::params::{RANDOM_T_ATTEMPTS, SMALL_T_LIMIT};

/// Returns the 0, 1, or 2 square roots of `a` modulo the prime `p`.
///
/// The caller is expected to have validated `p` with
/// [`crate::primes::is_acceptable_modulus`]; a composite modulus that
/// reaches the Legendre computation surfaces as
/// [`Error::InvariantViolation`].
pub fn solve(a: &BigInt, p: &BigInt, rng: &mut impl Rng) -> Result<Vec<BigInt>> {
    solve_with_limits(a, p, SMALL_T_LIMIT, RANDOM_T_ATTEMPTS, rng)
}

/// [`solve`] with explicit search bounds, so exhaustion behavior can be
/// exercised deterministically.
pub fn solve_with_limits(
    a: &BigInt,
    p: &BigInt,
    small_t_limit: u64,
    random_attempts: usize,
    rng: &mut impl Rng,
) -> Result<Vec<BigInt>> {
    if *p <= BigInt::from(2u64) {
        return Ok(Vec::new());
    }
    if a.try_rem(p)?.is_zero() {
        return Ok(vec![BigInt::zero()]);
    }
    if legendre_symbol(a, p)? != 1 {
        return Ok(Vec::new());
    }

    for t in 1..=small_t_limit {
        if let Some(roots) = try_candidate(&BigInt::from(t), a, p)? {
            return Ok(roots);
        }
    }
    for _ in 0..random_attempts {
        let t = BigInt::random_below(rng, p)?;
        if let Some(roots) = try_candidate(&t, a, p)? {
            return Ok(roots);
        }
    }
    Ok(Vec::new())
}

/// Euler's criterion: `a^((p-1)/2)` must reduce to 0, 1, or p-1. Anything
/// else means `p` was not prime after all.
pub fn legendre_symbol(a: &BigInt, p: &BigInt) -> Result<i8> {
    let one = BigInt::one();
    let exponent = (p - &one).try_div(&BigInt::from(2u64))?;
    let residue = a.modpow(&exponent, p)?;
    if residue.is_zero() {
        return Ok(0);
    }
    if residue == one {
        return Ok(1);
    }
    if residue == p - &one {
        return Ok(-1);
    }
    Err(Error::InvariantViolation)
}

/// Tries one `t`: if `omega = t^2 - a` is a nonzero non-residue, exponentiate
/// in the extension and verify the candidate roots against `a`.
fn try_candidate(t: &BigInt, a: &BigInt, p: &BigInt) -> Result<Option<Vec<BigInt>>> {
    let mut omega = (t * t - a).try_rem(p)?;
    if omega < BigInt::zero() {
        omega = omega + p;
    }
    if omega.is_zero() || legendre_symbol(&omega, p)? != -1 {
        return Ok(None);
    }

    let exponent = (p + BigInt::one()).try_div(&BigInt::from(2u64))?;
    let (x, _) = extension_pow(t, &omega, &exponent, p)?;
    let x1 = (x + p).try_rem(p)?;
    let x2 = (p - &x1).try_rem(p)?;

    let target = a.try_rem(p)?;
    let mut roots = Vec::new();
    if (&x1 * &x1).try_rem(p)? == target {
        roots.push(x1.clone());
    }
    if x2 != x1 && (&x2 * &x2).try_rem(p)? == target {
        roots.push(x2);
    }
    if roots.is_empty() {
        Ok(None)
    } else {
        Ok(Some(roots))
    }
}

/// Product of two elements `r + i*sqrt(omega)` of `GF(p)[sqrt(omega)]`.
fn extension_mul(
    lhs: &(BigInt, BigInt),
    rhs: &(BigInt, BigInt),
    omega: &BigInt,
    p: &BigInt,
) -> Result<(BigInt, BigInt)> {
    let real = (&lhs.0 * &rhs.0 + &lhs.1 * &rhs.1 * omega).try_rem(p)?;
    let imag = (&lhs.0 * &rhs.1 + &lhs.1 * &rhs.0).try_rem(p)?;
    Ok((real, imag))
}

/// Binary exponentiation of `t + sqrt(omega)` in the extension ring.
fn extension_pow(
    t: &BigInt,
    omega: &BigInt,
    exponent: &BigInt,
    p: &BigInt,
) -> Result<(BigInt, BigInt)> {
    let one = BigInt::one();
    let two = BigInt::from(2u64);
    let zero = BigInt::zero();
    let mut result = (BigInt::one(), BigInt::zero());
    let mut base = (t.try_rem(p)?, BigInt::one());
    let mut exp = exponent.clone();
    while exp > zero {
        if exp.try_rem(&two)? == one {
            result = extension_mul(&result, &base, omega, p)?;
        }
        base = extension_mul(&base, &base, omega, p)?;
        exp = exp.try_div(&two)?;
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn roots_of(a: u64, p: u64) -> Vec<u64> {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut roots: Vec<u64> = solve(&BigInt::from(a), &BigInt::from(p), &mut rng)
            .unwrap()
            .iter()
            .map(|r| r.to_u64().unwrap())
            .collect();
        roots.sort();
        roots
    }

    fn slow_roots(a: u64, p: u64) -> Vec<u64> {
        (0..p).filter(|x| (x * x) % p == a % p).collect()
    }

    #[test]
    fn known_scenarios() {
        assert_eq!(roots_of(10, 13), vec![6, 7]);
        assert_eq!(roots_of(4, 11), vec![2, 9]);
        // 3 is a non-residue mod 7
        assert_eq!(roots_of(3, 7), Vec::<u64>::new());
    }

    #[test]
    fn zero_residue_has_the_single_root_zero() {
        assert_eq!(roots_of(0, 13), vec![0]);
        assert_eq!(roots_of(13, 13), vec![0]);
        assert_eq!(roots_of(26, 13), vec![0]);
    }

    #[test]
    fn modulus_at_most_two_yields_nothing() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(solve(&big("1"), &big("2"), &mut rng).unwrap(), vec![]);
        assert_eq!(solve(&big("1"), &big("1"), &mut rng).unwrap(), vec![]);
    }

    #[test]
    fn exhaustive_mod_13() {
        for a in 0..13u64 {
            assert_eq!(roots_of(a, 13), slow_roots(a, 13), "a = {}", a);
        }
    }

    #[test]
    fn roots_square_back_mod_101() {
        let p = 101u64;
        let mut residues = 0;
        for a in 1..p {
            let roots = roots_of(a, p);
            assert_eq!(roots, slow_roots(a, p), "a = {}", a);
            if !roots.is_empty() {
                residues += 1;
                assert_eq!(roots.len(), 2);
                // the two roots are additive inverses mod p
                assert_eq!(roots[0] + roots[1], p);
            }
        }
        assert_eq!(residues, (p as usize - 1) / 2);
    }

    #[test]
    fn large_prime_round_trip() {
        let p = big("1000003");
        let k = big("1234");
        let a = (&k * &k).try_rem(&p).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let roots = solve(&a, &p, &mut rng).unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots.contains(&k));
        for r in &roots {
            assert_eq!((r * r).try_rem(&p).unwrap(), a);
        }
    }

    #[test]
    fn exhausted_search_returns_empty() {
        let mut rng = SmallRng::seed_from_u64(5);
        let roots = solve_with_limits(&big("10"), &big("13"), 0, 0, &mut rng).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn legendre_symbol_values() {
        assert_eq!(legendre_symbol(&big("10"), &big("13")).unwrap(), 1);
        assert_eq!(legendre_symbol(&big("3"), &big("7")).unwrap(), -1);
        assert_eq!(legendre_symbol(&big("26"), &big("13")).unwrap(), 0);
    }

    #[test]
    fn legendre_symbol_rejects_composite_modulus() {
        // 2^7 = 128 = 8 (mod 15), which is none of 0, 1, p-1
        assert_eq!(
            legendre_symbol(&big("2"), &big("15")),
            Err(Error::InvariantViolation)
        );
    }
}
