//! Rank-skewed sampling over a small number of ordered options.
//!
//! A [`Zipfy`] over `n` options returns an index in `0..n`, where index `0` is the most
//! likely and index `n - 1` the least likely. Option lists handed to it must therefore be
//! ordered from most to least common.
//!
//! The draw is an inverse-CDF walk over triangular numbers: scale a uniform `u` by
//! `T(n) = n(n + 1) / 2`, find the smallest `m` with `T(m) >= u * T(n)` and return `n - m`.
//! Index `r` ends up with weight `n - r`, so for three options the odds are 3 : 2 : 1.

use crate::{PhonoGenError, PhonoGenResult};
use rand::distributions::Distribution;
use rand::Rng;

/// `1 + 2 + ... + n`
pub fn triangular_number(n: usize) -> f64 {
    let n = n as f64;
    (n * n + n) / 2.
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zipfy {
    n: usize,
    total: f64,
}

impl Zipfy {
    pub fn new(n: usize) -> PhonoGenResult<Self> {
        if n == 0 {
            return Err(PhonoGenError::InvalidDistributionInput(n));
        }
        Ok(Self {
            n,
            total: triangular_number(n),
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Distribution<usize> for Zipfy {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.n == 1 {
            return 0;
        }
        let target = rng.gen::<f64>() * self.total;
        // m = 0 is only reachable for a draw of exactly zero and would map to index n.
        let mut m = 1;
        while m < self.n && triangular_number(m) < target {
            m += 1;
        }
        self.n - m
    }
}

/// Draws an index into `n` options ordered from most to least common.
pub fn zipfy_index<R: Rng + ?Sized>(rng: &mut R, n: usize) -> PhonoGenResult<usize> {
    Ok(Zipfy::new(n)?.sample(rng))
}

/// Picks one of `options`, favouring the front of the slice.
pub fn choose_zipfy<'a, T, R: Rng + ?Sized>(
    options: &'a [T],
    rng: &mut R,
) -> PhonoGenResult<&'a T> {
    let idx = zipfy_index(rng, options.len())?;
    Ok(&options[idx])
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 60_000;

    fn histogram(n: usize, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Zipfy::new(n).unwrap();
        let mut counts = vec![0; n];
        for _ in 0..TRIALS {
            counts[dist.sample(&mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn t_triangular_numbers() {
        assert_eq!(triangular_number(0), 0.);
        assert_eq!(triangular_number(1), 1.);
        assert_eq!(triangular_number(4), 10.);
    }

    #[test]
    fn t_zero_options_rejected() {
        assert!(matches!(
            Zipfy::new(0),
            Err(PhonoGenError::InvalidDistributionInput(0))
        ));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(choose_zipfy::<u8, _>(&[], &mut rng).is_err());
    }

    #[test]
    fn t_single_option_is_always_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_eq!(zipfy_index(&mut rng, 1).unwrap(), 0);
        }
    }

    #[test]
    fn t_range_and_skew() {
        for n in 2..12 {
            let counts = histogram(n, n as u64);
            assert_eq!(counts.iter().sum::<usize>(), TRIALS);
            assert!(counts[0] >= counts[n - 1], "n = {}: {:?}", n, counts);
        }
    }

    #[test]
    fn t_linear_weights() {
        // weights 3 : 2 : 1
        let counts = histogram(3, 42);
        let expected = [0.5, 1. / 3., 1. / 6.];
        for (count, p) in counts.iter().zip(expected) {
            let observed = *count as f64 / TRIALS as f64;
            assert!((observed - p).abs() < 0.015, "{:?}", counts);
        }
    }

    #[test]
    fn t_choose_prefers_front() {
        let options = ["common", "rare"];
        let mut rng = StdRng::seed_from_u64(3);
        let common = (0..TRIALS)
            .filter(|_| *choose_zipfy(&options, &mut rng).unwrap() == "common")
            .count();
        assert!(common > TRIALS / 2);
    }
}
