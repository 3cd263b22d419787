//! Uniform draw helpers shared by generation, spawning, and enemy movement.
//!
//! Every randomized decision in the engine funnels through these helpers with
//! an injected [`rand::Rng`], so a seeded generator replays a whole game
//! deterministically.

use rand::Rng;

use crate::CountRange;

/// Draws a uniform integer in `[0, bound)`. A zero bound yields zero.
pub fn below<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    rng.gen_range(0..bound)
}

/// Draws a uniform integer from the inclusive range.
pub fn within<R: Rng + ?Sized>(rng: &mut R, range: CountRange) -> u32 {
    if range.min >= range.max {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// Picks a uniformly random element of the slice, or `None` when it is empty.
pub fn choose<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let bound = u32::try_from(items.len()).unwrap_or(u32::MAX);
    items.get(below(rng, bound) as usize)
}

#[cfg(test)]
mod tests {
    use super::{below, choose, within};
    use crate::CountRange;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn below_zero_bound_yields_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(below(&mut rng, 0), 0);
    }

    #[test]
    fn below_stays_under_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..256 {
            assert!(below(&mut rng, 7) < 7);
        }
    }

    #[test]
    fn within_respects_inclusive_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let range = CountRange::new(3, 8);
        for _ in 0..256 {
            let value = within(&mut rng, range);
            assert!((3..=8).contains(&value));
        }
    }

    #[test]
    fn within_collapsed_range_is_constant() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(within(&mut rng, CountRange::new(5, 5)), 5);
    }

    #[test]
    fn choose_on_empty_slice_is_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);
    }

    #[test]
    fn choose_returns_slice_members() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let items = [10u32, 20, 30];
        for _ in 0..64 {
            let picked = choose(&mut rng, &items).copied();
            assert!(matches!(picked, Some(10 | 20 | 30)));
        }
    }
}
