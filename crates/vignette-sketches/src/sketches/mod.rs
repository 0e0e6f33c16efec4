//! The individual sketches.

pub mod box_clock;
pub mod bubbles;
pub mod connections;
pub mod cubes;
pub mod night_sky;
pub mod squares;
pub mod tentacles;
pub mod web_of_stars;
pub mod whiskers;

#[cfg(test)]
pub(crate) fn test_rng(seed: u64) -> rand_chacha::ChaCha8Rng {
    use rand::SeedableRng;
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}
