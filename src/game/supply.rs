use rand::Rng;

use crate::utils::letters::LETTER_POOL;

pub struct LetterSupplier;

impl LetterSupplier {
    /// Draw up to `count` distinct letters, weighted by the pool.
    ///
    /// Each call works on a fresh copy of the pool: a uniformly random
    /// occurrence is removed per pick, and picks repeating a letter
    /// already in the batch are discarded. Stops when the batch is
    /// full or the copy is exhausted, so asking for more letters than
    /// the alphabet holds returns fewer rather than looping.
    pub fn draw(count: usize) -> Vec<char> {
        Self::draw_with_rng(count, &mut rand::rng())
    }

    /// Same as `draw` with a caller-supplied generator, so tests can
    /// pin the sequence with a seeded one.
    pub fn draw_with_rng(count: usize, rng: &mut impl Rng) -> Vec<char> {
        let mut pool = LETTER_POOL.clone();
        let mut batch = Vec::with_capacity(count);

        while batch.len() < count && !pool.is_empty() {
            let index = rng.random_range(0..pool.len());
            let letter = pool.swap_remove(index);
            if !batch.contains(&letter) {
                batch.push(letter);
            }
        }

        batch
    }
}
