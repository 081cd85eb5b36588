use once_cell::sync::Lazy;

/// Number of tiles in the full letter pool (the sum of all frequencies).
pub const POOL_SIZE: usize = 98;

/// Scrabble tile distribution: how many times each letter appears in the
/// letter pool. Common letters are drawn more often than rare ones.
pub const LETTER_DISTRIBUTION: [(char, u32); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// The canonical weighted letter pool, materialized once: each letter
/// appears `frequency` times. Draws sample from a fresh copy of this pool;
/// the canonical pool itself is never mutated.
pub static LETTER_POOL: Lazy<Vec<char>> = Lazy::new(|| {
    let mut pool = Vec::with_capacity(POOL_SIZE);
    for (letter, count) in LETTER_DISTRIBUTION {
        for _ in 0..count {
            pool.push(letter);
        }
    }
    pool
});

/// How many times a letter appears in the pool. Unknown characters have
/// frequency zero and are never drawn.
pub fn letter_frequency(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    LETTER_DISTRIBUTION
        .iter()
        .find(|(ch, _)| *ch == upper)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}
