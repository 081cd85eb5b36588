use crate::{GRID_SIZE, MAX_WORD_LENGTH, MIN_WORD_LENGTH};

pub struct LineScanner;

impl LineScanner {
    /// Split one grid line into maximal runs of filled cells.
    /// Empty cells separate runs; a line with no empty cell is a
    /// single run spanning the whole line.
    pub fn runs(line: &[Option<char>; GRID_SIZE]) -> Vec<String> {
        let mut runs = Vec::new();
        let mut current = String::new();

        for cell in line {
            match cell {
                Some(letter) => current.push(*letter),
                None => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs
    }

    /// Every contiguous substring of playable length within a run,
    /// skipping lengths longer than the run itself.
    pub fn candidate_substrings(run: &str) -> Vec<String> {
        let letters: Vec<char> = run.chars().collect();
        let mut candidates = Vec::new();

        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            if length > letters.len() {
                break;
            }
            for start in 0..=(letters.len() - length) {
                candidates.push(letters[start..start + length].iter().collect());
            }
        }

        candidates
    }
}
