use rayon::prelude::*;

use crate::constants::{ORI_STEP, ORI_WINDOW};

/// Half-open interval [start, end) over the donor sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriWindow {
    pub start: usize,
    pub end: usize,
}

impl OriWindow {
    pub fn new(start: usize, end: usize) -> OriWindow {
        OriWindow { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, sequence: &'a [u8]) -> &'a [u8] {
        &sequence[self.start..self.end]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriParams {
    pub window: usize,
    pub step: usize,
}

impl Default for OriParams {
    fn default() -> OriParams {
        OriParams {
            window: ORI_WINDOW,
            step: ORI_STEP,
        }
    }
}

fn at_count(window: &[u8]) -> usize {
    window
        .iter()
        .filter(|&&nuc| nuc == b'A' || nuc == b'T')
        .count()
}

/// Fraction of A/T bases; 0.0 for an empty window.
pub fn at_fraction(window: &[u8]) -> f64 {
    if window.is_empty() {
        0.0
    } else {
        at_count(window) as f64 / window.len() as f64
    }
}

/// Select the most AT-rich window of `sequence`, scanning every `step` bases.
///
/// Windows are scored in parallel, but the first window reaching the maximum
/// score is selected, matching a sequential scan with a strict `>` comparison.
pub fn find_ori(sequence: &[u8], window: usize, step: usize) -> OriWindow {
    let len = sequence.len();
    let window = usize::min(window, len);
    if window == 0 {
        return OriWindow::new(0, 0);
    }

    let step = usize::max(step, 1);
    let last_start = len - window;
    let starts: Vec<usize> = (0..=last_start).step_by(step).collect();

    // Every scanned window has the same length, so comparing A/T counts is
    // equivalent to comparing A/T fractions.
    let scores: Vec<usize> = starts
        .par_iter()
        .map(|&start| at_count(&sequence[start..start + window]))
        .collect();

    let mut best: Option<(usize, usize)> = None;
    for (&start, &score) in starts.iter().zip(scores.iter()) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((start, score)),
        }
    }

    let best_start = best.map(|(start, _)| start).unwrap_or(0);

    OriWindow::new(best_start, usize::min(best_start + window, len))
}

pub fn find_ori_with(sequence: &[u8], params: OriParams) -> OriWindow {
    find_ori(sequence, params.window, params.step)
}
