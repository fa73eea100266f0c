// Fixed-size subset enumeration in lexicographic order.

/// Iterator over every `k`-element subset of `0..n`, as ascending position
/// lists, in lexicographic order.
///
/// `Choose::new(4, 2)` yields `[0,1] [0,2] [0,3] [1,2] [1,3] [2,3]`.
/// `k == 0` yields a single empty subset; `k > n` yields nothing.
#[derive(Debug, Clone)]
pub struct Choose {
    n: usize,
    positions: Vec<usize>,
    started: bool,
    done: bool,
}

impl Choose {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            positions: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advance `positions` to the next subset. Returns `false` when the last
    /// subset has already been produced.
    fn advance(&mut self) -> bool {
        let k = self.positions.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < self.n - k + i) else {
            return false;
        };
        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Choose {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && !self.advance() {
            self.done = true;
            return None;
        }
        self.started = true;
        Some(self.positions.clone())
    }
}

/// Number of `k`-element subsets of an `n`-element set, saturating at
/// `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // result * (n - i) / (i + 1) stays integral at every step
        result = match result.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return usize::MAX,
        };
    }
    result
}
