//! Streaming n-gram repetition counter.
//!
//! Pins down the "trailing n-gram count" semantics the spec leaves open
//! (see `DESIGN.md`): for each n, count how many consecutive times the
//! n-character window at the very end of the stream repeats, walking
//! backward from the tail. A window that doesn't repeat at all counts as 1.
//! Fewer than `n` characters fed yields 0 (no n-gram exists yet).

pub struct RepeatDetector {
    max_n: usize,
    buffer: Vec<char>,
}

impl RepeatDetector {
    pub fn new(max_ngram_size: usize) -> Self {
        Self {
            max_n: max_ngram_size,
            buffer: Vec::new(),
        }
    }

    /// Feed more characters onto the tail of the stream.
    pub fn add_letters(&mut self, s: &str) {
        self.buffer.extend(s.chars());
    }

    /// For each n in `1..=max_n`, the number of consecutive trailing
    /// repetitions of the n-character window.
    pub fn ngram_repeats(&self) -> Vec<usize> {
        (1..=self.max_n).map(|n| self.trailing_repeats(n)).collect()
    }

    fn trailing_repeats(&self, n: usize) -> usize {
        let total = self.buffer.len();
        if total < n || n == 0 {
            return 0;
        }

        let tail = &self.buffer[total - n..total];
        let mut count = 1;
        let mut end = total - n;

        while end >= n {
            let window = &self.buffer[end - n..end];
            if window == tail {
                count += 1;
                end -= n;
            } else {
                break;
            }
        }

        count
    }
}
