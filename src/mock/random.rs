// src/mock/random.rs - Injectable randomness for question selection

/// Source of uniform indices. Tests substitute a fixed sequence.
pub trait RandomSource {
    /// An index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// OS-backed randomness via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn pick(&mut self, len: usize) -> usize {
        let mut buf = [0u8; 8];
        if let Err(e) = getrandom::getrandom(&mut buf) {
            tracing::warn!("getrandom failed ({}), picking the first question", e);
            return 0;
        }
        (u64::from_le_bytes(buf) % len as u64) as usize
    }
}

/// Replays a fixed list of indices, cycling. Each value is reduced modulo `len`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % len
    }
}
