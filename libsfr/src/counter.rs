use std::{
    collections::{hash_map::Entry, HashMap},
    io::BufRead,
};

use crate::util;

/// Stems are kept as raw bytes so that tokens differing only in invalid
/// UTF-8 sequences stay distinct.
pub type FrequencyTable = HashMap<Vec<u8>, u64>;

/// Single-pass stem counter.
///
/// Besides per-stem frequencies it records the running word index at which
/// each distinct stem first showed up.
#[derive(Debug, Default)]
pub struct StemCounter {
    frequencies: FrequencyTable,
    unique_positions: Vec<u64>,
    total_words: u64,
}

impl StemCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut counter = Self::new();
        counter.count_reader(reader)?;
        Ok(counter)
    }

    pub fn push(&mut self, stem: impl AsRef<[u8]>) {
        self.total_words += 1;
        match self.frequencies.entry(stem.as_ref().to_vec()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                self.unique_positions.push(self.total_words);
                entry.insert(1);
            }
        }
    }

    /// Feeds every whitespace-delimited token of `reader` into the counter.
    pub fn count_reader(&mut self, mut reader: impl BufRead) -> std::io::Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            for token in util::split_stems(&line) {
                self.push(token);
            }
        }
        Ok(())
    }

    pub fn finish(self) -> StemStats {
        StemStats {
            frequencies: self.frequencies,
            unique_positions: self.unique_positions,
            total_words: self.total_words,
        }
    }
}

/// Counting results for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StemStats {
    frequencies: FrequencyTable,
    unique_positions: Vec<u64>,
    total_words: u64,
}

impl StemStats {
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn unique_positions(&self) -> &[u64] {
        &self.unique_positions
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }
}
