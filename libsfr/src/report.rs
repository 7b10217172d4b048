use std::io::{self, Write};

use crate::{counter::FrequencyTable, util, StemStats};

pub const DEFAULT_TOP: usize = 50;

pub type RankedEntry = (Vec<u8>, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of ranked rows written before the unique-word table.
    pub top: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top: DEFAULT_TOP }
    }
}

/// Sorts stems by descending frequency, breaking ties by the stem bytes so
/// output never depends on hash order.
pub fn rank(frequencies: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries = frequencies
        .iter()
        .map(|(stem, &count)| (stem.clone(), count))
        .collect::<Vec<_>>();
    entries.sort_by(|(a_stem, a), (b_stem, b)| b.cmp(a).then_with(|| a_stem.cmp(b_stem)));
    entries
}

/// Writes the CSV report for `stats`.
///
/// The unique-word header keeps its historical "World" spelling so that
/// reports stay comparable with ones produced earlier.
pub fn write_report(
    mut writer: impl Write,
    stats: &StemStats,
    options: ReportOptions,
) -> io::Result<()> {
    let ranked = rank(stats.frequencies());
    let total = stats.total_words() as f32;

    writeln!(writer, "\"Stem\", \"Frequency\", \"Rank\", \"Probability\"")?;
    for (i, (stem, count)) in ranked.iter().take(options.top).enumerate() {
        let probability = if total > 0.0 { *count as f32 / total } else { 0.0 };
        writer.write_all(b"\"")?;
        writer.write_all(stem)?;
        writeln!(
            writer,
            "\", {}, {}, {}",
            count,
            i + 1,
            util::format_probability(probability)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "\"Total World Count\", \"Unique World Count\"")?;
    for (i, position) in stats.unique_positions().iter().enumerate() {
        writeln!(writer, "{}, {}", position, i + 1)?;
    }
    writer.flush()
}
