use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

const OUTPUT_SUFFIX: &str = "_Output.csv";
const STRIPPED_CHARS: usize = 4;

/// Collects the `.txt` files below `dir`, sorted by path.
pub fn gather_files(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|s| s.to_string_lossy().as_ref() == "txt")
                .unwrap_or_default()
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Derives the report path by dropping the last four characters of `input`
/// (the `.txt` extension in the usual case) and appending `_Output.csv`.
pub fn output_path(input: impl AsRef<Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let name = input
        .to_str()
        .ok_or_else(|| Error::NonUtf8Path(input.to_path_buf()))?;
    match name.char_indices().rev().nth(STRIPPED_CHARS - 1) {
        Some((cut, _)) if cut > 0 => Ok(PathBuf::from(format!("{}{OUTPUT_SUFFIX}", &name[..cut]))),
        _ => Err(Error::PathTooShort(input.to_path_buf())),
    }
}

/// Whitespace as understood by the C locale, vertical tab and form feed included.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

pub fn split_stems(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_separator(b)).filter(|s| !s.is_empty())
}

/// Formats like a default-configured C++ stream: six significant digits,
/// trailing zeros dropped, scientific notation outside `1e-4..1e6`.
pub fn format_probability(p: f32) -> String {
    const PRECISION: i32 = 6;
    if p == 0.0 {
        return "0".into();
    }

    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, p);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{p:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
