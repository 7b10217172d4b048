use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{report, util, Error, ReportOptions, Result, StemCounter, StemStats};

/// Outcome of one successfully processed document.
#[derive(Debug)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: StemStats,
}

#[derive(Debug, Default)]
pub struct FrequencyReporter {
    files: Vec<PathBuf>,
    options: ReportOptions,
}

impl FrequencyReporter {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn from_directory(dir: impl AsRef<Path>) -> Self {
        Self::new(util::gather_files(dir))
    }

    /// Plain files are taken as given, directories contribute their `.txt` files.
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let files = paths
            .into_iter()
            .flat_map(|path| {
                if path.is_dir() {
                    util::gather_files(path)
                } else {
                    vec![path]
                }
            })
            .collect();
        Self::new(files)
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Processes every file in order. A failing file does not stop the others.
    pub fn run(&self) -> Vec<Result<ProcessedFile>> {
        self.run_with_progress(|_, _| {})
    }

    pub fn run_with_progress(
        &self,
        mut on_file: impl FnMut(usize, &Result<ProcessedFile>),
    ) -> Vec<Result<ProcessedFile>> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let result = process_file(file, self.options);
                on_file(i, &result);
                result
            })
            .collect()
    }
}

/// Reads, counts, ranks and writes the report for a single document.
///
/// A report that fails halfway through is removed again, so an existing
/// `_Output.csv` is always complete.
pub fn process_file(input: impl AsRef<Path>, options: ReportOptions) -> Result<ProcessedFile> {
    let input = input.as_ref();
    let output = util::output_path(input)?;

    let read_error = |source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    };
    let stats = {
        let file = File::open(input).map_err(read_error)?;
        StemCounter::from_reader(BufReader::new(file))
            .map_err(read_error)?
            .finish()
    };
    debug!(
        input = %input.display(),
        total = stats.total_words(),
        unique = stats.unique_words(),
        "counted stems"
    );

    write_output(&output, |writer| report::write_report(writer, &stats, options)).map_err(
        |source| Error::WriteOutput {
            path: output.clone(),
            source,
        },
    )?;
    info!(output = %output.display(), "report written");

    Ok(ProcessedFile {
        input: input.to_path_buf(),
        output,
        stats,
    })
}

fn write_output(
    output: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(output)?;
    let mut writer = BufWriter::new(file);
    let result = write(&mut writer).and_then(|()| writer.flush());
    if result.is_err() {
        drop(writer);
        if let Err(err) = fs::remove_file(output) {
            warn!(output = %output.display(), "cannot remove partial report: {err}");
        }
    }
    result
}
