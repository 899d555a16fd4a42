use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{CalcError, Session, process_line};

/// Extension of the files picked up when a directory is processed.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Outcome of one expression line.
#[derive(Debug)]
pub struct LineOutcome {
    /// 1-based line number within its source.
    pub line:   usize,
    /// The expression, trimmed.
    pub source: String,
    /// The value, or the reason the line was rejected.
    pub result: Result<f64, CalcError>,
}

/// Outcomes of every expression line of one file.
#[derive(Debug)]
pub struct FileReport {
    /// The file that was read.
    pub path:     PathBuf,
    /// One entry per expression line, in order.
    pub outcomes: Vec<LineOutcome>,
}

/// Evaluates sequences of lines against one shared [`Session`].
///
/// Blank lines and lines starting with `#` are skipped. A failing line is
/// reported in its [`LineOutcome`] and the batch carries on with the session
/// unchanged.
///
/// # Example
/// ```
/// use halfrpn::batch::Batch;
///
/// let mut batch = Batch::new();
/// let outcomes = batch.run_source("3 4 +\n\n# recall\n(0 RES) 2 *\n4 0 /");
///
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[1].line, 4);
/// assert_eq!(outcomes[1].result.as_ref().ok(), Some(&14.0));
/// assert!(outcomes[2].result.is_err());
/// assert_eq!(batch.session().len(), 2);
/// ```
#[derive(Debug)]
pub struct Batch {
    session:   Session,
    extension: String,
}

#[allow(clippy::new_without_default)]
impl Batch {
    /// Creates a batch with a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self { session:   Session::new(),
               extension: DEFAULT_EXTENSION.to_string(), }
    }

    /// Sets the extension of the files read when walking a directory.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        extension.trim_start_matches('.').clone_into(&mut self.extension);
        self
    }

    /// The session shared by every line run so far.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Evaluates every expression line of `source` in order.
    pub fn run_source(&mut self, source: &str) -> Vec<LineOutcome> {
        let mut outcomes = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let expression = raw.trim();
            if expression.is_empty() || expression.starts_with('#') {
                continue;
            }

            let line = index + 1;
            let result = process_line(expression, &mut self.session);
            match &result {
                Ok(value) => info!(line, expression, value, "evaluated"),
                Err(e) => warn!(line, expression, error = %e, "rejected"),
            }

            outcomes.push(LineOutcome { line,
                                        source: expression.to_string(),
                                        result });
        }

        outcomes
    }

    /// Reads a file and evaluates its lines.
    ///
    /// # Errors
    /// `CalcError::Io` if the file cannot be read.
    pub fn run_file(&mut self, path: &Path) -> Result<FileReport, CalcError> {
        let source = fs::read_to_string(path).map_err(|source| CalcError::Io { path: path.to_path_buf(),
                                                                               source })?;
        debug!(path = %path.display(), "processing file");

        Ok(FileReport { path:     path.to_path_buf(),
                        outcomes: self.run_source(&source), })
    }

    /// Processes a file, or every matching file below a directory.
    ///
    /// Directories are walked recursively in file-name order and only files
    /// with the configured extension are read. All files share the session.
    ///
    /// # Errors
    /// `CalcError::Io` if the path does not exist or an entry cannot be read.
    pub fn run_path(&mut self, path: &Path) -> Result<Vec<FileReport>, CalcError> {
        if !path.is_dir() {
            return Ok(vec![self.run_file(path)?]);
        }

        let mut reports = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                                 let failed = e.path().unwrap_or(path).to_path_buf();
                                 CalcError::Io { path:   failed,
                                                 source: e.into(), }
                             })?;

            let matches = entry.file_type().is_file()
                          && entry.path()
                                  .extension()
                                  .is_some_and(|ext| ext == self.extension.as_str());
            if matches {
                reports.push(self.run_file(entry.path())?);
            }
        }

        info!(path = %path.display(), files = reports.len(), "directory processed");
        Ok(reports)
    }
}
