//! Best-effort textual export scanner for TypeScript-like module files
//!
//! Streams a module file line by line and reports the exported identifier
//! names it textually declares. No syntax tree is built - each line is tested
//! against three declaration shapes, in a fixed order.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ScaffoldError;

/// Which export declaration shape a name was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// `export class Name { ... }`
    ClassExport,
    /// `export { A, B } ...`
    BracedExport,
    /// `export Name from ...`
    FromExport,
}

/// A single exported name discovered in a module file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    pub kind: ExportKind,
}

/// Lazy scan over one module file.
///
/// The file is read through a buffered line stream, so arbitrarily large
/// files never sit wholly in memory. The scan is not restartable: re-scanning
/// a file means calling [`ExportScan::open`] again.
#[derive(Debug)]
pub struct ExportScan {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    pending: VecDeque<ExportRecord>,
    class_re: Regex,
    braced_re: Regex,
    from_re: Regex,
}

impl ExportScan {
    /// Open a module file for scanning
    pub fn open(path: &Path) -> Result<Self, ScaffoldError> {
        let file = File::open(path).map_err(|source| ScaffoldError::Scan {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            pending: VecDeque::new(),
            class_re: Regex::new(r"export\s+class\s+([A-Za-z_$][\w$]*)\s*\{").unwrap(),
            braced_re: Regex::new(r"export\s*\{([^}]*)\}").unwrap(),
            from_re: Regex::new(r"export\s+([A-Za-z_$][\w$]*)\s+from\b").unwrap(),
        })
    }

    /// Test one line against all three shapes.
    ///
    /// The shapes are NOT mutually exclusive: a line matching two of them
    /// contributes a record for each. This superset behavior is intentional
    /// and callers must not assume deduplicated output.
    fn scan_line(&mut self, line: &str) {
        if let Some(caps) = self.class_re.captures(line) {
            let captured = caps[1].to_string();
            self.queue_names(&captured, ExportKind::ClassExport);
        }

        if let Some(caps) = self.braced_re.captures(line) {
            let captured = caps[1].to_string();
            self.queue_names(&captured, ExportKind::BracedExport);
        }

        if let Some(caps) = self.from_re.captures(line) {
            let captured = caps[1].to_string();
            self.queue_names(&captured, ExportKind::FromExport);
        }
    }

    /// Queue one record per comma-separated name in a captured group
    fn queue_names(&mut self, captured: &str, kind: ExportKind) {
        for name in captured.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            self.pending.push_back(ExportRecord {
                name: name.to_string(),
                kind,
            });
        }
    }
}

impl Iterator for ExportScan {
    type Item = Result<ExportRecord, ScaffoldError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }

            match self.lines.next() {
                Some(Ok(line)) => self.scan_line(&line),
                Some(Err(source)) => {
                    return Some(Err(ScaffoldError::Scan {
                        path: self.path.clone(),
                        source,
                    }))
                }
                None => return None,
            }
        }
    }
}
