use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::bench::BenchRow;

pub const CSV_HEADER: &str =
    "Array_Size,log2(Array_Size),HeapSort_Time_ms,InsertionSort_Time_ms,MergeSort_Time_ms";

/// Charting tools drop this marker instead of plotting it as zero.
pub const NOT_APPLICABLE: &str = "#N/A";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
    #[error("could not write to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub fn format_row(row: &BenchRow) -> String {
    let insertion = match row.insertion_ms {
        Some(ms) => format!("{ms:.5}"),
        None => NOT_APPLICABLE.to_string(),
    };
    format!(
        "{},{},{:.5},{},{:.5}",
        row.size, row.log2_size, row.heap_ms, insertion, row.merge_ms
    )
}

/// CSV sink for benchmark rows. Creating it writes the header, so a bad
/// output path fails before any benchmark work starts.
pub struct CsvReport {
    path: String,
    out: BufWriter<File>,
}

impl CsvReport {
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let display = path.display().to_string();
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: display.clone(),
            source,
        })?;
        let mut report = Self {
            path: display,
            out: BufWriter::new(file),
        };
        report.write_line(CSV_HEADER)?;
        Ok(report)
    }

    pub fn write_row(&mut self, row: &BenchRow) -> Result<(), ReportError> {
        self.write_line(&format_row(row))
    }

    pub fn finish(mut self) -> Result<(), ReportError> {
        self.out.flush().map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{line}").map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes the whole table at once; header plus one line per row.
pub fn write_csv(path: &Path, rows: &[BenchRow]) -> Result<(), ReportError> {
    let mut report = CsvReport::create(path)?;
    for row in rows {
        report.write_row(row)?;
    }
    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_rows() -> Vec<BenchRow> {
        vec![
            BenchRow {
                size: 128,
                log2_size: 7,
                heap_ms: 0.03125,
                insertion_ms: Some(0.015),
                merge_ms: 0.0625,
            },
            BenchRow {
                size: 1 << 19,
                log2_size: 19,
                heap_ms: 55.5,
                insertion_ms: None,
                merge_ms: 48.125,
            },
        ]
    }

    #[test]
    fn formats_timings_with_five_decimals() {
        let rows = sample_rows();
        assert_eq!(format_row(&rows[0]), "128,7,0.03125,0.01500,0.06250");
    }

    #[test]
    fn skipped_insertion_renders_as_na() {
        let rows = sample_rows();
        assert_eq!(
            format_row(&rows[1]),
            "524288,19,55.50000,#N/A,48.12500"
        );
    }

    #[test]
    fn writes_header_and_rows() {
        let path = std::env::temp_dir().join("sortbench_report_test.csv");
        write_csv(&path, &sample_rows()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "128,7,0.03125,0.01500,0.06250");
        assert_eq!(lines[2], "524288,19,55.50000,#N/A,48.12500");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn create_fails_on_bad_path() {
        let path = std::env::temp_dir().join("no_such_dir_sortbench/out.csv");
        assert!(matches!(
            CsvReport::create(&path),
            Err(ReportError::Create { .. })
        ));
    }
}
