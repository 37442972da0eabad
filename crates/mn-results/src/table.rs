//! Reader for `wrdata` output.
//!
//! With `set wr_vecnames` the first row names the vectors, and with
//! `set wr_singlescale` the time scale appears once as the first column.
//! Values are separated by whitespace.

use std::fs;
use std::path::Path;

use crate::{ResultsError, ResultsResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl ResultTable {
    pub fn load(path: &Path) -> ResultsResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ResultsResult<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header)) = lines.next() else {
            return Err(ResultsError::Parse {
                line: 1,
                message: "missing header row".to_string(),
            });
        };
        let columns: Vec<String> = header.split_whitespace().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|e| ResultsError::Parse {
                        line: idx + 1,
                        message: format!("{token:?}: {e}"),
                    })
                })
                .collect::<ResultsResult<Vec<f64>>>()?;
            if row.len() != columns.len() {
                return Err(ResultsError::Parse {
                    line: idx + 1,
                    message: format!("expected {} values, found {}", columns.len(), row.len()),
                });
            }
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Values of one vector, matched case-insensitively like SPICE names.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self
            .columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}
