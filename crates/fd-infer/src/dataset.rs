//! Tabular data sets and the pairwise dependency scan over their columns.

use crate::error::{InferError, InferResult};
use fd_core::{Attr, AttrSet, FuncDep, Relation};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Rows of a data file with a single-line header.
///
/// Columns can be left out of the analysis: columns with an empty or
/// repeated header are skipped automatically, others via [`exclude`](Self::exclude).
#[derive(Debug, Clone)]
pub struct DataSet {
    name: String,
    source: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    /// column index -> reason it is left out
    skipped: BTreeMap<usize, String>,
}

impl DataSet {
    /// Read a data file. `.csv` files are parsed as CSV, anything else as
    /// tab-delimited text. The relation is named after the file stem.
    pub fn read(path: &Path) -> InferResult<Self> {
        let source = path.display().to_string();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false).flexible(true);
        if !is_csv {
            builder.delimiter(b'\t').quoting(false);
        }

        let file = std::fs::File::open(path).map_err(|e| InferError::Io {
            path: source.clone(),
            source: e,
        })?;
        let mut reader = builder.from_reader(file);
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| InferError::Csv {
                path: source.clone(),
                source: e,
            })?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let header = records.next().ok_or_else(|| InferError::MissingHeader {
            path: source.clone(),
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut ds = Self::from_rows(name, header, records.collect())?;
        ds.source = source;
        Ok(ds)
    }

    /// Build a data set from in-memory rows. Every row must have at least
    /// as many fields as the header.
    pub fn from_rows(
        name: impl Into<String>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> InferResult<Self> {
        let name = name.into();
        for (i, row) in rows.iter().enumerate() {
            if row.len() < header.len() {
                return Err(InferError::RaggedRow {
                    path: name.clone(),
                    row: i + 1,
                    found: row.len(),
                    expected: header.len(),
                });
            }
        }

        let mut skipped = BTreeMap::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (i, h) in header.iter().enumerate() {
            let h = h.trim();
            if h.is_empty() {
                log::warn!("Skipping column {} of '{}': empty header", i + 1, name);
                skipped.insert(i, "(empty)".to_string());
            } else if let Some(first) = seen.get(h) {
                log::warn!(
                    "Skipping column {} of '{}': duplicate of column {} ({})",
                    i + 1,
                    name,
                    first + 1,
                    h
                );
                skipped.insert(i, format!("(duplicate {h})"));
            } else {
                seen.insert(h, i);
            }
        }

        Ok(Self {
            source: name.clone(),
            name,
            header,
            rows,
            skipped,
        })
    }

    /// Name of the relation this data set describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows (the header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Leave the named columns out of the analysis and the attribute domain.
    /// Returns how many columns were excluded.
    pub fn exclude<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let mut excluded = 0;
        for (i, h) in self.header.iter().enumerate() {
            let h = h.trim();
            if self.skipped.contains_key(&i) {
                continue;
            }
            if names.iter().any(|n| n.as_ref().trim() == h) {
                self.skipped.insert(i, h.to_string());
                excluded += 1;
            }
        }
        excluded
    }

    /// Columns left out of the analysis with the reason, by column index.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.skipped.iter().map(|(i, why)| (*i, why.as_str()))
    }

    /// Attributes of the columns taking part in the analysis.
    pub fn attrs(&self) -> AttrSet {
        self.active_columns().map(|(_, a)| a).collect()
    }

    /// Infer functional dependencies between every pair of analyzed
    /// columns. Dependencies sharing a left side are merged.
    ///
    /// Only single-attribute determinants are detected.
    pub fn analyze(&self) -> InferResult<Relation> {
        let columns: Vec<(usize, Attr)> = self.active_columns().collect();
        let mut func_deps = Vec::new();

        for (pos, (i, attr_i)) in columns.iter().enumerate() {
            for (j, attr_j) in &columns[pos + 1..] {
                if self.determines(*j, *i) {
                    func_deps.push(FuncDep::new(attr_j.clone().into(), attr_i.clone().into()));
                }
                if self.determines(*i, *j) {
                    func_deps.push(FuncDep::new(attr_i.clone().into(), attr_j.clone().into()));
                }
            }
        }

        log::debug!(
            "Observed {} pairwise dependencies over {} columns and {} rows of '{}'",
            func_deps.len(),
            columns.len(),
            self.rows.len(),
            self.source
        );

        let mut relation = Relation::new(self.name.clone(), self.attrs(), func_deps)?;
        relation.coalesce();
        Ok(relation)
    }

    /// Whether every value of column `from` co-occurs with exactly one value
    /// of column `to`.
    fn determines(&self, from: usize, to: usize) -> bool {
        let mut observed: HashMap<&str, &str> = HashMap::new();
        for row in &self.rows {
            let (key, value) = (row[from].as_str(), row[to].as_str());
            match observed.get(key) {
                Some(prev) if *prev != value => return false,
                Some(_) => {}
                None => {
                    observed.insert(key, value);
                }
            }
        }
        true
    }

    fn active_columns(&self) -> impl Iterator<Item = (usize, Attr)> + '_ {
        self.header
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.skipped.contains_key(i))
            .filter_map(|(i, h)| Attr::try_new(h.trim()).map(|a| (i, a)))
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
