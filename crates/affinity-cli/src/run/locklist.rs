//! Manual overrides keyed by place id.
//!
//! The locklist is a hand-curated CSV with a `place_id` column plus any
//! subset of the output columns. Non-empty cells replace the matching field
//! of the fetched record; rows for ids the run did not find are ignored.

use std::collections::HashMap;
use std::path::Path;

use affinity_core::{BusinessRecord, Column};
use anyhow::Context;

const JOIN_COLUMN: &str = "place_id";

#[derive(Debug, Default)]
pub(crate) struct Locklist {
    /// Overrides per place id, in file order. A repeated id appends, so
    /// later rows win field by field.
    overrides: HashMap<String, Vec<(Column, String)>>,
}

impl Locklist {
    /// Loads the locklist at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. A zero-byte file is an
    /// empty locklist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or has a header
    /// row without a `place_id` column.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to open {}", path.display()))
            }
        };
        Self::from_reader(file)
            .with_context(|| format!("failed to parse locklist {}", path.display()))
            .map(Some)
    }

    fn from_reader<R: std::io::Read>(reader: R) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.iter().all(str::is_empty) {
            return Ok(Self::default());
        }

        let join_idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(JOIN_COLUMN))
            .ok_or_else(|| anyhow::anyhow!("missing '{JOIN_COLUMN}' column"))?;

        let columns: Vec<(usize, Column)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != join_idx)
            .filter_map(|(idx, h)| {
                let column = Column::from_header(h);
                if column.is_none() {
                    tracing::debug!(header = h, "ignoring locklist column outside the output set");
                }
                column.map(|c| (idx, c))
            })
            .collect();

        let mut overrides: HashMap<String, Vec<(Column, String)>> = HashMap::new();
        for row in rdr.records() {
            let row = row?;
            let Some(place_id) = row.get(join_idx).filter(|id| !id.is_empty()) else {
                continue;
            };
            let cells = columns
                .iter()
                .filter_map(|(idx, column)| {
                    row.get(*idx)
                        .filter(|v| !v.is_empty())
                        .map(|v| (*column, v.to_string()))
                });
            overrides
                .entry(place_id.to_string())
                .or_default()
                .extend(cells);
        }

        Ok(Self { overrides })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Applies overrides to matching records. Returns how many records had
    /// at least one override entry.
    ///
    /// Cells that fail to parse for a typed column are logged and skipped.
    pub(crate) fn apply(&self, records: &mut [BusinessRecord]) -> usize {
        let mut touched = 0;
        for record in records.iter_mut() {
            let Some(cells) = self.overrides.get(&record.place_id) else {
                continue;
            };
            touched += 1;
            for (column, value) in cells {
                if let Err(e) = record.apply_override(*column, value) {
                    tracing::warn!(place_id = %record.place_id, error = %e, "skipping locklist cell");
                }
            }
        }
        touched
    }
}
