//! TSV boundary: tab-separated clue files with a header row, backslash
//! escapes, and the literal token `nan` for missing values.

use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use cluedup::ClueRecord;

const MISSING: &str = "nan";
const COLUMNS: [&str; 3] = ["clue", "answer", "tags"];

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .escape(Some(b'\\'))
        .double_quote(false)
        .flexible(true);
    builder
}

/// Read a clue TSV. Columns are located by header name; extra columns are
/// ignored, absent columns read as missing.
pub fn read_clues(path: &Path) -> Result<Vec<ClueRecord>> {
    let mut reader = reader_builder()
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?;
    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|name| headers.iter().position(|h| h == *name))
        .collect();
    if positions.iter().all(Option::is_none) {
        bail!(
            "{} has none of the expected columns {:?}",
            path.display(),
            COLUMNS
        );
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("failed to parse {}", path.display()))?;
        records.push(ClueRecord {
            clue: field(&row, positions[0]),
            answer: field(&row, positions[1]),
            tags: field(&row, positions[2]),
        });
    }
    Ok(records)
}

fn field(row: &csv::StringRecord, position: Option<usize>) -> Option<String> {
    let value = position.and_then(|i| row.get(i))?;
    if value.is_empty() || value == MISSING {
        None
    } else {
        Some(value.to_string())
    }
}

/// Write clue records as TSV with the same conventions `read_clues`
/// expects.
pub fn write_clues<W: io::Write>(records: &[ClueRecord], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .escape(b'\\')
        .double_quote(false)
        .from_writer(out);

    writer.write_record(COLUMNS).context("failed to write header")?;
    for record in records {
        writer
            .write_record([
                record.clue.as_deref().unwrap_or(MISSING),
                record.answer.as_deref().unwrap_or(MISSING),
                record.tags.as_deref().unwrap_or(MISSING),
            ])
            .context("failed to write row")?;
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}

/// Write to a file path, with the path in any error.
pub fn write_clues_to_path(records: &[ClueRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_clues(records, io::BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))
}
