use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;

/// One data row keyed by header name.
pub type Record = HashMap<String, String>;

/// Parse CSV text into rows of cells.
///
/// Rows keep their own length. Only truly empty lines are dropped: a row of
/// bare commas is a blank sheet row and still counts as a row.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if record.len() == 1 && record[0].is_empty() {
                    continue;
                }
                rows.push(record.iter().map(String::from).collect());
            }
            Err(e) => tracing::warn!("skipping unreadable CSV row {}: {}", line + 1, e),
        }
    }
    rows
}

/// Turn parsed rows into header-keyed records.
///
/// The first row is the header. Header names are trimmed; later rows shorter
/// than the header get empty strings for the missing cells, extra cells are
/// dropped.
pub fn records(rows: Vec<Vec<String>>) -> Vec<Record> {
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let mut header = StringRecord::from(header);
    header.trim();

    rows.filter_map(|mut row| {
        row.resize(header.len(), String::new());
        match StringRecord::from(row).deserialize::<Record>(Some(&header)) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("skipping CSV record: {}", e);
                None
            }
        }
    })
    .collect()
}

/// Cell lookup that treats a missing column like an empty cell.
pub fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).map(String::as_str).unwrap_or("")
}
