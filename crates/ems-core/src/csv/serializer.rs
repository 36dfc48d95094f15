use super::CsvRecord;

/// Renders records as CSV text with a header line.
///
/// Columns follow `headers`; a record without a given key gets an empty
/// field. Returns an empty string when there are no records. Lines are joined
/// with `\n` and there is no trailing newline.
pub fn serialize<H: AsRef<str>>(records: &[CsvRecord], headers: &[H]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| h.as_ref())
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = headers
            .iter()
            .map(|h| escape_field(record.get(h.as_ref()).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
