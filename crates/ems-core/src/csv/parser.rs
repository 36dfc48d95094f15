use log::debug;

use super::{CsvRecord, ParsedCsv};
use crate::error::CoreError;

/// Parses CSV text into headers and records.
///
/// Blank lines are dropped before anything else. The first remaining line is
/// the header row; every following line must tokenize to exactly as many
/// fields as the header. Parsing stops at the first row that does not.
///
/// A leading byte order mark is ignored.
///
/// Row numbers in errors count the header as row 1.
pub fn parse(text: &str) -> Result<ParsedCsv, CoreError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.trim().is_empty()).collect();

    let (header_line, data_lines) = match lines.split_first() {
        Some((header, rest)) if !rest.is_empty() => (header, rest),
        _ => return Err(CoreError::MalformedInput),
    };

    let headers = tokenize_row(header_line);

    let records = data_lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let values = tokenize_row(line);
            if values.len() != headers.len() {
                return Err(CoreError::RowArity {
                    row: index + 2,
                    found: values.len(),
                    expected: headers.len(),
                });
            }
            Ok(headers.iter().cloned().zip(values).collect::<CsvRecord>())
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "parsed CSV with {} column(s) and {} record(s)",
        headers.len(),
        records.len()
    );
    Ok(ParsedCsv { headers, records })
}

/// Splits one line into trimmed fields, honouring double-quoted sections.
///
/// Inside quotes a doubled `""` yields a literal quote and commas are kept.
/// A quote that is not part of a `""` pair toggles quote mode, wherever it
/// appears in the field.
pub fn tokenize_row(row: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if inside_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    values.push(current.trim().to_string());

    values
}
