use super::{serialize, CsvRecord};
use crate::models::EXPORT_HEADERS;

pub const TEMPLATE_HEADERS: [&str; 6] = EXPORT_HEADERS;

const SAMPLE_ROWS: [[&str; 6]; 2] = [
    [
        "John Doe",
        "john.doe@example.com",
        "Software Engineer",
        "Engineering",
        "Active",
        "2024-01-15",
    ],
    [
        "Jane Smith",
        "jane.smith@example.com",
        "Product Manager",
        "Product",
        "Active",
        "2024-02-20",
    ],
];

/// Example import file: the employee columns and two sample rows.
pub fn employee_template() -> String {
    let records: Vec<CsvRecord> = SAMPLE_ROWS
        .iter()
        .map(|row| TEMPLATE_HEADERS.iter().copied().zip(row.iter().copied()).collect())
        .collect();
    serialize(&records, &TEMPLATE_HEADERS)
}
