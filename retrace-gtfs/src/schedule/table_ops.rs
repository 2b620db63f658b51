//! helpers shared by the four schedule table loaders.
use retrace_core::util::CsvRecords;

use crate::schedule::CatalogError;

/// the number of comma-separated fields a table's rows must carry.
#[derive(Debug, Clone, Copy)]
pub enum FieldCount {
    Exactly(usize),
    AtLeast(usize),
}

impl FieldCount {
    fn accepts(&self, found: usize) -> bool {
        match self {
            FieldCount::Exactly(n) => found == *n,
            FieldCount::AtLeast(n) => found >= *n,
        }
    }

    fn describe(&self) -> String {
        match self {
            FieldCount::Exactly(n) => n.to_string(),
            FieldCount::AtLeast(n) => format!("at least {n}"),
        }
    }
}

/// one record of a schedule table, split on commas.
#[derive(Debug)]
pub struct TableRow<'a> {
    /// 1-based record number, where the header is record 1
    pub line: usize,
    pub fields: Vec<&'a str>,
}

/// splits the body of a table into rows, discarding the header record.
/// blank records are skipped, any other record with an unexpected number of
/// fields fails the whole table.
pub fn table_rows<'a>(
    table: &'static str,
    contents: &'a str,
    expected: FieldCount,
) -> Result<Vec<TableRow<'a>>, CatalogError> {
    let mut rows = vec![];
    for (idx, record) in CsvRecords::new(contents).enumerate().skip(1) {
        let line = idx + 1;
        let record = record.strip_suffix('\r').unwrap_or(record);
        if record.trim().is_empty() {
            log::debug!("{table} line {line}: skipping blank record");
            continue;
        }
        let fields: Vec<&str> = record.split(',').collect();
        if !expected.accepts(fields.len()) {
            return Err(CatalogError::FieldCountError {
                table,
                line,
                expected: expected.describe(),
                found: fields.len(),
            });
        }
        rows.push(TableRow { line, fields });
    }
    Ok(rows)
}

#[cfg(test)]
mod test {
    use super::{table_rows, FieldCount};
    use crate::schedule::CatalogError;

    #[test]
    fn test_skips_header_and_blank_records() {
        let rows = table_rows("stops", "a,b,c\r\n1,2,3\r\n\r\n4,5,6", FieldCount::Exactly(3))
            .expect("well-formed table");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].fields, vec!["1", "2", "3"]);
        assert_eq!(rows[1].line, 4);
        assert_eq!(rows[1].fields, vec!["4", "5", "6"]);
    }

    #[test]
    fn test_wrong_field_count_fails() {
        let result = table_rows("routes", "a,b\n1,2\n3\n", FieldCount::Exactly(2));
        match result {
            Err(CatalogError::FieldCountError {
                table, line, found, ..
            }) => {
                assert_eq!(table, "routes");
                assert_eq!(line, 3);
                assert_eq!(found, 1);
            }
            other => panic!("expected field count error, found {other:?}"),
        }
    }

    #[test]
    fn test_at_least_accepts_extra_fields() {
        let rows = table_rows("stops", "h\n1,2,3,4,5\n", FieldCount::AtLeast(3))
            .expect("extra columns are allowed");
        assert_eq!(rows[0].fields.len(), 5);
    }
}
