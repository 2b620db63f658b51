//! splits comma-delimited text into logical records.
//!
//! the files consumed by retrace have no formal escaping rule. the only rule is
//! quote balancing: a pair of `"` characters opens a region where newlines belong
//! to the current record instead of terminating it. quote characters are kept in
//! the record text, nothing is unescaped.
use std::io::Read;

const QUOTE: u8 = b'"';
const NEWLINE: u8 = b'\n';

/// iterator over the logical records of a document. each item borrows the raw
/// text of one record, excluding its terminating newline.
///
/// a trailing record without a final newline is still produced. a quoted region
/// left open at the end of input does not stop the scan; the remaining text
/// becomes the last record.
#[derive(Debug, Clone)]
pub struct CsvRecords<'a> {
    contents: &'a str,
    position: usize,
}

impl<'a> CsvRecords<'a> {
    pub fn new(contents: &'a str) -> CsvRecords<'a> {
        Self {
            contents,
            position: 0,
        }
    }
}

impl<'a> Iterator for CsvRecords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.contents.as_bytes();
        if self.position >= bytes.len() {
            return None;
        }
        let start = self.position;
        let mut quoted = false;
        // both delimiters are ASCII, so every index we slice at is a char boundary
        for (offset, byte) in bytes[start..].iter().enumerate() {
            match *byte {
                QUOTE => quoted = !quoted,
                NEWLINE if !quoted => {
                    let end = start + offset;
                    self.position = end + 1;
                    return Some(&self.contents[start..end]);
                }
                _ => {}
            }
        }
        self.position = bytes.len();
        Some(&self.contents[start..])
    }
}

/// splits an in-memory document into its logical records.
pub fn split_records(contents: &str) -> Vec<&str> {
    CsvRecords::new(contents).collect()
}

/// reads a character stream to the end and splits it into owned records.
pub fn read_records<R: Read>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(CsvRecords::new(&contents).map(String::from).collect())
}
