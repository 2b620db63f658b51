mod csv_records;

pub use csv_records::{read_records, split_records, CsvRecords};
