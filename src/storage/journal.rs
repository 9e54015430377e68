use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::DecisionRecord;

use super::traits::{DecisionStore, StoreError};

/// Durable append-only journal of decision records.
///
/// Each record is written as a single line of JSON followed by a CRC32
/// checksum. Appends are synced individually since every decision is an
/// independent operation.
pub struct JournalStore {
    writer: BufWriter<File>,
    path: PathBuf,
    entries_written: u64,
}

impl JournalStore {
    /// Open or create a journal file for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(JournalStore {
            writer: BufWriter::new(file),
            path,
            entries_written: 0,
        })
    }

    /// Get the journal file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries appended through this handle.
    pub fn entries_written(&self) -> u64 {
        self.entries_written
    }
}

impl DecisionStore for JournalStore {
    fn append(&mut self, record: &DecisionRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        let checksum = crc32fast::hash(json.as_bytes());

        // Write: JSON\tCRC32\n
        writeln!(self.writer, "{}\t{:08x}", json, checksum)?;
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        self.entries_written += 1;

        Ok(())
    }

    fn records(&mut self) -> Result<Vec<DecisionRecord>, StoreError> {
        let reader = JournalReader::open(&self.path)?;
        reader.collect()
    }
}

/// Reader for iterating over journal entries.
///
/// Corrupt lines are skipped and counted rather than failing the read.
pub struct JournalReader {
    reader: BufReader<File>,
    line_buffer: String,
    entries_read: u64,
    errors: u64,
}

impl JournalReader {
    /// Open a journal file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = File::open(path)?;

        Ok(JournalReader {
            reader: BufReader::new(file),
            line_buffer: String::with_capacity(256),
            entries_read: 0,
            errors: 0,
        })
    }

    /// Read the next record, skipping corrupt lines. None at end of file.
    pub fn next_record(&mut self) -> Result<Option<DecisionRecord>, StoreError> {
        loop {
            self.line_buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.line_buffer)?;

            if bytes_read == 0 {
                return Ok(None); // EOF
            }

            let line = self.line_buffer.trim();
            if line.is_empty() {
                continue;
            }

            // Parse: JSON\tCRC32
            let Some((json, checksum)) = line.rsplit_once('\t') else {
                self.errors += 1;
                warn!("invalid journal line format, skipping");
                continue;
            };

            let Ok(expected_checksum) = u32::from_str_radix(checksum, 16) else {
                self.errors += 1;
                warn!("unparseable journal checksum, skipping");
                continue;
            };

            let actual_checksum = crc32fast::hash(json.as_bytes());
            if actual_checksum != expected_checksum {
                self.errors += 1;
                warn!(
                    "journal checksum mismatch: expected {:08x}, got {:08x}",
                    expected_checksum, actual_checksum
                );
                continue;
            }

            let record: DecisionRecord = serde_json::from_str(json)?;
            self.entries_read += 1;

            return Ok(Some(record));
        }
    }

    /// Read all remaining records.
    pub fn collect(mut self) -> Result<Vec<DecisionRecord>, StoreError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Number of records read so far.
    pub fn entries_read(&self) -> u64 {
        self.entries_read
    }

    /// Number of corrupt lines skipped so far.
    pub fn errors(&self) -> u64 {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Plate, Verdict};
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn denied(plate: &str, reason: &str) -> DecisionRecord {
        DecisionRecord::from_verdict(&Plate::new(plate), &Verdict::denied(reason))
    }

    #[test]
    fn test_append_and_read_back() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut store = JournalStore::open(path).unwrap();
        store
            .append(&DecisionRecord::from_verdict(
                &Plate::new("1234571"),
                &Verdict::Allowed,
            ))
            .unwrap();
        store
            .append(&denied("1234525", "Public transportation vehicle"))
            .unwrap();
        assert_eq!(store.entries_written(), 2);

        let records = store.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].plate.as_str(), "1234571");
        assert_eq!(records[0].reason, None);
        assert_eq!(
            records[1].reason.as_deref(),
            Some("Public transportation vehicle")
        );
    }

    #[test]
    fn test_duplicate_appends_are_independent_entries() {
        let temp_file = NamedTempFile::new().unwrap();

        let mut store = JournalStore::open(temp_file.path()).unwrap();
        let record = denied("1111111", "Operated by gas");
        store.append(&record).unwrap();
        store.append(&record).unwrap();

        assert_eq!(store.records().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_line_skipped() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        {
            let mut store = JournalStore::open(&path).unwrap();
            store.append(&denied("1234585", "bad suffix")).unwrap();
        }

        // Corrupt the journal by hand, then append a good entry after it
        {
            let mut file = OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "{{\"garbage\": true}}\tdeadbeef").unwrap();
        }
        {
            let mut store = JournalStore::open(&path).unwrap();
            store.append(&denied("1234500", "bad suffix")).unwrap();
        }

        let mut reader = JournalReader::open(&path).unwrap();
        let mut plates = Vec::new();
        while let Some(record) = reader.next_record().unwrap() {
            plates.push(record.plate.as_str().to_string());
        }

        assert_eq!(plates, vec!["1234585", "1234500"]);
        assert_eq!(reader.errors(), 1);
        assert_eq!(reader.entries_read(), 2);
    }

    #[test]
    fn test_reopen_preserves_existing_entries() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        {
            let mut store = JournalStore::open(path).unwrap();
            store.append(&denied("1234567", "Operated by gas")).unwrap();
        }

        let mut store = JournalStore::open(path).unwrap();
        store.append(&denied("1111111", "Operated by gas")).unwrap();

        let records = store.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].plate.as_str(), "1234567");
    }
}
