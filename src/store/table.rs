//! Shared plumbing for the delimited tables: header lookup and append with
//! header-on-create.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Open a table for reading. `Ok(None)` when the file does not exist yet.
pub(crate) fn open_reader(path: &Path, action: &str) -> Result<Option<csv::Reader<File>>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).map_err(|e| Error::persistence(action, e))?;
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    Ok(Some(reader))
}

/// A header with no non-blank field; the table holds no rows worth keeping.
pub(crate) fn is_blank_header(headers: &csv::StringRecord) -> bool {
    headers.iter().all(|h| h.trim().is_empty())
}

/// Header row of an existing table. `None` when the file is absent, empty or
/// holds only whitespace.
pub(crate) fn read_header(path: &Path, action: &str) -> Result<Option<Vec<String>>> {
    let Some(mut reader) = open_reader(path, action)? else {
        return Ok(None);
    };
    let headers = reader
        .headers()
        .map_err(|e| Error::persistence(action, e))?;
    if is_blank_header(headers) {
        return Ok(None);
    }
    Ok(Some(headers.iter().map(str::to_string).collect()))
}

/// Append one row, writing `header` first when the table has none. A file
/// holding only whitespace is cleared before the header is written.
///
/// Not atomic: concurrent writers may interleave.
pub(crate) fn append_row(path: &Path, header: &[&str], row: &[String], action: &str) -> Result<()> {
    let needs_header = read_header(path, action)?.is_none();
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::persistence(action, e))?;

    if needs_header {
        file.set_len(0)
            .map_err(|e| Error::persistence(action, e))?;
    } else {
        let len = file
            .metadata()
            .map_err(|e| Error::persistence(action, e))?
            .len();
        if !ends_with_newline(&mut file, len).map_err(|e| Error::persistence(action, e))? {
            file.write_all(b"\r\n")
                .map_err(|e| Error::persistence(action, e))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    if needs_header {
        writer
            .write_record(header)
            .map_err(|e| Error::persistence(action, e))?;
    }
    writer
        .write_record(row)
        .map_err(|e| Error::persistence(action, e))?;
    writer.flush().map_err(|e| Error::persistence(action, e))?;
    Ok(())
}

fn ends_with_newline(file: &mut File, len: u64) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
