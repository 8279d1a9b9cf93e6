use crate::error::{Error, Result};
use crate::types::ContactRow;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Column names of the contact list, in output order
pub const CSV_HEADER: [&str; 10] = [
    "State",
    "name",
    "party",
    "district",
    "phone",
    "url",
    "twitter",
    "facebook",
    "youtube",
    "instagram",
];

/// Write the header and one record per row. The header is written even when
/// there are no rows.
pub fn write_contacts<W: Write>(writer: W, rows: &[ContactRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write the contact list to `path`, replacing any existing file.
///
/// Output goes to a temporary file next to `path` first, so a failed run
/// never leaves a truncated CSV behind.
pub fn write_contacts_file(path: &Path, rows: &[ContactRow]) -> Result<()> {
    let write_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Mode handed to open(2), so the umask still applies
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir).map_err(write_error)?;

    // An existing file keeps its mode
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_error)?;
    }

    write_contacts(&mut file, rows)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
