//! Single-column CSV files of ticker symbols.
//!
//! Format: one symbol per line, newline-terminated, UTF-8, no header row, no quoting.
//! Writes go to a temporary file next to the destination which is then renamed
//! over it, so a failed write leaves the destination untouched. A replaced file
//! keeps its permissions; a new one gets the usual umask-derived mode.
use std::fs;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::error::TickerError;
use crate::result::Result;

/// Atomically write `tickers` to `path`, one per line. Creates or replaces the file.
pub fn write_tickers_csv<S: AsRef<str>>(path: impl AsRef<Path>, tickers: &[S]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = temp_file_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    debug!("Writing tickers to temporary file {}", tmp.path().display());
    {
        let mut writer = BufWriter::new(tmp.as_file());
        for ticker in tickers {
            writeln!(writer, "{}", ticker.as_ref())?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    info!("Saved {} tickers to {}", tickers.len(), path.display());
    Ok(())
}

/// Temp file created with mode 0666 so the umask applies as for a plain create.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Ok(Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> Result<NamedTempFile> {
    Ok(Builder::new().tempfile_in(dir)?)
}

/// Read symbols back from a ticker CSV.
///
/// Lines are trimmed and blank lines skipped. A line with a delimiter in it
/// is not a single-column ticker file and fails with `InvalidArgument`.
pub fn read_tickers_csv<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tickers = Vec::new();

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(TickerError::Io)?;
        let trimmed_line = line.trim();
        if trimmed_line.is_empty() {
            continue;
        }
        if trimmed_line.contains([',', ';', '\t']) {
            return Err(TickerError::InvalidArgument(format!(
                "line {}: expected one symbol, got {:?}",
                line_no + 1,
                trimmed_line
            )));
        }
        tickers.push(trimmed_line.to_string());
    }
    Ok(tickers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::BufReader;
    use tempfile::tempdir;

    #[test]
    fn writes_one_symbol_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        write_tickers_csv(&path, &["AAPL", "MSFT", "IBM"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "AAPL\nMSFT\nIBM\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "OLD\nSTUFF\nHERE\n").unwrap();
        write_tickers_csv(&path, &["NEW".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW\n");
    }

    #[test]
    fn empty_list_gives_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let none: [&str; 0] = [];
        write_tickers_csv(&path, &none).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn missing_directory_is_io_error_and_leaves_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("t.csv");
        let err = write_tickers_csv(&path, &["AAPL"]).unwrap_err();
        assert!(matches!(err, TickerError::Io(_)));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_destination_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "OLD\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_tickers_csv(&path, &["AAPL"]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        write_tickers_csv(&path, &["MSFT"]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "MSFT\n");
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_not_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh.csv");
        write_tickers_csv(&path, &["AAPL"]).unwrap();

        let created = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let plain = dir.path().join("plain.csv");
        fs::write(&plain, "AAPL\n").unwrap();
        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;
        assert_eq!(created, expected);
    }

    #[test]
    fn reads_back() {
        let input = "AAPL\n\n  MSFT \nIBM\n";
        let tickers = read_tickers_csv(BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(tickers, ["AAPL", "MSFT", "IBM"]);

        let err = read_tickers_csv("AAPL,MSFT\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TickerError::InvalidArgument(_)));
    }
}
