use std::fmt::Write;
use std::path::Path;

use super::{Entry, entries, volume_fields};
use crate::system::error::{CollectionError, ReportError};
use crate::system::snapshot::SystemSnapshot;

pub const DEFAULT_REPORT_FILE: &str = "system_info.txt";

pub const DISK_HEADER: &str = "Disk Information:";

/// Flat text form: `Name: value` per property in natural order, with the
/// volumes as an indented block under `Disk Information:`.
pub fn serialize(snapshot: &SystemSnapshot) -> String {
    #[cfg(feature = "trace-log")]
    let _serialize_span = tracing::debug_span!("present.serialize").entered();

    let mut out = String::new();
    for entry in entries(snapshot) {
        match entry {
            Entry::Scalar(name, value) => {
                let _ = writeln!(out, "{name}: {}", single_line(&value));
            }
            Entry::Disks(volumes) => {
                let _ = writeln!(out, "\n{DISK_HEADER}");
                for volume in volumes {
                    for (name, value) in volume_fields(volume) {
                        let _ = writeln!(out, "  {name}: {}", single_line(&value));
                    }
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Line breaks inside a value would split its `Name: value` line.
fn single_line(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains(['\n', '\r']) {
        value.replace(['\r', '\n'], " ").into()
    } else {
        value.into()
    }
}

/// Overwrites `path` with the report. A failed collection is returned as-is
/// and nothing is written.
pub fn write_report(
    path: &Path,
    collected: Result<SystemSnapshot, CollectionError>,
) -> Result<(), ReportError> {
    let snapshot = collected?;
    let text = serialize(&snapshot);
    std::fs::write(path, text).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
