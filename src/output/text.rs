//! Plain-text triage report.
//!
//! Format per retained group:
//! ```text
//! (3 copies)
//! goroutine 17 [chan receive]:
//! main.worker(...)
//!         /src/main.go:42 +0x1d
//!
//! ```

use crate::aggregator::Group;
use crate::utils::error::OutputError;
use std::io::Write;

/// Write groups in the `(N copies)` text format
///
/// **Public** - default report writer
///
/// The representative is printed exactly as it appeared in the input.
pub fn write_text<W: Write>(groups: &[Group], writer: &mut W) -> Result<(), OutputError> {
    for group in groups {
        writeln!(writer, "({} copies)", group.count())?;
        writeln!(writer, "{}", group.representative.source())?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the text report into a string
///
/// **Public** - useful for tests and in-memory use
pub fn render_text(groups: &[Group]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_text(groups, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
