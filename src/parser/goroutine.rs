//! Parser for a single goroutine block.
//!
//! Grammar, one block at a time:
//! - line 0 is the header: `goroutine <id> [<reason>(, <delay>)?]:`
//! - `created by <fn> in goroutine <id>` records the creator
//! - any other line is a call: `<fn>(<args>)`
//! - a call or creator line is followed by its indented `\t<file>:<line> ...`
//!   detail line whenever another line exists
//!
//! The first malformed line aborts parsing; there is no partial result.

use super::schema::{Call, Creator, Location, Stack};
use crate::utils::config::{
    CREATOR_GOROUTINE_SEPARATOR, CREATOR_PREFIX, HEADER_PREFIX, NOISE_LINE_PREFIXES,
    REASON_DELAY_SEPARATOR,
};
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Parse one block of lines into a `Stack`
///
/// **Public** - used by `parse_stacks` and directly by tests
///
/// # Arguments
/// * `lines` - Non-empty block as produced by `segment_blocks`
///
/// # Errors
/// * `ParseError::Header` - First line is not a goroutine header
/// * `ParseError::Call` - Frame line without `(`
/// * `ParseError::Creator` - Malformed `created by` line
/// * `ParseError::Location` - Detail line not indented or bad line number
pub fn parse_stack(lines: &[&str]) -> Result<Stack, ParseError> {
    let header = lines.first().copied().unwrap_or_default();
    let (goroutine_id, reason, delay) = parse_header(header)?;

    let mut calls = Vec::new();
    let mut creator: Option<Creator> = None;

    let mut i = 1;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if is_noise_line(line) {
            debug!("Skipping noise line in goroutine {}: {}", goroutine_id, line);
            continue;
        }

        if let Some(rest) = line.strip_prefix(CREATOR_PREFIX) {
            let (name, origin_goroutine) = parse_creator(line, rest)?;
            let location = take_location(lines, &mut i)?;
            if let Some(previous) = &creator {
                warn!(
                    "Goroutine {} has more than one creator, replacing {} with {}",
                    goroutine_id, previous.name, name
                );
            }
            creator = Some(Creator {
                name,
                origin_goroutine,
                location,
            });
            continue;
        }

        let (name, args) = parse_call(line)?;
        let location = take_location(lines, &mut i)?;
        calls.push(Call {
            name,
            args,
            location,
        });
    }

    Ok(Stack {
        goroutine_id,
        reason,
        delay,
        calls,
        creator,
        raw_lines: lines.iter().map(|line| line.to_string()).collect(),
    })
}

/// Parse the `goroutine <id> [<reason>, <delay>]:` header
///
/// **Private** - internal helper for parse_stack
fn parse_header(line: &str) -> Result<(u64, String, Option<String>), ParseError> {
    let rest = line.strip_prefix(HEADER_PREFIX).ok_or_else(|| ParseError::Header {
        line: line.to_string(),
        detail: format!("stack should begin with {:?}", HEADER_PREFIX.trim_end()),
    })?;

    let (id, rest) = rest.split_once(' ').unwrap_or((rest, ""));
    let goroutine_id = parse_number(id).map_err(|e| ParseError::Header {
        line: line.to_string(),
        detail: format!("could not parse goroutine number: {}", e),
    })?;

    let body = rest.strip_prefix('[').unwrap_or(rest);
    let body = body.strip_suffix("]:").unwrap_or(body);

    let (reason, delay) = match body.split_once(REASON_DELAY_SEPARATOR) {
        Some((reason, delay)) => (reason.to_string(), Some(delay.to_string())),
        None => (body.to_string(), None),
    };

    Ok((goroutine_id, reason, delay))
}

/// Split `<fn> in goroutine <id>` (prefix already stripped)
///
/// **Private** - internal helper for parse_stack
fn parse_creator(line: &str, rest: &str) -> Result<(String, u64), ParseError> {
    let (name, goroutine) =
        rest.split_once(CREATOR_GOROUTINE_SEPARATOR)
            .ok_or_else(|| ParseError::Creator {
                line: line.to_string(),
                detail: "creator line should name a goroutine".to_string(),
            })?;

    let origin = parse_number(goroutine).map_err(|e| ParseError::Creator {
        line: line.to_string(),
        detail: format!("could not parse goroutine number: {}", e),
    })?;

    Ok((name.to_string(), origin))
}

/// Split `<fn>(<args>)` into name and raw argument text
///
/// **Private** - internal helper for parse_stack
fn parse_call(line: &str) -> Result<(String, String), ParseError> {
    let (name, args) = line.split_once('(').ok_or_else(|| ParseError::Call {
        line: line.to_string(),
    })?;
    let args = args.strip_suffix(')').unwrap_or(args);

    Ok((name.trim().to_string(), args.to_string()))
}

/// Consume the line at `*i` as a location, if one exists
///
/// **Private** - every call or creator line owns the line after it
fn take_location(lines: &[&str], i: &mut usize) -> Result<Option<Location>, ParseError> {
    match lines.get(*i) {
        Some(next) => {
            *i += 1;
            parse_location(next).map(Some)
        }
        None => Ok(None),
    }
}

/// Parse the tab-indented detail line under a frame
///
/// **Public** - exposed for testing detail-line shapes in isolation
///
/// Only the leading `<file>:<line>` token is interpreted; the PC offset and
/// anything after it are ignored. A token without `:` yields an empty
/// location rather than an error.
pub fn parse_location(line: &str) -> Result<Location, ParseError> {
    let rest = line.strip_prefix('\t').ok_or_else(|| ParseError::Location {
        line: line.to_string(),
        detail: "location line should be indented".to_string(),
    })?;

    let token = rest.split(char::is_whitespace).next().unwrap_or_default();

    let Some((filename, line_no)) = token.split_once(':') else {
        warn!("Location line has no file:line token: {}", line);
        return Ok(Location::default());
    };

    let line_no = parse_number(line_no).map_err(|e| ParseError::Location {
        line: line.to_string(),
        detail: format!("could not parse line number: {}", e),
    })?;

    Ok(Location {
        filename: filename.to_string(),
        line: line_no,
    })
}

/// Parse a plain run of ASCII digits
///
/// `str::parse` would also accept a leading `+`, which never appears in a
/// real dump and would make `:+10` and `:10` the same frame.
fn parse_number(text: &str) -> Result<u64, String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("expected digits, found {:?}", text));
    }
    text.parse::<u64>().map_err(|e| e.to_string())
}

fn is_noise_line(line: &str) -> bool {
    NOISE_LINE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_delay() {
        let (id, reason, delay) = parse_header("goroutine 42 [select, 5 minutes]:").unwrap();
        assert_eq!(id, 42);
        assert_eq!(reason, "select");
        assert_eq!(delay.as_deref(), Some("5 minutes"));
    }

    #[test]
    fn test_header_reason_keeps_later_commas() {
        let (_, reason, delay) =
            parse_header("goroutine 7 [runnable, (idle) waiting, locked]:").unwrap();
        assert_eq!(reason, "runnable");
        assert_eq!(delay.as_deref(), Some("(idle) waiting, locked"));
    }

    #[test]
    fn test_header_without_prefix() {
        let err = parse_header("thread 1 [running]:").unwrap_err();
        assert!(matches!(err, ParseError::Header { .. }));
        assert_eq!(err.line(), "thread 1 [running]:");
    }

    #[test]
    fn test_call_strips_single_paren() {
        let (name, args) = parse_call("main.f({0x1, 0x2}, ...)").unwrap();
        assert_eq!(name, "main.f");
        assert_eq!(args, "{0x1, 0x2}, ...");
    }

    #[test]
    fn test_call_without_paren() {
        assert_eq!(
            parse_call("main.f").unwrap_err(),
            ParseError::Call {
                line: "main.f".to_string()
            }
        );
    }

    #[test]
    fn test_location_ignores_pc_offset() {
        let loc = parse_location("\t/src/runtime/proc.go:398 +0x1c fp=0x1 sp=0x2").unwrap();
        assert_eq!(loc.filename, "/src/runtime/proc.go");
        assert_eq!(loc.line, 398);
    }

    #[test]
    fn test_location_without_colon_is_empty() {
        let loc = parse_location("\t?").unwrap();
        assert_eq!(loc, Location::default());
    }

    #[test]
    fn test_location_must_be_indented() {
        let err = parse_location("/a/b.go:10").unwrap_err();
        assert!(matches!(err, ParseError::Location { .. }));
    }

    #[test]
    fn test_numbers_reject_sign() {
        assert!(parse_number("+5").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("99999999999999999999999").is_err());
        assert_eq!(parse_number("007"), Ok(7));
    }

    #[test]
    fn test_location_bad_line_number() {
        let err = parse_location("\t/a/b.go:ten +0x1").unwrap_err();
        assert!(matches!(err, ParseError::Location { .. }));
    }
}
