use crate::net::codes::{GROUP_SELECTED, MULTILINE_CODES};

/// Decides whether a dot-terminated block follows the status line.
///
/// Codes are reused across commands, so body presence must be known before
/// the stream is touched. `211` answers both GROUP (single line) and
/// LISTGROUP (a list follows); a non-empty reason text is taken to mean the
/// list form. Everything else not in [`MULTILINE_CODES`] is single line.
///
/// TODO: replace the non-empty heuristic for 211 with a phrase match once
/// more server outputs have been collected.
pub fn is_multiline(status: u16, status_text: &str) -> bool {
    if status == GROUP_SELECTED {
        return !status_text.trim().is_empty();
    }

    MULTILINE_CODES.binary_search(&status).is_ok()
}
