//! Line parser for uploaded booking manifests.

/// One parsed booking line: an integer id plus its seat labels.
///
/// Labels are whitespace-stripped and uppercased at parse time; seat
/// resolution and scoring happen later in [`super::sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLine {
    pub booking_id: i64,
    pub seat_labels: Vec<String>,
}

/// Parse booking text into `BookingLine` records.
///
/// Header lines (first token containing "booking", case-insensitive),
/// blank lines, lines whose first token is not an integer, and lines with
/// no seat labels are all skipped silently — a bad line never aborts the
/// file. An input yielding zero bookings is the caller's validation
/// failure, not an error here.
#[must_use]
pub fn parse_bookings(input: &str) -> Vec<BookingLine> {
    input.lines().filter_map(parse_line).collect()
}

/// Parse a single line, or `None` if it carries no booking.
fn parse_line(line: &str) -> Option<BookingLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    // Header line, e.g. "Booking   Seats".
    if first.to_ascii_lowercase().contains("booking") {
        return None;
    }

    let booking_id: i64 = first.parse().ok()?;

    // Seats may be spread across tokens ("A20, C2"); rejoin without the
    // whitespace, then split on commas.
    let joined = tokens.collect::<Vec<_>>().join("");
    let seat_labels: Vec<String> = joined
        .split(',')
        .filter(|label| !label.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    if seat_labels.is_empty() {
        return None;
    }

    Some(BookingLine { booking_id, seat_labels })
}
