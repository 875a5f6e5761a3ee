//! Boarding order computation.
//!
//! DESIGN
//! ======
//! Two strategies, selected per batch:
//! - A configurable [`PriorityTable`] covering a closed seat universe. When
//!   every distinct label in the batch is drawn from the table, bookings
//!   board by their best (lowest) table rank.
//! - Otherwise the general heuristic: back-to-front by deepest row, then
//!   more window seats first, then ascending booking id.
//!
//! Both strategies are total orders over the batch, so the output for a
//! given input is identical across invocations.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use super::parse::{BookingLine, parse_bookings};
use super::seat::Seat;

/// Ranked labels for the built-in fixed-priority scenario.
const DEFAULT_PRIORITY_SEATS: &[&str] = &["A2", "B2", "A1", "B1"];

#[derive(Debug, thiserror::Error)]
pub enum BoardingError {
    /// The input contained no parseable booking lines.
    #[error("no valid bookings found in input")]
    NoValidBookings,
}

/// One slot in the final boarding order. `seq` is the 1-based call
/// position; entries are returned already sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingEntry {
    pub seq: u32,
    pub booking_id: i64,
}

// =============================================================================
// PRIORITY TABLE
// =============================================================================

/// Fixed boarding ranks for a closed set of seat labels.
///
/// The table applies to a batch only when every distinct seat label across
/// the batch is drawn from it (lower rank boards first). Labels are matched
/// uppercase, as the parser produces them.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    ranks: HashMap<String, usize>,
}

impl PriorityTable {
    /// Build a table from labels in rank order (first label boards first).
    /// Labels are trimmed and uppercased; empty entries are dropped.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranks = labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| (label.as_ref().trim().to_ascii_uppercase(), idx + 1))
            .filter(|(label, _)| !label.is_empty())
            .collect();
        Self { ranks }
    }

    /// Table from `BOARDING_PRIORITY_SEATS` (comma-separated, rank order),
    /// falling back to the built-in `A2,B2,A1,B1` table when unset. Setting
    /// the variable to an empty value disables the override entirely.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("BOARDING_PRIORITY_SEATS") {
            Ok(value) => Self::new(value.split(',')),
            Err(_) => Self::default(),
        }
    }

    /// True when `labels` is non-empty and every label is in the table.
    fn covers<'a>(&self, labels: impl Iterator<Item = &'a str>) -> bool {
        let mut any = false;
        for label in labels {
            if !self.ranks.contains_key(label) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Best (lowest) rank among a booking's labels, if any are ranked.
    fn best_rank(&self, labels: &[String]) -> Option<usize> {
        labels.iter().filter_map(|label| self.ranks.get(label).copied()).min()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_SEATS.iter().copied())
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Ordering metadata derived from one booking's resolvable seats. Built
/// fresh per batch; the parsed [`BookingLine`] is never mutated.
#[derive(Debug)]
struct ScoredBooking {
    booking_id: i64,
    /// Deepest resolvable row. `None` when no label resolves, which sorts
    /// the booking as if seated nearest the front (it boards last).
    max_row: Option<u32>,
    window_count: usize,
    /// Derived alongside `window_count` but not part of the ordering.
    aisle_count: usize,
}

fn score(booking: &BookingLine) -> ScoredBooking {
    let seats: Vec<Seat> = booking.seat_labels.iter().filter_map(|label| Seat::parse(label)).collect();

    let scored = ScoredBooking {
        booking_id: booking.booking_id,
        max_row: seats.iter().map(|seat| seat.row).max(),
        window_count: seats.iter().filter(|seat| seat.column.is_window()).count(),
        aisle_count: seats.iter().filter(|seat| seat.column.is_aisle()).count(),
    };

    tracing::debug!(
        booking_id = scored.booking_id,
        max_row = ?scored.max_row,
        window_count = scored.window_count,
        aisle_count = scored.aisle_count,
        "scored booking"
    );

    scored
}

// =============================================================================
// SEQUENCING
// =============================================================================

/// Parse booking text and compute its boarding order in one call.
///
/// # Errors
///
/// Returns [`BoardingError::NoValidBookings`] when no line of the input
/// parses as a booking.
pub fn sequence_text(input: &str, table: &PriorityTable) -> Result<Vec<BoardingEntry>, BoardingError> {
    sequence(&parse_bookings(input), table)
}

/// Compute the boarding order for a parsed batch.
///
/// Every booking produces exactly one entry; `seq` runs 1..=N in boarding
/// order with no gaps.
///
/// # Errors
///
/// Returns [`BoardingError::NoValidBookings`] when the batch is empty.
pub fn sequence(bookings: &[BookingLine], table: &PriorityTable) -> Result<Vec<BoardingEntry>, BoardingError> {
    if bookings.is_empty() {
        return Err(BoardingError::NoValidBookings);
    }

    let distinct = bookings.iter().flat_map(|booking| booking.seat_labels.iter().map(String::as_str));
    let ordered = if table.covers(distinct) {
        by_priority_table(bookings, table)
    } else {
        by_heuristic(bookings)
    };

    Ok(ordered
        .into_iter()
        .zip(1u32..)
        .map(|(booking_id, seq)| BoardingEntry { seq, booking_id })
        .collect())
}

/// Closed-universe ordering: each booking boards by its best table rank,
/// ties broken by ascending booking id.
fn by_priority_table(bookings: &[BookingLine], table: &PriorityTable) -> Vec<i64> {
    let mut ranked: Vec<(usize, i64)> = bookings
        .iter()
        .map(|booking| {
            // The covers() precondition guarantees at least one ranked label.
            let rank = table.best_rank(&booking.seat_labels).unwrap_or(usize::MAX);
            (rank, booking.booking_id)
        })
        .collect();
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, booking_id)| booking_id).collect()
}

/// General heuristic: descending deepest row, then descending window
/// count, then ascending booking id.
fn by_heuristic(bookings: &[BookingLine]) -> Vec<i64> {
    let mut scored: Vec<ScoredBooking> = bookings.iter().map(score).collect();
    scored.sort_unstable_by_key(|s| (Reverse(s.max_row), Reverse(s.window_count), s.booking_id));
    scored.into_iter().map(|s| s.booking_id).collect()
}
