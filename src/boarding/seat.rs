//! Seat label resolution.

/// Cabin column in the fixed 4-abreast layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatColumn {
    A,
    B,
    C,
    D,
}

impl SeatColumn {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// A and D sit against the fuselage; B and C border the aisle.
    #[must_use]
    pub fn is_window(self) -> bool {
        matches!(self, Self::A | Self::D)
    }

    #[must_use]
    pub fn is_aisle(self) -> bool {
        !self.is_window()
    }
}

/// A resolved seat coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub row: u32,
    pub column: SeatColumn,
}

impl Seat {
    /// Resolve a raw label like `A1` or `b20` into a seat.
    ///
    /// Exactly one column letter followed by one or two ASCII digits,
    /// nothing else. Labels that do not match (wrong letter, 3+ digits,
    /// trailing characters) are not seats and return `None`; the row value
    /// itself is unbounded — `D99` resolves.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let column = SeatColumn::from_char(chars.next()?)?;

        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let row = digits.parse().ok()?;
        Some(Self { row, column })
    }
}
