//! The standard Blue Marble board and the textual layout format.
//!
//! Hosts ship the display names as a line-oriented file, one
//! `"<index>: <name>"` entry per space. The engine only needs it for names;
//! kinds, prices and rents come from [`standard_spaces`].

use crate::core::Money;

use super::space::{GroupId, PropertyDef, Space, SpaceIndex, SpaceKind, BOARD_SIZE};
use super::BoardError;

/// Index of the space whose owner collects the space station fee.
pub const COLUMBIA: SpaceIndex = SpaceIndex::fixed(32);

enum Entry {
    Plain(&'static str, SpaceKind),
    City(&'static str, i64, u8),
    Special(&'static str, i64, i64),
}

use Entry::{City, Plain, Special};

// Prices and rents in hundredths of a million.
const STANDARD: [Entry; BOARD_SIZE as usize] = [
    Plain("Start", SpaceKind::Go),
    City("Taipei", 50, 0),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("Beijing", 80, 0),
    City("Manila", 80, 0),
    Special("Jeju Island", 200, 30),
    City("Singapore", 100, 1),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("Cairo", 100, 1),
    City("Istanbul", 120, 1),
    Plain("Deserted Island", SpaceKind::DesertedIsland),
    City("Athens", 140, 2),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("Copenhagen", 160, 2),
    City("Stockholm", 160, 2),
    Special("Concorde", 200, 30),
    City("Bern", 180, 3),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("Berlin", 180, 3),
    City("Ottawa", 200, 3),
    Plain("Welfare Zone", SpaceKind::Welfare),
    City("Buenos Aires", 220, 4),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("Sao Paulo", 240, 4),
    City("Sydney", 240, 4),
    Special("Busan", 500, 60),
    City("Hawaii", 260, 5),
    City("Lisbon", 260, 5),
    Special("Queen Elizabeth", 300, 40),
    City("Madrid", 280, 5),
    Plain("Space Station", SpaceKind::SpaceStation),
    City("Tokyo", 300, 6),
    Special("Columbia", 450, 45),
    City("Paris", 320, 6),
    City("Rome", 320, 6),
    Plain("Golden Key", SpaceKind::GoldenKey),
    City("London", 350, 7),
    City("New York", 350, 7),
    Plain("Welfare Tax", SpaceKind::WelfareTax),
    Special("Seoul", 1000, 200),
];

/// The 40 spaces of the standard board, in index order.
#[must_use]
pub fn standard_spaces() -> Vec<Space> {
    SpaceIndex::all()
        .zip(STANDARD.iter())
        .map(|(index, entry)| match *entry {
            Plain(name, kind) => Space::new(index, name, kind),
            City(name, price, group) => Space::property(
                index,
                name,
                PropertyDef::city(Money::cents(price), GroupId(group)),
            ),
            Special(name, price, rent) => Space::property(
                index,
                name,
                PropertyDef::special(Money::cents(price), Money::cents(rent)),
            ),
        })
        .collect()
}

/// Parse a `"<index>: <name>"` layout listing.
///
/// Blank lines are skipped. Every index must be on the board and appear once.
pub fn parse_layout(text: &str) -> Result<Vec<(SpaceIndex, String)>, BoardError> {
    let mut seen = [false; BOARD_SIZE as usize];
    let mut entries = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let malformed = || BoardError::MalformedLayout {
            line: line_no + 1,
            content: line.to_string(),
        };
        let (raw_index, name) = line.split_once(':').ok_or_else(malformed)?;
        let raw: u8 = raw_index.trim().parse().map_err(|_| malformed())?;
        let index = SpaceIndex::try_from(raw)?;

        if std::mem::replace(&mut seen[raw as usize], true) {
            return Err(BoardError::DuplicateIndex(index));
        }
        entries.push((index, name.trim().to_string()));
    }

    Ok(entries)
}
