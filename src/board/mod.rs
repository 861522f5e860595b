//! Board model: the static ring of 40 spaces.
//!
//! The board is built once per session and never changes structurally.
//! Spaces dispatch by [`SpaceKind`]; ownable spaces carry a [`PropertyDef`]
//! with price, rent schedule and colour group.

mod space;
pub mod layout;

pub use space::{GroupId, PropertyDef, RentSchedule, Space, SpaceIndex, SpaceKind, BOARD_SIZE};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems building a board or reading a layout listing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board needs exactly 40 spaces, got {0}")]
    WrongSize(usize),

    #[error("space at position {position} claims index {index}")]
    MisplacedSpace { position: usize, index: SpaceIndex },

    #[error("space {0} kind and property definition disagree")]
    PropertyMismatch(SpaceIndex),

    #[error("space station fee owner {0} is not a property")]
    InvalidStationOperator(SpaceIndex),

    #[error("layout line {line} is malformed: {content:?}")]
    MalformedLayout { line: usize, content: String },

    #[error("space index {0} is off the board")]
    IndexOutOfRange(u8),

    #[error("layout index {0} listed twice")]
    DuplicateIndex(SpaceIndex),
}

/// Immutable board definition.
///
/// Deserialized boards are checked with [`Board::from_spaces`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    spaces: Vec<Space>,
    /// Property whose owner collects the space station fee.
    station_operator: Option<SpaceIndex>,
}

#[derive(Deserialize)]
struct BoardData {
    spaces: Vec<Space>,
    station_operator: Option<SpaceIndex>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        Board::from_spaces(data.spaces, data.station_operator)
    }
}

impl Board {
    /// The standard Blue Marble board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            spaces: layout::standard_spaces(),
            station_operator: Some(layout::COLUMBIA),
        }
    }

    /// Build a custom board, checking that it is well formed.
    pub fn from_spaces(
        spaces: Vec<Space>,
        station_operator: Option<SpaceIndex>,
    ) -> Result<Self, BoardError> {
        if spaces.len() != BOARD_SIZE as usize {
            return Err(BoardError::WrongSize(spaces.len()));
        }
        for (position, space) in spaces.iter().enumerate() {
            if space.index.get() as usize != position {
                return Err(BoardError::MisplacedSpace {
                    position,
                    index: space.index,
                });
            }
            if (space.kind == SpaceKind::Property) != space.property.is_some() {
                return Err(BoardError::PropertyMismatch(space.index));
            }
        }

        let board = Self {
            spaces,
            station_operator,
        };
        if let Some(operator) = station_operator {
            if board.property(operator).is_none() {
                return Err(BoardError::InvalidStationOperator(operator));
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn space(&self, index: SpaceIndex) -> &Space {
        &self.spaces[index.get() as usize]
    }

    /// Property definition, if the space is ownable.
    #[must_use]
    pub fn property(&self, index: SpaceIndex) -> Option<&PropertyDef> {
        self.space(index).property.as_ref()
    }

    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Ownable spaces in board order.
    pub fn properties(&self) -> impl Iterator<Item = (SpaceIndex, &PropertyDef)> {
        self.spaces
            .iter()
            .filter_map(|s| s.property.as_ref().map(|p| (s.index, p)))
    }

    /// Members of a colour group in board order.
    pub fn group_members(&self, group: GroupId) -> impl Iterator<Item = SpaceIndex> + '_ {
        self.properties()
            .filter(move |(_, p)| p.group == Some(group))
            .map(|(i, _)| i)
    }

    /// First space of a kind, scanning from GO.
    #[must_use]
    pub fn find_kind(&self, kind: SpaceKind) -> Option<SpaceIndex> {
        self.spaces.iter().find(|s| s.kind == kind).map(|s| s.index)
    }

    #[must_use]
    pub fn station_operator(&self) -> Option<SpaceIndex> {
        self.station_operator
    }

    /// Rename spaces from a `"<index>: <name>"` listing.
    ///
    /// Validates the whole listing before renaming anything.
    pub fn apply_layout(&mut self, text: &str) -> Result<(), BoardError> {
        for (index, name) in layout::parse_layout(text)? {
            self.spaces[index.get() as usize].name = name;
        }
        Ok(())
    }

    /// Render the board as a `"<index>: <name>"` listing.
    #[must_use]
    pub fn layout_lines(&self) -> Vec<String> {
        self.spaces
            .iter()
            .map(|s| format!("{}: {}", s.index.get(), s.name))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
