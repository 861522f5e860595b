//! Typed events produced for the presentation layer.
//!
//! Every resolved response yields an ordered list of events describing what
//! changed. The engine never reads them back; they exist for hosts that
//! animate, log or replay a game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SpaceIndex;
use crate::cards::GoldenKey;
use crate::core::{Money, PlayerId};
use crate::ledger::Buildings;

/// Something that happened during resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiceRolled {
        player: PlayerId,
        die1: u8,
        die2: u8,
    },
    PlayerMoved {
        player: PlayerId,
        from: SpaceIndex,
        to: SpaceIndex,
    },
    /// Signed change to a balance.
    MoneyChanged {
        player: PlayerId,
        delta: Money,
        balance: Money,
    },
    /// Owner or buildings of a property changed.
    PropertyChanged {
        property: SpaceIndex,
        owner: Option<PlayerId>,
        buildings: Buildings,
    },
    /// `creditor` is `None` when the debt was owed to the bank.
    PlayerEliminated {
        loser: PlayerId,
        creditor: Option<PlayerId>,
    },
    TurnAdvanced {
        player: PlayerId,
    },
    GameOver {
        winner: PlayerId,
    },
    GoldenKeyDrawn {
        player: PlayerId,
        card: GoldenKey,
    },
    /// A Deserted Island stay begins.
    Stranded {
        player: PlayerId,
        turns: u8,
    },
    /// A stranded player's roll was used up instead of moving them.
    DesertedIslandHeld {
        player: PlayerId,
        turns_left: u8,
    },
    WelfarePoolChanged {
        pool: Money,
    },
    TicketUsed {
        player: PlayerId,
        ticket: Ticket,
    },
    EnteredSpaceStation {
        player: PlayerId,
        fee: Money,
    },
    WorldTourStarted {
        player: PlayerId,
    },
}

/// Consumable tickets a player can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ticket {
    EscapeDesertedIsland,
    Complimentary,
    SpaceStationPass,
}

/// Events from one transition. Most transitions emit only a handful.
pub type EventLog = SmallVec<[GameEvent; 8]>;
