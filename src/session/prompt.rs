//! What the session is waiting for.

use serde::{Deserialize, Serialize};

use crate::board::SpaceIndex;
use crate::core::PlayerId;
use crate::events::EventLog;
use crate::rules::Decision;

/// The single pending request to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Answer with [`Response::Roll`](crate::core::Response::Roll).
    Roll { player: PlayerId },
    /// Stranded with an escape ticket in hand.
    UseEscapeTicket { player: PlayerId },
    /// Parked on the space station; any space but the station itself.
    StationDestination {
        player: PlayerId,
        destinations: Vec<SpaceIndex>,
    },
    Landing { player: PlayerId, decision: Decision },
    /// The world tour is running on the host side.
    WorldTour { player: PlayerId },
}

impl Prompt {
    /// The player who has to answer.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Prompt::Roll { player }
            | Prompt::UseEscapeTicket { player }
            | Prompt::StationDestination { player, .. }
            | Prompt::Landing { player, .. }
            | Prompt::WorldTour { player } => *player,
        }
    }

    /// Name of the response that answers this prompt.
    #[must_use]
    pub fn expected_response(&self) -> &'static str {
        match self {
            Prompt::Roll { .. } => "Roll",
            Prompt::UseEscapeTicket { .. } => "UseEscapeTicket",
            Prompt::StationDestination { .. } => "StationDestination",
            Prompt::Landing { decision, .. } => decision.expected_response(),
            Prompt::WorldTour { .. } => "WorldTourComplete",
        }
    }
}

/// Result of one accepted response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub events: EventLog,
    /// `None` once the game is over.
    pub next: Option<Prompt>,
}
