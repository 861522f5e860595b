//! Decisions a landing can require.

use serde::{Deserialize, Serialize};

use crate::board::SpaceIndex;
use crate::cards::GoldenKey;
use crate::core::{Money, PlayerId};
use crate::effects::CardPreview;
use crate::ledger::Buildings;

/// What the player has to answer after landing on a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Money already credited (GO, Welfare); shown for acknowledgement.
    Payout { amount: Money },
    ChooseBuyOrSkip { property: SpaceIndex, price: Money },
    PayRent {
        property: SpaceIndex,
        owner: PlayerId,
        amount: Money,
        /// A complimentary ticket may be used instead of paying.
        ticket_available: bool,
    },
    DonateToWelfare { amount: Money },
    /// The card is already drawn; its effect applies on acknowledgement.
    DrawGoldenKey { card: GoldenKey, preview: CardPreview },
    /// `payee` is the operator's owner, or `None` for the bank.
    EnterSpaceStationPrompt { fee: Money, payee: Option<PlayerId> },
    BuildOrSkip { property: SpaceIndex, current: Buildings },
    /// Deserted Island; the stay starts on acknowledgement.
    Strand { turns: u8 },
    PayTax { amount: Money },
    NoAction,
}

impl Decision {
    /// Name of the response that answers this decision.
    #[must_use]
    pub fn expected_response(&self) -> &'static str {
        match self {
            Decision::Payout { .. }
            | Decision::Strand { .. }
            | Decision::PayTax { .. }
            | Decision::NoAction => "Acknowledge",
            Decision::ChooseBuyOrSkip { .. } => "Buy",
            Decision::PayRent { .. } => "RentPayment",
            Decision::DonateToWelfare { .. } => "WelfareTaxConfirm",
            Decision::DrawGoldenKey { .. } => "GoldenKeyAck",
            Decision::EnterSpaceStationPrompt { .. } => "StationEntry",
            Decision::BuildOrSkip { .. } => "BuildCounts",
        }
    }
}
