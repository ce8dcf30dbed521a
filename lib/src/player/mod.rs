pub mod playerrandom;

use crate::game::*;
use crate::primitives::*;
use std::sync::mpsc;

/// Decision-making boundary of the engine. Implementations answer through
/// the supplied channel; the engine validates every answer and rejects
/// anything outside the legal set with an IllegalMove.
pub trait TPlayer {
    /// `b_may_pass` is true iff answering `None` (chibre, handing the
    /// decision to the partner) is permitted.
    fn ask_for_trump(
        &self,
        epi: EPlayerIndex,
        slccard_hand: &[ECard],
        b_may_pass: bool,
        txoesuit: mpsc::Sender<Option<ESuit>>,
    );

    /// The game carries the full context: trump, chooser seat, own hand,
    /// the open trick, completed tricks, and the precomputed legal set via
    /// `SGame::all_allowed_cards`.
    fn ask_for_card(&self, game: &SGame, txcard: mpsc::Sender<ECard>);

    /// Called after every completed trick: the trick's points from this
    /// player's perspective (negative if the other team took it), and
    /// whether it was the deal's final trick. Fire-and-forget.
    fn on_trick_end(&self, _n_points_signed: isize, _b_last_trick: bool) {}

    fn name(&self) -> &str;
}
