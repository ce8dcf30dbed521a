use crate::game::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;
use std::sync::mpsc;

/// Chooses uniformly among the legal options. `fn_check_game` runs at every
/// card decision; tests use it to assert invariants mid-game.
#[derive(new)]
pub struct SPlayerRandom<FnCheckGame> {
    str_name: String,
    fn_check_game: FnCheckGame,
}

impl<FnCheckGame: Fn(&SGame)> TPlayer for SPlayerRandom<FnCheckGame> {
    fn ask_for_trump(
        &self,
        _epi: EPlayerIndex,
        _slccard_hand: &[ECard],
        b_may_pass: bool,
        txoesuit: mpsc::Sender<Option<ESuit>>,
    ) {
        let mut rng = rand::thread_rng();
        unwrap!(txoesuit.send(
            if b_may_pass && rng.gen::<bool>() {
                None
            } else {
                Some(unwrap!(ESuit::values().choose(&mut rng)))
            }
        ));
    }

    fn ask_for_card(&self, game: &SGame, txcard: mpsc::Sender<ECard>) {
        (self.fn_check_game)(game);
        unwrap!(txcard.send(
            unwrap!(game.all_allowed_cards().choose(&mut rand::thread_rng()).copied())
        ));
    }

    fn name(&self) -> &str {
        &self.str_name
    }
}
