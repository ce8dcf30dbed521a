use crate::util::*;
use openjass_lib::game::*;
use openjass_lib::player::*;
use openjass_lib::primitives::*;
use openjass_lib::rules::*;
use std::sync::mpsc;

/// Rule-of-thumb player: picks the most promising trump by hand weight and
/// plays the cheapest card that still takes the trick, the cheapest legal
/// card otherwise.
#[derive(new)]
pub struct SPlayerGreedy {
    str_name: String,
}

// hand weight per card towards a candidate trump suit, scaled by 10
fn trump_weight(card: ECard, esuit: ESuit) -> isize {
    if card.suit() != esuit {
        return 0;
    }
    match card.rank() {
        ERank::Jack => 25,
        ERank::Nine => 20,
        ERank::Ace => 15,
        ERank::King => 12,
        ERank::Queen => 11,
        _ => 10,
    }
}

fn choose_trump_greedy(slccard_hand: &[ECard]) -> ESuit {
    let mut esuit_best = ESuit::Diamonds;
    let mut n_weight_best = -1;
    for esuit in ESuit::values() {
        let n_weight: isize = slccard_hand.iter()
            .map(|card| trump_weight(*card, esuit))
            .sum();
        if n_weight_best < n_weight {
            n_weight_best = n_weight;
            esuit_best = esuit;
        }
    }
    esuit_best
}

impl TPlayer for SPlayerGreedy {
    fn ask_for_trump(
        &self,
        _epi: EPlayerIndex,
        slccard_hand: &[ECard],
        _b_may_pass: bool,
        txoesuit: mpsc::Sender<Option<ESuit>>,
    ) {
        unwrap!(txoesuit.send(Some(choose_trump_greedy(slccard_hand))));
    }

    fn ask_for_card(&self, game: &SGame, txcard: mpsc::Sender<ECard>) {
        let veccard_allowed = game.all_allowed_cards();
        let esuit_trump = game.esuit_trump;
        let trick = game.current_trick();
        let card_chosen = if trick.is_empty() {
            // lead with the strongest card of the hand
            unwrap!(veccard_allowed.iter().copied().max_by_key(|card| {
                strength_if_served(*card, esuit_trump)
            }))
        } else {
            let esuit_served = trick.first().suit();
            let ocard_winning = veccard_allowed.iter().copied()
                .filter(|&card| {
                    trick.iter().all(|(_epi, card_played)| {
                        beats(card, *card_played, esuit_served, esuit_trump)
                    })
                })
                .min_by_key(|&card| points_card(card, esuit_trump));
            match ocard_winning {
                Some(card) => card, // cheapest card that takes the trick
                None => unwrap!(veccard_allowed.iter().copied()
                    .min_by_key(|&card| points_card(card, esuit_trump))),
            }
        };
        unwrap!(txcard.send(card_chosen));
    }

    fn name(&self) -> &str {
        &self.str_name
    }
}

// strength a card would have if its own suit were served
fn strength_if_served(card: ECard, esuit_trump: ESuit) -> usize {
    if card.suit() == esuit_trump {
        card.rank().trump_order() + ERank::SIZE + 1
    } else {
        card.rank().plain_order() + 1
    }
}
