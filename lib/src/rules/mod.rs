pub mod card_points;
pub mod ruleset;

pub use self::card_points::*;

use crate::primitives::*;
use crate::util::*;

/// Strength of a card within a trick. Any trump outranks any plain card;
/// a plain card only counts if it follows the served suit.
fn strength_value(card: ECard, esuit_served: ESuit, esuit_trump: ESuit) -> usize {
    if card.suit() == esuit_trump {
        card.rank().trump_order() + ERank::SIZE + 1
    } else if card.suit() == esuit_served {
        card.rank().plain_order() + 1
    } else {
        0
    }
}

/// `>=` on purpose: `beats` is only ever asked whether a challenger takes
/// over from the current best of a trick, and distinct cards never tie on
/// nonzero strength.
pub fn beats(card: ECard, card_other: ECard, esuit_served: ESuit, esuit_trump: ESuit) -> bool {
    strength_value(card, esuit_served, esuit_trump)
        >= strength_value(card_other, esuit_served, esuit_trump)
}

pub fn winner_index(fulltrick: SFullTrick, esuit_trump: ESuit) -> EPlayerIndex {
    let trick = fulltrick.get();
    let esuit_served = trick.first().suit();
    let mut epi_best = trick.first_playerindex();
    for (epi, card) in trick.iter().skip(1) {
        if beats(*card, trick[epi_best], esuit_served, esuit_trump) {
            epi_best = epi;
        }
    }
    epi_best
}

/// Strongest trump within the trick so far, if any.
fn best_trump_in_trick(trick: &STrick, esuit_trump: ESuit) -> Option<ECard> {
    let esuit_served = trick.first().suit();
    trick.iter()
        .map(|(_epi, card)| *card)
        .filter(|card| card.suit() == esuit_trump)
        .fold(None, |ocard_best, card| {
            Some(match ocard_best {
                None => card,
                Some(card_best) => if beats(card, card_best, esuit_served, esuit_trump) {
                    card
                } else {
                    card_best
                },
            })
        })
}

pub fn all_allowed_cards(trick: &STrick, hand: &SHand, esuit_trump: ESuit) -> SHandVector {
    assert!(!hand.cards().is_empty());
    let veccard = if trick.is_empty() {
        // leading: anything goes
        hand.cards().clone()
    } else {
        all_allowed_cards_within_trick(trick, hand, esuit_trump)
    };
    assert!(!veccard.is_empty());
    veccard
}

fn all_allowed_cards_within_trick(trick: &STrick, hand: &SHand, esuit_trump: ESuit) -> SHandVector {
    assert!(!trick.is_empty());
    let esuit_served = trick.first().suit();
    if esuit_served == esuit_trump {
        // Trump was led: trump must be served. Holding no trump frees the
        // whole hand, and so does holding the trump jack as the only trump:
        // the jack alone never forces its owner to reveal it.
        if hand.contains_pred(|card| card.suit() == esuit_trump && card.rank() != ERank::Jack) {
            hand.cards().iter().copied()
                .filter(|card| card.suit() == esuit_trump)
                .collect()
        } else {
            hand.cards().clone()
        }
    } else {
        let ocard_best_trump = best_trump_in_trick(trick, esuit_trump);
        if hand.contains_pred(|card| card.suit() == esuit_served) {
            match ocard_best_trump {
                None => {
                    // follow suit, or cut with any trump
                    hand.cards().iter().copied()
                        .filter(|card| card.suit() == esuit_served || card.suit() == esuit_trump)
                        .collect()
                },
                Some(card_best_trump) => {
                    // follow suit, or over-trump; under-trumping is forbidden
                    hand.cards().iter().copied()
                        .filter(|&card| {
                            card.suit() == esuit_served
                            || beats(card, card_best_trump, esuit_served, esuit_trump)
                        })
                        .collect()
                },
            }
        } else {
            match ocard_best_trump {
                None => hand.cards().clone(), // free discard
                Some(card_best_trump) => {
                    let veccard: SHandVector = hand.cards().iter().copied()
                        .filter(|&card| {
                            card.suit() != esuit_trump
                            || beats(card, card_best_trump, esuit_served, esuit_trump)
                        })
                        .collect();
                    if veccard.is_empty() {
                        // nothing but trumps weaker than the best one on the
                        // table: a losing trump must be thrown
                        hand.cards().clone()
                    } else {
                        veccard
                    }
                },
            }
        }
    }
}

pub fn card_is_allowed(trick: &STrick, hand: &SHand, card: ECard, esuit_trump: ESuit) -> bool {
    all_allowed_cards(trick, hand, esuit_trump).contains(&card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::*;
    use ECard::*;

    fn trick_from_cards(epi_first: EPlayerIndex, slccard: &[ECard]) -> STrick {
        let mut trick = STrick::new(epi_first);
        for &card in slccard {
            trick.push(card);
        }
        trick
    }

    fn assert_allowed(trick: &STrick, slccard_hand: &[ECard], esuit_trump: ESuit, slccard_expected: &[ECard]) {
        let hand = SHandTestBuilder::build(slccard_hand);
        let mut veccard_allowed = all_allowed_cards(trick, &hand, esuit_trump);
        veccard_allowed.sort_unstable_by_key(|card| card.order_value());
        let mut veccard_expected = slccard_expected.to_vec();
        veccard_expected.sort_unstable_by_key(|card| card.order_value());
        assert_eq!(veccard_allowed.as_slice(), veccard_expected.as_slice());
        // soundness: everything allowed is in hand
        assert!(veccard_allowed.iter().all(|card| hand.contains(*card)));
    }

    // SHand requires exactly 9 cards; tests describe mid-deal hands of any
    // size, so build a hand and play the filler cards away.
    struct SHandTestBuilder;
    impl SHandTestBuilder {
        fn build(slccard: &[ECard]) -> SHand {
            assert!(slccard.len() <= N_CARDS_PER_HAND);
            let mut veccard: SHandVector = slccard.iter().copied().collect();
            let mut itcard_filler = ECard::values().filter(|card| !slccard.contains(card));
            let mut veccard_filler = Vec::new();
            while veccard.len() < N_CARDS_PER_HAND {
                let card = unwrap!(itcard_filler.next());
                veccard.push(card);
                veccard_filler.push(card);
            }
            let mut hand = SHand::new_from_vec(veccard);
            for card in veccard_filler {
                hand.play_card(card);
            }
            hand
        }
    }

    #[test]
    fn test_lead_allows_whole_hand() {
        let trick = STrick::new(EPlayerIndex::EPI0);
        let hand = SHandTestBuilder::build(&[D6, S7, HK, CA]);
        let veccard_allowed = all_allowed_cards(&trick, &hand, ESuit::Hearts);
        assert_eq!(veccard_allowed.len(), hand.cards().len());
        assert!(hand.cards().iter().all(|card| veccard_allowed.contains(card)));
    }

    #[test]
    fn test_must_follow_suit() {
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6]);
        // no trump played yet: follow spades or cut with hearts
        assert_allowed(&trick, &[SA, S8, H7, D6, CK], ESuit::Hearts, &[SA, S8, H7]);
        // cannot follow, no trump involved anywhere: free discard
        assert_allowed(&trick, &[D6, D9, CK], ESuit::Hearts, &[D6, D9, CK]);
    }

    #[test]
    fn test_must_overtrump() {
        // spades led, H9 already cut; hand can follow suit
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, H9]);
        // serving spades stays legal, over-trumping with HJ stays legal,
        // under-trumping with H6 does not
        assert_allowed(&trick, &[S8, HJ, H6, D7], ESuit::Hearts, &[S8, HJ]);
    }

    #[test]
    fn test_cannot_serve_must_overtrump_or_discard() {
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, H9]);
        // no spades: any non-trump discard, plus trumps beating H9
        assert_allowed(&trick, &[HJ, H6, D7, CK], ESuit::Hearts, &[HJ, D7, CK]);
    }

    #[test]
    fn test_only_weak_trumps_relaxation() {
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, HJ]);
        // hand is all trump, none beats the jack: everything is allowed
        assert_allowed(&trick, &[H6, H7, HK], ESuit::Hearts, &[H6, H7, HK]);
    }

    #[test]
    fn test_trump_led_must_serve_trump() {
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[H6]);
        assert_allowed(&trick, &[HK, H8, S7, DA], ESuit::Hearts, &[HK, H8]);
        // no trump at all: whole hand
        assert_allowed(&trick, &[S7, SA, DA, CK], ESuit::Hearts, &[S7, SA, DA, CK]);
    }

    #[test]
    fn test_trump_jack_exemption() {
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[H6]);
        // the trump jack as only trump does not have to be revealed
        assert_allowed(&trick, &[HJ, S7, DA], ESuit::Hearts, &[HJ, S7, DA]);
        // a second trump next to the jack revives the obligation
        assert_allowed(&trick, &[HJ, H7, S7, DA], ESuit::Hearts, &[HJ, H7]);
    }

    #[test]
    fn test_beats_trump_ranking() {
        let esuit_trump = ESuit::Hearts;
        let esuit_served = ESuit::Hearts;
        // ace over king in trump, but jack and nine over everything else
        assert!(beats(HA, HK, esuit_served, esuit_trump));
        assert!(!beats(HK, HA, esuit_served, esuit_trump));
        for card in [HA, HK, HQ, HT, H9, H8, H7, H6] {
            assert!(beats(HJ, card, esuit_served, esuit_trump));
        }
        for card in [HA, HK, HQ, HT, H8, H7, H6] {
            assert!(beats(H9, card, esuit_served, esuit_trump));
        }
        assert!(!beats(H9, HJ, esuit_served, esuit_trump));
        // any trump beats any plain card
        assert!(beats(H6, SA, /*esuit_served*/ESuit::Spades, esuit_trump));
    }

    #[test]
    fn test_winner_index() {
        let esuit_trump = ESuit::Hearts;
        {
            let trick = trick_from_cards(EPlayerIndex::EPI1, &[S6, SA, S7, SK]);
            assert_eq!(winner_index(SFullTrick::new(&trick), esuit_trump), EPlayerIndex::EPI2);
        }
        {
            // lowly trump takes a plain trick
            let trick = trick_from_cards(EPlayerIndex::EPI1, &[S6, SA, H6, SK]);
            assert_eq!(winner_index(SFullTrick::new(&trick), esuit_trump), EPlayerIndex::EPI3);
        }
        {
            // trump nine overtakes trump ace, jack overtakes nine
            let trick = trick_from_cards(EPlayerIndex::EPI0, &[HA, H9, HJ, HK]);
            assert_eq!(winner_index(SFullTrick::new(&trick), esuit_trump), EPlayerIndex::EPI2);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let esuit_trump = ESuit::Hearts;
        // trick led with 6♠, player 2 holds A♠ and 7♡ (only trump): may
        // serve or cut
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, S9]);
        assert_allowed(&trick, &[SA, H7], esuit_trump, &[SA, H7]);
        // player 2 cuts with 7♡; player 3 without spades and only the 9♡
        // left must over-trump
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, S9, H7]);
        assert_allowed(&trick, &[H9, D6], esuit_trump, &[H9, D6]);
        let trick = trick_from_cards(EPlayerIndex::EPI0, &[S6, S9, H7, H9]);
        // 9♡ wins the trick regardless of the ace's point value
        assert_eq!(winner_index(SFullTrick::new(&trick), esuit_trump), EPlayerIndex::EPI3);
    }
}
