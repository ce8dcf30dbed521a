use crate::primitives::card::*;
use crate::util::*;
use arrayvec::ArrayVec;
use std::fmt;
use itertools::Itertools;

pub const N_CARDS_PER_HAND: usize = 9;

pub type SHandVector = ArrayVec<ECard, N_CARDS_PER_HAND>;

/// The unplayed cards of one seat. Set-like: order carries no meaning, cards
/// are unique, and the hand only ever shrinks after creation.
#[derive(Clone, Debug)]
pub struct SHand {
    veccard: SHandVector,
}

impl SHand {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        let mut mapcardb = ECard::map_from_fn(|_card| false);
        for card in self.veccard.iter() {
            assert!(!mapcardb[*card], "duplicate card in hand: {}", card);
            mapcardb[*card] = true;
        }
    }

    pub fn new_from_vec(veccard: SHandVector) -> SHand {
        assert_eq!(veccard.len(), N_CARDS_PER_HAND);
        let hand = SHand {veccard};
        #[cfg(debug_assertions)]hand.assert_invariant();
        hand
    }
    pub fn new_from_iter(itcard: impl IntoIterator<Item=ECard>) -> SHand {
        Self::new_from_vec(itcard.into_iter().collect())
    }
    pub fn contains(&self, card_check: ECard) -> bool {
        self.contains_pred(|&card| card == card_check)
    }
    pub fn contains_pred(&self, pred: impl Fn(&ECard) -> bool) -> bool {
        self.veccard.iter().any(pred)
    }
    pub fn play_card(&mut self, card: ECard) {
        debug_assert!(self.contains(card));
        for i_card in 0..self.veccard.len() {
            if self.veccard[i_card] == card {
                self.veccard.swap_remove(i_card);
                break;
            }
        }
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn cards(&self) -> &SHandVector {
        &self.veccard
    }
}

impl fmt::Display for SHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.veccard.iter()
            .sorted_by_key(|card| card.order_value())
            .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand() {
        use ECard::*;
        let hand = SHand::new_from_iter([DJ, D9, S7, SK, H6, HT, HA, C8, CQ]);
        assert_eq!(hand.cards().len(), N_CARDS_PER_HAND);
        let hand2 = {
            let mut hand2 = hand.clone();
            hand2.play_card(ECard::new(ESuit::Hearts, ERank::Ten));
            hand2
        };
        assert_eq!(hand.cards().len() - 1, hand2.cards().len());
        assert!(!hand2.contains(HT));
        assert!(hand2.contains(DJ));
        assert!(hand2.contains(CQ));
    }

    #[test]
    #[should_panic]
    fn test_hand_rejects_wrong_size() {
        use ECard::*;
        let _hand = SHand::new_from_iter([DJ, D9, S7]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_hand_rejects_duplicates() {
        use ECard::*;
        let _hand = SHand::new_from_iter([DJ, DJ, S7, SK, H6, HT, HA, C8, CQ]);
    }
}
