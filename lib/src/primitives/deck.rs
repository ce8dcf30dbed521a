use crate::primitives::{card::*, eplayerindex::*, hand::*};
use crate::util::*;
use arrayvec::ArrayVec;
use rand::prelude::*;

/// All 36 cards in suit-major order until shuffled. The fixed construction
/// order only matters for reproducibility under a seeded random source.
#[derive(Debug, Clone)]
pub struct SDeck {
    veccard: ArrayVec<ECard, 36>,
}

impl SDeck {
    pub fn new() -> SDeck {
        SDeck {
            veccard: ECard::values().collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.veccard.shuffle(rng);
    }

    pub fn deal(self) -> EnumMap<EPlayerIndex, SHandVector> {
        assert_eq!(self.veccard.len(), EPlayerIndex::SIZE * N_CARDS_PER_HAND);
        EPlayerIndex::map_from_fn(|epi| {
            self.veccard[epi.to_usize() * N_CARDS_PER_HAND..(epi.to_usize() + 1) * N_CARDS_PER_HAND]
                .iter()
                .copied()
                .collect()
        })
    }

    pub fn cards(&self) -> &[ECard] {
        &self.veccard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_deck_order() {
        let deck = SDeck::new();
        assert_eq!(deck.cards().len(), 36);
        assert_eq!(deck.cards()[0], ECard::D6);
        assert_eq!(deck.cards()[8], ECard::DA);
        assert_eq!(deck.cards()[9], ECard::S6);
        assert_eq!(deck.cards()[35], ECard::CA);
    }

    #[test]
    fn test_deal_partitions_deck() {
        for n_seed in 0..10 {
            let mut deck = SDeck::new();
            deck.shuffle(&mut StdRng::seed_from_u64(n_seed));
            let aveccard = deck.deal();
            let mut mapcardb = ECard::map_from_fn(|_card| false);
            let mut n_cards = 0;
            for epi in EPlayerIndex::values() {
                assert_eq!(aveccard[epi].len(), N_CARDS_PER_HAND);
                for &card in aveccard[epi].iter() {
                    assert!(!mapcardb[card]); // hands are disjoint
                    mapcardb[card] = true;
                    n_cards += 1;
                }
            }
            assert_eq!(n_cards, 36); // union is the whole deck
        }
    }
}
