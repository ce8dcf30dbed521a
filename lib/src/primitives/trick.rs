use crate::primitives::{card::*, eplayerindex::*, hand::*};
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;

pub type STrick = SPlayersInRound<ECard>;

/// Witness that a trick holds all four cards. Winner and points are only
/// defined on a full trick.
#[derive(Copy, Clone, Debug)]
pub struct SFullTrick<'trick>(&'trick STrick);

impl<'trick> SFullTrick<'trick> {
    pub fn new(trick: &'trick STrick) -> Self {
        assert!(trick.is_full());
        Self(trick)
    }
    pub fn get(&self) -> &STrick {
        self.0
    }
}

impl fmt::Display for STrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values() {
            if epi == self.epi_first {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(card) => {write!(f, "{}", card)?;}
            }
        }
        write!(f, "")
    }
}

/// The tricks of one deal: all completed tricks followed by the open one.
/// The winner of a completed trick leads the next, so the open trick's
/// `epi_first` always records the previous winner.
#[derive(Debug, Clone)]
pub struct STrickSequence {
    vectrick: ArrayVec<STrick, {N_CARDS_PER_HAND + 1}>,
}

impl fmt::Display for STrickSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trick in self.completed_tricks() {
            write!(f, "{} | ", trick)?;
        }
        write!(f, "{}", self.current_trick())?;
        Ok(())
    }
}

impl STrickSequence {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        assert!(!self.vectrick.is_empty());
        assert!(!self.current_trick_no_invariant().is_full());
        assert!(self.vectrick[0..self.vectrick.len()-1].iter().all(STrick::is_full));
        assert!(self.completed_tricks_no_invariant().len() <= N_CARDS_PER_HAND);
        if self.completed_tricks_no_invariant().len() == N_CARDS_PER_HAND {
            assert!(self.current_trick_no_invariant().is_empty());
        }
    }

    pub fn new(epi_first: EPlayerIndex) -> Self {
        let trickseq = STrickSequence {
            vectrick: {
                let mut vectrick = ArrayVec::new();
                vectrick.push(STrick::new(epi_first));
                vectrick
            },
        };
        #[cfg(debug_assertions)]trickseq.assert_invariant();
        trickseq
    }

    pub fn round_finished(&self) -> bool {
        #[cfg(debug_assertions)]self.assert_invariant();
        assert!(self.completed_tricks().len() <= N_CARDS_PER_HAND);
        self.completed_tricks().len() == N_CARDS_PER_HAND
    }

    fn completed_tricks_no_invariant(&self) -> &[STrick] {
        &self.vectrick[0..self.vectrick.len()-1]
    }

    pub fn completed_tricks(&self) -> &[STrick] {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.completed_tricks_no_invariant()
    }

    fn current_trick_no_invariant(&self) -> &STrick {
        unwrap!(self.vectrick.last())
    }

    pub fn current_trick(&self) -> &STrick {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.current_trick_no_invariant()
    }

    pub fn play_card(&mut self, card: ECard, fn_winner_index: impl FnOnce(SFullTrick)->EPlayerIndex) {
        #[cfg(debug_assertions)]self.assert_invariant();
        assert!(!self.round_finished());
        unwrap!(self.vectrick.last_mut()).push(card);
        if self.current_trick_no_invariant().is_full() {
            let epi_winner = fn_winner_index(SFullTrick::new(self.current_trick_no_invariant()));
            self.vectrick.push(STrick::new(epi_winner));
        }
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn completed_tricks_winner_index(&self, if_dbg_else!({fn_winner_index}{_fn_winner_index}): impl Fn(SFullTrick)->EPlayerIndex) -> impl Iterator<Item=(SFullTrick, EPlayerIndex)> {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.vectrick[0..self.vectrick.len()]
            .iter()
            .tuple_windows()
            .map(move |(trick_0, trick_1)| {
                let fulltrick = SFullTrick::new(trick_0);
                (fulltrick, debug_verify_eq!(trick_1.first_playerindex(), fn_winner_index(fulltrick)))
            })
    }

    pub fn count_played_cards(&self) -> usize {
        #[cfg(debug_assertions)]self.assert_invariant();
        self.completed_tricks().len() * EPlayerIndex::SIZE
            + self.current_trick().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trick() {
        use ECard::*;
        let acard = [D7, D8, D9, DK];
        for epi_first in EPlayerIndex::values() {
            for n_size in 0..EPlayerIndex::SIZE + 1 {
                let mut trick = STrick::new(epi_first);
                for &card in acard.iter().take(n_size) {
                    trick.push(card);
                }
                assert_eq!(trick.size(), n_size);
                assert_eq!(trick.first_playerindex(), epi_first);
                assert_eq!(trick.size(), trick.iter().count());
                for (epi, card) in trick.iter() {
                    assert_eq!(trick.get(epi), Some(card));
                    assert_eq!(trick[epi], *card);
                }
            }
        }
        {
            let mut trick = STrick::new(EPlayerIndex::EPI2);
            trick.push(ECard::new(ESuit::Diamonds, ERank::Jack));
            trick.push(ECard::new(ESuit::Spades, ERank::Seven));
            assert_eq!(trick[EPlayerIndex::EPI2], ECard::DJ);
            assert_eq!(trick[EPlayerIndex::EPI3], ECard::S7);
            assert_eq!(trick.iter().count(), 2);
            assert_eq!(trick.first(), &ECard::DJ);
        }
    }

    #[test]
    fn test_trick_sequence() {
        use ECard::*;
        let mut trickseq = STrickSequence::new(EPlayerIndex::EPI1);
        assert_eq!(trickseq.current_trick().first_playerindex(), EPlayerIndex::EPI1);
        for card in [S7, S8, S9, ST] {
            trickseq.play_card(card, |_fulltrick| EPlayerIndex::EPI3);
        }
        assert_eq!(trickseq.completed_tricks().len(), 1);
        assert_eq!(trickseq.current_trick().first_playerindex(), EPlayerIndex::EPI3);
        assert_eq!(trickseq.count_played_cards(), 4);
        assert!(!trickseq.round_finished());
        let (fulltrick, epi_winner) = unwrap!(
            trickseq.completed_tricks_winner_index(|_fulltrick| EPlayerIndex::EPI3).next()
        );
        assert_eq!(epi_winner, EPlayerIndex::EPI3);
        assert_eq!(fulltrick.get().first(), &S7);
    }
}
