use crate::util::*;
use arrayvec::ArrayVec;
use std::{
    fmt,
    ops::Index,
    slice,
};

plain_enum_mod!(modepi, EPlayerIndex {
    EPI0, EPI1, EPI2, EPI3,
});

plain_enum_mod!(modeteam, ETeamIndex {
    Team0, // seats 0 and 2
    Team1, // seats 1 and 3
});

impl EPlayerIndex {
    pub fn partner(self) -> EPlayerIndex {
        self.wrapping_add(2)
    }
    pub fn team(self) -> ETeamIndex {
        ETeamIndex::wrapped_from_usize(self.to_usize())
    }
}

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}

#[derive(Clone, Debug)]
pub struct SPlayersInRound<T> {
    pub epi_first: EPlayerIndex,
    vect: ArrayVec<T, 4>,
}

impl<T: PartialEq> PartialEq for SPlayersInRound<T> {
    fn eq(&self, playersinround_other: &SPlayersInRound<T>) -> bool {
        self.epi_first == playersinround_other.epi_first
        && self.vect == playersinround_other.vect
    }
}
impl<T: Eq> Eq for SPlayersInRound<T>{}

pub struct SPlayersInRoundIterator<InternalIter> {
    iter: InternalIter,
    n_epi: usize,
}

impl<InternalIter: Iterator> Iterator for SPlayersInRoundIterator<InternalIter> {
    type Item = (EPlayerIndex, InternalIter::Item);
    fn next(&mut self) -> Option<(EPlayerIndex, InternalIter::Item)> {
        let item_next = self.iter.next()
            .map(|t| (EPlayerIndex::wrapped_from_usize(self.n_epi), t));
        self.n_epi += 1;
        item_next
    }
}

impl<T> Index<EPlayerIndex> for SPlayersInRound<T> {
    type Output = T;
    fn index(&self, epi: EPlayerIndex) -> &T {
        assert!(self.valid_index(epi));
        &self.vect[self.position(epi)]
    }
}

impl<T> SPlayersInRound<T> {
    pub fn new(epi_first: EPlayerIndex) -> SPlayersInRound<T> {
        SPlayersInRound {
            epi_first,
            vect: ArrayVec::new(),
        }
    }
    pub fn first_playerindex(&self) -> EPlayerIndex {
        self.epi_first
    }
    pub fn current_playerindex(&self) -> Option<EPlayerIndex> {
        if_then_some!(
            !self.is_full(),
            self.first_playerindex().wrapping_add(self.size())
        )
    }
    pub fn size(&self) -> usize {
        self.vect.len()
    }
    pub fn is_full(&self) -> bool {
        self.size() == EPlayerIndex::SIZE
    }
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
    pub fn push(&mut self, t: T) {
        assert!(!self.is_full());
        self.vect.push(t);
    }
    pub fn first(&self) -> &T {
        assert!(!self.is_empty());
        &self[self.epi_first]
    }
    pub fn iter(&self) -> SPlayersInRoundIterator<slice::Iter<T>> {
        SPlayersInRoundIterator {
            iter: self.vect.iter(),
            n_epi: self.epi_first.to_usize(),
        }
    }
    pub fn position(&self, epi: EPlayerIndex) -> usize {
        epi.wrapped_difference_usize(self.epi_first)
    }
    fn valid_index(&self, epi: EPlayerIndex) -> bool {
        self.position(epi) < self.size()
    }
    pub fn get(&self, epi: EPlayerIndex) -> Option<&T> {
        if_then_some!(self.valid_index(epi), &self[epi])
    }
}

#[test]
fn test_partner_team() {
    assert_eq!(EPlayerIndex::EPI0.partner(), EPlayerIndex::EPI2);
    assert_eq!(EPlayerIndex::EPI1.partner(), EPlayerIndex::EPI3);
    assert_eq!(EPlayerIndex::EPI2.partner(), EPlayerIndex::EPI0);
    assert_eq!(EPlayerIndex::EPI3.partner(), EPlayerIndex::EPI1);
    for epi in EPlayerIndex::values() {
        assert_eq!(epi.team(), epi.partner().team());
        assert_ne!(epi.team(), epi.wrapping_add(1).team());
    }
}

#[test]
fn test_players_in_round() {
    for epi_first in EPlayerIndex::values() {
        for n_size in 0..EPlayerIndex::SIZE {
            let mut playersinround = SPlayersInRound::<usize>::new(epi_first);
            for i in 0..n_size {
                playersinround.push(i);
            }
            assert_eq!(playersinround.size(), n_size);
            assert_eq!(playersinround.first_playerindex(), epi_first);
            assert_eq!(playersinround.size(), playersinround.iter().count());
            assert_eq!(
                playersinround.current_playerindex(),
                if_then_some!(n_size < EPlayerIndex::SIZE, epi_first.wrapping_add(n_size))
            );
            for (epi, i) in playersinround.iter() {
                assert_eq!(playersinround.get(epi), Some(i));
                assert_eq!(playersinround[epi], *i);
            }
        }
    }
}
