use crate::primitives::*;

pub fn points_card(card: ECard, esuit_trump: ESuit) -> isize {
    let b_trump = card.suit() == esuit_trump;
    match card.rank() {
        ERank::Six | ERank::Seven | ERank::Eight => 0,
        ERank::Nine => if b_trump {14} else {0},
        ERank::Ten => 10,
        ERank::Jack => if b_trump {20} else {2},
        ERank::Queen => 3,
        ERank::King => 4,
        ERank::Ace => 11,
    }
}

pub fn points_trick(fulltrick: SFullTrick, esuit_trump: ESuit) -> isize {
    fulltrick.get().iter()
        .map(|(_epi, card)| points_card(*card, esuit_trump))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn test_point_conservation() {
        // the deck is worth 152 points no matter which suit is trump
        for esuit_trump in ESuit::values() {
            assert_eq!(
                ECard::values().map(|card| points_card(card, esuit_trump)).sum::<isize>(),
                152
            );
            assert!(ECard::values().all(|card| 0 <= points_card(card, esuit_trump)));
        }
    }

    #[test]
    fn test_trump_overrides() {
        assert_eq!(points_card(ECard::HJ, ESuit::Hearts), 20);
        assert_eq!(points_card(ECard::HJ, ESuit::Spades), 2);
        assert_eq!(points_card(ECard::H9, ESuit::Hearts), 14);
        assert_eq!(points_card(ECard::H9, ESuit::Spades), 0);
        assert_eq!(points_card(ECard::HA, ESuit::Hearts), 11);
    }
}
