use crate::util::*;
use serde::Serializer;
use std::{fmt, str::FromStr};

plain_enum_mod!(modesuit, ESuit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
});

impl fmt::Display for ESuit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Diamonds => "\u{2662}",
            Self::Spades => "\u{2660}",
            Self::Hearts => "\u{2661}",
            Self::Clubs => "\u{2663}",
        })
    }
}

impl FromStr for ESuit {
    type Err = VJassError;
    fn from_str(str_suit: &str) -> Result<Self, Self::Err> {
        parse_trimmed(str_suit, crate::primitives::cardvector::suit_parser())
            .map_err(|_err| VJassError::InvalidCard(str_suit.to_string()))
    }
}

plain_enum_mod!(moderank, ERank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
});

impl ERank {
    /// Position in the suit's natural order, six lowest.
    pub fn plain_order(self) -> usize {
        self.to_usize()
    }

    /// Position in the trump order, a permutation of the plain order:
    /// jack and nine outrank everything else in the trump suit.
    pub fn trump_order(self) -> usize {
        let an_trump_order: [usize; ERank::SIZE] = [0, 1, 2, 7, 3, 8, 4, 5, 6];
        an_trump_order[self.to_usize()]
    }
}

impl fmt::Display for ERank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        })
    }
}

plain_enum_mod!(modecard, ECard {
    D6, D7, D8, D9, DT, DJ, DQ, DK, DA,
    S6, S7, S8, S9, ST, SJ, SQ, SK, SA,
    H6, H7, H8, H9, HT, HJ, HQ, HK, HA,
    C6, C7, C8, C9, CT, CJ, CQ, CK, CA,
});

impl ECard {
    pub fn new(esuit: ESuit, erank: ERank) -> ECard {
        ECard::wrapped_from_usize(esuit.to_usize() * ERank::SIZE + erank.to_usize())
    }
    pub fn suit(self) -> ESuit {
        ESuit::wrapped_from_usize(self.to_usize() / ERank::SIZE)
    }
    pub fn rank(self) -> ERank {
        ERank::wrapped_from_usize(self.to_usize() % ERank::SIZE)
    }
    /// Global display/sort order, unrelated to trick strength. The suit
    /// stride is 10 rather than ERank::SIZE so that the ace of one suit and
    /// the six of the next never form a run when scanning for sequences.
    pub fn order_value(self) -> usize {
        self.rank().plain_order() + self.suit().to_usize() * 10
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl FromStr for ECard {
    type Err = VJassError;
    fn from_str(str_card: &str) -> Result<Self, Self::Err> {
        parse_trimmed(str_card, crate::primitives::cardvector::card_parser())
            .map_err(|_err| VJassError::InvalidCard(str_card.to_string()))
    }
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer)?
            .parse::<ECard>()
            .map_err(serde::de::Error::custom)
    }
}

#[test]
fn test_suit_rank_enumerators() {
    assert_eq!(ESuit::values().count(), 4);
    assert_eq!(ERank::values().count(), 9);
    assert_eq!(ECard::values().count(), 36);
}

#[test]
fn test_card_ctor() {
    for esuit in ESuit::values() {
        for erank in ERank::values() {
            let card = ECard::new(esuit, erank);
            assert_eq!(card.suit(), esuit);
            assert_eq!(card.rank(), erank);
        }
    }
    assert_eq!(ECard::new(ESuit::Diamonds, ERank::Six), ECard::D6);
    assert_eq!(ECard::new(ESuit::Spades, ERank::Ace), ECard::SA);
    assert_eq!(ECard::new(ESuit::Hearts, ERank::Ten), ECard::HT);
    assert_eq!(ECard::new(ESuit::Clubs, ERank::Jack), ECard::CJ);
}

#[test]
fn test_trump_order_permutation() {
    use itertools::Itertools;
    // each rank occupies exactly one slot in either order
    assert_eq!(ERank::values().map(ERank::plain_order).sorted().collect::<Vec<_>>(), (0..ERank::SIZE).collect::<Vec<_>>());
    assert_eq!(ERank::values().map(ERank::trump_order).sorted().collect::<Vec<_>>(), (0..ERank::SIZE).collect::<Vec<_>>());
    assert!(ERank::Jack.trump_order() > ERank::Nine.trump_order());
    assert!(ERank::Nine.trump_order() > ERank::Ace.trump_order());
    assert!(ERank::Ace.trump_order() > ERank::King.trump_order());
}

#[test]
fn test_card_display() {
    assert_eq!(ECard::S6.to_string(), "6\u{2660}");
    assert_eq!(ECard::CA.to_string(), "A\u{2663}");
    assert_eq!(ECard::DT.to_string(), "10\u{2662}");
    assert_eq!(ECard::HJ.to_string(), "J\u{2661}");
}

#[test]
fn test_serialization() {
    for card in ECard::values() {
        let str_card = card.to_string();
        serde_test::assert_tokens(&card, &[
            serde_test::Token::Str(Box::leak(str_card.into_boxed_str())),
        ]);
    }
}
