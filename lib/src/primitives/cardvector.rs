use crate::primitives::card::*;
use combine::{char::*, *};

pub fn suit_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ESuit>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        choice!(char('d'), char('D'), char('\u{2662}'), char('\u{2666}')).map(|_chr| ESuit::Diamonds),
        choice!(char('s'), char('S'), char('\u{2660}')).map(|_chr| ESuit::Spades),
        choice!(char('h'), char('H'), char('\u{2661}'), char('\u{2665}')).map(|_chr| ESuit::Hearts),
        choice!(char('c'), char('C'), char('\u{2663}')).map(|_chr| ESuit::Clubs)
    )
}

pub fn rank_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ERank>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        attempt((char('1'), char('0'))).map(|_chr| ERank::Ten),
        char('6').map(|_chr| ERank::Six),
        char('7').map(|_chr| ERank::Seven),
        char('8').map(|_chr| ERank::Eight),
        char('9').map(|_chr| ERank::Nine),
        choice!(char('t'), char('T')).map(|_chr| ERank::Ten),
        choice!(char('j'), char('J')).map(|_chr| ERank::Jack),
        choice!(char('q'), char('Q')).map(|_chr| ERank::Queen),
        choice!(char('k'), char('K')).map(|_chr| ERank::King),
        choice!(char('a'), char('A')).map(|_chr| ERank::Ace)
    )
}

// rank first, suit second: "7d", "10s", "A\u{2661}"
pub fn card_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ECard>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    (rank_parser(), suit_parser()).map(|(erank, esuit)| ECard::new(esuit, erank))
}

pub fn parse_cards<C: std::iter::Extend<ECard>+Default>(str_cards: &str) -> Option<C> {
    spaces()
        .with(sep_by::<C,_,_>(card_parser(), spaces()))
        .skip(spaces())
        .skip(eof())
        // end of parser
        .parse(str_cards)
        .ok()
        .map(|pairoutconsumed| pairoutconsumed.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn test_cardvectorparser() {
        use ECard::*;
        assert_eq!(
            unwrap!(parse_cards::<Vec<_>>("ac 10d Jh 6s 9C")),
            vec![CA, DT, HJ, S6, C9]
        );
        assert_eq!(unwrap!(parse_cards::<Vec<_>>("")), Vec::<ECard>::new());
        assert!(parse_cards::<Vec<_>>("5d").is_none());
        assert!(parse_cards::<Vec<_>>("ax").is_none());
        assert!(parse_cards::<Vec<_>>("da").is_none()); // suit-first is not a card token
    }

    #[test]
    fn test_from_str_roundtrip() {
        for card in ECard::values() {
            assert_eq!(unwrap!(card.to_string().parse::<ECard>()), card);
        }
        assert!("".parse::<ECard>().is_err());
        assert!("11h".parse::<ECard>().is_err());
    }
}
