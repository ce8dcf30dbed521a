use crate::util::*;
use itertools::Itertools;
use openjass_lib::primitives::*;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn suit_color(esuit: ESuit) -> Option<Color> {
    match esuit {
        ESuit::Diamonds | ESuit::Hearts => Some(Color::Red),
        ESuit::Spades | ESuit::Clubs => None,
    }
}

fn write_card(stdout: &mut StandardStream, card: ECard) -> std::io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(suit_color(card.suit())))?;
    write!(stdout, "{}", card)?;
    stdout.reset()
}

/// Prints a hand in display order, trump cards marked with a trailing `*`.
pub fn print_hand(slccard: &[ECard], oesuit_trump: Option<ESuit>) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let veccard_sorted = slccard.iter().copied()
        .sorted_by_key(|card| card.order_value())
        .collect::<Vec<_>>();
    for card in veccard_sorted {
        let _ = write_card(&mut stdout, card);
        if Some(card.suit()) == oesuit_trump {
            print!("*");
        }
        print!(" ");
    }
    println!();
}

pub fn print_trick(str_caption: &str, trick: &STrick) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    print!("{}: ", str_caption);
    for (epi, card) in trick.iter() {
        print!("{}:", epi);
        let _ = write_card(&mut stdout, *card);
        print!(" ");
    }
    println!();
}

pub fn print_game_info(game: &openjass_lib::game::SGame) {
    println!(
        "Trump {} (chosen at seat {}), trick {} of {}",
        game.esuit_trump,
        game.epi_chooser,
        game.completed_tricks().len() + 1,
        N_CARDS_PER_HAND,
    );
    for trick in game.completed_tricks() {
        print_trick("done", trick);
    }
}
