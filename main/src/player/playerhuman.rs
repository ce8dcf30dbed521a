use crate::display;
use crate::util::*;
use openjass_lib::game::*;
use openjass_lib::player::*;
use openjass_lib::primitives::*;
use std::io::{BufRead, Write};
use std::sync::mpsc;

/// Console player: prints the table state, reads card/trump tokens from
/// stdin and re-prompts until the input parses and is legal.
#[derive(new)]
pub struct SPlayerHuman {
    str_name: String,
}

fn read_input_line(str_prompt: &str) -> String {
    print!("{}", str_prompt);
    unwrap!(std::io::stdout().flush());
    let mut str_input = String::new();
    unwrap!(std::io::stdin().lock().read_line(&mut str_input));
    str_input.trim().to_string()
}

impl TPlayer for SPlayerHuman {
    fn ask_for_trump(
        &self,
        _epi: EPlayerIndex,
        slccard_hand: &[ECard],
        b_may_pass: bool,
        txoesuit: mpsc::Sender<Option<ESuit>>,
    ) {
        println!("{}, your hand:", self.str_name);
        display::print_hand(slccard_hand, None);
        let str_choices = if b_may_pass {
            "Choose trump (d, s, h, c) or pass: "
        } else {
            "Choose trump (d, s, h, c): "
        };
        let oesuit = loop {
            let str_input = read_input_line(str_choices);
            if b_may_pass && str_input.eq_ignore_ascii_case("pass") {
                break None;
            }
            match str_input.parse::<ESuit>() {
                Ok(esuit) => break Some(esuit),
                Err(_err) => println!("Invalid input."),
            }
        };
        unwrap!(txoesuit.send(oesuit));
    }

    fn ask_for_card(&self, game: &SGame, txcard: mpsc::Sender<ECard>) {
        let epi = unwrap!(game.which_player_can_do_something());
        display::print_game_info(game);
        display::print_trick("table", game.current_trick());
        println!("{}, your hand (trump marked *):", self.str_name);
        display::print_hand(game.ahand[epi].cards(), Some(game.esuit_trump));
        let veccard_allowed = game.all_allowed_cards();
        let card = loop {
            let str_input = read_input_line("Card to play (e.g. 7d, 10s, ah): ");
            match str_input.parse::<ECard>() {
                Ok(card) if veccard_allowed.contains(&card) => break card,
                Ok(card) => println!("{} is not allowed here.", card),
                Err(_err) => println!("Invalid input."),
            }
        };
        unwrap!(txcard.send(card));
    }

    fn on_trick_end(&self, n_points_signed: isize, b_last_trick: bool) {
        println!(
            "Trick worth {} points for your team{}",
            n_points_signed,
            if b_last_trick {" (last trick of the deal)"} else {""},
        );
    }

    fn name(&self) -> &str {
        &self.str_name
    }
}
