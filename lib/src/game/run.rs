use super::*;
use crate::player::*;
use std::sync::mpsc;

fn communicate_via_channel<T: std::fmt::Debug>(f: impl FnOnce(mpsc::Sender<T>)) -> T {
    let (txt, rxt) = mpsc::channel::<T>();
    f(txt);
    unwrap!(rxt.recv())
}

#[derive(Debug)]
pub struct SMatchResult {
    pub an_score: EnumMap<ETeamIndex, isize>,
    pub eteam_winner: ETeamIndex,
    pub n_deals: usize,
}

/// Plays deals until one team reaches the rule set's goal. Any IllegalMove
/// surfacing here means an agent broke the legal-move contract; it aborts
/// the match.
pub fn run_match(
    aplayer: &EnumMap<EPlayerIndex, Box<dyn TPlayer>>,
    ruleset: SRuleSet,
    rng: &mut impl Rng,
) -> Result<SMatchResult, Error> {
    let mut an_score = ETeamIndex::map_from_fn(|_eteam| 0);
    let mut oepi_chooser = None;
    let mut n_deals = 0;
    loop {
        let dealcards = SDealCards::new(ruleset.clone(), oepi_chooser, rng);
        let mut choosetrump = unwrap!(dealcards.finish());
        let epi_chooser = choosetrump.epi_chooser;
        while let Some((epi, b_may_pass)) = choosetrump.which_player_can_do_something() {
            let oesuit = communicate_via_channel(|txoesuit| {
                aplayer[epi].ask_for_trump(epi, choosetrump.hand(epi), b_may_pass, txoesuit);
            });
            choosetrump.choose_trump(epi, oesuit)?;
        }
        let mut game = unwrap!(choosetrump.finish());
        while let Some(epi) = game.which_player_can_do_something() {
            game.zugeben(
                communicate_via_channel(|txcard| {
                    aplayer[epi].ask_for_card(&game, txcard);
                }),
                epi,
            )?;
            if game.current_trick().is_empty() {
                // a trick was just completed; its winner leads the next one
                let b_last_trick = game.trickseq.round_finished();
                let fulltrick = SFullTrick::new(unwrap!(game.completed_tricks().last()));
                let epi_winner = game.current_trick().first_playerindex();
                let n_points_trick = points_trick(fulltrick, game.esuit_trump)
                    + if b_last_trick { N_POINTS_LAST_TRICK } else { 0 };
                info!("Player {} wins trick {} ({} points)", epi_winner, game.completed_tricks().len(), n_points_trick);
                for epi_notify in EPlayerIndex::values() {
                    aplayer[epi_notify].on_trick_end(
                        /*n_points_signed*/if epi_notify.team() == epi_winner.team() {
                            n_points_trick
                        } else {
                            -n_points_trick
                        },
                        b_last_trick,
                    );
                }
            }
        }
        let gameresult = unwrap!(game.finish());
        if let Some(eteam) = gameresult.oeteam_match {
            info!("Team {:?} took every trick of the deal", eteam);
        }
        for eteam in ETeamIndex::values() {
            assert!(0 <= gameresult.an_points[eteam]);
            an_score[eteam] += gameresult.an_points[eteam];
        }
        n_deals += 1;
        info!(
            "Score after deal {}: {} vs {}",
            n_deals, an_score[ETeamIndex::Team0], an_score[ETeamIndex::Team1],
        );
        if ETeamIndex::values().any(|eteam| ruleset.n_points_goal <= an_score[eteam]) {
            // on the rare double reach, the higher score takes the match
            let eteam_winner = unwrap!(
                ETeamIndex::values().max_by_key(|eteam| (an_score[*eteam], std::cmp::Reverse(eteam.to_usize())))
            );
            return Ok(SMatchResult {
                an_score,
                eteam_winner,
                n_deals,
            });
        }
        oepi_chooser = Some(epi_chooser.wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::playerrandom::SPlayerRandom;
    use rand::rngs::StdRng;

    #[test]
    fn test_match_loop() {
        // random agents, invariants checked at every decision point
        for n_seed in 0..3 {
            let ruleset = SRuleSet::new(/*n_points_goal*/500, /*b_chibre_allowed*/true);
            let aplayer = EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
                Box::new(SPlayerRandom::new(
                    format!("player {}", epi),
                    /*fn_check_game*/|game: &SGame| {
                        let epi = unwrap!(game.which_player_can_do_something());
                        let veccard_allowed = game.all_allowed_cards();
                        assert!(!veccard_allowed.is_empty());
                        // legal moves are a subset of the hand
                        assert!(veccard_allowed.iter().all(|card| game.ahand[epi].contains(*card)));
                        if game.current_trick().is_empty() {
                            assert_eq!(veccard_allowed.len(), game.ahand[epi].cards().len());
                        }
                    },
                ))
            });
            let matchresult = unwrap!(run_match(
                &aplayer,
                ruleset.clone(),
                &mut StdRng::seed_from_u64(n_seed),
            ));
            assert!(ruleset.n_points_goal <= matchresult.an_score[matchresult.eteam_winner]);
            assert!(0 < matchresult.n_deals);
            let eteam_loser = matchresult.eteam_winner.wrapping_add(1);
            assert!(matchresult.an_score[eteam_loser] <= matchresult.an_score[matchresult.eteam_winner]);
        }
    }
}
