use crate::player::SPlayerGreedy;
use crate::util::*;
use openjass_lib::game::run::run_match;
use openjass_lib::player::{playerrandom::SPlayerRandom, TPlayer};
use openjass_lib::primitives::*;
use rand::prelude::*;
use rand::rngs::StdRng;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    clap::Command::new(str_subcommand)
        .about("Run unattended matches, greedy team 0 against random team 1")
        .arg(super::ruleset_arg())
        .arg(super::clap_arg("nummatches", "10")
            .help("Number of matches to play")
        )
        .arg(super::clap_arg("seed", "")
            .help("Seed for reproducible shuffles (random if empty)")
        )
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let n_matches = unwrap!(clapmatches.value_of("nummatches")).parse::<usize>().unwrap_or(10);
    let mut rng: StdRng = match unwrap!(clapmatches.value_of("seed")).parse::<u64>() {
        Ok(n_seed) => StdRng::seed_from_u64(n_seed),
        Err(_err) => StdRng::from_entropy(),
    };
    let aplayer = EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
        match epi.team() {
            ETeamIndex::Team0 => Box::new(SPlayerGreedy::new(format!("greedy {}", epi))),
            ETeamIndex::Team1 => Box::new(SPlayerRandom::new(
                format!("random {}", epi),
                /*fn_check_game*/|_game: &openjass_lib::game::SGame| {},
            )),
        }
    });
    let mut an_wins = ETeamIndex::map_from_fn(|_eteam| 0);
    let mut n_deals_total = 0;
    for i_match in 0..n_matches {
        let matchresult = run_match(&aplayer, ruleset.clone(), &mut rng)?;
        info!(
            "Match {}: team {:?} wins {} vs {} after {} deals",
            i_match,
            matchresult.eteam_winner,
            matchresult.an_score[matchresult.eteam_winner],
            matchresult.an_score[matchresult.eteam_winner.wrapping_add(1)],
            matchresult.n_deals,
        );
        an_wins[matchresult.eteam_winner] += 1;
        n_deals_total += matchresult.n_deals;
    }
    println!("Results after {} matches:", n_matches);
    for eteam in ETeamIndex::values() {
        println!(
            "  {:?} ({}): {} wins",
            eteam,
            match eteam {
                ETeamIndex::Team0 => "greedy",
                ETeamIndex::Team1 => "random",
            },
            an_wins[eteam],
        );
    }
    if 0 < n_matches {
        println!(
            "  {} deals per match on average",
            n_deals_total.as_num::<isize>() / n_matches.as_num::<isize>(),
        );
    }
    Ok(())
}
