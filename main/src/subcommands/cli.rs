use crate::player::*;
use crate::util::*;
use openjass_lib::game::run::run_match;
use openjass_lib::player::TPlayer;
use openjass_lib::primitives::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    clap::Command::new(str_subcommand)
        .about("Play a match in the command line, seat 0 is yours")
        .arg(super::ruleset_arg())
        .arg(super::clap_arg("name", "You"))
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let aplayer = EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
        if EPlayerIndex::EPI0 == epi {
            Box::new(SPlayerHuman::new(
                unwrap!(clapmatches.value_of("name")).to_string(),
            ))
        } else {
            Box::new(SPlayerGreedy::new(format!("Bot {}", epi)))
        }
    });
    let matchresult = run_match(&aplayer, ruleset, &mut rand::thread_rng())?;
    println!(
        "Team {:?} wins after {} deals ({} vs {})",
        matchresult.eteam_winner,
        matchresult.n_deals,
        matchresult.an_score[matchresult.eteam_winner],
        matchresult.an_score[matchresult.eteam_winner.wrapping_add(1)],
    );
    for epi in EPlayerIndex::values() {
        println!("{}: seat {}, team {:?}", aplayer[epi].name(), epi, epi.team());
    }
    Ok(())
}
