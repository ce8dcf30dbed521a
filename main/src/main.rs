#![deny(bare_trait_objects)]

mod util;
mod display;
mod player;
mod subcommands;

use failure::Error;

fn main() -> Result<(), Error> {
    openjass_util::init_logging()?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("openjass")
            .subcommand_required(true)
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (cli, "cli")
        (simulate, "simulate")
    );
    Ok(())
}
