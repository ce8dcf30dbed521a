use crate::primitives::*;
use crate::rules::{ruleset::*, *};
use crate::util::*;
use rand::prelude::*;

pub mod run;

/// A deal advances through phases; each phase names the seat that may act
/// and folds into the next phase once nobody can.
pub trait TGamePhase: Sized {
    type ActivePlayerInfo;
    type Finish;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo>;
    fn finish_success(self) -> Self::Finish;

    fn finish(self) -> Result<Self::Finish, Self> {
        if self.which_player_can_do_something().is_some() {
            Err(self)
        } else {
            Ok(self.finish_success())
        }
    }
}

#[derive(Debug)]
pub struct SDealCards {
    aveccard: EnumMap<EPlayerIndex, SHandVector>,
    oepi_chooser: Option<EPlayerIndex>, // None on the very first deal
    ruleset: SRuleSet,
}

impl SDealCards {
    pub fn new(ruleset: SRuleSet, oepi_chooser: Option<EPlayerIndex>, rng: &mut impl Rng) -> SDealCards {
        let mut deck = SDeck::new();
        deck.shuffle(rng);
        SDealCards {
            aveccard: deck.deal(),
            oepi_chooser,
            ruleset,
        }
    }
}

impl TGamePhase for SDealCards {
    type ActivePlayerInfo = std::convert::Infallible;
    type Finish = SChooseTrump;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        None // dealing involves no decision
    }

    fn finish_success(self) -> Self::Finish {
        let epi_chooser = self.oepi_chooser.unwrap_or_else(|| {
            // first deal: whoever holds the 7 of diamonds opens the match
            unwrap!(EPlayerIndex::values().find(|epi| {
                self.aveccard[*epi].contains(&ECard::D7)
            }))
        });
        SChooseTrump {
            aveccard: self.aveccard,
            epi_chooser,
            ruleset: self.ruleset,
            b_passed: false,
            oesuit_trump: None,
        }
    }
}

#[derive(Debug)]
pub struct SChooseTrump {
    pub aveccard: EnumMap<EPlayerIndex, SHandVector>,
    pub epi_chooser: EPlayerIndex, // the deal's designated chooser; leads the first trick
    pub ruleset: SRuleSet,
    b_passed: bool,
    oesuit_trump: Option<ESuit>,
}

impl TGamePhase for SChooseTrump {
    type ActivePlayerInfo = (EPlayerIndex, /*b_may_pass*/bool);
    type Finish = SGame;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        if_then_some!(self.oesuit_trump.is_none(), {
            if self.b_passed {
                (self.epi_chooser.partner(), false) // partner must decide
            } else {
                (self.epi_chooser, self.ruleset.b_chibre_allowed)
            }
        })
    }

    fn finish_success(self) -> Self::Finish {
        SGame::new(
            self.aveccard,
            unwrap!(self.oesuit_trump),
            self.epi_chooser,
        )
    }
}

impl SChooseTrump {
    pub fn hand(&self, epi: EPlayerIndex) -> &[ECard] {
        &self.aveccard[epi]
    }

    pub fn choose_trump(&mut self, epi: EPlayerIndex, oesuit: Option<ESuit>) -> Result<(), VJassError> {
        let (epi_active, b_may_pass) = match self.which_player_can_do_something() {
            None => bail_illegal!("trump already chosen"),
            Some(tplepib) => tplepib,
        };
        if epi != epi_active {
            bail_illegal!("choose_trump not allowed for player {}", epi);
        }
        match oesuit {
            Some(esuit) => {
                info!("Player {} chooses trump {}", epi, esuit);
                self.oesuit_trump = Some(esuit);
            },
            None => {
                if !b_may_pass {
                    bail_illegal!("player {} may not pass the trump decision", epi);
                }
                info!("Player {} passes the trump decision to {}", epi, epi.partner());
                self.b_passed = true;
            },
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct SGame {
    pub ahand: EnumMap<EPlayerIndex, SHand>,
    pub esuit_trump: ESuit,
    pub epi_chooser: EPlayerIndex,
    pub trickseq: STrickSequence,
}

impl SGame {
    pub fn new(
        aveccard: EnumMap<EPlayerIndex, SHandVector>,
        esuit_trump: ESuit,
        epi_chooser: EPlayerIndex,
    ) -> SGame {
        SGame {
            ahand: aveccard.map(|veccard| SHand::new_from_iter(veccard.iter().copied())),
            esuit_trump,
            epi_chooser,
            trickseq: STrickSequence::new(/*epi_first*/epi_chooser),
        }
    }

    pub fn current_trick(&self) -> &STrick {
        self.trickseq.current_trick()
    }

    /// Legal cards of the seat currently asked to play.
    pub fn all_allowed_cards(&self) -> SHandVector {
        let epi = unwrap!(self.which_player_can_do_something());
        all_allowed_cards(self.current_trick(), &self.ahand[epi], self.esuit_trump)
    }

    pub fn zugeben(&mut self, card: ECard, epi: EPlayerIndex) -> Result<(), VJassError> {
        if Some(epi) != self.which_player_can_do_something() {
            bail_illegal!("it is not player {}'s turn", epi);
        }
        if !self.ahand[epi].contains(card) {
            bail_illegal!("{} is not in player {}'s hand", card, epi);
        }
        if !card_is_allowed(self.current_trick(), &self.ahand[epi], card, self.esuit_trump) {
            bail_illegal!("{} is not allowed", card);
        }
        self.ahand[epi].play_card(card);
        let esuit_trump = self.esuit_trump;
        self.trickseq.play_card(card, |fulltrick| winner_index(fulltrick, esuit_trump));
        Ok(())
    }

    pub fn completed_tricks(&self) -> &[STrick] {
        self.trickseq.completed_tricks()
    }
}

impl TGamePhase for SGame {
    type ActivePlayerInfo = EPlayerIndex;
    type Finish = SGameResult;

    fn which_player_can_do_something(&self) -> Option<Self::ActivePlayerInfo> {
        if_then_some!(
            !self.trickseq.round_finished(),
            unwrap!(self.trickseq.current_trick().current_playerindex())
        )
    }

    fn finish_success(self) -> Self::Finish {
        assert!(self.trickseq.round_finished());
        let esuit_trump = self.esuit_trump;
        let mut an_points = ETeamIndex::map_from_fn(|_eteam| 0);
        let mut oeteam_sweep = None;
        for (i_trick, (fulltrick, epi_winner)) in self.trickseq
            .completed_tricks_winner_index(|fulltrick| winner_index(fulltrick, esuit_trump))
            .enumerate()
        {
            let eteam_winner = epi_winner.team();
            let mut n_points_trick = points_trick(fulltrick, esuit_trump);
            if i_trick + 1 == N_CARDS_PER_HAND {
                n_points_trick += N_POINTS_LAST_TRICK;
            }
            an_points[eteam_winner] += n_points_trick;
            oeteam_sweep = match oeteam_sweep {
                None => Some(Some(eteam_winner)),
                Some(Some(eteam)) if eteam == eteam_winner => Some(Some(eteam)),
                Some(_) => Some(None),
            };
        }
        let oeteam_match = unwrap!(oeteam_sweep);
        if let Some(eteam) = oeteam_match {
            an_points[eteam] += N_POINTS_MATCH_BONUS;
        }
        SGameResult {
            an_points,
            oeteam_match,
        }
    }
}

pub const N_POINTS_LAST_TRICK: isize = 5;
pub const N_POINTS_MATCH_BONUS: isize = 100;

/// Outcome of one deal: the per-team points, bonuses included.
#[derive(Debug)]
pub struct SGameResult {
    pub an_points: EnumMap<ETeamIndex, isize>,
    pub oeteam_match: Option<ETeamIndex>, // the team that took all nine tricks, if any
}
