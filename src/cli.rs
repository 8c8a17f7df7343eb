#![cfg(feature = "std")]

//! Text menu for playing a search session interactively.
//!
//! Input and output are generic so the loop can be driven from stdin/stdout
//! or from in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::string::String;

use log::info;

use crate::{
    common::Termination,
    config::{SearchConfig, NUM_AREAS},
    plan::{play_round, RoundReport, SearchPlan},
    random::RandomSource,
    search::SearchState,
};

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Search(SearchPlan),
    Restart,
}

/// Summary of a finished interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub termination: Termination,
    /// Rounds played since the last restart.
    pub rounds: usize,
    pub restarts: usize,
    pub final_priors: [f64; NUM_AREAS],
}

/// Parse a menu entry `0`..`7`.
pub fn parse_choice(input: &str) -> Result<MenuChoice, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let n: u32 = input
        .parse()
        .map_err(|_| format!("Invalid choice '{}' - must be a number 0-7", input))?;
    match n {
        0 => Ok(MenuChoice::Quit),
        1 => Ok(MenuChoice::Search(SearchPlan::Twice(1))),
        2 => Ok(MenuChoice::Search(SearchPlan::Twice(2))),
        3 => Ok(MenuChoice::Search(SearchPlan::Twice(3))),
        4 => Ok(MenuChoice::Search(SearchPlan::Pair(1, 2))),
        5 => Ok(MenuChoice::Search(SearchPlan::Pair(1, 3))),
        6 => Ok(MenuChoice::Search(SearchPlan::Pair(2, 3))),
        7 => Ok(MenuChoice::Restart),
        _ => Err(format!("Choice {} out of range - must be 0-7", n)),
    }
}

/// Print the menu of search choices.
pub fn print_menu<W: Write>(out: &mut W, round: usize) -> std::io::Result<()> {
    writeln!(out, "\nSearch {}", round)?;
    writeln!(out, "Choose next areas to search:")?;
    writeln!(out, "  0 - Quit")?;
    writeln!(out, "  1 - Search Area 1 twice")?;
    writeln!(out, "  2 - Search Area 2 twice")?;
    writeln!(out, "  3 - Search Area 3 twice")?;
    writeln!(out, "  4 - Search Areas 1 & 2")?;
    writeln!(out, "  5 - Search Areas 1 & 3")?;
    writeln!(out, "  6 - Search Areas 2 & 3")?;
    writeln!(out, "  7 - Start Over")?;
    Ok(())
}

/// Print the current probability of each area.
pub fn print_probabilities<W: Write>(out: &mut W, priors: &[f64; NUM_AREAS]) -> std::io::Result<()> {
    let line = priors
        .iter()
        .enumerate()
        .map(|(i, p)| format!("P{} = {:.3}", i + 1, p))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line)
}

fn print_round<W: Write>(out: &mut W, report: &RoundReport) -> std::io::Result<()> {
    writeln!(out)?;
    for (i, outcome) in report.outcomes.iter().enumerate() {
        if outcome.found {
            writeln!(out, "Search {} Results: Found in Area {}!", i + 1, outcome.area)?;
        } else {
            writeln!(out, "Search {} Results: Not found", i + 1)?;
        }
    }
    let eff = report
        .effectiveness
        .iter()
        .enumerate()
        .map(|(i, e)| format!("E{} = {:.3}", i + 1, e))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "Search effectiveness: {}", eff)?;
    if report.found_in.is_none() {
        write!(out, "New target probabilities: ")?;
        print_probabilities(out, &report.revised_priors)?;
    }
    Ok(())
}

fn print_location<W: Write>(out: &mut W, state: &SearchState) -> std::io::Result<()> {
    if let Some(target) = state.target() {
        let Ok((x, y)) = target.chart_position(state.areas()) else {
            return Ok(());
        };
        writeln!(
            out,
            "Sailor was in Area {} at chart position ({}, {})",
            target.area, x, y
        )?;
    }
    Ok(())
}

fn start_state<S: RandomSource>(config: &SearchConfig, rng: &mut S) -> anyhow::Result<SearchState> {
    let mut state = SearchState::from_config(config)?;
    state.place_target(rng, NUM_AREAS)?;
    info!("new search session started");
    Ok(state)
}

/// Run the menu loop until the sailor is found or the player quits. End of
/// input counts as quitting.
pub fn run_session<S, I, W>(
    config: &SearchConfig,
    rng: &mut S,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<SessionSummary>
where
    S: RandomSource,
    I: BufRead,
    W: Write,
{
    let mut state = start_state(config, rng)?;
    let mut rounds = 0usize;
    let mut restarts = 0usize;

    writeln!(out, "════════════════════════════════════════════════════════════")?;
    writeln!(out, "                 BAYESIAN SEARCH AND RESCUE")?;
    writeln!(out, "════════════════════════════════════════════════════════════")?;
    write!(out, "Initial target probabilities: ")?;
    print_probabilities(out, &state.priors())?;

    loop {
        print_menu(out, rounds + 1)?;
        write!(out, "Choice: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            state.conclude(Termination::QuitByUser);
            break;
        }

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(e) => {
                writeln!(out, "✗ {}", e)?;
                continue;
            }
        };

        match choice {
            MenuChoice::Quit => {
                state.conclude(Termination::QuitByUser);
                break;
            }
            MenuChoice::Restart => {
                state = start_state(config, rng)?;
                rounds = 0;
                restarts += 1;
                writeln!(out, "\nStarting over with a new search.")?;
                write!(out, "Initial target probabilities: ")?;
                print_probabilities(out, &state.priors())?;
            }
            MenuChoice::Search(plan) => {
                let report = play_round(&mut state, rng, plan)?;
                rounds += 1;
                print_round(out, &report)?;
                if report.found_in.is_some() {
                    break;
                }
            }
        }
    }

    let termination = match state.phase() {
        crate::common::SearchPhase::Terminal(t) => t,
        _ => Termination::QuitByUser,
    };
    match termination {
        Termination::Found => writeln!(out, "\nSailor found after {} search rounds.", rounds)?,
        Termination::QuitByUser => writeln!(out, "\nSearch called off.")?,
    }
    print_location(out, &state)?;
    info!("search session ended: {:?} after {} rounds", termination, rounds);

    Ok(SessionSummary {
        termination,
        rounds,
        restarts,
        final_priors: state.priors(),
    })
}
