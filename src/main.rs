use std::thread;

use anyhow::Context;
use belka::{
    default_names, parse_names, Autopilot, GameState, Intent, Pace, Phase, RandomShoe, Seat,
    Settings, Shoe,
};
use clap::Parser;

mod args;
mod console;
use self::args::Args;
use self::console::Console;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let names = if args.names.is_empty() {
        default_names()
    } else {
        parse_names(&args.names).context("invalid --name")?
    };
    let settings = Settings::new(args.rules, args.threshold, names).context("invalid settings")?;
    let mut shoe = match args.seed {
        Some(seed) => RandomShoe::seeded(seed),
        None => RandomShoe::from_entropy(),
    };

    let human = (!args.watch).then_some(Seat::Bottom);
    let console = Console::new(human, !args.no_color);
    let autopilot = Autopilot::new(human, Pace::scaled(args.pace_ms));
    if let Some(seat) = human {
        println!("You are {seat}");
    }

    let state = play(GameState::new(settings), &console, &autopilot, &mut shoe)?;
    serde_json::to_writer(std::io::stderr(), &state)?;
    Ok(())
}

/// Plays a match to the end, or until the console runs out of input.
fn play<S: Shoe>(
    state: GameState,
    console: &Console,
    autopilot: &Autopilot,
    shoe: &mut S,
) -> anyhow::Result<GameState> {
    let mut state = state.try_apply(Intent::start_game(), shoe)?;
    console.notify(&GameState::default(), &state);
    loop {
        let next = if let Some(scheduled) = autopilot.schedule(&state) {
            thread::sleep(scheduled.delay);
            scheduled.fire(&state, shoe)
        } else {
            match state.phase() {
                Phase::PlayingTrick => {
                    let seat = state.current_player();
                    let Some(card) = console.choose_card(&state)? else {
                        break;
                    };
                    match state.try_apply(Intent::PlayCard { seat, card }, shoe) {
                        Ok(next) => next,
                        Err(err) => {
                            println!("Invalid play: {err}");
                            continue;
                        }
                    }
                }
                Phase::RoundFinished => {
                    if console.seat().is_some() && !console.confirm_next_round()? {
                        break;
                    }
                    state.try_apply(Intent::NextRound, shoe)?
                }
                _ => break,
            }
        };
        console.notify(&state, &next);
        state = next;
    }
    Ok(state)
}
