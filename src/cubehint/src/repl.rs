use std::io;

use facelet_cube::{FaceletState, MoveEngine, Scrambler, format_scramble};
use log::debug;
use oll_hint::get_hint;

use crate::{config::Config, net};

pub const HELP: &str = "\
Enter moves such as `R U R' U'`, or one of:
  hint        show the next OLL step
  apply-hint  perform the next OLL step
  show        draw the cube
  scramble    reset and scramble the cube
  reset       return to the solved cube
  exit        quit";

/// The result of one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit,
}

/// A cube that lives across lines of interactive input.
pub struct Session {
    state: FaceletState,
    engine: MoveEngine,
    scrambler: Scrambler,
    config: Config,
    colored: bool,
}

impl Session {
    pub fn new(config: Config, colored: bool) -> Session {
        Session {
            state: FaceletState::solved(),
            engine: MoveEngine::new(config.strictness()),
            scrambler: config.seed.map_or_else(Scrambler::new, Scrambler::with_seed),
            config,
            colored,
        }
    }

    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    pub fn handle(&mut self, line: &str) -> Outcome {
        let output = match line.trim() {
            "" => String::new(),
            "exit" | "quit" => return Outcome::Exit,
            "help" => HELP.to_owned(),
            "reset" => {
                self.state.reset();
                "Reset to solved".to_owned()
            }
            "hint" => get_hint(&self.state).to_string(),
            "apply-hint" => {
                let hint = get_hint(&self.state);
                if hint.apply(&mut self.state) {
                    format!("Applied {hint}")
                } else {
                    hint.to_string()
                }
            }
            "show" => net::render(&self.state, &self.config.color_names, self.colored),
            "scramble" => {
                let scramble = self.scrambler.generate(self.config.scramble_length);
                self.state.reset();
                self.state.apply_algorithm(&scramble);
                format_scramble(&scramble)
            }
            moves => {
                // Moves before a bad token stay applied
                match self.engine.execute(&mut self.state, moves.split_whitespace()) {
                    Ok(count) => format!("Applied {count} moves"),
                    Err(err) => err.to_string(),
                }
            }
        };

        debug!("State after `{line}`:\n{}", self.state);
        Outcome::Continue(output)
    }
}

/// Read lines from stdin until `exit` or end of input.
pub fn run(mut session: Session) -> color_eyre::Result<()> {
    eprintln!("{HELP}");
    for line in io::stdin().lines() {
        match session.handle(&line?) {
            Outcome::Continue(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Outcome::Exit => break,
        }
    }
    Ok(())
}
