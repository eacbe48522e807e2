//! Interactive terminal game loop.

use crate::input::{Entry, InputError, RangeCheck, parse_move};
use crate::render::{glyph, render_board};
use crate::settings::Settings;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_inarow::{GameConfig, GameFinished, GameInProgress, GameResult, GameSetup};
use tracing::{info, instrument, warn};

/// Line-oriented prompt over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(line)
    }

    /// Writes a full line.
    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Explains a rejected answer so the player can try again.
    fn reject(&mut self, answer: &str, err: &InputError) -> Result<()> {
        warn!(answer = answer.trim(), error = %err, "Answer rejected");
        self.say(format!("Sorry, {}. Try again.", err))
    }

    /// Asks until the answer passes `check`.
    #[instrument(skip(self, prompt))]
    pub fn ask_number(&mut self, prompt: &str, check: RangeCheck) -> Result<usize> {
        loop {
            let answer = self.ask(prompt)?;
            match check.parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(&answer, &err)?,
            }
        }
    }

    /// Builds the game configuration, prompting for whatever `settings` lacks.
    ///
    /// Values from flags or the settings file are checked with the same
    /// named ranges as typed answers.
    #[instrument(skip(self))]
    pub fn resolve_config(&mut self, settings: Settings) -> Result<GameConfig> {
        let side = match settings.side() {
            Some(side) => RangeCheck::Side.check(side)?,
            None => self.ask_number(
                "How many cells per side should the grid have? (3 to 25)\n>>> ",
                RangeCheck::Side,
            )?,
        };

        let check = RangeCheck::RunLength { side };
        let run_length = match settings.run_length() {
            Some(run_length) => check.check(run_length)?,
            None => self.ask_number(
                &format!("How many in a row should win? (3 to {})\n>>> ", side),
                check,
            )?,
        };

        Ok(GameConfig::new(side, run_length)?)
    }

    /// Asks the current player for a free cell, or a request to quit.
    fn ask_move(&mut self, game: &GameInProgress) -> Result<Entry> {
        let player = game.to_move();
        let prompt = format!(
            "{} ({}) to move [row column | #index | q]: ",
            player,
            glyph(Some(player))
        );
        loop {
            let answer = self.ask(&prompt)?;
            match parse_move(&answer, game.ledger()) {
                Ok(entry) => return Ok(entry),
                Err(err) => self.reject(&answer, &err)?,
            }
        }
    }

    /// Plays one game to completion.
    ///
    /// Returns `None` if a player quit before the end.
    #[instrument(skip(self), fields(config = %config))]
    pub fn play(&mut self, config: GameConfig) -> Result<Option<GameFinished>> {
        self.say(format!("{}. Rows count down, columns count across.", config))?;
        let mut game = GameSetup::new(config).start();

        loop {
            self.say(render_board(game.ledger()))?;
            let cell = match self.ask_move(&game)? {
                Entry::Cell(cell) => cell,
                Entry::Quit => {
                    info!(moves = game.ledger().len(), "Game abandoned");
                    self.say("The game was abandoned. Final board:")?;
                    self.say(render_board(game.ledger()))?;
                    return Ok(None);
                }
            };

            game = match game.place(cell).context("Move rejected by the rules engine")? {
                GameResult::InProgress(next) => next,
                GameResult::Finished(finished) => {
                    self.announce(&finished)?;
                    return Ok(Some(finished));
                }
            };
        }
    }

    /// Prints the final board and the verdict.
    fn announce(&mut self, finished: &GameFinished) -> Result<()> {
        self.say("The game has ended (\"o\" is player one and \"x\" is player two):")?;
        self.say(render_board(finished.ledger()))?;
        self.say(finished.verdict())?;
        if let Some(run) = finished.winning_run() {
            self.say(format!("Winning {} run: {:?}", run.axis, run.cells))?;
        }
        Ok(())
    }
}
