// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;
use std::io::Write;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::CardError;
use crate::error::Fallible;
use crate::session::Phase;
use crate::session::PracticeSession;
use crate::session::Progress;
use crate::store::CardStore;
use crate::types::stats::SessionStats;
use crate::types::view::Displayable;
use crate::types::view::PracticeView;

/// Runs a practice session in the terminal.
pub fn practice(
    store: &CardStore,
    seed: Option<u64>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_session(store, &mut rng, input, out)?;
    Ok(())
}

/// Drives a session from line commands until it finishes, the user quits,
/// or the input runs out.
pub fn run_session<R: Rng + ?Sized>(
    store: &CardStore,
    rng: &mut R,
    input: impl BufRead,
    out: &mut impl Write,
) -> Fallible<SessionStats> {
    let mut session = PracticeSession::from_store(store, rng)?;
    let mut lines = input.lines();
    loop {
        render(&session.view(), &session.stats(), out)?;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                let stats = session.quit();
                writeln!(out, "Stopped. {stats}")?;
                return Ok(stats);
            }
        };
        let result: Result<Option<Progress>, CardError> = match line.trim() {
            "q" => {
                let stopped_at = session.position();
                let stats = session.quit();
                log::debug!("Quit before card {} of {}.", stopped_at + 1, stats.total());
                writeln!(out, "Stopped. {stats}")?;
                return Ok(stats);
            }
            "" | "s" if session.phase() == Phase::Answer => {
                writeln!(out, "The answer is already shown.")?;
                continue;
            }
            "" | "s" => session.show_answer().map(|_| None),
            "k" => session.skip().map(Some),
            "y" => session.mark_correct().map(Some),
            "n" => session.mark_wrong().map(Some),
            other => {
                writeln!(out, "Unknown command {other:?}.")?;
                continue;
            }
        };
        match result {
            Ok(Some(Progress::Finished(stats))) => {
                writeln!(out, "Complete! {stats}")?;
                return Ok(stats);
            }
            Ok(_) => {}
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn render(view: &PracticeView, stats: &SessionStats, out: &mut impl Write) -> Fallible<()> {
    writeln!(out)?;
    writeln!(out, "{}    {}", view.progress_label(), stats.label())?;
    writeln!(out, "Q: {}", view.question)?;
    if !view.answer.is_empty() {
        writeln!(out, "A: {}", view.answer)?;
    }
    let mut options: Vec<&str> = Vec::new();
    if view.intents.show_answer {
        options.push("[Enter] show answer");
    }
    if view.intents.skip {
        options.push("[k] skip");
    }
    if view.intents.mark_correct {
        options.push("[y] correct");
    }
    if view.intents.mark_wrong {
        options.push("[n] wrong");
    }
    if view.intents.quit {
        options.push("[q] quit");
    }
    writeln!(out, "{}", options.join("  "))?;
    out.flush()?;
    Ok(())
}
