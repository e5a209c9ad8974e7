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

use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::add::add_card;
use crate::cmd::clear::clear_cards;
use crate::cmd::delete::delete_card;
use crate::cmd::edit::edit_card;
use crate::cmd::list::list_cards;
use crate::cmd::practice::practice;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::store::CardStore;
use crate::store::LoadReport;
use crate::store::LoadStatus;

const DEFAULT_FILE: &str = "flashcards.json";

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flashcard file.
    #[arg(long, global = true, default_value = DEFAULT_FILE)]
    file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the cards, sorted by question.
    List,
    /// Add a card.
    Add {
        question: String,
        answer: String,
        /// Replace the answer if the question already exists.
        #[arg(long)]
        overwrite: bool,
    },
    /// Change the question and answer of a card.
    Edit {
        /// The current question of the card.
        identity: String,
        question: String,
        answer: String,
    },
    /// Delete a card.
    Delete {
        /// The question of the card to delete.
        question: String,
    },
    /// Delete every card.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Practice the cards in random order.
    Practice {
        /// Seed for the shuffle, to repeat an order.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print collection statistics.
    Stats {
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let mut store: CardStore = open_store(cli.file);
    match cli.command {
        Command::List => list_cards(&store, &mut stdout()),
        Command::Add {
            question,
            answer,
            overwrite,
        } => add_card(&mut store, &question, &answer, overwrite),
        Command::Edit {
            identity,
            question,
            answer,
        } => edit_card(&mut store, &identity, &question, &answer),
        Command::Delete { question } => delete_card(&mut store, &question),
        Command::Clear { yes } => clear_cards(&mut store, yes),
        Command::Practice { seed } => practice(&store, seed, stdin().lock(), &mut stdout()),
        Command::Stats { format } => print_stats(&store, format, &mut stdout()),
    }
}

/// Loads the store, telling the user about anything unusual that happened
/// on the way. Load problems never stop the command.
fn open_store(file: PathBuf) -> CardStore {
    let (store, report) = CardStore::load(file);
    let LoadReport { status, save_error } = report;
    match status {
        LoadStatus::Loaded => {}
        LoadStatus::Created => {
            eprintln!(
                "Created {} with {} default cards.",
                store.path().display(),
                store.count()
            );
        }
        LoadStatus::Migrated => {
            eprintln!("Converted {} to the list format.", store.path().display());
        }
        LoadStatus::Recovered(err) => {
            eprintln!("error: {err}");
        }
    }
    if let Some(err) = save_error {
        eprintln!("error: {err}");
    }
    store
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_file() {
        let cli = Cli::try_parse_from(["quizcards", "list", "--file", "deck.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("deck.json"));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["quizcards", "practice"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(DEFAULT_FILE));
        assert!(matches!(cli.command, Command::Practice { seed: None }));
    }

    #[test]
    fn test_parse_add() {
        let cli =
            Cli::try_parse_from(["quizcards", "add", "2+2?", "4", "--overwrite"]).unwrap();
        match cli.command {
            Command::Add {
                question,
                answer,
                overwrite,
            } => {
                assert_eq!(question, "2+2?");
                assert_eq!(answer, "4");
                assert!(overwrite);
            }
            _ => panic!("expected add"),
        }
    }
}
