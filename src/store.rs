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

use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::CardError;
use crate::types::card::Flashcard;
use crate::types::card::default_cards;
use crate::types::view::DeckView;
use crate::types::view::Displayable;

/// The flashcard collection and the JSON file that backs it. Cards are
/// identified by their (trimmed) question text, and every mutation is
/// written through to disk immediately.
pub struct CardStore {
    path: PathBuf,
    cards: Vec<Flashcard>,
}

/// How the collection came to be in memory.
#[derive(Debug, PartialEq)]
pub enum LoadStatus {
    /// The file was read as-is.
    Loaded,
    /// There was no file, so one was created with the default cards.
    Created,
    /// The file was in the legacy question-to-answer mapping shape and has
    /// been rewritten as a list of records.
    Migrated,
    /// The file could not be read. The default cards were substituted.
    Recovered(CardError),
}

#[derive(Debug, PartialEq)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// Set when writing the created, migrated or recovered file failed. The
    /// in-memory collection is still usable.
    pub save_error: Option<CardError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A card with the same question existed and its answer was replaced.
    Updated,
}

#[derive(Deserialize)]
struct Record {
    question: String,
    answer: String,
}

enum Shape {
    Current,
    Legacy,
}

impl CardStore {
    pub fn load(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        let path: PathBuf = path.into();
        if !path.exists() {
            log::info!("No flashcard file at {}, creating one.", path.display());
            return Self::with_defaults(path, LoadStatus::Created);
        }
        match read_records(&path) {
            Ok((records, shape)) => {
                let cards = collect_cards(records);
                log::debug!("Loaded {} cards from {}.", cards.len(), path.display());
                let store = Self { path, cards };
                match shape {
                    Shape::Current => {
                        let report = LoadReport {
                            status: LoadStatus::Loaded,
                            save_error: None,
                        };
                        (store, report)
                    }
                    Shape::Legacy => {
                        log::info!("Migrating {} to the list format.", store.path.display());
                        let save_error = store.save().err();
                        let report = LoadReport {
                            status: LoadStatus::Migrated,
                            save_error,
                        };
                        (store, report)
                    }
                }
            }
            Err(err) => {
                log::warn!("{err}");
                Self::with_defaults(path, LoadStatus::Recovered(err))
            }
        }
    }

    fn with_defaults(path: PathBuf, status: LoadStatus) -> (Self, LoadReport) {
        let store = Self {
            path,
            cards: default_cards(),
        };
        let save_error = store.save().err();
        (store, LoadReport { status, save_error })
    }

    /// Writes the whole collection to disk, replacing the file.
    pub fn save(&self) -> Result<(), CardError> {
        let mut json = serde_json::to_string_pretty(&self.cards)
            .map_err(|e| CardError::storage(&self.path, std::io::Error::other(e)))?;
        json.push('\n');
        write(&self.path, json).map_err(|e| CardError::storage(&self.path, e))?;
        log::debug!("Saved {} cards to {}.", self.cards.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in insertion order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// The cards ordered by question text.
    pub fn sorted(&self) -> Vec<&Flashcard> {
        let mut cards: Vec<&Flashcard> = self.cards.iter().collect();
        cards.sort_by(|a, b| a.question().cmp(b.question()));
        cards
    }

    pub fn get(&self, question: &str) -> Option<&Flashcard> {
        self.index_of(question).map(|i| &self.cards[i])
    }

    /// Whether adding this question would replace an existing card. Front
    /// ends use this to ask for confirmation before calling [`add`].
    ///
    /// [`add`]: CardStore::add
    pub fn contains(&self, question: &str) -> bool {
        self.index_of(question).is_some()
    }

    /// An independent copy of the cards, for a practice session.
    pub fn snapshot(&self) -> Vec<Flashcard> {
        self.cards().to_vec()
    }

    /// Adds a card, or replaces the answer of the card with the same question.
    ///
    /// If the save fails the change is kept in memory and the storage error
    /// is returned.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<AddOutcome, CardError> {
        let card = Flashcard::new(question, answer)?;
        let outcome = match self.index_of(card.question()) {
            Some(index) => {
                self.cards[index].set_answer(card.answer().to_string());
                AddOutcome::Updated
            }
            None => {
                self.cards.push(card);
                AddOutcome::Added
            }
        };
        log::debug!("Card {outcome:?}.");
        self.save()?;
        Ok(outcome)
    }

    /// Replaces the card identified by `identity`. Renaming onto the question
    /// of another card replaces that card, so questions stay unique.
    pub fn update(&mut self, identity: &str, question: &str, answer: &str) -> Result<(), CardError> {
        let card = Flashcard::new(question, answer)?;
        let mut index = self
            .index_of(identity)
            .ok_or_else(|| CardError::NotFound(identity.trim().to_string()))?;
        if let Some(other) = self.index_of(card.question()) {
            if other != index {
                log::debug!("Rename replaces the existing card {:?}.", card.question());
                self.cards.remove(other);
                if other < index {
                    index -= 1;
                }
            }
        }
        self.cards[index] = card;
        self.save()
    }

    pub fn remove(&mut self, identity: &str) -> Result<Flashcard, CardError> {
        let index = self
            .index_of(identity)
            .ok_or_else(|| CardError::NotFound(identity.trim().to_string()))?;
        let card = self.cards.remove(index);
        self.save()?;
        Ok(card)
    }

    /// Deletes every card. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize, CardError> {
        let removed = self.cards.len();
        self.cards.clear();
        self.save()?;
        Ok(removed)
    }

    fn index_of(&self, question: &str) -> Option<usize> {
        let question = question.trim();
        self.cards.iter().position(|c| c.question() == question)
    }
}

impl Displayable for CardStore {
    type View = DeckView;

    fn view(&self) -> DeckView {
        DeckView {
            card_count: self.count(),
            questions: self
                .sorted()
                .into_iter()
                .map(|c| c.question().to_string())
                .collect(),
        }
    }
}

fn read_records(path: &Path) -> Result<(Vec<Record>, Shape), CardError> {
    let corrupt = |message: String| CardError::CorruptData {
        path: path.to_path_buf(),
        message,
    };
    let contents = read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| corrupt(e.to_string()))?;
    match value {
        Value::Array(_) => {
            let records: Vec<Record> =
                serde_json::from_value(value).map_err(|e| corrupt(e.to_string()))?;
            Ok((records, Shape::Current))
        }
        Value::Object(map) => {
            let mut records = Vec::with_capacity(map.len());
            for (question, answer) in map {
                match answer {
                    Value::String(answer) => records.push(Record { question, answer }),
                    _ => return Err(corrupt(format!("answer to {question:?} is not a string"))),
                }
            }
            Ok((records, Shape::Legacy))
        }
        _ => Err(corrupt("expected a list of cards".to_string())),
    }
}

/// Validates raw records. Blank records are dropped, and a repeated question
/// keeps its first position but takes the last answer.
fn collect_cards(records: Vec<Record>) -> Vec<Flashcard> {
    let mut cards: Vec<Flashcard> = Vec::with_capacity(records.len());
    for record in records {
        let card = match Flashcard::new(&record.question, &record.answer) {
            Ok(card) => card,
            Err(err) => {
                log::warn!("Skipping stored card {:?}: {err}", record.question);
                continue;
            }
        };
        match cards.iter_mut().find(|c| c.question() == card.question()) {
            Some(existing) => {
                log::warn!("Duplicate question {:?}, keeping the last answer.", card.question());
                existing.set_answer(card.answer().to_string());
            }
            None => cards.push(card),
        }
    }
    cards
}
