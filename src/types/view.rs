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

use serde::Serialize;

/// Anything a front end can ask for a fresh snapshot of what to show.
pub trait Displayable {
    type View;

    fn view(&self) -> Self::View;
}

/// What the main menu shows: the live count and the questions in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckView {
    pub card_count: usize,
    pub questions: Vec<String>,
}

/// The practice intents that are currently valid. Front ends use this to
/// enable and disable their controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intents {
    pub show_answer: bool,
    pub mark_correct: bool,
    pub mark_wrong: bool,
    pub skip: bool,
    pub quit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeView {
    /// The current question, blank once the session is finished.
    pub question: String,
    /// The answer, blank until it has been revealed.
    pub answer: String,
    /// One-based index of the current card.
    pub position: usize,
    pub total: usize,
    pub score: usize,
    pub finished: bool,
    pub intents: Intents,
}

impl PracticeView {
    pub fn progress_label(&self) -> String {
        if self.finished {
            format!("Finished {} cards", self.total)
        } else {
            format!("Card {} of {}", self.position, self.total)
        }
    }
}
