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

use crate::error::CardError;

/// A question/answer pair. Both fields are trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Result<Self, CardError> {
        let question = question.as_ref().trim();
        let answer = answer.as_ref().trim();
        if question.is_empty() && answer.is_empty() {
            return Err(CardError::Validation(
                "both question and answer are required".to_string(),
            ));
        }
        if question.is_empty() {
            return Err(CardError::Validation("question is empty".to_string()));
        }
        if answer.is_empty() {
            return Err(CardError::Validation("answer is empty".to_string()));
        }
        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub(crate) fn set_answer(&mut self, answer: String) {
        self.answer = answer;
    }
}

/// The cards every fresh or unrecoverable store starts with.
pub fn default_cards() -> Vec<Flashcard> {
    [
        ("What is the capital of France?", "Paris"),
        ("What does HTML stand for?", "HyperText Markup Language"),
        ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
    ]
    .into_iter()
    .map(|(question, answer)| Flashcard {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}
