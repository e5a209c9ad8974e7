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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

/// Score tracking for a single practice run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    score: usize,
    total: usize,
}

impl SessionStats {
    /// Zeroes the score and fixes the total for a new run.
    pub fn reset(&mut self, total: usize) {
        self.score = 0;
        self.total = total;
    }

    pub fn increment_score(&mut self) {
        assert!(
            self.score < self.total,
            "score cannot exceed the session total"
        );
        self.score += 1;
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The score as a percentage of the total, rounded to one decimal place.
    /// An empty session scores 0.0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.score as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    pub fn label(&self) -> String {
        format!("Score: {}/{}", self.score, self.total)
    }
}

impl Display for SessionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: {}/{} ({:.1}%)",
            self.score,
            self.total,
            self.percentage()
        )
    }
}
