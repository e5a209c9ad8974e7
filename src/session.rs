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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CardError;
use crate::store::CardStore;
use crate::types::card::Flashcard;
use crate::types::stats::SessionStats;
use crate::types::view::Displayable;
use crate::types::view::Intents;
use crate::types::view::PracticeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The question is shown, the answer is hidden.
    Question,
    /// The answer has been revealed and the card awaits a verdict.
    Answer,
}

/// The result of an intent that moves past the current card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// There is another card to show.
    Next,
    /// That was the last card. Carries the final stats.
    Finished(SessionStats),
}

/// One shuffled pass over a snapshot of the collection.
pub struct PracticeSession {
    cards: Vec<Flashcard>,
    position: usize,
    phase: Phase,
    stats: SessionStats,
}

impl PracticeSession {
    /// Shuffles the snapshot once and shows its first question. Refuses to
    /// start on an empty snapshot.
    pub fn start<R: Rng + ?Sized>(mut cards: Vec<Flashcard>, rng: &mut R) -> Result<Self, CardError> {
        if cards.is_empty() {
            return Err(CardError::EmptyCollection);
        }
        cards.shuffle(rng);
        log::debug!("Starting practice with {} cards.", cards.len());
        let mut stats = SessionStats::default();
        stats.reset(cards.len());
        Ok(Self {
            cards,
            position: 0,
            phase: Phase::Question,
            stats,
        })
    }

    pub fn from_store<R: Rng + ?Sized>(store: &CardStore, rng: &mut R) -> Result<Self, CardError> {
        Self::start(store.snapshot(), rng)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.cards.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based index of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.position)
    }

    /// Reveals the answer. Revealing twice is harmless.
    pub fn show_answer(&mut self) -> Result<&str, CardError> {
        let position = self.position;
        let card = self
            .cards
            .get(position)
            .ok_or_else(|| finished("show an answer"))?;
        if self.phase == Phase::Question {
            log::debug!("Revealing answer {}.", position + 1);
            self.phase = Phase::Answer;
        }
        Ok(card.answer())
    }

    pub fn mark_correct(&mut self) -> Result<Progress, CardError> {
        self.require_answer("mark a card correct")?;
        self.stats.increment_score();
        Ok(self.advance())
    }

    pub fn mark_wrong(&mut self) -> Result<Progress, CardError> {
        self.require_answer("mark a card wrong")?;
        Ok(self.advance())
    }

    /// Moves past a card without revealing it. Once the answer is shown the
    /// card has to be marked instead.
    pub fn skip(&mut self) -> Result<Progress, CardError> {
        if self.is_finished() {
            return Err(finished("skip"));
        }
        if self.phase == Phase::Answer {
            return Err(CardError::InvalidTransition(
                "the answer is already shown, mark it correct or wrong".to_string(),
            ));
        }
        Ok(self.advance())
    }

    /// Ends the session, returning the stats as they stand.
    pub fn quit(self) -> SessionStats {
        log::debug!("Practice ended at card {} of {}.", self.position, self.cards.len());
        self.stats
    }

    fn require_answer(&self, action: &str) -> Result<(), CardError> {
        if self.is_finished() {
            return Err(finished(action));
        }
        match self.phase {
            Phase::Answer => Ok(()),
            Phase::Question => Err(CardError::InvalidTransition(format!(
                "cannot {action} before the answer is shown"
            ))),
        }
    }

    fn advance(&mut self) -> Progress {
        self.position += 1;
        self.phase = Phase::Question;
        if self.is_finished() {
            log::debug!("Practice completed: {}", self.stats);
            Progress::Finished(self.stats)
        } else {
            Progress::Next
        }
    }
}

fn finished(action: &str) -> CardError {
    CardError::InvalidTransition(format!("cannot {action}, the session is finished"))
}

impl Displayable for PracticeSession {
    type View = PracticeView;

    fn view(&self) -> PracticeView {
        let total = self.cards.len();
        let (question, answer) = match self.current() {
            Some(card) => {
                let answer = match self.phase {
                    Phase::Answer => card.answer().to_string(),
                    Phase::Question => String::new(),
                };
                (card.question().to_string(), answer)
            }
            None => (String::new(), String::new()),
        };
        let intents = if self.is_finished() {
            Intents {
                quit: true,
                ..Intents::default()
            }
        } else {
            let question_shown = self.phase == Phase::Question;
            Intents {
                show_answer: question_shown,
                mark_correct: !question_shown,
                mark_wrong: !question_shown,
                skip: question_shown,
                quit: true,
            }
        };
        PracticeView {
            question,
            answer,
            position: (self.position + 1).min(total),
            total,
            score: self.stats.score(),
            finished: self.is_finished(),
            intents,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    fn cards(pairs: &[(&str, &str)]) -> Vec<Flashcard> {
        pairs
            .iter()
            .map(|(q, a)| Flashcard::new(q, a).unwrap())
            .collect()
    }

    fn four_cards() -> Vec<Flashcard> {
        cards(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")])
    }

    #[test]
    fn test_empty_snapshot_is_refused() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = PracticeSession::start(Vec::new(), &mut rng);
        assert!(matches!(result, Err(CardError::EmptyCollection)));
    }

    #[test]
    fn test_score_three_of_four() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = PracticeSession::start(four_cards(), &mut rng).unwrap();
        let mut last = Progress::Next;
        for verdict in [true, true, false, true] {
            session.show_answer().unwrap();
            last = if verdict {
                session.mark_correct().unwrap()
            } else {
                session.mark_wrong().unwrap()
            };
        }
        match last {
            Progress::Finished(stats) => {
                assert_eq!(stats.score(), 3);
                assert_eq!(stats.total(), 4);
                assert_eq!(stats.percentage(), 75.0);
            }
            Progress::Next => panic!("session should be finished"),
        }
        assert!(session.is_finished());
    }

    #[test]
    fn test_mark_before_reveal_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = PracticeSession::start(four_cards(), &mut rng).unwrap();
        assert!(matches!(
            session.mark_correct(),
            Err(CardError::InvalidTransition(_))
        ));
        assert!(matches!(
            session.mark_wrong(),
            Err(CardError::InvalidTransition(_))
        ));
        assert_eq!(session.position(), 0);
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.phase(), Phase::Question);
    }

    #[test]
    fn test_show_answer_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = PracticeSession::start(four_cards(), &mut rng).unwrap();
        let first = session.show_answer().unwrap().to_string();
        let second = session.show_answer().unwrap().to_string();
        assert_eq!(first, second);
        assert_eq!(session.phase(), Phase::Answer);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_skip() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session =
            PracticeSession::start(cards(&[("a", "1"), ("b", "2")]), &mut rng).unwrap();
        assert_eq!(session.skip(), Ok(Progress::Next));
        session.show_answer().unwrap();
        assert!(matches!(
            session.skip(),
            Err(CardError::InvalidTransition(_))
        ));
        assert_eq!(session.position(), 1);
        let progress = session.mark_wrong().unwrap();
        assert_eq!(progress, Progress::Finished(session.stats()));
        assert_eq!(session.stats().percentage(), 0.0);
    }

    #[test]
    fn test_finished_session_rejects_intents() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = PracticeSession::start(cards(&[("a", "1")]), &mut rng).unwrap();
        session.skip().unwrap();
        assert!(session.is_finished());
        assert!(session.show_answer().is_err());
        assert!(session.mark_correct().is_err());
        assert!(session.mark_wrong().is_err());
        assert!(session.skip().is_err());
        assert_eq!(session.stats().total(), 1);
        let view = session.view();
        assert!(view.finished);
        assert_eq!(view.question, "");
        assert_eq!(
            view.intents,
            Intents {
                quit: true,
                ..Intents::default()
            }
        );
    }

    #[test]
    fn test_view_tracks_phase() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = PracticeSession::start(four_cards(), &mut rng).unwrap();
        let view = session.view();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 4);
        assert_eq!(view.answer, "");
        assert!(view.intents.show_answer && view.intents.skip);
        assert!(!view.intents.mark_correct && !view.intents.mark_wrong);
        assert_eq!(view.progress_label(), "Card 1 of 4");

        let answer = session.show_answer().unwrap().to_string();
        let view = session.view();
        assert_eq!(view.answer, answer);
        assert!(!view.intents.show_answer && !view.intents.skip);
        assert!(view.intents.mark_correct && view.intents.mark_wrong);

        session.mark_correct().unwrap();
        let view = session.view();
        assert_eq!(view.position, 2);
        assert_eq!(view.score, 1);
        assert_eq!(view.answer, "");
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let source: Vec<Flashcard> = (0..20)
            .map(|i| Flashcard::new(format!("q{i}"), format!("a{i}")).unwrap())
            .collect();
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = PracticeSession::start(source.clone(), &mut rng).unwrap();
        let mut seen = Vec::new();
        while let Some(card) = session.current() {
            seen.push(card.clone());
            session.skip().unwrap();
        }
        assert_eq!(seen.len(), source.len());
        for card in &source {
            assert!(seen.contains(card));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed: u64| -> Vec<String> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = PracticeSession::start(four_cards(), &mut rng).unwrap();
            let mut questions = Vec::new();
            while let Some(card) = session.current() {
                questions.push(card.question().to_string());
                session.skip().unwrap();
            }
            questions
        };
        assert_eq!(order(42), order(42));
    }

    #[test]
    fn test_snapshot_is_independent_of_store() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        std::fs::write(&path, r#"{"2+2?":"4","Capital of Japan?":"Tokyo"}"#)?;
        let (mut store, _) = CardStore::load(&path);
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = PracticeSession::from_store(&store, &mut rng)?;
        store.clear()?;
        assert_eq!(store.count(), 0);

        session.show_answer()?;
        assert_eq!(session.mark_wrong()?, Progress::Next);
        session.show_answer()?;
        let progress = session.mark_correct()?;
        let stats = session.quit();
        assert_eq!(progress, Progress::Finished(stats));
        assert_eq!(stats.score(), 1);
        assert_eq!(stats.total(), 2);
        assert_eq!(stats.percentage(), 50.0);
        Ok(())
    }

    #[test]
    fn test_new_session_reshuffles_independently() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut first = PracticeSession::start(four_cards(), &mut rng).unwrap();
        first.show_answer().unwrap();
        first.mark_correct().unwrap();
        let second = PracticeSession::start(four_cards(), &mut rng).unwrap();
        assert_eq!(second.position(), 0);
        assert_eq!(second.stats().score(), 0);
        assert_eq!(second.stats().total(), 4);
    }
}
