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

use crate::error::Fallible;
use crate::error::fail;
use crate::store::AddOutcome;
use crate::store::CardStore;

pub fn add_card(store: &mut CardStore, question: &str, answer: &str, overwrite: bool) -> Fallible<()> {
    if store.contains(question) && !overwrite {
        let current = store.get(question).map(|c| c.answer()).unwrap_or_default();
        return fail(&format!(
            "this question already has the answer {current:?}, pass --overwrite to replace it."
        ));
    }
    match store.add(question, answer)? {
        AddOutcome::Added => println!("Flashcard added!"),
        AddOutcome::Updated => println!("Flashcard updated!"),
    }
    println!("Total flashcards: {}", store.count());
    Ok(())
}
