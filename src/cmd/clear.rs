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
use crate::store::CardStore;

pub fn clear_cards(store: &mut CardStore, confirmed: bool) -> Fallible<()> {
    if store.is_empty() {
        println!("There are no flashcards to delete.");
        return Ok(());
    }
    if !confirmed {
        return fail(&format!(
            "this deletes all {} flashcards and cannot be undone, pass --yes to confirm.",
            store.count()
        ));
    }
    let removed = store.clear()?;
    println!("Deleted all {removed} flashcards.");
    Ok(())
}
