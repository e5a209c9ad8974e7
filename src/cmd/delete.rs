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
use crate::store::CardStore;

pub fn delete_card(store: &mut CardStore, question: &str) -> Fallible<()> {
    let card = store.remove(question)?;
    println!("Deleted: {}", card.question());
    println!("Total flashcards: {}", store.count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_delete() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        write(&path, r#"[{"question":"Q","answer":"A"}]"#)?;
        let (mut store, _) = CardStore::load(&path);
        delete_card(&mut store, "Q")?;
        assert!(delete_card(&mut store, "Q").is_err());
        assert_eq!(store.count(), 0);
        Ok(())
    }
}
