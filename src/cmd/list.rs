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

use std::io::Write;

use crate::error::Fallible;
use crate::store::CardStore;
use crate::types::view::Displayable;

const PREVIEW_CHARS: usize = 70;

pub fn list_cards(store: &CardStore, out: &mut impl Write) -> Fallible<()> {
    if store.is_empty() {
        writeln!(out, "No flashcards yet.")?;
        return Ok(());
    }
    for (i, card) in store.sorted().into_iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, preview(card.question()))?;
        writeln!(out, "     {}", preview(card.answer()))?;
    }
    let view = store.view();
    writeln!(out, "Total flashcards: {}", view.card_count)?;
    Ok(())
}

/// Truncates long text to a single listing line.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    let mut preview: String = line.chars().take(PREVIEW_CHARS).collect();
    if preview.len() < text.len() {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_list_sorted() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        write(&path, r#"{"b?":"2","a?":"1"}"#)?;
        let (store, _) = CardStore::load(&path);
        let mut out = Vec::new();
        list_cards(&store, &mut out)?;
        let text = String::from_utf8(out).unwrap();
        let a = text.find("a?").unwrap();
        let b = text.find("b?").unwrap();
        assert!(a < b);
        assert!(text.ends_with("Total flashcards: 2\n"));
        Ok(())
    }

    #[test]
    fn test_list_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        write(&path, "[]")?;
        let (store, _) = CardStore::load(&path);
        let mut out = Vec::new();
        list_cards(&store, &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), "No flashcards yet.\n");
        Ok(())
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("line one\nline two"), "line one...");
        let long = "x".repeat(100);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(PREVIEW_CHARS)));
    }
}
