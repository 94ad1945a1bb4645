use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CarouselError, Result};

/// One content unit shown on the track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub content: String,
    /// Local image path. Anything that is not a readable file renders as a placeholder.
    pub image: String,
}

impl Card {
    pub fn new(id: u32, title: &str, content: &str, image: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            image: image.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct DeckFile {
    cards: Vec<Card>,
}

/// Ordered, non-empty list of cards with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(CarouselError::DuplicateCardId(card.id));
            }
        }
        Ok(Self { cards })
    }

    /// Parse a deck from TOML made of `[[cards]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: DeckFile = toml::from_str(source)?;
        Self::new(file.cards)
    }

    /// Load a deck from a TOML file. Relative image paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let mut deck = Self::from_toml_str(&source)?;
        if let Some(base) = path.parent() {
            for card in deck.cards.iter_mut() {
                let image = Path::new(&card.image);
                if image.is_relative() && !card.image.contains("://") {
                    card.image = base.join(image).to_string_lossy().into_owned();
                }
            }
        }
        Ok(deck)
    }

    /// The four news cards the widget ships with.
    pub fn demo() -> Self {
        Self {
            cards: vec![
                Card::new(
                    1,
                    "Breaking News",
                    "Scientists discover breakthrough in renewable energy technology that could revolutionize power generation.",
                    "https://picsum.photos/400/250",
                ),
                Card::new(
                    2,
                    "Tech Update",
                    "New AI model shows promising results in early disease detection, potentially saving millions of lives.",
                    "https://picsum.photos/400/251",
                ),
                Card::new(
                    3,
                    "Space Exploration",
                    "NASA announces plans for the first human settlement on Mars, scheduled for the next decade.",
                    "https://picsum.photos/400/252",
                ),
                Card::new(
                    4,
                    "Environmental News",
                    "Global efforts to reduce plastic waste show positive results in ocean cleanup initiatives.",
                    "https://picsum.photos/400/253",
                ),
            ],
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_deck_has_four_cards() {
        let deck = CardDeck::demo();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.cards()[0].title, "Breaking News");
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(CardDeck::new(Vec::new()), Err(CarouselError::EmptyDeck)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let cards = vec![Card::new(7, "a", "a", "a.png"), Card::new(7, "b", "b", "b.png")];
        assert!(matches!(CardDeck::new(cards), Err(CarouselError::DuplicateCardId(7))));
    }

    #[test]
    fn parses_cards_tables() {
        let deck = CardDeck::from_toml_str(
            r#"
            [[cards]]
            id = 1
            title = "One"
            content = "First"
            image = "one.jpg"

            [[cards]]
            id = 2
            title = "Two"
            content = "Second"
            image = "two.jpg"
            "#,
        )
        .unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards()[1].content, "Second");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let result = CardDeck::from_toml_str("[[cards]]\nid = 1\ntitle = \"x\"\n");
        assert!(matches!(result, Err(CarouselError::Toml(_))));
    }

    #[test]
    fn load_resolves_relative_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[[cards]]\nid = 1\ntitle = \"t\"\ncontent = \"c\"\nimage = \"pics/a.jpg\"\n\n\
             [[cards]]\nid = 2\ntitle = \"t\"\ncontent = \"c\"\nimage = \"https://example.com/b.jpg\""
        )
        .unwrap();

        let deck = CardDeck::load(&path).unwrap();
        assert_eq!(Path::new(&deck.cards()[0].image), dir.path().join("pics/a.jpg"));
        assert_eq!(deck.cards()[1].image, "https://example.com/b.jpg");
    }
}
