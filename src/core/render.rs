//! Item list to card view model conversion.

use crate::config::render::{
    EAGER_IMAGE_COUNT, LEGENDARY_TITLE, MAX_STAGGER_MS, STAGGER_STEP_MS, TBR_LABEL,
};
use crate::models::{Card, CardVariant, ImagePriority, Item, RatingLabel};
use crate::utils::format::format_index;

/// Build one card per item, in list order.
///
/// At most one card is legendary: the first whose title is exactly
/// [`LEGENDARY_TITLE`].
pub fn build_cards(items: &[Item]) -> Vec<Card> {
    let legendary = items.iter().position(|item| item.title == LEGENDARY_TITLE);

    items
        .iter()
        .enumerate()
        .map(|(position, item)| Card {
            position,
            index_label: format_index(position),
            title: item.title.clone(),
            author: item.author().map(str::to_string),
            cover_url: item.cover().map(str::to_string),
            thoughts: item.thoughts().map(str::to_string),
            rating: rating_label(item),
            variant: if legendary == Some(position) {
                CardVariant::Legendary
            } else {
                CardVariant::Standard
            },
            priority: if position < EAGER_IMAGE_COUNT {
                ImagePriority::Eager
            } else {
                ImagePriority::Lazy
            },
            delay_ms: stagger_delay(position),
        })
        .collect()
}

fn rating_label(item: &Item) -> RatingLabel {
    match item.rating() {
        Some(text) => RatingLabel {
            text: text.to_string(),
            is_tbr: false,
        },
        None => RatingLabel {
            text: TBR_LABEL.to_string(),
            is_tbr: true,
        },
    }
}

fn stagger_delay(position: usize) -> u32 {
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
        .min(MAX_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> Item {
        Item {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn legendary_positions(cards: &[Card]) -> Vec<usize> {
        cards
            .iter()
            .filter(|c| c.is_legendary())
            .map(|c| c.position)
            .collect()
    }

    #[test]
    fn test_index_labels_are_one_based_and_padded() {
        let items: Vec<Item> = (0..12).map(|i| item(&format!("Item {}", i))).collect();
        let cards = build_cards(&items);

        assert_eq!(cards.len(), 12);
        assert_eq!(cards[0].index_label, "01");
        assert_eq!(cards[8].index_label, "09");
        assert_eq!(cards[11].index_label, "12");
    }

    #[test]
    fn test_rating_falls_back_to_tbr() {
        let mut rated = item("Rated");
        rated.rating_text = Some("★★★★☆".to_string());
        let mut blank = item("Blank");
        blank.rating_text = Some("   ".to_string());
        let missing = item("Missing");

        let cards = build_cards(&[rated, blank, missing]);

        assert_eq!(cards[0].rating.text, "★★★★☆");
        assert!(!cards[0].rating.is_tbr);
        for card in &cards[1..] {
            assert_eq!(card.rating.text, "TBR");
            assert!(card.rating.is_tbr);
        }
    }

    #[test]
    fn test_legendary_only_for_exact_title() {
        let cards = build_cards(&[item("Naruto"), item("One Piece"), item("one piece")]);
        assert_eq!(legendary_positions(&cards), vec![1]);
    }

    #[test]
    fn test_no_legendary_without_match() {
        let cards = build_cards(&[item("Naruto"), item("One Piece Film: Red")]);
        assert!(legendary_positions(&cards).is_empty());
    }

    #[test]
    fn test_duplicate_sentinel_marks_first_only() {
        let cards = build_cards(&[item("Bleach"), item("One Piece"), item("One Piece")]);
        assert_eq!(legendary_positions(&cards), vec![1]);
    }

    #[test]
    fn test_leading_cards_load_eagerly() {
        let items: Vec<Item> = (0..EAGER_IMAGE_COUNT + 2).map(|_| item("x")).collect();
        let cards = build_cards(&items);

        assert!(cards[..EAGER_IMAGE_COUNT]
            .iter()
            .all(|c| c.priority == ImagePriority::Eager));
        assert!(cards[EAGER_IMAGE_COUNT..]
            .iter()
            .all(|c| c.priority == ImagePriority::Lazy));
    }

    #[test]
    fn test_stagger_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 3 * STAGGER_STEP_MS);
        assert_eq!(stagger_delay(500), MAX_STAGGER_MS);
    }

    #[test]
    fn test_blank_optional_fields_are_dropped() {
        let mut entry = item("Dune");
        entry.author = Some(String::new());
        entry.cover_url = Some(" ".to_string());
        let cards = build_cards(&[entry]);
        assert_eq!(cards[0].author, None);
        assert_eq!(cards[0].cover_url, None);
    }
}
