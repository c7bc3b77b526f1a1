use crate::{
    domain::{
        card::{Card, CardId},
        column::ColumnKey,
    },
    error::{CardboardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kanban board state: one ordered card sequence per column.
///
/// Serializes as `{"toDo": [...], "onProgress": [...], "completed": [...]}`,
/// the snapshot format kept in storage. Display order is sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub to_do: Vec<Card>,
    pub on_progress: Vec<Card>,
    pub completed: Vec<Card>,
}

impl Board {
    /// Creates a board with three empty columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// The board shown on first launch
    pub fn seed() -> Self {
        Self {
            to_do: vec![
                Card::new(
                    "t1",
                    "Brainstorming",
                    "Brainstorming brings team members' diverse experience into play.",
                ),
                Card::new(
                    "t2",
                    "Research",
                    "User research helps you to create an optimal product for users.",
                ),
                Card::new(
                    "t3",
                    "Wireframes",
                    "Low fidelity wireframes include the most basic content and visuals.",
                ),
            ],
            on_progress: vec![
                Card::new("p1", "Onboarding Illustrations ", "/cardImage1.png"),
                Card::new("p2", "Onboarding Illustrations ", "/cardImage1.png"),
            ],
            completed: vec![
                Card::new("c1", "Mobile App Design", "/cardImage4.png"),
                Card::new(
                    "c2",
                    "Design System",
                    "It just needs to adapt the UI from what you did before.",
                ),
            ],
        }
    }

    /// Cards of a column in display order
    pub fn column(&self, key: ColumnKey) -> &[Card] {
        match key {
            ColumnKey::ToDo => &self.to_do,
            ColumnKey::OnProgress => &self.on_progress,
            ColumnKey::Completed => &self.completed,
        }
    }

    fn column_mut(&mut self, key: ColumnKey) -> &mut Vec<Card> {
        match key {
            ColumnKey::ToDo => &mut self.to_do,
            ColumnKey::OnProgress => &mut self.on_progress,
            ColumnKey::Completed => &mut self.completed,
        }
    }

    /// Number of cards in a column
    pub fn len_of(&self, key: ColumnKey) -> usize {
        self.column(key).len()
    }

    /// Card count per column, in display order
    pub fn counts(&self) -> [(ColumnKey, usize); 3] {
        ColumnKey::ALL.map(|key| (key, self.len_of(key)))
    }

    /// Total number of cards on the board
    pub fn total_cards(&self) -> usize {
        ColumnKey::ALL.iter().map(|key| self.len_of(*key)).sum()
    }

    /// Iterates over every card together with its column
    pub fn iter(&self) -> impl Iterator<Item = (ColumnKey, &Card)> {
        ColumnKey::ALL
            .into_iter()
            .flat_map(move |key| self.column(key).iter().map(move |card| (key, card)))
    }

    /// Locates a card by id
    pub fn find_card(&self, id: &CardId) -> Option<(ColumnKey, usize)> {
        ColumnKey::ALL.into_iter().find_map(|key| {
            self.column(key)
                .iter()
                .position(|card| &card.id == id)
                .map(|index| (key, index))
        })
    }

    /// Gets a card by id
    pub fn get_card(&self, id: &CardId) -> Option<&Card> {
        self.find_card(id)
            .map(|(key, index)| &self.column(key)[index])
    }

    /// Checks that every card id is non-empty and appears exactly once
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (_, card) in self.iter() {
            if card.id.as_str().is_empty() {
                return Err(CardboardError::InvalidCardId(String::new()));
            }
            if !seen.insert(&card.id) {
                return Err(CardboardError::DuplicateCard(card.id.to_string()));
            }
        }
        Ok(())
    }

    /// Appends a card to the end of a column
    pub fn add_card(&mut self, key: ColumnKey, card: Card) -> Result<()> {
        if self.find_card(&card.id).is_some() {
            return Err(CardboardError::DuplicateCard(card.id.to_string()));
        }
        self.column_mut(key).push(card);
        Ok(())
    }

    /// Removes a card by id and returns it
    pub fn remove_card(&mut self, id: &CardId) -> Result<Card> {
        let (key, index) = self
            .find_card(id)
            .ok_or_else(|| CardboardError::CardNotFound(id.to_string()))?;
        Ok(self.column_mut(key).remove(index))
    }

    /// Moves the card at `from_index` of `from` to `to_index` of `to`.
    ///
    /// The card is removed before it is inserted, so a move inside one column
    /// indexes into the shortened sequence. A `to_index` past the end of the
    /// target appends. A `from_index` outside the source column is rejected
    /// and leaves the board untouched.
    pub fn move_card(
        &mut self,
        from: ColumnKey,
        from_index: usize,
        to: ColumnKey,
        to_index: usize,
    ) -> Result<()> {
        let source_len = self.len_of(from);
        if from_index >= source_len {
            return Err(CardboardError::IndexOutOfRange {
                column: from.as_str().to_string(),
                index: from_index,
                len: source_len,
            });
        }

        let card = self.column_mut(from).remove(from_index);
        let target = self.column_mut(to);
        let at = to_index.min(target.len());
        target.insert(at, card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_seed_board() {
        let board = Board::seed();

        assert_eq!(ids(&board.to_do), vec!["t1", "t2", "t3"]);
        assert_eq!(ids(&board.on_progress), vec!["p1", "p2"]);
        assert_eq!(ids(&board.completed), vec!["c1", "c2"]);
        assert_eq!(board.total_cards(), 7);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_counts() {
        let board = Board::seed();
        assert_eq!(
            board.counts(),
            [
                (ColumnKey::ToDo, 3),
                (ColumnKey::OnProgress, 2),
                (ColumnKey::Completed, 2)
            ]
        );
    }

    #[test]
    fn test_snapshot_format() {
        let mut board = Board::empty();
        board.on_progress.push(Card::new("a", "A", "first"));

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "toDo": [],
                "onProgress": [{"id": "a", "title": "A", "description": "first"}],
                "completed": []
            })
        );
    }

    #[test]
    fn test_snapshot_missing_column_is_rejected() {
        let result: std::result::Result<Board, _> =
            serde_json::from_str(r#"{"toDo": [], "onProgress": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_and_get_card() {
        let board = Board::seed();

        assert_eq!(
            board.find_card(&CardId::from("p2")),
            Some((ColumnKey::OnProgress, 1))
        );
        assert_eq!(
            board.get_card(&CardId::from("c1")).map(|c| c.title.as_str()),
            Some("Mobile App Design")
        );
        assert!(board.find_card(&CardId::from("zz")).is_none());
    }

    #[test]
    fn test_validate_detects_duplicates() {
        let mut board = Board::empty();
        board.to_do.push(Card::new("a", "A", ""));
        board.completed.push(Card::new("a", "A again", ""));

        assert!(matches!(
            board.validate(),
            Err(CardboardError::DuplicateCard(id)) if id == "a"
        ));
    }

    #[test]
    fn test_add_card_rejects_duplicate_id() {
        let mut board = Board::seed();

        board
            .add_card(ColumnKey::ToDo, Card::new("t4", "New", ""))
            .unwrap();
        assert_eq!(board.to_do.last().unwrap().id.as_str(), "t4");

        let err = board
            .add_card(ColumnKey::Completed, Card::new("t1", "Dup", ""))
            .unwrap_err();
        assert!(matches!(err, CardboardError::DuplicateCard(_)));
        assert_eq!(board.len_of(ColumnKey::Completed), 2);
    }

    #[test]
    fn test_remove_card() {
        let mut board = Board::seed();

        let removed = board.remove_card(&CardId::from("t2")).unwrap();
        assert_eq!(removed.title, "Research");
        assert_eq!(ids(&board.to_do), vec!["t1", "t3"]);

        assert!(board.remove_card(&CardId::from("t2")).is_err());
    }

    #[test]
    fn test_move_across_columns() {
        let mut board = Board::empty();
        board.to_do = vec![Card::new("a", "A", ""), Card::new("b", "B", "")];

        board
            .move_card(ColumnKey::ToDo, 0, ColumnKey::OnProgress, 0)
            .unwrap();

        assert_eq!(ids(&board.to_do), vec!["b"]);
        assert_eq!(ids(&board.on_progress), vec!["a"]);
        assert!(board.completed.is_empty());
    }

    #[test]
    fn test_move_within_column_reindexes() {
        let mut board = Board::seed();

        // t1 to the last slot: removed first, so index 2 is the end
        board.move_card(ColumnKey::ToDo, 0, ColumnKey::ToDo, 2).unwrap();
        assert_eq!(ids(&board.to_do), vec!["t2", "t3", "t1"]);

        board.move_card(ColumnKey::ToDo, 2, ColumnKey::ToDo, 0).unwrap();
        assert_eq!(ids(&board.to_do), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_move_to_own_position_is_noop() {
        let mut board = Board::seed();
        for key in ColumnKey::ALL {
            for index in 0..board.len_of(key) {
                board.move_card(key, index, key, index).unwrap();
            }
        }
        assert_eq!(board, Board::seed());
    }

    #[test]
    fn test_move_out_of_range_source_is_rejected() {
        let mut board = Board::seed();

        let err = board
            .move_card(ColumnKey::OnProgress, 2, ColumnKey::ToDo, 0)
            .unwrap_err();
        assert!(matches!(
            err,
            CardboardError::IndexOutOfRange { index: 2, len: 2, .. }
        ));
        assert_eq!(board, Board::seed());
    }

    #[test]
    fn test_move_past_end_of_target_appends() {
        let mut board = Board::seed();

        board
            .move_card(ColumnKey::ToDo, 0, ColumnKey::Completed, 99)
            .unwrap();
        assert_eq!(ids(&board.completed), vec!["c1", "c2", "t1"]);
        assert!(board.validate().is_ok());
    }
}
