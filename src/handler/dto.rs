//! Wire shapes for the HTTP API.
//!
//! Responses flatten entities: a board response carries no lists and a list
//! response carries no cards. Fetch the children through their own routes.

use crate::domain::{Board, Card, List};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub id: i64,
    pub title: String,
    pub board_id: i64,
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        Self {
            id: list.id,
            title: list.title,
            board_id: list.board_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub board_id: i64,
    pub list_id: i64,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            title: card.title,
            description: card.description,
            board_id: card.board_id,
            list_id: card.list_id,
        }
    }
}

/// Query string accepted by every GET route
#[derive(Debug, Default, Deserialize)]
pub struct FetchQuery {
    pub id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub board_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub board_id: i64,
    #[serde(default)]
    pub list_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub board_id: i64,
    #[serde(default)]
    pub list_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<UpdateCardRequest> for Card {
    fn from(req: UpdateCardRequest) -> Self {
        Card {
            id: req.id,
            title: req.title,
            description: req.description,
            board_id: req.board_id,
            list_id: req.list_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteCardRequest {
    #[serde(default)]
    pub board_id: i64,
    #[serde(default)]
    pub list_id: i64,
    #[serde(default)]
    pub card_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_response_drops_lists() {
        let mut board = Board::new(1, "Sprint 1".to_string());
        board.add_list(List::new(1, "To Do".to_string(), 1));

        let json = serde_json::to_value(BoardResponse::from(board)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "title": "Sprint 1" }));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let req: DeleteCardRequest = serde_json::from_str(r#"{"list_id": 4}"#).unwrap();
        assert_eq!((req.board_id, req.list_id, req.card_id), (0, 4, 0));
    }
}
