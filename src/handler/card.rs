use axum::{
    extract::{Query, State},
    response::Json,
};

use super::{
    apply_sort,
    dto::{CardResponse, CreateCardRequest, DeleteCardRequest, FetchQuery, UpdateCardRequest},
    ApiError, AppState,
};

/// `GET /cards`: all cards, or `?id=` for a single one
pub async fn get_cards(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<Vec<CardResponse>>, ApiError> {
    let mut cards = state.cards.get_cards(query.id).await?;
    apply_sort(&mut cards, &query)?;

    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// `POST /cards`: create a card in an existing list
pub async fn create_card(
    State(state): State<AppState>,
    Json(body): Json<CreateCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    if body.title.is_empty() {
        return Err(ApiError::invalid("title is required"));
    }
    if body.board_id == 0 {
        return Err(ApiError::invalid("board id is required"));
    }
    if body.list_id == 0 {
        return Err(ApiError::invalid("list id is required"));
    }

    let (board_id, list_id) = (body.board_id, body.list_id);
    let mut card = state
        .cards
        .create_card(body.title, board_id, list_id)
        .await?;
    if card.is_zero() {
        return Err(ApiError::NotFound(format!(
            "list {} not found in board {}",
            list_id, board_id
        )));
    }

    // The store creates cards without a description; fill it in afterwards
    if !body.description.is_empty() {
        card.description = body.description;
        card = state.cards.update_card(card).await?;
    }

    tracing::info!(card_id = card.id, list_id, board_id, "card created");
    Ok(Json(card.into()))
}

/// `PUT /cards`: replace title and description of a card
pub async fn update_card(
    State(state): State<AppState>,
    Json(body): Json<UpdateCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    if body.board_id == 0 {
        return Err(ApiError::invalid("board id is required"));
    }
    if body.list_id == 0 {
        return Err(ApiError::invalid("list id is required"));
    }
    if body.id == 0 {
        return Err(ApiError::invalid("card id is required"));
    }

    let card = state.cards.update_card(body.into()).await?;
    Ok(Json(card.into()))
}

/// `DELETE /cards`: remove a card, returning it
pub async fn delete_card(
    State(state): State<AppState>,
    Json(body): Json<DeleteCardRequest>,
) -> Result<Json<CardResponse>, ApiError> {
    if body.board_id == 0 {
        return Err(ApiError::invalid("board id is required"));
    }
    if body.list_id == 0 {
        return Err(ApiError::invalid("list id is required"));
    }
    if body.card_id == 0 {
        return Err(ApiError::invalid("card id is required"));
    }

    let card = state
        .cards
        .delete_card(body.board_id, body.list_id, body.card_id)
        .await?;

    tracing::info!(card_id = card.id, "card deleted");
    Ok(Json(card.into()))
}
