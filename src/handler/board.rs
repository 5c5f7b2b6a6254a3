use axum::{
    extract::{Query, State},
    response::Json,
};

use super::{
    apply_sort,
    dto::{BoardResponse, CreateBoardRequest, FetchQuery},
    ApiError, AppState,
};

/// `GET /boards`: all boards, optionally sorted
pub async fn get_boards(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<Vec<BoardResponse>>, ApiError> {
    let mut boards = state.boards.get_boards().await?;
    apply_sort(&mut boards, &query)?;

    Ok(Json(boards.into_iter().map(BoardResponse::from).collect()))
}

/// `POST /boards`: create a board
pub async fn create_board(
    State(state): State<AppState>,
    Json(body): Json<CreateBoardRequest>,
) -> Result<Json<BoardResponse>, ApiError> {
    if body.title.is_empty() {
        return Err(ApiError::invalid("title is required"));
    }

    let board = state.boards.create_board(body.title).await?;
    tracing::info!(board_id = board.id, "board created");
    Ok(Json(board.into()))
}
