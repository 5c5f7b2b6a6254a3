use axum::{
    extract::{Query, State},
    response::Json,
};

use super::{
    apply_sort,
    dto::{CreateListRequest, FetchQuery, ListResponse},
    ApiError, AppState,
};

/// `GET /lists`: all lists, or `?id=` for a single one
pub async fn get_lists(
    State(state): State<AppState>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<Vec<ListResponse>>, ApiError> {
    let mut lists = state.lists.get_lists(query.id).await?;
    apply_sort(&mut lists, &query)?;

    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

/// `POST /lists`: create a list on an existing board
pub async fn create_list(
    State(state): State<AppState>,
    Json(body): Json<CreateListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    if body.title.is_empty() {
        return Err(ApiError::invalid("title is required"));
    }
    if body.board_id == 0 {
        return Err(ApiError::invalid("board id is required"));
    }

    let board_id = body.board_id;
    let list = state.lists.create_list(body.title, board_id).await?;
    if list.is_zero() {
        return Err(ApiError::NotFound(format!("board {} not found", board_id)));
    }

    tracing::info!(list_id = list.id, board_id, "list created");
    Ok(Json(list.into()))
}
