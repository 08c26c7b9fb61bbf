use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::{activities_service, signup_service};

pub async fn root_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/static/index.html")])
}

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let overview = activities_service::activities_overview(&pool).await?;
    Ok(Json(overview))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, AppError> {
    let message = signup_service::signup(&pool, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, AppError> {
    let message = signup_service::unregister(&pool, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}
