//! HTTP Handlers

use auth::AuthContext;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{CreateTransactionInput, CreateTransactionUseCase};
use crate::domain::repository::TransactionRepository;
use crate::error::{TransactionError, TransactionResult};
use crate::presentation::dto::{
    CreateTransactionRequest, CreatedTransactionResponse, TransactionListResponse,
    TransactionResponse,
};

/// Shared state for transaction handlers
#[derive(Clone)]
pub struct TransactionAppState<R>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/transaction (admin)
pub async fn create<R>(
    State(state): State<TransactionAppState<R>>,
    caller: AuthContext,
    body: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> TransactionResult<(StatusCode, Json<CreatedTransactionResponse>)>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| TransactionError::InvalidBody(e.body_text()))?;

    let use_case = CreateTransactionUseCase::new(state.repo.clone());
    let transaction = use_case
        .execute(CreateTransactionInput {
            amount: req.amount,
            recipient: req.recipient,
            purpose: req.purpose,
            recorded_by: Some(caller.user_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedTransactionResponse {
            transaction: TransactionResponse::from(&transaction),
        }),
    ))
}

/// GET /api/transaction (public)
pub async fn list<R>(
    State(state): State<TransactionAppState<R>>,
) -> TransactionResult<Json<TransactionListResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let transactions = state.repo.list().await?;
    Ok(Json(TransactionListResponse {
        transactions: transactions.iter().map(TransactionResponse::from).collect(),
    }))
}
