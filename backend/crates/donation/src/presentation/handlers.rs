//! HTTP Handlers

use auth::AuthContext;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::application::{SubmitDonationUseCase, UpdateStatusInput, UpdateStatusUseCase};
use crate::domain::repository::{DonationRepository, ImageHost};
use crate::error::{DonationError, DonationResult};
use crate::presentation::dto::{CreatedDonationResponse, DonationResponse, UpdateStatusRequest};
use crate::presentation::multipart::read_submission;

/// Shared state for the submission handler
pub struct DonationAppState<D, H>
where
    D: DonationRepository + Send + Sync + 'static,
    H: ImageHost + Send + Sync + 'static,
{
    pub repo: Arc<D>,
    pub host: Arc<H>,
    pub config: Arc<DonationConfig>,
}

// Manual impl: derive would require `D: Clone` and `H: Clone`
impl<D, H> Clone for DonationAppState<D, H>
where
    D: DonationRepository + Send + Sync + 'static,
    H: ImageHost + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            host: self.host.clone(),
            config: self.config.clone(),
        }
    }
}

/// Shared state for admin donation handlers
pub struct DonationAdminState<D>
where
    D: DonationRepository + Send + Sync + 'static,
{
    pub repo: Arc<D>,
}

impl<D> Clone for DonationAdminState<D>
where
    D: DonationRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Submit
// ============================================================================

/// POST /api/donation
pub async fn submit<D, H>(
    State(state): State<DonationAppState<D, H>>,
    caller: AuthContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> DonationResult<(StatusCode, Json<CreatedDonationResponse>)>
where
    D: DonationRepository + Send + Sync + 'static,
    H: ImageHost + Send + Sync + 'static,
{
    let multipart = multipart.map_err(|e| DonationError::InvalidBody(e.body_text()))?;

    let mut input = read_submission(multipart, state.config.max_image_bytes).await?;
    input.submitted_by = Some(caller.user_id);

    let use_case =
        SubmitDonationUseCase::new(state.repo.clone(), state.host.clone(), state.config.clone());
    let donation = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDonationResponse {
            donation: DonationResponse::from(&donation),
        }),
    ))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/donations
pub async fn list<D>(
    State(state): State<DonationAdminState<D>>,
) -> DonationResult<Json<Vec<DonationResponse>>>
where
    D: DonationRepository + Send + Sync + 'static,
{
    let donations = state.repo.list().await?;
    Ok(Json(donations.iter().map(DonationResponse::from).collect()))
}

/// PATCH /api/admin/donations/{id}
pub async fn update_status<D>(
    State(state): State<DonationAdminState<D>>,
    Path(donation_id): Path<String>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> DonationResult<Json<DonationResponse>>
where
    D: DonationRepository + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| DonationError::InvalidBody(e.body_text()))?;

    let status = req
        .status
        .as_ref()
        .and_then(|v| v.as_str())
        .map(str::to_owned);

    let use_case = UpdateStatusUseCase::new(state.repo.clone());
    let donation = use_case
        .execute(UpdateStatusInput {
            donation_id,
            status,
        })
        .await?;

    Ok(Json(DonationResponse::from(&donation)))
}
