//! Multipart form reading for donation submissions
//!
//! Fields: `name`, `amount` (text) and `imageString` (file). Unknown
//! fields are skipped. File parts are buffered up to the size limit and
//! no further.

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;

use crate::application::{ImageUpload, SubmitDonationInput};
use crate::error::{DonationError, DonationResult};

pub const NAME_FIELD: &str = "name";
pub const AMOUNT_FIELD: &str = "amount";
pub const IMAGE_FIELD: &str = "imageString";

pub async fn read_submission(
    mut multipart: Multipart,
    max_image_bytes: usize,
) -> DonationResult<SubmitDonationInput> {
    let mut input = SubmitDonationInput::default();

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        match field.name() {
            Some(NAME_FIELD) => {
                input.name = Some(field.text().await.map_err(map_multipart_error)?);
            }
            Some(AMOUNT_FIELD) => {
                input.amount = Some(field.text().await.map_err(map_multipart_error)?);
            }
            Some(IMAGE_FIELD) => {
                input.images.push(read_image(field, max_image_bytes).await?);
            }
            _ => {}
        }
    }

    Ok(input)
}

async fn read_image(mut field: Field<'_>, max_bytes: usize) -> DonationResult<ImageUpload> {
    let mut upload = ImageUpload {
        content_type: field.content_type().map(str::to_owned),
        ..Default::default()
    };

    while let Some(chunk) = field.chunk().await.map_err(map_multipart_error)? {
        if upload.bytes.len() + chunk.len() > max_bytes {
            upload.oversized = true;
            upload.bytes = Vec::new();
            break;
        }
        upload.bytes.extend_from_slice(&chunk);
    }

    Ok(upload)
}

/// The body limit sits just above the image limit, so a body that is
/// too large can only be an oversized image. This is reported as soon as
/// the limit is hit, before `name` and `amount` are validated.
fn map_multipart_error(err: MultipartError) -> DonationError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        DonationError::ImageTooLarge
    } else {
        DonationError::InvalidBody(err.body_text())
    }
}
