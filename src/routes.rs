//! # Routes
//!
//! One handler per endpoint, thin adapters between HTTP and the storage
//! layer. Validation happens in the extractors (`ValidJson` for JSON bodies,
//! the upload readers for multipart); storage misses are mapped to the
//! status each endpoint promises: 400 on the PATCH routes, 500 on the photo
//! upload.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::AppError,
    schema::{
        ContactMessage, GalleryImage, InsertContactMessage, InsertGalleryImage, InsertMilestone,
        JourneyMilestone, MilestonePatch, Politician, PoliticianPatch,
    },
    state::AppState,
    storage::POLITICIAN_ID,
    utils::{read_gallery_upload, read_photo_upload},
};

/// JSON body extractor that turns every rejection (malformed JSON, missing
/// or mistyped fields) into a plain 400 instead of leaking parser detail.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid request payload"))?;

        Ok(Self(value))
    }
}

pub async fn get_politician_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Politician>, AppError> {
    state
        .storage
        .get_politician()
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Politician not found"))
}

pub async fn update_politician_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(patch): ValidJson<PoliticianPatch>,
) -> Result<Json<Politician>, AppError> {
    state
        .storage
        .update_politician(patch)
        .await
        .map(Json)
        .map_err(|_| AppError::BadRequest("Invalid politician data"))
}

pub async fn upload_photo_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let upload = read_photo_upload(multipart).await?;
    info!(
        file_name = %upload.file_name,
        mime = %upload.mime,
        size = upload.bytes.len(),
        "received photo upload"
    );

    let patch = PoliticianPatch {
        photo_url: Some(upload.to_data_url()),
        ..PoliticianPatch::default()
    };
    let politician = state
        .storage
        .update_politician(patch)
        .await
        .map_err(|_| AppError::Internal("Failed to upload photo"))?;

    Ok(Json(json!({
        "photoUrl": politician.photo_url,
        "message": "Photo uploaded successfully"
    })))
}

pub async fn get_journey_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<JourneyMilestone>> {
    Json(state.storage.get_journey_milestones().await)
}

pub async fn create_milestone_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(insert): ValidJson<InsertMilestone>,
) -> impl IntoResponse {
    let milestone = state.storage.create_journey_milestone(insert).await;

    (StatusCode::CREATED, Json(milestone))
}

pub async fn update_milestone_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ValidJson(patch): ValidJson<MilestonePatch>,
) -> Result<Json<JourneyMilestone>, AppError> {
    state
        .storage
        .update_journey_milestone(id, patch)
        .await
        .map(Json)
        .map_err(|_| AppError::BadRequest("Invalid milestone data"))
}

pub async fn delete_milestone_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> StatusCode {
    state.storage.delete_journey_milestone(id).await;

    StatusCode::NO_CONTENT
}

pub async fn get_gallery_handler(State(state): State<Arc<AppState>>) -> Json<Vec<GalleryImage>> {
    Json(state.storage.get_gallery_images().await)
}

pub async fn upload_gallery_image_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_gallery_upload(multipart).await?;

    let image = state
        .storage
        .create_gallery_image(InsertGalleryImage {
            title: upload.title,
            image_url: upload.image.to_data_url(),
            category: upload.category,
            politician_id: Some(POLITICIAN_ID),
        })
        .await;

    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn delete_gallery_image_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> StatusCode {
    state.storage.delete_gallery_image(id).await;

    StatusCode::NO_CONTENT
}

pub async fn create_contact_handler(
    State(state): State<Arc<AppState>>,
    ValidJson(insert): ValidJson<InsertContactMessage>,
) -> impl IntoResponse {
    let message = state.storage.create_contact_message(insert).await;
    info!(
        id = message.id,
        email = %message.email,
        subject = %message.subject,
        "contact message received"
    );

    (
        StatusCode::CREATED,
        Json(json!({ "message": "Message sent successfully" })),
    )
}

pub async fn get_contact_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ContactMessage>> {
    Json(state.storage.get_contact_messages().await)
}
