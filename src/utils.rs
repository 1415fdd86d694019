//! # Uploads
//!
//! Multipart decoding for the two image-upload endpoints.
//!
//! Accepted files are never written anywhere. The raw bytes are base64
//! encoded into a `data:<mime>;base64,<payload>` URI and that string is what
//! gets stored, so the whole image stays resident in memory and in the JSON
//! responses. Demo-grade on purpose; a real deployment would hand the bytes
//! to an object store and keep only the URL.

use axum::body::Bytes;
use axum::extract::{multipart::Field, Multipart};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AppError;

/// Upload ceiling, enforced as a body limit on the upload routes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

pub struct GalleryUpload {
    pub image: ImageUpload,
    pub title: String,
    pub category: String,
}

/// Pulls the single `photo` file out of a politician photo upload.
pub async fn read_photo_upload(mut multipart: Multipart) -> Result<ImageUpload, AppError> {
    while let Some(field) = next_field(&mut multipart).await? {
        let name = field.name().map(str::to_owned);
        if name.as_deref() == Some("photo") {
            return read_image(field).await;
        }
    }

    Err(AppError::BadRequest("No file uploaded"))
}

/// Pulls the `image` file plus the `title` and `category` text fields out of
/// a gallery upload. Both text fields must be present and non-empty.
pub async fn read_gallery_upload(mut multipart: Multipart) -> Result<GalleryUpload, AppError> {
    let mut image = None;
    let mut title = None;
    let mut category = None;

    while let Some(field) = next_field(&mut multipart).await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => image = Some(read_image(field).await?),
            Some("title") => title = Some(read_text(field).await?),
            Some("category") => category = Some(read_text(field).await?),
            _ => {}
        }
    }

    let image = image.ok_or(AppError::BadRequest("No file uploaded"))?;
    let title = title.unwrap_or_default();
    let category = category.unwrap_or_default();
    if title.is_empty() || category.is_empty() {
        return Err(AppError::BadRequest("Title and category are required"));
    }

    Ok(GalleryUpload {
        image,
        title,
        category,
    })
}

async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>, AppError> {
    multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Invalid upload payload"))
}

async fn read_image(field: Field<'_>) -> Result<ImageUpload, AppError> {
    let mime = field.content_type().unwrap_or("").to_string();
    if !mime.starts_with("image/") {
        return Err(AppError::BadRequest("Only image files are allowed"));
    }

    let file_name = field.file_name().unwrap_or("upload").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|_| AppError::BadRequest("Invalid upload payload"))?;

    Ok(ImageUpload {
        file_name,
        mime,
        bytes,
    })
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|_| AppError::BadRequest("Invalid upload payload"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_embeds_mime_and_base64_payload() {
        let upload = ImageUpload {
            file_name: "x.png".to_string(),
            mime: "image/png".to_string(),
            bytes: Bytes::from_static(b"hello"),
        };

        assert_eq!(upload.to_data_url(), "data:image/png;base64,aGVsbG8=");
    }
}
