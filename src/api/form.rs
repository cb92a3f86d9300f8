//! Multipart product form parsing.
//!
//! Text parts become `ProductFields`; a `photo` file part is written to the
//! upload directory and handed over as a `StagedFile`.

use std::path::Path;

use axum::extract::Multipart;
use tracing::warn;

use crate::catalog::{ProductFields, StagedFile};
use crate::error::{CatalogError, Result};

/// Name of the multipart part carrying the photo file.
pub const PHOTO_FIELD: &str = "photo";

/// Reads every part of a product form.
///
/// Blank text parts count as absent. Unknown parts are ignored. A photo
/// staged before a later part fails to parse is removed again.
pub async fn read_product_form(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> Result<(ProductFields, Option<StagedFile>)> {
    let mut fields = ProductFields::default();
    let mut photo = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == PHOTO_FIELD {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field.bytes().await.map_err(invalid_form)?;
            if bytes.is_empty() {
                continue;
            }
            let staged = StagedFile::write(upload_dir, &file_name, &bytes)
                .await
                .map_err(|e| CatalogError::Internal(format!("staging upload: {}", e)))?;
            photo = Some(staged);
            continue;
        }

        let text = field.text().await.map_err(invalid_form)?;
        let value = text.trim();
        if value.is_empty() {
            continue;
        }

        match name.as_str() {
            "name" => fields.name = Some(value.to_string()),
            "category" => fields.category = Some(value.to_string()),
            "price" => fields.price = Some(parse_number(&name, value)?),
            "stock" => fields.stock = Some(parse_number(&name, value)?),
            other => warn!(part = %other, "ignoring unknown form part"),
        }
    }

    Ok((fields, photo))
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CatalogError::Validation(format!("Invalid {}: {}", name, value)))
}

fn invalid_form(err: axum::extract::multipart::MultipartError) -> CatalogError {
    CatalogError::Validation(format!("Invalid form data: {}", err))
}
