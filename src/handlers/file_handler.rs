//! File upload and deletion handlers.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;
use log::info;
use std::path::Path;

use crate::constants::{MSG_FILE_DELETED, MSG_FILE_UPLOADED};
use crate::errors::{DomainError, ErrorKind};
use crate::models::{ApiResponse, DeleteFileQuery, InboundFile};
use crate::services::{FileService, UploadCategory};

/// Upload a file into a category.
///
/// Expects a multipart part with field name "file". The part is buffered and
/// handed to the file service, which validates it against the category's
/// policy before persisting.
pub async fn upload_file(
    file_service: web::Data<FileService>,
    path: web::Path<String>,
    mut payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    let category: UploadCategory = path.into_inner().parse()?;
    let max_bytes = file_service.policy_for(category).max_size_bytes;

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let content_disposition = match field.content_disposition() {
            Some(cd) => cd,
            None => continue,
        };
        if content_disposition.get_name().unwrap_or("") != "file" {
            continue;
        }
        let original_name = content_disposition.get_filename().unwrap_or("").to_string();

        // Stop buffering the moment the policy limit is passed instead of
        // holding an arbitrarily large body in memory.
        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk?;
            if (data.len() + bytes.len()) as u64 > max_bytes {
                return Err(DomainError::new(ErrorKind::FileSizeExceedingError).into());
            }
            data.extend_from_slice(&bytes);
        }

        let record = file_service.upload(&InboundFile::new(original_name, data), category)?;
        info!(
            "uploaded '{}' to category {} as {}",
            record.original_name, category, record.stored_name
        );
        return Ok(HttpResponse::Created().json(ApiResponse::success(MSG_FILE_UPLOADED, record)));
    }

    Err(DomainError::new(ErrorKind::RequiredFileError).into())
}

/// Delete a stored file by its storage path.
pub async fn delete_file(
    file_service: web::Data<FileService>,
    query: web::Query<DeleteFileQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let deleted = file_service.delete(Path::new(&query.path))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_FILE_DELETED, deleted)))
}
