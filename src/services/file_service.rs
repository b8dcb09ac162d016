//! File service for validating, persisting, and deleting uploaded files.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::errors::{DomainError, ErrorKind, ErrorResponse};
use crate::models::{InboundFile, UploadedFileRecord};
use crate::services::upload_policy::{UploadCategory, UploadPolicy, UploadPolicyRegistry};

/// A failure inside the file service.
///
/// Validation failures are [`DomainError`]s; filesystem failures stay plain
/// I/O errors so the dispatcher can report them as server faults.
#[derive(Debug)]
pub enum FileServiceError {
    Domain(DomainError),
    Io(std::io::Error),
}

impl fmt::Display for FileServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileServiceError::Domain(err) => err.fmt(f),
            FileServiceError::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for FileServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileServiceError::Domain(err) => Some(err),
            FileServiceError::Io(err) => Some(err),
        }
    }
}

impl From<DomainError> for FileServiceError {
    fn from(err: DomainError) -> Self {
        FileServiceError::Domain(err)
    }
}

impl From<std::io::Error> for FileServiceError {
    fn from(err: std::io::Error) -> Self {
        FileServiceError::Io(err)
    }
}

impl ResponseError for FileServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            FileServiceError::Domain(err) => ResponseError::status_code(err),
            FileServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Fallback rendering; the dispatcher rewrites the body with the request path.
    fn error_response(&self) -> HttpResponse {
        match self {
            FileServiceError::Domain(err) => err.error_response(),
            FileServiceError::Io(err) => {
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "",
                    ErrorKind::ServerError.status_code(),
                    format!("{} [{}]", ErrorKind::ServerError.message(), err),
                ))
            }
        }
    }
}

/// Service for file operations (upload, deletion).
///
/// Holds only the upload root and the read-only policy registry, so a single
/// instance is safe to share across request workers.
pub struct FileService {
    root: PathBuf,
    policies: UploadPolicyRegistry,
}

impl FileService {
    pub fn new(root: PathBuf, policies: UploadPolicyRegistry) -> Self {
        Self { root, policies }
    }

    pub fn policy_for(&self, category: UploadCategory) -> &UploadPolicy {
        self.policies.policy_for(category)
    }

    /// Validate `file` against the category's policy and persist it.
    ///
    /// The stored name is a 32-hex-character identifier plus the original
    /// extension, so concurrent uploads of the same original filename never
    /// collide; an identifier collision overwrites silently rather than
    /// failing.
    pub fn upload(
        &self,
        file: &InboundFile,
        category: UploadCategory,
    ) -> Result<UploadedFileRecord, FileServiceError> {
        let policy = self.policies.policy_for(category);
        validate(file, policy)?;

        let extension = extension_of(&file.original_name).to_lowercase();
        let stored_name = format!("{}.{}", Uuid::new_v4().simple(), extension);

        let directory = self.root.join(&policy.destination_subpath);
        fs::create_dir_all(&directory)?;

        let destination = directory.join(&stored_name);
        fs::write(&destination, &file.data)?;

        // Canonicalization can only fail on exotic filesystems; the joined
        // path is still a correct record in that case.
        let storage_path = match destination.canonicalize() {
            Ok(path) => path,
            Err(_) => destination,
        };
        info!("stored upload at {}", storage_path.display());

        Ok(UploadedFileRecord {
            original_name: file.original_name.clone(),
            stored_name,
            storage_path: storage_path.to_string_lossy().into_owned(),
            size_bytes: file.size(),
        })
    }

    /// Remove a previously stored file.
    ///
    /// A missing file is a well-defined rejection, not a crash; deleting the
    /// same path twice therefore fails the second time.
    pub fn delete(&self, path: &Path) -> Result<bool, FileServiceError> {
        if !path.exists() {
            warn!("delete requested for missing file {}", path.display());
            return Err(DomainError::new(ErrorKind::NoFileDataError).into());
        }

        fs::remove_file(path)?;
        info!("deleted stored file {}", path.display());
        Ok(true)
    }
}

fn validate(file: &InboundFile, policy: &UploadPolicy) -> Result<(), DomainError> {
    if file.is_empty() {
        return Err(DomainError::new(ErrorKind::FileUploadError));
    }

    if file.size() > policy.max_size_bytes {
        return Err(DomainError::new(ErrorKind::FileSizeExceedingError));
    }

    if !policy.allows_extension(extension_of(&file.original_name)) {
        return Err(DomainError::new(ErrorKind::FileExtensionError));
    }

    Ok(())
}

/// Substring after the last `.`; the whole name when there is no dot, which
/// then fails the extension check rather than being special-cased.
fn extension_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> FileService {
        FileService::new(
            dir.path().to_path_buf(),
            UploadPolicyRegistry::new(1024).unwrap(),
        )
    }

    fn assert_kind(err: FileServiceError, kind: ErrorKind) {
        match err {
            FileServiceError::Domain(domain) => assert_eq!(domain.kind(), kind),
            FileServiceError::Io(io) => panic!("expected {:?}, got io error {}", kind, io),
        }
    }

    #[test]
    fn test_upload_stores_file_under_category_subpath() {
        let dir = tempfile::tempdir().unwrap();
        let file = InboundFile::new("photo.PNG", b"abc".to_vec());

        let record = service(&dir).upload(&file, UploadCategory::Sample).unwrap();

        assert_eq!(record.original_name, "photo.PNG");
        assert_eq!(record.size_bytes, 3);
        assert_eq!(record.stored_name.len(), 36);
        assert!(record.stored_name.ends_with(".png"));
        assert!(record.stored_name[..32]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(record
            .storage_path
            .ends_with(&format!("sample/{}", record.stored_name)));
        assert_eq!(fs::read(&record.storage_path).unwrap(), b"abc".to_vec());
    }

    #[test]
    fn test_upload_rejects_empty_file_regardless_of_category() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let file = InboundFile::new("photo.png", Vec::new());

        let err = svc.upload(&file, UploadCategory::Sample).unwrap_err();
        assert_kind(err, ErrorKind::FileUploadError);

        let err = svc.upload(&file, UploadCategory::User).unwrap_err();
        assert_kind(err, ErrorKind::FileUploadError);
    }

    #[test]
    fn test_upload_rejects_oversized_file_and_accepts_exact_limit() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);

        let too_big = InboundFile::new("photo.png", vec![0u8; 1025]);
        let err = svc.upload(&too_big, UploadCategory::Sample).unwrap_err();
        assert_kind(err, ErrorKind::FileSizeExceedingError);

        let at_limit = InboundFile::new("photo.png", vec![0u8; 1024]);
        let record = svc.upload(&at_limit, UploadCategory::Sample).unwrap();
        assert_eq!(record.size_bytes, 1024);
    }

    #[test]
    fn test_upload_rejects_disallowed_extension() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);

        let gif = InboundFile::new("photo.GIF", b"abc".to_vec());
        let err = svc.upload(&gif, UploadCategory::Sample).unwrap_err();
        assert_kind(err, ErrorKind::FileExtensionError);

        let no_extension = InboundFile::new("photo", b"abc".to_vec());
        let err = svc.upload(&no_extension, UploadCategory::Sample).unwrap_err();
        assert_kind(err, ErrorKind::FileExtensionError);
    }

    #[test]
    fn test_same_original_name_gets_distinct_stored_names() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let file = InboundFile::new("photo.png", b"abc".to_vec());

        let first = svc.upload(&file, UploadCategory::Sample).unwrap();
        let second = svc.upload(&file, UploadCategory::Sample).unwrap();

        assert_ne!(first.stored_name, second.stored_name);
        assert!(Path::new(&first.storage_path).exists());
        assert!(Path::new(&second.storage_path).exists());
    }

    #[test]
    fn test_delete_existing_then_missing() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let file = InboundFile::new("photo.png", b"abc".to_vec());
        let record = svc.upload(&file, UploadCategory::Sample).unwrap();

        let stored = PathBuf::from(&record.storage_path);
        assert!(svc.delete(&stored).unwrap());
        assert!(!stored.exists());

        let err = svc.delete(&stored).unwrap_err();
        assert_kind(err, ErrorKind::NoFileDataError);
    }

    #[test]
    fn test_delete_rejects_unknown_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = service(&dir)
            .delete(&dir.path().join("nothing-here.png"))
            .unwrap_err();
        assert_kind(err, ErrorKind::NoFileDataError);
    }
}
