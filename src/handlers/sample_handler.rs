//! Sample content handlers.
//!
//! Creation and listing of samples mostly exercise the validation and error
//! pipeline; row storage and retrieval belong to the persistence collaborator.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_SAMPLES_RETRIEVED, MSG_SAMPLE_CREATED};
use crate::errors::DomainError;
use crate::models::{ApiResponse, CreateSampleRequest, SampleListQuery, SamplePage};
use crate::validators::{validate_sort_field, validation_errors_to_domain_error, SAMPLE_SORT_FIELDS};

/// Create a sample entry after field validation.
pub async fn create_sample(
    body: web::Json<CreateSampleRequest>,
) -> Result<HttpResponse, DomainError> {
    body.validate().map_err(validation_errors_to_domain_error)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_SAMPLE_CREATED, body.into_inner())))
}

/// List samples with pagination and an optional, checked sort field.
pub async fn list_samples(
    query: web::Query<SampleListQuery>,
) -> Result<HttpResponse, DomainError> {
    if let Some(sort) = query.sort.as_deref() {
        validate_sort_field(sort, &SAMPLE_SORT_FIELDS)?;
    }

    let query = query.into_inner();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_SAMPLES_RETRIEVED,
        SamplePage {
            page: query.page,
            size: query.size,
            sort: query.sort,
        },
    )))
}
