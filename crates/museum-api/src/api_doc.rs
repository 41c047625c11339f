//! OpenAPI documentation, served at [`OPENAPI_JSON_PATH`](crate::constants::OPENAPI_JSON_PATH).

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use museum_core::models;

#[allow(deprecated)]
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Winamp Skin Museum API",
        version = "0.1.0",
        description = "Skin review and upload status API (v0). Review mutations require a bearer token (master API key or HS256 JWT); requesting an NSFW review and looking up upload statuses are public."
    ),
    paths(
        // Review
        handlers::review::reject_skin,
        handlers::review::approve_skin,
        handlers::review::mark_skin_nsfw,
        handlers::review::request_nsfw_review_for_skin,
        // Uploads
        handlers::upload_status::upload_statuses,
        handlers::upload_status::upload_statuses_by_md5,
    ),
    components(
        schemas(
            models::ReviewStatus,
            models::SkinResponse,
            models::ReviewMutationResponse,
            models::SkinUploadStatus,
            models::SkinUpload,
            models::UploadStatusesRequest,
            models::UploadStatusesByMd5Request,
            models::ReviewEventKind,
            models::ReviewEvent,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "review", description = "Skin moderation"),
        (name = "uploads", description = "Upload status lookups"),
    )
)]
pub struct ApiDoc;
