// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::PrepareContentCommand,
    dto::{
        AnalysisDto, ContentRecordDto, MetadataBundleDto, PreparedContentDto, SeoReportDto,
        SlugDto, ValidationReportDto,
    },
    error::ApplicationError,
    queries::content::{
        AnalyzeContentQuery, ContentMetadataQuery, ReviewContentQuery, SlugifyQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlugifyRequest {
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// HTML string or rich-text document. `content` is accepted as an alias.
    #[serde(default, alias = "content")]
    #[schema(value_type = Object)]
    pub body: Option<Value>,
    /// Excerpt length in characters; 160 when omitted.
    #[serde(default)]
    pub excerpt_length: Option<usize>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRequest {
    #[serde(flatten)]
    pub record: ContentRecordDto,
    /// Re-derive the slug from the title even when one is set.
    #[serde(default)]
    pub regenerate_slug: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/content/slugify",
    request_body = SlugifyRequest,
    responses(
        (status = 200, description = "URL slug derived from the title.", body = SlugDto)
    ),
    tag = "Content"
)]
pub async fn slugify(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SlugifyRequest>,
) -> Json<SlugDto> {
    Json(state.services.content_queries.slugify(SlugifyQuery {
        title: payload.title,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/content/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Plain text, word count, read time, excerpt and outline.", body = AnalysisDto)
    ),
    tag = "Content"
)]
pub async fn analyze(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalysisDto> {
    Json(state.services.content_queries.analyze(AnalyzeContentQuery {
        title: payload.title,
        body: payload.body,
        excerpt_length: payload.excerpt_length,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/content/validate",
    request_body = ContentRecordDto,
    responses(
        (status = 200, description = "Every failed check, in order.", body = ValidationReportDto)
    ),
    tag = "Content"
)]
pub async fn validate(
    Extension(state): Extension<HttpState>,
    Json(record): Json<ContentRecordDto>,
) -> Json<ValidationReportDto> {
    Json(
        state
            .services
            .content_queries
            .validate(ReviewContentQuery { record }),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/content/seo",
    request_body = ContentRecordDto,
    responses(
        (status = 200, description = "SEO score out of 100 with one warning per failed rule.", body = SeoReportDto)
    ),
    tag = "Content"
)]
pub async fn seo(
    Extension(state): Extension<HttpState>,
    Json(record): Json<ContentRecordDto>,
) -> Json<SeoReportDto> {
    Json(
        state
            .services
            .content_queries
            .score_seo(ReviewContentQuery { record }),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/content/metadata",
    request_body = ContentRecordDto,
    responses(
        (status = 200, description = "Page metadata, JSON-LD blocks and share links.", body = MetadataBundleDto),
        (status = 400, description = "The record slug is not usable in a URL.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn metadata(
    Extension(state): Extension<HttpState>,
    Json(record): Json<ContentRecordDto>,
) -> HttpResult<Json<MetadataBundleDto>> {
    state
        .services
        .content_queries
        .metadata(ContentMetadataQuery { record })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/content/prepare",
    request_body = PrepareRequest,
    responses(
        (status = 200, description = "Record with derived fields filled, plus its SEO report.", body = PreparedContentDto),
        (status = 400, description = "Record failed validation; `details` lists every problem.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn prepare(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PrepareRequest>,
) -> HttpResult<Json<PreparedContentDto>> {
    let command = PrepareContentCommand::builder()
        .record(payload.record)
        .regenerate_slug(payload.regenerate_slug)
        .build()
        .map_err(ApplicationError::validation)
        .into_http()?;

    state
        .services
        .content_commands
        .prepare_content(command)
        .into_http()
        .map(Json)
}
