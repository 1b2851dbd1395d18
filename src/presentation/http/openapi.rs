// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::content::slugify,
        crate::presentation::http::controllers::content::analyze,
        crate::presentation::http::controllers::content::validate,
        crate::presentation::http::controllers::content::seo,
        crate::presentation::http::controllers::content::metadata,
        crate::presentation::http::controllers::content::prepare
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::SlugifyRequest,
            crate::presentation::http::controllers::content::AnalyzeRequest,
            crate::presentation::http::controllers::content::PrepareRequest,
            crate::application::dto::ContentRecordDto,
            crate::application::dto::CoverImageDto,
            crate::application::dto::PreparedContentDto,
            crate::application::dto::SlugDto,
            crate::application::dto::AnalysisDto,
            crate::application::dto::TocEntryDto,
            crate::application::dto::ValidationReportDto,
            crate::application::dto::SeoReportDto,
            crate::application::dto::PageMetadataDto,
            crate::application::dto::OpenGraphDto,
            crate::application::dto::TwitterCardDto,
            crate::application::dto::SocialImageDto,
            crate::application::dto::ShareLinksDto,
            crate::application::dto::MetadataBundleDto
        )
    ),
    tags(
        (name = "Content", description = "Content processing endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Content Core API",
        description = "Slugs, excerpts, read time, outlines, validation and SEO metadata for CMS content",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_PATH, get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
