// GET /avatars/:name - deterministic SVG identicon
use axum::extract::{Path, Query};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::avatar;

const DEFAULT_SIZE: u32 = 40;
const MAX_SIZE: u32 = 512;

#[derive(Debug, Default, Deserialize)]
pub struct AvatarQuery {
    pub size: Option<u32>,
}

/// Render the identicon for a display name. Same name, same image, so the
/// response is marked immutable for client caches.
pub async fn get(Path(name): Path<String>, Query(query): Query<AvatarQuery>) -> impl IntoResponse {
    let size = query.size.unwrap_or(DEFAULT_SIZE).clamp(1, MAX_SIZE);
    let svg = avatar::to_svg(&name, size);

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        svg,
    )
}
