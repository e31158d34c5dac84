use axum::{ routing::post, Router, response::Json };
use axum::extract::{ DefaultBodyLimit, Extension };
use axum::extract::rejection::JsonRejection;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::error::Error;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

mod aggregator;
mod analyzer;
mod associator;
mod config;
mod error;
mod lexicon;
mod locator;
mod segmenter;
mod telemetry;
mod timing;
mod tokenizer;

use aggregator::AspectRating;
use analyzer::ReviewAnalyzer;
use error::ApiError;

/// Body of `POST /api/reviews`.
#[derive(Debug, Deserialize)]
struct ReviewRequest {
    // Published field name of the API, misspelling included.
    #[serde(rename = "reviewTest", alias = "reviewText", default)]
    review_text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = config::Config::from_env()?;
    telemetry::init_tracing(config.log_json);

    // Build the lexicon up front instead of on the first request
    Lazy::force(&lexicon::DEFAULT_LEXICON);
    let app = app(ReviewAnalyzer::with_default_lexicon(), config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on: http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn app(analyzer: ReviewAnalyzer<'static>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/reviews", post(analyze_review))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(timing::timing_middleware))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_body_bytes))
                .layer(Extension(analyzer))
        )
}

async fn analyze_review(
    Extension(analyzer): Extension<ReviewAnalyzer<'static>>,
    payload: Result<Json<ReviewRequest>, JsonRejection>
) -> Result<Json<Vec<AspectRating>>, ApiError> {
    let Json(request) = payload?;

    // An absent review is treated like an empty one
    let ratings = request.review_text
        .as_deref()
        .map(|text| analyzer.analyze(text))
        .unwrap_or_default();

    Ok(Json(ratings))
}
