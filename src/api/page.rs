//! Server-rendered single page: title picker, trigger button, result cards.

use std::fmt::Write;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use super::AppState;
use crate::{
    error::{AppError, ARTIFACTS_MISSING_MESSAGE, NOT_FOUND_MESSAGE},
    middleware::RequestId,
    models::Recommendation,
    services::DEFAULT_RECOMMENDATIONS,
};

const PAGE_TITLE: &str = "Movie Recommender System";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub movie: Option<String>,
}

/// What to show below the picker
#[derive(Debug)]
pub enum PageOutcome {
    Cards(Vec<Recommendation>),
    Error(String),
}

/// `GET /` handler
pub async fn index(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(params): Query<PageQuery>,
) -> Html<String> {
    let selected = params.movie.as_deref().filter(|m| !m.is_empty());

    let outcome = match selected {
        Some(movie) => {
            tracing::info!(request_id = %request_id, title = %movie, "Showing recommendations");
            Some(
                match state.recommender.recommend(movie, DEFAULT_RECOMMENDATIONS).await {
                    Ok(recs) => PageOutcome::Cards(recs),
                    Err(AppError::NotFound(_)) => PageOutcome::Error(NOT_FOUND_MESSAGE.to_string()),
                    Err(e) => PageOutcome::Error(e.to_string()),
                },
            )
        }
        None => None,
    };

    let titles: Vec<&str> = state.dataset().catalog().titles().collect();
    Html(render_page(&titles, selected, outcome.as_ref()))
}

/// `GET /` when the artifacts are missing
pub async fn halted() -> (StatusCode, Html<String>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(render_halted_page(ARTIFACTS_MISSING_MESSAGE)),
    )
}

/// Renders the whole document
pub fn render_page(titles: &[&str], selected: Option<&str>, outcome: Option<&PageOutcome>) -> String {
    let mut html = String::with_capacity(4096 + titles.len() * 48);
    open_document(&mut html);

    let _ = write!(
        html,
        r#"    <form method="get" action="/">
        <input name="movie" list="movie-list" placeholder="Type or select a movie from the dropdown" value="{}">
        <datalist id="movie-list">
"#,
        escape_html(selected.unwrap_or_default()),
    );

    for title in titles {
        let _ = writeln!(html, r#"            <option value="{}">"#, escape_html(title));
    }

    html.push_str(
        r#"        </datalist>
        <button type="submit">Show Recommendation</button>
    </form>
"#,
    );

    match outcome {
        Some(PageOutcome::Cards(recs)) => render_cards(&mut html, recs),
        Some(PageOutcome::Error(message)) => {
            let _ = writeln!(html, r#"    <div class="error">{}</div>"#, escape_html(message));
        }
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Page served when the artifacts could not be loaded: the message and no picker
pub fn render_halted_page(message: &str) -> String {
    let mut html = String::with_capacity(2048);
    open_document(&mut html);
    let _ = writeln!(html, r#"    <div class="error">{}</div>"#, escape_html(message));
    html.push_str("</body>\n</html>\n");
    html
}

fn open_document(html: &mut String) {
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; margin: 2rem; background: #0e1117; color: #fafafa; }}
        form {{ display: flex; gap: 0.5rem; margin-bottom: 2rem; }}
        input {{ flex: 1; padding: 0.5rem; }}
        .cards {{ display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }}
        .card img {{ width: 100%; border-radius: 4px; }}
        .caption {{ color: #a3a8b8; font-size: 0.85rem; margin: 0.2rem 0; }}
        .error {{ background: #3e2428; color: #ffbdbd; padding: 1rem; border-radius: 4px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
"#,
        title = PAGE_TITLE,
    );
}

fn render_cards(html: &mut String, recs: &[Recommendation]) {
    html.push_str("    <div class=\"cards\">\n");
    for rec in recs {
        let _ = write!(
            html,
            r#"        <div class="card">
            <p>{title}</p>
            <img src="{poster}" alt="{title}">
            <p class="caption">{year}</p>
            <p class="caption">{rating} &#11088;</p>
        </div>
"#,
            title = escape_html(&rec.title),
            poster = escape_html(&rec.poster_url),
            year = escape_html(&rec.year_display()),
            rating = escape_html(&rec.rating_display()),
        );
    }
    html.push_str("    </div>\n");
}

/// Minimal escaping for text and double-quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
