// src/handlers/videos.rs

use axum::{
    Form,
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::AppError,
    models::video::{AddVideoRequest, Video},
    session::{self, SharedSession},
    store::Store,
    utils::html::clean_text,
    views::{self, Route},
};

/// Query parameters for the videos page.
#[derive(Debug, Deserialize)]
pub struct VideosPageParams {
    /// Notice code left by a completed action, rendered as a banner.
    pub notice: Option<String>,
}

/// Banner texts for the known notice codes.
fn notice_message(code: &str) -> Option<&'static str> {
    match code {
        "added" => Some("Video added successfully!"),
        _ => None,
    }
}

/// Educational videos: the stored list, plus the add form for admins.
pub async fn videos_page(
    State(store): State<Store>,
    State(session): State<SharedSession>,
    Query(params): Query<VideosPageParams>,
) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let videos = store.videos();

    let form = if session.is_admin { ADD_VIDEO_FORM } else { "" };
    let list: String = if videos.is_empty() {
        r#"<div class="muted">No videos uploaded yet.</div>"#.to_owned()
    } else {
        videos.iter().map(video_card).collect()
    };
    let notice = params.notice.as_deref().and_then(notice_message);

    let body = format!(
        r#"<div class="container"><h2>Educational Videos</h2>{form}<div class="video-list">{list}</div></div>"#
    );
    Ok(Html(views::page(Some(Route::Videos), &session, notice, &body)))
}

const ADD_VIDEO_FORM: &str = r#"<form method="post" action="/videos">
<div class="form-row"><label for="vidTitle">Video Title</label><input id="vidTitle" name="title" placeholder="Title"/></div>
<div class="form-row"><label for="vidURL">Video URL (YouTube / MP4 link)</label><input id="vidURL" name="url" placeholder="https://"/></div>
<div style="text-align:right"><button class="btn" id="addVideoBtn">Add Video</button></div>
</form>
<hr/>"#;

fn video_card(video: &Video) -> String {
    format!(
        r#"<div class="video-card">
<h4>{title}</h4>
<video width="320" height="240" controls>
<source src="{url}" type="video/mp4">
Your browser does not support the video tag.
</video>
</div>"#,
        title = clean_text(&video.title),
        url = clean_text(&video.url),
    )
}

/// Appends a video record.
///
/// Admin only. Both fields are presence-checked and nothing else; the URL
/// is stored as entered.
pub async fn add_video(
    State(store): State<Store>,
    State(session): State<SharedSession>,
    Form(payload): Form<AddVideoRequest>,
) -> Result<Redirect, AppError> {
    {
        let session = session::lock(&session)?;
        if !session.is_signed_in() {
            return Err(AppError::AuthError("Sign in to manage videos".to_string()));
        }
        if !session.is_admin {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
    }

    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Provide both title and URL".to_string()));
    }

    let mut videos = store.videos();
    let video = Video::new(payload.title.trim(), payload.url.trim());
    tracing::info!("Added video '{}' ({})", video.title, video.id);
    videos.push(video);
    store.save_videos(&videos)?;

    Ok(Redirect::to("/videos?notice=added"))
}
