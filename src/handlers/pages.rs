// src/handlers/pages.rs

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::{
    error::AppError,
    models::quiz::Quiz,
    session::{self, SharedSession},
    store::Store,
    utils::html::clean_text,
    views::{self, Route},
};

/// Landing page.
pub async fn home(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let body = r#"<div class="container"><h2>Welcome to EcoPlay</h2><p>Navigate using the menu above.</p></div>"#;
    Ok(Html(views::page(Some(Route::Home), &session, None, body)))
}

/// Games overview: the stored quizzes, read-only.
pub async fn games(
    State(store): State<Store>,
    State(session): State<SharedSession>,
) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let quizzes = store.quizzes();

    let list: String = if quizzes.is_empty() {
        r#"<div class="muted">No quizzes available yet.</div>"#.to_owned()
    } else {
        quizzes.iter().map(quiz_card).collect()
    };

    let body = format!(
        r#"<div class="container"><h2>Games</h2><p>Play eco-friendly quizzes and challenges here.</p>{list}</div>"#
    );
    Ok(Html(views::page(Some(Route::Games), &session, None, &body)))
}

fn quiz_card(quiz: &Quiz) -> String {
    format!(
        r#"<div class="quiz-card"><h4>{title}</h4><p>{description}</p><p class="muted">{count} questions, {points} pts</p></div>"#,
        title = clean_text(&quiz.title),
        description = clean_text(&quiz.description),
        count = quiz.questions.len(),
        points = quiz.total_points(),
    )
}

/// Redeem page; shows the signed-in balance when there is one.
pub async fn redeem(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let balance = match &session.current_user {
        Some(user) => format!(
            r#"<p>You currently have <strong>{} pts</strong> to spend.</p>"#,
            user.points
        ),
        None => r#"<p class="muted">Sign in to see your point balance.</p>"#.to_owned(),
    };
    let body = format!(
        r#"<div class="container"><h2>Redeem</h2><p>Redeem your points for eco-goodies.</p>{balance}</div>"#
    );
    Ok(Html(views::page(Some(Route::Redeem), &session, None, &body)))
}

pub async fn about(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let body = r#"<div class="container"><h2>About EcoPlay</h2><p>A gamified platform to learn and practice environmental awareness.</p></div>"#;
    Ok(Html(views::page(Some(Route::About), &session, None, body)))
}

pub async fn contact(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let body = r#"<div class="container"><h2>Contact Us</h2><p>Email: support@ecoplay.org</p></div>"#;
    Ok(Html(views::page(Some(Route::Contact), &session, None, body)))
}

/// Profile page; details render only for a signed-in session.
pub async fn profile(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let details = match &session.current_user {
        Some(user) => {
            let badges = if user.badges.is_empty() {
                "None yet".to_owned()
            } else {
                clean_text(&user.badges.join(", "))
            };
            format!(
                r#"<div class="profile-card"><strong>{name}</strong> (@{username})<br/>Points: {points}<br/>Badges: {badges}<br/>Member since: {joined}<br/>Activity: {subs} submissions, {quizzes} quizzes taken, {events} events joined</div>"#,
                name = clean_text(&user.name),
                username = clean_text(&user.username),
                points = user.points,
                badges = badges,
                joined = user.created_at.format("%Y-%m-%d"),
                subs = user.submissions.len(),
                quizzes = user.quizzes_taken.len(),
                events = user.joined_events.len(),
            )
        }
        None => r#"<div class="muted">Sign in to see your points and badges.</div>"#.to_owned(),
    };
    let body = format!(
        r#"<div class="container"><h2>Profile</h2><p>Manage your EcoPlay account.</p>{details}</div>"#
    );
    Ok(Html(views::page(Some(Route::Profile), &session, None, &body)))
}

/// Admin panel. The management hub only renders for an admin session;
/// everyone else sees the page text and a hint.
pub async fn admin(
    State(store): State<Store>,
    State(session): State<SharedSession>,
) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let panel = if session.is_admin {
        let rows: String = [
            ("Users", store.users().len()),
            ("Quizzes", store.quizzes().len()),
            ("Submissions", store.submissions().len()),
            ("Events", store.events().len()),
            ("Redemptions", store.redemptions().len()),
            ("Videos", store.videos().len()),
        ]
        .iter()
        .map(|(label, count)| format!("<tr><td>{label}</td><td>{count}</td></tr>"))
        .collect();
        format!(
            r#"<table class="stats"><tr><th>Collection</th><th>Records</th></tr>{rows}</table><p><a class="btn" href="/videos">Manage videos</a></p>"#
        )
    } else {
        r#"<div class="muted">Sign in with the admin account to manage content.</div>"#.to_owned()
    };
    let body = format!(
        r#"<div class="container"><h2>Admin Panel</h2><p>Admins can manage quizzes, events, and videos here.</p>{panel}</div>"#
    );
    Ok(Html(views::page(Some(Route::Admin), &session, None, &body)))
}

/// Unknown paths land on the home view.
pub async fn fallback_home() -> Redirect {
    Redirect::to("/")
}
