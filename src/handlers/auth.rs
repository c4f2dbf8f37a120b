// src/handlers/auth.rs

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use validator::Validate;

use crate::{
    config::ADMIN_USERNAME,
    error::AppError,
    models::user::{SignInRequest, User},
    session::{self, SharedSession},
    store::Store,
    views,
};

/// Renders the sign-in / registration form.
pub async fn sign_in_page(State(session): State<SharedSession>) -> Result<Html<String>, AppError> {
    let session = session::lock(&session)?;
    let body = r#"<div class="container">
<h3>Sign in / Register</h3>
<form method="post" action="/signin">
<div class="form-row"><label for="mi_username">Username</label><input id="mi_username" name="username" placeholder="username"/></div>
<div class="form-row"><label for="mi_name">Full name</label><input id="mi_name" name="name" placeholder="Full name (for new accounts)"/></div>
<div style="text-align:right"><button class="btn" id="doSign">Sign In / Register</button></div>
</form>
</div>"#;
    Ok(Html(views::page(None, &session, None, body)))
}

/// Signs a user in, registering them on first sight.
///
/// * Scans the users collection case-insensitively for the username.
/// * Appends a fresh zero-point record when the scan finds nothing.
/// * Marks the session admin iff the username matches the admin convention.
pub async fn sign_in(
    State(store): State<Store>,
    State(session): State<SharedSession>,
    Form(payload): Form<SignInRequest>,
) -> Result<Redirect, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Enter username".to_string()));
    }

    let username = payload.username.trim();
    let name = match payload.name.trim() {
        "" => username,
        trimmed => trimmed,
    };

    let mut users = store.users();
    let needle = username.to_lowercase();
    let user = match users
        .iter()
        .find(|u| u.username.to_lowercase() == needle)
    {
        Some(existing) => existing.clone(),
        None => {
            let user = User::new(username, name);
            tracing::info!("Registered new user '{}' ({})", user.username, user.id);
            users.push(user.clone());
            store.save_users(&users)?;
            user
        }
    };

    let is_admin = needle == ADMIN_USERNAME;
    tracing::info!("Signed in '{}' (admin: {})", user.username, is_admin);
    session::lock(&session)?.sign_in(user, is_admin);

    Ok(Redirect::to("/"))
}

/// Clears the in-memory session.
pub async fn sign_out(State(session): State<SharedSession>) -> Result<Redirect, AppError> {
    session::lock(&session)?.sign_out();
    tracing::info!("Signed out");
    Ok(Redirect::to("/"))
}
