// src/views.rs

use axum::http::StatusCode;
use chrono::{Datelike, Utc};

use crate::session::Session;
use crate::utils::html::clean_text;

/// The named views of the page dispatch table, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Games,
    Redeem,
    About,
    Contact,
    Profile,
    Admin,
    Videos,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Games,
        Route::Redeem,
        Route::About,
        Route::Contact,
        Route::Profile,
        Route::Admin,
        Route::Videos,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Games => "/games",
            Route::Redeem => "/redeem",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
            Route::Videos => "/videos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Games => "Games",
            Route::Redeem => "Redeem",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Profile => "Profile",
            Route::Admin => "Admin",
            Route::Videos => "Videos",
        }
    }
}

const STYLE: &str = "\
:root{color-scheme:light}\
*{box-sizing:border-box}\
body{font-family:system-ui,sans-serif;margin:0;background:#f4f9f4;color:#1c2b21}\
.topbar{display:flex;align-items:center;gap:1rem;padding:.75rem 1.25rem;background:#1f6f43;color:#fff;flex-wrap:wrap}\
.brand{font-weight:700;font-size:1.2rem}\
nav{display:flex;gap:.25rem;flex-wrap:wrap}\
.nav-link{color:#d9efe0;text-decoration:none;padding:.35rem .6rem;border-radius:4px}\
.nav-link:hover{background:#2a8653}\
.nav-link.active{background:#fff;color:#1f6f43}\
.auth{margin-left:auto;display:flex;align-items:center;gap:.5rem}\
.auth form{display:inline;margin:0}\
main{max-width:860px;margin:1.5rem auto;padding:0 1rem}\
.container{background:#fff;border:1px solid #dce8dd;border-radius:8px;padding:1.25rem 1.5rem}\
.container h2{margin-top:0}\
.muted{color:#6b7a6e}\
.btn{background:#1f6f43;color:#fff;border:0;border-radius:4px;padding:.45rem .9rem;cursor:pointer;font:inherit;text-decoration:none;display:inline-block}\
.form-row{margin:.75rem 0;display:flex;flex-direction:column;gap:.25rem;max-width:24rem}\
.form-row input{padding:.45rem;border:1px solid #b9cdbb;border-radius:4px;font:inherit}\
.notice{background:#e4f4e8;border:1px solid #1f6f43;border-radius:4px;padding:.6rem .9rem;margin-bottom:1rem}\
.video-list{display:flex;flex-wrap:wrap;gap:1rem;margin-top:1rem}\
.video-card{border:1px solid #dce8dd;border-radius:8px;padding:.75rem;background:#fff}\
.video-card h4{margin:0 0 .5rem}\
.quiz-card{border:1px solid #dce8dd;border-radius:8px;padding:.75rem 1rem;margin-top:.75rem;background:#fff}\
.quiz-card h4{margin:0 0 .25rem}\
.stats{border-collapse:collapse;margin-top:.75rem}\
.stats th,.stats td{border:1px solid #dce8dd;padding:.4rem .8rem;text-align:left}\
.profile-card{margin-top:.75rem;line-height:1.7}\
footer{max-width:860px;margin:1rem auto 2rem;padding:0 1rem;color:#6b7a6e;font-size:.9rem}\
hr{border:0;border-top:1px solid #dce8dd;margin:1rem 0}";

/// Renders a full page: the shared shell (header, nav, auth box, footer)
/// around the view body.
///
/// * `active` highlights the matching nav entry; `None` for pages outside
///   the nav, such as the sign-in form.
/// * `notice` is an already-resolved banner text, rendered above the body.
pub fn page(active: Option<Route>, session: &Session, notice: Option<&str>, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>EcoPlay</title>
<style>{style}</style>
</head>
<body>
<header class="topbar">
<span class="brand">EcoPlay</span>
{nav}
<div class="auth">{auth}</div>
</header>
<main id="app">
{banner}{body}
</main>
<footer>&copy; <span id="year">{year}</span> EcoPlay</footer>
</body>
</html>
"#,
        style = STYLE,
        nav = nav(active),
        auth = auth_box(session),
        banner = notice_banner(notice),
        body = body,
        year = Utc::now().year(),
    )
}

/// Standalone error page. Used by `AppError`, so it takes no session and
/// renders without the nav shell.
///
/// `message` must be app-authored text, never request input; every
/// `AppError` constructed in this crate carries a fixed string.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<title>EcoPlay</title>
<style>{style}</style>
</head>
<body>
<main id="app">
<div class="container">
<h2>{code} {reason}</h2>
<p>{message}</p>
<p><a class="btn" href="/">Back to EcoPlay</a></p>
</div>
</main>
</body>
</html>
"#,
        style = STYLE,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = message,
    )
}

fn nav(active: Option<Route>) -> String {
    let links: String = Route::ALL
        .iter()
        .map(|route| {
            let class = if Some(*route) == active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a class="{class}" href="{path}">{label}</a>"#,
                class = class,
                path = route.path(),
                label = route.label(),
            )
        })
        .collect();
    format!("<nav>{links}</nav>")
}

fn auth_box(session: &Session) -> String {
    if session.is_signed_in() {
        format!(
            r#"<span id="currentUserDisplay">{status}</span><form method="post" action="/signout"><button class="btn" id="authBtn">Sign out</button></form>"#,
            status = clean_text(&session.status_line()),
        )
    } else {
        r#"<span id="currentUserDisplay">Not signed in</span><a class="btn" id="authBtn" href="/signin">Sign in</a>"#
            .to_owned()
    }
}

fn notice_banner(notice: Option<&str>) -> String {
    match notice {
        // Banner texts come from the fixed notice-code table, never from
        // request input, so they render unescaped.
        Some(text) => format!(r#"<div class="notice">{text}</div>"#),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_marks_only_the_active_route() {
        let html = nav(Some(Route::Games));
        assert!(html.contains(r#"<a class="nav-link active" href="/games">Games</a>"#));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn nav_has_no_active_route_outside_the_table() {
        let html = nav(None);
        assert_eq!(html.matches("nav-link active").count(), 0);
        for route in Route::ALL {
            assert!(html.contains(route.path()));
        }
    }

    #[test]
    fn auth_box_escapes_the_display_name() {
        let mut session = Session::default();
        session.sign_in(crate::models::user::User::new("eve", "<script>Eve</script>"), false);

        let html = auth_box(&session);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
