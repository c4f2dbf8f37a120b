// tests/pages_tests.rs

use ecoplay::{
    routes, session,
    state::AppState,
    store::{self, Store},
};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345") and the store
/// backing the running app.
async fn spawn_app() -> (String, Store) {
    // 1. Point the store at a fresh directory under the system temp dir
    let data_dir = std::env::temp_dir().join(format!("ecoplay_test_{}", uuid::Uuid::new_v4()));

    let store = Store::open(&data_dir).expect("Failed to open test data directory");

    // 2. Seed the demo records, exactly like production boot
    store::seed(&store).expect("Failed to seed test data");

    // 3. Create test state with a fresh session
    let state = AppState {
        store: store.clone(),
        session: session::shared(),
    };

    // 4. Create the router with the app state
    let app = routes::create_router(state);

    // 5. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 6. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, store)
}

#[tokio::test]
async fn home_page_renders_the_welcome_copy() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Welcome to EcoPlay"));
    assert!(body.contains("Navigate using the menu above."));
    assert!(body.contains("Not signed in"));
}

#[tokio::test]
async fn every_nav_route_renders_its_page_copy() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    let expectations = [
        ("/games", "Play eco-friendly quizzes and challenges here."),
        ("/redeem", "Redeem your points for eco-goodies."),
        (
            "/about",
            "A gamified platform to learn and practice environmental awareness.",
        ),
        ("/contact", "Email: support@ecoplay.org"),
        ("/profile", "Manage your EcoPlay account."),
        ("/admin", "Admins can manage quizzes, events, and videos here."),
        ("/videos", "Educational Videos"),
    ];

    for (path, copy) in expectations {
        // Act
        let response = client
            .get(&format!("{}{}", address, path))
            .send()
            .await
            .expect("Failed to execute request");

        // Assert
        assert_eq!(response.status().as_u16(), 200, "GET {} failed", path);
        let body = response.text().await.expect("Failed to read body");
        assert!(body.contains(copy), "GET {} misses its copy", path);
    }
}

#[tokio::test]
async fn the_active_nav_entry_is_highlighted() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/games", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: exactly one highlighted entry, and it is Games
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(r#"<a class="nav-link active" href="/games">Games</a>"#));
    assert_eq!(body.matches("nav-link active").count(), 1);
}

#[tokio::test]
async fn unknown_paths_redirect_to_home() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client");

    // Act
    let response = client
        .get(&format!("{}/definitely/not/a/route", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(
        response
            .headers()
            .get("location")
            .expect("Missing location header"),
        "/"
    );
}

#[tokio::test]
async fn games_page_lists_the_starter_quiz() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/games", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: title and description render escaped, the totals are computed
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Plant&#32;Care&#32;Basics"));
    assert!(body.contains("5 questions, 40 pts"));
}

#[tokio::test]
async fn videos_page_hides_the_add_form_from_visitors() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/videos", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: empty state, no form fields
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No videos uploaded yet."));
    assert!(!body.contains(r#"id="vidTitle""#));
}

#[tokio::test]
async fn admin_sees_the_add_form_and_the_panel() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    client
        .post(&format!("{}/signin", address))
        .form(&[("username", "admin")])
        .send()
        .await
        .expect("Sign-in failed");

    // Act
    let videos_body = client
        .get(&format!("{}/videos", address))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");
    let admin_body = client
        .get(&format!("{}/admin", address))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    // Assert: the form on the videos page, the stats on the admin panel
    assert!(videos_body.contains(r#"id="vidTitle""#));
    assert!(videos_body.contains(r#"id="vidURL""#));
    assert!(admin_body.contains("<td>Videos</td><td>0</td>"));
    assert!(admin_body.contains("<td>Quizzes</td><td>1</td>"));
}

#[tokio::test]
async fn sign_in_page_renders_the_form() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/signin", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Sign in / Register"));
    assert!(body.contains(r#"id="mi_username""#));
    assert!(body.contains(r#"id="mi_name""#));
}

#[tokio::test]
async fn profile_page_shows_the_signed_in_details() {
    // Arrange: the seeded demo account carries points and a badge
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    client
        .post(&format!("{}/signin", address))
        .form(&[("username", "demo_student")])
        .send()
        .await
        .expect("Sign-in failed");

    // Act
    let response = client
        .get(&format!("{}/profile", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Demo&#32;Student"));
    assert!(body.contains("Points: 120"));
    assert!(body.contains("Bronze&#32;Sapling"));
    assert!(body.contains("Demo&#32;Student&#32;(120&#32;pts)"));
}

#[tokio::test]
async fn redeem_page_shows_the_balance_when_signed_in() {
    // Arrange
    let (address, _store) = spawn_app().await;
    let client = reqwest::Client::new();
    client
        .post(&format!("{}/signin", address))
        .form(&[("username", "demo_student")])
        .send()
        .await
        .expect("Sign-in failed");

    // Act
    let response = client
        .get(&format!("{}/redeem", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("<strong>120 pts</strong>"));
}
