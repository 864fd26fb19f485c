//! End-to-end scenarios over the boundary operations, wired against the
//! in-memory snapshot backend.

use bulletin_infra::{InMemorySnapshotBackend, JwtConfig};
use bulletin_shared::dto::{
    CreateCommentRequest, CreatePostRequest, ListPostsQuery, LoginRequest, UpdatePostRequest,
};

use crate::error::AppError;
use crate::{AppConfig, AppState, auth, comments, posts};

fn test_config() -> AppConfig {
    AppConfig {
        data_dir: "unused".to_string(),
        admin_username: "admin".to_string(),
        admin_password_hash: None,
        admin_password: Some("hunter2".to_string()),
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        },
        json_logs: false,
    }
}

async fn test_state() -> (AppState, InMemorySnapshotBackend) {
    let backend = InMemorySnapshotBackend::new();
    let state = AppState::with_backend(&test_config(), Box::new(backend.clone()))
        .await
        .unwrap();
    (state, backend)
}

async fn admin_token(state: &AppState) -> String {
    auth::login(
        state,
        LoginRequest {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        },
    )
    .await
    .unwrap()
    .token
}

fn post_request(title: &str, content: &str) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        content: content.to_string(),
        files: Vec::new(),
    }
}

#[tokio::test]
async fn test_full_publishing_lifecycle() {
    let (state, _) = test_state().await;
    let token = admin_token(&state).await;

    // Admin publishes a post.
    let created = posts::create_post(&state, &token, post_request("Hello", "World"))
        .await
        .unwrap();
    assert_eq!(created.author, "admin");
    assert!(created.files.is_empty());

    let page = posts::list_posts(&state, ListPostsQuery::default())
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].comment_count, 0);

    // An anonymous visitor comments, no credential needed.
    let comment = comments::create_comment(
        &state,
        &created.id,
        CreateCommentRequest {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            message: "Nice!".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(comment.post_id, created.id);

    let listed = comments::list_comments(&state, &created.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].message, "Nice!");

    // Deleting the post takes its comments with it.
    posts::delete_post(&state, &token, &created.id).await.unwrap();
    assert!(matches!(
        posts::get_post(&state, &created.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(
        comments::list_comments(&state, &created.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_mutations_require_credential() {
    let (state, _) = test_state().await;
    let token = admin_token(&state).await;
    let created = posts::create_post(&state, &token, post_request("Hello", "World"))
        .await
        .unwrap();

    let denied = posts::create_post(&state, "garbage", post_request("t", "c")).await;
    assert!(matches!(denied.unwrap_err(), AppError::Unauthorized));

    let denied = posts::update_post(
        &state,
        "",
        &created.id,
        UpdatePostRequest {
            title: Some("new".to_string()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(denied.unwrap_err(), AppError::Unauthorized));

    let denied = posts::delete_post(&state, "garbage", &created.id).await;
    assert!(matches!(denied.unwrap_err(), AppError::Unauthorized));

    let denied = comments::delete_comment(&state, "garbage", "some-id").await;
    assert!(matches!(denied.unwrap_err(), AppError::Unauthorized));

    // Nothing above went through.
    let page = posts::list_posts(&state, ListPostsQuery::default())
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Hello");
}

#[tokio::test]
async fn test_login_maps_failures() {
    let (state, _) = test_state().await;

    let err = auth::login(
        &state,
        LoginRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    let err = auth::login(
        &state,
        LoginRequest {
            username: String::new(),
            password: "hunter2".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_verify_echoes_identity() {
    let (state, _) = test_state().await;
    let token = admin_token(&state).await;

    let user = auth::verify(&state, &token).await.unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, "admin");

    assert!(matches!(
        auth::verify(&state, "expired-or-garbage").await.unwrap_err(),
        AppError::Unauthorized
    ));
}

#[tokio::test]
async fn test_restart_reproduces_ordered_state() {
    let (state, backend) = test_state().await;
    let token = admin_token(&state).await;

    for i in 0..3 {
        posts::create_post(&state, &token, post_request(&format!("post {i}"), "content"))
            .await
            .unwrap();
    }
    let before: Vec<String> = posts::list_posts(&state, ListPostsQuery::default())
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|p| p.id)
        .collect();

    // The shutdown flush must also leave the snapshots intact.
    state.flush().await.unwrap();

    // A fresh state over the same backing snapshots sees the same ordering.
    let restarted = AppState::with_backend(&test_config(), Box::new(backend))
        .await
        .unwrap();
    let after: Vec<String> = posts::list_posts(&restarted, ListPostsQuery::default())
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_get_file_negative_index_is_not_found() {
    let (state, _) = test_state().await;
    let token = admin_token(&state).await;
    let created = posts::create_post(&state, &token, post_request("Hello", "World"))
        .await
        .unwrap();

    let err = posts::get_post_file(&state, &created.id, -1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
