use std::time::Duration;

use quill_core::api::{ApiErrorKind, BlogClient};
use quill_types::{Author, Credentials, NewComment, NewPost, Registration};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_json, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": "Body text",
        "author": { "id": 1, "username": "alice" },
        "createdAt": "2024-05-01T10:00:00",
        "updatedAt": "2024-05-01T10:00:00",
        "tags": ["rust"],
        "category": "tech"
    })
}

fn comment_json(id: u64, post_id: u64) -> Value {
    json!({
        "id": id,
        "content": "Nice post",
        "author": { "id": 2, "username": "bob" },
        "createdAt": "2024-05-02T09:30:00.123",
        "updatedAt": "2024-05-02T09:30:00.123",
        "postId": post_id
    })
}

fn client_for(server: &MockServer) -> BlogClient {
    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    BlogClient::new(&base, Some(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_list_posts_decodes_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(header_regex("user-agent", "^quill/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([post_json(2, "B"), post_json(1, "A")])),
        )
        .mount(&server)
        .await;

    let posts = client_for(&server).list_posts().await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["B", "A"]);
    assert_eq!(posts[0].tags, ["rust"]);
    assert_eq!(posts[0].created_at.date_label(), "2024-05-01");
}

#[tokio::test]
async fn test_post_without_tags_defaults_to_empty() {
    let server = MockServer::start().await;
    let mut body = post_json(4, "Bare");
    body.as_object_mut().unwrap().remove("tags");
    body.as_object_mut().unwrap().remove("category");
    Mock::given(method("GET"))
        .and(path("/api/posts/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let post = client_for(&server).get_post(4).await.unwrap();
    assert!(post.tags.is_empty());
    assert!(post.category.is_empty());
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "seven" }])))
        .mount(&server)
        .await;

    let err = client_for(&server).list_posts().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_invalid_field_is_decode_error_with_index() {
    let server = MockServer::start().await;
    let bad = post_json(0, "Zero id");
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, "ok"), bad])))
        .mount(&server)
        .await;

    let err = client_for(&server).list_posts().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert!(err.message.contains("[1]"), "message: {}", err.message);
}

#[tokio::test]
async fn test_bad_timestamp_is_rejected() {
    let server = MockServer::start().await;
    let mut bad = post_json(3, "When");
    bad["createdAt"] = json!("yesterday");
    Mock::given(method("GET"))
        .and(path("/api/posts/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bad))
        .mount(&server)
        .await;

    let err = client_for(&server).get_post(3).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert!(err.message.contains("createdAt"), "message: {}", err.message);
}

#[tokio::test]
async fn test_http_error_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Post not found" })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_post(9).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::HttpStatus);
    assert_eq!(err.to_string(), "HTTP 404: Post not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = BlogClient::new(&base, Some(Duration::from_millis(100))).unwrap();
    let err = client.list_posts().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
    drop(server);

    let client = BlogClient::new(&base, Some(Duration::from_secs(2))).unwrap();
    let err = client.list_posts().await.unwrap_err();
    assert!(
        matches!(err.kind, ApiErrorKind::Network | ApiErrorKind::Timeout),
        "kind: {:?}",
        err.kind
    );
}

#[tokio::test]
async fn test_post_with_comments_fetches_both() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(5, "Five")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5/comments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([comment_json(1, 5), comment_json(2, 5)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (post, comments) = client_for(&server).post_with_comments(5).await.unwrap();
    assert_eq!(post.id, 5);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].post_id, 5);
}

#[tokio::test]
async fn test_post_with_comments_fails_if_comments_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json(5, "Five")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5/comments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).post_with_comments(5).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_create_post_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(json!({
            "title": "Hello",
            "content": "World",
            "category": "misc",
            "tags": ["a", "b"],
            "author": { "id": 1, "username": "alice" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(post_json(10, "Hello")))
        .expect(1)
        .mount(&server)
        .await;

    let new_post = NewPost {
        title: "Hello".to_string(),
        content: "World".to_string(),
        category: "misc".to_string(),
        tags: vec!["a".to_string(), "b".to_string()],
        author: Author {
            id: 1,
            username: "alice".to_string(),
        },
    };
    let post = client_for(&server).create_post(&new_post).await.unwrap();
    assert_eq!(post.id, 10);
}

#[tokio::test]
async fn test_create_comment_returns_created_comment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/5/comments"))
        .and(body_json(json!({
            "content": "Nice post",
            "author": { "id": 2, "username": "bob" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_json(8, 5)))
        .mount(&server)
        .await;

    let comment = NewComment {
        content: "Nice post".to_string(),
        author: Some(Author {
            id: 2,
            username: "bob".to_string(),
        }),
    };
    let created = client_for(&server)
        .create_comment(5, &comment)
        .await
        .unwrap();
    assert_eq!(created.id, 8);
    assert_eq!(created.author.username, "bob");
}

#[tokio::test]
async fn test_user_posts_hits_user_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([post_json(1, "Mine")])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client_for(&server).user_posts(1).await.unwrap();
    assert_eq!(posts.len(), 1);
}

#[tokio::test]
async fn test_login_builds_user_without_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "userId": 1,
            "username": "alice"
        })))
        .mount(&server)
        .await;

    let credentials = Credentials {
        username: "alice".to_string(),
        password: "pw".to_string(),
    };
    let user = client_for(&server).login(&credentials).await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "");
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid username or password" })),
        )
        .mount(&server)
        .await;

    let credentials = Credentials {
        username: "alice".to_string(),
        password: "nope".to_string(),
    };
    let err = client_for(&server).login(&credentials).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 401: Invalid username or password");
}

#[tokio::test]
async fn test_register_returns_new_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User registered successfully",
            "userId": 42
        })))
        .mount(&server)
        .await;

    let registration = Registration {
        username: "carol".to_string(),
        email: "c@x.com".to_string(),
        password: "pw".to_string(),
    };
    let response = client_for(&server).register(&registration).await.unwrap();
    assert_eq!(response.user_id, 42);
    assert_eq!(response.message, "User registered successfully");
}
