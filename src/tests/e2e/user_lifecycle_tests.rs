use axum::http::{Method, StatusCode};

use crate::modules::users::core::user::User;
use crate::shell::http::app;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::{json_body, request, send, users_from};
use crate::tests::fixtures::users::UserBuilder;

fn summary(bytes: &axum::body::Bytes) -> Vec<(i64, String)> {
    users_from(bytes)
        .into_iter()
        .map(|user| (user.id, user.name))
        .collect()
}

#[tokio::test]
async fn create_upsert_delete_and_lookup_over_http() {
    let app = app(AppState::in_memory());
    let list = || request(Method::GET, "/users", "");

    let a = UserBuilder::new().id(1).name("A").build();
    send(app.clone(), request(Method::POST, "/user/add", json_body(&a))).await;
    let (_, bytes) = send(app.clone(), list()).await;
    assert_eq!(summary(&bytes), vec![(1, "A".to_string())]);

    let b = UserBuilder::new().id(2).name("B").build();
    send(app.clone(), request(Method::POST, "/user/add", json_body(&b))).await;
    let (_, bytes) = send(app.clone(), list()).await;
    assert_eq!(
        summary(&bytes),
        vec![(1, "A".to_string()), (2, "B".to_string())]
    );

    let a2 = UserBuilder::new().id(1).name("A2").build();
    send(app.clone(), request(Method::PUT, "/user/update", json_body(&a2))).await;
    let (_, bytes) = send(app.clone(), list()).await;
    assert_eq!(
        summary(&bytes),
        vec![(1, "A2".to_string()), (2, "B".to_string())]
    );

    let (status, _) = send(app.clone(), request(Method::DELETE, "/user/delete/2", "")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, bytes) = send(app.clone(), list()).await;
    assert_eq!(summary(&bytes), vec![(1, "A2".to_string())]);

    let (status, bytes) = send(app.clone(), request(Method::GET, "/user/9", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(&bytes[..], b"User not found!");

    let (status, bytes) = send(app, request(Method::GET, "/user/1", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<User>(&bytes).unwrap(), a2);
}
