use crate::helpers::spawn_app;
use quality_gate::routes::READY_MESSAGE;
use reqwest::StatusCode;

#[derive(serde::Deserialize)]
struct HealthBody {
    status: String,
    message: String,
}

#[tokio::test]
async fn health_check_success() {
    let app = spawn_app().await;

    let resp = app.get_health().await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let body: HealthBody = resp.json().await.expect("Body was not JSON.");
    assert_eq!(body.status, "success");
    assert_eq!(body.message, READY_MESSAGE);
}

#[tokio::test]
async fn health_check_survives_repeated_probes() {
    let app = spawn_app().await;

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let resp = app.get_health().await;
        assert_eq!(resp.status(), StatusCode::OK);
        bodies.push(resp.text().await.unwrap());
    }

    assert!(bodies.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn post_with_json_body_is_rejected() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/health"))
        .json(&serde_json::json!({ "status": "error" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(app.url("/health_check"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
