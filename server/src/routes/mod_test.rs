use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn asset_routes_answer_health_probe() {
    let dir = tempfile::tempdir().unwrap();
    let app = asset_routes(dir.path(), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn asset_routes_serve_photos() {
    let site = tempfile::tempdir().unwrap();
    let photos = tempfile::tempdir().unwrap();
    std::fs::write(photos.path().join("photo-1.jpg"), b"jpeg bytes").unwrap();
    let app = asset_routes(site.path(), photos.path());

    let response = app
        .oneshot(Request::builder().uri("/photos/photo-1.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"jpeg bytes");
}

#[tokio::test]
async fn missing_photo_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = asset_routes(dir.path(), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/photos/photo-6.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn asset_routes_serve_pkg_bundle() {
    let site = tempfile::tempdir().unwrap();
    std::fs::create_dir(site.path().join("pkg")).unwrap();
    std::fs::write(site.path().join("pkg").join("valentine.css"), b":root {}").unwrap();
    let app = asset_routes(site.path(), site.path());

    let response = app
        .oneshot(Request::builder().uri("/pkg/valentine.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
