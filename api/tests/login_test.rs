//! Integration tests for POST /login

mod common;

use actix_web::cookie::SameSite;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::Value;

use lk_api::app::create_app;
use lk_shared::config::{CookieConfig, CorsConfig};

use common::{app_state, app_state_with, response_cookie};

#[actix_web::test]
async fn test_login_success_sets_both_cookies() {
    let state = app_state();
    let app = test::init_service(create_app(state.clone(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "alice"), ("password", "secret123")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let jwt = response_cookie(&resp, "jwt").expect("jwt cookie");
    assert_eq!(jwt.http_only(), Some(true));
    assert_eq!(jwt.same_site(), Some(SameSite::Lax));
    assert_eq!(jwt.path(), Some("/"));

    let refresh = response_cookie(&resp, "refresh_token").expect("refresh cookie");
    assert_eq!(refresh.http_only(), Some(true));
    assert_eq!(refresh.path(), Some("/"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["access_token"], jwt.value());
    assert_eq!(body["refresh_token"], refresh.value());

    let auth = &state.auth_service;
    assert_eq!(auth.authenticate(jwt.value()).unwrap(), "alice");
    assert_eq!(auth.authenticate(refresh.value()).unwrap(), "alice");
}

#[actix_web::test]
async fn test_login_wrong_password_sets_no_cookies() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "alice"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "mallory"), ("password", "secret123")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
}

#[actix_web::test]
async fn test_login_validation_errors() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::development())).await;

    let long_name = "a".repeat(65);
    for form in [
        vec![("username", ""), ("password", "secret123")],
        vec![("username", "alice"), ("password", "")],
        vec![("username", long_name.as_str()), ("password", "secret123")],
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }
}

#[actix_web::test]
async fn test_login_missing_field_or_wrong_content_type() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "alice")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({ "username": "alice", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_error_localized_in_chinese() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header((header::ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9"))
        .set_form([("username", "alice"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert_eq!(body["message"], "用户名或密码错误");
}

#[actix_web::test]
async fn test_login_honors_cookie_configuration() {
    let cookies = CookieConfig {
        secure: true,
        refresh_cookie_path: Some("/refresh".to_string()),
        ..Default::default()
    };
    let app =
        test::init_service(create_app(app_state_with(cookies), &CorsConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", "bob"), ("password", "hunter2")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let jwt = response_cookie(&resp, "jwt").unwrap();
    assert_eq!(jwt.secure(), Some(true));
    assert_eq!(jwt.path(), Some("/"));

    let refresh = response_cookie(&resp, "refresh_token").unwrap();
    assert_eq!(refresh.secure(), Some(true));
    assert_eq!(refresh.path(), Some("/refresh"));
}
