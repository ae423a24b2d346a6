use actix_web::{http, test, HttpMessage};
use common::auth::password::verify_password;
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::Value;
use use_cases::users::types::UpdatePasswordRequest;

use crate::utils::{error_messages, init_app, Connections};
use common::factory::{self, *};

fn request(current_password: &str, password: &str, confirmation: &str) -> UpdatePasswordRequest {
    UpdatePasswordRequest {
        current_password: current_password.to_string(),
        password: password.to_string(),
        password_confirmation: confirmation.to_string(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/users/me/password")
        .set_json(request(PLAIN_PASSWORD, "N3w!Secret", "N3w!Secret"))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Password updated successfully.");

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(verify_password(&user_in_db.password, b"N3w!Secret").is_ok());
    assert!(verify_password(&user_in_db.password, PLAIN_PASSWORD.as_bytes()).is_err());

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_current_password_is_wrong() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/users/me/password")
        .set_json(request("passworda", "N3w!Secret", "N3w!Secret"))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        error_messages(&body, "current_password"),
        vec!["The current password is incorrect."]
    );

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.password, HASHED_PASSWORD);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_mismatch_reuse_or_weak_password() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let strong_current = "0ld!Secret";
    let user = factory::user()
        .password(&common::auth::password::hash(strong_current.as_bytes()).unwrap())
        .insert(&db)
        .await?;

    for (body, expected) in [
        (
            request(strong_current, "N3w!Secret", "N3w!Other"),
            "Password confirmation does not match.",
        ),
        (
            request(strong_current, strong_current, strong_current),
            "New password must be different from current password.",
        ),
        (
            request(strong_current, "alllowercase1!", "alllowercase1!"),
            "The password must contain at least one uppercase and one lowercase letter.",
        ),
    ] {
        let req = test::TestRequest::put()
            .uri("/api/users/me/password")
            .set_json(body)
            .to_request();
        req.extensions_mut().insert(user.clone());
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert!(
            error_messages(&body, "password").contains(&expected.to_string()),
            "{}",
            expected
        );
    }

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::put()
        .uri("/api/users/me/password")
        .set_json(request(PLAIN_PASSWORD, "N3w!Secret", "N3w!Secret"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
