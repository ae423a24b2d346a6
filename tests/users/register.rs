use actix_web::{http, test};
use common::auth::password::verify_password;
use entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::Value;
use use_cases::users::types::RegisterRequest;

use crate::utils::{error_messages, init_app, Connections};
use common::factory::{self, *};

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "  <b>Ada</b> Lovelace ".to_string(),
        email: email.to_string(),
        password: "Str0ng!Pass".to_string(),
        password_confirmation: "Str0ng!Pass".to_string(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(register_request(" Ada@Example.com "))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
    assert_eq!(body["data"]["user"]["name"], "Ada Lovelace");

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("ada@example.com"))
        .one(&db)
        .await?
        .unwrap();
    assert!(user_in_db.is_active);
    assert_eq!(user_in_db.session_version, 0);
    assert!(verify_password(&user_in_db.password, b"Str0ng!Pass").is_ok());

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_email_is_taken() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::user().email("ada@example.com").insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(register_request("ada@example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        error_messages(&body, "email"),
        vec!["This email address is already in use."]
    );

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_weak_or_unconfirmed_password() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(RegisterRequest {
            password: "weakpass".to_string(),
            password_confirmation: "different".to_string(),
            ..register_request("ada@example.com")
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    let messages = error_messages(&body, "password");
    assert!(messages.contains(&"Password confirmation does not match.".to_string()));
    assert!(messages.len() >= 2);

    Ok(())
}
