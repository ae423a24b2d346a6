use actix_web::{http, test, HttpMessage};
use common::auth::tokens::VERIFICATION_TOKEN_LENGTH;
use entities::{email_verification, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::Value;
use use_cases::users::types::EmailChangeRequest;

use crate::utils::{error_messages, init_app, Connections};
use common::factory::{self, *};

fn request(email: &str, current_password: &str) -> EmailChangeRequest {
    EmailChangeRequest {
        email: email.to_string(),
        current_password: current_password.to_string(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/me/email-change")
        .set_json(request("  New@Example.com ", PLAIN_PASSWORD))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["message"],
        "Verification code sent to your new email address."
    );
    assert_eq!(body["data"]["new_email"], "new@example.com");
    assert_eq!(body["data"]["expires_in_minutes"], 30);
    assert!(body["data"].get("token").is_none());

    let verifications = email_verification::Entity::find()
        .filter(email_verification::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert_eq!(verifications.len(), 1);
    let verification = &verifications[0];
    assert_eq!(verification.new_email, "new@example.com");
    assert!(verification.token.starts_with("$argon2"));
    assert_ne!(verification.token.len(), VERIFICATION_TOKEN_LENGTH);
    let seconds_left = (verification.expires_at - verification.created_at).num_seconds();
    assert!((29 * 60..=30 * 60).contains(&seconds_left));

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.email, user.email);

    Ok(())
}

#[actix_web::test]
async fn replaces_previous_verification() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;
    let (old_verification, _) = factory::email_verification(user.id, "first@example.com");
    let old_verification = old_verification.insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/me/email-change")
        .set_json(request("second@example.com", PLAIN_PASSWORD))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let verifications = email_verification::Entity::find()
        .filter(email_verification::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert_eq!(verifications.len(), 1);
    assert_ne!(verifications[0].id, old_verification.id);
    assert_eq!(verifications[0].new_email, "second@example.com");

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_input() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;
    let other = factory::user().email("taken@example.com").insert(&db).await?;
    let long_email = format!("{}@example.com", "a".repeat(250));

    for (body, field, message) in [
        (
            request("not-an-email", PLAIN_PASSWORD),
            "email",
            "Please provide a valid email address.",
        ),
        (
            request(&long_email, PLAIN_PASSWORD),
            "email",
            "Email cannot exceed 255 characters.",
        ),
        (
            request(&user.email.to_uppercase(), PLAIN_PASSWORD),
            "email",
            "New email must be different from your current email.",
        ),
        (
            request(&other.email, PLAIN_PASSWORD),
            "email",
            "This email address is already in use.",
        ),
        (
            request("new@example.com", "passworda"),
            "current_password",
            "The provided password is incorrect.",
        ),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/users/me/email-change")
            .set_json(body)
            .to_request();
        req.extensions_mut().insert(user.clone());
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST, "{}", message);

        let body: Value = test::read_body_json(res).await;
        assert!(
            error_messages(&body, field).contains(&message.to_string()),
            "{}",
            message
        );
    }

    let verifications = email_verification::Entity::find()
        .filter(email_verification::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert!(verifications.is_empty());

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_missing_fields() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/me/email-change")
        .set_json(serde_json::json!({}))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        error_messages(&body, "email"),
        vec!["New email address is required."]
    );
    assert_eq!(
        error_messages(&body, "current_password"),
        vec!["Current password is required for security."]
    );

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/me/email-change")
        .set_json(request("new@example.com", PLAIN_PASSWORD))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
