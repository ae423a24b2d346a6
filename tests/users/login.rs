use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::users::types::LoginRequest;

use crate::utils::{init_app, init_app_with_redis, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn not_found_on_incorrect_password() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            email: user.email.to_string(),
            password: "passworda".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    assert!(crate::utils::session_cookie(&res).is_none());

    Ok(())
}

#[actix_web::test]
async fn not_found_if_inactive() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(HASHED_PASSWORD)
        .is_active(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            email: user.email.to_string(),
            password: PLAIN_PASSWORD.to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
#[ignore = "needs a running Redis at REDIS_URL"]
async fn block_too_many_attempts_on_incorrect_password() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app_with_redis().await?;
    let incorrect_password = "passworda";
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    for _ in 0..settings.application.max_login_attempts {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(LoginRequest {
                email: user.email.to_string(),
                password: incorrect_password.to_string(),
            })
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
    }

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            email: user.email.to_string(),
            password: PLAIN_PASSWORD.to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::TOO_MANY_REQUESTS);

    Ok(())
}
