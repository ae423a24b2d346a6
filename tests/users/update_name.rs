use actix_web::{http, test, HttpMessage};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::Value;
use use_cases::users::types::UpdateNameRequest;

use crate::utils::{error_messages, init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/users/me/name")
        .set_json(UpdateNameRequest {
            name: "  Jean-Luc <i>O'Neil</i> ".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Name updated successfully.");
    assert_eq!(body["data"]["user"]["name"], "Jean-Luc O'Neil");

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.name, "Jean-Luc O'Neil");

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_names() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let long_name = "a".repeat(51);

    for (name, message) in [
        ("A", "Name must be at least 2 characters."),
        ("<b></b>", "Name must be at least 2 characters."),
        (long_name.as_str(), "Name cannot exceed 50 characters."),
        (
            "R2-D2",
            "Name can only contain letters, spaces, hyphens, and apostrophes.",
        ),
    ] {
        let req = test::TestRequest::put()
            .uri("/api/users/me/name")
            .set_json(UpdateNameRequest {
                name: name.to_string(),
            })
            .to_request();
        req.extensions_mut().insert(user.clone());
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST, "{}", name);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(error_messages(&body, "name"), vec![message], "{}", name);
    }

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.name, user.name);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::put()
        .uri("/api/users/me/name")
        .set_json(UpdateNameRequest {
            name: "Ada".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
