use actix_web::{cookie::Cookie, http, test};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::users::types::LoginRequest;

use crate::utils::{init_app, session_cookie, Connections};
use common::factory::{self, *};

async fn login<S>(app: &S, email: &str) -> Cookie<'static>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            email: email.to_string(),
            password: PLAIN_PASSWORD.to_string(),
        })
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    session_cookie(&res).expect("login sets the session cookie")
}

#[actix_web::test]
async fn login_to_get_me_to_logout() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let session_cookie = login(&app, &user.email).await;

    let check_req = test::TestRequest::get()
        .uri("/api/users/me")
        .cookie(session_cookie.clone())
        .to_request();
    let res = test::call_service(&app, check_req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let logout_req = test::TestRequest::post()
        .uri("/api/users/logout")
        .cookie(session_cookie.clone())
        .to_request();
    let res = test::call_service(&app, logout_req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let cleared_cookie = crate::utils::session_cookie(&res).expect("logout clears the cookie");
    assert_eq!(cleared_cookie.value(), "");

    let check_req = test::TestRequest::get()
        .uri("/api/users/me")
        .cookie(cleared_cookie)
        .to_request();
    let res = test::call_service(&app, check_req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn logout_all_devices_keeps_only_the_current_session() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let laptop = login(&app, &user.email).await;
    let phone = login(&app, &user.email).await;

    let req = test::TestRequest::post()
        .uri("/api/users/logout-all-devices")
        .cookie(laptop.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let laptop = session_cookie(&res).expect("current session is re-stamped");

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.session_version, user.session_version + 1);

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .cookie(laptop)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .cookie(phone)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn logout_all_devices_unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/logout-all-devices")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
