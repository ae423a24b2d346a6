use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_session::SessionExt;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;
use tracing::{event, Level};

use crate::utils::auth::session::{get_session_version, get_user_id};

/// Resolves the session's user and stores the `user::Model` in the request
/// extensions. Sessions stamped with an outdated version are purged instead.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            let session = req.get_session();
            if let (Ok(user_id), Some(db)) = (get_user_id(&session), req.app_data::<Data<DbConn>>())
            {
                match UserAdapter::init(db)
                    .filter_eq_is_active(true)
                    .get_by_id(user_id)
                    .await
                {
                    Ok(Some(user)) => match get_session_version(&session) {
                        Ok(version) if version == user.session_version => {
                            req.extensions_mut().insert(user);
                        }
                        Ok(_) => {
                            event!(target: "backend", Level::INFO, "Rejected a session with an outdated version.");
                            session.purge();
                        }
                        Err(e) => {
                            event!(target: "backend", Level::WARN, "Error reading session version: {:?}", e);
                        }
                    },
                    Ok(None) => session.purge(),
                    Err(e) => {
                        event!(target: "backend", Level::ERROR, "Error getting user in the middleware: {:?}", e);
                    }
                }
            }

            let res = svc.call(req).await?;

            Ok(res)
        })
    }
}
