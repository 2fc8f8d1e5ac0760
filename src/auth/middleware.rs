use actix_session::SessionExt;
use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::auth::session;
use crate::errors::see_other;

/// Redirects to /login unless the session carries a signed-in user.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if !session::is_signed_in(&req.get_session()) {
        log::debug!("Unauthenticated request for {}", req.path());
        return Ok(req.into_response(see_other("/login")).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
