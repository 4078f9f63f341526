//! Request extension trait for extracting claims from HTTP requests.

use actix_web::HttpMessage;

use crate::models::Claims;

/// Access to the claims [`AuthMiddleware`](super::AuthMiddleware) stored on
/// the request.
pub trait RequestExt {
    /// `None` when the request did not pass through the auth middleware.
    fn get_claims(&self) -> Option<Claims>;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }
}
