//! Authentication and authorization helper functions.
//!
//! These keep handlers short: pull the claims off the request, then check
//! the caller's role grants the permission the endpoint needs.

use actix_web::HttpRequest;
use log::warn;

use crate::constants::{CODE_AUTH_REQUIRED, CODE_FORBIDDEN, ERR_AUTH_REQUIRED, ERR_PERMISSION_DENIED};
use crate::errors::ApiError;
use crate::models::{Claims, Permission};

use super::RequestExt;

/// Extract claims from request or return Unauthorized error.
///
/// # Example
/// ```ignore
/// let claims = require_auth(&req)?;
/// ```
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::unauthorized(CODE_AUTH_REQUIRED, ERR_AUTH_REQUIRED)
    })
}

/// Require that the caller's role grants `permission`, or return Forbidden.
pub fn require_permission(claims: &Claims, permission: Permission) -> Result<(), ApiError> {
    if !claims.has_permission(permission) {
        warn!(
            "User {} (role: {}) lacks permission {}",
            claims.sub, claims.role, permission
        );
        return Err(ApiError::forbidden(CODE_FORBIDDEN, ERR_PERMISSION_DENIED));
    }
    Ok(())
}

/// [`require_auth`] followed by [`require_permission`].
pub fn authorize(req: &HttpRequest, permission: Permission) -> Result<Claims, ApiError> {
    let claims = require_auth(req)?;
    require_permission(&claims, permission)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test::TestRequest, HttpMessage, ResponseError};
    use actix_web::http::StatusCode;

    fn claims(role: &str) -> Claims {
        Claims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            email: "jane@example.com".to_string(),
            role: role.to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_missing_claims_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = authorize(&req, Permission::EmployeeRead).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_permission_is_forbidden() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims("employee"));

        let err = authorize(&req, Permission::EmployeeDelete).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.code(), CODE_FORBIDDEN);
    }

    #[test]
    fn test_granted_permission_returns_claims() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims("admin"));

        let granted = authorize(&req, Permission::EmployeeDelete).unwrap();
        assert_eq!(granted.role, "admin");
    }
}
