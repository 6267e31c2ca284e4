#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
#[allow(dead_code)]
pub fn create_resident_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-resident".to_string(),
        roles: vec!["resident".to_string()],
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_committee_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-committee".to_string(),
        roles: vec!["committee".to_string()],
    }
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_resident_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_resident_user());
    next.run(request).await
}

#[cfg(test)]
#[allow(dead_code)]
pub fn with_resident_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_resident_middleware))
}
