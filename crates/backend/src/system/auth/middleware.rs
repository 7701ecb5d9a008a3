use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use contracts::system::auth::TokenClaims;

fn bearer_token(req: &Request<Body>) -> Result<&str, StatusCode> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)
}

async fn authenticate(token: String) -> Result<TokenClaims, StatusCode> {
    super::jwt::validate_token(&token).await.map_err(|e| {
        tracing::debug!("Rejected token: {:#}", e);
        StatusCode::UNAUTHORIZED
    })
}

/// Requires a valid access token; the claims are available to handlers via
/// [`super::extractor::CurrentUser`].
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?.to_string();
    let claims = authenticate(token).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/category");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&request_with(Some("Bearer abc"))), Ok("abc"));
        assert_eq!(
            bearer_token(&request_with(None)),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            bearer_token(&request_with(Some("Basic abc"))),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            bearer_token(&request_with(Some("Bearer "))),
            Err(StatusCode::UNAUTHORIZED)
        );
    }
}
