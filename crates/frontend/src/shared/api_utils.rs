//! API utilities for frontend-backend communication
//!
//! Every business endpoint sits behind the bearer token; requests that come
//! back 401 are retried once with a refreshed access token.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::{api as auth_api, storage};

/// Base URL of the backend: same host as the page, port 3000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// User facing text for a failed response. The backend sends
/// `{"error": "..."}` for business errors; bare status codes get a generic text.
pub fn error_message(status: u16, body: &str) -> String {
    let from_body = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|s| !s.trim().is_empty());
    if let Some(message) = from_body {
        return message;
    }
    match status {
        400 => "Datos inválidos".to_string(),
        401 => "Sesión expirada, inicie sesión de nuevo".to_string(),
        403 => "No tiene permisos para esta operación".to_string(),
        404 => "Registro no encontrado".to_string(),
        s => format!("Error del servidor ({})", s),
    }
}

fn build(
    method: Method,
    url: &str,
    body: Option<&str>,
    token: Option<&str>,
) -> Result<Request, String> {
    let mut builder = RequestBuilder::new(url)
        .method(method)
        .header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(json.to_string())
            .map_err(|e| e.to_string()),
        None => builder.build().map_err(|e| e.to_string()),
    }
}

async fn refreshed_access_token() -> Option<String> {
    let refresh_token = storage::get_refresh_token()?;
    match auth_api::refresh_token(refresh_token).await {
        Ok(r) => {
            storage::save_access_token(&r.access_token);
            Some(r.access_token)
        }
        Err(e) => {
            log::warn!("Token refresh failed: {}", e);
            None
        }
    }
}

async fn send(method: Method, path: &str, body: Option<String>) -> Result<Response, String> {
    let url = api_url(path);
    let token = storage::get_access_token();
    let response = build(method.clone(), &url, body.as_deref(), token.as_deref())?
        .send()
        .await
        .map_err(|e| format!("Servidor no disponible: {}", e))?;

    if response.status() != 401 {
        return Ok(response);
    }
    match refreshed_access_token().await {
        Some(token) => build(method, &url, body.as_deref(), Some(&token))?
            .send()
            .await
            .map_err(|e| format!("Servidor no disponible: {}", e)),
        None => Ok(response),
    }
}

async fn into_result<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Respuesta inválida: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    into_result(send(Method::GET, path, None).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let json = serde_json::to_string(body).map_err(|e| e.to_string())?;
    into_result(send(Method::POST, path, Some(json)).await?).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = send(Method::DELETE, path, None).await?;
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(error_message(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body() {
        let body = r#"{"error":"No se puede eliminar la categoría \"Bebidas\""}"#;
        assert_eq!(
            error_message(409, body),
            "No se puede eliminar la categoría \"Bebidas\""
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(403, ""), "No tiene permisos para esta operación");
        assert_eq!(error_message(500, "<html>"), "Error del servidor (500)");
        assert_eq!(error_message(400, r#"{"error":"  "}"#), "Datos inválidos");
    }
}
