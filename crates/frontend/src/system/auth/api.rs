use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&LoginRequest { username, password })
        .map_err(|e| format!("No se pudo preparar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Servidor no disponible: {}", e))?;

    match response.status() {
        200 => response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Respuesta inválida: {}", e)),
        401 => Err("Usuario o contraseña incorrectos".to_string()),
        status => Err(error_message(status, &response.text().await.unwrap_or_default())),
    }
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }
    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }
    response.json::<UserInfo>().await.map_err(|e| e.to_string())
}
