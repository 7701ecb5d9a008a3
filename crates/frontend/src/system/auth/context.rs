use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Access token from storage, refreshed once when the server rejects it
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
        });
    }

    let refresh_token = storage::get_refresh_token()?;
    let refreshed = api::refresh_token(refresh_token).await.ok()?;
    storage::save_access_token(&refreshed.access_token);
    let user_info = api::get_current_user(&refreshed.access_token).await.ok()?;
    Some(AuthState {
        access_token: Some(refreshed.access_token),
        user_info: Some(user_info),
    })
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(async move {
        match restore_session().await {
            Some(state) => set_auth_state.set(state),
            None => storage::clear_tokens(),
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}

/// Store the tokens of a successful login and switch to the dashboard
pub fn start_session(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let mut state = AuthState::default();
        assert!(!state.is_admin());
        state.user_info = Some(UserInfo {
            id: "1".into(),
            username: "admin".into(),
            full_name: None,
            email: None,
            is_admin: true,
        });
        assert!(state.is_admin());
    }
}
