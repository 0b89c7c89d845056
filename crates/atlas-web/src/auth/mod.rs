/// Authentication management for the web interface
///
/// Handles login/logout, session state, and token storage. Components
/// only ever read the session signal and dispatch the two actions; any
/// redirect after logout is performed here, not by the callers.

use gloo_net::http::Request;
use leptos::*;
use leptos_router::use_navigate;
use serde::{Deserialize, Serialize};

use crate::types::{ApiResponse, AuthSession, User};

const SESSION_STORAGE_KEY: &str = "atlas_session";

/// Authentication context and state management
#[derive(Clone)]
pub struct AuthContext {
    pub session: ReadSignal<Option<AuthSession>>,
    pub set_session: WriteSignal<Option<AuthSession>>,
    pub login: Action<LoginRequest, Result<(), String>>,
    pub logout: Action<(), ()>,
    pub is_loading: ReadSignal<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    pub expires_at: String,
}

/// Authentication provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = create_signal::<Option<AuthSession>>(None);
    let (is_loading, set_loading) = create_signal(false);

    // Restore a persisted session on mount
    create_effect(move |_| {
        if let Some(stored_session) = get_stored_session() {
            set_session.set(Some(stored_session));
        }
    });

    let login = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        async move {
            set_loading.set(true);

            match perform_login(request).await {
                Ok(auth_session) => {
                    log::info!("user {} signed in", auth_session.user.name);
                    store_session(&auth_session);
                    set_session.set(Some(auth_session));
                    set_loading.set(false);
                    Ok(())
                }
                Err(error) => {
                    log::warn!("login failed: {}", error);
                    set_loading.set(false);
                    Err(error)
                }
            }
        }
    });

    let navigate = use_navigate();
    let logout = create_action(move |_: &()| {
        let navigate = navigate.clone();
        async move {
            log::info!("signing out");
            clear_stored_session();
            set_session.set(None);
            navigate("/login", Default::default());
        }
    });

    provide_context(AuthContext {
        session,
        set_session,
        login,
        logout,
        is_loading,
    });

    children()
}

/// Hook to access the authentication context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by AuthProvider")
}

/// Perform the login API call
async fn perform_login(request: LoginRequest) -> Result<AuthSession, String> {
    let response = Request::post("/api/auth/login")
        .header("Content-Type", "application/json")
        .json(&request)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Login failed: {}", error_text));
    }

    let login_response: ApiResponse<LoginResponse> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !login_response.success {
        return Err(login_response
            .error
            .unwrap_or_else(|| "Login failed".to_string()));
    }

    let data = login_response
        .data
        .ok_or_else(|| "No login data received".to_string())?;

    let expires_at = chrono::DateTime::parse_from_rfc3339(&data.expires_at)
        .map_err(|e| format!("Invalid date format: {}", e))?
        .with_timezone(&chrono::Utc);

    Ok(AuthSession {
        user: data.user,
        token: data.token,
        expires_at,
    })
}

/// Persist the session in localStorage
fn store_session(session: &AuthSession) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(session_json) = serde_json::to_string(session) {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &session_json);
            }
        }
    }
}

/// Read a still-valid persisted session, if any
fn get_stored_session() -> Option<AuthSession> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let session_json = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    let session = serde_json::from_str::<AuthSession>(&session_json).ok()?;

    if session.is_expired() {
        None
    } else {
        Some(session)
    }
}

fn clear_stored_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
