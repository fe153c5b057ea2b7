use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::resource::SessionListener;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// A stored token is being checked against `/api/auth/me`
    pub restoring: bool,
}

impl AuthState {
    pub fn signed_in(token: String, user: UserInfo) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            restoring: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, UserInfo::is_admin)
    }
}

/// Handle to the signed-in session, provided by [`AuthProvider`].
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
}

impl AuthSession {
    pub fn new(initial: AuthState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|state| state.user.clone())
    }

    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_token(&response.token);
        storage::save_user(&response.user);
        log::info!("signed in as {}", response.user.username);
        self.state
            .set(AuthState::signed_in(response.token, response.user));
    }

    /// Drops the stored token; the login gate swaps the console out.
    pub fn sign_out(&self) {
        storage::clear_tokens();
        self.state.try_set(AuthState::default());
    }
}

impl SessionListener for AuthSession {
    fn session_expired(&self) {
        log::warn!("session expired, signing out");
        self.sign_out();
    }
}

/// Restores a stored session on mount and provides [`AuthSession`].
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_token() {
        Some(token) => AuthState {
            token: Some(token),
            user: storage::get_user(),
            restoring: true,
        },
        None => AuthState::default(),
    };
    let session = AuthSession::new(initial);

    if let Some(token) = session.state.with_untracked(|state| state.token.clone()) {
        spawn_local(async move {
            match api::current_user(&token).await {
                Ok(user) => {
                    storage::save_user(&user);
                    session.state.try_set(AuthState::signed_in(token, user));
                }
                Err(e) => {
                    log::warn!("stored session rejected: {}", e);
                    session.sign_out();
                }
            }
        });
    }

    provide_context(session);

    children()
}

pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "admin".into(),
            full_name: None,
            role: Some(role.into()),
        }
    }

    #[test]
    fn test_auth_state_roles() {
        assert!(!AuthState::default().is_authenticated());

        let owner = AuthState::signed_in("t".into(), user("owner"));
        assert!(owner.is_authenticated());
        assert!(owner.is_admin());

        let clerk = AuthState::signed_in("t".into(), user("employee"));
        assert!(!clerk.is_admin());
    }
}
