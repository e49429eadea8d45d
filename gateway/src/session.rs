use std::sync::Arc;
use std::sync::RwLock;

use orgdesk_protocol::TokenPair;

/// In-memory credentials for the signed-in user.
///
/// A session missing either token counts as signed out for refresh
/// purposes, so a half-restored session can never drive a refresh call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// Observer for session transitions.
///
/// The gateway never touches persistent storage itself; a listener can
/// mirror tokens into whatever store the host app uses and route the UI
/// to the sign-in flow when the session is cleared.
pub trait SessionListener: Send + Sync {
    fn session_changed(&self, session: &Session);
}

/// Process-wide owner of the session.
///
/// The only writers are explicit sign-in/sign-out actions and the
/// gateway's refresh settlement.
#[derive(Default)]
pub struct SessionStore {
    session: RwLock<Session>,
    listener: RwLock<Option<Arc<dyn SessionListener>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&self, listener: Arc<dyn SessionListener>) {
        if let Ok(mut guard) = self.listener.write() {
            *guard = Some(listener);
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session
            .read()
            .map(|session| session.clone())
            .unwrap_or_default()
    }

    pub fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .ok()
            .and_then(|session| session.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .ok()
            .and_then(|session| session.refresh_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session
            .read()
            .map(|session| session.access_token.is_some())
            .unwrap_or(false)
    }

    /// Install a restored session, e.g. tokens read back from disk by the
    /// host app at startup.
    pub fn restore(&self, session: Session) {
        self.replace(session);
    }

    pub fn set_tokens(&self, tokens: TokenPair) {
        self.replace(Session {
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
        });
    }

    pub fn sign_out(&self) {
        self.replace(Session::default());
    }

    fn replace(&self, next: Session) {
        if let Ok(mut guard) = self.session.write() {
            *guard = next.clone();
        }
        let listener = self
            .listener
            .read()
            .ok()
            .and_then(|guard| guard.clone());
        if let Some(listener) = listener {
            listener.session_changed(&next);
        }
    }
}
