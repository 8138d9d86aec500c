use std::fmt;

/// Vendor token identifying a registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId(String);

/// Vendor token authorizing data reads.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionId(String);

/// The id the vendor hands back when it rejects the credentials.
const NIL_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// Check a token returned by a login call. Tokens are opaque; only the empty
/// string and the nil id are refused. Returns a reason on rejection.
fn check_token(token: &str) -> Result<(), String> {
    if token.trim().is_empty() {
        Err("vendor returned an empty id".to_string())
    } else if token == NIL_GUID {
        Err("vendor returned the nil id".to_string())
    } else {
        Ok(())
    }
}

impl AccountId {
    pub fn parse(token: String) -> Result<Self, String> {
        check_token(&token)?;
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SessionId {
    pub fn parse(token: String) -> Result<Self, String> {
        check_token(&token)?;
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Session ids are bearer secrets; keep them out of logs
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionId(<redacted>)")
    }
}

/// Progress through the login handshake. Only ever moves forward.
#[derive(Debug, Clone, Default)]
pub enum LoginState {
    #[default]
    Unauthenticated,
    AccountResolved(AccountId),
    Authenticated {
        account_id: AccountId,
        session_id: SessionId,
    },
}

impl LoginState {
    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            LoginState::Unauthenticated => None,
            LoginState::AccountResolved(account_id)
            | LoginState::Authenticated { account_id, .. } => Some(account_id),
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            LoginState::Authenticated { session_id, .. } => Some(session_id),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_id().is_some()
    }

    /// Record the account id. No-op once an account id is known.
    pub fn resolve_account(&mut self, account_id: AccountId) {
        if let LoginState::Unauthenticated = self {
            *self = LoginState::AccountResolved(account_id);
        }
    }

    /// Record the session id. No-op unless the account id is known and no
    /// session has been recorded yet.
    pub fn authenticate(&mut self, session_id: SessionId) {
        if let LoginState::AccountResolved(account_id) = self {
            let account_id = account_id.clone();
            *self = LoginState::Authenticated {
                account_id,
                session_id,
            };
        }
    }
}
