use iamc_core::entities::{LoginRequest, PublicKey, Session, User};
use iamc_core::enums::LoginStatus;
use iamc_core::{IdentityKind, ListQuery, Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::relations::{RelatedRow, related_rows};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserFields {
    id: String,
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRow {
    pub id: String,
    pub ip: String,
    pub status: LoginStatus,
    pub session: Option<String>,
}

impl From<LoginRequest> for LoginRow {
    fn from(login: LoginRequest) -> Self {
        Self {
            id: login.id,
            ip: login.ip,
            status: login.status,
            session: login.session,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionRow {
    pub id: String,
    pub address: String,
    pub expiration: Option<String>,
    /// `active` for the session this console is using.
    pub current: &'static str,
}

impl SessionRow {
    pub fn new(session: Session, current_session: Option<&str>) -> Self {
        let current = if current_session == Some(session.id.as_str()) {
            "active"
        } else {
            ""
        };
        Self {
            expiration: session.expiration.map(|at| at.to_rfc3339()),
            id: session.id,
            address: session.address,
            current,
        }
    }
}

#[derive(Debug, Serialize)]
struct UserDetail {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserFields>,
    groups: Vec<RelatedRow>,
    policies: Vec<RelatedRow>,
    public_keys: Vec<PublicKey>,
    logins: Vec<LoginRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logins_error: Option<String>,
    sessions: Vec<SessionRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sessions_error: Option<String>,
}

/// Render a user with its relations, logins and sessions.
///
/// The three fetches run concurrently and fail independently.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = ListQuery::new(0, ctx.config.general.default_limit);
    let (users, login_requests, user_sessions) =
        (ctx.iam.users(), ctx.iam.logins(), ctx.iam.sessions());
    let (user, logins, sessions) = tokio::join!(
        users.get(id),
        login_requests.list(id, &query),
        user_sessions.list(id, &query),
    );

    let (user, error) = split(inline(user)?);
    let (logins, logins_error) = split(inline(logins)?);
    let (sessions, sessions_error) = split(inline(sessions)?);
    let current_session = ctx.iam.session_id();

    let detail = UserDetail {
        route: Route::new(View::User(id.to_string())),
        error,
        groups: user
            .as_ref()
            .map(|u| related_rows(&u.groups, IdentityKind::Group))
            .unwrap_or_default(),
        policies: user
            .as_ref()
            .map(|u| related_rows(&u.policies, IdentityKind::Policy))
            .unwrap_or_default(),
        public_keys: user
            .as_ref()
            .map(|u| u.public_keys.clone())
            .unwrap_or_default(),
        user: user.map(|User { id, name, email, .. }| UserFields { id, name, email }),
        logins: logins
            .map(|page| page.items.into_iter().map(LoginRow::from).collect())
            .unwrap_or_default(),
        logins_error,
        sessions: sessions
            .map(|page| {
                page.items
                    .into_iter()
                    .map(|session| SessionRow::new(session, current_session))
                    .collect()
            })
            .unwrap_or_default(),
        sessions_error,
    };

    output(&detail, flags.format)
}

fn split<T>(result: Result<T, String>) -> (Option<T>, Option<String>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(message) => (None, Some(message)),
    }
}
