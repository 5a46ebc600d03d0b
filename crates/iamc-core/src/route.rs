//! Client-side routes.
//!
//! A [`Route`] is a view plus its query parameters. Commands print routes as
//! their navigation result, and `iamc open` parses them back into views, so
//! `Route::parse(&route.to_string()) == route` for every route.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::enums::SortOrder;
use crate::paging::{ListQuery, reconcile_offset};

/// Forms reachable under `/create/*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateForm {
    User,
    Group,
    Policy,
    Topic,
    Chat,
}

impl CreateForm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Policy => "policy",
            Self::Topic => "topic",
            Self::Chat => "chat",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "group" => Some(Self::Group),
            "policy" => Some(Self::Policy),
            "topic" => Some(Self::Topic),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }
}

/// Editable user fields under `/edit/user/:id/*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

/// Every view the console can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Users,
    User(String),
    Groups,
    Group(String),
    Policies,
    Policy(String),
    Sessions,
    Session(String),
    Topics,
    Topic(String),
    PageViews,
    Chats,
    Chat(String),
    Create(CreateForm),
    EditUser { id: String, field: UserField },
    NotFound(String),
}

impl View {
    /// Whether this view is a paged list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(
            self,
            Self::Users | Self::Groups | Self::Policies | Self::Sessions | Self::Topics
        )
    }

    fn path(&self) -> String {
        let seg = |s: &str| urlencoding::encode(s).into_owned();
        match self {
            Self::Users => "/users".into(),
            Self::User(id) => format!("/users/{}", seg(id)),
            Self::Groups => "/groups".into(),
            Self::Group(id) => format!("/groups/{}", seg(id)),
            Self::Policies => "/policies".into(),
            Self::Policy(id) => format!("/policies/{}", seg(id)),
            Self::Sessions => "/sessions".into(),
            Self::Session(id) => format!("/sessions/{}", seg(id)),
            Self::Topics => "/topics".into(),
            Self::Topic(id) => format!("/topics/{}", seg(id)),
            Self::PageViews => "/pageviews".into(),
            Self::Chats => "/chats".into(),
            Self::Chat(id) => format!("/chats/{}", seg(id)),
            Self::Create(form) => format!("/create/{}", form.as_str()),
            Self::EditUser { id, field } => format!("/edit/user/{}/{}", seg(id), field.as_str()),
            Self::NotFound(path) => path.clone(),
        }
    }

    fn from_segments(path: &str, segments: &[String]) -> Self {
        let not_found = || Self::NotFound(path.to_string());
        match segments
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .as_slice()
        {
            [] | ["users"] => Self::Users,
            ["users", id] => Self::User((*id).to_string()),
            ["groups"] => Self::Groups,
            ["groups", id] => Self::Group((*id).to_string()),
            ["policies"] => Self::Policies,
            ["policies", id] => Self::Policy((*id).to_string()),
            ["sessions"] => Self::Sessions,
            ["sessions", id] => Self::Session((*id).to_string()),
            ["topics"] => Self::Topics,
            ["topics", id] => Self::Topic((*id).to_string()),
            ["pageviews"] => Self::PageViews,
            ["chats"] => Self::Chats,
            ["chats", id] => Self::Chat((*id).to_string()),
            ["create", form] => CreateForm::parse(form).map_or_else(not_found, Self::Create),
            ["edit", "user", id, "name"] => Self::EditUser {
                id: (*id).to_string(),
                field: UserField::Name,
            },
            ["edit", "user", id, "email"] => Self::EditUser {
                id: (*id).to_string(),
                field: UserField::Email,
            },
            _ => not_found(),
        }
    }
}

/// A view plus its query parameters, kept in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    params: Vec<(String, String)>,
}

impl Route {
    #[must_use]
    pub const fn new(view: View) -> Self {
        Self {
            view,
            params: Vec::new(),
        }
    }

    /// Parse a client-side path such as `/users?offset=50&limit=50`.
    ///
    /// Total: unknown paths become [`View::NotFound`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .collect();
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query(key), decode_query(value))
            })
            .collect();

        Self {
            view: View::from_segments(path, &segments),
            params,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.view.path()
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Set `key`, replacing an existing value in place or appending.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.params.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.params.push((key.to_string(), value));
        }
        self
    }

    /// Set `key` when `value` is `Some` and non-empty, otherwise remove it.
    #[must_use]
    pub fn with_optional_param(self, key: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => self.with_param(key, value),
            None => self.without_param(key),
        }
    }

    #[must_use]
    pub fn without_param(mut self, key: &str) -> Self {
        self.params.retain(|(k, _)| k != key);
        self
    }

    #[must_use]
    pub fn with_offset(self, offset: u64) -> Self {
        self.with_param("offset", offset.to_string())
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.param("offset")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        self.param("limit")
            .and_then(|v| v.parse().ok())
            .filter(|limit| *limit > 0)
    }

    /// List query described by this route's parameters.
    #[must_use]
    pub fn list_query(&self, default_limit: u64) -> ListQuery {
        ListQuery::new(self.offset(), self.limit().unwrap_or(default_limit))
            .with_search(self.param("search").map(str::to_string))
            .with_sort(
                self.param("sort").map(str::to_string),
                self.param("order").and_then(SortOrder::parse),
            )
    }

    /// The same view one page back, or on its last page when this offset is
    /// past `total`, for when this page came back empty.
    ///
    /// Every other query parameter is preserved verbatim.
    #[must_use]
    pub fn reconciled(&self, default_limit: u64, total: u64) -> Option<Self> {
        let limit = self.limit().unwrap_or(default_limit).max(1);
        reconcile_offset(self.offset(), limit, total)
            .map(|offset| self.clone().with_offset(offset))
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        Self::new(view)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())?;
        for (index, (key, value)) in self.params.iter().enumerate() {
            let sep = if index == 0 { '?' } else { '&' };
            write!(
                f,
                "{sep}{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), std::borrow::Cow::into_owned)
}

fn decode_query(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/users", View::Users)]
    #[case("/", View::Users)]
    #[case("/users/u-1", View::User("u-1".into()))]
    #[case("/groups/ops", View::Group("ops".into()))]
    #[case("/policies", View::Policies)]
    #[case("/sessions/s-1", View::Session("s-1".into()))]
    #[case("/topics/t-1", View::Topic("t-1".into()))]
    #[case("/pageviews", View::PageViews)]
    #[case("/chats", View::Chats)]
    #[case("/create/policy", View::Create(CreateForm::Policy))]
    #[case("/edit/user/u-1/email", View::EditUser { id: "u-1".into(), field: UserField::Email })]
    #[case("/create/widget", View::NotFound("/create/widget".into()))]
    #[case("/nope/a/b", View::NotFound("/nope/a/b".into()))]
    fn parses_views(#[case] raw: &str, #[case] expected: View) {
        assert_eq!(Route::parse(raw).view, expected);
    }

    #[test]
    fn decodes_encoded_segments_and_query() {
        let route = Route::parse("/users/a%40x.io?search=al+ice&sort=email");
        assert_eq!(route.view, View::User("a@x.io".into()));
        assert_eq!(route.param("search"), Some("al ice"));
        assert_eq!(route.param("sort"), Some("email"));
    }

    #[test]
    fn display_round_trips() {
        let route = Route::new(View::User("a@x.io".into()))
            .with_param("search", "a b")
            .with_offset(20);
        let rendered = route.to_string();
        assert_eq!(rendered, "/users/a%40x.io?search=a%20b&offset=20");
        assert_eq!(Route::parse(&rendered), route);
    }

    #[test]
    fn reconciled_preserves_other_params() {
        let route = Route::parse("/users?search=al&offset=50&limit=50&sort=email&order=desc");
        let reconciled = route.reconciled(10, 100).expect("offset > 0");
        assert_eq!(
            reconciled.to_string(),
            "/users?search=al&offset=0&limit=50&sort=email&order=desc"
        );
    }

    #[test]
    fn reconciled_uses_default_limit_when_absent() {
        let route = Route::parse("/groups?offset=15");
        assert_eq!(route.reconciled(10, 100).unwrap().offset(), 5);
    }

    #[test]
    fn reconciled_jumps_to_last_page_past_total() {
        let route = Route::parse("/users?search=al&offset=900&limit=25");
        assert_eq!(
            route.reconciled(10, 60).unwrap().to_string(),
            "/users?search=al&offset=50&limit=25"
        );
    }

    #[test]
    fn first_page_is_not_reconciled() {
        assert!(Route::parse("/users?limit=10").reconciled(10, 0).is_none());
    }

    #[test]
    fn list_query_reads_params() {
        let q = Route::parse("/policies?offset=10&limit=5&search=adm&order=ASC").list_query(20);
        assert_eq!(q.offset, 10);
        assert_eq!(q.limit, 5);
        assert_eq!(q.search.as_deref(), Some("adm"));
        assert_eq!(q.order, Some(SortOrder::Asc));
    }

    #[test]
    fn with_optional_param_removes_empty_values() {
        let route = Route::parse("/users?search=al").with_optional_param("search", Some(""));
        assert_eq!(route.param("search"), None);
    }
}
