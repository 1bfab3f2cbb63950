use serde::{Deserialize, Deserializer, Serialize};

// ============ Query ============

/// Server-side name filter.
///
/// Either the universal wildcard `*` or a substring wrapped in wildcards
/// (`*text*`). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamePattern(String);

impl NamePattern {
    /// The match-all pattern.
    pub const WILDCARD: &'static str = "*";

    /// Normalize raw operator input: trimmed, empty becomes `*`, anything else `*text*`.
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::any()
        } else {
            Self(format!("*{trimmed}*"))
        }
    }

    pub fn any() -> Self {
        Self(Self::WILDCARD.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    /// The substring between the wildcards, `None` for the universal wildcard.
    pub fn needle(&self) -> Option<&str> {
        if self.is_wildcard() {
            return None;
        }
        Some(self.0.trim_matches('*')).filter(|s| !s.is_empty())
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        Self::any()
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of one list request.
///
/// Pages are 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (0-indexed).
    pub page: u32,
    /// Number of items per page, fixed per resource kind.
    pub page_size: u32,
    /// Name filter.
    pub pattern: NamePattern,
}

impl ListQuery {
    pub fn first_page(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            pattern: NamePattern::any(),
        }
    }

    /// Same filter and size, different page.
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            page_size: self.page_size,
            pattern: self.pattern.clone(),
        }
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// At least one more row exists beyond this page for the same filter.
    pub more: bool,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, more: bool) -> Self {
        Self { items, more }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            more: false,
        }
    }
}

// ============ Franchises ============

/// A franchisee administrating a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A store belonging to a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub admins: Vec<FranchiseAdmin>,
    #[serde(default)]
    pub stores: Vec<Store>,
}

impl Franchise {
    pub fn store(&self, store_id: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == store_id)
    }

    /// Comma separated admin names, as shown in the franchise row.
    pub fn admin_names(&self) -> String {
        self.admins
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============ Users ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Diner,
    Franchisee,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diner => "diner",
            Self::Franchisee => "franchisee",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }
}

/// A role granted to a user, optionally scoped to an object (e.g. a franchise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_id")]
    pub object_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Missing on rows the service has not persisted yet.
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    /// Role names joined for display, `None` when the user has no roles.
    pub fn role_summary(&self) -> Option<String> {
        if self.roles.is_empty() {
            return None;
        }
        Some(
            self.roles
                .iter()
                .map(|r| r.role.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

// ============ Wire envelopes ============

#[derive(Debug, Deserialize)]
pub(crate) struct FranchiseListResponse {
    #[serde(default)]
    pub franchises: Vec<Franchise>,
    #[serde(default)]
    pub more: bool,
}

impl From<FranchiseListResponse> for ListResult<Franchise> {
    fn from(resp: FranchiseListResponse) -> Self {
        Self::new(resp.franchises, resp.more)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub more: bool,
}

impl From<UserListResponse> for ListResult<User> {
    fn from(resp: UserListResponse) -> Self {
        Self::new(resp.users, resp.more)
    }
}

// ============ Id helpers ============

/// The service emits ids as either JSON strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

fn de_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn de_opt_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}
