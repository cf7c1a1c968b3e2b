//! Role extraction and membership
//!
//! The backend serializes granted roles in two shapes: bare names
//! (`"ROLE_ADMIN"`) and wrapped objects (`{"authority": "ROLE_ADMIN"}`).
//! Both are normalized to plain name strings at this boundary; everything
//! past it only ever sees the normalized form.

use serde_json::Value;

/// A single role entry as found in a token payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleEntry {
    /// A bare role name
    PlainName(String),
    /// A name wrapped in an `authority` object
    AuthorityWrapped(String),
}

impl RoleEntry {
    /// Parse one entry; `None` when the shape is neither known form
    fn from_value(value: &Value) -> Option<Self> {
        if let Some(name) = value.as_str() {
            return Some(RoleEntry::PlainName(name.to_string()));
        }
        if let Some(name) = value.get("authority").and_then(Value::as_str) {
            return Some(RoleEntry::AuthorityWrapped(name.to_string()));
        }
        None
    }

    /// The role name carried by this entry
    pub fn name(&self) -> &str {
        match self {
            RoleEntry::PlainName(name) | RoleEntry::AuthorityWrapped(name) => name,
        }
    }
}

/// Extract role names from an `authorities` claim value
///
/// Entries in an unknown shape are kept as their JSON text; a value that is
/// not a sequence yields an empty list, never an error.
pub fn extract_roles(value: &Value) -> Vec<String> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| match RoleEntry::from_value(entry) {
            Some(role) => role.name().to_string(),
            None => entry.to_string(),
        })
        .collect()
}

/// The ordered role names attached to the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    roles: Vec<String>,
}

impl RoleSet {
    /// Build a role set from already-extracted names
    pub fn new(roles: Vec<String>) -> Self {
        RoleSet { roles }
    }

    /// The raw role names, in token order
    pub fn names(&self) -> &[String] {
        &self.roles
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Case-insensitive membership, tolerating a `ROLE_` prefix on either side
    pub fn has_role(&self, name: &str) -> bool {
        let target = normalize(name);
        self.roles.iter().any(|role| normalize(role) == target)
    }

    /// True when at least one of the given roles is held
    pub fn has_any_role(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_role(name))
    }
}

fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    upper
        .strip_prefix("ROLE_")
        .map(str::to_string)
        .unwrap_or(upper)
}

/// Human-facing name for a role badge (`"ROLE_ADMIN"` -> `"Admin"`)
pub fn display_name(role: &str) -> String {
    if role.trim().is_empty() {
        return "Desconocido".to_string();
    }

    normalize(role)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Badge color for a role
///
/// GESTOR is styling-only; it carries no permission semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Blue,
    Amber,
    Gray,
}

impl BadgeColor {
    /// Get the color name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Red => "red",
            BadgeColor::Blue => "blue",
            BadgeColor::Amber => "amber",
            BadgeColor::Gray => "gray",
        }
    }
}

/// Badge color for a role name
pub fn badge_color(role: &str) -> BadgeColor {
    match normalize(role).as_str() {
        "ADMIN" => BadgeColor::Red,
        "PROFESOR" => BadgeColor::Blue,
        "GESTOR" => BadgeColor::Amber,
        _ => BadgeColor::Gray,
    }
}
