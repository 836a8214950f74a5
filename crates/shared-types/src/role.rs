/// Roles that share the pending business dashboard. Neither one redirects
/// into the other's URL segment.
pub const BUSINESS_ROLES: &[&str] = &["exporter", "supplier"];

/// Account roles the marketplace knows about, in their raw stored form.
pub const KNOWN_ROLES: &[&str] = &[
    "farmer",
    "exporter",
    "consumer",
    "supplier",
    "service_provider",
    "admin",
];

/// Roles that only an operator can grant. Self-registration never offers or
/// accepts them.
pub const RESERVED_ROLES: &[&str] = &["admin"];

/// Whether a user may pick `role` for themselves when registering.
///
/// Accepts raw or canonical input. Blank roles are not assignable.
pub fn is_self_assignable(role: &str) -> bool {
    let canonical = normalize_role(Some(role));
    !canonical.is_empty() && !RESERVED_ROLES.contains(&canonical.as_str())
}

/// Canonicalize a raw role string: trim, lowercase, underscores to hyphens.
///
/// `None` and blank input map to the empty string, meaning "role unknown".
/// Applying this to an already-canonical role returns it unchanged.
pub fn normalize_role(raw: Option<&str>) -> String {
    match raw {
        Some(role) => role.trim().to_lowercase().replace('_', "-"),
        None => String::new(),
    }
}

/// Whether a role belongs to the business group (`exporter`, `supplier`).
///
/// Accepts raw or canonical input.
pub fn is_business_role(role: &str) -> bool {
    let canonical = normalize_role(Some(role));
    BUSINESS_ROLES.contains(&canonical.as_str())
}

/// Human-readable label for a role, e.g. `service_provider` -> "Service Provider".
pub fn role_label(raw: &str) -> String {
    normalize_role(Some(raw))
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
