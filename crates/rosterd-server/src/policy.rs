//! Route authorization policy.
//!
//! A static, ordered table of (verb, path pattern) → required access.
//! Evaluation is first-match-wins, so more specific patterns (the
//! role-management sub-paths) are listed before the parent patterns
//! that would otherwise shadow them.

use axum::http::Method;
use rosterd_core::models::role::Role;

/// Who may reach a route.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// No authentication required.
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// Authenticated identity whose role is in the set.
    AnyOf(&'static [Role]),
}

/// One row of the policy table.
pub struct PolicyRule {
    /// `None` matches every verb.
    pub method: Option<Method>,
    /// Path pattern; `*` matches one segment, a trailing `**`
    /// matches zero or more segments.
    pub pattern: &'static str,
    pub access: RouteAccess,
}

/// The static policy table, most-specific patterns first.
pub static POLICY: &[PolicyRule] = &[
    PolicyRule {
        method: None,
        pattern: "/auth/**",
        access: RouteAccess::Public,
    },
    PolicyRule {
        method: Some(Method::GET),
        pattern: "/employees/roles/**",
        access: RouteAccess::Public,
    },
    PolicyRule {
        method: Some(Method::PUT),
        pattern: "/employees/roles/**",
        access: RouteAccess::AnyOf(&[Role::Admin]),
    },
    PolicyRule {
        method: Some(Method::GET),
        pattern: "/employees/**",
        access: RouteAccess::AnyOf(&[Role::User, Role::Manager, Role::Admin]),
    },
    PolicyRule {
        method: Some(Method::POST),
        pattern: "/employees",
        access: RouteAccess::AnyOf(&[Role::Manager, Role::Admin]),
    },
    PolicyRule {
        method: Some(Method::PUT),
        pattern: "/employees/**",
        access: RouteAccess::AnyOf(&[Role::Manager, Role::Admin]),
    },
    PolicyRule {
        method: Some(Method::DELETE),
        pattern: "/employees/**",
        access: RouteAccess::AnyOf(&[Role::Admin]),
    },
    PolicyRule {
        method: None,
        pattern: "/**",
        access: RouteAccess::Authenticated,
    },
];

impl PolicyRule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        match &self.method {
            Some(m) if m != method => return false,
            _ => {}
        }
        path_matches(self.pattern, path)
    }
}

/// Resolve the access requirement for a request.
///
/// The table ends with a catch-all rule, so the fallback is only
/// reachable if that rule is removed; fail closed in that case.
pub fn route_access(method: &Method, path: &str) -> &'static RouteAccess {
    POLICY
        .iter()
        .find(|rule| rule.matches(method, path))
        .map(|rule| &rule.access)
        .unwrap_or(&RouteAccess::Authenticated)
}

/// Segment-wise pattern match. A trailing `**` matches the rest of
/// the path, including nothing at all, so `/employees/**` also
/// matches `/employees`.
fn path_matches(pattern: &str, path: &str) -> bool {
    let pat: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    for (idx, p) in pat.iter().enumerate() {
        if *p == "**" {
            return true;
        }
        match segs.get(idx) {
            Some(s) if *p == "*" || p == s => {}
            _ => return false,
        }
    }
    segs.len() == pat.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_zero_or_more_segments() {
        assert!(path_matches("/employees/**", "/employees"));
        assert!(path_matches("/employees/**", "/employees/1"));
        assert!(path_matches("/employees/**", "/employees/roles/alice"));
        assert!(!path_matches("/employees/**", "/auth/login"));
    }

    #[test]
    fn single_star_matches_exactly_one_segment() {
        assert!(path_matches("/employees/*", "/employees/1"));
        assert!(!path_matches("/employees/*", "/employees"));
        assert!(!path_matches("/employees/*", "/employees/roles/alice"));
    }

    #[test]
    fn exact_pattern_requires_same_length() {
        assert!(path_matches("/employees", "/employees"));
        assert!(!path_matches("/employees", "/employees/1"));
    }

    #[test]
    fn auth_routes_are_public() {
        assert_eq!(
            route_access(&Method::POST, "/auth/login"),
            &RouteAccess::Public
        );
        assert_eq!(
            route_access(&Method::GET, "/auth/users"),
            &RouteAccess::Public
        );
    }

    #[test]
    fn role_sub_paths_are_matched_before_employee_patterns() {
        // GET on the roles sub-path is public even though
        // GET /employees/** requires a role.
        assert_eq!(
            route_access(&Method::GET, "/employees/roles/alice"),
            &RouteAccess::Public
        );
        // PUT on the roles sub-path is admin-only, not the
        // MANAGER/ADMIN of PUT /employees/**.
        assert_eq!(
            route_access(&Method::PUT, "/employees/roles/alice"),
            &RouteAccess::AnyOf(&[Role::Admin])
        );
    }

    #[test]
    fn employee_verbs_map_to_the_expected_role_sets() {
        assert_eq!(
            route_access(&Method::GET, "/employees"),
            &RouteAccess::AnyOf(&[Role::User, Role::Manager, Role::Admin])
        );
        assert_eq!(
            route_access(&Method::POST, "/employees"),
            &RouteAccess::AnyOf(&[Role::Manager, Role::Admin])
        );
        assert_eq!(
            route_access(&Method::PUT, "/employees/7"),
            &RouteAccess::AnyOf(&[Role::Manager, Role::Admin])
        );
        assert_eq!(
            route_access(&Method::DELETE, "/employees/7"),
            &RouteAccess::AnyOf(&[Role::Admin])
        );
    }

    #[test]
    fn unknown_routes_fall_back_to_authenticated() {
        assert_eq!(
            route_access(&Method::GET, "/metrics"),
            &RouteAccess::Authenticated
        );
        assert_eq!(route_access(&Method::GET, "/"), &RouteAccess::Authenticated);
    }
}
