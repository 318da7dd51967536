use super::*;

const PROTECTED: [&str; 5] = [HOME_PATH, PROJECTS_PATH, MY_BIDS_PATH, MESSAGES_PATH, PROFILE_PATH];
const GUEST_ONLY: [&str; 2] = [LOGIN_PATH, REGISTER_PATH];

// =============================================================
// Route table
// =============================================================

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn find_ignores_trailing_slash() {
    assert_eq!(find("/projects/").map(|r| r.name), Some("Projects"));
    assert_eq!(find("").map(|r| r.name), Some("Home"));
    assert_eq!(find("/"), find(HOME_PATH));
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(find("/nowhere"), None);
    assert_eq!(access_for("/nowhere"), Access::Public);
}

#[test]
fn access_matches_route_kind() {
    for path in PROTECTED {
        assert_eq!(access_for(path), Access::RequiresAuth, "{path}");
    }
    for path in GUEST_ONLY {
        assert_eq!(access_for(path), Access::RequiresGuest, "{path}");
    }
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn protected_routes_redirect_guests_to_login() {
    for path in PROTECTED {
        assert_eq!(guard_navigation(path, false), GuardDecision::RedirectToLogin, "{path}");
        assert_eq!(guard_navigation(path, false).redirect_path(), Some(LOGIN_PATH));
    }
}

#[test]
fn protected_routes_allow_authenticated() {
    for path in PROTECTED {
        assert_eq!(guard_navigation(path, true), GuardDecision::Allow, "{path}");
    }
}

#[test]
fn guest_routes_redirect_authenticated_home() {
    for path in GUEST_ONLY {
        assert_eq!(guard_navigation(path, true), GuardDecision::RedirectToHome, "{path}");
        assert_eq!(guard_navigation(path, true).redirect_path(), Some(HOME_PATH));
        assert_eq!(guard_navigation(path, false), GuardDecision::Allow, "{path}");
    }
}

#[test]
fn unknown_routes_always_allow() {
    assert_eq!(guard_navigation("/nowhere", false), GuardDecision::Allow);
    assert_eq!(guard_navigation("/nowhere", true), GuardDecision::Allow);
}
