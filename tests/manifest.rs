//! The bundled demo manifest loads, validates and bootstraps.

use std::path::Path;

use route_registry::config::load_config;
use route_registry::lifecycle::bootstrap;
use route_registry::security::{GuardDecision, StaticSession};
use route_registry::{LayoutBehavior, ModuleDescriptor};

fn demo() -> route_registry::lifecycle::Bootstrapped {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/routes.toml");
    let config = load_config(&path).unwrap();
    bootstrap(&config, std::iter::empty::<ModuleDescriptor>()).unwrap()
}

#[test]
fn test_demo_manifest_partitions() {
    let boot = demo();

    assert_eq!(
        boot.registry.module_names().collect::<Vec<_>>(),
        vec!["landing", "auth", "dashboard", "chat"]
    );
    assert_eq!(boot.routes.none.len(), 1);
    assert_eq!(boot.routes.auth.len(), 1);
    let protected: Vec<_> = boot.routes.protected.nodes.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(protected, vec!["/dashboard", "/apps/chat/*"]);
}

#[test]
fn test_demo_manifest_resolution() {
    let boot = demo();
    let registry = &boot.registry;

    assert_eq!(registry.resolve_behavior("/login"), LayoutBehavior::Centered);
    assert_eq!(registry.resolve_behavior("/dashboard"), LayoutBehavior::FullHeight);
    assert_eq!(registry.resolve_behavior("/dashboard/reports/12"), LayoutBehavior::Scrollable);
    assert_eq!(registry.resolve_behavior("/apps/chat"), LayoutBehavior::Fixed);
    assert_eq!(registry.resolve_behavior("/apps/chat/thread/7"), LayoutBehavior::Fixed);
    assert_eq!(registry.resolve_behavior("/pricing"), LayoutBehavior::Default);
}

#[test]
fn test_demo_manifest_route_roles() {
    let boot = demo();
    let protected = &boot.routes.protected;

    let guest = protected
        .authorize(&StaticSession::authenticated(["guest"]), "/apps/chat/thread/7")
        .unwrap();
    assert_eq!(guest.redirect_target(), Some("/unauthorized"));

    let member = protected
        .authorize(&StaticSession::authenticated(["member"]), "/apps/chat/thread/7")
        .unwrap();
    assert!(member.is_allowed());

    // The dashboard declares no roles.
    let guest_dashboard = protected
        .authorize(&StaticSession::authenticated(["guest"]), "/dashboard/reports/3")
        .unwrap();
    assert!(matches!(guest_dashboard, GuardDecision::Allow(_)));
}
