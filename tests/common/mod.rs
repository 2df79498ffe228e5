//! Shared fixtures for integration tests.

use route_registry::{
    LayoutBehavior, LayoutKind, ModuleDescriptor, ModuleRegistry, Renderable, RouteDescriptor,
};

/// Module A: the public landing page.
pub fn landing_module() -> ModuleDescriptor {
    ModuleDescriptor::new("landing").route(
        RouteDescriptor::new("/")
            .layout_kind(LayoutKind::None)
            .renderable(Renderable::immediate("Landing")),
    )
}

/// Module B: a protected dashboard with one nested reports page.
pub fn dashboard_module() -> ModuleDescriptor {
    ModuleDescriptor::new("dashboard").route(
        RouteDescriptor::new("/dashboard")
            .layout_kind(LayoutKind::Protected)
            .behavior(LayoutBehavior::FullHeight)
            .renderable(Renderable::immediate("DashboardShell"))
            .child(
                RouteDescriptor::new("/dashboard/reports")
                    .layout_kind(LayoutKind::Protected)
                    .behavior(LayoutBehavior::Scrollable)
                    .renderable(Renderable::deferred("Reports")),
            ),
    )
}

/// Registry with the given modules attached in order.
#[allow(dead_code)]
pub fn registry_with(modules: Vec<ModuleDescriptor>) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    for module in modules {
        registry.attach(module).unwrap();
    }
    registry
}
