//! Layout partitioning of top-level routes.

use crate::route::arena::RouteRef;
use crate::route::descriptor::LayoutKind;
use crate::routing::registry::ModuleRegistry;

/// Top-level routes bucketed by [`LayoutKind`], order preserved.
#[derive(Debug, Default)]
pub struct LayoutPartition<'a> {
    pub none: Vec<RouteRef<'a>>,
    pub auth: Vec<RouteRef<'a>>,
    pub protected: Vec<RouteRef<'a>>,
}

impl<'a> LayoutPartition<'a> {
    pub fn bucket(&self, kind: LayoutKind) -> &[RouteRef<'a>] {
        match kind {
            LayoutKind::None => &self.none,
            LayoutKind::Auth => &self.auth,
            LayoutKind::Protected => &self.protected,
        }
    }

    pub fn len(&self) -> usize {
        self.none.len() + self.auth.len() + self.protected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single pass over `all_routes()`. Children travel with their ancestor.
pub fn partition(registry: &ModuleRegistry) -> LayoutPartition<'_> {
    let mut buckets = LayoutPartition::default();
    for route in registry.all_routes() {
        match route.layout_kind() {
            LayoutKind::None => buckets.none.push(route),
            LayoutKind::Auth => buckets.auth.push(route),
            LayoutKind::Protected => buckets.protected.push(route),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::descriptor::RouteDescriptor;
    use crate::route::module::ModuleDescriptor;

    #[test]
    fn test_buckets_by_top_level_kind() {
        let mut registry = ModuleRegistry::new();
        registry
            .attach(ModuleDescriptor::with_routes(
                "auth",
                vec![
                    RouteDescriptor::new("/login").layout_kind(LayoutKind::Auth),
                    RouteDescriptor::new("/register").layout_kind(LayoutKind::Auth),
                ],
            ))
            .unwrap();
        registry
            .attach(ModuleDescriptor::with_routes(
                "app",
                vec![
                    RouteDescriptor::new("/").layout_kind(LayoutKind::None),
                    RouteDescriptor::new("/admin")
                        .layout_kind(LayoutKind::Protected)
                        // Child kind does not move it to another bucket.
                        .child(RouteDescriptor::new("/admin/help").layout_kind(LayoutKind::None)),
                ],
            ))
            .unwrap();

        let parts = partition(&registry);
        let paths = |kind| parts.bucket(kind).iter().map(|r| r.path()).collect::<Vec<_>>();

        assert_eq!(paths(LayoutKind::Auth), vec!["/login", "/register"]);
        assert_eq!(paths(LayoutKind::None), vec!["/"]);
        assert_eq!(paths(LayoutKind::Protected), vec!["/admin"]);
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn test_empty_registry_has_empty_buckets() {
        let registry = ModuleRegistry::new();
        assert!(partition(&registry).is_empty());
    }
}
