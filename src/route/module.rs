//! Module descriptors: named bundles of routes contributed by one feature area.

use std::fmt;

use crate::route::descriptor::RouteDescriptor;

/// One-shot registration side effect run when the module is attached.
pub type AttachHook = Box<dyn FnOnce() + Send>;

/// A named bundle of routes plus an optional attach hook.
pub struct ModuleDescriptor {
    pub name: String,
    pub routes: Vec<RouteDescriptor>,
    on_attach: Option<AttachHook>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            on_attach: None,
        }
    }

    pub fn with_routes(name: impl Into<String>, routes: Vec<RouteDescriptor>) -> Self {
        Self {
            routes,
            ..Self::new(name)
        }
    }

    pub fn route(mut self, route: RouteDescriptor) -> Self {
        self.routes.push(route);
        self
    }

    /// Register a hook invoked exactly once when this module is attached.
    pub fn on_attach<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_attach = Some(Box::new(hook));
        self
    }

    /// Split into the parts the registry stores and the hook it runs.
    pub(crate) fn into_parts(self) -> (String, Vec<RouteDescriptor>, Option<AttachHook>) {
        (self.name, self.routes, self.on_attach)
    }
}

// Box<dyn FnOnce> has no Debug impl.
impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("routes", &self.routes)
            .field("on_attach", &self.on_attach.is_some())
            .finish()
    }
}
