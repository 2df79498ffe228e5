//! Route descriptor data model.
//!
//! A [`RouteDescriptor`] is what a feature module hands to the registry: a
//! path pattern, layout metadata and an ordered list of nested descriptors.
//! Descriptors deserialize directly from the route manifest.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shell/guard category a top-level route is mounted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Rendered without any shell.
    #[default]
    None,
    /// Rendered inside the authentication shell (login, register, ...).
    Auth,
    /// Rendered inside the application shell, behind the access guard.
    Protected,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::None => "none",
            LayoutKind::Auth => "auth",
            LayoutKind::Protected => "protected",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory presentation tag consumed by the layout shell.
///
/// Never used for matching. [`LayoutBehavior::Default`] is the fallback
/// returned whenever nothing more specific applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutBehavior {
    #[default]
    Default,
    /// Page fills the shell's height and owns its scrolling.
    FullHeight,
    /// Page is fixed; the shell does not scroll.
    Fixed,
    /// Shell provides the scroll container.
    Scrollable,
    /// Page content is centered in the shell.
    Centered,
}

impl LayoutBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutBehavior::Default => "default",
            LayoutBehavior::FullHeight => "full-height",
            LayoutBehavior::Fixed => "fixed",
            LayoutBehavior::Scrollable => "scrollable",
            LayoutBehavior::Centered => "centered",
        }
    }
}

impl fmt::Display for LayoutBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a page-level component.
///
/// The registry only stores and compares it; resolving the identifier to
/// real UI code is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(Arc<str>);

impl ComponentRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a route's component becomes available to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Renderable {
    /// Already constructed, rendered directly.
    Immediate(ComponentRef),
    /// Loaded on demand, rendered behind a suspension boundary.
    Deferred(ComponentRef),
}

impl Renderable {
    pub fn immediate(name: impl AsRef<str>) -> Self {
        Renderable::Immediate(ComponentRef::new(name))
    }

    pub fn deferred(name: impl AsRef<str>) -> Self {
        Renderable::Deferred(ComponentRef::new(name))
    }
}

/// A single route: path pattern, layout metadata and nested children.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteDescriptor {
    /// Literal, `:param` or trailing `/*` pattern.
    pub path: String,

    #[serde(default)]
    pub layout_kind: LayoutKind,

    #[serde(default)]
    pub layout_behavior: Option<LayoutBehavior>,

    /// Default child rendered at the parent's exact path.
    #[serde(default)]
    pub index: bool,

    #[serde(default)]
    pub renderable: Option<Renderable>,

    /// Roles the access guard requires for this subtree (top-level
    /// protected routes only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            layout_kind: LayoutKind::None,
            layout_behavior: None,
            index: false,
            renderable: None,
            required_roles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn layout_kind(mut self, kind: LayoutKind) -> Self {
        self.layout_kind = kind;
        self
    }

    pub fn behavior(mut self, behavior: LayoutBehavior) -> Self {
        self.layout_behavior = Some(behavior);
        self
    }

    pub fn index(mut self) -> Self {
        self.index = true;
        self
    }

    pub fn renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    pub fn require_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_roles.extend(roles.into_iter().map(Into::into));
        self
    }

    pub fn child(mut self, child: RouteDescriptor) -> Self {
        self.children.push(child);
        self
    }

    /// Behavior tag, falling back to the default when unset.
    pub fn effective_behavior(&self) -> LayoutBehavior {
        self.layout_behavior.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_child_order() {
        let route = RouteDescriptor::new("/settings")
            .child(RouteDescriptor::new("/settings/profile"))
            .child(RouteDescriptor::new("/settings/billing"));

        let paths: Vec<_> = route.children.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/settings/profile", "/settings/billing"]);
    }

    #[test]
    fn test_behavior_defaults() {
        let route = RouteDescriptor::new("/");
        assert_eq!(route.effective_behavior(), LayoutBehavior::Default);
        assert_eq!(route.layout_kind, LayoutKind::None);

        let route = route.behavior(LayoutBehavior::FullHeight);
        assert_eq!(route.effective_behavior(), LayoutBehavior::FullHeight);
    }

    #[test]
    fn test_renderable_from_toml() {
        let route: RouteDescriptor = toml::from_str(
            r#"
            path = "/reports"
            layout_kind = "protected"
            layout_behavior = "full-height"
            renderable = { deferred = "ReportsPage" }
            "#,
        )
        .unwrap();

        assert_eq!(route.layout_kind, LayoutKind::Protected);
        assert_eq!(route.layout_behavior, Some(LayoutBehavior::FullHeight));
        assert_eq!(route.renderable, Some(Renderable::deferred("ReportsPage")));
        assert!(route.children.is_empty());
    }

    #[test]
    fn test_unknown_behavior_rejected() {
        let parsed: Result<RouteDescriptor, _> = toml::from_str(
            r#"
            path = "/x"
            layout_behavior = "sideways"
            "#,
        );
        assert!(parsed.is_err());
    }
}
