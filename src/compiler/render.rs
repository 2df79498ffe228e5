//! Nested render tree construction.
//!
//! `build` turns an attached route subtree into a [`RenderNode`] tree the
//! renderer mounts as-is. Children are placed in the parent's [`Outlet`] so
//! they render inside the parent's shell.
//!
//! # Design Decisions
//! - Pure and deterministic: the same route always yields an equal tree
//! - Missing renderables become a visible placeholder, never a panic
//! - Deferred components are wrapped in a suspension boundary

use serde::Serialize;

use crate::route::arena::RouteRef;
use crate::route::descriptor::{ComponentRef, LayoutBehavior, Renderable};
use crate::routing::matcher::matches;

/// Placeholder shown while a deferred component loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    Loading,
}

/// What a render node displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// Component rendered directly.
    View { component: ComponentRef },
    /// Component loaded on demand behind a suspension boundary.
    Suspense {
        loader: ComponentRef,
        fallback: Fallback,
    },
    /// The route declared no renderable.
    Missing { path: String },
    /// Catch-all page for unmatched paths.
    NotFound,
}

/// Containment point where nested child routes are mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlet {
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub path: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
    pub behavior: LayoutBehavior,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_roles: Vec<String>,
    pub element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<Outlet>,
}

impl RenderNode {
    /// Outermost catch-all node.
    pub fn not_found() -> Self {
        Self {
            path: "*".to_string(),
            index: false,
            behavior: LayoutBehavior::Default,
            required_roles: Vec::new(),
            element: Element::NotFound,
            outlet: None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        self.outlet.as_ref().map(|o| o.children.as_slice()).unwrap_or(&[])
    }

    /// First node in this subtree, pre-order, whose path matches `pathname`.
    pub fn find(&self, pathname: &str) -> Option<&RenderNode> {
        if matches(&self.path, pathname) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(pathname))
    }

    /// Number of nodes in this subtree, self included.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(RenderNode::size).sum::<usize>()
    }
}

fn element_for(route: &RouteRef<'_>) -> Element {
    match route.renderable() {
        Some(Renderable::Immediate(component)) => Element::View {
            component: component.clone(),
        },
        Some(Renderable::Deferred(loader)) => Element::Suspense {
            loader: loader.clone(),
            fallback: Fallback::Loading,
        },
        None => Element::Missing {
            path: route.path().to_string(),
        },
    }
}

/// Build the render tree for `route` and its descendants.
pub fn build(route: RouteRef<'_>) -> RenderNode {
    let outlet = route.has_children().then(|| Outlet {
        children: route.children().map(build).collect(),
    });

    RenderNode {
        path: route.path().to_string(),
        index: route.is_index(),
        behavior: route.behavior(),
        required_roles: route.required_roles().to_vec(),
        element: element_for(&route),
        outlet,
    }
}
