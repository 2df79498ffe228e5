//! Arena storage for attached routes.
//!
//! Nested descriptors are flattened into a `Vec` of nodes addressed by
//! [`RouteId`]. Parent/child links are indices, so traversals and the render
//! compiler only ever borrow the arena.
//!
//! # Design Decisions
//! - Nodes are append-only; an id stays valid for the arena's lifetime
//! - Children keep their declaration order
//! - Patterns are compiled on insertion

use std::fmt;

use crate::route::descriptor::{LayoutBehavior, LayoutKind, Renderable, RouteDescriptor};
use crate::routing::matcher::Matcher;
use crate::routing::pattern::PathPattern;

/// Stable index of a route node in a [`RouteArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(usize);

#[derive(Debug, Clone)]
pub(crate) struct RouteNode {
    path: String,
    pattern: PathPattern,
    layout_kind: LayoutKind,
    layout_behavior: Option<LayoutBehavior>,
    index: bool,
    renderable: Option<Renderable>,
    required_roles: Vec<String>,
    parent: Option<RouteId>,
    children: Vec<RouteId>,
}

/// Append-only store of route nodes.
#[derive(Debug, Clone, Default)]
pub struct RouteArena {
    nodes: Vec<RouteNode>,
}

impl RouteArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a descriptor tree, returning the id of its root.
    pub fn insert(&mut self, descriptor: RouteDescriptor) -> RouteId {
        self.insert_node(descriptor, None)
    }

    fn insert_node(&mut self, descriptor: RouteDescriptor, parent: Option<RouteId>) -> RouteId {
        let RouteDescriptor {
            path,
            layout_kind,
            layout_behavior,
            index,
            renderable,
            required_roles,
            children,
        } = descriptor;

        let id = RouteId(self.nodes.len());
        self.nodes.push(RouteNode {
            pattern: PathPattern::parse(&path),
            path,
            layout_kind,
            layout_behavior,
            index,
            renderable,
            required_roles,
            parent,
            children: Vec::with_capacity(children.len()),
        });

        for child in children {
            let child_id = self.insert_node(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }

    /// Borrow a node. Returns `None` for ids from another arena.
    pub fn get(&self, id: RouteId) -> Option<RouteRef<'_>> {
        self.nodes.get(id.0).map(|node| RouteRef {
            arena: self,
            id,
            node,
        })
    }

    /// Depth-first, pre-order walk over `roots` and all their descendants.
    pub fn preorder<'a>(&'a self, roots: &[RouteId]) -> Preorder<'a> {
        Preorder {
            arena: self,
            stack: roots.iter().rev().copied().collect(),
        }
    }
}

/// Borrowed view of one route node.
#[derive(Clone, Copy)]
pub struct RouteRef<'a> {
    arena: &'a RouteArena,
    id: RouteId,
    node: &'a RouteNode,
}

impl fmt::Debug for RouteRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRef")
            .field("id", &self.id)
            .field("path", &self.node.path)
            .field("layout_kind", &self.node.layout_kind)
            .finish()
    }
}

impl<'a> RouteRef<'a> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn path(&self) -> &'a str {
        &self.node.path
    }

    pub fn pattern(&self) -> &'a PathPattern {
        &self.node.pattern
    }

    pub fn layout_kind(&self) -> LayoutKind {
        self.node.layout_kind
    }

    /// Behavior tag, falling back to the default when unset.
    pub fn behavior(&self) -> LayoutBehavior {
        self.node.layout_behavior.unwrap_or_default()
    }

    pub fn is_index(&self) -> bool {
        self.node.index
    }

    pub fn renderable(&self) -> Option<&'a Renderable> {
        self.node.renderable.as_ref()
    }

    pub fn required_roles(&self) -> &'a [String] {
        &self.node.required_roles
    }

    pub fn parent(&self) -> Option<RouteRef<'a>> {
        self.node.parent.and_then(|id| self.arena.get(id))
    }

    pub fn has_children(&self) -> bool {
        !self.node.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = RouteRef<'a>> + 'a {
        let arena = self.arena;
        let node = self.node;
        node.children.iter().filter_map(move |id| arena.get(*id))
    }

    /// Walk up to the top-level ancestor (self for top-level routes).
    pub fn root(&self) -> RouteRef<'a> {
        let mut current = *self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    pub fn matches(&self, pathname: &str) -> bool {
        self.node.pattern.matches(pathname)
    }

    /// Rebuild the owned descriptor tree for this node.
    pub fn to_descriptor(&self) -> RouteDescriptor {
        RouteDescriptor {
            path: self.node.path.clone(),
            layout_kind: self.node.layout_kind,
            layout_behavior: self.node.layout_behavior,
            index: self.node.index,
            renderable: self.node.renderable.clone(),
            required_roles: self.node.required_roles.clone(),
            children: self.children().map(|c| c.to_descriptor()).collect(),
        }
    }
}

/// Iterator returned by [`RouteArena::preorder`].
pub struct Preorder<'a> {
    arena: &'a RouteArena,
    stack: Vec<RouteId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = RouteRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            if let Some(route) = self.arena.get(id) {
                self.stack.extend(route.node.children.iter().rev().copied());
                return Some(route);
            }
        }
    }
}
