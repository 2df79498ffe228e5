//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check pattern syntax (leading `/`, `*` only as trailing `/*`, named and distinct params)
//! - Check structural rules (index routes are leaves)
//! - Detect duplicate module names when the policy is strict
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Overlapping patterns are only warned about; first match wins decides them

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use crate::config::schema::RouterConfig;
use crate::route::descriptor::{LayoutKind, RouteDescriptor};
use crate::routing::pattern::PathPattern;
use crate::routing::registry::DuplicatePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("module #{0} has an empty name")]
    EmptyModuleName(usize),

    #[error("module `{0}` is declared more than once")]
    DuplicateModule(String),

    #[error("guard.{field} must be an absolute path, got `{value}`")]
    InvalidGuardPath { field: &'static str, value: String },

    #[error("module `{module}`: invalid pattern `{path}`: {reason}")]
    InvalidPattern {
        module: String,
        path: String,
        reason: &'static str,
    },

    #[error("module `{module}`: index route `{path}` cannot have children")]
    IndexWithChildren { module: String, path: String },
}

/// Check a single path pattern's syntax.
pub fn check_pattern(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("must start with `/`");
    }

    let body = path.strip_suffix("/*").unwrap_or(path);
    let segments: Vec<&str> = body.split('/').collect();
    let last = segments.len().saturating_sub(1);

    for (i, seg) in segments.iter().enumerate().skip(1) {
        if seg.contains('*') {
            return Err("wildcard is only allowed as a trailing `/*`");
        }
        if *seg == ":" {
            return Err("parameter segment needs a name");
        }
        if seg.is_empty() && i != last {
            return Err("empty path segment");
        }
    }

    let pattern = PathPattern::parse(path);
    let mut names = HashSet::new();
    if !pattern.param_names().into_iter().all(|name| names.insert(name)) {
        return Err("duplicate parameter name");
    }

    Ok(())
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("login_path", &config.guard.login_path),
        ("unauthorized_path", &config.guard.unauthorized_path),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::InvalidGuardPath {
                field,
                value: value.clone(),
            });
        }
    }

    let mut seen_names = HashSet::new();
    let mut seen_patterns: HashMap<&str, &str> = HashMap::new();

    for (i, module) in config.modules.iter().enumerate() {
        if module.name.trim().is_empty() {
            errors.push(ValidationError::EmptyModuleName(i));
        }

        if !seen_names.insert(module.name.as_str()) {
            if config.registry.duplicate_policy == DuplicatePolicy::Strict {
                errors.push(ValidationError::DuplicateModule(module.name.clone()));
            } else {
                warn!(module = %module.name, "Module declared twice, later declaration wins");
            }
        }

        for route in &module.routes {
            validate_route(&module.name, route, route.layout_kind, true, &mut errors);
            collect_patterns(&module.name, route, &mut seen_patterns);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(
    module: &str,
    route: &RouteDescriptor,
    root_kind: LayoutKind,
    top_level: bool,
    errors: &mut Vec<ValidationError>,
) {
    if let Err(reason) = check_pattern(&route.path) {
        errors.push(ValidationError::InvalidPattern {
            module: module.to_string(),
            path: route.path.clone(),
            reason,
        });
    }

    if route.index && !route.children.is_empty() {
        errors.push(ValidationError::IndexWithChildren {
            module: module.to_string(),
            path: route.path.clone(),
        });
    }

    if !top_level {
        if route.layout_kind != root_kind {
            warn!(
                module,
                path = %route.path,
                kind = %route.layout_kind,
                parent_kind = %root_kind,
                "Nested route layout kind ignored, rendered in its ancestor's partition"
            );
        }
        if !route.required_roles.is_empty() {
            warn!(module, path = %route.path, "required_roles only apply to top-level routes");
        }
    }

    for child in &route.children {
        validate_route(module, child, root_kind, false, errors);
    }
}

fn collect_patterns<'a>(module: &'a str, route: &'a RouteDescriptor, seen: &mut HashMap<&'a str, &'a str>) {
    if let Some(first) = seen.get(route.path.as_str()) {
        if *first != module {
            warn!(
                path = %route.path,
                first = *first,
                shadowed = module,
                "Pattern declared by two modules, the first attached wins"
            );
        }
    } else {
        seen.insert(&route.path, module);
    }

    for child in &route.children {
        collect_patterns(module, child, seen);
    }
}
