//! Generic create/read/update/remove over an ordered, name-unique child
//! collection embedded in a parent node.
//!
//! A [`Crud`] is a short-lived view: it borrows the collection mutably for
//! as long as it lives and is usually created fresh for every operation by
//! the capability modules in [`crate::api::mixins`].

use crate::ast::NodeKinded;
use crate::build::Buildable;
use crate::build::Props;
use crate::AstBuildError;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Extracts the key an element is unique by. Elements yielding `None` are
/// never matched by name and are left untouched by every operation.
pub type NameOf<N> = fn(&N) -> Option<&str>;

/// Builds a collection element from props.
pub type Constructor<N> = fn(Props<N>) -> Result<N>;

pub struct Crud<'a, N> {
    parent: String,
    collection: &'static str,
    items: &'a mut Vec<N>,
    name_of: NameOf<N>,
    constructor: Constructor<N>,
}

impl<'a, N> Crud<'a, N>
where
    N: Buildable + Clone + NodeKinded + serde::Serialize,
{
    /// `parent` is a human-readable description of the owning node (see
    /// [`NodeKinded::context`]) and `collection` the collection's field name;
    /// both only appear in error messages.
    pub fn new(
        parent: String,
        collection: &'static str,
        items: &'a mut Vec<N>,
        name_of: NameOf<N>,
        constructor: Constructor<N>,
    ) -> Self {
        Self {
            parent,
            collection,
            items,
            name_of,
            constructor,
        }
    }

    pub fn list(&self) -> &[N] {
        self.items.as_slice()
    }

    pub fn list_names(&self) -> Vec<String> {
        names_in(self.items.as_slice(), self.name_of)
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&N> {
        find_in(self.items.as_slice(), self.name_of, name)
    }

    pub fn find_mut(self, name: &str) -> Option<&'a mut N> {
        let idx = self.position(name)?;
        let items = self.items;
        Some(&mut items[idx])
    }

    pub fn find_or_fail(&self, name: &str) -> Result<&N> {
        self.find(name).ok_or_else(|| self.not_found("get", name))
    }

    pub fn find_or_fail_mut(self, name: &str) -> Result<&'a mut N> {
        let idx = self.position(name).ok_or_else(|| self.not_found("get", name))?;
        let items = self.items;
        Ok(&mut items[idx])
    }

    /// Builds a new element and appends it. Fails with
    /// [`AstBuildError::Conflict`] if an element with the same name exists;
    /// the collection is left untouched on any failure.
    pub fn create(self, props: impl Into<Props<N>>) -> Result<&'a mut N> {
        let node = (self.constructor)(props.into())?;
        self.append(node)
    }

    /// Merges `partial` into the element named `name`.
    ///
    /// Object props only override the fields they provide (a `null` field
    /// counts as not provided); a bare primitive is read through the
    /// element's partial shorthand (a rename, for most kinds); an
    /// already-built node replaces the element outright. A rename onto
    /// another element's name fails with [`AstBuildError::Conflict`] before
    /// anything is written.
    pub fn update(self, name: &str, partial: impl Into<Props<N>>) -> Result<&'a mut N> {
        let idx = self.position(name).ok_or_else(|| self.not_found("update", name))?;
        let updated = self.merged(&self.items[idx], partial.into())?;

        let existing_kind = self.items[idx].kind();
        if updated.kind() != existing_kind {
            return Err(AstBuildError::KindMismatch {
                expected: existing_kind,
                actual: updated.kind(),
            });
        }
        if let Some(new_name) = (self.name_of)(&updated) {
            if new_name != name && self.has(new_name) {
                return Err(self.conflict("update", new_name));
            }
        }

        log::trace!(
            "updated `{name}` in {} of {}",
            self.collection,
            self.parent,
        );
        let items = self.items;
        items[idx] = updated;
        Ok(&mut items[idx])
    }

    /// Creates the element if its name is absent, otherwise updates the
    /// existing element with the same props.
    ///
    /// Props that are too partial to build a fresh element (e.g. a field
    /// without a type) still update an existing element when they name one.
    pub fn upsert(self, props: impl Into<Props<N>>) -> Result<&'a mut N> {
        let props = props.into();
        let candidate = match (self.constructor)(props.clone()) {
            Ok(candidate) => candidate,
            Err(err) => {
                return match partial_name(&props) {
                    Some(name) if self.has(&name) => self.update(&name, props),
                    _ => Err(err),
                };
            },
        };

        let existing = (self.name_of)(&candidate)
            .filter(|name| self.has(name))
            .map(str::to_string);
        match (existing, props) {
            (None, _) => self.append(candidate),
            (Some(name), Props::Node(_)) => self.update(&name, Props::Node(candidate)),
            (Some(name), raw) => self.update(&name, raw),
        }
    }

    /// Removes the element named `name`, preserving the order of the rest.
    pub fn remove(self, name: &str) -> Result<N> {
        let idx = self.position(name).ok_or_else(|| self.not_found("remove", name))?;
        log::trace!(
            "removed `{name}` from {} of {}",
            self.collection,
            self.parent,
        );
        Ok(self.items.remove(idx))
    }

    fn append(self, node: N) -> Result<&'a mut N> {
        if let Some(name) = (self.name_of)(&node) {
            if self.has(name) {
                return Err(self.conflict("create", name));
            }
        }

        log::trace!(
            "created `{}` in {} of {}",
            (self.name_of)(&node).unwrap_or("<unnamed>"),
            self.collection,
            self.parent,
        );
        let items = self.items;
        let idx = items.len();
        items.push(node);
        Ok(&mut items[idx])
    }

    fn merged(&self, existing: &N, partial: Props<N>) -> Result<N> {
        let overlay = match partial {
            Props::Node(node) => return Ok(node),
            Props::Raw(Value::Object(fields)) => fields,
            Props::Raw(primitive) => N::partial_shorthand(&primitive)?,
        };

        let mut merged = match serde_json::to_value(existing) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => return Err(AstBuildError::malformed(
                Some(existing.kind()),
                format!("expected an object when serializing, found `{other}`"),
            )),
            Err(err) => return Err(AstBuildError::malformed(
                Some(existing.kind()),
                err.to_string(),
            )),
        };
        overlay_defined(&mut merged, overlay);
        (self.constructor)(Props::Raw(Value::Object(merged)))
    }

    fn position(&self, name: &str) -> Option<usize> {
        position_in(self.items.as_slice(), self.name_of, name)
    }

    fn not_found(&self, action: &'static str, name: &str) -> AstBuildError {
        AstBuildError::NotFound {
            action,
            collection: self.collection,
            name: name.to_string(),
            parent: self.parent.clone(),
        }
    }

    fn conflict(&self, action: &'static str, name: &str) -> AstBuildError {
        AstBuildError::Conflict {
            action,
            collection: self.collection,
            name: name.to_string(),
            parent: self.parent.clone(),
        }
    }
}

// =============================================================================
// Read-only helpers
// =============================================================================

pub fn position_in<N>(items: &[N], name_of: NameOf<N>, name: &str) -> Option<usize> {
    items.iter().position(|item| name_of(item) == Some(name))
}

pub fn find_in<'n, N>(items: &'n [N], name_of: NameOf<N>, name: &str) -> Option<&'n N> {
    items.iter().find(|item| name_of(item) == Some(name))
}

pub fn names_in<N>(items: &[N], name_of: NameOf<N>) -> Vec<String> {
    items.iter()
        .filter_map(name_of)
        .map(str::to_string)
        .collect()
}

/// The error a read of a missing element reports.
pub fn not_found(
    action: &'static str,
    collection: &'static str,
    name: &str,
    parent: String,
) -> AstBuildError {
    AstBuildError::NotFound {
        action,
        collection,
        name: name.to_string(),
        parent,
    }
}

/// Copies every provided (non-`null`) field of `overlay` except the `kind`
/// tag into `base`.
fn overlay_defined(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        if key == "kind" || value.is_null() {
            continue;
        }
        base.insert(key, value);
    }
}

/// The name partial props refer to when they cannot be built on their own.
fn partial_name<N>(props: &Props<N>) -> Option<String> {
    match props {
        Props::Raw(Value::Object(fields)) => match fields.get("name") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Object(name)) => name.get("value")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
