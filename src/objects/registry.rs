//! Prototype registry and instantiation.
//!
//! The `ContentRegistry` stores every object prototype loaded from the
//! content tables, keyed by its short placement code, and owns the
//! monotonically increasing [`ObjectId`] allocator. It is an explicitly
//! constructed value, built at load time and owned by the session - there
//! is no process-wide prototype cache.

use rustc_hash::FxHashMap;

use crate::core::ObjectId;

use super::kind::ObjectKind;
use super::object::SpatialObject;
use super::prototype::ObjectPrototype;

/// Lookup of an unregistered prototype.
///
/// This indicates corrupt content (a layout or swap referencing a code or
/// kind that was never loaded), so callers abort the operation that
/// triggered it rather than silently continuing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownPrototype {
    /// No prototype registered under this placement code.
    Code(char),
    /// No prototype registered for this kind.
    Kind(ObjectKind),
}

impl std::fmt::Display for UnknownPrototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnknownPrototype::Code(code) => {
                write!(f, "no object prototype registered for code '{code}'")
            }
            UnknownPrototype::Kind(kind) => {
                write!(f, "no object prototype registered for kind '{kind}'")
            }
        }
    }
}

impl std::error::Error for UnknownPrototype {}

/// Registry of object prototypes.
///
/// ## Example
///
/// ```
/// use rust_trpg::objects::{ContentRegistry, ObjectKind, ObjectPrototype};
///
/// let mut registry = ContentRegistry::new();
/// registry.register('#', ObjectPrototype::new(ObjectKind::Wall, "wall", 32, 32));
///
/// let wall = registry.instantiate('#').unwrap();
/// assert_eq!(wall.kind, ObjectKind::Wall);
///
/// // Each placement is a distinct entity.
/// let other = registry.instantiate('#').unwrap();
/// assert_ne!(wall.id, other.id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    prototypes: FxHashMap<char, ObjectPrototype>,
    code_by_kind: FxHashMap<ObjectKind, char>,
    next_id: u32,
}

impl ContentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype under a placement code.
    ///
    /// Panics if the code is already registered.
    pub fn register(&mut self, code: char, prototype: ObjectPrototype) {
        if self.prototypes.contains_key(&code) {
            panic!("Prototype code '{code}' already registered");
        }
        self.code_by_kind.insert(prototype.kind, code);
        self.prototypes.insert(code, prototype);
    }

    /// Get a prototype by placement code.
    #[must_use]
    pub fn get(&self, code: char) -> Option<&ObjectPrototype> {
        self.prototypes.get(&code)
    }

    /// Check if a placement code is registered.
    #[must_use]
    pub fn contains(&self, code: char) -> bool {
        self.prototypes.contains_key(&code)
    }

    /// Get the number of registered prototypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Iterate over all registered prototypes.
    pub fn iter(&self) -> impl Iterator<Item = (char, &ObjectPrototype)> {
        self.prototypes.iter().map(|(&code, proto)| (code, proto))
    }

    /// Allocate a fresh instance identity.
    pub fn alloc_id(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Instantiate an independent copy of the prototype registered under
    /// `code`, with a freshly allocated identity.
    pub fn instantiate(&mut self, code: char) -> Result<SpatialObject, UnknownPrototype> {
        let id = self.alloc_id();
        let proto = self
            .prototypes
            .get(&code)
            .ok_or(UnknownPrototype::Code(code))?;
        Ok(proto.instantiate(id))
    }

    /// Instantiate by kind instead of code (used by object swaps, which
    /// know the replacement kind but not its placement code).
    pub fn instantiate_kind(&mut self, kind: ObjectKind) -> Result<SpatialObject, UnknownPrototype> {
        let code = *self
            .code_by_kind
            .get(&kind)
            .ok_or(UnknownPrototype::Kind(kind))?;
        self.instantiate(code)
            .map_err(|_| UnknownPrototype::Kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;

    fn registry() -> ContentRegistry {
        let mut r = ContentRegistry::new();
        r.register('#', ObjectPrototype::new(ObjectKind::Wall, "wall", 32, 32));
        r.register(
            'T',
            ObjectPrototype::new(ObjectKind::Treasure, "treasure", 32, 32).with_solid(false),
        );
        r
    }

    #[test]
    fn test_instantiate_allocates_distinct_ids() {
        let mut r = registry();
        let a = r.instantiate('#').unwrap();
        let b = r.instantiate('#').unwrap();
        let c = r.instantiate('T').unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let mut r = registry();
        assert_eq!(r.instantiate('?'), Err(UnknownPrototype::Code('?')));
    }

    #[test]
    fn test_instantiate_by_kind() {
        let mut r = registry();
        let t = r.instantiate_kind(ObjectKind::Treasure).unwrap();
        assert_eq!(t.kind, ObjectKind::Treasure);
        assert!(!t.solid);
        assert_eq!(
            r.instantiate_kind(ObjectKind::Boss),
            Err(UnknownPrototype::Kind(ObjectKind::Boss))
        );
    }

    #[test]
    fn test_mutating_an_instance_leaves_the_prototype_alone() {
        let mut r = registry();
        let mut wall = r.instantiate('#').unwrap();
        wall.set_pos(64, 64);
        wall.solid = false;

        let proto = r.get('#').unwrap();
        assert!(proto.solid);
        let fresh = r.instantiate('#').unwrap();
        assert_eq!(fresh.rect(), Rect::new(0, 0, 32, 32));
        assert!(fresh.solid);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_code_panics() {
        let mut r = registry();
        r.register('#', ObjectPrototype::new(ObjectKind::Wall, "wall", 32, 32));
    }
}
