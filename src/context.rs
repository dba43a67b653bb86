use http::Extensions;

use std::fmt;

/// Per-lookup state handed to every [`Matcher`](crate::Matcher).
///
/// A `Context` is a type-keyed map: callers insert whatever their custom
/// matchers need (the request head, an auth token, a database handle) before
/// the lookup, and matchers read it back by type. The built-in matchers
/// ignore it entirely, so plain lookups can pass [`Context::new`].
///
/// ```
/// use routier::Context;
///
/// struct Tenant(&'static str);
///
/// let mut ctx = Context::new();
/// ctx.insert(Tenant("acme"));
/// assert_eq!(ctx.get::<Tenant>().map(|t| t.0), Some("acme"));
/// ```
#[derive(Default)]
pub struct Context {
    map: Extensions,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value of the same type.
    pub fn insert<V: Send + Sync + 'static>(&mut self, value: V) -> Option<V> {
        self.map.insert(value)
    }

    /// Returns a reference to the value of the given type, if present.
    pub fn get<V: Send + Sync + 'static>(&self) -> Option<&V> {
        self.map.get()
    }

    /// Removes and returns the value of the given type, if present.
    pub fn remove<V: Send + Sync + 'static>(&mut self) -> Option<V> {
        self.map.remove()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}
