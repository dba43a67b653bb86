use crate::params::Params;
use crate::tree::NodeId;

use std::fmt;

/// A boxed error as produced by aborting matchers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents errors that can occur when registering a new route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// The route pattern was empty.
    Empty,
    /// Attempted to insert a catch-all that conflicts with an existing one.
    Conflict {
        /// The existing route that the insertion is conflicting with.
        with: String,
    },
    /// Parameters must be registered with a name.
    UnnamedParam,
    /// Parameter names are limited to 251 bytes.
    NameTooLong,
    /// A single `*` must cover a whole segment.
    InvalidWildcard,
    /// A catch-all suffix may not contain separators or metacharacters.
    InvalidCatchAll,
    /// A `?` needs a preceding character to make optional.
    InvalidOptional,
    /// A host pattern may not contain a path.
    InvalidHost,
    /// A route may bind at most 255 parameters.
    TooManyParams,
    /// The matcher class is not present in the registry.
    UnknownClass {
        /// The class name as written in the route.
        class: String,
    },
    /// The matcher class rejected its arguments.
    InvalidMatcher {
        /// The class name as written in the route.
        class: String,
        /// The builder's description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "route patterns must not be empty"),
            Self::Conflict { with } => {
                write!(
                    f,
                    "insertion failed due to conflict with previously registered route: {}",
                    with
                )
            }
            Self::UnnamedParam => write!(f, "parameters must be registered with a name"),
            Self::NameTooLong => write!(f, "parameter names are limited to 251 bytes"),
            Self::InvalidWildcard => write!(
                f,
                "a '*' wildcard must be followed by a separator or the end of the route"
            ),
            Self::InvalidCatchAll => write!(
                f,
                "catch-all parameters are only allowed at the end of a route"
            ),
            Self::InvalidOptional => {
                write!(f, "a '?' must follow the character it makes optional")
            }
            Self::InvalidHost => write!(f, "host patterns must not contain a path"),
            Self::TooManyParams => write!(f, "a route may bind at most 255 parameters"),
            Self::UnknownClass { class } => write!(f, "unknown matcher class: {}", class),
            Self::InvalidMatcher { class, detail } => {
                write!(f, "invalid arguments for matcher class {}: {}", class, detail)
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// A failed match attempt.
///
/// ```
/// use routier::{MatchError, Trie};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = Trie::new();
/// trie.insert("/home", "Welcome!")?;
/// trie.insert("/blog/", "Our blog.")?;
///
/// // no routes match
/// if let Err(err) = trie.at("/foobar") {
///     assert!(err.is_not_found());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
    /// A matcher short-circuited the lookup with an error.
    Aborted(Abort),
}

impl MatchError {
    /// Returns `true` if this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchError::NotFound)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "matching route not found"),
            Self::Aborted(abort) => write!(f, "lookup aborted by matcher: {}", abort.source),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Aborted(abort) => Some(abort.source.as_ref()),
        }
    }
}

/// The state of a lookup that a matcher short-circuited.
///
/// The caller decides how to render `source`; [`Abort::status`] recovers an
/// HTTP status code for status-shaped errors.
#[derive(Debug)]
pub struct Abort {
    /// The node whose matcher aborted, if any.
    pub node: Option<NodeId>,
    /// Parameters bound before the abort, in route order.
    pub params: Params,
    /// The error returned by the matcher.
    pub source: BoxError,
}

impl Abort {
    /// The status code carried by `source`, if it is a [`StatusError`].
    pub fn status(&self) -> Option<u16> {
        self.source.downcast_ref::<StatusError>().map(|s| s.0)
    }
}

/// An error shaped like an HTTP status code.
///
/// Matchers that abort with a `StatusError` get translated to the matching
/// response status by the default error renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusError(pub u16);

impl StatusError {
    pub const NOT_FOUND: StatusError = StatusError(404);
    pub const NOT_IMPLEMENTED: StatusError = StatusError(501);
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = http::StatusCode::from_u16(self.0)
            .ok()
            .and_then(|s| s.canonical_reason());

        match reason {
            Some(reason) => write!(f, "{}", reason),
            None => write!(f, "status {}", self.0),
        }
    }
}

impl std::error::Error for StatusError {}
