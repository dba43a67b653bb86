#![deny(rust_2018_idioms)]

//! Routes URL paths to handlers with typed, validated path parameters.
//!
//! ```rust
//! use routier::{Router, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/home", "Welcome!")?;
//! router.get("/users/:id uint 32", "A User")?;
//!
//! let matched = router.at("GET", "/users/978")?;
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(matched.params.value("id"), Some(Value::U32(978)));
//! assert_eq!(*matched.value, "A User");
//! # Ok(())
//! # }
//! ```
//!
//! `routier` relies on a tree structure which makes heavy use of *common
//! prefixes* — effectively a [radix tree](https://en.wikipedia.org/wiki/Radix_tree)
//! whose nodes additionally carry per-segment matchers. The tree is read-only
//! after registration, so lookups are lock-free and safe to run concurrently.
//!
//! ### Route patterns
//!
//! A pattern is a sequence of segments. Each segment is one of:
//!
//! ```text
//! Syntax          Type
//! literal         fixed text, compared byte-exact
//! :name           named parameter, one segment
//! :name class a…  named parameter validated by a matcher class
//! *               one non-empty segment, binds nothing
//! **              catch-all for the rest of the path, bound as "**"
//! **suffix        catch-all that must end in the literal suffix
//! c?              the preceding character is optional
//! ```
//!
//! ### Named parameters
//!
//! Named parameters match anything until the next separator or the path end:
//!
//! ```text
//! Pattern: /user/:user
//!
//!  /user/gordon              match: user="gordon"
//!  /user/gordon/profile      no match
//! ```
//!
//! A class clause narrows what the segment accepts and coerces the value:
//! `/users/:id uint 32` matches `/users/42` and yields `id` as a `u32`.
//! The built-in classes are described on [`Matchers`]; custom classes can be
//! registered there too. Unlike plain radix routers, literal routes and
//! parameters may share a segment: with `/users/list` and `/users/:id`
//! registered, `/users/list` takes the literal and everything else binds
//! `id` — literals always win, and rejected branches backtrack.
//!
//! ### Catch-all parameters
//!
//! `**` matches the remainder of the path, must come last, and always binds
//! under the name `**`:
//!
//! ```text
//! Pattern: /src/**
//!
//!  /src/somefile.go          match: **="somefile.go"
//!  /src/subdir/somefile.go   match: **="subdir/somefile.go"
//!  /src                      no match
//! ```
//!
//! A catch-all is the last resort: it only matches when no more specific
//! route does.
//!
//! ### Routing by method and host
//!
//! [`Router`] keeps one trie per HTTP method with the conventional fallback
//! chain (`HEAD` retries as `GET`, then the `any` bucket). [`HostRouter`]
//! routes on host names with `.` as the separator, where an all-digit
//! `:port` tail is treated as a literal. The `hyper-server` feature adds a
//! ready-made hyper service on top.
//!
//! ### How does it work?
//!
//! Nodes with a common prefix share a parent, and every node separates its
//! children into sorted literals (binary-searched by first byte) and
//! pattern alternatives (tried in registration order). After registering
//! `/search`, `/support`, `/src/**` and `/users/:id uint 64`, the `GET`
//! tree looks like this:
//!
//! ```text
//! word kind offset nop pattern
//! N grp 01 00
//! N lit 02 00  /
//! N lit 03 00   s
//!   lit 00 00    earch
//! N lit 00 00    rc/
//!   **  00 01       **
//!   lit 00 00    upport
//! N lit 00 00   users/
//!   par 00 01         :id uint 64
//! ```
//!
//! This output comes from [`Trie::fprint`]: one row per node with the
//! terminal flag (`N` marks nodes without a handler), node kind, child
//! offset, cumulative parameter count and the indented pattern fragment.

mod context;
mod error;
mod matcher;
mod params;
mod pattern;
mod router;
mod tree;

pub use context::Context;
pub use error::{Abort, BoxError, InsertError, MatchError, StatusError};
pub use matcher::{Matcher, MatcherFn, Matchers, Outcome, Value};
pub use params::{Argument, Params};
pub use router::{HostRouter, Router};
pub use tree::{Match, NodeId, Trie};

#[cfg(feature = "hyper-server")]
pub use router::hyper;

#[cfg(doctest)]
mod test_readme {
    macro_rules! doc_comment {
        ($x:expr) => {
            #[doc = $x]
            extern "C" {}
        };
    }

    doc_comment!(include_str!("../README.md"));
}
