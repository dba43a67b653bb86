use crate::context::Context;
use crate::error::{InsertError, MatchError};
use crate::matcher::Matchers;
use crate::tree::{Match, NodeId, Trie};

use http::Method;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A method-keyed request router: one [`Trie`] per HTTP method.
///
/// Methods are compared byte-exact; `"*"` is normalized to the catch-all
/// `"any"` bucket at registration and lookup. An incoming `(method, path)`
/// is resolved against the method's own trie first, then `HEAD` falls back
/// to `GET`, and finally the `any` bucket is tried.
///
/// ```
/// use routier::Router;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
/// router.get("/users/:id uint 64", "A User")?;
/// router.any("/ping", "pong")?;
///
/// let found = router.at("GET", "/users/42")?;
/// assert_eq!(*found.value, "A User");
/// assert_eq!(found.params.get("id"), Some("42"));
///
/// // DELETE has no trie of its own, the any bucket answers
/// assert_eq!(*router.at("DELETE", "/ping")?.value, "pong");
/// # Ok(())
/// # }
/// ```
pub struct Router<T> {
    trees: HashMap<String, Trie<T>>,
    matchers: Matchers,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_matchers(Matchers::default())
    }
}

impl<T> Router<T> {
    /// Creates an empty router with the built-in matcher catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty router with a custom matcher catalog.
    pub fn with_matchers(matchers: Matchers) -> Self {
        Router {
            trees: HashMap::new(),
            matchers,
        }
    }

    /// Registers a route for the given method and returns its terminal node.
    ///
    /// Registration is idempotent: the same `(method, pattern)` yields the
    /// same node, and the value is replaced.
    pub fn handle(&mut self, method: &str, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        let method = normalize(method);
        debug!(method, pattern, "registering route");

        self.trees
            .entry(method.to_string())
            .or_insert_with(Trie::new)
            .insert_with(pattern, value, &self.matchers)
    }

    /// Registers a handler for GET requests.
    pub fn get(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::GET.as_str(), pattern, value)
    }

    /// Registers a handler for HEAD requests.
    pub fn head(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::HEAD.as_str(), pattern, value)
    }

    /// Registers a handler for OPTIONS requests.
    pub fn options(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::OPTIONS.as_str(), pattern, value)
    }

    /// Registers a handler for POST requests.
    pub fn post(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::POST.as_str(), pattern, value)
    }

    /// Registers a handler for PUT requests.
    pub fn put(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::PUT.as_str(), pattern, value)
    }

    /// Registers a handler for PATCH requests.
    pub fn patch(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::PATCH.as_str(), pattern, value)
    }

    /// Registers a handler for DELETE requests.
    pub fn delete(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle(Method::DELETE.as_str(), pattern, value)
    }

    /// Registers a handler for the `any` bucket, tried when no
    /// method-specific route matches.
    pub fn any(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        self.handle("any", pattern, value)
    }

    /// Looks up a route with an empty matcher context.
    pub fn at(&self, method: &str, path: &str) -> Result<Match<'_, T>, MatchError> {
        self.find(method, path, &Context::new())
    }

    /// Looks up a route, handing `ctx` to every matcher along the way.
    ///
    /// An empty path is normalized to `/`. Matcher aborts stop the fallback
    /// chain; only a plain miss moves on to the next trie.
    pub fn find(&self, method: &str, path: &str, ctx: &Context) -> Result<Match<'_, T>, MatchError> {
        let method = normalize(method);
        let path = if path.is_empty() { "/" } else { path };

        let mut result = match self.trees.get(method) {
            Some(trie) => trie.find(path, ctx),
            None => Err(MatchError::NotFound),
        };

        if matches!(result, Err(MatchError::NotFound)) && method == "HEAD" {
            if let Some(trie) = self.trees.get("GET") {
                trace!(path, "HEAD missed, retrying against GET");
                result = trie.find(path, ctx);
            }
        }

        if matches!(result, Err(MatchError::NotFound)) && method != "any" {
            if let Some(trie) = self.trees.get("any") {
                trace!(path, "retrying against the any bucket");
                result = trie.find(path, ctx);
            }
        }

        result
    }

    /// Returns the trie registered for `method`, if any.
    pub fn root(&self, method: &str) -> Option<&Trie<T>> {
        self.trees.get(normalize(method))
    }
}

fn normalize(method: &str) -> &str {
    if method == "*" {
        "any"
    } else {
        method
    }
}

/// A host router: a `.`-separated [`Trie`] over host names.
///
/// Host patterns support the same segment language as paths, with one
/// addition: an all-digit `:port` tail is a literal, not a parameter.
///
/// ```
/// use routier::HostRouter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut hosts = HostRouter::new();
/// hosts.add(":tenant.example.com", "tenant site")?;
/// hosts.add("www.example.com", "main site")?;
///
/// let found = hosts.at("acme.example.com")?;
/// assert_eq!(*found.value, "tenant site");
/// assert_eq!(found.params.get("tenant"), Some("acme"));
/// # Ok(())
/// # }
/// ```
pub struct HostRouter<T> {
    trie: Trie<T>,
    matchers: Matchers,
}

impl<T> Default for HostRouter<T> {
    fn default() -> Self {
        Self::with_matchers(Matchers::default())
    }
}

impl<T> HostRouter<T> {
    /// Creates an empty host router with the built-in matcher catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty host router with a custom matcher catalog.
    pub fn with_matchers(matchers: Matchers) -> Self {
        HostRouter {
            trie: Trie::with_separator(b'.'),
            matchers,
        }
    }

    /// Registers a host pattern and returns its terminal node.
    pub fn add(&mut self, pattern: &str, value: T) -> Result<NodeId, InsertError> {
        if pattern.contains('/') {
            return Err(InsertError::InvalidHost);
        }
        debug!(pattern, "registering host route");
        self.trie.insert_with(pattern, value, &self.matchers)
    }

    /// Looks up a host with an empty matcher context.
    pub fn at(&self, host: &str) -> Result<Match<'_, T>, MatchError> {
        self.trie.at(host)
    }

    /// Looks up a host, handing `ctx` to every matcher along the way.
    pub fn find(&self, host: &str, ctx: &Context) -> Result<Match<'_, T>, MatchError> {
        self.trie.find(host, ctx)
    }

    /// The underlying host trie.
    pub fn root(&self) -> &Trie<T> {
        &self.trie
    }
}

#[cfg(feature = "hyper-server")]
pub mod hyper {
    //! Hyper service integration.
    //!
    //! Handlers are opaque boxed closures from the router's point of view;
    //! this module stores the bound [`Params`](crate::Params) in the request
    //! extensions and renders matcher aborts through a pluggable error
    //! translator.
    //!
    //! ```no_run
    //! use routier::hyper::{BoxedHandler, Handler};
    //! use routier::Router;
    //! use hyper::{Body, Request, Response};
    //!
    //! async fn index(_: Request<Body>) -> Result<Response<Body>, hyper::Error> {
    //!     Ok(Response::new("Hello, World!".into()))
    //! }
    //!
    //! async fn hello(req: Request<Body>) -> Result<Response<Body>, hyper::Error> {
    //!     let params = req.extensions().get::<routier::Params>().unwrap();
    //!     let user = params.get("user").unwrap_or_default();
    //!     Ok(Response::new(format!("Hello, {}", user).into()))
    //! }
    //!
    //! #[tokio::main]
    //! async fn main() {
    //!     let mut router: Router<BoxedHandler> = Router::new();
    //!     router.get("/", Handler::new(index)).unwrap();
    //!     router.get("/hello/:user", Handler::new(hello)).unwrap();
    //!
    //!     hyper::Server::bind(&([127, 0, 0, 1], 3000).into())
    //!         .serve(router.into_service())
    //!         .await
    //!         .unwrap();
    //! }
    //! ```
    use crate::context::Context;
    use crate::error::MatchError;
    use crate::Router;

    use futures::future::{ok, Future};
    use hyper::service::Service;
    use hyper::{Body, Request, Response, StatusCode};
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context as TaskContext, Poll};

    type HandlerResult = Result<Response<Body>, hyper::Error>;
    type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

    /// An asynchronous request handler.
    pub trait Handler {
        fn new(handler: Self) -> Box<Self>
        where
            Self: Sized;

        fn handle(&self, req: Request<Body>) -> HandlerFuture;
    }

    impl<F, R> Handler for F
    where
        F: Fn(Request<Body>) -> R,
        R: Future<Output = HandlerResult> + Send + 'static,
    {
        fn new(handler: Self) -> Box<Self>
        where
            Self: Sized,
        {
            Box::new(handler)
        }

        fn handle(&self, req: Request<Body>) -> HandlerFuture {
            Box::pin(self(req))
        }
    }

    pub type BoxedHandler = Box<dyn Handler + Send + Sync>;

    /// Translates a matcher abort into a response.
    pub type ErrorRenderer = fn(&(dyn std::error::Error + Send + Sync + 'static)) -> Response<Body>;

    /// The default error translation: a [`StatusError`](crate::StatusError)
    /// maps to its own status code, anything else to 400. The body carries
    /// the error text, or the canonical reason when the text is empty.
    pub fn render_error(err: &(dyn std::error::Error + Send + Sync + 'static)) -> Response<Body> {
        let status = err
            .downcast_ref::<crate::StatusError>()
            .and_then(|s| StatusCode::from_u16(s.0).ok())
            .unwrap_or(StatusCode::BAD_REQUEST);

        let mut body = err.to_string();
        if body.is_empty() {
            body = status.canonical_reason().unwrap_or_default().to_string();
        }

        Response::builder()
            .status(status)
            .body(Body::from(body))
            .unwrap()
    }

    /// A hyper `Service` dispatching requests through a [`Router`].
    #[derive(Clone)]
    pub struct RouterService {
        router: Arc<Router<BoxedHandler>>,
        render: ErrorRenderer,
    }

    impl RouterService {
        pub fn new(router: Router<BoxedHandler>) -> Self {
            RouterService {
                router: Arc::new(router),
                render: render_error,
            }
        }

        /// Replaces the error renderer run on matcher aborts.
        pub fn render_errors_with(mut self, render: ErrorRenderer) -> Self {
            self.render = render;
            self
        }
    }

    impl Service<Request<Body>> for RouterService {
        type Response = Response<Body>;
        type Error = hyper::Error;
        type Future = HandlerFuture;

        fn poll_ready(&mut self, _: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, mut req: Request<Body>) -> Self::Future {
            let found = self
                .router
                .find(req.method().as_str(), req.uri().path(), &Context::new());

            match found {
                Ok(found) => {
                    req.extensions_mut().insert(found.params);
                    found.value.handle(req)
                }
                Err(MatchError::Aborted(abort)) => {
                    Box::pin(ok((self.render)(abort.source.as_ref())))
                }
                Err(MatchError::NotFound) => Box::pin(ok(Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::empty())
                    .unwrap())),
            }
        }
    }

    /// The service factory handed to `hyper::Server::serve`.
    pub struct MakeRouterService(pub RouterService);

    impl<T> Service<T> for MakeRouterService {
        type Response = RouterService;
        type Error = hyper::Error;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

        fn poll_ready(&mut self, _: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _: T) -> Self::Future {
            let service = self.0.clone();
            Box::pin(async move { Ok(service) })
        }
    }

    impl Router<BoxedHandler> {
        /// Converts the router into a hyper service factory.
        pub fn into_service(self) -> MakeRouterService {
            MakeRouterService(RouterService::new(self))
        }
    }
}
