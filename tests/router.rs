use routier::{Context, MatchError, MatcherFn, Matchers, Outcome, Router, StatusError, Value};
use std::sync::Arc;

#[test]
fn fallback_chain() {
    let mut router = Router::new();
    router.get("/doc", "get").unwrap();
    router.head("/ping", "head").unwrap();
    router.any("/doc", "any").unwrap();
    router.any("/misc", "misc").unwrap();

    // own bucket first
    assert_eq!(*router.at("GET", "/doc").unwrap().value, "get");
    assert_eq!(*router.at("HEAD", "/ping").unwrap().value, "head");

    // HEAD retries against GET before reaching the any bucket
    assert_eq!(*router.at("HEAD", "/doc").unwrap().value, "get");

    // everything else lands in the any bucket
    assert_eq!(*router.at("POST", "/doc").unwrap().value, "any");
    assert_eq!(*router.at("HEAD", "/misc").unwrap().value, "misc");

    assert!(router.at("POST", "/none").unwrap_err().is_not_found());
}

#[test]
fn methods_are_byte_exact() {
    let mut router = Router::new();
    router.get("/a", ()).unwrap();

    assert!(router.at("GET", "/a").is_ok());
    assert!(router.at("get", "/a").unwrap_err().is_not_found());
}

#[test]
fn empty_path_matches_root() {
    let mut router = Router::new();
    router.get("/", "index").unwrap();

    assert_eq!(*router.at("GET", "").unwrap().value, "index");
}

#[test]
fn params_flow_through_the_router() {
    let mut router = Router::new();
    router
        .put("/repos/:owner/:repo/contents/**", "write file")
        .unwrap();

    let found = router
        .at("PUT", "/repos/octo/cat/contents/src/lib.rs")
        .unwrap();
    assert_eq!(found.params.get("owner"), Some("octo"));
    assert_eq!(found.params.get("repo"), Some("cat"));
    assert_eq!(found.params.get("**"), Some("src/lib.rs"));

    let mut form = url::form_urlencoded::Serializer::new(String::new());
    found.params.append_to(&mut form);
    assert_eq!(form.finish(), "owner=octo&repo=cat&**=src%2Flib.rs");
}

#[test]
fn matchers_see_the_context() {
    struct Tenant(&'static str);

    let mut matchers = Matchers::default();
    matchers.register("tenant", |_| {
        Ok(Arc::new(MatcherFn(|text: &str, ctx: &Context| {
            match ctx.get::<Tenant>() {
                Some(tenant) if tenant.0 == text => Outcome::Accept(None),
                Some(_) => Outcome::Reject,
                None => Outcome::Abort(Box::new(StatusError(401))),
            }
        })))
    });

    let mut router = Router::with_matchers(matchers);
    router.get("/orgs/:org tenant/billing", "billing").unwrap();

    let mut ctx = Context::new();
    ctx.insert(Tenant("acme"));
    let found = router.find("GET", "/orgs/acme/billing", &ctx).unwrap();
    assert_eq!(*found.value, "billing");

    // wrong tenant: plain miss
    let mut ctx = Context::new();
    ctx.insert(Tenant("globex"));
    assert!(router
        .find("GET", "/orgs/acme/billing", &ctx)
        .unwrap_err()
        .is_not_found());

    // no tenant: the matcher aborts the lookup
    match router.find("GET", "/orgs/acme/billing", &Context::new()) {
        Err(MatchError::Aborted(abort)) => assert_eq!(abort.status(), Some(401)),
        other => panic!("expected abort, got {:?}", other.map(|m| *m.value)),
    }
}

#[test]
fn typed_values_survive_the_fallback_chain() {
    let mut router = Router::new();
    router.any("/size/:n uint 16", "sized").unwrap();

    let found = router.at("OPTIONS", "/size/512").unwrap();
    assert_eq!(found.params.value("n"), Some(Value::U16(512)));
}

#[test]
fn introspection_and_printing() {
    let mut router = Router::new();
    router.get("/users/:user/events", ()).unwrap();
    router.get("/users/:user/events/public", ()).unwrap();

    let trie = router.root("GET").unwrap();
    let mut out = Vec::new();
    trie.fprint(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("word kind offset nop pattern"));
    assert!(out.contains(":user"));
    assert!(out.contains("/public"));
}

#[test]
fn node_handles_are_stable_across_registration() {
    let mut router = Router::new();
    let events = router.get("/users/:user/events", "events").unwrap();
    router.get("/users/:user/emails", "emails").unwrap();
    router.get("/users/:user/e", "e").unwrap();

    let trie = router.root("GET").unwrap();
    assert_eq!(trie.route(events), "/users/:user/events");
    assert_eq!(trie.value(events), Some(&"events"));
    assert_eq!(router.at("GET", "/users/octo/events").unwrap().node, events);
}
