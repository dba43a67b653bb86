use criterion::{black_box, criterion_group, criterion_main, Criterion};
use routier::{Router, Trie};

fn github_routes() -> Vec<&'static str> {
    vec![
        "/authorizations",
        "/authorizations/:id uint 64",
        "/applications/:client/tokens/:token hex",
        "/events",
        "/repos/:owner/:repo/events",
        "/networks/:owner/:repo/events",
        "/orgs/:org/events",
        "/users/:user/received_events",
        "/users/:user/received_events/public",
        "/users/:user/events",
        "/users/:user/events/public",
        "/users/:user/events/orgs/:org",
        "/feeds",
        "/notifications",
        "/repos/:owner/:repo/notifications",
        "/notifications/threads/:id uint 64",
        "/notifications/threads/:id uint 64/subscription",
        "/repos/:owner/:repo/stargazers",
        "/users/:user/starred",
        "/user/starred",
        "/user/starred/:owner/:repo",
        "/repos/:owner/:repo/subscribers",
        "/users/:user/subscriptions",
        "/user/subscriptions",
        "/repos/:owner/:repo/subscription",
        "/user/subscriptions/:owner/:repo",
        "/users/:user/gists",
        "/gists",
        "/gists/:id uint 64",
        "/gists/:id uint 64/star",
        "/repos/:owner/:repo/git/blobs/:sha hex 40",
        "/repos/:owner/:repo/git/commits/:sha hex 40",
        "/repos/:owner/:repo/git/refs",
        "/repos/:owner/:repo/git/tags/:sha hex 40",
        "/repos/:owner/:repo/contents/**",
        "/emojis",
        "/gitignore/templates",
        "/gitignore/templates/:name alpha",
        "/meta",
        "/rate_limit",
        "/users/:user/orgs",
        "/user/orgs",
        "/orgs/:org",
        "/orgs/:org/members",
        "/orgs/:org/members/:user",
        "/orgs/:org/teams",
        "/teams/:id uint 64",
        "/teams/:id uint 64/members",
        "/teams/:id uint 64/repos",
        "/user/teams",
        "/repos/:owner/:repo/pulls",
        "/repos/:owner/:repo/pulls/:number uint 32",
        "/repos/:owner/:repo/pulls/:number uint 32/commits",
        "/repos/:owner/:repo/pulls/:number uint 32/files",
        "/repos/:owner/:repo/pulls/:number uint 32/merge",
        "/user/repos",
        "/users/:user/repos",
        "/orgs/:org/repos",
        "/repositories",
        "/repos/:owner/:repo",
        "/repos/:owner/:repo/contributors",
        "/repos/:owner/:repo/languages",
        "/repos/:owner/:repo/teams",
        "/repos/:owner/:repo/tags",
        "/repos/:owner/:repo/branches",
        "/repos/:owner/:repo/branches/:branch",
        "/repos/:owner/:repo/commits",
        "/repos/:owner/:repo/commits/:sha hex 40",
        "/repos/:owner/:repo/readme",
        "/search/repositories",
        "/search/code",
        "/search/issues",
        "/search/users",
        "/users/:user",
        "/user",
        "/users",
        "/user/emails",
        "/users/:user/followers",
        "/user/followers",
        "/users/:user/following",
        "/user/following",
        "/user/following/:user",
        "/users/:user/keys",
        "/user/keys",
        "/user/keys/:id uint 64",
    ]
}

fn github_paths() -> Vec<String> {
    github_routes()
        .iter()
        .map(|route| {
            route
                .split('/')
                .map(|seg| {
                    if seg.starts_with(':') {
                        if seg.contains("hex 40") {
                            "0123456789abcdef0123456789abcdef01234567"
                        } else if seg.contains("hex") {
                            "deadbeef"
                        } else if seg.contains("uint") {
                            "42"
                        } else {
                            "octocat"
                        }
                    } else if seg == "**" {
                        "src/lib.rs"
                    } else {
                        seg
                    }
                })
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let mut trie = Trie::new();
    for route in github_routes() {
        trie.insert(route, true).unwrap();
    }
    let paths = github_paths();

    group.bench_function("github api", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let result = black_box(trie.at(path).unwrap());
                assert!(*result.value);
            }
        });
    });

    let mut params = Trie::new();
    params
        .insert(
            "/:a/:b/:c/:d/:e/:f/:g/:h/:i/:j/:k/:l/:m/:n/:o/:p/:q/:r/:s/:t",
            true,
        )
        .unwrap();

    group.bench_function("twenty params", |b| {
        b.iter(|| {
            let result = params
                .at(black_box("/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p/q/r/s/t"))
                .unwrap();
            assert!(*result.value);
        });
    });

    let mut router = Router::new();
    for route in github_routes() {
        router.get(route, true).unwrap();
    }

    group.bench_function("method router", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let result = black_box(router.at("GET", path).unwrap());
                assert!(*result.value);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
