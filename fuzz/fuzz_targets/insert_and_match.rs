#![no_main]
use libfuzzer_sys::fuzz_target;
use routier::Trie;

const CLASSES: [&str; 7] = ["string", "alpha", "alnum", "hex", "uint", "int", "reg"];

// Assembles a route from fuzzed segments so the corpus reaches every piece
// kind of the pattern grammar: literals, bare and classed parameters, `*`,
// `**` with a suffix, and optional trailing characters. Fuzz strings double
// as literal text, parameter names and matcher arguments, so malformed
// names, classes and regexes all flow through registration.
fn build_route(segments: &[(u8, String, String)]) -> String {
    let mut route = String::from("/");
    for (kind, a, b) in segments {
        match kind % 6 {
            0 => {
                route.push_str(a);
                route.push('/');
            }
            1 => {
                route.push(':');
                route.push_str(a);
                route.push('/');
            }
            2 => {
                route.push(':');
                route.push_str(a);
                route.push(' ');
                route.push_str(CLASSES[(*kind as usize / 6) % CLASSES.len()]);
                route.push(' ');
                route.push_str(b);
                route.push('/');
            }
            3 => route.push_str("*/"),
            4 => {
                route.push_str("**");
                route.push_str(a);
            }
            5 => {
                route.push_str(a);
                route.push('?');
            }
            _ => unreachable!(),
        }
    }
    route
}

fuzz_target!(|data: (Vec<Vec<(u8, String, String)>>, Vec<String>)| {
    let (routes, paths) = data;
    let mut trie = Trie::new();

    for segments in &routes {
        let route = build_route(segments);
        if let Ok(node) = trie.insert(&route, route.clone()) {
            // every registered route must reconstruct bit-exact
            assert_eq!(trie.route(node), route);
        }
    }

    if let Err(err) = trie.check_invariants() {
        panic!("invariant violated: {}", err);
    }

    for path in &paths {
        if let Ok(found) = trie.at(path) {
            assert!(trie.is_terminal(found.node));
        }
    }
});
