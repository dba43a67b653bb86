use crate::context::Context;
use crate::error::{Abort, BoxError, InsertError, MatchError};
use crate::matcher::{Matcher, Matchers, Outcome};
use crate::params::{Argument, Params};
use crate::pattern::{self, Piece};

use std::fmt;
use std::io;
use std::str;
use std::sync::Arc;

// Separator counts saturate here; a catch-all subtree reports the cap.
const SLASH_CAP: u8 = 251;
// Cumulative parameter counts saturate here.
const NOP_CAP: u8 = 255;

const ROOT: NodeId = NodeId(0);

/// A stable handle to a trie node.
///
/// Handles stay valid across later insertions: prefix splits re-parent nodes
/// without moving them in the arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(u32);

impl NodeId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Kind {
    /// Empty pattern aggregating alternatives; also the root.
    Group,
    Literal,
    /// `pattern[1..name_end]` is the parameter name.
    Param { name_end: usize },
    Star,
    CatchAll,
    Optional,
}

impl Kind {
    fn tag(self) -> &'static str {
        match self {
            Kind::Group => "grp",
            Kind::Literal => "lit",
            Kind::Param { .. } => "par",
            Kind::Star => "*",
            Kind::CatchAll => "**",
            Kind::Optional => "opt",
        }
    }
}

struct Node<T> {
    pattern: Vec<u8>,
    kind: Kind,
    parent: Option<NodeId>,
    // literal children sorted by leading byte, then optionals in
    // registration order, then at most one param or group, star, catch-all
    children: Vec<NodeId>,
    // boundary between literal and pattern children
    offset: usize,
    // parameters bound on the way down from the root, this node included
    nop: u8,
    // separators this subtree can still consume
    slash_max: u8,
    matcher: Option<Arc<dyn Matcher>>,
    word: Option<T>,
}

impl<T> Node<T> {
    fn new(kind: Kind, pattern: &[u8], parent: NodeId, nop: u8, slash_max: u8) -> Node<T> {
        Node {
            pattern: pattern.to_vec(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
            offset: 0,
            nop,
            slash_max,
            matcher: None,
            word: None,
        }
    }
}

/// A successful lookup.
#[derive(Debug)]
pub struct Match<'a, T> {
    /// The terminal node that matched.
    pub node: NodeId,
    /// The value attached at registration.
    pub value: &'a T,
    /// The bound parameters, in route order; owned by the caller.
    pub params: Params,
}

/// A compressed prefix tree over a configurable separator.
///
/// The trie mixes literal fragments, named parameters with optional
/// per-segment matchers, single-segment wildcards and a catch-all suffix,
/// and resolves lookups with deterministic priority: literals outrank
/// patterns, patterns are tried in registration order, and the catch-all is
/// the last resort.
///
/// ```
/// use routier::Trie;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = Trie::new();
/// trie.insert("/home", "Welcome!")?;
/// trie.insert("/users/:id uint 64", "A User")?;
///
/// let matched = trie.at("/users/1")?;
/// assert_eq!(matched.params.get("id"), Some("1"));
/// assert_eq!(*matched.value, "A User");
/// # Ok(())
/// # }
/// ```
pub struct Trie<T> {
    nodes: Vec<Node<T>>,
    sep: u8,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie with the `/` separator for path routing.
    pub fn new() -> Self {
        Self::with_separator(b'/')
    }

    /// Creates an empty trie with a custom separator, e.g. `.` for hosts.
    pub fn with_separator(sep: u8) -> Self {
        let root = Node {
            pattern: Vec::new(),
            kind: Kind::Group,
            parent: None,
            children: Vec::new(),
            offset: 0,
            nop: 0,
            slash_max: 0,
            matcher: None,
            word: None,
        };
        Trie {
            nodes: vec![root],
            sep,
        }
    }

    /// Inserts a route, using the built-in matcher catalog for class clauses.
    ///
    /// Insertion is idempotent: registering the same pattern again returns
    /// the same node and replaces its value.
    pub fn insert(&mut self, route: &str, value: T) -> Result<NodeId, InsertError> {
        self.insert_with(route, value, Matchers::builtin())
    }

    /// Inserts a route, building class clauses from the given catalog.
    pub fn insert_with(
        &mut self,
        route: &str,
        value: T,
        matchers: &Matchers,
    ) -> Result<NodeId, InsertError> {
        let pieces = pattern::parse(route, self.sep)?;

        // build matchers up front so a bad class leaves the trie untouched
        let mut built: Vec<Option<Arc<dyn Matcher>>> = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            built.push(match piece {
                Piece::Param {
                    class: Some((class, args)),
                    ..
                } => Some(matchers.build(class, args)?),
                _ => None,
            });
        }

        let mut cur = ROOT;
        for (idx, piece) in pieces.iter().enumerate() {
            let incl = pattern::tail_seps(&pieces[idx..], self.sep, SLASH_CAP);
            let after = pattern::tail_seps(&pieces[idx + 1..], self.sep, SLASH_CAP);

            cur = match piece {
                Piece::Literal(text) => self.insert_literal(cur, text.as_bytes(), after),
                Piece::Param { text, name_end, .. } => {
                    self.insert_param(cur, text.as_bytes(), *name_end, built[idx].take(), incl)
                }
                Piece::Star => self.insert_star(cur, incl),
                Piece::CatchAll { text } => self.insert_catch_all(cur, text.as_bytes())?,
                Piece::Optional(text) => self.insert_optional(cur, text.as_bytes(), incl),
            };
        }

        self.nodes[cur.idx()].word = Some(value);
        Ok(cur)
    }

    /// Looks up a path with an empty matcher context.
    pub fn at(&self, path: &str) -> Result<Match<'_, T>, MatchError> {
        self.find(path, &Context::new())
    }

    /// Looks up a path, handing `ctx` to every matcher along the way.
    pub fn find(&self, path: &str, ctx: &Context) -> Result<Match<'_, T>, MatchError> {
        let mut st = Descent {
            ctx,
            hit: None,
            err: None,
            stack: Vec::new(),
            fallbacks: Vec::new(),
        };

        if !path.is_empty() {
            self.walk(ROOT, path.as_bytes(), &mut st);

            // the catch-alls recorded on the way down are the last resort:
            // deepest checkpoint first, earlier branches winning ties
            while !st.done() && !st.fallbacks.is_empty() {
                let mut best = 0;
                for i in 1..st.fallbacks.len() {
                    if st.fallbacks[i].rest.len() < st.fallbacks[best].rest.len() {
                        best = i;
                    }
                }
                let fb = st.fallbacks.swap_remove(best);
                st.stack = fb.bound;
                self.walk(fb.node, fb.rest, &mut st);
            }
        }

        let params = Params::from_stack(st.stack);
        if let Some(source) = st.err {
            return Err(MatchError::Aborted(Abort {
                node: st.hit,
                params,
                source,
            }));
        }

        match st.hit {
            Some(node) => match &self.nodes[node.idx()].word {
                Some(value) => Ok(Match {
                    node,
                    value,
                    params,
                }),
                None => Err(MatchError::NotFound),
            },
            None => Err(MatchError::NotFound),
        }
    }

    /// Reconstructs the registered route ending at `id`.
    pub fn route(&self, id: NodeId) -> String {
        let mut fragments = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            fragments.push(self.nodes[c.idx()].pattern.as_slice());
            cur = self.nodes[c.idx()].parent;
        }
        fragments.reverse();
        String::from_utf8(fragments.concat()).unwrap()
    }

    /// Returns the value registered at `id`, if the node is a terminal.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.idx())?.word.as_ref()
    }

    /// Mutable access to the value registered at `id`.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.idx())?.word.as_mut()
    }

    /// Whether `id` is a route endpoint.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.value(id).is_some()
    }

    /// Pretty-prints the trie to stdout.
    pub fn print(&self) {
        let _ = self.fprint(&mut io::stdout());
    }

    /// Pretty-prints the trie: one row per node with the terminal flag,
    /// kind, offset, cumulative parameter count and indented pattern.
    pub fn fprint<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "word kind offset nop pattern")?;
        self.output(w, ROOT, 0)
    }

    fn output<W: io::Write>(&self, w: &mut W, id: NodeId, indent: usize) -> io::Result<()> {
        let node = &self.nodes[id.idx()];
        let word = if node.word.is_some() { ' ' } else { 'N' };
        writeln!(
            w,
            "{} {:<3} {:02x} {:02x}  {:indent$}{}",
            word,
            node.kind.tag(),
            node.offset,
            node.nop,
            "",
            String::from_utf8_lossy(&node.pattern),
        )?;

        let indent = indent + node.pattern.len();
        for &child in &node.children {
            self.output(w, child, indent)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // insertion

    fn push(&mut self, node: Node<T>) -> NodeId {
        self.nodes.push(node);
        NodeId((self.nodes.len() - 1) as u32)
    }

    fn bump(&mut self, id: NodeId, seps: u8) {
        let slash = &mut self.nodes[id.idx()].slash_max;
        *slash = (*slash).max(seps.min(SLASH_CAP));
    }

    fn next_nop(&self, parent: NodeId) -> u8 {
        let nop = self.nodes[parent.idx()].nop;
        if nop == NOP_CAP {
            NOP_CAP
        } else {
            nop + 1
        }
    }

    // Position of the literal child starting with `first`, or where one
    // would be inserted to keep the range sorted.
    fn literal_position(&self, parent: NodeId, first: u8) -> usize {
        let node = &self.nodes[parent.idx()];
        let mut lo = 0;
        let mut hi = node.offset;
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.nodes[node.children[mid].idx()].pattern[0] < first {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn literal_child(&self, parent: NodeId, first: u8) -> Option<NodeId> {
        let pos = self.literal_position(parent, first);
        let node = &self.nodes[parent.idx()];
        (pos < node.offset)
            .then(|| node.children[pos])
            .filter(|&c| self.nodes[c.idx()].pattern[0] == first)
    }

    fn insert_literal(&mut self, cur: NodeId, text: &[u8], after: u8) -> NodeId {
        let mut cur = cur;
        let mut text = text;
        loop {
            let remaining = sat_seps(count_seps(text, self.sep), after);
            let first = text[0];
            let pos = self.literal_position(cur, first);

            let child = match self.literal_child(cur, first) {
                Some(child) => child,
                None => {
                    let nop = self.nodes[cur.idx()].nop;
                    let id = self.push(Node::new(Kind::Literal, text, cur, nop, remaining));
                    self.nodes[cur.idx()].children.insert(pos, id);
                    self.nodes[cur.idx()].offset += 1;
                    return id;
                }
            };

            let lcp = common_prefix(&self.nodes[child.idx()].pattern, text);
            let target = if lcp < self.nodes[child.idx()].pattern.len() {
                self.split(cur, pos, child, lcp)
            } else {
                child
            };

            self.bump(target, remaining);
            if lcp == text.len() {
                return target;
            }
            text = &text[lcp..];
            cur = target;
        }
    }

    // Splits `child` at `at`, introducing a parent that holds the common
    // prefix. The original node keeps its id, children and word, so handles
    // returned from earlier insertions stay valid.
    fn split(&mut self, parent: NodeId, slot: usize, child: NodeId, at: usize) -> NodeId {
        let suffix = self.nodes[child.idx()].pattern.split_off(at);
        let prefix = std::mem::replace(&mut self.nodes[child.idx()].pattern, suffix);
        let nop = self.nodes[child.idx()].nop;
        let slash = self.nodes[child.idx()].slash_max;

        let mid = self.push(Node {
            pattern: prefix,
            kind: Kind::Literal,
            parent: Some(parent),
            children: vec![child],
            offset: 1,
            nop,
            slash_max: slash,
            matcher: None,
            word: None,
        });

        self.nodes[parent.idx()].children[slot] = mid;
        self.nodes[child.idx()].parent = Some(mid);
        mid
    }

    // First pattern child that is a param or group, with its slot.
    fn param_anchor(&self, parent: NodeId) -> Option<(usize, NodeId)> {
        let node = &self.nodes[parent.idx()];
        for (slot, &child) in node.children.iter().enumerate().skip(node.offset) {
            match self.nodes[child.idx()].kind {
                Kind::Param { .. } | Kind::Group => return Some((slot, child)),
                Kind::Star | Kind::CatchAll => return None,
                _ => {}
            }
        }
        None
    }

    // Insertion slot directly before the star and catch-all children.
    fn before_wildcards(&self, parent: NodeId) -> usize {
        let node = &self.nodes[parent.idx()];
        for (slot, &child) in node.children.iter().enumerate().skip(node.offset) {
            if matches!(self.nodes[child.idx()].kind, Kind::Star | Kind::CatchAll) {
                return slot;
            }
        }
        node.children.len()
    }

    fn insert_param(
        &mut self,
        cur: NodeId,
        text: &[u8],
        name_end: usize,
        matcher: Option<Arc<dyn Matcher>>,
        contrib: u8,
    ) -> NodeId {
        let kind = Kind::Param { name_end };

        match self.param_anchor(cur) {
            None => {
                let slot = self.before_wildcards(cur);
                let nop = self.next_nop(cur);
                let mut node = Node::new(kind, text, cur, nop, contrib);
                node.matcher = matcher;
                let id = self.push(node);
                self.nodes[cur.idx()].children.insert(slot, id);
                id
            }
            Some((slot, anchor)) => {
                let group = match self.nodes[anchor.idx()].kind {
                    Kind::Group => {
                        self.bump(anchor, contrib);
                        anchor
                    }
                    _ if self.nodes[anchor.idx()].pattern == text => {
                        // identical alternative, reuse it
                        self.bump(anchor, contrib);
                        return anchor;
                    }
                    _ => {
                        // a second distinct alternative: hang both under a group
                        let nop = self.nodes[cur.idx()].nop;
                        let slash = self.nodes[anchor.idx()].slash_max.max(contrib);
                        let group = self.push(Node {
                            pattern: Vec::new(),
                            kind: Kind::Group,
                            parent: Some(cur),
                            children: vec![anchor],
                            offset: 0,
                            nop,
                            slash_max: slash,
                            matcher: None,
                            word: None,
                        });
                        self.nodes[cur.idx()].children[slot] = group;
                        self.nodes[anchor.idx()].parent = Some(group);
                        group
                    }
                };

                let existing = self.nodes[group.idx()]
                    .children
                    .iter()
                    .copied()
                    .find(|&c| self.nodes[c.idx()].pattern == text);
                if let Some(id) = existing {
                    self.bump(id, contrib);
                    return id;
                }

                let nop = self.next_nop(group);
                let mut node = Node::new(kind, text, group, nop, contrib);
                node.matcher = matcher;
                let id = self.push(node);
                self.nodes[group.idx()].children.push(id);
                id
            }
        }
    }

    fn insert_star(&mut self, cur: NodeId, contrib: u8) -> NodeId {
        let node = &self.nodes[cur.idx()];
        let existing = node.children[node.offset..]
            .iter()
            .copied()
            .find(|&c| self.nodes[c.idx()].kind == Kind::Star);
        if let Some(id) = existing {
            self.bump(id, contrib);
            return id;
        }

        // before the catch-all, after everything else
        let slot = self.nodes[cur.idx()]
            .children
            .iter()
            .position(|&c| self.nodes[c.idx()].kind == Kind::CatchAll)
            .unwrap_or(self.nodes[cur.idx()].children.len());

        let nop = self.nodes[cur.idx()].nop;
        let id = self.push(Node::new(Kind::Star, b"*", cur, nop, contrib));
        self.nodes[cur.idx()].children.insert(slot, id);
        id
    }

    fn insert_catch_all(&mut self, cur: NodeId, text: &[u8]) -> Result<NodeId, InsertError> {
        let node = &self.nodes[cur.idx()];
        let existing = node.children[node.offset..]
            .iter()
            .copied()
            .find(|&c| self.nodes[c.idx()].kind == Kind::CatchAll);

        if let Some(id) = existing {
            if self.nodes[id.idx()].pattern == text {
                return Ok(id);
            }
            return Err(InsertError::Conflict {
                with: self.route(id),
            });
        }

        let nop = self.next_nop(cur);
        let id = self.push(Node::new(Kind::CatchAll, text, cur, nop, SLASH_CAP));
        self.nodes[cur.idx()].children.push(id);
        Ok(id)
    }

    fn insert_optional(&mut self, cur: NodeId, text: &[u8], contrib: u8) -> NodeId {
        let offset = self.nodes[cur.idx()].offset;
        let len = self.nodes[cur.idx()].children.len();
        let mut slot = offset;
        for i in offset..len {
            let child = self.nodes[cur.idx()].children[i];
            match self.nodes[child.idx()].kind {
                Kind::Optional => {
                    if self.nodes[child.idx()].pattern == text {
                        self.bump(child, contrib);
                        return child;
                    }
                    slot += 1;
                }
                _ => break,
            }
        }

        let nop = self.nodes[cur.idx()].nop;
        let id = self.push(Node::new(Kind::Optional, text, cur, nop, contrib));
        self.nodes[cur.idx()].children.insert(slot, id);
        id
    }

    // ------------------------------------------------------------------
    // lookup

    fn walk<'p>(&self, id: NodeId, path: &'p [u8], st: &mut Descent<'p, '_>) {
        let node = &self.nodes[id.idx()];
        let depth = st.stack.len();
        let consumed;

        match node.kind {
            Kind::Group => consumed = 0,
            Kind::Literal => {
                if path.len() < node.pattern.len()
                    || path[..node.pattern.len()] != node.pattern[..]
                {
                    return;
                }
                consumed = node.pattern.len();
            }
            Kind::Optional => {
                let opt = &node.pattern[..node.pattern.len() - 1];
                consumed = if path.starts_with(opt) { opt.len() } else { 0 };
            }
            Kind::Star => match position(path, self.sep) {
                // a trailing star swallows the rest of the path
                None => {
                    if !path.is_empty() && node.word.is_some() {
                        st.hit = Some(id);
                    }
                    return;
                }
                // stars match one non-empty segment
                Some(0) => return,
                Some(end) => consumed = end,
            },
            Kind::CatchAll => {
                let suffix = &node.pattern[2..];
                if !suffix.is_empty() && !path.ends_with(suffix) {
                    return;
                }
                if node.word.is_some() {
                    st.stack
                        .push(Argument::new("**", str::from_utf8(path).unwrap()));
                    st.hit = Some(id);
                }
                return;
            }
            Kind::Param { name_end } => {
                let end = position(path, self.sep).unwrap_or(path.len());
                let text = str::from_utf8(&path[..end]).unwrap();

                let mut value = None;
                if let Some(matcher) = &node.matcher {
                    match matcher.matches(text, st.ctx) {
                        Outcome::Reject => return,
                        Outcome::Accept(v) => value = v,
                        Outcome::Abort(err) => {
                            st.hit = Some(id);
                            st.err = Some(err);
                            return;
                        }
                    }
                }

                let name = str::from_utf8(&node.pattern[1..name_end]).unwrap();
                st.stack.push(Argument::typed(name, text, value));
                consumed = end;
            }
        }

        let rest = &path[consumed..];
        if rest.is_empty() {
            if node.word.is_some() {
                st.hit = Some(id);
                return;
            }

            // an optional-trailing child can finish the route; a catch-all
            // child may still bind the empty remainder
            for &child in &node.children[node.offset..] {
                let c = &self.nodes[child.idx()];
                match c.kind {
                    Kind::Optional if c.word.is_some() => {
                        st.hit = Some(child);
                        return;
                    }
                    Kind::CatchAll => st.fallbacks.push(Fallback {
                        node: child,
                        rest,
                        bound: st.stack.clone(),
                    }),
                    _ => {}
                }
            }
        } else {
            // literal children outrank pattern children
            if let Some(child) = self.literal_child(id, rest[0]) {
                self.walk(child, rest, st);
                if st.done() {
                    return;
                }
            }

            let demand = count_seps(rest, self.sep);
            for &child in &node.children[node.offset..] {
                let c = &self.nodes[child.idx()];
                if c.kind == Kind::CatchAll {
                    st.fallbacks.push(Fallback {
                        node: child,
                        rest,
                        bound: st.stack.clone(),
                    });
                    continue;
                }
                // subtrees that cannot consume the remaining segments are dead ends
                if demand > c.slash_max {
                    continue;
                }
                self.walk(child, rest, st);
                if st.done() {
                    return;
                }
            }
        }

        st.stack.truncate(depth);
    }

    /// Verifies the structural invariants of the trie; test support.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> Result<(), String> {
        self.check_node(ROOT, 0)
    }

    fn check_node(&self, id: NodeId, min_nop: u8) -> Result<(), String> {
        let node = &self.nodes[id.idx()];
        let name = String::from_utf8_lossy(&node.pattern).into_owned();

        if node.nop < min_nop {
            return Err(format!("nop decreased at '{}'", name));
        }
        if node.kind == Kind::CatchAll && !node.children.is_empty() {
            return Err(format!("catch-all '{}' has children", name));
        }

        let mut prev = None;
        for &child in &node.children[..node.offset] {
            let c = &self.nodes[child.idx()];
            if c.kind != Kind::Literal {
                return Err(format!("non-literal child before offset at '{}'", name));
            }
            let first = c.pattern[0];
            if prev.map_or(false, |p| p >= first) {
                return Err(format!("literal children unsorted at '{}'", name));
            }
            prev = Some(first);
        }

        // optionals, then one param or group, one star, one catch-all
        let mut rank = 0;
        for &child in &node.children[node.offset..] {
            let next = match self.nodes[child.idx()].kind {
                Kind::Literal => {
                    return Err(format!("literal child after offset at '{}'", name));
                }
                Kind::Optional => 1,
                Kind::Param { .. } | Kind::Group => 2,
                Kind::Star => 3,
                Kind::CatchAll => 4,
            };
            if next != 1 && next == rank {
                return Err(format!("duplicate pattern child kind at '{}'", name));
            }
            if next < rank {
                return Err(format!("pattern children out of order at '{}'", name));
            }
            rank = next;
        }

        for &child in &node.children {
            if self.nodes[child.idx()].parent != Some(id) {
                return Err(format!("broken parent link under '{}'", name));
            }
            self.check_node(child, node.nop)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.fprint(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

struct Fallback<'p> {
    node: NodeId,
    rest: &'p [u8],
    bound: Vec<Argument>,
}

struct Descent<'p, 'c> {
    ctx: &'c Context,
    hit: Option<NodeId>,
    err: Option<BoxError>,
    stack: Vec<Argument>,
    fallbacks: Vec<Fallback<'p>>,
}

impl Descent<'_, '_> {
    fn done(&self) -> bool {
        self.hit.is_some() || self.err.is_some()
    }
}

fn position(path: &[u8], sep: u8) -> Option<usize> {
    path.iter().position(|&b| b == sep)
}

fn count_seps(path: &[u8], sep: u8) -> u8 {
    let mut n: u16 = 0;
    for &b in path {
        if b == sep {
            n += 1;
            if n >= u16::from(SLASH_CAP) {
                return SLASH_CAP;
            }
        }
    }
    n as u8
}

fn sat_seps(a: u8, b: u8) -> u8 {
    let total = u16::from(a) + u16::from(b);
    total.min(u16::from(SLASH_CAP)) as u8
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    let max = a.len().min(b.len());
    let mut i = 0;
    while i < max && a[i] == b[i] {
        i += 1;
    }
    i
}
