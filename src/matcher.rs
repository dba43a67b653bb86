use crate::context::Context;
use crate::error::{BoxError, InsertError};

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A parsed parameter value.
///
/// Untyped segments keep their raw text; typed matchers coerce it into one
/// of these variants (`:id uint 32` yields [`Value::U32`], for example).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => v.fmt(f),
            Value::U16(v) => v.fmt(f),
            Value::U32(v) => v.fmt(f),
            Value::U64(v) => v.fmt(f),
            Value::Usize(v) => v.fmt(f),
            Value::I8(v) => v.fmt(f),
            Value::I16(v) => v.fmt(f),
            Value::I32(v) => v.fmt(f),
            Value::I64(v) => v.fmt(f),
            Value::Isize(v) => v.fmt(f),
            Value::Str(v) => v.fmt(f),
        }
    }
}

/// The result of running a matcher against a candidate segment.
#[derive(Debug)]
pub enum Outcome {
    /// The segment does not satisfy the matcher; the trie backtracks.
    Reject,
    /// The segment matched. `None` means the raw text is the value.
    Accept(Option<Value>),
    /// Stop the whole lookup and surface the error to the caller.
    ///
    /// Use this for segments that identify the route but carry malformed
    /// content the handler should never see, e.g. a matcher that aborts with
    /// [`StatusError(400)`](crate::StatusError).
    Abort(BoxError),
}

/// A per-segment validator and value coercer.
///
/// Matchers are shared by reference across all trie nodes built from the
/// same class clause, so they must be immutable once registered.
pub trait Matcher: Send + Sync {
    /// Tests `text`, the candidate segment with the separator stripped.
    fn matches(&self, text: &str, ctx: &Context) -> Outcome;
}

type BuilderFn = fn(&str) -> Result<Arc<dyn Matcher>, String>;

type DynBuilder = Arc<dyn Fn(&str) -> Result<Arc<dyn Matcher>, String> + Send + Sync>;

static BUILTINS: Lazy<HashMap<&'static str, BuilderFn>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("string", build_string as BuilderFn);
    m.insert("alpha", build_alpha);
    m.insert("alnum", build_alnum);
    m.insert("hex", build_hex);
    m.insert("uint", build_uint);
    m.insert("int", build_int);
    m.insert("reg", build_regex);
    m.insert("regex", build_regex);
    m
});

static DEFAULT: Lazy<Matchers> = Lazy::new(Matchers::default);

/// The matcher catalog: a mapping from class names to matcher builders.
///
/// The default catalog carries the built-in classes:
///
/// | Class | Accepts | Argument |
/// |-------|---------|----------|
/// | `string` | any non-empty segment | max length, 0 = unbounded |
/// | `alpha` | `[A-Za-z]+` | max length |
/// | `alnum` | alphabetic first char, alphanumeric rest | max length |
/// | `hex` | `[0-9a-f]+` | max length |
/// | `uint` | decimal unsigned integer | bit size 8/16/32/64, absent = platform |
/// | `int` | decimal signed integer | bit size as above |
/// | `reg` / `regex` | regular expression; value = last capture group | the expression |
///
/// Additional classes can be registered before handing the catalog to a
/// [`Router`](crate::Router):
///
/// ```
/// use routier::{Context, MatcherFn, Matchers, Outcome, Router};
/// use std::sync::Arc;
///
/// let mut matchers = Matchers::default();
/// matchers.register("even", |_args| {
///     Ok(Arc::new(MatcherFn(|text: &str, _: &Context| {
///         match text.parse::<u64>() {
///             Ok(n) if n % 2 == 0 => Outcome::Accept(None),
///             _ => Outcome::Reject,
///         }
///     })))
/// });
///
/// let mut router: Router<&str> = Router::with_matchers(matchers);
/// router.get("/pairs/:n even", "pair").unwrap();
/// ```
#[derive(Clone)]
pub struct Matchers {
    classes: HashMap<String, DynBuilder>,
}

impl Default for Matchers {
    fn default() -> Self {
        let classes = BUILTINS
            .iter()
            .map(|(name, build)| {
                let build: DynBuilder = Arc::new(*build);
                (name.to_string(), build)
            })
            .collect();
        Matchers { classes }
    }
}

impl Matchers {
    /// The shared default catalog, built once per process.
    pub fn builtin() -> &'static Matchers {
        &DEFAULT
    }

    /// Registers a builder for `class`, replacing any previous one.
    ///
    /// The builder receives the argument string following the class name in
    /// the route (possibly empty) and returns the matcher, or a description
    /// of why the arguments are unusable.
    pub fn register<F>(&mut self, class: &str, build: F)
    where
        F: Fn(&str) -> Result<Arc<dyn Matcher>, String> + Send + Sync + 'static,
    {
        self.classes.insert(class.to_string(), Arc::new(build));
    }

    /// Builds a matcher for `class` with the given argument string.
    pub fn build(&self, class: &str, args: &str) -> Result<Arc<dyn Matcher>, InsertError> {
        let builder = self.classes.get(class).ok_or_else(|| InsertError::UnknownClass {
            class: class.to_string(),
        })?;

        builder(args).map_err(|detail| InsertError::InvalidMatcher {
            class: class.to_string(),
            detail,
        })
    }
}

impl fmt::Debug for Matchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        classes.sort_unstable();
        f.debug_struct("Matchers").field("classes", &classes).finish()
    }
}

/// Wraps a plain function or closure as a [`Matcher`].
///
/// ```
/// use routier::{Context, MatcherFn, Outcome};
///
/// let lowercase = MatcherFn(|text: &str, _: &Context| {
///     if text.bytes().all(|b| b.is_ascii_lowercase()) {
///         Outcome::Accept(None)
///     } else {
///         Outcome::Reject
///     }
/// });
/// ```
pub struct MatcherFn<F>(pub F);

impl<F> Matcher for MatcherFn<F>
where
    F: Fn(&str, &Context) -> Outcome + Send + Sync,
{
    fn matches(&self, text: &str, ctx: &Context) -> Outcome {
        (self.0)(text, ctx)
    }
}

fn max_len(args: &str) -> Result<usize, String> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(0);
    }
    args.parse::<usize>()
        .map_err(|_| format!("expected a max length, got {:?}", args))
}

fn bit_size(args: &str) -> Result<u8, String> {
    let args = args.trim();
    if args.is_empty() {
        return Ok(0);
    }
    match args.parse::<u8>() {
        Ok(n @ (8 | 16 | 32 | 64)) => Ok(n),
        _ => Err(format!("expected a bit size of 8, 16, 32 or 64, got {:?}", args)),
    }
}

fn build_string(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Str(max_len(args)?)))
}

fn build_alpha(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Alpha(max_len(args)?)))
}

fn build_alnum(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Alnum(max_len(args)?)))
}

fn build_hex(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Hex(max_len(args)?)))
}

fn build_uint(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Uint(bit_size(args)?)))
}

fn build_int(args: &str) -> Result<Arc<dyn Matcher>, String> {
    Ok(Arc::new(Int(bit_size(args)?)))
}

fn build_regex(args: &str) -> Result<Arc<dyn Matcher>, String> {
    let regex = Regex::new(args).map_err(|err| err.to_string())?;
    Ok(Arc::new(Reg(regex)))
}

// Max length, 0 = unbounded.
struct Str(usize);
struct Alpha(usize);
struct Alnum(usize);
struct Hex(usize);

// Bit size, 0 = platform width.
struct Uint(u8);
struct Int(u8);

struct Reg(Regex);

fn too_long(text: &str, max: usize) -> bool {
    max != 0 && text.len() > max
}

impl Matcher for Str {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        if text.is_empty() || too_long(text, self.0) {
            return Outcome::Reject;
        }
        Outcome::Accept(None)
    }
}

impl Matcher for Alpha {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        if text.is_empty() || too_long(text, self.0) {
            return Outcome::Reject;
        }
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Outcome::Reject;
        }
        Outcome::Accept(None)
    }
}

impl Matcher for Alnum {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        if text.is_empty() || too_long(text, self.0) {
            return Outcome::Reject;
        }
        let mut bytes = text.bytes();
        if !bytes.next().is_some_and(|b| b.is_ascii_alphabetic()) {
            return Outcome::Reject;
        }
        if !bytes.all(|b| b.is_ascii_alphanumeric()) {
            return Outcome::Reject;
        }
        Outcome::Accept(None)
    }
}

impl Matcher for Hex {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        if text.is_empty() || too_long(text, self.0) {
            return Outcome::Reject;
        }
        if !text.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Outcome::Reject;
        }
        Outcome::Accept(None)
    }
}

impl Matcher for Uint {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Outcome::Reject;
        }
        let n = match text.parse::<u64>() {
            Ok(n) => n,
            Err(_) => return Outcome::Reject,
        };

        let value = match self.0 {
            8 => u8::try_from(n).map(Value::U8),
            16 => u16::try_from(n).map(Value::U16),
            32 => u32::try_from(n).map(Value::U32),
            64 => Ok(Value::U64(n)),
            _ => usize::try_from(n).map(Value::Usize),
        };

        match value {
            Ok(value) => Outcome::Accept(Some(value)),
            Err(_) => Outcome::Reject,
        }
    }
}

impl Matcher for Int {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Outcome::Reject;
        }
        let n = match text.parse::<i64>() {
            Ok(n) => n,
            Err(_) => return Outcome::Reject,
        };

        let value = match self.0 {
            8 => i8::try_from(n).map(Value::I8),
            16 => i16::try_from(n).map(Value::I16),
            32 => i32::try_from(n).map(Value::I32),
            64 => Ok(Value::I64(n)),
            _ => isize::try_from(n).map(Value::Isize),
        };

        match value {
            Ok(value) => Outcome::Accept(Some(value)),
            Err(_) => Outcome::Reject,
        }
    }
}

impl Matcher for Reg {
    fn matches(&self, text: &str, _: &Context) -> Outcome {
        let caps = match self.0.captures(text) {
            Some(caps) => caps,
            None => return Outcome::Reject,
        };

        // the value is the last capture group, or the whole match when the
        // expression has no groups
        let value = if caps.len() > 1 {
            caps.get(caps.len() - 1).map(|m| m.as_str()).unwrap_or("")
        } else {
            caps.get(0).map(|m| m.as_str()).unwrap_or("")
        };

        Outcome::Accept(Some(Value::Str(value.to_string())))
    }
}
