use crate::matcher::Value;

use std::collections::HashMap;
use std::fmt;
use std::slice;

/// A single bound route parameter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Argument {
    /// The parameter name (`**` for the catch-all).
    pub name: String,
    /// The matched text, separator excluded.
    pub raw: String,
    /// The matcher's parsed form; `None` means the raw text is the value.
    pub value: Option<Value>,
}

impl Argument {
    pub fn new(name: &str, raw: &str) -> Argument {
        Argument {
            name: name.to_string(),
            raw: raw.to_string(),
            value: None,
        }
    }

    pub(crate) fn typed(name: &str, raw: &str, value: Option<Value>) -> Argument {
        Argument {
            name: name.to_string(),
            raw: raw.to_string(),
            value,
        }
    }

    /// The parsed value, falling back to the raw text.
    pub fn parsed(&self) -> Value {
        match &self.value {
            Some(value) => value.clone(),
            None => Value::Str(self.raw.clone()),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.raw)
    }
}

/// The parameters bound by a route match, in left-to-right route order.
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut trie = routier::Trie::new();
/// # trie.insert("/users/:id uint 64", true)?;
/// let matched = trie.at("/users/978")?;
///
/// // by name
/// assert_eq!(matched.params.get("id"), Some("978"));
/// assert_eq!(matched.params.value("id"), Some(routier::Value::U64(978)));
///
/// // or in route order
/// for arg in matched.params.iter() {
///     println!("{}: {}", arg.name, arg.raw);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params(Vec<Argument>);

impl Params {
    pub(crate) fn from_stack(stack: Vec<Argument>) -> Params {
        Params(stack)
    }

    /// Returns the raw text of the first parameter with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.raw.as_str())
    }

    /// Returns the parsed value of the first parameter with the given name,
    /// falling back to the raw text for untyped parameters.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.0
            .iter()
            .find(|arg| arg.name == name)
            .map(Argument::parsed)
    }

    /// Collects the raw text of every parameter, keyed by name.
    pub fn raws(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|arg| (arg.name.clone(), arg.raw.clone()))
            .collect()
    }

    /// Collects the parsed value of every parameter, keyed by name.
    pub fn values(&self) -> HashMap<String, Value> {
        self.0
            .iter()
            .map(|arg| (arg.name.clone(), arg.parsed()))
            .collect()
    }

    /// Appends every parameter to a form-urlencoded serializer.
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut trie = routier::Trie::new();
    /// # trie.insert("/repos/:owner/:repo", ())?;
    /// let matched = trie.at("/repos/octo/cat")?;
    ///
    /// let mut form = url::form_urlencoded::Serializer::new(String::new());
    /// matched.params.append_to(&mut form);
    /// assert_eq!(form.finish(), "owner=octo&repo=cat");
    /// # Ok(())
    /// # }
    /// ```
    pub fn append_to<T: url::form_urlencoded::Target>(
        &self,
        serializer: &mut url::form_urlencoded::Serializer<'_, T>,
    ) {
        for arg in &self.0 {
            serializer.append_pair(&arg.name, &arg.raw);
        }
    }

    /// Returns an iterator over the bound parameters.
    pub fn iter(&self) -> slice::Iter<'_, Argument> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Index<usize> for Params {
    type Output = Argument;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Argument;
    type IntoIter = slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Params {
        Params(vec![
            Argument::new("owner", "octo"),
            Argument::typed("id", "42", Some(Value::U32(42))),
            Argument::new("owner", "second"),
        ])
    }

    #[test]
    fn first_match_wins() {
        let params = sample();
        assert_eq!(params.get("owner"), Some("octo"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn parsed_falls_back_to_raw() {
        let params = sample();
        assert_eq!(params.value("id"), Some(Value::U32(42)));
        assert_eq!(params.value("owner"), Some(Value::Str("octo".to_string())));
    }

    #[test]
    fn bulk_maps() {
        let params = sample();
        let raws = params.raws();
        assert_eq!(raws.len(), 2);
        assert_eq!(raws["id"], "42");

        let values = params.values();
        assert_eq!(values["id"], Value::U32(42));
    }

    #[test]
    fn order_is_preserved() {
        let params = sample();
        let names: Vec<&str> = params.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["owner", "id", "owner"]);
        assert_eq!(params[1].raw, "42");
    }

    #[test]
    fn form_encoding() {
        let params = sample();
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        params.append_to(&mut form);
        assert_eq!(form.finish(), "owner=octo&id=42&owner=second");
    }
}
