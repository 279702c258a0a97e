use crate::compat::{Box, String, ToString, Vec};
use crate::error::{Error, Method, Result};
use crate::hook::{NoopHook, UpdateHook};
use crate::types::Pair;
use crate::urlencoded::{self, ParseOptions};

/// Constructor input for [`UrlSearchParams::with_init`]
#[derive(Debug, Clone, Copy, Default)]
pub enum Init<'a> {
    #[default]
    Empty,
    /// A query string to parse (a leading `?` is data, not stripped)
    Text(&'a str),
    /// Another list to deep-copy
    Params(&'a UrlSearchParams),
}

impl<'a> From<&'a str> for Init<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a UrlSearchParams> for Init<'a> {
    fn from(params: &'a UrlSearchParams) -> Self {
        Self::Params(params)
    }
}

/// Ordered list of name/value pairs backed by the
/// `application/x-www-form-urlencoded` codec.
///
/// Duplicate names are allowed and insertion order is preserved.
///
/// <https://url.spec.whatwg.org/#interface-urlsearchparams>
pub struct UrlSearchParams {
    params: Vec<Pair>,
    hook: Box<dyn UpdateHook>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self::from_pairs(Vec::new())
    }

    fn from_pairs(params: Vec<Pair>) -> Self {
        Self {
            params,
            hook: Box::new(NoopHook),
        }
    }

    /// Parse a query string as UTF-8 form-urlencoded data
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return Self::new();
        }
        Self::from_pairs(urlencoded::parse(query.as_bytes()))
    }

    /// Parse with explicit parser options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] if the options request a
    /// non UTF-8 encoding or the `_charset_` flag trips.
    pub fn parse_with(query: &str, options: ParseOptions<'_>) -> Result<Self> {
        urlencoded::parse_with(query.as_bytes(), options).map(Self::from_pairs)
    }

    pub fn with_init(init: Init<'_>) -> Self {
        match init {
            Init::Empty => Self::new(),
            Init::Text(text) => Self::parse(text),
            Init::Params(other) => Self::from_pairs(other.params.clone()),
        }
    }

    /// Install the hook that runs after every mutation
    #[must_use]
    pub fn with_update_hook(mut self, hook: impl UpdateHook + 'static) -> Self {
        self.set_update_hook(hook);
        self
    }

    pub fn set_update_hook(&mut self, hook: impl UpdateHook + 'static) {
        self.hook = Box::new(hook);
    }

    /// Restore the no-op hook
    pub fn clear_update_hook(&mut self) {
        self.hook = Box::new(NoopHook);
    }

    fn update(&mut self) {
        self.hook.update();
    }

    /// Append a pair at the end, keeping existing pairs with the same name.
    pub fn append(&mut self, name: &str, value: &str) {
        self.params.push(Pair::new(name, value));
        self.update();
    }

    /// Remove every pair named `name`. Survivors keep their order.
    pub fn delete(&mut self, name: &str) {
        self.params.retain(|pair| pair.name != name);
        self.update();
    }

    /// Get the first value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|pair| pair.name == name)
            .map(|pair| pair.value.as_str())
    }

    /// Get all values for a name, in list order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|pair| pair.name == name)
            .map(|pair| pair.value.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.params.iter().any(|pair| pair.name == name)
    }

    /// Set `name` to a single value.
    ///
    /// The first existing pair with that name takes the value in place and
    /// later ones are removed; with no existing pair, one is appended.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut found_first = false;
        self.params.retain_mut(|pair| {
            if pair.name != name {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            pair.value = value.to_string();
            true
        });
        if !found_first {
            self.params.push(Pair::new(name, value));
        }
        self.update();
    }

    /// [`append`](Self::append) for callers whose arguments may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArgument`] if either argument is `None`; the list is
    /// left untouched and the hook does not run.
    pub fn try_append(&mut self, name: Option<&str>, value: Option<&str>) -> Result<()> {
        let (name, value) = require_both(name, value, Method::Append)?;
        self.append(name, value);
        Ok(())
    }

    /// # Errors
    ///
    /// [`Error::MissingArgument`] if `name` is `None`.
    pub fn try_delete(&mut self, name: Option<&str>) -> Result<()> {
        self.delete(require(name, Method::Delete)?);
        Ok(())
    }

    /// # Errors
    ///
    /// [`Error::MissingArgument`] if `name` is `None`.
    pub fn try_get(&self, name: Option<&str>) -> Result<Option<&str>> {
        Ok(self.get(require(name, Method::Get)?))
    }

    /// # Errors
    ///
    /// [`Error::MissingArgument`] if `name` is `None`.
    pub fn try_get_all(&self, name: Option<&str>) -> Result<Vec<&str>> {
        Ok(self.get_all(require(name, Method::GetAll)?))
    }

    /// # Errors
    ///
    /// [`Error::MissingArgument`] if either argument is `None`.
    pub fn try_set(&mut self, name: Option<&str>, value: Option<&str>) -> Result<()> {
        let (name, value) = require_both(name, value, Method::Set)?;
        self.set(name, value);
        Ok(())
    }

    /// # Errors
    ///
    /// [`Error::MissingArgument`] if `name` is `None`.
    pub fn try_has(&self, name: Option<&str>) -> Result<bool> {
        Ok(self.has(require(name, Method::Has)?))
    }

    /// Number of pairs (WHATWG `size`).
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.params
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.params.iter(),
        }
    }

    /// Iterate over all name/value pairs (alias for `iter`, matches WHATWG API).
    pub fn entries(&self) -> Iter<'_> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|pair| pair.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|pair| pair.value.as_str())
    }

    /// Serialize as `name=value&...` without a leading `?`.
    /// JavaScript `URLSearchParams.toString()` compatible.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        urlencoded::serialize(&self.params)
    }
}

fn require(arg: Option<&str>, method: Method) -> Result<&str> {
    arg.ok_or(Error::MissingArgument(method))
}

fn require_both<'a>(
    name: Option<&'a str>,
    value: Option<&'a str>,
    method: Method,
) -> Result<(&'a str, &'a str)> {
    match (name, value) {
        (Some(name), Some(value)) => Ok((name, value)),
        _ => Err(Error::MissingArgument(method)),
    }
}

/// Iterator over `(name, value)` pairs of a [`UrlSearchParams`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Pair>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|pair| (pair.name.as_str(), pair.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|pair| (pair.name.as_str(), pair.value.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a UrlSearchParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for UrlSearchParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-copies the pair list. The update hook belongs to the original's
/// host and is not carried over.
impl Clone for UrlSearchParams {
    fn clone(&self) -> Self {
        Self::from_pairs(self.params.clone())
    }
}

impl core::fmt::Debug for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UrlSearchParams")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl PartialEq for UrlSearchParams {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for UrlSearchParams {}

impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl From<&str> for UrlSearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for UrlSearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Init<'_>> for UrlSearchParams {
    fn from(init: Init<'_>) -> Self {
        Self::with_init(init)
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::from_pairs(
            iter.into_iter()
                .map(|(name, value)| Pair::new(name.as_ref(), value.as_ref()))
                .collect(),
        )
    }
}

/// Appends each pair, running the update hook once per pair.
impl<N: AsRef<str>, V: AsRef<str>> Extend<(N, V)> for UrlSearchParams {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name.as_ref(), value.as_ref());
        }
    }
}
