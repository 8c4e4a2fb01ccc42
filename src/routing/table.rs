// Ordered, first-match route table

use axum::http::Method;

use crate::routing::params::PathParams;
use crate::routing::pattern::{MatchOptions, ParamError, PathPattern, RouteError};

/// A single (method, pattern, handler) registration
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: H,
}

/// The entry selected for a request together with its bound placeholders
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    pub entry: &'a RouteEntry<H>,
    pub params: PathParams,
}

impl<H> RouteMatch<'_, H> {
    pub fn handler(&self) -> &H {
        &self.entry.handler
    }
}

/// Route entries scanned in registration order. Built once during startup
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
    options: MatchOptions,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteTable<H> {
    /// Creates an empty table with non-strict, case-insensitive matching
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            options: MatchOptions::default(),
        }
    }

    /// Replaces the matching options used by [`RouteTable::find`]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Appends an entry; later entries only win when earlier ones don't match
    pub fn route(mut self, method: Method, pattern: &str, handler: H) -> Result<Self, RouteError> {
        let pattern: PathPattern = PathPattern::parse(pattern)?;
        self.entries.push(RouteEntry {
            method,
            pattern,
            handler,
        });
        Ok(self)
    }

    pub fn get(self, pattern: &str, handler: H) -> Result<Self, RouteError> {
        self.route(Method::GET, pattern, handler)
    }

    pub fn post(self, pattern: &str, handler: H) -> Result<Self, RouteError> {
        self.route(Method::POST, pattern, handler)
    }

    pub fn put(self, pattern: &str, handler: H) -> Result<Self, RouteError> {
        self.route(Method::PUT, pattern, handler)
    }

    pub fn delete(self, pattern: &str, handler: H) -> Result<Self, RouteError> {
        self.route(Method::DELETE, pattern, handler)
    }

    /// Mounts every entry of `other` under `prefix`, keeping its order.
    /// The mounted entries follow the ones already registered here.
    pub fn nest(mut self, prefix: &str, other: RouteTable<H>) -> Result<Self, RouteError> {
        let prefix: PathPattern = PathPattern::parse(prefix)?;

        for entry in other.entries {
            self.entries.push(RouteEntry {
                method: entry.method,
                pattern: entry.pattern.nested_under(&prefix)?,
                handler: entry.handler,
            });
        }

        Ok(self)
    }

    /// Finds the first entry matching `method` and `path`.
    /// HEAD requests also accept GET entries. When the first fitting entry
    /// cannot decode its placeholders the lookup fails instead of moving on.
    pub fn find(&self, method: &Method, path: &str) -> Result<Option<RouteMatch<'_, H>>, ParamError> {
        let found: Option<(&RouteEntry<H>, Result<PathParams, ParamError>)> = self
            .entries
            .iter()
            .filter(|entry: &&RouteEntry<H>| accepts(&entry.method, method))
            .find_map(|entry: &RouteEntry<H>| {
                entry.pattern.matches(path, self.options).map(|params| (entry, params))
            });

        match found {
            Some((entry, params)) => Ok(Some(RouteMatch { entry, params: params? })),
            None => Ok(None),
        }
    }

    /// Methods registered for `path`, in registration order without repeats
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut methods: Vec<Method> = Vec::new();

        for entry in &self.entries {
            if !methods.contains(&entry.method) && entry.pattern.matches(path, self.options).is_some() {
                methods.push(entry.method.clone());
            }
        }

        methods
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn accepts(registered: &Method, requested: &Method) -> bool {
    registered == requested || (requested == Method::HEAD && registered == Method::GET)
}
