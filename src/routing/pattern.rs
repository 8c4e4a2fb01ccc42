// Path pattern compilation and segment-by-segment matching

use std::fmt;

use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::routing::params::PathParams;

/// Errors raised while compiling a path pattern at registration time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern '{pattern}' has a placeholder without a name")]
    EmptyPlaceholder { pattern: String },

    #[error("pattern '{pattern}' has an invalid placeholder name ':{name}'")]
    InvalidPlaceholder { pattern: String, name: String },

    #[error("pattern '{pattern}' binds ':{name}' more than once")]
    DuplicatePlaceholder { pattern: String, name: String },
}

/// A bound segment that is not valid percent-encoded UTF-8
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode param ':{name}' from '{value}'")]
pub struct ParamError {
    pub name: String,
    pub value: String,
}

/// How literal segments and trailing slashes are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// When false, one trailing '/' on the request path is ignored
    pub strict: bool,
    /// When false, literal segments compare ASCII case-insensitively
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled pattern such as `/users/:userId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compiles a pattern, validating its placeholders
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let rest: &str = pattern
            .strip_prefix('/')
            .ok_or_else(|| RouteError::MissingLeadingSlash(pattern.to_string()))?;

        let mut segments: Vec<Segment> = Vec::new();

        // "/" is the empty pattern, and "/users/" registers the same as "/users"
        for part in rest.split('/').filter(|part: &&str| !part.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => {
                    return Err(RouteError::EmptyPlaceholder {
                        pattern: pattern.to_string(),
                    });
                }
                Some(name) => {
                    if !name.chars().all(|c: char| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(RouteError::InvalidPlaceholder {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }

                    let duplicate: bool = segments
                        .iter()
                        .any(|segment: &Segment| matches!(segment, Segment::Param(existing) if existing == name));

                    if duplicate {
                        return Err(RouteError::DuplicatePlaceholder {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }

                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern text as registered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns a copy of this pattern mounted under `prefix`
    pub fn nested_under(&self, prefix: &PathPattern) -> Result<Self, RouteError> {
        let mut segments: Vec<Segment> = prefix.segments.clone();

        for segment in &self.segments {
            if let Segment::Param(name) = segment {
                if segments.contains(segment) {
                    return Err(RouteError::DuplicatePlaceholder {
                        pattern: format!("{}{}", prefix.raw.trim_end_matches('/'), self.raw),
                        name: name.clone(),
                    });
                }
            }
            segments.push(segment.clone());
        }

        let raw: String = match (prefix.raw.trim_end_matches('/'), self.raw.as_str()) {
            ("", own) => own.to_string(),
            (base, "/") => base.to_string(),
            (base, own) => format!("{base}{own}"),
        };

        Ok(Self { raw, segments })
    }

    /// Matches a request path. `None` when the path does not fit the pattern,
    /// `Some(Err(_))` when it fits but a bound segment fails to decode.
    pub fn matches(&self, path: &str, options: MatchOptions) -> Option<Result<PathParams, ParamError>> {
        let segments: Vec<&str> = split_request_path(path, options.strict);

        if segments.len() != self.segments.len() {
            return None;
        }

        let mut bound: Vec<(&str, &str)> = Vec::new();

        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(literal) => {
                    let equal: bool = if options.case_sensitive {
                        literal == actual
                    } else {
                        literal.eq_ignore_ascii_case(actual)
                    };

                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    bound.push((name.as_str(), actual));
                }
            }
        }

        // Decoding only starts once every literal has matched
        Some(decode_params(bound))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn decode_params(bound: Vec<(&str, &str)>) -> Result<PathParams, ParamError> {
    let mut params: PathParams = PathParams::default();

    for (name, raw) in bound {
        let value: String = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| ParamError {
                name: name.to_string(),
                value: raw.to_string(),
            })?
            .into_owned();

        params.push(name.to_string(), value);
    }

    Ok(params)
}

/// Splits a request path into segments. Interior empty segments are kept so
/// that they fail to match placeholders.
fn split_request_path(path: &str, strict: bool) -> Vec<&str> {
    let path: &str = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() {
        return Vec::new();
    }

    let path: &str = if strict {
        path
    } else {
        path.strip_suffix('/').unwrap_or(path)
    };

    if path.is_empty() {
        return Vec::new();
    }

    path.split('/').collect()
}
