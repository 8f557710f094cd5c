//! Address patterns for the simulated backend.

use std::collections::HashMap;

/// Captured `{name}` → concrete segment values for one matched address.
pub type RouteParams = HashMap<String, String>;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// An address pattern, parsed once at route registration.
///
/// Patterns are hierarchical paths whose `{name}` segments each match any
/// single concrete segment and capture it under `name`. Matching is
/// positional against the split address; no re-parsing happens per call.
#[derive(Clone, Debug)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                {
                    Some(name) => Segment::Param(name.to_string()),
                    None => Segment::Literal(segment.to_string()),
                }
            })
            .collect();
        Self { segments }
    }

    /// Structural match against a concrete address.
    ///
    /// Returns the captured parameters on a match, `None` otherwise. Every
    /// segment must line up; a missing or extra segment fails the match.
    pub fn matches(&self, address: &str) -> Option<RouteParams> {
        let concrete: Vec<&str> = split(address).collect();
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, value) in self.segments.iter().zip(&concrete) {
            match segment {
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*value).to_string());
                }
            }
        }
        Some(params)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
