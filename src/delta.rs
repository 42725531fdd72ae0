use crate::constants::header;
use indexmap::IndexMap;

/// Response header mapping used by the calling pipeline.
pub type Headers = IndexMap<String, String>;

/// Header additions produced by one policy evaluation.
///
/// Constructed fresh per request and merged into that request's response
/// headers; an instance never outlives the request it was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaderDelta {
    headers: Headers,
}

impl ResponseHeaderDelta {
    pub(crate) fn with_allow_origin<S: Into<String>>(value: S) -> Self {
        let mut headers = Headers::with_capacity(1);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
            value.into(),
        );
        Self { headers }
    }

    /// Look up an entry by header name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Merge the delta into an outgoing response header map.
    ///
    /// Entries land under their canonical lowercase names; if the target
    /// already holds the same header under a different ASCII case, that
    /// entry's value is replaced in place instead of inserting a
    /// duplicate.
    pub fn merge_into(&self, headers: &mut Headers) {
        for (name, value) in &self.headers {
            if let Some((_, slot)) = headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                *slot = value.clone();
            } else {
                headers.insert(name.clone(), value.clone());
            }
        }
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "delta_test.rs"]
mod delta_test;
