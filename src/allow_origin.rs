use indexmap::IndexSet;

/// Configured `allow-origin` policy for a resource.
///
/// Covers the four shapes a resource configuration may carry: nothing at
/// all, the wildcard `*`, one origin, or an ordered set of origins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowOrigin {
    /// No origin policy configured. Evaluation never emits headers.
    #[default]
    Unset,
    /// Wildcard: any requesting origin is acceptable.
    Any,
    /// A single allowed origin, compared by exact string match.
    Exact(String),
    /// An ordered set of allowed origins, matched by exact membership.
    Set(IndexSet<String>),
}

/// Outcome of resolving a policy against a request's `Origin` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the wildcard `*`.
    Any,
    /// Emit the configured origin value.
    Exact(String),
    /// Emit the request's own origin.
    Mirror,
    /// Origin present but not allowed; nothing is emitted.
    Disallow,
    /// CORS does not apply to this request; nothing is emitted.
    Skip,
}

impl AllowOrigin {
    pub fn unset() -> Self {
        Self::Unset
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(values.into_iter().map(Into::into).collect())
    }

    /// Resolve this policy against the request's `Origin` header value.
    ///
    /// A missing `Origin` short-circuits to [`OriginDecision::Skip`]:
    /// same-origin and non-browser requests never receive CORS headers.
    /// Matching is exact: no case folding, no wildcard sub-matching
    /// inside a listed origin.
    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        match self {
            AllowOrigin::Unset => OriginDecision::Skip,
            AllowOrigin::Any => OriginDecision::Any,
            AllowOrigin::Exact(value) => {
                if value == origin {
                    OriginDecision::Exact(value.clone())
                } else {
                    OriginDecision::Disallow
                }
            }
            AllowOrigin::Set(values) => {
                if values.contains(origin) {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

impl From<&str> for AllowOrigin {
    fn from(value: &str) -> Self {
        AllowOrigin::Exact(value.to_owned())
    }
}

impl From<String> for AllowOrigin {
    fn from(value: String) -> Self {
        AllowOrigin::Exact(value)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::AllowOrigin;
    use indexmap::IndexSet;
    use serde::de::{Deserializer, SeqAccess, Visitor};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    impl Serialize for AllowOrigin {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                AllowOrigin::Unset => serializer.serialize_none(),
                AllowOrigin::Any => serializer.serialize_str("*"),
                AllowOrigin::Exact(value) => serializer.serialize_str(value),
                AllowOrigin::Set(values) => serializer.collect_seq(values),
            }
        }
    }

    impl<'de> Deserialize<'de> for AllowOrigin {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AllowOriginVisitor)
        }
    }

    struct AllowOriginVisitor;

    impl<'de> Visitor<'de> for AllowOriginVisitor {
        type Value = AllowOrigin;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("\"*\", an origin string, a sequence of origin strings, or null")
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            if value == "*" {
                Ok(AllowOrigin::Any)
            } else {
                Ok(AllowOrigin::Exact(value.to_owned()))
            }
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = IndexSet::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element::<String>()? {
                values.insert(value);
            }
            Ok(AllowOrigin::Set(values))
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(AllowOrigin::Unset)
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(AllowOrigin::Unset)
        }
    }
}

#[cfg(test)]
#[path = "allow_origin_test.rs"]
mod allow_origin_test;
