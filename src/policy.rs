use crate::allow_origin::AllowOrigin;
use thiserror::Error;

/// Access-control configuration attached to a resource definition.
///
/// Built once when the resource is defined, validated by
/// [`OriginGate::new`](crate::OriginGate::new), then read on every
/// request without further mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct AccessControlPolicy {
    pub allow_origin: AllowOrigin,
}

impl AccessControlPolicy {
    pub fn new(allow_origin: AllowOrigin) -> Self {
        Self { allow_origin }
    }

    /// Reject configuration shapes that have no defined evaluation
    /// semantics. Evaluation itself assumes a validated policy and is
    /// total.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.allow_origin {
            AllowOrigin::Unset | AllowOrigin::Any => Ok(()),
            AllowOrigin::Exact(value) => {
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyOriginValue);
                }
                if value == "*" {
                    return Err(ValidationError::ExactOriginCannotBeWildcard);
                }
                Ok(())
            }
            AllowOrigin::Set(values) => {
                if values.is_empty() {
                    return Err(ValidationError::EmptyOriginSet);
                }
                for value in values {
                    if value.trim().is_empty() {
                        return Err(ValidationError::EmptyOriginValue);
                    }
                    if value == "*" {
                        return Err(ValidationError::OriginSetCannotContainWildcard);
                    }
                }
                Ok(())
            }
        }
    }
}

/// Errors raised when a policy is rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow-origin set must contain at least one origin")]
    EmptyOriginSet,
    #[error("allow-origin entries must be non-empty strings")]
    EmptyOriginValue,
    #[error("a single allow-origin of \"*\" must use the wildcard policy, not an origin string")]
    ExactOriginCannotBeWildcard,
    #[error("allow-origin sets cannot contain \"*\"; use the wildcard policy instead")]
    OriginSetCannotContainWildcard,
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
