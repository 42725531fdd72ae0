use crate::allow_origin::OriginDecision;
use crate::context::RequestContext;
use crate::delta::ResponseHeaderDelta;
use crate::policy::{AccessControlPolicy, ValidationError};

/// Origin policy evaluator bound to one validated [`AccessControlPolicy`].
///
/// Evaluation is pure and synchronous: no I/O, no logging, no mutation.
/// A gate can be shared freely across request-handling threads or tasks.
pub struct OriginGate {
    policy: AccessControlPolicy,
}

impl OriginGate {
    pub fn new(policy: AccessControlPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &AccessControlPolicy {
        &self.policy
    }

    /// Decide which `access-control-allow-origin` value, if any, the
    /// response to `request` should carry.
    ///
    /// Returns `None` when no header must be emitted: the request carried
    /// no `Origin`, the policy is unset, or the origin is not allowed.
    /// The caller merges a returned delta into its response headers; on
    /// `None` the response map must stay untouched.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> Option<ResponseHeaderDelta> {
        match self.policy.allow_origin.resolve(request.origin) {
            OriginDecision::Any => Some(ResponseHeaderDelta::with_allow_origin("*")),
            OriginDecision::Exact(value) => Some(ResponseHeaderDelta::with_allow_origin(value)),
            OriginDecision::Mirror => request.origin.map(ResponseHeaderDelta::with_allow_origin),
            OriginDecision::Disallow | OriginDecision::Skip => None,
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
