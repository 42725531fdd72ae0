use origin_gate::{
    AccessControlPolicy, AllowOrigin, OriginGate, RequestContext, ResponseHeaderDelta,
};

#[derive(Default)]
pub struct GateBuilder {
    allow_origin: Option<AllowOrigin>,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origin(mut self, allow_origin: AllowOrigin) -> Self {
        self.allow_origin = Some(allow_origin);
        self
    }

    pub fn build(self) -> OriginGate {
        let policy = AccessControlPolicy::new(self.allow_origin.unwrap_or_default());
        OriginGate::new(policy).expect("valid access-control policy")
    }
}

#[derive(Default)]
pub struct EvaluationBuilder {
    origin: Option<String>,
}

impl EvaluationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, gate: &OriginGate) -> Option<ResponseHeaderDelta> {
        let ctx = RequestContext {
            origin: self.origin.as_deref(),
        };
        gate.evaluate(&ctx)
    }
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn request() -> EvaluationBuilder {
    EvaluationBuilder::new()
}
