pub mod constants;

mod allow_origin;
mod context;
mod delta;
mod gate;
mod policy;

pub use allow_origin::{AllowOrigin, OriginDecision};
pub use context::RequestContext;
pub use delta::{Headers, ResponseHeaderDelta};
pub use gate::OriginGate;
pub use policy::{AccessControlPolicy, ValidationError};
