/// Read-only view of the inbound request, as seen by the evaluator.
///
/// `origin` carries the raw value of the request's `Origin` header, or
/// `None` when the header was not sent (same-origin and non-browser
/// requests). Header extraction and name casing belong to the calling
/// pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub origin: Option<&'a str>,
}
