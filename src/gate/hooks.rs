/// Three-phase observer for a sign-in or sign-up call.
///
/// Ordering guarantee: `on_request` fires before the request is issued;
/// `on_response` fires exactly once after the service answers, success
/// or failure; `on_success` fires only on success, after `on_response`.
/// Pages use these to drive a loading indicator without the gate knowing
/// anything about rendering.
pub trait RequestHooks {
    fn on_request(&mut self) {}
    fn on_response(&mut self) {}
    fn on_success(&mut self) {}
}

/// Hooks that do nothing
#[derive(Debug, Default)]
pub struct NoopHooks;

impl RequestHooks for NoopHooks {}
