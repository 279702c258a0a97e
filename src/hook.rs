/// Observer notified after every mutation of a `UrlSearchParams` list.
///
/// A host (e.g. a URL object whose query mirrors the list) installs one to
/// re-derive its own state. It runs once per `append`, `delete` or `set`,
/// after the list change is committed.
///
/// Any `FnMut()` closure is a hook.
///
/// <https://url.spec.whatwg.org/#concept-urlsearchparams-update>
pub trait UpdateHook {
    fn update(&mut self);
}

/// The default hook: does nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHook;

impl UpdateHook for NoopHook {
    fn update(&mut self) {}
}

impl<F: FnMut()> UpdateHook for F {
    fn update(&mut self) {
        self();
    }
}
