use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use tracing::debug;

/// Counts requests in flight and reports when the indicator should change.
///
/// Overlapping requests share one busy period: `notify(true)` fires when the
/// count leaves zero and `notify(false)` when it returns to zero. Clones share
/// the same count.
#[derive(Clone)]
pub struct RequestTracker {
    inner: Rc<Inner>,
}

struct Inner {
    in_flight: Cell<usize>,
    notify: Box<dyn Fn(bool)>,
}

impl RequestTracker {
    pub fn new(notify: impl Fn(bool) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                in_flight: Cell::new(0),
                notify: Box::new(notify),
            }),
        }
    }

    /// Record a request starting. The request ends when the guard is dropped.
    pub fn begin(&self) -> RequestGuard {
        let count = self.inner.in_flight.get() + 1;
        self.inner.in_flight.set(count);
        if count == 1 {
            debug!("Request tracker busy");
            (self.inner.notify)(true);
        }
        RequestGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Await `request` while it is counted as in flight.
    ///
    /// Dropping the returned future before it completes ends the request too,
    /// so a cancelled resource or an unmounted component never leaves the
    /// indicator showing.
    pub async fn track<F: Future>(&self, request: F) -> F::Output {
        let _guard = self.begin();
        request.await
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.get()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

impl fmt::Debug for RequestTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestTracker")
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

/// One in-flight request. Dropping it ends the request.
#[must_use = "the request ends as soon as the guard is dropped"]
pub struct RequestGuard {
    inner: Rc<Inner>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        let count = self.inner.in_flight.get().saturating_sub(1);
        self.inner.in_flight.set(count);
        if count == 0 {
            debug!("Request tracker idle");
            (self.inner.notify)(false);
        }
    }
}

/// Visibility carried by an indicator event's `detail.visible`.
///
/// A missing detail or a non-boolean field counts as hidden, so a malformed
/// event can stop the animation but never start it.
pub fn visibility_from_detail(visible: Option<bool>) -> bool {
    visible.unwrap_or(false)
}
