//! Owned fit state: container measurements in, fit results out.
//!
//! [`FitTracker`] sits between a size observer and whatever applies the
//! resulting style. It owns the current [`Frame`], the last observed
//! container size, and the last computed [`Fitted`] — the current result
//! is always explicit state, never recovered from applied output. Every
//! measurement or configuration change recomputes from scratch and
//! notifies subscribers; the most recent measurement wins.
//!
//! Single-threaded and synchronous: each update completes atomically
//! before the call returns, so there is nothing to cancel and no ordering
//! concern beyond call order.
//!
//! # Example
//!
//! ```
//! use screenfit::{FitMode, FitTracker, Frame};
//!
//! let mut tracker = FitTracker::new(Frame::new(5120.0, 1440.0)).unwrap();
//! // Before the first measurement: scale 1, no offsets.
//! assert_eq!(tracker.fitted().scale, 1.0);
//!
//! tracker.resize(1920.0, 1080.0).unwrap();
//! assert_eq!(tracker.fitted().scale, 0.375);
//!
//! tracker.set_mode(FitMode::Cover).unwrap();
//! assert_eq!(tracker.fitted().scale, 0.75);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::fit::{FitError, FitMode, Fitted, Frame, Size, Sizing, XAlign, YAlign};

/// Handle returned by [`FitTracker::subscribe`].
///
/// Pass to [`FitTracker::unsubscribe`] to stop deliveries. Handles are
/// unique for the lifetime of the tracker; a handle is never reissued for
/// a different subscriber.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(usize);

type Listener = Box<dyn FnMut(&Fitted)>;

/// Owns the fit configuration, the latest container measurement, and the
/// latest computed result.
pub struct FitTracker {
    frame: Frame,
    /// Last observer measurement. `None` until the first report arrives;
    /// the design resolution stands in until then.
    container: Option<Size>,
    fitted: Fitted,
    /// Subscriber slots. `None` marks an unsubscribed handle; slots are
    /// not reused while the tracker lives.
    listeners: Vec<Option<Listener>>,
}

impl FitTracker {
    /// Create a tracker in the pre-measurement state: scale 1, zero
    /// offsets, container assumed at design resolution.
    pub fn new(frame: Frame) -> Result<Self, FitError> {
        let fitted = frame.fit_initial()?;
        Ok(Self {
            frame,
            container: None,
            fitted,
            listeners: Vec::new(),
        })
    }

    /// The most recently computed fit.
    pub fn fitted(&self) -> &Fitted {
        &self.fitted
    }

    /// The current fit specification.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The last observed container size, or `None` before the first
    /// measurement.
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// Feed a new container measurement. Recomputes and notifies.
    ///
    /// On error the previous measurement and result are kept.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<&Fitted, FitError> {
        let fitted = self.frame.fit(width, height)?;
        self.container = Some(Size::new(width, height));
        self.publish(fitted);
        Ok(&self.fitted)
    }

    /// Replace the whole fit specification. Recomputes against the last
    /// measurement (or the new design resolution when none arrived yet)
    /// and notifies.
    ///
    /// On error the previous specification and result are kept.
    pub fn set_frame(&mut self, frame: Frame) -> Result<&Fitted, FitError> {
        let fitted = match self.container {
            Some(c) => frame.fit(c.width, c.height)?,
            None => frame.fit_initial()?,
        };
        self.frame = frame;
        self.publish(fitted);
        Ok(&self.fitted)
    }

    /// Change the fit mode.
    pub fn set_mode(&mut self, mode: FitMode) -> Result<&Fitted, FitError> {
        self.set_frame(Frame { mode, ..self.frame })
    }

    /// Change the horizontal alignment.
    pub fn set_x_align(&mut self, x_align: XAlign) -> Result<&Fitted, FitError> {
        self.set_frame(Frame { x_align, ..self.frame })
    }

    /// Change the vertical alignment.
    pub fn set_y_align(&mut self, y_align: YAlign) -> Result<&Fitted, FitError> {
        self.set_frame(Frame { y_align, ..self.frame })
    }

    /// Change the layout-box sizing strategy.
    pub fn set_sizing(&mut self, sizing: Sizing) -> Result<&Fitted, FitError> {
        self.set_frame(Frame { sizing, ..self.frame })
    }

    /// Change the design resolution.
    pub fn set_design(&mut self, width: f64, height: f64) -> Result<&Fitted, FitError> {
        self.set_frame(Frame {
            design: Size::new(width, height),
            ..self.frame
        })
    }

    /// Register a callback invoked with each freshly computed [`Fitted`].
    ///
    /// Subscribers are invoked in subscription order. The callback is not
    /// invoked for the current state; feed a measurement or read
    /// [`fitted()`](Self::fitted) for that.
    pub fn subscribe(&mut self, listener: impl FnMut(&Fitted) + 'static) -> Subscription {
        self.listeners.push(Some(Box::new(listener)));
        Subscription(self.listeners.len() - 1)
    }

    /// Remove a subscriber. No further deliveries happen after this
    /// returns. Unknown or already-removed handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if let Some(slot) = self.listeners.get_mut(subscription.0) {
            *slot = None;
        }
    }

    fn publish(&mut self, fitted: Fitted) {
        self.fitted = fitted;
        for slot in &mut self.listeners {
            if let Some(listener) = slot {
                listener(&self.fitted);
            }
        }
    }
}

impl core::fmt::Debug for FitTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FitTracker")
            .field("frame", &self.frame)
            .field("container", &self.container)
            .field("fitted", &self.fitted)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
