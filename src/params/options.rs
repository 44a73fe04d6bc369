//! Parsed screen parameters: the query-string representation of a frame.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::fit::{FitError, FitMode, Frame, Rgba, Sizing, XAlign, YAlign};

/// Parsed screen configuration.
///
/// Produced by [`crate::params::parse()`], consumed by
/// [`to_frame()`](Self::to_frame).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct ScreenParams {
    /// Design width (`w`, `width`).
    pub w: Option<u32>,
    /// Design height (`h`, `height`).
    pub h: Option<u32>,
    /// Fit mode (`mode`).
    pub mode: Option<FitMode>,
    /// Horizontal alignment (`x`, `xalign`).
    pub x_align: Option<XAlign>,
    /// Vertical alignment (`y`, `yalign`).
    pub y_align: Option<YAlign>,
    /// Whether the content box is visually scaled rather than resized
    /// (`scale`).
    pub scale: Option<bool>,
    /// Letterbox backdrop color (`bg`, `bgcolor`).
    pub bg: Option<Rgba>,
    /// Non-layout parameters preserved for downstream consumers.
    pub extras: BTreeMap<String, String>,
}

impl Default for ScreenParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenParams {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self {
            w: None,
            h: None,
            mode: None,
            x_align: None,
            y_align: None,
            scale: None,
            bg: None,
            extras: BTreeMap::new(),
        }
    }

    /// Access non-layout parameters preserved during parsing.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    /// Build a [`Frame`] from these parameters.
    ///
    /// Unset fields take the component defaults: contain, centered on both
    /// axes, [`Sizing::Scale`], no backdrop. The design resolution has no
    /// default; missing or zero dimensions are an
    /// [`FitError::InvalidDesignSize`].
    pub fn to_frame(&self) -> Result<Frame, FitError> {
        let (Some(w), Some(h)) = (self.w, self.h) else {
            return Err(FitError::InvalidDesignSize);
        };
        if w == 0 || h == 0 {
            return Err(FitError::InvalidDesignSize);
        }

        let mut frame = Frame::new(f64::from(w), f64::from(h));
        if let Some(mode) = self.mode {
            frame = frame.mode(mode);
        }
        if let Some(x_align) = self.x_align {
            frame = frame.x_align(x_align);
        }
        if let Some(y_align) = self.y_align {
            frame = frame.y_align(y_align);
        }
        if let Some(scale) = self.scale {
            frame = frame.sizing(if scale { Sizing::Scale } else { Sizing::Resize });
        }
        if let Some(bg) = self.bg {
            frame = frame.backdrop(bg);
        }
        Ok(frame)
    }
}
