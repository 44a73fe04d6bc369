//! Fit computation for fixed-design-resolution content.
//!
//! Computes scale factor, offsets, and content-box dimensions from a fit
//! mode, a design resolution, and an observed container size. Pure
//! geometry — no side effects, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use screenfit::{FitMode, Frame};
//!
//! let fitted = Frame::new(5120.0, 1440.0)
//!     .mode(FitMode::Contain)
//!     .fit(1920.0, 1080.0)
//!     .unwrap();
//!
//! // Width constrains: 1920/5120 = 0.375. The 540px-tall footprint is
//! // centered vertically in the 1080px container.
//! assert_eq!(fitted.scale, 0.375);
//! assert_eq!(fitted.offset_left, 0.0);
//! assert_eq!(fitted.offset_top, 270.0);
//! ```

/// How to fit design-resolution content into a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitMode {
    /// Preserve aspect ratio so the content is fully visible inside the
    /// container. Leftover space on one axis becomes letterboxing.
    #[default]
    Contain,
    /// Preserve aspect ratio so the content fully covers the container.
    /// Overflow on one axis is clipped by the container.
    Cover,
}

/// Horizontal distribution of leftover container space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum XAlign {
    /// Pin the content to the left edge (`offset_left = 0`).
    Left,
    /// Center horizontally.
    #[default]
    Center,
    /// Double the centering offset. While that offset is non-negative this
    /// lands the content on the right edge; the doubling itself is the
    /// contract, not edge-snapping.
    Right,
}

/// Vertical distribution of leftover container space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum YAlign {
    /// Pin the content to the top edge (`offset_top = 0`).
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Double the centering offset. Same contract as [`XAlign::Right`].
    Bottom,
}

/// How the content's layout box relates to the computed scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sizing {
    /// Keep the layout box at design dimensions and report a visual
    /// `scale()` transform. Content authored in design coordinates needs
    /// no reflow.
    #[default]
    Scale,
    /// Size the layout box to the scaled footprint directly. No transform;
    /// the content lays itself out at the real size.
    Resize,
}

/// Width × height dimensions in px.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in px.
    pub width: f64,
    /// Height in px.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Backdrop color for the letterbox area behind the content.
///
/// sRGB with alpha. Carried on the [`Frame`] and through the [`Fitted`]
/// result so renderers can paint the leftover container area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Transparent black `[0, 0, 0, 0]`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color with explicit alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Whether the alpha channel is fully opaque.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Fit specification: a design resolution plus fit behavior.
///
/// Describes how content authored at a fixed design resolution is placed
/// inside a container of arbitrary size.
///
/// # Example
///
/// ```
/// use screenfit::{FitMode, Frame, Sizing, XAlign, YAlign};
///
/// let fitted = Frame::new(1920.0, 1080.0)
///     .mode(FitMode::Cover)
///     .x_align(XAlign::Left)
///     .y_align(YAlign::Top)
///     .sizing(Sizing::Resize)
///     .fit(800.0, 600.0)
///     .unwrap();
///
/// assert!(fitted.overflows());
/// assert_eq!(fitted.offset_left, 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The fixed canvas size the content was authored against.
    pub design: Size,
    /// Contain or cover.
    pub mode: FitMode,
    /// Horizontal alignment of leftover space.
    pub x_align: XAlign,
    /// Vertical alignment of leftover space.
    pub y_align: YAlign,
    /// Layout-box sizing strategy.
    pub sizing: Sizing,
    /// Letterbox backdrop color, if any.
    pub backdrop: Option<Rgba>,
}

impl Frame {
    /// Create a frame with the given design resolution and defaults:
    /// contain, centered on both axes, [`Sizing::Scale`], no backdrop.
    pub fn new(design_width: f64, design_height: f64) -> Self {
        Self {
            design: Size::new(design_width, design_height),
            mode: FitMode::Contain,
            x_align: XAlign::Center,
            y_align: YAlign::Center,
            sizing: Sizing::Scale,
            backdrop: None,
        }
    }

    /// Set the fit mode.
    pub fn mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the horizontal alignment.
    pub fn x_align(mut self, x_align: XAlign) -> Self {
        self.x_align = x_align;
        self
    }

    /// Set the vertical alignment.
    pub fn y_align(mut self, y_align: YAlign) -> Self {
        self.y_align = y_align;
        self
    }

    /// Set the layout-box sizing strategy.
    pub fn sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the letterbox backdrop color.
    pub fn backdrop(mut self, color: Rgba) -> Self {
        self.backdrop = Some(color);
        self
    }

    /// Compute the fit for an observed container size.
    ///
    /// Recomputes from scratch on every call; results are never patched
    /// incrementally. Identical inputs produce bit-identical output.
    ///
    /// A zero-area container is valid (observers report 0×0 mid-layout)
    /// and yields `scale = 0`.
    pub fn fit(&self, container_w: f64, container_h: f64) -> Result<Fitted, FitError> {
        if !valid_design(self.design.width) || !valid_design(self.design.height) {
            return Err(FitError::InvalidDesignSize);
        }
        if !valid_container(container_w) || !valid_container(container_h) {
            return Err(FitError::InvalidContainerSize);
        }

        // Contain scales to the smaller of the two axis ratios so both axes
        // fit; cover scales to the larger so both axes are covered.
        let ratio_w = container_w / self.design.width;
        let ratio_h = container_h / self.design.height;
        let scale = match self.mode {
            FitMode::Contain => ratio_w.min(ratio_h),
            FitMode::Cover => ratio_w.max(ratio_h),
        };

        // Physical footprint of the scaled content.
        let real = Size::new(scale * self.design.width, scale * self.design.height);

        // Layout box: design-sized under Sizing::Scale (the transform does
        // the shrinking), real-sized under Sizing::Resize.
        let content = match self.sizing {
            Sizing::Scale => self.design,
            Sizing::Resize => real,
        };

        // Center, then override per axis. Right/Bottom double the centering
        // offset — legacy behavior, kept as-is.
        let mut offset_left = 0.5 * (container_w - real.width);
        let mut offset_top = 0.5 * (container_h - real.height);
        match self.x_align {
            XAlign::Left => offset_left = 0.0,
            XAlign::Center => {}
            XAlign::Right => offset_left *= 2.0,
        }
        match self.y_align {
            YAlign::Top => offset_top = 0.0,
            YAlign::Center => {}
            YAlign::Bottom => offset_top *= 2.0,
        }

        Ok(Fitted {
            scale,
            offset_left,
            offset_top,
            content,
            real,
            container: Size::new(container_w, container_h),
            sizing: self.sizing,
            backdrop: self.backdrop,
        })
    }

    /// Compute the fit for a container [`Size`].
    pub fn fit_size(&self, container: Size) -> Result<Fitted, FitError> {
        self.fit(container.width, container.height)
    }

    /// Fit against the design resolution itself — the state before the
    /// first container measurement arrives. Yields `scale = 1` and zero
    /// offsets, a visually stable default.
    pub fn fit_initial(&self) -> Result<Fitted, FitError> {
        self.fit(self.design.width, self.design.height)
    }
}

/// Computed fit for one container measurement.
///
/// Everything a consumer needs to position the content box inside a
/// relatively-positioned container: the uniform scale, the top-left
/// offsets, and the layout-box dimensions. The footprint, container
/// measurement, and sizing strategy are retained for the predicates and
/// for renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fitted {
    /// Uniform scale factor from design space to container space.
    pub scale: f64,
    /// Left offset of the content box within the container, in px.
    pub offset_left: f64,
    /// Top offset of the content box within the container, in px.
    pub offset_top: f64,
    /// Layout-box dimensions assigned to the content (before any
    /// transform).
    pub content: Size,
    /// Physical footprint of the scaled content.
    pub real: Size,
    /// Container measurement this fit was computed against.
    pub container: Size,
    /// Sizing strategy the fit was computed under.
    pub sizing: Sizing,
    /// Letterbox backdrop color carried from the frame.
    pub backdrop: Option<Rgba>,
}

/// Tolerance for edge comparisons. Float noise from the ratio round-trip
/// (`container / design * design`) stays many orders of magnitude below
/// this at px scale.
const EDGE_EPSILON: f64 = 1e-6;

impl Fitted {
    /// Whether the container has leftover space on either axis.
    pub fn is_letterboxed(&self) -> bool {
        self.real.width < self.container.width - EDGE_EPSILON
            || self.real.height < self.container.height - EDGE_EPSILON
    }

    /// Whether the content spills past the container on either axis.
    pub fn overflows(&self) -> bool {
        self.real.width > self.container.width + EDGE_EPSILON
            || self.real.height > self.container.height + EDGE_EPSILON
    }

    /// Visual transform to apply, if any.
    ///
    /// `Some(scale)` under [`Sizing::Scale`]; `None` under
    /// [`Sizing::Resize`], where the layout box already has the real
    /// dimensions.
    pub fn transform_scale(&self) -> Option<f64> {
        match self.sizing {
            Sizing::Scale => Some(self.scale),
            Sizing::Resize => None,
        }
    }
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Design width or height is zero, negative, or non-finite.
    InvalidDesignSize,
    /// Container width or height is negative or non-finite.
    InvalidContainerSize,
}

fn valid_design(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn valid_container(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
