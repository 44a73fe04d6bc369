//! CSS and SVG rendering of fit results.
//!
//! Translates a [`Fitted`] into the style declarations the consumer
//! applies: an absolutely positioned content box inside a
//! relatively-positioned container, transform origin anchored top-left so
//! the scale applies without recentering. Also renders an annotated SVG
//! diagram of container, content footprint, and letterbox/overflow areas
//! for diagnostics.
//!
//! # Example
//!
//! ```
//! use screenfit::{Frame, style};
//!
//! let fitted = Frame::new(5120.0, 1440.0).fit(1920.0, 1080.0).unwrap();
//! let css = style::render_content_css(&fitted);
//! assert!(css.contains("transform: scale(0.375);"));
//! assert!(css.contains("top: 270px;"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::fit::{Fitted, Rgba};

/// Maximum diagram width for the SVG rendering, in px.
const MAX_VIEW_W: f64 = 480.0;
/// Maximum diagram height for the SVG rendering, in px.
const MAX_VIEW_H: f64 = 320.0;
/// Margin around the diagram.
const MARGIN: f64 = 40.0;
/// Height of one annotation text line.
const LABEL_H: f64 = 22.0;

/// Render the content-box declarations for a fit result.
///
/// The box is positioned absolutely within its container; the transform
/// origin stays at the top-left corner so the `scale()` transform (present
/// under [`Sizing::Scale`](crate::Sizing::Scale)) needs no recentering.
pub fn render_content_css(fitted: &Fitted) -> String {
    let mut css = String::new();
    css.push_str("position: absolute;\n");
    css.push_str("transform-origin: top left;\n");
    if let Some(scale) = fitted.transform_scale() {
        css.push_str(&format!("transform: scale({});\n", fmt(scale, 6)));
    }
    css.push_str(&format!("top: {}px;\n", fmt(fitted.offset_top, 3)));
    css.push_str(&format!("left: {}px;\n", fmt(fitted.offset_left, 3)));
    css.push_str(&format!("width: {}px;\n", fmt(fitted.content.width, 3)));
    css.push_str(&format!("height: {}px;\n", fmt(fitted.content.height, 3)));
    css
}

/// Render the declarations for the containing element: the positioning
/// context for the content box, clipping overflow, painting the backdrop
/// behind any letterboxing.
pub fn render_container_css(fitted: &Fitted) -> String {
    let mut css = String::new();
    css.push_str("position: relative;\n");
    css.push_str("overflow: hidden;\n");
    if let Some(bg) = fitted.backdrop {
        css.push_str(&format!("background: {};\n", css_color(bg)));
    }
    css
}

/// Format a color as a CSS hex literal. Alpha is omitted when opaque.
pub fn css_color(color: Rgba) -> String {
    if color.is_opaque() {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r, color.g, color.b, color.a
        )
    }
}

/// Render an annotated SVG diagram of a fit result.
///
/// Shows the container outline, the scaled content footprint (which may
/// extend past the container under cover mode), and a summary annotation.
/// Returns a complete SVG document as a string.
pub fn render_fit_svg(fitted: &Fitted) -> String {
    // Bounds of everything drawn: the container plus the footprint, which
    // overflows it under cover mode.
    let x0 = fitted.offset_left.min(0.0);
    let y0 = fitted.offset_top.min(0.0);
    let x1 = (fitted.offset_left + fitted.real.width).max(fitted.container.width);
    let y1 = (fitted.offset_top + fitted.real.height).max(fitted.container.height);
    let bounds_w = (x1 - x0).max(1.0);
    let bounds_h = (y1 - y0).max(1.0);
    let k = (MAX_VIEW_W / bounds_w).min(MAX_VIEW_H / bounds_h);

    let view_w = bounds_w * k + 2.0 * MARGIN;
    let view_h = bounds_h * k + 2.0 * MARGIN + 2.0 * LABEL_H;
    let map_x = |x: f64| MARGIN + (x - x0) * k;
    let map_y = |y: f64| MARGIN + LABEL_H + (y - y0) * k;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" font-family=\"monospace\" font-size=\"12\">\n",
        w = fmt(view_w, 0),
        h = fmt(view_h, 0),
    ));

    // Container: backdrop fill behind everything, solid outline.
    let container_fill = match fitted.backdrop {
        Some(bg) => css_color(bg),
        None => String::from("#ffffff"),
    };
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" \
         stroke=\"#333\" stroke-width=\"1.5\"/>\n",
        fmt(map_x(0.0), 1),
        fmt(map_y(0.0), 1),
        fmt(fitted.container.width * k, 1),
        fmt(fitted.container.height * k, 1),
        container_fill,
    ));

    // Content footprint: translucent so the overlap with the container
    // stays readable.
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#4a90d9\" \
         fill-opacity=\"0.35\" stroke=\"#1c5d99\" stroke-width=\"1\" \
         stroke-dasharray=\"4 3\"/>\n",
        fmt(map_x(fitted.offset_left), 1),
        fmt(map_y(fitted.offset_top), 1),
        fmt(fitted.real.width * k, 1),
        fmt(fitted.real.height * k, 1),
    ));

    // Annotations above and below the diagram.
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\">Container  {}×{}</text>\n",
        fmt(MARGIN, 0),
        fmt(MARGIN + LABEL_H - 8.0, 1),
        fmt(fitted.container.width, 3),
        fmt(fitted.container.height, 3),
    ));
    let relation = if fitted.overflows() {
        "overflows"
    } else if fitted.is_letterboxed() {
        "letterboxed"
    } else {
        "exact"
    };
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\">Content  {}×{} at ({}, {}), scale {} ({})</text>\n",
        fmt(MARGIN, 0),
        fmt(view_h - 10.0, 1),
        fmt(fitted.real.width, 3),
        fmt(fitted.real.height, 3),
        fmt(fitted.offset_left, 3),
        fmt(fitted.offset_top, 3),
        fmt(fitted.scale, 6),
        relation,
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Format a value with up to `decimals` fractional digits, trailing zeros
/// trimmed. Rounds away float noise first so `269.9999999999` prints as
/// `270`.
fn fmt(v: f64, decimals: u32) -> String {
    let pow = num_traits::Float::powi(10.0_f64, decimals as i32);
    let rounded = num_traits::Float::round(v * pow) / pow;
    let mut s = format!("{rounded:.prec$}", prec = decimals as usize);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = String::from("0");
    }
    s
}
