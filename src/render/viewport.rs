//! Zoom and pan for inspecting a label preview.
//!
//! A viewport is a zoom factor plus the canvas point it is centred on. It maps
//! to an SVG `viewBox` that always stays inside the canvas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::{CANVAS_HEIGHT, CANVAS_WIDTH, CENTER_X, CENTER_Y};

/// Visible region of the canvas, in label units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// The whole canvas.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            super::svg::fmt_num(self.x),
            super::svg::fmt_num(self.y),
            super::svg::fmt_num(self.width),
            super::svg::fmt_num(self.height)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawViewport")]
pub struct Viewport {
    zoom: f64,
    center_x: f64,
    center_y: f64,
}

/// Wire form of a [`Viewport`]; deserialized values go through [`Viewport::new`].
#[derive(Deserialize)]
struct RawViewport {
    zoom: f64,
    center_x: f64,
    center_y: f64,
}

impl From<RawViewport> for Viewport {
    fn from(raw: RawViewport) -> Self {
        Self::new(raw.zoom, raw.center_x, raw.center_y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center_x: CENTER_X,
            center_y: CENTER_Y,
        }
    }
}

impl Viewport {
    pub const MIN_ZOOM: f64 = 1.0;
    pub const MAX_ZOOM: f64 = 16.0;

    /// Create a viewport, clamping the zoom to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn new(zoom: f64, center_x: f64, center_y: f64) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            center_x,
            center_y,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Multiply the zoom, keeping the same center.
    pub fn zoom_by(self, factor: f64) -> Self {
        Self::new(self.zoom * factor, self.center_x, self.center_y)
    }

    /// Move the center by a canvas-unit offset.
    pub fn pan_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.zoom, self.center_x + dx, self.center_y + dy)
    }

    /// The `viewBox` for this viewport, clamped inside the canvas.
    pub fn view_box(&self) -> ViewBox {
        let zoom = clamp_zoom(self.zoom);
        let width = CANVAS_WIDTH / zoom;
        let height = CANVAS_HEIGHT / zoom;
        let clamp = |center: f64, size: f64, limit: f64| {
            let origin = if center.is_finite() { center - size / 2.0 } else { 0.0 };
            origin.clamp(0.0, (limit - size).max(0.0))
        };

        ViewBox {
            x: clamp(self.center_x, width, CANVAS_WIDTH),
            y: clamp(self.center_y, height, CANVAS_HEIGHT),
            width,
            height,
        }
    }
}

/// NaN and infinities fall back to the minimum zoom.
fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(Viewport::MIN_ZOOM, Viewport::MAX_ZOOM)
    } else {
        Viewport::MIN_ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_canvas() {
        assert_eq!(Viewport::default().view_box(), ViewBox::FULL);
        assert_eq!(ViewBox::FULL.to_string(), "0 0 4876 3076");
    }

    #[test]
    fn test_zoom_centered() {
        let view = Viewport::new(2.0, CENTER_X, CENTER_Y).view_box();
        assert_eq!(view.width, 2438.0);
        assert_eq!(view.height, 1538.0);
        assert_eq!(view.x, 1219.0);
        assert_eq!(view.y, 769.0);
    }

    #[test]
    fn test_view_box_stays_inside_canvas() {
        let view = Viewport::new(4.0, 0.0, 0.0).view_box();
        assert_eq!((view.x, view.y), (0.0, 0.0));

        let view = Viewport::new(4.0, 10_000.0, 10_000.0).view_box();
        assert_eq!(view.x + view.width, CANVAS_WIDTH);
        assert_eq!(view.y + view.height, CANVAS_HEIGHT);
    }

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(Viewport::new(0.1, 0.0, 0.0).zoom(), 1.0);
        assert_eq!(Viewport::new(100.0, 0.0, 0.0).zoom(), 16.0);
        assert_eq!(Viewport::new(f64::NAN, 0.0, 0.0).zoom(), 1.0);
        assert_eq!(Viewport::default().zoom_by(64.0).zoom(), 16.0);
    }

    #[test]
    fn test_deserialized_zoom_is_clamped() {
        for zoom in ["0.5", "0", "-3", "1e9"] {
            let json = format!(r#"{{"zoom":{},"center_x":0,"center_y":0}}"#, zoom);
            let viewport: Viewport = serde_json::from_str(&json).unwrap();
            let view = viewport.view_box();
            assert!(view.width <= CANVAS_WIDTH, "zoom {}", zoom);
            assert!(view.x >= 0.0 && view.x + view.width <= CANVAS_WIDTH, "zoom {}", zoom);
        }

        let viewport: Viewport =
            serde_json::from_str(r#"{"zoom":0.5,"center_x":0,"center_y":0}"#).unwrap();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.view_box(), ViewBox::FULL);
    }

    #[test]
    fn test_pan() {
        let view = Viewport::new(2.0, CENTER_X, CENTER_Y).pan_by(100.0, -50.0);
        assert_eq!(view.view_box().x, 1319.0);
        assert_eq!(view.view_box().y, 719.0);
    }
}
