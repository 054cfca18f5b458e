//! Raster rendering of a gamut comparison.
//!
//! Projects both hulls, the primary markers and the XYZ axes through a
//! fixed orthographic camera and draws them onto an RGBA buffer. This is
//! the presentation end of the pipeline; nothing here feeds back into the
//! numeric results.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::gamut::GamutComparison;
use crate::vector::Vector;

pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Camera elevation above the XY plane, degrees.
    pub elevation: f64,
    /// Camera azimuth around the Z axis, degrees.
    pub azimuth: f64,
    /// Wireframe/marker colors for the first and second color space.
    pub colors: [Rgba<u8>; 2],
    pub background: Rgba<u8>,
    pub marker_radius: i32,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings {
            width: 1200,
            height: 800,
            elevation: 20.0,
            azimuth: 45.0,
            colors: [Rgba([200, 40, 40, 255]), Rgba([40, 40, 200, 255])],
            background: Rgba([255, 255, 255, 255]),
            marker_radius: 6,
        }
    }
}

/// Orthographic camera: world XYZ to screen pixels.
struct Projection {
    sin_az: f64,
    cos_az: f64,
    sin_el: f64,
    cos_el: f64,
    center: Vector,
    cx: f64,
    cy: f64,
    pixels_per_unit: f64,
}

impl Projection {
    fn new(settings: &RenderSettings, axis_scale: f64) -> Projection {
        let az = settings.azimuth.to_radians();
        let el = settings.elevation.to_radians();
        let half = axis_scale / 2.0;
        Projection {
            sin_az: az.sin(),
            cos_az: az.cos(),
            sin_el: el.sin(),
            cos_el: el.cos(),
            center: Vector::new(half, half, half),
            cx: f64::from(settings.width) / 2.0,
            cy: f64::from(settings.height) / 2.0,
            // Anything within the axis cube stays on screen at this scale
            pixels_per_unit: f64::from(settings.width.min(settings.height)) * 0.42 / axis_scale,
        }
    }

    fn to_screen(&self, p: &Vector) -> (f32, f32) {
        let q = p.subtract(&self.center);
        let u = -q.x * self.sin_az + q.y * self.cos_az;
        let v = -(q.x * self.cos_az + q.y * self.sin_az) * self.sin_el + q.z * self.cos_el;
        (
            (self.cx + u * self.pixels_per_unit) as f32,
            (self.cy - v * self.pixels_per_unit) as f32,
        )
    }
}

/// Render both hull wireframes, primary markers and the coordinate axes
/// into an image. Sides whose pipeline failed are skipped; when both
/// failed, only the axes are drawn at unit scale.
pub fn render_comparison(comparison: &GamutComparison, settings: &RenderSettings) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(settings.width, settings.height, settings.background);

    let axis_scale = comparison.axis_scale().unwrap_or(1.0);
    let projection = Projection::new(settings, axis_scale);

    draw_axes(&mut img, &projection, axis_scale);

    let sides = [
        (&comparison.first, settings.colors[0]),
        (&comparison.second, settings.colors[1]),
    ];
    for (outcome, color) in sides {
        let volume = match outcome {
            Ok(v) => v,
            Err(_) => continue,
        };

        for simplex in &volume.hull.simplices {
            let a = projection.to_screen(&volume.cloud[simplex[0]]);
            let b = projection.to_screen(&volume.cloud[simplex[1]]);
            let c = projection.to_screen(&volume.cloud[simplex[2]]);
            draw_line_segment_mut(&mut img, a, b, color);
            draw_line_segment_mut(&mut img, b, c, color);
            draw_line_segment_mut(&mut img, c, a, color);
        }

        for point in &volume.primary_points {
            let (px, py) = projection.to_screen(point);
            draw_filled_circle_mut(
                &mut img,
                (px as i32, py as i32),
                settings.marker_radius,
                color,
            );
        }
    }

    img
}

fn draw_axes(img: &mut RgbaImage, projection: &Projection, axis_scale: f64) {
    let origin = projection.to_screen(&Vector::zero());
    let axes = [
        (Vector::new(axis_scale, 0.0, 0.0), Rgba([220, 0, 0, 255])),
        (Vector::new(0.0, axis_scale, 0.0), Rgba([0, 160, 0, 255])),
        (Vector::new(0.0, 0.0, axis_scale), Rgba([0, 0, 220, 255])),
    ];
    for (end, color) in axes {
        draw_line_segment_mut(img, origin, projection.to_screen(&end), color);
    }
}
