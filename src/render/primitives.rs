//! Primitive rendering functions.
//!
//! Implements the clipped line rasterizer and the bounds-checked point
//! plotter that every plot routine writes through.

use crate::color::Rgba;
use crate::framebuffer::Surface;
use crate::geometry::{Line, Point, Rect};

/// Trait for objects that can rasterize themselves onto a surface.
pub trait Drawable {
    /// Draw this object into the surface.
    fn draw(&self, surface: &mut Surface<'_>);
}

// ============================================================================
// Point Plotting
// ============================================================================

/// Plot a single pixel at truncated integer coordinates.
///
/// Out-of-bounds and non-finite coordinates are dropped silently.
#[inline]
pub fn plot_point(surface: &mut Surface<'_>, point: Point, color: Rgba) {
    // NaN would truncate to 0 and land on the first row or column
    if !point.is_finite() {
        return;
    }
    let (x, y) = point.to_pixel();
    surface.plot(x, y, color);
}

// ============================================================================
// Clipping
// ============================================================================

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Each pass moves one endpoint onto a boundary; four passes suffice for
/// finite input, the rest is slack for rounding.
const MAX_CLIP_ITERATIONS: u32 = 16;

/// Region code of a point relative to the clip rectangle.
#[inline]
fn outcode(p: Point, bounds: &Rect) -> u8 {
    let mut code = INSIDE;
    if p.x < bounds.x {
        code |= LEFT;
    } else if p.x > bounds.right() {
        code |= RIGHT;
    }
    if p.y < bounds.y {
        code |= TOP;
    } else if p.y > bounds.bottom() {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to a rectangle using Cohen-Sutherland.
///
/// Returns the visible portion, or `None` when the segment lies entirely
/// outside. Segments with non-finite endpoints, and intersections whose
/// denominator is zero, are rejected.
///
/// # References
///
/// Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive
/// Computer Graphics*. McGraw-Hill.
#[must_use]
pub fn clip_line(line: Line, bounds: &Rect) -> Option<Line> {
    if !line.start.is_finite() || !line.end.is_finite() {
        return None;
    }

    let mut p0 = line.start;
    let mut p1 = line.end;
    let mut code0 = outcode(p0, bounds);
    let mut code1 = outcode(p1, bounds);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if (code0 | code1) == INSIDE {
            return Some(Line::new(p0, p1));
        }
        if (code0 & code1) != 0 {
            return None;
        }

        let code_out = if code0 != 0 { code0 } else { code1 };
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;

        let clipped = if code_out & BOTTOM != 0 {
            if dy == 0.0 {
                return None;
            }
            Point::new(p0.x + dx * (bounds.bottom() - p0.y) / dy, bounds.bottom())
        } else if code_out & TOP != 0 {
            if dy == 0.0 {
                return None;
            }
            Point::new(p0.x + dx * (bounds.y - p0.y) / dy, bounds.y)
        } else if code_out & RIGHT != 0 {
            if dx == 0.0 {
                return None;
            }
            Point::new(bounds.right(), p0.y + dy * (bounds.right() - p0.x) / dx)
        } else {
            if dx == 0.0 {
                return None;
            }
            Point::new(bounds.x, p0.y + dy * (bounds.x - p0.x) / dx)
        };

        if code_out == code0 {
            p0 = clipped;
            code0 = outcode(p0, bounds);
        } else {
            p1 = clipped;
            code1 = outcode(p1, bounds);
        }
    }

    None
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line clipped to the surface.
///
/// After clipping, steps along the major axis once per whole pixel of its
/// length, accumulating floating-point deltas and plotting the truncated
/// position (a DDA rather than Bresenham's integer error terms). Writes still
/// go through the bounds-checked plotter.
pub fn draw_line(surface: &mut Surface<'_>, line: Line, color: Rgba) {
    let Some(clipped) = clip_line(line, &surface.bounds()) else {
        return;
    };

    let dx = clipped.dx();
    let dy = clipped.dy();
    let length = dx.abs().max(dy.abs());

    if length == 0.0 {
        plot_point(surface, clipped.start, color);
        return;
    }

    let steps = length as u32;
    let step_x = dx / length;
    let step_y = dy / length;

    let mut p = clipped.start;
    for _ in 0..=steps {
        plot_point(surface, p, color);
        p.x += step_x;
        p.y += step_y;
    }
}

/// Draw a connected polyline through consecutive points.
///
/// Fewer than two points draw nothing.
pub fn draw_polyline(surface: &mut Surface<'_>, points: &[Point], color: Rgba) {
    for pair in points.windows(2) {
        draw_line(surface, Line::new(pair[0], pair[1]), color);
    }
}

impl Drawable for (Line, Rgba) {
    fn draw(&self, surface: &mut Surface<'_>) {
        draw_line(surface, self.0, self.1);
    }
}

impl Drawable for (Point, Rgba) {
    fn draw(&self, surface: &mut Surface<'_>) {
        plot_point(surface, self.0, self.1);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    fn bounds(width: f32, height: f32) -> Rect {
        Rect::new(0.0, 0.0, width - 1.0, height - 1.0)
    }

    fn lit_pixels(fb: &Framebuffer) -> usize {
        fb.pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_clip_inside_unchanged() {
        let line = Line::from_coords(10.0, 10.0, 90.0, 50.0);
        assert_eq!(clip_line(line, &bounds(100.0, 100.0)), Some(line));
    }

    #[test]
    fn test_clip_fully_outside_rejected() {
        let b = bounds(100.0, 100.0);
        assert_eq!(clip_line(Line::from_coords(-10.0, 5.0, -1.0, 80.0), &b), None);
        assert_eq!(clip_line(Line::from_coords(5.0, 120.0, 95.0, 150.0), &b), None);
        // Crosses both the left and top regions without entering the rectangle
        assert_eq!(clip_line(Line::from_coords(-20.0, 10.0, 10.0, -20.0), &b), None);
    }

    #[test]
    fn test_clip_right_edge() {
        let clipped = clip_line(Line::from_coords(50.0, 50.0, 150.0, 50.0), &bounds(100.0, 100.0))
            .expect("segment crosses the right edge");
        assert_eq!(clipped.start, Point::new(50.0, 50.0));
        assert!((clipped.end.x - 99.0).abs() < f32::EPSILON);
        assert!((clipped.end.y - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clip_top_edge_diagonal() {
        let clipped = clip_line(Line::from_coords(20.0, 20.0, 60.0, -20.0), &bounds(100.0, 100.0))
            .expect("segment crosses the top edge");
        assert!((clipped.end.y - 0.0).abs() < f32::EPSILON);
        assert!((clipped.end.x - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_clip_both_ends_outside() {
        let clipped = clip_line(Line::from_coords(-50.0, 50.0, 150.0, 50.0), &bounds(100.0, 100.0))
            .expect("segment spans the rectangle");
        assert!((clipped.start.x - 0.0).abs() < f32::EPSILON);
        assert!((clipped.end.x - 99.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clip_non_finite_rejected() {
        let b = bounds(100.0, 100.0);
        assert_eq!(clip_line(Line::from_coords(f32::NAN, 0.0, 5.0, 5.0), &b), None);
        assert_eq!(clip_line(Line::from_coords(0.0, 0.0, f32::INFINITY, 5.0), &b), None);
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(10.0, 50.0, 90.0, 50.0), Rgba::WHITE);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::WHITE));
        assert_eq!(lit_pixels(&fb), 81);
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(50.0, 10.0, 50.0, 90.0), Rgba::WHITE);

        assert_eq!(fb.get_pixel(50, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 90), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(10.0, 10.0, 90.0, 90.0), Rgba::WHITE);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(90, 90), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_reversed_direction() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(90.0, 20.0, 10.0, 20.0), Rgba::RED);

        assert_eq!(fb.get_pixel(90, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(10, 20), Some(Rgba::RED));
    }

    #[test]
    fn test_draw_line_outside_writes_nothing() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(-50.0, -5.0, 200.0, -1.0), Rgba::WHITE);
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_draw_line_crossing_edge_draws_inside_only() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(-40.0, 30.0, 40.0, 30.0), Rgba::WHITE);

        assert_eq!(fb.get_pixel(0, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(40, 30), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(41, 30), Some(Rgba::TRANSPARENT));
        assert_eq!(lit_pixels(&fb), 41);
    }

    #[test]
    fn test_draw_line_zero_length() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(3.5, 4.5, 3.5, 4.5), Rgba::GREEN);
        assert_eq!(fb.get_pixel(3, 4), Some(Rgba::GREEN));
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_draw_line_on_boundary() {
        // Lies exactly on the bottom edge
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        draw_line(&mut fb.surface(), Line::from_coords(0.0, 9.0, 9.0, 9.0), Rgba::BLUE);
        for x in 0..10 {
            assert_eq!(fb.get_pixel(x, 9), Some(Rgba::BLUE));
        }
    }

    #[test]
    fn test_draw_polyline() {
        let mut fb = Framebuffer::new(20, 20).expect("framebuffer creation should succeed");
        let points = [Point::new(1.0, 1.0), Point::new(10.0, 1.0), Point::new(10.0, 10.0)];
        draw_polyline(&mut fb.surface(), &points, Rgba::WHITE);
        assert_eq!(fb.get_pixel(5, 1), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(10, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_polyline_single_point_draws_nothing() {
        let mut fb = Framebuffer::new(20, 20).expect("framebuffer creation should succeed");
        draw_polyline(&mut fb.surface(), &[Point::new(5.0, 5.0)], Rgba::WHITE);
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_plot_point_out_of_bounds() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        plot_point(&mut fb.surface(), Point::new(-1.5, 3.0), Rgba::RED);
        plot_point(&mut fb.surface(), Point::new(10.0, 3.0), Rgba::RED);
        assert_eq!(lit_pixels(&fb), 0);

        plot_point(&mut fb.surface(), Point::new(9.9, 9.9), Rgba::RED);
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::RED));
    }

    #[test]
    fn test_plot_point_non_finite_dropped() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        plot_point(&mut fb.surface(), Point::new(3.0, f32::NAN), Rgba::RED);
        plot_point(&mut fb.surface(), Point::new(f32::NAN, f32::NAN), Rgba::RED);
        plot_point(&mut fb.surface(), Point::new(f32::NEG_INFINITY, 2.0), Rgba::RED);
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_drawable_tuples() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        (Line::from_coords(0.0, 0.0, 9.0, 0.0), Rgba::RED).draw(&mut fb.surface());
        (Point::new(5.0, 5.0), Rgba::BLUE).draw(&mut fb.surface());
        assert_eq!(fb.get_pixel(9, 0), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
    }
}
