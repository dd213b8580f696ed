//! Line/rectangle intersection.
//!
//! Oriented 1D sliders describe their track as an infinite line through the
//! control's center; the visible chord is wherever that line crosses the
//! control's bounding rectangle.

use crate::{Point, Rect};
use smallvec::SmallVec;

const EPSILON: f32 = 1e-4;

/// The 0, 1, or 2 points where the infinite line through `p1` and `p2`
/// crosses the edges of `rect`. Corner hits are deduplicated.
pub fn line_rect_intersection(p1: Point, p2: Point, rect: Rect) -> SmallVec<[Point; 2]> {
    let mut hits: SmallVec<[Point; 2]> = SmallVec::new();
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0.0 && dy == 0.0 {
        return hits;
    }

    let left = rect.x;
    let right = rect.x + rect.width;
    let top = rect.y;
    let bottom = rect.y + rect.height;

    let mut push = |candidate: Point| {
        let duplicate = hits
            .iter()
            .any(|p| (p.x - candidate.x).abs() < EPSILON && (p.y - candidate.y).abs() < EPSILON);
        if !duplicate && hits.len() < 2 {
            hits.push(candidate);
        }
    };

    // Vertical edges.
    if dx != 0.0 {
        for x in [left, right] {
            let t = (x - p1.x) / dx;
            let y = p1.y + t * dy;
            if (top - EPSILON..=bottom + EPSILON).contains(&y) {
                push(Point::new(x, y.clamp(top, bottom)));
            }
        }
    }
    // Horizontal edges.
    if dy != 0.0 {
        for y in [top, bottom] {
            let t = (y - p1.y) / dy;
            let x = p1.x + t * dx;
            if (left - EPSILON..=right + EPSILON).contains(&x) {
                push(Point::new(x.clamp(left, right), y));
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line_hits_both_sides() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let hits = line_rect_intersection(
            Point::new(-500.0, 50.0),
            Point::new(500.0, 50.0),
            rect,
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], Point::new(0.0, 50.0));
        assert_eq!(hits[1], Point::new(100.0, 50.0));
    }

    #[test]
    fn test_diagonal_line_hits_corners_once() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let hits = line_rect_intersection(
            Point::new(-100.0, -100.0),
            Point::new(200.0, 200.0),
            rect,
        );
        // Both corners lie on two edges each; each must be reported once.
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_miss_returns_empty() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let hits = line_rect_intersection(
            Point::new(-5.0, 50.0),
            Point::new(50.0, 50.0),
            rect,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_degenerate_line_returns_empty() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = Point::new(5.0, 5.0);
        assert!(line_rect_intersection(p, p, rect).is_empty());
    }
}
