//! Dense path lookup tables.
//!
//! A path slider projects the pointer onto an arbitrary path. Instead of
//! solving that analytically the path is sampled once into a dense polyline
//! with precomputed cumulative arc length; nearest-point and
//! percentage-along queries are then linear scans and table lookups.

use crate::{Angle, Point};
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct PathLookupTable {
    points: Vec<Point>,
    /// Cumulative arc length up to each sample; same length as `points`.
    cumulative: Vec<f32>,
    total_length: f32,
}

impl PathLookupTable {
    pub fn from_points(points: Vec<Point>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += p.distance(points[i - 1]);
            }
            cumulative.push(total);
        }
        Self {
            points,
            cumulative,
            total_length: total,
        }
    }

    /// Samples a circle into a closed polyline table.
    pub fn from_circle(center: Point, radius: f32, samples: usize) -> Self {
        let points = (0..=samples)
            .map(|i| {
                let theta = TAU * i as f32 / samples as f32;
                Point::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .collect();
        Self::from_points(points)
    }

    /// Samples a straight segment.
    pub fn from_segment(start: Point, end: Point, samples: usize) -> Self {
        let points = (0..=samples)
            .map(|i| start.lerp(end, i as f32 / samples as f32))
            .collect();
        Self::from_points(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    fn nearest_index(&self, point: Point) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = (point - *p).magnitude_squared();
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// The sampled point closest to `point`. An empty table yields the
    /// origin.
    pub fn nearest_point(&self, point: Point) -> Point {
        self.nearest_index(point)
            .map(|i| self.points[i])
            .unwrap_or(Point::ZERO)
    }

    /// The cumulative arc-length fraction of the sample nearest to `point`,
    /// in `[0, 1]`. Intended for points already known to lie on the path.
    pub fn percent_along(&self, point: Point) -> f32 {
        match self.nearest_index(point) {
            Some(i) if self.total_length > 0.0 => self.cumulative[i] / self.total_length,
            _ => 0.0,
        }
    }

    pub fn point_at_percent(&self, percent: f32) -> Point {
        if self.points.is_empty() {
            return Point::ZERO;
        }
        let last = self.points.len() - 1;
        let index = ((percent.clamp(0.0, 1.0) * self.points.len() as f32) as usize).min(last);
        self.points[index]
    }

    /// Direction of travel at the given arc-length fraction, measured
    /// between the two neighboring samples. A table with fewer than 3
    /// samples carries no usable direction and yields `Angle::ZERO`.
    pub fn direction_at_percent(&self, percent: f32) -> Angle {
        if self.points.len() < 3 {
            return Angle::ZERO;
        }
        let count = self.points.len();
        let num = ((percent.clamp(0.0, 1.0) * count as f32) as usize).min(count - 1);
        if num > count - 2 {
            Angle::direction(self.points[num - 2], self.points[num - 1])
        } else {
            Angle::direction(self.points[num], self.points[num + 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_table_percent() {
        let table =
            PathLookupTable::from_segment(Point::ZERO, Point::new(100.0, 0.0), 100);
        let nearest = table.nearest_point(Point::new(25.0, 40.0));
        assert_eq!(nearest, Point::new(25.0, 0.0));
        assert!((table.percent_along(nearest) - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_circle_table_is_closed() {
        let table = PathLookupTable::from_circle(Point::new(50.0, 50.0), 25.0, 64);
        assert_eq!(table.len(), 65);
        let start = table.point_at_percent(0.0);
        assert!((start.x - 75.0).abs() < 1e-3);
        assert!((start.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_nearest_point_outside_path_projects() {
        let table = PathLookupTable::from_circle(Point::new(0.0, 0.0), 10.0, 128);
        let nearest = table.nearest_point(Point::new(100.0, 0.0));
        assert!((nearest.x - 10.0).abs() < 0.1);
        assert!(nearest.y.abs() < 0.5);
    }

    #[test]
    fn test_sparse_table_has_no_direction() {
        let table = PathLookupTable::from_points(vec![Point::ZERO, Point::new(1.0, 0.0)]);
        assert_eq!(table.direction_at_percent(0.5), Angle::ZERO);
        let empty = PathLookupTable::from_points(Vec::new());
        assert_eq!(empty.nearest_point(Point::new(3.0, 4.0)), Point::ZERO);
        assert_eq!(empty.percent_along(Point::ZERO), 0.0);
    }

    #[test]
    fn test_direction_follows_travel() {
        let table =
            PathLookupTable::from_segment(Point::ZERO, Point::new(100.0, 0.0), 100);
        let angle = table.direction_at_percent(0.5);
        assert!(angle.radians().abs() < 1e-6);
        // The tail of the table reuses the last usable pair.
        let tail = table.direction_at_percent(1.0);
        assert!(tail.radians().abs() < 1e-6);
    }
}
