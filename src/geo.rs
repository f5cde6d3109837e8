//! Great-circle helpers for drawing arcs on the canvas maps.
//!
//! Points are `(longitude, latitude)` in degrees, which is the `(x, y)`
//! order the canvas expects.

use crate::models::Location;

/// Number of straight segments used to approximate one arc.
pub const ARC_SEGMENTS: usize = 64;

pub type Point = (f64, f64);

pub fn point(location: &Location) -> Point {
    (location.longitude, location.latitude)
}

fn to_unit_vector((lon, lat): Point) -> [f64; 3] {
    let (lon, lat) = (lon.to_radians(), lat.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn from_unit_vector([x, y, z]: [f64; 3]) -> Point {
    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    (lon.to_degrees(), lat.to_degrees())
}

/// Points along the shorter great circle from `start` to `end`, endpoints included.
///
/// Coincident and antipodal endpoints have no unique great circle, so those
/// fall back to the straight line between them.
pub fn great_circle(start: Point, end: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let a = to_unit_vector(start);
    let b = to_unit_vector(end);
    let dot = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]).clamp(-1.0, 1.0);
    let angle = dot.acos();
    let sin_angle = angle.sin();

    if sin_angle.abs() < 1e-9 {
        return (0..=segments)
            .map(|step| {
                let t = step as f64 / segments as f64;
                (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t)
            })
            .collect();
    }

    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for step in 1..segments {
        let t = step as f64 / segments as f64;
        let wa = ((1.0 - t) * angle).sin() / sin_angle;
        let wb = (t * angle).sin() / sin_angle;
        points.push(from_unit_vector([
            wa * a[0] + wb * b[0],
            wa * a[1] + wb * b[1],
            wa * a[2] + wb * b[2],
        ]));
    }
    points.push(end);
    points
}

/// Splits a path wherever consecutive points jump across the antimeridian.
pub fn split_at_antimeridian(points: &[Point]) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for &point in points {
        if let Some(&(last_lon, _)) = current.last() {
            if (point.0 - last_lon).abs() > 180.0 {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(point);
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Canvas bounds as `([x_min, x_max], [y_min, y_max])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Viewport {
    pub const WORLD: Viewport = Viewport {
        x: [-180.0, 180.0],
        y: [-90.0, 90.0],
    };

    pub const OHIO: Viewport = Viewport {
        x: [-85.4, -80.0],
        y: [38.2, 42.2],
    };

    #[cfg(test)]
    fn contains(&self, (x, y): Point) -> bool {
        (self.x[0]..=self.x[1]).contains(&x) && (self.y[0]..=self.y[1]).contains(&y)
    }

    /// Smallest viewport around `points` with `padding` degrees on every side
    /// and at least `min_span` degrees across, clamped to the world.
    ///
    /// A path that wraps the antimeridian gets the whole world.
    pub fn fit(points: &[Point], padding: f64, min_span: Point) -> Viewport {
        if points.is_empty() || split_at_antimeridian(points).len() > 1 {
            return Viewport::WORLD;
        }

        let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
        let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let x = widen([x_min - padding, x_max + padding], min_span.0, 180.0);
        let y = widen([y_min - padding, y_max + padding], min_span.1, 90.0);
        Viewport { x, y }
    }
}

fn widen([low, high]: [f64; 2], min_span: f64, limit: f64) -> [f64; 2] {
    let span = (high - low).max(min_span).min(2.0 * limit);
    let center = (low + high) / 2.0;
    let mut low = center - span / 2.0;
    let mut high = center + span / 2.0;

    if low < -limit {
        high += -limit - low;
        low = -limit;
    }
    if high > limit {
        low -= high - limit;
        high = limit;
    }
    [low.max(-limit), high.min(limit)]
}
