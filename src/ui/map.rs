use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Map, MapResolution, Points},
};

use crate::geo::{self, ARC_SEGMENTS, Point, Viewport};
use crate::models::{LocationPair, Side};

const ROUTE_COLOR: Color = Color::Red;
const MARKER_COLOR: Color = Color::Yellow;
const ABROAD_PADDING: f64 = 8.0;
const ABROAD_MIN_SPAN: Point = (60.0, 30.0);

/// Rough outline of the state, longitude first.
const OHIO_OUTLINE: &[Point] = &[
    (-84.81, 41.70),
    (-83.45, 41.73),
    (-83.07, 41.60),
    (-82.94, 41.51),
    (-82.71, 41.45),
    (-82.36, 41.42),
    (-82.18, 41.47),
    (-81.69, 41.50),
    (-81.28, 41.76),
    (-80.79, 41.90),
    (-80.52, 41.98),
    (-80.52, 40.64),
    (-80.58, 40.62),
    (-80.62, 40.36),
    (-80.73, 40.06),
    (-80.87, 39.77),
    (-81.12, 39.55),
    (-81.45, 39.41),
    (-81.75, 39.19),
    (-81.81, 38.95),
    (-82.03, 38.99),
    (-82.20, 38.81),
    (-82.59, 38.42),
    (-82.82, 38.57),
    (-83.00, 38.73),
    (-83.65, 38.63),
    (-84.05, 38.77),
    (-84.51, 39.10),
    (-84.82, 39.10),
    (-84.81, 40.50),
    (-84.81, 41.70),
];

struct Route {
    runs: Vec<Vec<Point>>,
    markers: Vec<Point>,
    labels: Vec<(Point, String)>,
}

impl Route {
    fn new(pair: &LocationPair) -> Self {
        let [first, second] = &pair.locations;
        let start = geo::point(first);
        let end = geo::point(second);
        let arc = geo::great_circle(start, end, ARC_SEGMENTS);

        Self {
            runs: geo::split_at_antimeridian(&arc),
            markers: vec![start, end],
            labels: vec![(start, first.name.clone()), (end, second.name.clone())],
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.runs.iter().flatten().copied()
    }
}

/// Draw one region's map. The route and markers only appear once revealed.
pub fn render(frame: &mut Frame, area: Rect, pair: &LocationPair, region: Side, reveal: bool) {
    let route = reveal.then(|| Route::new(pair));
    let viewport = viewport_for(region, route.as_ref());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(viewport.x)
        .y_bounds(viewport.y)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            if region == Side::Ohio {
                draw_polyline(ctx, OHIO_OUTLINE, Color::Gray);
            }

            if let Some(route) = &route {
                ctx.layer();
                for run in &route.runs {
                    draw_polyline(ctx, run, ROUTE_COLOR);
                }
                ctx.draw(&Points {
                    coords: &route.markers,
                    color: MARKER_COLOR,
                });
                for ((x, y), name) in &route.labels {
                    ctx.print(*x, *y, Span::styled(name.clone(), Style::default().fg(Color::White)));
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn viewport_for(region: Side, route: Option<&Route>) -> Viewport {
    match (region, route) {
        (Side::Ohio, _) => Viewport::OHIO,
        (Side::Abroad, Some(route)) => {
            let points: Vec<Point> = route.points().collect();
            Viewport::fit(&points, ABROAD_PADDING, ABROAD_MIN_SPAN)
        }
        (Side::Abroad, None) => Viewport::WORLD,
    }
}

fn draw_polyline(ctx: &mut Context, points: &[Point], color: Color) {
    for segment in points.windows(2) {
        let (x1, y1) = segment[0];
        let (x2, y2) = segment[1];
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}
