//! Geometric shapes for board drawing
//!
//! Every variant rasterizes itself into a [`Grid`] with integer arithmetic and
//! answers hit-tests against the same boundary it draws. Coordinates are
//! widened to `i64` internally so shapes restored from disk with extreme
//! values clip instead of overflowing.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::grid::{Cell, Grid};
use crate::errors::BoardError;

/// Grid coordinate or size as entered by the user
pub type Coord = i32;

/// How a shape is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Outline only (same as `Frame`)
    #[default]
    None,
    /// Outline only
    Frame,
    /// Solid interior
    Fill,
}

impl FillMode {
    #[inline]
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Fill)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Frame => "frame",
            Self::Fill => "fill",
        }
    }
}

impl FromStr for FillMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "frame" => Ok(Self::Frame),
            "fill" => Ok(Self::Fill),
            _ => Err(BoardError::UnknownFillMode(s.to_string())),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The supported shape types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Circle,
    Rectangle,
    Line,
}

impl ShapeKind {
    pub const ALL: [Self; 4] = [Self::Triangle, Self::Circle, Self::Rectangle, Self::Line];

    /// Capitalized name, used by `list` and the save format
    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Circle => "Circle",
            Self::Rectangle => "Rectangle",
            Self::Line => "Line",
        }
    }

    /// Lowercase keyword, used by `add`
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Line => "line",
        }
    }

    /// Integer parameters `add` expects, in order
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::Triangle => &["x", "y", "height"],
            Self::Circle => &["x", "y", "radius"],
            Self::Rectangle => &["x", "y", "width", "height"],
            Self::Line => &["x1", "y1", "x2", "y2"],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Triangle => "isosceles triangle, apex at (x, y), `height` rows tall",
            Self::Circle => "circle centered at (x, y)",
            Self::Rectangle => "rectangle with top-left corner at (x, y)",
            Self::Line => "straight line from (x1, y1) to (x2, y2)",
        }
    }

    /// Usage line for the `shapes` catalogue
    pub fn usage(self) -> String {
        let params: Vec<String> = self.param_names().iter().map(|p| format!("<{p}>")).collect();
        format!("{} {}", self.keyword(), params.join(" "))
    }
}

impl FromStr for ShapeKind {
    type Err = BoardError;

    /// Accepts both the keyword and the capitalized name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownShapeType(s.to_string()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive integer bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    #[inline]
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Capabilities shared by every shape variant
pub trait Geometry {
    /// Rasterize onto the grid; `Fill` paints the interior, anything else the outline
    fn draw(&self, grid: &mut Grid, fill: FillMode, cell: &Cell);

    /// Hit-test against the region enclosed by the drawn outline
    fn contains_point(&self, px: i64, py: i64) -> bool;

    /// Bounding box of the outline
    fn bounds(&self) -> Rect;

    /// Anchor position
    fn anchor(&self) -> (Coord, Coord);

    /// The two type-specific parameters, `0` for an unused slot
    fn params(&self) -> (Coord, Coord);
}

/// Rows `0..len` of a shape starting at `origin` that land on `0..limit`
#[inline]
fn clip_span(origin: i64, len: i64, limit: usize) -> Range<i64> {
    (-origin).max(0)..len.min(limit as i64 - origin)
}

#[inline]
fn distance_squared(dx: i64, dy: i64) -> i64 {
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}

/// Isosceles triangle, apex at `(x, y)` growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    x: Coord,
    y: Coord,
    height: Coord,
}

impl Triangle {
    pub const fn new(x: Coord, y: Coord, height: Coord) -> Self {
        Self { x, y, height }
    }

    pub fn height(&self) -> Coord {
        self.height
    }
}

impl Geometry for Triangle {
    fn draw(&self, grid: &mut Grid, fill: FillMode, cell: &Cell) {
        if self.height <= 0 {
            return;
        }
        let (x, y, h) = (i64::from(self.x), i64::from(self.y), i64::from(self.height));
        let last_col = grid.width() as i64 - 1;

        for i in clip_span(y, h, grid.height()) {
            let row = y + i;
            if fill.is_filled() {
                for col in (x - i).max(0)..=(x + i).min(last_col) {
                    grid.plot(col, row, cell);
                }
            } else {
                grid.plot(x - i, row, cell);
                grid.plot(x + i, row, cell);
            }
        }

        // Base row
        let base = y + h - 1;
        if base >= 0 && base < grid.height() as i64 {
            for col in (x - h + 1).max(0)..=(x + h - 1).min(last_col) {
                grid.plot(col, base, cell);
            }
        }
    }

    fn contains_point(&self, px: i64, py: i64) -> bool {
        if self.height <= 0 {
            return false;
        }
        let dy = py - i64::from(self.y);
        dy >= 0 && dy < i64::from(self.height) && (px - i64::from(self.x)).abs() <= dy
    }

    fn bounds(&self) -> Rect {
        let (x, y, h) = (i64::from(self.x), i64::from(self.y), i64::from(self.height));
        Rect::new(x - h + 1, y, x + h - 1, y + h - 1)
    }

    fn anchor(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }

    fn params(&self) -> (Coord, Coord) {
        (self.height, 0)
    }
}

/// Circle centered at `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    x: Coord,
    y: Coord,
    radius: Coord,
}

impl Circle {
    pub const fn new(x: Coord, y: Coord, radius: Coord) -> Self {
        Self { x, y, radius }
    }

    pub fn radius(&self) -> Coord {
        self.radius
    }

    fn distance_squared_to(&self, px: i64, py: i64) -> i64 {
        distance_squared(px - i64::from(self.x), py - i64::from(self.y))
    }
}

impl Geometry for Circle {
    fn draw(&self, grid: &mut Grid, fill: FillMode, cell: &Cell) {
        if self.radius <= 0 {
            return;
        }
        let r = i64::from(self.radius);
        let r2 = r * r;

        for row in 0..grid.height() as i64 {
            for col in 0..grid.width() as i64 {
                let d2 = self.distance_squared_to(col, row);
                // Outline is the band r^2 - r <= d^2 <= r^2 + r, roughly one cell thick
                let hit = if fill.is_filled() {
                    d2 <= r2
                } else {
                    d2 >= r2 - r && d2 <= r2 + r
                };
                if hit {
                    grid.plot(col, row, cell);
                }
            }
        }
    }

    fn contains_point(&self, px: i64, py: i64) -> bool {
        if self.radius <= 0 {
            return false;
        }
        let r = i64::from(self.radius);
        self.distance_squared_to(px, py) <= r * r + r
    }

    fn bounds(&self) -> Rect {
        let (x, y, r) = (i64::from(self.x), i64::from(self.y), i64::from(self.radius));
        Rect::new(x - r, y - r, x + r, y + r)
    }

    fn anchor(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }

    fn params(&self) -> (Coord, Coord) {
        (self.radius, 0)
    }
}

/// Axis-aligned rectangle with top-left corner at `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: Coord,
    y: Coord,
    width: Coord,
    height: Coord,
}

impl Rectangle {
    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }
}

impl Geometry for Rectangle {
    fn draw(&self, grid: &mut Grid, fill: FillMode, cell: &Cell) {
        if self.width <= 0 || self.height <= 0 {
            return;
        }
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let (w, h) = (i64::from(self.width), i64::from(self.height));

        for i in clip_span(y, h, grid.height()) {
            for j in clip_span(x, w, grid.width()) {
                if fill.is_filled() || i == 0 || i == h - 1 || j == 0 || j == w - 1 {
                    grid.plot(x + j, y + i, cell);
                }
            }
        }
    }

    fn contains_point(&self, px: i64, py: i64) -> bool {
        self.width > 0 && self.height > 0 && self.bounds().contains(px, py)
    }

    fn bounds(&self) -> Rect {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        Rect::new(
            x,
            y,
            x + i64::from(self.width) - 1,
            y + i64::from(self.height) - 1,
        )
    }

    fn anchor(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }

    fn params(&self) -> (Coord, Coord) {
        (self.width, self.height)
    }
}

/// Line segment from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
}

impl Line {
    pub const fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn end(&self) -> (Coord, Coord) {
        (self.x2, self.y2)
    }

    /// Cells visited by Bresenham's algorithm
    ///
    /// Endpoints are walked in a fixed order so a line and its reverse
    /// visit the same cells.
    pub fn points(&self) -> LinePoints {
        let walk = self.walk();
        LinePoints::new(walk, 0..walk.steps() + 1)
    }

    fn walk(&self) -> Walk {
        let a = (i64::from(self.x1), i64::from(self.y1));
        let b = (i64::from(self.x2), i64::from(self.y2));
        if a <= b {
            Walk::new(a, b)
        } else {
            Walk::new(b, a)
        }
    }
}

impl Geometry for Line {
    fn draw(&self, grid: &mut Grid, _fill: FillMode, cell: &Cell) {
        let walk = self.walk();
        let limit = if walk.x_major() {
            grid.width()
        } else {
            grid.height()
        };
        for (x, y) in LinePoints::new(walk, walk.steps_within(limit)) {
            grid.plot(x, y, cell);
        }
    }

    fn contains_point(&self, px: i64, py: i64) -> bool {
        let walk = self.walk();
        let major = if walk.x_major() { px } else { py };
        walk.step_at(major).is_some_and(|step| walk.point(step) == (px, py))
    }

    fn bounds(&self) -> Rect {
        let (x1, y1) = (i64::from(self.x1), i64::from(self.y1));
        let (x2, y2) = (i64::from(self.x2), i64::from(self.y2));
        Rect::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
    }

    fn anchor(&self) -> (Coord, Coord) {
        (self.x1, self.y1)
    }

    fn params(&self) -> (Coord, Coord) {
        (self.x2, self.y2)
    }
}

/// Bresenham walk addressed by step along the major axis
///
/// The error term of the incremental algorithm stays inside a window of
/// width `2 * major`, which pins the minor offset after `k` steps to
/// `ceil((2k * minor - major) / (2 * major))`. Any cell can be computed
/// directly, so clipping never walks the off-grid part of a long line.
#[derive(Debug, Clone, Copy)]
struct Walk {
    start: (i64, i64),
    step: (i64, i64),
    dx: i64,
    dy: i64,
}

impl Walk {
    fn new(start: (i64, i64), end: (i64, i64)) -> Self {
        Self {
            start,
            step: ((end.0 - start.0).signum(), (end.1 - start.1).signum()),
            dx: (end.0 - start.0).abs(),
            dy: (end.1 - start.1).abs(),
        }
    }

    fn x_major(&self) -> bool {
        self.dx >= self.dy
    }

    /// Index of the last cell
    fn steps(&self) -> i64 {
        self.dx.max(self.dy)
    }

    fn point(&self, k: i64) -> (i64, i64) {
        let (major, minor) = if self.x_major() {
            (self.dx, self.dy)
        } else {
            (self.dy, self.dx)
        };
        let offset = if major == 0 {
            0
        } else {
            let num = 2 * i128::from(k) * i128::from(minor) - i128::from(major);
            let den = 2 * i128::from(major);
            // Bounded by `minor`, so it fits back into i64
            (num.div_euclid(den) + i128::from(num.rem_euclid(den) != 0)) as i64
        };
        let (sx, sy) = self.step;
        if self.x_major() {
            (self.start.0 + sx * k, self.start.1 + sy * offset)
        } else {
            (self.start.0 + sx * offset, self.start.1 + sy * k)
        }
    }

    /// Major-axis origin and direction
    fn major_axis(&self) -> (i64, i64) {
        if self.x_major() {
            (self.start.0, self.step.0)
        } else {
            (self.start.1, self.step.1)
        }
    }

    /// Step whose major coordinate is `coord`, if the walk reaches it
    fn step_at(&self, coord: i64) -> Option<i64> {
        let (origin, sign) = self.major_axis();
        let k = match sign {
            0 if coord == origin => 0,
            0 => return None,
            _ => (coord - origin) * sign,
        };
        (0..=self.steps()).contains(&k).then_some(k)
    }

    /// Steps whose major coordinate lands on `0..limit`
    fn steps_within(&self, limit: usize) -> Range<i64> {
        let (origin, sign) = self.major_axis();
        let limit = limit as i64;
        let (first, last) = match sign {
            1 => (-origin, limit - 1 - origin),
            -1 => (origin - limit + 1, origin),
            _ => (0, 0),
        };
        first.max(0)..last.min(self.steps()).saturating_add(1)
    }
}

/// Iterator over the cells of a [`Line`]
#[derive(Debug, Clone)]
pub struct LinePoints {
    walk: Walk,
    steps: Range<i64>,
}

impl LinePoints {
    fn new(walk: Walk, steps: Range<i64>) -> Self {
        Self { walk, steps }
    }
}

impl Iterator for LinePoints {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next().map(|k| self.walk.point(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

/// A board shape: one of the supported variants
///
/// Equality compares type and geometry only, which is exactly the
/// duplicate-detection key of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle(Triangle),
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
}

impl Shape {
    /// Build a shape from the positional form used by the save format
    pub fn from_params(kind: ShapeKind, x: Coord, y: Coord, p1: Coord, p2: Coord) -> Self {
        match kind {
            ShapeKind::Triangle => Self::Triangle(Triangle::new(x, y, p1)),
            ShapeKind::Circle => Self::Circle(Circle::new(x, y, p1)),
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::new(x, y, p1, p2)),
            ShapeKind::Line => Self::Line(Line::new(x, y, p1, p2)),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Line(_) => ShapeKind::Line,
        }
    }

    fn geometry(&self) -> &dyn Geometry {
        match self {
            Self::Triangle(t) => t,
            Self::Circle(c) => c,
            Self::Rectangle(r) => r,
            Self::Line(l) => l,
        }
    }

    /// Type-specific labels for listings, e.g. `Width:10 Height:4`
    pub fn param_labels(&self) -> String {
        match self {
            Self::Triangle(t) => format!("Height:{}", t.height),
            Self::Circle(c) => format!("Radius:{}", c.radius),
            Self::Rectangle(r) => format!("Width:{} Height:{}", r.width, r.height),
            Self::Line(l) => format!("EndX:{} EndY:{}", l.x2, l.y2),
        }
    }
}

impl Geometry for Shape {
    fn draw(&self, grid: &mut Grid, fill: FillMode, cell: &Cell) {
        self.geometry().draw(grid, fill, cell);
    }

    fn contains_point(&self, px: i64, py: i64) -> bool {
        self.geometry().contains_point(px, py)
    }

    fn bounds(&self) -> Rect {
        self.geometry().bounds()
    }

    fn anchor(&self) -> (Coord, Coord) {
        self.geometry().anchor()
    }

    fn params(&self) -> (Coord, Coord) {
        self.geometry().params()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.anchor();
        write!(f, "{} at ({x},{y}) {}", self.kind(), self.param_labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::color::Color;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn star() -> Cell {
        Cell::painted(&Color::None)
    }

    fn painted(grid: &Grid) -> BTreeSet<(i64, i64)> {
        let mut set = BTreeSet::new();
        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                if grid.get(x, y).is_some_and(|c| !c.is_blank()) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn test_triangle_frame() {
        let mut grid = Grid::new(20, 10);
        Triangle::new(5, 0, 3).draw(&mut grid, FillMode::None, &star());
        let expected: BTreeSet<_> = [(5, 0), (4, 1), (6, 1), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2)]
            .into_iter()
            .collect();
        assert_eq!(painted(&grid), expected);
    }

    #[test]
    fn test_triangle_fill() {
        let mut grid = Grid::new(20, 10);
        Triangle::new(5, 0, 4).draw(&mut grid, FillMode::Fill, &star());
        // 1 + 3 + 5 + 7
        assert_eq!(grid.painted_count(), 16);
        assert!(grid.get(5, 2).is_some_and(|c| !c.is_blank()));
    }

    #[test]
    fn test_triangle_taller_than_grid_is_clipped() {
        let mut grid = Grid::default();
        Triangle::new(0, 0, 200).draw(&mut grid, FillMode::None, &star());
        // Right edge only; left edge and base fall off the grid
        let cells = painted(&grid);
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|&(x, y)| x == y));
    }

    #[test]
    fn test_triangle_contains_point() {
        let t = Triangle::new(10, 5, 4);
        assert!(t.contains_point(10, 5));
        assert!(t.contains_point(7, 8));
        assert!(t.contains_point(11, 7));
        assert!(!t.contains_point(12, 6));
        assert!(!t.contains_point(10, 9));
        assert!(!t.contains_point(10, 4));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    #[case(11)]
    fn test_circle_contains_axis_extremes(#[case] radius: Coord) {
        let c = Circle::new(40, 12, radius);
        let r = i64::from(radius);
        assert!(c.contains_point(40 + r, 12));
        assert!(c.contains_point(40 - r, 12));
        assert!(c.contains_point(40, 12 + r));
        assert!(c.contains_point(40, 12 - r));
        assert!(c.contains_point(40, 12));
        assert!(!c.contains_point(40 + r + 1, 12));
    }

    #[test]
    fn test_circle_frame_band() {
        let mut grid = Grid::default();
        Circle::new(40, 12, 5).draw(&mut grid, FillMode::Frame, &star());
        // d^2 = 25 is on the band, the center is not
        assert!(grid.get(45, 12).is_some_and(|c| !c.is_blank()));
        assert!(grid.get(43, 16).is_some_and(|c| !c.is_blank())); // 9 + 16 = 25
        assert!(grid.get(40, 12).is_some_and(Cell::is_blank));
        // 20 <= d^2 <= 30 exactly
        for (x, y) in painted(&grid) {
            let d2 = (x - 40).pow(2) + (y - 12).pow(2);
            assert!((20..=30).contains(&d2), "({x},{y}) d2={d2}");
        }
    }

    #[test]
    fn test_circle_fill() {
        let mut grid = Grid::default();
        Circle::new(40, 12, 2).draw(&mut grid, FillMode::Fill, &star());
        // Cells with dx^2 + dy^2 <= 4
        assert_eq!(grid.painted_count(), 13);
    }

    #[test]
    fn test_circle_zero_radius_is_noop() {
        let mut grid = Grid::default();
        Circle::new(40, 12, 0).draw(&mut grid, FillMode::Fill, &star());
        assert_eq!(grid.painted_count(), 0);
        assert!(!Circle::new(40, 12, 0).contains_point(40, 12));
    }

    #[test]
    fn test_rectangle_frame() {
        let mut grid = Grid::default();
        Rectangle::new(5, 5, 10, 4).draw(&mut grid, FillMode::None, &star());
        // 2 * 10 + 2 * 2
        assert_eq!(grid.painted_count(), 24);
        assert!(grid.get(5, 5).is_some_and(|c| !c.is_blank()));
        assert!(grid.get(14, 8).is_some_and(|c| !c.is_blank()));
        assert!(grid.get(6, 6).is_some_and(Cell::is_blank));
    }

    #[test]
    fn test_rectangle_fill_clipped() {
        let mut grid = Grid::default();
        Rectangle::new(75, 20, 10, 10).draw(&mut grid, FillMode::Fill, &star());
        assert_eq!(grid.painted_count(), 5 * 5);
    }

    #[test]
    fn test_rectangle_degenerate() {
        let mut grid = Grid::default();
        Rectangle::new(5, 5, 0, 4).draw(&mut grid, FillMode::Fill, &star());
        Rectangle::new(5, 5, 4, -1).draw(&mut grid, FillMode::Fill, &star());
        assert_eq!(grid.painted_count(), 0);
    }

    #[test]
    fn test_line_points() {
        let points: Vec<_> = Line::new(0, 0, 4, 2).points().collect();
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(4, 2)));
        assert_eq!(points.len(), 5);
    }

    #[rstest]
    #[case(0, 0, 2, 1)]
    #[case(3, 7, 30, 2)]
    #[case(10, 10, 10, 20)]
    #[case(5, 5, 0, 0)]
    #[case(79, 0, 0, 24)]
    fn test_line_is_symmetric(#[case] x1: Coord, #[case] y1: Coord, #[case] x2: Coord, #[case] y2: Coord) {
        let forward: BTreeSet<_> = Line::new(x1, y1, x2, y2).points().collect();
        let backward: BTreeSet<_> = Line::new(x2, y2, x1, y1).points().collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_line_single_point() {
        let points: Vec<_> = Line::new(3, 3, 3, 3).points().collect();
        assert_eq!(points, vec![(3, 3)]);
    }

    #[test]
    fn test_line_contains_point() {
        let line = Line::new(0, 0, 10, 0);
        assert!(line.contains_point(5, 0));
        assert!(!line.contains_point(5, 1));
        assert!(!line.contains_point(11, 0));
    }

    #[test]
    fn test_line_off_grid_is_clipped() {
        let mut grid = Grid::default();
        Line::new(-10, 5, 100, 5).draw(&mut grid, FillMode::None, &star());
        assert_eq!(grid.painted_count(), 80);
    }

    /// Incremental Bresenham, one step at a time
    fn stepped(a: (i64, i64), b: (i64, i64)) -> Vec<(i64, i64)> {
        let (dx, dy) = ((b.0 - a.0).abs(), (b.1 - a.1).abs());
        let (sx, sy) = ((b.0 - a.0).signum(), (b.1 - a.1).signum());
        let (mut x, mut y, mut err) = (a.0, a.1, dx - dy);
        let mut points = vec![(x, y)];
        while (x, y) != b {
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
            points.push((x, y));
        }
        points
    }

    #[rstest]
    #[case(0, 0, 7, 3)]
    #[case(0, 0, 3, 7)]
    #[case(2, 9, 40, 1)]
    #[case(-5, 20, 60, -3)]
    #[case(10, 0, 10, 24)]
    #[case(0, 0, 13, 13)]
    #[case(50, 4, 1, 4)]
    fn test_line_points_match_incremental_walk(
        #[case] x1: Coord,
        #[case] y1: Coord,
        #[case] x2: Coord,
        #[case] y2: Coord,
    ) {
        let a = (i64::from(x1), i64::from(y1));
        let b = (i64::from(x2), i64::from(y2));
        let expected = if a <= b { stepped(a, b) } else { stepped(b, a) };
        let line = Line::new(x1, y1, x2, y2);
        assert_eq!(line.points().collect::<Vec<_>>(), expected);
        assert!(expected.iter().all(|&(x, y)| line.contains_point(x, y)));
    }

    #[test]
    fn test_line_draw_matches_points_on_grid() {
        let line = Line::new(-30, -4, 120, 40);
        let mut grid = Grid::default();
        line.draw(&mut grid, FillMode::None, &star());
        let on_grid = line.points().filter(|&(x, y)| grid.in_bounds(x, y)).count();
        assert_eq!(grid.painted_count(), on_grid);
    }

    #[test]
    fn test_extreme_line_is_clipped() {
        let line = Line::new(Coord::MIN, 5, Coord::MAX, 5);
        let mut grid = Grid::default();
        line.draw(&mut grid, FillMode::None, &star());
        assert_eq!(grid.painted_count(), 80);
        assert!(line.contains_point(0, 5));
        assert!(!line.contains_point(0, 6));

        let steep = Line::new(40, Coord::MIN, 41, Coord::MAX);
        let mut grid = Grid::default();
        steep.draw(&mut grid, FillMode::None, &star());
        assert_eq!(grid.painted_count(), 25);
        // Past the midpoint, so the whole visible part is on x=41
        assert!(steep.contains_point(41, 0));
        assert!(steep.contains_point(40, -1));
        assert!(!steep.contains_point(40, 0));
    }

    #[test]
    fn test_shape_equality_ignores_nothing_but_geometry() {
        let a = Shape::from_params(ShapeKind::Circle, 1, 2, 3, 0);
        let b = Shape::Circle(Circle::new(1, 2, 3));
        let c = Shape::Triangle(Triangle::new(1, 2, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_param_labels() {
        assert_eq!(
            Shape::from_params(ShapeKind::Rectangle, 5, 5, 10, 4).param_labels(),
            "Width:10 Height:4"
        );
        assert_eq!(
            Shape::from_params(ShapeKind::Line, 0, 0, 7, 9).param_labels(),
            "EndX:7 EndY:9"
        );
        assert_eq!(Shape::from_params(ShapeKind::Triangle, 0, 0, 3, 0).param_labels(), "Height:3");
        assert_eq!(Shape::from_params(ShapeKind::Circle, 0, 0, 2, 0).param_labels(), "Radius:2");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("triangle".parse::<ShapeKind>().unwrap(), ShapeKind::Triangle);
        assert_eq!("Rectangle".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert!(matches!(
            "hexagon".parse::<ShapeKind>(),
            Err(BoardError::UnknownShapeType(_))
        ));
        assert_eq!(ShapeKind::Rectangle.usage(), "rectangle <x> <y> <width> <height>");
    }

    #[test]
    fn test_fill_mode_parsing() {
        assert_eq!("fill".parse::<FillMode>().unwrap(), FillMode::Fill);
        assert_eq!("frame".parse::<FillMode>().unwrap(), FillMode::Frame);
        assert_eq!("none".parse::<FillMode>().unwrap(), FillMode::None);
        assert!("solid".parse::<FillMode>().is_err());
    }
}
