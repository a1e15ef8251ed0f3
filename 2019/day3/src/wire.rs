use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            c => Err(Error::InvalidDirection(c)),
        }
    }
}

impl Direction {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// One step of a wire path, like `R8` or `U5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path {
    dir: Direction,
    dist: u32,
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([UDLR])(\d+)$").unwrap());

        let token = value.trim();
        let caps = PATTERN
            .captures(token)
            .ok_or_else(|| Error::MalformedToken(token.to_string()))?;
        let dir = caps[1]
            .chars()
            .next()
            .ok_or_else(|| Error::MalformedToken(token.to_string()))
            .and_then(Direction::try_from)?;
        let dist = caps[2]
            .parse::<u32>()
            .map_err(|_| Error::MalformedToken(token.to_string()))?;

        Ok(Path { dir, dist })
    }
}

impl Path {
    pub fn new(dir: Direction, dist: u32) -> Self {
        Self { dir, dist }
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn dist(&self) -> u32 {
        self.dist
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    pub fn mht_dist(&self) -> u64 {
        self.mht_dist_to(&Point::ORIGIN)
    }

    pub fn mht_dist_to(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the point reached by walking along given path from this point.
    pub fn project(&self, path: &Path) -> Point {
        let dist = i64::from(path.dist());
        match path.dir() {
            Direction::Up => Point::new(self.x, self.y + dist),
            Direction::Down => Point::new(self.x, self.y - dist),
            Direction::Left => Point::new(self.x - dist, self.y),
            Direction::Right => Point::new(self.x + dist, self.y),
        }
    }
}

fn is_between(v: i64, a: i64, b: i64) -> bool {
    if a >= b {
        a >= v && v >= b
    } else {
        b >= v && v >= a
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    start: Point,
    end: Point,
    is_horizontal: bool,
    len: u32,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}->{}]", self.start, self.end)
    }
}

impl Segment {
    pub fn new(start: Point, path: &Path) -> Self {
        Self {
            start,
            end: start.project(path),
            is_horizontal: path.dir().is_horizontal(),
            len: path.dist(),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_horizontal(&self) -> bool {
        self.is_horizontal
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    /// Cross point of two perpendicular segments, ends included.
    /// Parallel segments never cross, even if they overlap.
    pub fn cross(&self, other: &Segment) -> Option<Point> {
        if self.is_horizontal == other.is_horizontal {
            return None;
        }

        let (h_seg, v_seg) = if self.is_horizontal {
            (self, other)
        } else {
            (other, self)
        };
        if is_between(h_seg.start.y, v_seg.start.y, v_seg.end.y)
            && is_between(v_seg.start.x, h_seg.start.x, h_seg.end.x)
        {
            Some(Point::new(v_seg.start.x, h_seg.start.y))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wire {
    segs: Vec<Segment>,
}

impl FromStr for Wire {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyWire);
        }

        Wire::from_tokens(s.split(','))
    }
}

impl Wire {
    /// Builds a wire starting at the origin, one segment per token, in token order.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Wire, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cur_point = Point::ORIGIN;
        let mut segs = Vec::new();
        for token in tokens {
            let path = Path::try_from(token.as_ref())?;
            let seg = Segment::new(cur_point, &path);
            cur_point = seg.end;
            segs.push(seg);
        }

        if segs.is_empty() {
            return Err(Error::EmptyWire);
        }

        debug!(seg_n = segs.len(), end = %cur_point, "built wire");
        Ok(Wire { segs })
    }

    pub fn segs(&self) -> &[Segment] {
        &self.segs
    }

    pub fn total_len(&self) -> u64 {
        self.segs.iter().map(|s| u64::from(s.len)).sum()
    }

    /// Manhattan distance from the origin to the closest cross point of two wires.
    /// The origin both wires start from is not a cross point.
    pub fn closest_cross_dist(&self, other: &Wire) -> Result<u64, Error> {
        let dist = self
            .segs
            .iter()
            .flat_map(|seg| other.segs.iter().filter_map(move |o_seg| seg.cross(o_seg)))
            .filter(|p| *p != Point::ORIGIN)
            .inspect(|p| debug!(point = %p, "found cross point"))
            .map(|p| p.mht_dist())
            .min()
            .ok_or(Error::NoIntersectionFound)?;

        info!(dist, "found closest cross point");
        Ok(dist)
    }

    /// The fewest steps both wires take together to reach one of their cross points.
    pub fn fewest_cross_steps(&self, other: &Wire) -> Result<u64, Error> {
        let mut min_steps: Option<u64> = None;
        let mut steps_before = 0u64;
        for seg in &self.segs {
            let mut o_steps_before = 0u64;
            for o_seg in &other.segs {
                if let Some(p) = seg.cross(o_seg).filter(|p| *p != Point::ORIGIN) {
                    let steps = steps_before
                        + seg.start.mht_dist_to(&p)
                        + o_steps_before
                        + o_seg.start.mht_dist_to(&p);
                    debug!(%seg, %o_seg, point = %p, steps, "found cross point");
                    min_steps = Some(min_steps.map_or(steps, |m| m.min(steps)));
                }

                o_steps_before += u64::from(o_seg.len);
            }

            steps_before += u64::from(seg.len);
        }

        let steps = min_steps.ok_or(Error::NoIntersectionFound)?;
        info!(steps, "found cross point with the fewest steps");
        Ok(steps)
    }
}

#[test]
fn test_parse_path() {
    assert_eq!(Path::try_from("U7"), Ok(Path::new(Direction::Up, 7)));
    assert_eq!(Path::try_from("D30"), Ok(Path::new(Direction::Down, 30)));
    assert_eq!(Path::try_from("L0"), Ok(Path::new(Direction::Left, 0)));
    assert_eq!(Path::try_from(" R83 "), Ok(Path::new(Direction::Right, 83)));
}

#[test]
fn test_parse_malformed_path() {
    for token in ["X5", "", "U", "5", "u5", "R5x", "R-5", "RR5", "R 5", "R99999999999"] {
        assert_eq!(
            Path::try_from(token),
            Err(Error::MalformedToken(token.trim().to_string())),
            "token({:?})",
            token
        );
    }
}

#[test]
fn test_path_dir_sets_orientation() {
    for (token, dir) in [
        ("U3", Direction::Up),
        ("D3", Direction::Down),
        ("L3", Direction::Left),
        ("R3", Direction::Right),
    ] {
        let path = Path::try_from(token).unwrap();
        assert_eq!(path.dir(), dir);
        assert_eq!(
            Segment::new(Point::ORIGIN, &path).is_horizontal(),
            dir.is_horizontal()
        );
    }
}

#[test]
fn test_direction_from_char() {
    assert_eq!(Direction::try_from('L'), Ok(Direction::Left));
    assert_eq!(Direction::try_from('X'), Err(Error::InvalidDirection('X')));
    assert!(Direction::Right.is_horizontal());
    assert!(!Direction::Up.is_horizontal());
}

#[test]
fn test_project_moves_along_one_axis() {
    let start = Point::new(3, -4);
    for dist in [1u32, 7, 100] {
        let n = i64::from(dist);
        let proj = |token: String| start.project(&Path::try_from(token.as_str()).unwrap());
        assert_eq!(proj(format!("U{}", dist)), Point::new(3, -4 + n));
        assert_eq!(proj(format!("D{}", dist)), Point::new(3, -4 - n));
        assert_eq!(proj(format!("L{}", dist)), Point::new(3 - n, -4));
        assert_eq!(proj(format!("R{}", dist)), Point::new(3 + n, -4));
    }
}

#[test]
fn test_wire_keeps_token_order() {
    let wire = "R8,U5,L5,D3".parse::<Wire>().unwrap();
    let ends = wire.segs().iter().map(|s| s.end()).collect::<Vec<_>>();
    assert_eq!(
        ends,
        vec![
            Point::new(8, 0),
            Point::new(8, 5),
            Point::new(3, 5),
            Point::new(3, 2)
        ]
    );
    assert_eq!(wire.segs()[0].start(), Point::ORIGIN);
    assert_eq!(
        wire.segs().iter().map(|s| s.is_horizontal()).collect::<Vec<_>>(),
        vec![true, false, true, false]
    );
    for (prev, next) in wire.segs().iter().zip(wire.segs().iter().skip(1)) {
        assert_eq!(prev.end(), next.start());
    }
}

#[test]
fn test_wire_len_is_sum_of_dists() {
    let tokens = ["R75", "D30", "R83", "U83", "L12", "D49", "R71", "U7", "L72"];
    let wire = Wire::from_tokens(tokens).unwrap();
    let dists = tokens
        .iter()
        .map(|t| Path::try_from(*t).unwrap().dist())
        .collect::<Vec<_>>();
    assert_eq!(
        wire.segs().iter().map(|s| s.len()).collect::<Vec<_>>(),
        dists
    );
    assert_eq!(wire.total_len(), 482);
}

#[test]
fn test_empty_wire() {
    assert!(matches!("".parse::<Wire>(), Err(Error::EmptyWire)));
    assert!(matches!("  ".parse::<Wire>(), Err(Error::EmptyWire)));
    assert!(matches!(
        Wire::from_tokens(Vec::<&str>::new()),
        Err(Error::EmptyWire)
    ));
    assert!(matches!(
        "R8,,U5".parse::<Wire>(),
        Err(Error::MalformedToken(s)) if s.is_empty()
    ));
    assert!(matches!(
        "R8,X5".parse::<Wire>(),
        Err(Error::MalformedToken(s)) if s == "X5"
    ));
}

#[test]
fn test_cross_is_symmetric() {
    let h_seg = Segment::new(Point::new(-2, 3), &Path::new(Direction::Right, 6));
    let v_seg = Segment::new(Point::new(1, 8), &Path::new(Direction::Down, 10));
    assert_eq!(h_seg.cross(&v_seg), Some(Point::new(1, 3)));
    assert_eq!(v_seg.cross(&h_seg), Some(Point::new(1, 3)));

    let far_seg = Segment::new(Point::new(9, 8), &Path::new(Direction::Down, 10));
    assert_eq!(h_seg.cross(&far_seg), None);
    assert_eq!(far_seg.cross(&h_seg), None);
}

#[test]
fn test_parallel_segments_never_cross() {
    let seg = Segment::new(Point::new(0, 2), &Path::new(Direction::Right, 10));
    let overlapped = Segment::new(Point::new(8, 2), &Path::new(Direction::Left, 4));
    assert_eq!(seg.cross(&overlapped), None);

    let seg = Segment::new(Point::new(1, 0), &Path::new(Direction::Up, 10));
    let overlapped = Segment::new(Point::new(1, 3), &Path::new(Direction::Up, 2));
    assert_eq!(seg.cross(&overlapped), None);
}

#[test]
fn test_segments_cross_at_shared_end() {
    let h_seg = Segment::new(Point::new(0, 5), &Path::new(Direction::Right, 4));
    let v_seg = Segment::new(Point::new(4, 5), &Path::new(Direction::Up, 3));
    assert_eq!(h_seg.cross(&v_seg), Some(Point::new(4, 5)));

    // Both wires start at the origin, so their first segments touch there.
    let up = Segment::new(Point::ORIGIN, &Path::new(Direction::Up, 7));
    let right = Segment::new(Point::ORIGIN, &Path::new(Direction::Right, 8));
    assert_eq!(up.cross(&right), Some(Point::ORIGIN));
}

#[test]
fn test_closest_cross_dist() {
    let cases = [
        ("R8,U5,L5,D3", "U7,R6,D4,L4", 6),
        (
            "R75,D30,R83,U83,L12,D49,R71,U7,L72",
            "U62,R66,U55,R34,D71,R55,D58,R83",
            159,
        ),
        (
            "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
            "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
            135,
        ),
    ];
    for (l, r, dist) in cases {
        let l_wire = l.parse::<Wire>().unwrap();
        let r_wire = r.parse::<Wire>().unwrap();
        assert_eq!(l_wire.closest_cross_dist(&r_wire), Ok(dist));
        assert_eq!(r_wire.closest_cross_dist(&l_wire), Ok(dist));
    }
}

#[test]
fn test_fewest_cross_steps() {
    let cases = [
        ("R8,U5,L5,D3", "U7,R6,D4,L4", 30),
        (
            "R75,D30,R83,U83,L12,D49,R71,U7,L72",
            "U62,R66,U55,R34,D71,R55,D58,R83",
            610,
        ),
        (
            "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
            "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
            410,
        ),
    ];
    for (l, r, steps) in cases {
        let l_wire = l.parse::<Wire>().unwrap();
        let r_wire = r.parse::<Wire>().unwrap();
        assert_eq!(l_wire.fewest_cross_steps(&r_wire), Ok(steps));
        assert_eq!(r_wire.fewest_cross_steps(&l_wire), Ok(steps));
    }
}

#[test]
fn test_no_cross_point() {
    let l_wire = "U5,R5".parse::<Wire>().unwrap();
    let r_wire = "D5,L5".parse::<Wire>().unwrap();
    assert_eq!(
        l_wire.closest_cross_dist(&r_wire),
        Err(Error::NoIntersectionFound)
    );
    assert_eq!(
        l_wire.fewest_cross_steps(&r_wire),
        Err(Error::NoIntersectionFound)
    );
}

#[test]
fn test_origin_is_not_cross_point() {
    let l_wire = "U5,R5".parse::<Wire>().unwrap();
    let r_wire = "R5,D5".parse::<Wire>().unwrap();
    assert_eq!(
        l_wire.segs()[0].cross(&r_wire.segs()[0]),
        Some(Point::ORIGIN)
    );
    assert_eq!(
        l_wire.closest_cross_dist(&r_wire),
        Err(Error::NoIntersectionFound)
    );
    assert_eq!(
        l_wire.fewest_cross_steps(&r_wire),
        Err(Error::NoIntersectionFound)
    );
}
