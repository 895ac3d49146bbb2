use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line, LineString};
use geojson::{Feature, Position};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RingViolation {
    TooFewPoints(usize),
    MalformedPoint(usize),
    NotClosed,
    SelfIntersecting(Vec<Coord<f64>>),
}

impl fmt::Display for RingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingViolation::TooFewPoints(len) => write!(
                f,
                "A ring needs at least three points plus a closing point, got {len}"
            ),
            RingViolation::MalformedPoint(index) => {
                write!(f, "Point {index} has fewer than two axes")
            }
            RingViolation::NotClosed => {
                write!(f, "The first and last points must be the same to close the ring")
            }
            RingViolation::SelfIntersecting(kinks) => {
                write!(f, "The ring intersects itself at {kinks:?}")
            }
        }
    }
}

/// Extracts the ring subject to validation: the outer ring of the
/// first feature's Polygon geometry. Anything missing along the way
/// yields an empty ring, which fails validation deterministically.
pub fn first_ring(features: &[Feature]) -> Vec<Position> {
    let Some(feature) = features.first() else {
        return vec![];
    };
    let Some(geometry) = &feature.geometry else {
        return vec![];
    };
    match &geometry.value {
        geojson::Value::Polygon(rings) => rings.first().cloned().unwrap_or_default(),
        _ => vec![],
    }
}

pub fn validate_ring(ring: &[Position]) -> Result<(), RingViolation> {
    if ring.len() < 4 {
        return Err(RingViolation::TooFewPoints(ring.len()));
    }

    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(ring.len());
    for (index, position) in ring.iter().enumerate() {
        match (position.first(), position.get(1)) {
            (Some(&x), Some(&y)) => coords.push(Coord { x, y }),
            _ => return Err(RingViolation::MalformedPoint(index)),
        }
    }

    let first = coords[0];
    let last = coords[coords.len() - 1];
    if first.x != last.x || first.y != last.y {
        return Err(RingViolation::NotClosed);
    }

    let kinks = kinks(&LineString::new(coords));
    if !kinks.is_empty() {
        return Err(RingViolation::SelfIntersecting(kinks));
    }

    Ok(())
}

/// Points where the line-string crosses itself. Shared endpoints of
/// adjacent segments (including the closing segment meeting the first
/// one) don't count.
fn kinks(line_string: &LineString<f64>) -> Vec<Coord<f64>> {
    let lines: Vec<Line<f64>> = line_string.lines().collect();
    let mut res = vec![];
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let adjacent = j == i + 1 || (i == 0 && j == lines.len() - 1);
            match line_intersection(lines[i], lines[j]) {
                Some(LineIntersection::SinglePoint {
                    intersection,
                    is_proper,
                }) => {
                    if is_proper || !adjacent {
                        res.push(intersection);
                    }
                }
                Some(LineIntersection::Collinear { intersection }) => {
                    res.push(intersection.start);
                }
                None => {}
            }
        }
    }
    res
}
