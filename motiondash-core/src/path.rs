use crate::projection::NormalizedPoint;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(NormalizedPoint),
    LineTo(NormalizedPoint),
}

impl PathCommand {
    pub fn point(&self) -> NormalizedPoint {
        match self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => *point,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
        }
    }
}

/// A single connected polyline.
///
/// Displays as SVG path data (`M 0 100 L 20 50`); an empty path displays as
/// an empty string and serializes the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn points(&self) -> impl Iterator<Item = NormalizedPoint> + '_ {
        self.commands.iter().map(PathCommand::point)
    }
}

impl fmt::Display for VectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl Serialize for VectorPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Moves to the first point, then draws a line to each following point.
pub fn build_path(points: &[NormalizedPoint]) -> VectorPath {
    let commands = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            if idx == 0 {
                PathCommand::MoveTo(*point)
            } else {
                PathCommand::LineTo(*point)
            }
        })
        .collect();
    VectorPath { commands }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_move_then_lines_in_order() {
        let points: Vec<NormalizedPoint> = vec![(0.0, 100.0).into(), (20.0, 50.0).into(), (40.0, 0.0).into()];
        let path = build_path(&points);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(NormalizedPoint::new(0.0, 100.0)),
                PathCommand::LineTo(NormalizedPoint::new(20.0, 50.0)),
                PathCommand::LineTo(NormalizedPoint::new(40.0, 0.0)),
            ]
        );
        assert_eq!(path.to_string(), "M 0 100 L 20 50 L 40 0");
    }

    #[test]
    fn empty_points_give_empty_path() {
        let path = build_path(&[]);
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn duplicate_points_are_kept() {
        let point = NormalizedPoint::new(10.0, 10.0);
        let path = build_path(&[point, point, point]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "M 10 10 L 10 10 L 10 10");
    }

    #[test]
    fn serializes_as_path_data() {
        let path = build_path(&[NormalizedPoint::new(0.0, 100.0), NormalizedPoint::new(2.5, 97.5)]);
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            "\"M 0 100 L 2.5 97.5\""
        );
    }
}
