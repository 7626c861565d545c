use crate::geometry::Region;
use crate::math::Point2;

/// One drawing command of a clip path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    Close,
}

/// Flattens a region into move/line/close commands, one subpath per ring.
///
/// Rings are emitted outer first. Filling the result with the even-odd rule
/// reproduces the region; rings with fewer than three vertices are skipped.
#[must_use]
pub fn to_path_commands(region: &Region) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    for ring in region.rings() {
        if ring.is_empty() {
            continue;
        }
        let mut points = ring.points().iter();
        if let Some(&first) = points.next() {
            commands.push(PathCommand::MoveTo(first));
        }
        commands.extend(points.map(|&p| PathCommand::LineTo(p)));
        commands.push(PathCommand::Close);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_region_has_no_commands() {
        assert!(to_path_commands(&Region::Empty).is_empty());
    }

    #[test]
    fn difference_emits_two_subpaths() {
        let region = Region::Difference {
            outer: Polygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]),
            hole: Polygon::new(vec![p(2.0, 2.0), p(2.0, 0.0), p(4.0, 0.0)]),
        };
        let commands = to_path_commands(&region);
        assert_eq!(commands.len(), 9);
        assert_eq!(commands[0], PathCommand::MoveTo(p(0.0, 0.0)));
        assert_eq!(commands[4], PathCommand::Close);
        assert_eq!(commands[5], PathCommand::MoveTo(p(2.0, 2.0)));
        assert_eq!(commands[8], PathCommand::Close);
    }

    #[test]
    fn empty_hole_is_skipped() {
        let region = Region::Difference {
            outer: Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]),
            hole: Polygon::empty(),
        };
        let closes = to_path_commands(&region)
            .into_iter()
            .filter(|c| *c == PathCommand::Close)
            .count();
        assert_eq!(closes, 1);
    }
}
