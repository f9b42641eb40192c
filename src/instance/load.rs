//! Points-file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::InstanceError;
use super::point::Point;

/// Reads `id x y` records, one per line.
///
/// The id token is discarded; a point's index in the returned list is its
/// identity from here on. Any line that is not exactly three whitespace-
/// separated tokens with integer coordinates fails the whole load.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, InstanceError> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (Some(_id), Some(x), Some(y), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(InstanceError::Format {
                line: idx + 1,
                reason: "expected exactly three tokens `id x y`".to_string(),
            });
        };
        let x: i64 = x.parse().map_err(|_| InstanceError::Format {
            line: idx + 1,
            reason: format!("x coordinate `{x}` is not an integer"),
        })?;
        let y: i64 = y.parse().map_err(|_| InstanceError::Format {
            line: idx + 1,
            reason: format!("y coordinate `{y}` is not an integer"),
        })?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Reads a points file from disk. See [`read_points`].
pub fn read_points_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, InstanceError> {
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_points_well_formed() {
        let input = "1 0 0\n2 0 10\n3 10 10\n4 10 0\n";
        let points = read_points(Cursor::new(input)).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], Point::new(0, 10));
        assert_eq!(points[3], Point::new(10, 0));
    }

    #[test]
    fn test_read_points_negative_coordinates() {
        let points = read_points(Cursor::new("a -3 -4\n")).unwrap();
        assert_eq!(points[0], Point::new(-3, -4));
    }

    #[test]
    fn test_read_points_rejects_missing_token() {
        let err = read_points(Cursor::new("1 0 0\n2 5\n")).unwrap_err();
        match err {
            InstanceError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_points_rejects_extra_token() {
        let err = read_points(Cursor::new("1 0 0 extra\n")).unwrap_err();
        assert!(matches!(err, InstanceError::Format { line: 1, .. }));
    }

    #[test]
    fn test_read_points_rejects_non_integer_coordinate() {
        let err = read_points(Cursor::new("1 3.5 0\n")).unwrap_err();
        match err {
            InstanceError::Format { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("3.5"), "reason should name the token: {reason}");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_points_rejects_blank_line() {
        let err = read_points(Cursor::new("1 0 0\n\n3 1 1\n")).unwrap_err();
        assert!(matches!(err, InstanceError::Format { line: 2, .. }));
    }

    #[test]
    fn test_read_points_file_missing() {
        let err = read_points_file("/nonexistent/points.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
