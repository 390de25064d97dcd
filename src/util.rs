use std::io::BufRead;

use crate::coord::CoordNum;
use crate::error::Result;
use crate::geom::Point;

/// Read whitespace-separated coordinate pairs until the stream runs out or a token
/// fails to parse. Pairs may span line breaks.
///
/// Loading is best effort: the first bad token stops it silently and everything
/// read before it is kept, with a trailing unpaired coordinate dropped. I/O errors
/// do propagate.
pub(crate) fn read_points<N: CoordNum, R: BufRead>(reader: R) -> Result<Vec<Point<N>>> {
    let mut points = Vec::new();
    let mut pending = None;
    'read: for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = match token.parse::<f64>().ok().and_then(num_traits::cast::<f64, N>) {
                Some(value) => value,
                None => break 'read,
            };
            match pending.take() {
                None => pending = Some(value),
                Some(x) => points.push(Point::new(x, value)),
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(input: &str) -> Vec<Point<f64>> {
        read_points(input.as_bytes()).unwrap()
    }

    #[test]
    fn reads_pairs_across_lines() {
        assert_eq!(
            parse("2 3 5\n4\n\n  9\t6 "),
            vec![
                Point::new(2.0, 3.0),
                Point::new(5.0, 4.0),
                Point::new(9.0, 6.0)
            ]
        );
    }

    #[test]
    fn stops_silently_at_first_bad_token() {
        assert_eq!(
            parse("2 3 5 4 oops 9 6"),
            vec![Point::new(2.0, 3.0), Point::new(5.0, 4.0)]
        );
        // A bad token in x position drops the pair it would have started.
        assert_eq!(parse("1 2\nx 4"), vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn drops_trailing_unpaired_coordinate() {
        assert_eq!(parse("1 2 3"), vec![Point::new(1.0, 2.0)]);
        assert_eq!(parse("7"), vec![]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("  \n \t\n"), vec![]);
    }
}
