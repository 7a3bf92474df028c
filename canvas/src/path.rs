use flo_curves::geo::*;

///
/// A subpath made up of straight line segments
///
/// Closed subpaths have an implicit line from the last point back to the first point
///
#[derive(Clone, PartialEq, Debug)]
pub struct Subpath {
    /// The points making up this subpath
    pub points: Vec<Coord2>,

    /// True if this subpath should be closed
    pub closed: bool,
}

impl Subpath {
    ///
    /// Creates a closed subpath from a set of points
    ///
    pub fn closed(points: impl IntoIterator<Item=Coord2>) -> Subpath {
        Subpath {
            points: points.into_iter().collect(),
            closed: true,
        }
    }

    ///
    /// Creates an open subpath from a set of points
    ///
    pub fn open(points: impl IntoIterator<Item=Coord2>) -> Subpath {
        Subpath {
            points: points.into_iter().collect(),
            closed: false,
        }
    }

    ///
    /// Returns the points in this subpath with any consecutive duplicates removed
    ///
    /// For closed subpaths, the final point is also removed if it's the same as the first point
    /// (the closing line is implicit)
    ///
    pub fn distinct_points(&self) -> Vec<Coord2> {
        let mut result: Vec<Coord2> = Vec::with_capacity(self.points.len());

        for point in self.points.iter() {
            if result.last() != Some(point) {
                result.push(*point);
            }
        }

        if self.closed && result.len() > 1 && result.first() == result.last() {
            result.pop();
        }

        result
    }

    ///
    /// Returns the line segments that make up this subpath (including the closing line for closed subpaths)
    ///
    pub fn segments(&self) -> Vec<(Coord2, Coord2)> {
        let points      = self.distinct_points();
        let mut result  = points.windows(2).map(|line| (line[0], line[1])).collect::<Vec<_>>();

        if self.closed && points.len() > 2 {
            result.push((points[points.len()-1], points[0]));
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closed_square_has_four_segments() {
        let square = Subpath::closed(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 1.0), Coord2(0.0, 0.0)]);

        assert!(square.segments().len() == 4, "Segments: {:?}", square.segments());
    }

    #[test]
    fn open_line_has_no_closing_segment() {
        let line = Subpath::open(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)]);

        assert!(line.segments() == vec![(Coord2(0.0, 0.0), Coord2(1.0, 0.0)), (Coord2(1.0, 0.0), Coord2(1.0, 1.0))], "Segments: {:?}", line.segments());
    }
}
