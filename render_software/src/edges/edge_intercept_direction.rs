///
/// Describes the direction of an edge intercept
///
/// * `Toggle` intercepts enter and leave the shape every time an edge is crossed.
/// * `DirectionOut` indicates an edge moving down the bitmap (increasing the intercept counter).
/// * `DirectionIn` indicates an edge moving up the bitmap (decreasing the intercept counter).
///
/// `Toggle` is used for the even-odd winding rule, and the `DirectionOut` and `DirectionIn` directions
/// for the non-zero winding rule.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeInterceptDirection {
    Toggle,
    DirectionOut,
    DirectionIn,
}

impl EdgeInterceptDirection {
    ///
    /// Updates an intercept count after crossing an edge in this direction
    ///
    #[inline]
    pub fn update_count(&self, count: isize) -> isize {
        match self {
            EdgeInterceptDirection::Toggle          => if count == 0 { 1 } else { 0 },
            EdgeInterceptDirection::DirectionOut    => count + 1,
            EdgeInterceptDirection::DirectionIn     => count - 1,
        }
    }
}
