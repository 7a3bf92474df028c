use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Transform2D {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a translation transform
    ///
    pub fn translate(x: f64, y: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a scaling transform
    ///
    pub fn scale(x: f64, y: f64) -> Transform2D {
        Transform2D([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a rotation transform about the origin
    ///
    /// With the y axis pointing down (as it does for a bitmap), positive angles rotate clockwise
    ///
    pub fn rotate_degrees(degrees: f64) -> Transform2D {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();

        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a rotation about a particular point
    ///
    pub fn rotate_degrees_about(degrees: f64, center_x: f64, center_y: f64) -> Transform2D {
        Transform2D::translate(center_x, center_y) * Transform2D::rotate_degrees(degrees) * Transform2D::translate(-center_x, -center_y)
    }

    ///
    /// Applies this transformation to a point
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let Transform2D(t) = self;

        (x*t[0][0] + y*t[0][1] + t[0][2], x*t[1][0] + y*t[1][1] + t[1][2])
    }

    ///
    /// Computes the inverse of this transformation, if it exists
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let Transform2D(t) = self;

        let det = t[0][0]*t[1][1] - t[0][1]*t[1][0];
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0/det;
        let a       =  t[1][1] * inv_det;
        let b       = -t[0][1] * inv_det;
        let c       = -t[1][0] * inv_det;
        let d       =  t[0][0] * inv_det;

        // The translation is the negated original translation with the inverted linear part applied
        let tx      = -(a*t[0][2] + b*t[1][2]);
        let ty      = -(c*t[0][2] + d*t[1][2]);

        Some(Transform2D([[a, b, tx], [c, d, ty], [0.0, 0.0, 1.0]]))
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut result = [[0.0; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}

impl Default for Transform2D {
    fn default() -> Self { Transform2D::identity() }
}
