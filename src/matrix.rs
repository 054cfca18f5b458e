use crate::vector::Vector;

/// A 3x3 matrix stored row-major. Indexing follows (column, row) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    m: [f64; 9],
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix {
            m: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl Matrix {
    pub fn identity() -> Matrix {
        Matrix {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with_values(
        v00: f64,
        v01: f64,
        v02: f64,
        v10: f64,
        v11: f64,
        v12: f64,
        v20: f64,
        v21: f64,
        v22: f64,
    ) -> Matrix {
        Matrix {
            m: [v00, v01, v02, v10, v11, v12, v20, v21, v22],
        }
    }

    /// Assemble a matrix from three column vectors.
    pub fn new_from_columns(c0: &Vector, c1: &Vector, c2: &Vector) -> Matrix {
        Matrix {
            m: [c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * 3 + x
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        let i = self.index(x, y);
        if i < 9 {
            self.m[i]
        } else {
            panic!("Invalid matrix coordinates");
        }
    }

    pub fn set(&mut self, x: usize, y: usize, v: f64) {
        let i = self.index(x, y);
        if i < 9 {
            self.m[i] = v;
        } else {
            panic!("Invalid matrix coordinates");
        }
    }

    pub fn column(&self, x: usize) -> Vector {
        Vector::new(self.get(x, 0), self.get(x, 1), self.get(x, 2))
    }

    pub fn multiply_vector(&self, other: &Vector) -> Vector {
        let x = other.x * self.m[0] + other.y * self.m[1] + other.z * self.m[2];
        let y = other.x * self.m[3] + other.y * self.m[4] + other.z * self.m[5];
        let z = other.x * self.m[6] + other.y * self.m[7] + other.z * self.m[8];
        Vector::new(x, y, z)
    }

    pub fn determinant(&self) -> f64 {
        let v = &self.m;
        let a0 = v[0] * v[4] * v[8];
        let a1 = v[1] * v[5] * v[6];
        let a2 = v[2] * v[3] * v[7];

        let s0 = v[2] * v[4] * v[6];
        let s1 = v[1] * v[3] * v[8];
        let s2 = v[0] * v[5] * v[7];

        a0 + a1 + a2 - s0 - s1 - s2
    }

    /// Exact solve of `self * s = w` by Cramer's rule. Returns `None` when
    /// the matrix is singular (determinant is zero or non-finite).
    pub fn solve(&self, w: &Vector) -> Option<Vector> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let s = Vector::new(
            self.replace_column(0, w).determinant() / det,
            self.replace_column(1, w).determinant() / det,
            self.replace_column(2, w).determinant() / det,
        );
        if s.is_finite() {
            Some(s)
        } else {
            None
        }
    }

    fn replace_column(&self, x: usize, c: &Vector) -> Matrix {
        let mut r = self.clone();
        r.set(x, 0, c.x);
        r.set(x, 1, c.y);
        r.set(x, 2, c.z);
        r
    }

    /// Multiply each column elementwise by the matching component of `s`.
    pub fn scale_columns(&self, s: &Vector) -> Matrix {
        let v = &self.m;
        Matrix {
            m: [
                v[0] * s.x,
                v[1] * s.y,
                v[2] * s.z,
                v[3] * s.x,
                v[4] * s.y,
                v[5] * s.z,
                v[6] * s.x,
                v[7] * s.y,
                v[8] * s.z,
            ],
        }
    }
}
