//! Incremental quickhull over 3D point clouds.

use std::collections::HashSet;

use crate::vector::Vector;

/// Tolerance for the outside-of-plane predicate.
pub const EPSILON: f64 = 1e-9;

/// An infinite plane defined by a point and an outward unit normal.
#[derive(Debug, Clone, Copy)]
pub struct HullPlane {
    pub point: Vector,
    pub normal: Vector,
}

impl HullPlane {
    pub fn new(point: Vector, normal: Vector) -> HullPlane {
        let unit = normal.unit_vector();
        let normal = if unit.len() == 0.0 {
            // Degenerate face, callers reject these separately
            Vector::new(0.0, 0.0, 1.0)
        } else {
            unit
        };
        HullPlane { point, normal }
    }

    /// Signed distance from `p` to the plane. Positive is outside.
    #[inline]
    pub fn signed_distance(&self, p: &Vector) -> f64 {
        p.subtract(&self.point).dot_product(&self.normal)
    }
}

/// A triangular hull face. Vertex indices wind counter-clockwise when
/// viewed from outside.
#[derive(Debug, Clone)]
struct Face {
    v: [usize; 3],
    plane: HullPlane,
}

impl Face {
    fn new(v0: usize, v1: usize, v2: usize, points: &[Vector]) -> Face {
        let normal = triangle_normal(&points[v0], &points[v1], &points[v2]);
        Face {
            v: [v0, v1, v2],
            plane: HullPlane::new(points[v0], normal),
        }
    }

    fn flip(&mut self) {
        self.v.swap(0, 1);
        self.plane.normal = self.plane.normal.scale(-1.0);
    }

    fn contains_edge(&self, e0: usize, e1: usize) -> bool {
        for i in 0..3 {
            let j = (i + 1) % 3;
            if (self.v[i] == e0 && self.v[j] == e1) || (self.v[i] == e1 && self.v[j] == e0) {
                return true;
            }
        }
        false
    }
}

/// Convex hull of a 3D point cloud. `simplices` and `vertex_indices`
/// index into the cloud the hull was computed from.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    pub simplices: Vec<[usize; 3]>,
    pub vertex_indices: Vec<usize>,
    planes: Vec<HullPlane>,
}

impl ConvexHull {
    /// Returns `None` for degenerate input: fewer than four points, or a
    /// coincident/collinear/coplanar cloud.
    pub fn compute(points: &[Vector]) -> Option<ConvexHull> {
        if points.len() < 4 {
            return None;
        }
        quickhull(points)
    }

    /// True when `p` lies inside the hull or on its boundary (within
    /// [`EPSILON`]).
    pub fn contains(&self, p: &Vector) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(p) <= EPSILON)
    }

    /// Largest signed distance from `p` to any face plane. Negative means
    /// strictly inside.
    pub fn max_signed_distance(&self, p: &Vector) -> f64 {
        self.planes
            .iter()
            .map(|plane| plane.signed_distance(p))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Resolve the hull faces to point triples against the source cloud.
    pub fn faces(&self, points: &[Vector]) -> Vec<[Vector; 3]> {
        self.simplices
            .iter()
            .map(|s| [points[s[0]], points[s[1]], points[s[2]]])
            .collect()
    }

    pub fn face_count(&self) -> usize {
        self.simplices.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_indices.len()
    }

    pub fn planes(&self) -> &[HullPlane] {
        &self.planes
    }
}

fn quickhull(points: &[Vector]) -> Option<ConvexHull> {
    let (mut faces, mut outside_sets, interior_point) = find_initial_simplex(points)?;

    let mut i = 0;
    while i < faces.len() {
        if outside_sets[i].is_empty() {
            i += 1;
            continue;
        }

        // Furthest outside point of this face becomes the next hull vertex
        let furthest_idx = find_furthest_point(&faces[i], &outside_sets[i], points);
        let eye_point = points[furthest_idx];

        let visible_faces: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.plane.signed_distance(&eye_point) > EPSILON)
            .map(|(idx, _)| idx)
            .collect();

        if visible_faces.is_empty() {
            i += 1;
            continue;
        }

        let horizon = find_horizon_edges(&faces, &visible_faces);

        let mut all_outside: Vec<usize> = Vec::new();
        for &face_idx in &visible_faces {
            all_outside.extend(&outside_sets[face_idx]);
        }
        all_outside.retain(|&idx| idx != furthest_idx);

        // Remove visible faces in reverse order to preserve indices
        let mut sorted_visible = visible_faces;
        sorted_visible.sort_unstable_by(|a, b| b.cmp(a));
        for &face_idx in &sorted_visible {
            faces.swap_remove(face_idx);
            outside_sets.swap_remove(face_idx);
        }

        // Bridge the horizon to the new vertex
        for (v0, v1) in horizon {
            let mut new_face = Face::new(v0, v1, furthest_idx, points);
            if new_face.plane.signed_distance(&interior_point) > 0.0 {
                new_face.flip();
            }
            faces.push(new_face);
            outside_sets.push(Vec::new());
        }

        // Reassign orphaned points against every remaining face; a point
        // can still be outside a face that was not visible from the eye
        for &pt_idx in &all_outside {
            let pt = points[pt_idx];
            for (face_idx, face) in faces.iter().enumerate() {
                if face.plane.signed_distance(&pt) > EPSILON {
                    outside_sets[face_idx].push(pt_idx);
                    break;
                }
            }
        }

        // Face indices changed, rescan
        i = 0;
    }

    let mut on_hull = vec![false; points.len()];
    for face in &faces {
        on_hull[face.v[0]] = true;
        on_hull[face.v[1]] = true;
        on_hull[face.v[2]] = true;
    }
    let vertex_indices: Vec<usize> = on_hull
        .iter()
        .enumerate()
        .filter(|&(_, v)| *v)
        .map(|(idx, _)| idx)
        .collect();

    Some(ConvexHull {
        simplices: faces.iter().map(|f| f.v).collect(),
        planes: faces.iter().map(|f| f.plane).collect(),
        vertex_indices,
    })
}

/// Initial tetrahedron: faces, their outside point sets and the centroid.
#[allow(clippy::type_complexity)]
fn find_initial_simplex(points: &[Vector]) -> Option<(Vec<Face>, Vec<Vec<usize>>, Vector)> {
    let n = points.len();

    // Extremal points along each axis
    let mut extremals = [0usize; 6];
    for i in 1..n {
        for axis in 0..3 {
            if points[i][axis] < points[extremals[axis * 2]][axis] {
                extremals[axis * 2] = i;
            }
            if points[i][axis] > points[extremals[axis * 2 + 1]][axis] {
                extremals[axis * 2 + 1] = i;
            }
        }
    }

    // Most distant extremal pair forms the base edge
    let mut best_pair = (extremals[0], extremals[1]);
    let mut best_dist = 0.0f64;
    for i in 0..extremals.len() {
        for j in (i + 1)..extremals.len() {
            let d = points[extremals[i]].distance_to(&points[extremals[j]]);
            if d > best_dist {
                best_dist = d;
                best_pair = (extremals[i], extremals[j]);
            }
        }
    }
    if best_dist < EPSILON {
        return None; // All points coincident
    }
    let (p0, p1) = best_pair;

    // Third point: furthest from the base line
    let line_dir = points[p1].subtract(&points[p0]);
    let mut p2 = 0;
    let mut max_dist = 0.0f64;
    for (i, point) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let d = point_line_distance(point, &points[p0], &line_dir);
        if d > max_dist {
            max_dist = d;
            p2 = i;
        }
    }
    if max_dist < EPSILON {
        return None; // All points collinear
    }

    // Fourth point: furthest from the base plane
    let plane = HullPlane::new(points[p0], triangle_normal(&points[p0], &points[p1], &points[p2]));
    let mut p3 = 0;
    let mut max_dist = 0.0f64;
    for (i, point) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let d = plane.signed_distance(point).abs();
        if d > max_dist {
            max_dist = d;
            p3 = i;
        }
    }
    if max_dist < EPSILON {
        return None; // All points coplanar
    }

    let centroid = points[p0]
        .add(&points[p1])
        .add(&points[p2])
        .add(&points[p3])
        .scale(0.25);

    let mut faces = vec![
        Face::new(p0, p1, p2, points),
        Face::new(p0, p2, p3, points),
        Face::new(p0, p3, p1, points),
        Face::new(p1, p3, p2, points),
    ];
    for face in &mut faces {
        if face.plane.signed_distance(&centroid) > 0.0 {
            face.flip();
        }
    }

    let initial_verts = [p0, p1, p2, p3];
    let mut outside_sets: Vec<Vec<usize>> = vec![Vec::new(); 4];
    for i in 0..n {
        if initial_verts.contains(&i) {
            continue;
        }
        for (face_idx, face) in faces.iter().enumerate() {
            if face.plane.signed_distance(&points[i]) > EPSILON {
                outside_sets[face_idx].push(i);
                break;
            }
        }
    }

    Some((faces, outside_sets, centroid))
}

fn find_furthest_point(face: &Face, outside_set: &[usize], points: &[Vector]) -> usize {
    let mut best_idx = outside_set[0];
    let mut best_dist = face.plane.signed_distance(&points[best_idx]);
    for &idx in outside_set.iter().skip(1) {
        let d = face.plane.signed_distance(&points[idx]);
        if d > best_dist {
            best_dist = d;
            best_idx = idx;
        }
    }
    best_idx
}

/// Edges shared between a visible face and a non-visible one, reversed so
/// new faces built on them wind outward.
fn find_horizon_edges(faces: &[Face], visible_indices: &[usize]) -> Vec<(usize, usize)> {
    let visible_set: HashSet<usize> = visible_indices.iter().copied().collect();
    let mut horizon = Vec::new();

    for &face_idx in visible_indices {
        let face = &faces[face_idx];
        for i in 0..3 {
            let j = (i + 1) % 3;
            let edge = (face.v[i], face.v[j]);

            let edge_on_horizon = faces
                .iter()
                .enumerate()
                .filter(|(other_idx, _)| !visible_set.contains(other_idx))
                .any(|(_, other_face)| other_face.contains_edge(edge.0, edge.1));

            if edge_on_horizon {
                horizon.push((edge.1, edge.0));
            }
        }
    }

    horizon
}

fn triangle_normal(p0: &Vector, p1: &Vector, p2: &Vector) -> Vector {
    let u = p1.subtract(p0);
    let v = p2.subtract(p0);
    u.cross_product(&v)
}

fn point_line_distance(point: &Vector, line_point: &Vector, line_dir: &Vector) -> f64 {
    let v = point.subtract(line_point);
    let dir_len = line_dir.len();
    if dir_len < EPSILON {
        return 0.0;
    }
    v.cross_product(line_dir).len() / dir_len
}
