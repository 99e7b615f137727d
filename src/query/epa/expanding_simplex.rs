//! The polytope grown by the Expanding Polytope Algorithm.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::epa::{EpaOptions, EPA_MAX_FACES, EPA_MAX_VERTICES};
use crate::query::gjk::{eps_tol, CsoPoint, MinkowskiSum, Simplex};
use crate::query::EpaError;
use crate::utils::{self, Plane};
use arrayvec::ArrayVec;
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs(), .sqrt()

bitflags::bitflags! {
    /// Modes of an [`ExpandingSimplex`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct ExpandingSimplexFlags: u8 {
        /// Faces are not given an origin distance and are not ordered in the heap.
        ///
        /// The swept EPA walks the polytope along a ray and never needs the closest face.
        const SKIP_DISTANCE = 1 << 0;
    }
}

/// A triangular face of an [`ExpandingSimplex`].
///
/// The vertices are wound counter-clockwise when seen from outside the polytope. The face
/// across the edge `pts[i] -> pts[(i + 1) % 3]` is `adj[i]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpandingSimplexTriangle {
    pts: [usize; 3],
    adj: [usize; 3],
    normal: UnitVector<Real>,
    plane_distance: Real,
    distance: Real,
    bcoords: [Real; 3],
    stamp: u32,
    degenerate: bool,
    live: bool,
}

impl ExpandingSimplexTriangle {
    fn new(pts: [usize; 3], adj: [usize; 3], stamp: u32) -> Self {
        ExpandingSimplexTriangle {
            pts,
            adj,
            normal: Vector::z_axis(),
            plane_distance: 0.0,
            distance: 0.0,
            bcoords: [1.0 / 3.0; 3],
            stamp,
            degenerate: false,
            live: true,
        }
    }

    /// The indices of this face's vertices.
    #[inline]
    pub fn pts(&self) -> [usize; 3] {
        self.pts
    }

    /// The indices of the faces sharing an edge with this one.
    #[inline]
    pub fn adj(&self) -> [usize; 3] {
        self.adj
    }

    /// The outward unit normal of this face.
    #[inline]
    pub fn normal(&self) -> UnitVector<Real> {
        self.normal
    }

    /// The signed distance from the origin to this face's plane, along its normal.
    #[inline]
    pub fn plane_distance(&self) -> Real {
        self.plane_distance
    }

    /// The distance from the origin to this face, which is the heap key.
    ///
    /// This is the plane distance if the origin projects inside the triangle, and the
    /// distance to the closest edge otherwise.
    #[inline]
    pub fn distance(&self) -> Real {
        self.distance
    }

    /// The barycentric coordinates of the projection of the origin on this face's plane.
    #[inline]
    pub fn bcoords(&self) -> [Real; 3] {
        self.bcoords
    }

    /// Does this face have a (near) zero area?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// The local index `i` of the edge `pts[i] -> pts[i + 1]` going from `a` to `b`.
    fn edge_index(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&i| self.pts[i] == a && self.pts[(i + 1) % 3] == b)
    }

    fn contains(&self, vertex: usize) -> bool {
        self.pts.contains(&vertex)
    }
}

/// A convex polytope inside the Minkowski difference of two shapes, enclosing the origin.
///
/// Vertices and faces live in fixed-capacity arenas and refer to each other by index. Removed
/// face slots are recycled. Unless [`ExpandingSimplexFlags::SKIP_DISTANCE`] is set, live faces
/// are kept in a binary min-heap ordered by their distance to the origin, ties going to the
/// most recently inserted or rotated face.
///
/// Distances are compared exactly. Two faces only tie if their distances are bit-for-bit equal:
/// a comparison up to a tolerance would not be transitive and could not order a heap.
#[derive(Clone, Debug)]
pub struct ExpandingSimplex {
    vertices: ArrayVec<CsoPoint, EPA_MAX_VERTICES>,
    faces: ArrayVec<ExpandingSimplexTriangle, EPA_MAX_FACES>,
    free_faces: ArrayVec<usize, EPA_MAX_FACES>,
    heap: ArrayVec<usize, EPA_MAX_FACES>,
    heap_index: [usize; EPA_MAX_FACES],
    horizon: ArrayVec<(usize, usize), EPA_MAX_FACES>,
    face_capacity: usize,
    next_stamp: u32,
    flags: ExpandingSimplexFlags,
}

impl ExpandingSimplex {
    /// Builds the initial tetrahedron from a GJK simplex.
    ///
    /// See [`Self::init`].
    pub fn new<M: ?Sized + MinkowskiSum>(
        simplex: &Simplex,
        minkowski: &M,
        options: &EpaOptions,
        flags: ExpandingSimplexFlags,
    ) -> Result<Self, EpaError> {
        let mut result = ExpandingSimplex {
            vertices: ArrayVec::new(),
            faces: ArrayVec::new(),
            free_faces: ArrayVec::new(),
            heap: ArrayVec::new(),
            heap_index: [0; EPA_MAX_FACES],
            horizon: ArrayVec::new(),
            face_capacity: EPA_MAX_FACES,
            next_stamp: 0,
            flags,
        };

        result.init(simplex, minkowski, options)?;
        Ok(result)
    }

    /// Resets this polytope to the tetrahedron built from `simplex`.
    ///
    /// The points of `simplex` are first reduced to an affinely independent subset. Missing
    /// dimensions are then recovered by querying `minkowski` along directions perpendicular to
    /// the current points. Fails with [`EpaError::DegenerateSimplex`] if no full tetrahedron
    /// can be built or if it does not contain the origin, and with
    /// [`EpaError::ArenaExhausted`] if `options.face_capacity` is smaller than four.
    pub fn init<M: ?Sized + MinkowskiSum>(
        &mut self,
        simplex: &Simplex,
        minkowski: &M,
        options: &EpaOptions,
    ) -> Result<(), EpaError> {
        self.vertices.clear();
        self.faces.clear();
        self.free_faces.clear();
        self.heap.clear();
        self.horizon.clear();
        self.face_capacity = options.face_capacity.min(EPA_MAX_FACES);
        self.next_stamp = 0;

        let mut pts = initial_tetrahedron(simplex, minkowski)?;

        let dp1 = pts[1].point - pts[0].point;
        let dp2 = pts[2].point - pts[0].point;
        let dp3 = pts[3].point - pts[0].point;

        if dp1.cross(&dp2).dot(&dp3) > 0.0 {
            pts.swap(1, 2)
        }

        for pt in pts {
            let _ = self.push_vertex(pt)?;
        }

        let _ = self.add_triangle([0, 1, 2], [3, 1, 2])?;
        let _ = self.add_triangle([1, 3, 2], [3, 2, 0])?;
        let _ = self.add_triangle([0, 2, 3], [0, 1, 3])?;
        let _ = self.add_triangle([0, 3, 1], [2, 1, 0])?;

        if self
            .faces
            .iter()
            .any(|face| face.degenerate || face.plane_distance < -options.tolerance)
        {
            log::debug!("EPA: the initial tetrahedron does not contain the origin.");
            return Err(EpaError::DegenerateSimplex);
        }

        Ok(())
    }

    /// The mode flags of this polytope.
    #[inline]
    pub fn flags(&self) -> ExpandingSimplexFlags {
        self.flags
    }

    /// All the vertices of this polytope, including those no longer referenced by a face.
    #[inline]
    pub fn vertices(&self) -> &[CsoPoint] {
        &self.vertices
    }

    /// The face stored at `id`, live or not.
    #[inline]
    pub fn face(&self, id: usize) -> &ExpandingSimplexTriangle {
        &self.faces[id]
    }

    /// Iterates through the live faces of this polytope, with their indices.
    pub fn faces(&self) -> impl Iterator<Item = (usize, &ExpandingSimplexTriangle)> {
        self.faces.iter().enumerate().filter(|(_, face)| face.live)
    }

    /// The number of live faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len() - self.free_faces.len()
    }

    /// Is `id` the index of a live face?
    #[inline]
    pub fn is_live(&self, id: usize) -> bool {
        self.faces.get(id).is_some_and(|face| face.live)
    }

    /// The face closest to the origin, i.e., the root of the heap.
    ///
    /// Always `None` in [`ExpandingSimplexFlags::SKIP_DISTANCE`] mode.
    #[inline]
    pub fn closest_face(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// The position of the live face `face` in the heap.
    pub fn find_heap_index(&self, face: usize) -> Option<usize> {
        if self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) || !self.is_live(face) {
            None
        } else {
            Some(self.heap_index[face])
        }
    }

    /// The plane supporting the face `id`.
    pub fn face_plane(&self, id: usize) -> Plane {
        let face = &self.faces[id];
        Plane::new(face.normal, &self.vertices[face.pts[0]].point)
    }

    /// Blends the points of both shapes generating the vertices of the face `id` with the
    /// barycentric coordinates `bcoords`.
    pub fn blend_origins(&self, id: usize, bcoords: &[Real; 3]) -> (Point<Real>, Point<Real>) {
        let [a, b, c] = self.faces[id].pts.map(|i| self.vertices[i]);
        let pt1 = utils::evaluate_barycentric(&a.orig1, &b.orig1, &c.orig1, bcoords);
        let pt2 = utils::evaluate_barycentric(&a.orig2, &b.orig2, &c.orig2, bcoords);
        (pt1, pt2)
    }

    /// Adds a face with the given vertices and neighbors, and pushes it on the heap.
    ///
    /// Fails with [`EpaError::ArenaExhausted`] if the polytope already has as many live faces
    /// as its capacity allows.
    pub(crate) fn add_triangle(
        &mut self,
        pts: [usize; 3],
        adj: [usize; 3],
    ) -> Result<usize, EpaError> {
        if self.num_faces() >= self.face_capacity {
            log::debug!("EPA: face capacity of {} reached.", self.face_capacity);
            return Err(EpaError::ArenaExhausted);
        }

        let face = ExpandingSimplexTriangle::new(pts, adj, self.bump_stamp());
        let id = if let Some(id) = self.free_faces.pop() {
            self.faces[id] = face;
            id
        } else {
            self.faces
                .try_push(face)
                .map_err(|_| EpaError::ArenaExhausted)?;
            self.faces.len() - 1
        };

        self.update_geometry(id);

        if !self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) {
            self.heap_push(id);
        }

        Ok(id)
    }

    /// Adds `point` to the polytope, replacing every face it can see by a fan of faces joining
    /// it to the horizon.
    ///
    /// The visible region is found by walking the face adjacency from `seed_face`, which must
    /// be visible from `point`. Returns the index of the first face of the fan. On error, the
    /// polytope is left in an unspecified state and must be re-initialized before reuse.
    pub fn add_point(&mut self, point: CsoPoint, seed_face: usize) -> Result<usize, EpaError> {
        if !self.is_live(seed_face) || !self.can_be_seen_by(seed_face, &point.point) {
            log::debug!("EPA: the new point cannot see the face it was computed from.");
            return Err(EpaError::DegenerateSimplex);
        }

        let new_vertex = self.push_vertex(point)?;
        let seed = self.faces[seed_face];
        self.horizon.clear();
        self.remove_face(seed_face);

        for edge in 0..3 {
            let neighbor = seed.adj[edge];
            let opp_edge = self.faces[neighbor]
                .edge_index(seed.pts[(edge + 1) % 3], seed.pts[edge])
                .ok_or(EpaError::DegenerateSimplex)?;
            self.compute_horizon(new_vertex, neighbor, opp_edge)?;
        }

        if self.horizon.len() < 3 {
            log::debug!("EPA: the horizon has only {} edges.", self.horizon.len());
            return Err(EpaError::DegenerateSimplex);
        }

        if self.num_faces() + self.horizon.len() > self.face_capacity {
            log::debug!("EPA: face capacity of {} reached.", self.face_capacity);
            return Err(EpaError::ArenaExhausted);
        }

        let mut fan = ArrayVec::<usize, EPA_MAX_FACES>::new();

        for k in 0..self.horizon.len() {
            let (neighbor, edge) = self.horizon[k];
            let pts = self.faces[neighbor].pts;
            let id = self.add_triangle(
                [pts[(edge + 1) % 3], pts[edge], new_vertex],
                [neighbor, usize::MAX, usize::MAX],
            )?;
            self.faces[neighbor].adj[edge] = id;
            fan.push(id);
        }

        // Fan face `(a, b, new_vertex)` shares its edge `(b, new_vertex)` with the fan face
        // starting at `b`.
        for &id in &fan {
            let b = self.faces[id].pts[1];
            let next = fan
                .iter()
                .copied()
                .find(|&other| self.faces[other].pts[0] == b)
                .ok_or(EpaError::DegenerateSimplex)?;
            self.faces[id].adj[1] = next;
            self.faces[next].adj[2] = id;
        }

        for &id in &fan {
            let _ = self.triangle_check_rotate(id);
        }

        Ok(fan[0])
    }

    /// Flips the edge 0 of the face `id` with the face across it.
    ///
    /// With `id = (a0, a1, a2)` and `q` the vertex of the neighbor opposite to the shared edge,
    /// the two faces become `(a0, q, a2)` and `(q, a1, a2)`.
    pub(crate) fn rotate_edge(&mut self, id: usize) {
        let a = self.faces[id];
        let b_id = a.adj[0];
        let b = self.faces[b_id];

        let Some(j) = b.edge_index(a.pts[1], a.pts[0]) else {
            log::debug!("EPA: inconsistent adjacency while rotating an edge.");
            return;
        };

        let [a0, a1, a2] = a.pts;
        let q = b.pts[(j + 2) % 3];
        let n_a0q = b.adj[(j + 1) % 3];
        let n_qa1 = b.adj[(j + 2) % 3];
        let n_a1a2 = a.adj[1];
        let n_a2a0 = a.adj[2];

        let stamp_a = self.bump_stamp();
        let stamp_b = self.bump_stamp();

        let new_a = &mut self.faces[id];
        new_a.pts = [a0, q, a2];
        new_a.adj = [n_a0q, b_id, n_a2a0];
        new_a.stamp = stamp_a;

        let new_b = &mut self.faces[b_id];
        new_b.pts = [q, a1, a2];
        new_b.adj = [n_qa1, a.adj[1], id];
        new_b.stamp = stamp_b;

        self.relink(n_a0q, q, a0, id);
        self.relink(n_a1a2, a2, a1, b_id);

        self.update_geometry(id);
        self.update_geometry(b_id);

        if !self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) {
            self.fix_heap(self.heap_index[id]);
            self.fix_heap(self.heap_index[b_id]);
        }
    }

    /// If the origin projects outside of the edge `edge` of the face `id`, sets the face
    /// distance to the distance between the origin and that edge, and returns `true`.
    pub(crate) fn triangle_check_edge(&mut self, id: usize, edge: usize) -> bool {
        let face = &self.faces[id];
        let a = self.vertices[face.pts[edge]].point;
        let b = self.vertices[face.pts[(edge + 1) % 3]].point;
        let ab = b - a;
        let ao = -a.coords;

        if ab.cross(&ao).dot(&face.normal) >= 0.0 {
            return false;
        }

        let t = (ao.dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
        self.faces[id].distance = (a + ab * t).coords.norm();
        true
    }

    /// Flips the edge 0 of the face `id` if it is reflex, i.e., if the vertex of the
    /// neighboring face opposite to that edge lies in front of the face `id`.
    ///
    /// The flip is skipped when it would duplicate an existing edge. Returns `true` if the
    /// edge was flipped.
    pub(crate) fn triangle_check_rotate(&mut self, id: usize) -> bool {
        let face = self.faces[id];
        let neighbor = self.faces[face.adj[0]];

        let Some(j) = neighbor.edge_index(face.pts[1], face.pts[0]) else {
            return false;
        };

        let apex = face.pts[2];
        let q = neighbor.pts[(j + 2) % 3];
        let reflex = !face.degenerate
            && (self.vertices[q].point - self.vertices[face.pts[0]].point).dot(&face.normal)
                > eps_tol();

        if !reflex || q == apex {
            return false;
        }

        let duplicates_edge = [neighbor.adj[(j + 1) % 3], neighbor.adj[(j + 2) % 3]]
            .iter()
            .any(|&other| self.faces[other].contains(apex));

        if duplicates_edge {
            return false;
        }

        self.rotate_edge(id);
        true
    }

    /// Restores the heap property around the heap element `heap_index`.
    pub fn fix_heap(&mut self, heap_index: usize) {
        if self.sift_up_heap(heap_index) == heap_index {
            let _ = self.sift_down_heap(heap_index);
        }
    }

    /// Moves the heap element `heap_index` toward the root while it precedes its parent.
    ///
    /// Returns its final position.
    pub fn sift_up_heap(&mut self, mut heap_index: usize) -> usize {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;

            if !self.face_precedes(self.heap[heap_index], self.heap[parent]) {
                break;
            }

            self.heap_swap(heap_index, parent);
            heap_index = parent;
        }

        heap_index
    }

    /// Moves the heap element `heap_index` toward the leaves while one of its children
    /// precedes it.
    ///
    /// Returns its final position.
    pub fn sift_down_heap(&mut self, mut heap_index: usize) -> usize {
        loop {
            let left = 2 * heap_index + 1;
            let right = left + 1;
            let mut best = heap_index;

            if left < self.heap.len() && self.face_precedes(self.heap[left], self.heap[best]) {
                best = left;
            }

            if right < self.heap.len() && self.face_precedes(self.heap[right], self.heap[best]) {
                best = right;
            }

            if best == heap_index {
                return heap_index;
            }

            self.heap_swap(heap_index, best);
            heap_index = best;
        }
    }

    /// Checks that the heap contains every live face exactly once, in heap order.
    pub fn validate_heap(&self) -> bool {
        if self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) {
            return self.heap.is_empty();
        }

        if self.heap.len() != self.num_faces() {
            return false;
        }

        self.heap.iter().enumerate().all(|(i, &face)| {
            self.faces[face].live
                && self.heap_index[face] == i
                && (i == 0 || !self.face_precedes(face, self.heap[(i - 1) / 2]))
        })
    }

    /// Checks that every edge of every live face is shared, in the opposite direction, by the
    /// live face recorded as adjacent to it.
    pub fn validate_topology(&self) -> bool {
        self.faces().all(|(id, face)| {
            (0..3).all(|i| {
                let neighbor = face.adj[i];
                self.is_live(neighbor)
                    && self.faces[neighbor]
                        .edge_index(face.pts[(i + 1) % 3], face.pts[i])
                        .is_some_and(|j| self.faces[neighbor].adj[j] == id)
            })
        })
    }

    fn bump_stamp(&mut self) -> u32 {
        self.next_stamp = self.next_stamp.wrapping_add(1);
        self.next_stamp
    }

    fn push_vertex(&mut self, pt: CsoPoint) -> Result<usize, EpaError> {
        if self.vertices.try_push(pt).is_err() {
            log::debug!("EPA: vertex capacity of {} reached.", EPA_MAX_VERTICES);
            return Err(EpaError::ArenaExhausted);
        }

        Ok(self.vertices.len() - 1)
    }

    fn remove_face(&mut self, id: usize) {
        self.faces[id].live = false;

        if !self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) {
            self.heap_remove(id);
        }

        self.free_faces.push(id);
    }

    // Points the edge `a -> b` of the face `id` to `new_neighbor`.
    fn relink(&mut self, id: usize, a: usize, b: usize, new_neighbor: usize) {
        if let Some(edge) = self.faces[id].edge_index(a, b) {
            self.faces[id].adj[edge] = new_neighbor;
        }
    }

    fn can_be_seen_by(&self, id: usize, point: &Point<Real>) -> bool {
        let face = &self.faces[id];

        // Degenerate faces are removed whenever the horizon search reaches them.
        face.degenerate
            || (point - self.vertices[face.pts[0]].point).dot(&face.normal) > eps_tol()
    }

    fn compute_horizon(
        &mut self,
        vertex: usize,
        id: usize,
        entry_edge: usize,
    ) -> Result<(), EpaError> {
        if !self.faces[id].live {
            return Ok(());
        }

        if !self.can_be_seen_by(id, &self.vertices[vertex].point) {
            return self
                .horizon
                .try_push((id, entry_edge))
                .map_err(|_| EpaError::ArenaExhausted);
        }

        self.remove_face(id);
        let face = self.faces[id];

        for i in 1..3 {
            let edge = (entry_edge + i) % 3;
            let neighbor = face.adj[edge];
            let opp_edge = self.faces[neighbor]
                .edge_index(face.pts[(edge + 1) % 3], face.pts[edge])
                .ok_or(EpaError::DegenerateSimplex)?;
            self.compute_horizon(vertex, neighbor, opp_edge)?;
        }

        Ok(())
    }

    fn update_geometry(&mut self, id: usize) {
        let [a, b, c] = self.faces[id].pts.map(|i| self.vertices[i].point);

        let Some(normal) = utils::ccw_face_normal([&a, &b, &c]) else {
            let face = &mut self.faces[id];
            face.degenerate = true;
            face.plane_distance = 0.0;
            face.distance = Real::MAX;
            face.bcoords = [1.0 / 3.0; 3];
            return;
        };

        let plane_distance = normal.dot(&a.coords);
        let projection = Point::from(*normal * plane_distance);

        let face = &mut self.faces[id];
        face.degenerate = false;
        face.normal = normal;
        face.plane_distance = plane_distance;
        face.distance = plane_distance;
        face.bcoords =
            utils::barycentric_coordinates(&a, &b, &c, &projection).unwrap_or([1.0 / 3.0; 3]);

        if self.flags.contains(ExpandingSimplexFlags::SKIP_DISTANCE) {
            return;
        }

        // Clamp the projection of the origin to the triangle.
        let mut edge_distance = Real::MAX;

        for edge in 0..3 {
            if self.triangle_check_edge(id, edge) {
                edge_distance = edge_distance.min(self.faces[id].distance);
            }
        }

        self.faces[id].distance = if edge_distance < Real::MAX {
            edge_distance
        } else {
            plane_distance
        };
    }

    fn face_precedes(&self, f1: usize, f2: usize) -> bool {
        let (f1, f2) = (&self.faces[f1], &self.faces[f2]);
        f1.distance < f2.distance || (f1.distance == f2.distance && f1.stamp > f2.stamp)
    }

    fn heap_swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.heap_index[self.heap[i]] = i;
        self.heap_index[self.heap[j]] = j;
    }

    fn heap_push(&mut self, id: usize) {
        self.heap_index[id] = self.heap.len();
        self.heap.push(id);
        let _ = self.sift_up_heap(self.heap.len() - 1);
    }

    fn heap_remove(&mut self, id: usize) {
        let heap_index = self.heap_index[id];

        if let Some(last) = self.heap.pop() {
            if heap_index < self.heap.len() {
                self.heap[heap_index] = last;
                self.heap_index[last] = heap_index;
                self.fix_heap(heap_index);
            }
        }
    }
}

/// Selects four affinely independent points enclosing the origin, completing `simplex` with
/// support points when needed.
fn initial_tetrahedron<M: ?Sized + MinkowskiSum>(
    simplex: &Simplex,
    minkowski: &M,
) -> Result<[CsoPoint; 4], EpaError> {
    if simplex.is_empty() {
        return Err(EpaError::DegenerateSimplex);
    }

    let mut pts = ArrayVec::<CsoPoint, 4>::new();

    for pt in simplex.points() {
        if affine_extent(&pts, &pt.point) > eps_tol() {
            pts.push(*pt);
        }
    }

    while !pts.is_full() {
        let mut best = None;
        let mut best_extent = eps_tol();

        for dir in augmentation_directions(&pts) {
            let candidate = minkowski.support(&dir);
            let extent = affine_extent(&pts, &candidate.point);

            if extent > best_extent {
                best = Some(candidate);
                best_extent = extent;
            }
        }

        let Some(best) = best else {
            log::debug!(
                "EPA: could not complete a {}-points simplex into a tetrahedron.",
                pts.len()
            );
            return Err(EpaError::DegenerateSimplex);
        };

        pts.push(best);
    }

    pts.into_inner().map_err(|_| EpaError::DegenerateSimplex)
}

/// The distance between `pt` and the affine hull of `pts`.
fn affine_extent(pts: &[CsoPoint], pt: &Point<Real>) -> Real {
    match pts {
        [] => Real::MAX,
        [a] => (pt - a.point).norm(),
        [a, b] => {
            let ab = b.point - a.point;
            ab.cross(&(pt - a.point)).norm() / ab.norm()
        }
        [a, b, c] => {
            let n = (b.point - a.point).cross(&(c.point - a.point));
            n.dot(&(pt - a.point)).abs() / n.norm()
        }
        _ => 0.0,
    }
}

/// Directions along which a support point may extend the affine hull of `pts`.
fn augmentation_directions(pts: &[CsoPoint]) -> ArrayVec<UnitVector<Real>, 6> {
    let mut dirs = ArrayVec::new();

    match pts {
        [a, b] => {
            if let Some(axis) = Unit::try_new(b.point - a.point, DEFAULT_EPSILON) {
                Vector::orthonormal_subspace_basis(&[axis.into_inner()], |e| {
                    let e = Unit::new_normalize(*e);
                    dirs.push(e);
                    dirs.push(-e);
                    true
                });
            }
        }
        [a, b, c] => {
            if let Some(n) = utils::ccw_face_normal([&a.point, &b.point, &c.point]) {
                dirs.push(n);
                dirs.push(-n);
            }
        }
        _ => {
            for axis in [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()] {
                dirs.push(axis);
                dirs.push(-axis);
            }
        }
    }

    dirs
}
