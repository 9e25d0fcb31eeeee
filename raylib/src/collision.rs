// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Collision checks and ray collision queries.

use crate::api::CallArg;
use crate::geom::{BoundingBox, Matrix, Ray, RayCollision, Rectangle, Vector2, Vector3};
use crate::marshal::pack_vector2s;
use crate::mesh::Mesh;
use crate::Raylib;

impl Raylib {
    /// Check collision between two rectangles.
    pub fn check_collision_recs(&self, rec1: Rectangle, rec2: Rectangle) -> bool {
        self.call_bool(
            "CheckCollisionRecs",
            &[CallArg::Struct(&rec1.encode()), CallArg::Struct(&rec2.encode())],
        )
    }

    /// Check collision between two circles.
    pub fn check_collision_circles(
        &self,
        center1: Vector2,
        radius1: f32,
        center2: Vector2,
        radius2: f32,
    ) -> bool {
        self.call_bool(
            "CheckCollisionCircles",
            &[
                CallArg::Struct(&center1.encode()),
                CallArg::F32(radius1),
                CallArg::Struct(&center2.encode()),
                CallArg::F32(radius2),
            ],
        )
    }

    /// Check collision between circle and rectangle.
    pub fn check_collision_circle_rec(&self, center: Vector2, radius: f32, rec: Rectangle) -> bool {
        self.call_bool(
            "CheckCollisionCircleRec",
            &[
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
                CallArg::Struct(&rec.encode()),
            ],
        )
    }

    /// Check if point is inside rectangle.
    pub fn check_collision_point_rec(&self, point: Vector2, rec: Rectangle) -> bool {
        self.call_bool(
            "CheckCollisionPointRec",
            &[CallArg::Struct(&point.encode()), CallArg::Struct(&rec.encode())],
        )
    }

    /// Check if point is inside circle.
    pub fn check_collision_point_circle(&self, point: Vector2, center: Vector2, radius: f32) -> bool {
        self.call_bool(
            "CheckCollisionPointCircle",
            &[
                CallArg::Struct(&point.encode()),
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
            ],
        )
    }

    /// Check if point is inside a triangle.
    pub fn check_collision_point_triangle(
        &self,
        point: Vector2,
        p1: Vector2,
        p2: Vector2,
        p3: Vector2,
    ) -> bool {
        self.call_bool(
            "CheckCollisionPointTriangle",
            &[
                CallArg::Struct(&point.encode()),
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
            ],
        )
    }

    /// Check if point is within a polygon described by array of vertices.
    pub fn check_collision_point_poly(&self, point: Vector2, points: &[Vector2]) -> bool {
        let packed = pack_vector2s(points);
        self.call_bool(
            "CheckCollisionPointPoly",
            &[
                CallArg::Struct(&point.encode()),
                CallArg::Buffer(&packed),
                CallArg::I32(points.len() as i32),
            ],
        )
    }

    /// Check the collision between two lines defined by two points each.
    /// Returns the collision point if the lines intersect.
    pub fn check_collision_lines(
        &self,
        start1: Vector2,
        end1: Vector2,
        start2: Vector2,
        end2: Vector2,
    ) -> Option<Vector2> {
        // The native call writes the collision point through the trailing
        // Vector2 pointer.
        let mut out = [0u8; 8];
        let hit = self.call_bool(
            "CheckCollisionLines",
            &[
                CallArg::Struct(&start1.encode()),
                CallArg::Struct(&end1.encode()),
                CallArg::Struct(&start2.encode()),
                CallArg::Struct(&end2.encode()),
                CallArg::Pointer(out.as_mut_ptr().cast()),
            ],
        );
        hit.then(|| Vector2::decode(&out))
    }

    /// Check if point belongs to the line between p1 and p2 with a margin
    /// in pixels.
    pub fn check_collision_point_line(
        &self,
        point: Vector2,
        p1: Vector2,
        p2: Vector2,
        threshold: i32,
    ) -> bool {
        self.call_bool(
            "CheckCollisionPointLine",
            &[
                CallArg::Struct(&point.encode()),
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::I32(threshold),
            ],
        )
    }

    /// Get collision rectangle for two rectangles collision.
    pub fn get_collision_rec(&self, rec1: Rectangle, rec2: Rectangle) -> Rectangle {
        Rectangle::decode(&self.call_struct(
            "GetCollisionRec",
            &[CallArg::Struct(&rec1.encode()), CallArg::Struct(&rec2.encode())],
        ))
    }

    /// Check collision between two spheres.
    pub fn check_collision_spheres(
        &self,
        center1: Vector3,
        radius1: f32,
        center2: Vector3,
        radius2: f32,
    ) -> bool {
        self.call_bool(
            "CheckCollisionSpheres",
            &[
                CallArg::Struct(&center1.encode()),
                CallArg::F32(radius1),
                CallArg::Struct(&center2.encode()),
                CallArg::F32(radius2),
            ],
        )
    }

    /// Check collision between two bounding boxes.
    pub fn check_collision_boxes(&self, box1: BoundingBox, box2: BoundingBox) -> bool {
        self.call_bool(
            "CheckCollisionBoxes",
            &[CallArg::Struct(&box1.encode()), CallArg::Struct(&box2.encode())],
        )
    }

    /// Check collision between box and sphere.
    pub fn check_collision_box_sphere(&self, bbox: BoundingBox, center: Vector3, radius: f32) -> bool {
        self.call_bool(
            "CheckCollisionBoxSphere",
            &[
                CallArg::Struct(&bbox.encode()),
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
            ],
        )
    }

    /// Get collision info between ray and sphere.
    pub fn get_ray_collision_sphere(&self, ray: Ray, center: Vector3, radius: f32) -> RayCollision {
        RayCollision::decode(&self.call_struct(
            "GetRayCollisionSphere",
            &[
                CallArg::Struct(&ray.encode()),
                CallArg::Struct(&center.encode()),
                CallArg::F32(radius),
            ],
        ))
    }

    /// Get collision info between ray and box.
    pub fn get_ray_collision_box(&self, ray: Ray, bbox: BoundingBox) -> RayCollision {
        RayCollision::decode(&self.call_struct(
            "GetRayCollisionBox",
            &[CallArg::Struct(&ray.encode()), CallArg::Struct(&bbox.encode())],
        ))
    }

    /// Get collision info between ray and mesh.
    pub fn get_ray_collision_mesh(&self, ray: Ray, mesh: &Mesh, transform: Matrix) -> RayCollision {
        RayCollision::decode(&self.call_struct(
            "GetRayCollisionMesh",
            &[
                CallArg::Struct(&ray.encode()),
                CallArg::Struct(mesh.bytes()),
                CallArg::Struct(&transform.encode()),
            ],
        ))
    }

    /// Get collision info between ray and triangle.
    pub fn get_ray_collision_triangle(
        &self,
        ray: Ray,
        p1: Vector3,
        p2: Vector3,
        p3: Vector3,
    ) -> RayCollision {
        RayCollision::decode(&self.call_struct(
            "GetRayCollisionTriangle",
            &[
                CallArg::Struct(&ray.encode()),
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
            ],
        ))
    }

    /// Get collision info between ray and quad.
    pub fn get_ray_collision_quad(
        &self,
        ray: Ray,
        p1: Vector3,
        p2: Vector3,
        p3: Vector3,
        p4: Vector3,
    ) -> RayCollision {
        RayCollision::decode(&self.call_struct(
            "GetRayCollisionQuad",
            &[
                CallArg::Struct(&ray.encode()),
                CallArg::Struct(&p1.encode()),
                CallArg::Struct(&p2.encode()),
                CallArg::Struct(&p3.encode()),
                CallArg::Struct(&p4.encode()),
            ],
        ))
    }
}
