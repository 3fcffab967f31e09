//! Core geometry pipeline.
//!
//! The [`Engine`] struct is the main entry point. Each [`Engine::update`]
//! takes the mesh through world and view space, culls back faces, clips
//! against the view frustum and projects the surviving triangle fans to
//! screen space. The resulting [`Triangle`] list is what a rasterizer
//! consumes.

use crate::camera::Camera;
use crate::clipper::{ClipVertex, Frustum};
use crate::colors;
use crate::config::{CullMode, EngineConfig};
use crate::error::{ConfigError, Error, LoadError};
use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::triangle::Triangle;

/// Counters for the most recent [`Engine::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces visited.
    pub faces: usize,
    /// Zero-area faces skipped before normal computation.
    pub degenerate: usize,
    /// Faces removed by backface culling.
    pub culled: usize,
    /// Faces entirely outside the frustum.
    pub clipped: usize,
    /// Triangles emitted for rasterization.
    pub triangles: usize,
    /// Triangles discarded because the frame budget was full.
    pub dropped: usize,
}

pub struct Engine {
    width: u32,
    height: u32,
    cull_mode: CullMode,
    max_triangles: usize,
    projection: Projection,
    frustum: Frustum,
    camera: Camera,
    light: DirectionalLight,
    mesh: Mesh,
    triangles_to_render: Vec<Triangle>,
    stats: FrameStats,
}

impl Engine {
    /// Creates an engine showing the unit cube five units in front of a
    /// camera at the origin.
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;
        let projection = config.projection()?;

        let mut mesh = Mesh::cube();
        mesh.transform_mut().set_position(Vec3::new(0.0, 0.0, 5.0));

        Ok(Self {
            width: config.width,
            height: config.height,
            cull_mode: config.cull_mode,
            max_triangles: config.max_triangles,
            frustum: projection.frustum(),
            projection,
            camera: Camera::default(),
            light: DirectionalLight::new(config.light_direction),
            mesh,
            triangles_to_render: Vec::new(),
            stats: FrameStats::default(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Changes the viewport and the projection's aspect ratio, rebuilding the
    /// frustum to match.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::Viewport { width, height });
        }
        self.projection
            .set_aspect_ratio(width as f32 / height as f32)?;
        self.width = width;
        self.height = height;
        self.frustum = self.projection.frustum();
        tracing::debug!(width, height, "viewport resized");
        Ok(())
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Replaces the projection and rebuilds the frustum from it.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.frustum = projection.frustum();
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn set_cull_mode(&mut self, cull_mode: CullMode) {
        self.cull_mode = cull_mode;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    /// Replaces the mesh, keeping the current mesh transform.
    pub fn set_mesh(&mut self, mesh: Mesh) {
        let transform = *self.mesh.transform();
        self.mesh = mesh;
        *self.mesh.transform_mut() = transform;
    }

    pub fn load_mesh(&mut self, file_path: &str) -> Result<(), LoadError> {
        self.set_mesh(Mesh::from_obj(file_path)?);
        Ok(())
    }

    /// Triangles produced by the last [`Engine::update`], in face order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles_to_render
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Runs the geometry pipeline for the current mesh, camera and light.
    pub fn update(&mut self) {
        let model_view = self.camera.view_matrix() * self.mesh.transform().to_matrix();
        let projection_matrix = self.projection.matrix();
        let mut stats = FrameStats::default();

        self.triangles_to_render.clear();

        for face in self.mesh.faces() {
            stats.faces += 1;

            // Model Space --> World Space --> View Space
            let [a, b, c] = self.mesh.face_vertices(face).map(|v| model_view * v);

            // Left-handed, clockwise faces: the normal points at the viewer.
            let normal = (b - a).cross(c - a);
            if normal.magnitude() == 0.0 {
                stats.degenerate += 1;
                continue;
            }

            // In view space the camera sits at the origin.
            let camera_ray = Vec3::ZERO - a;
            if self.cull_mode == CullMode::Backface && normal.dot(camera_ray) < 0.0 {
                stats.culled += 1;
                continue;
            }

            let color = colors::apply_intensity(face.color, self.light.intensity(normal));

            let [t0, t1, t2] = face.texcoords;
            let polygon = self.frustum.clip_triangle(
                ClipVertex::new(a, t0),
                ClipVertex::new(b, t1),
                ClipVertex::new(c, t2),
            );
            if polygon.is_empty() {
                stats.clipped += 1;
                continue;
            }

            for corners in polygon.triangulate() {
                if self.triangles_to_render.len() >= self.max_triangles {
                    stats.dropped += 1;
                    continue;
                }

                let points = corners.map(|v| {
                    to_screen(&projection_matrix, v.position, self.width, self.height)
                });
                self.triangles_to_render.push(Triangle::new(
                    points,
                    corners.map(|v| v.texcoord),
                    color,
                ));
            }
        }

        stats.triangles = self.triangles_to_render.len();
        if stats.dropped > 0 {
            tracing::warn!(
                dropped = stats.dropped,
                budget = self.max_triangles,
                "triangle budget exceeded"
            );
        }
        tracing::trace!(?stats, "frame updated");
        self.stats = stats;
    }
}

/// Projects a view-space point and maps NDC to pixels, flipping Y so that
/// +Y points up on screen.
fn to_screen(projection: &Mat4, position: Vec3, width: u32, height: u32) -> Vec4 {
    let ndc = projection.project(Vec4::from(position));
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    Vec4::new(
        ndc.x * half_width + half_width,
        -ndc.y * half_height + half_height,
        ndc.z,
        ndc.w,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TexCoord;
    use crate::triangle::Face;
    use approx::assert_relative_eq;

    fn engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    fn single_face_mesh(vertices: [Vec3; 3]) -> Mesh {
        let uvs = [
            TexCoord::new(0.0, 0.0),
            TexCoord::new(1.0, 0.0),
            TexCoord::new(0.0, 1.0),
        ];
        Mesh::new("tri", vertices.to_vec(), vec![Face::new(0, 1, 2, uvs, colors::WHITE)]).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = EngineConfig {
            width: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(Error::Config(ConfigError::Viewport { .. }))
        ));
    }

    #[test]
    fn cube_shows_only_front_faces() {
        let mut engine = engine();
        engine.update();

        // Looking straight at the cube: only the two front triangles remain.
        let stats = engine.stats();
        assert_eq!(stats.faces, 12);
        assert_eq!(stats.culled + stats.degenerate, 10);
        assert_eq!(stats.triangles, 2);
        for triangle in engine.triangles() {
            assert_eq!(triangle.color, colors::RED);
            assert!(triangle.screen_area2() > 0.0);
        }
    }

    #[test]
    fn disabling_culling_keeps_inward_faces() {
        let mut engine = engine();
        engine.set_cull_mode(CullMode::None);
        engine.update();

        // Faces pointing away are emitted too; the cube fits the frustum.
        assert_eq!(engine.stats().culled, 0);
        assert_eq!(engine.stats().clipped, 0);
        assert_eq!(engine.triangles().len(), 12);
    }

    #[test]
    fn inside_triangle_projects_to_expected_pixels() {
        let mut engine = engine();
        engine.set_mesh(single_face_mesh([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]));
        engine.update();

        let triangles = engine.triangles();
        assert_eq!(triangles.len(), 1);
        let [p0, p1, p2] = triangles[0].points;

        // The mesh sits at z = 5: the first vertex maps to the screen center.
        assert_relative_eq!(p0.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(p0.y, 300.0, epsilon = 1e-3);
        assert_relative_eq!(p0.w, 5.0, epsilon = 1e-5);
        // +Y is up on screen, +X is right.
        assert!(p1.y < p0.y);
        assert!(p2.x > p0.x);
        assert_eq!(triangles[0].texcoords[1], TexCoord::new(1.0, 0.0));
    }

    #[test]
    fn triangle_crossing_near_plane_is_split() {
        let mut engine = engine();
        engine.set_cull_mode(CullMode::None);
        engine.mesh_mut().transform_mut().set_position(Vec3::ZERO);
        engine.set_mesh(single_face_mesh([
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.5, 0.0, 5.0),
            Vec3::new(0.0, 0.5, 5.0),
        ]));
        engine.update();

        assert!(!engine.triangles().is_empty());
        for triangle in engine.triangles() {
            for point in triangle.points {
                assert!(point.w >= engine.projection().z_near() - 1e-4);
                assert!(point.z >= -1.0 - 1e-4 && point.z <= 1.0 + 1e-4);
            }
        }
    }

    #[test]
    fn triangle_behind_camera_is_clipped_away() {
        let mut engine = engine();
        engine.set_cull_mode(CullMode::None);
        engine.mesh_mut().transform_mut().set_position(Vec3::new(0.0, 0.0, -5.0));
        engine.set_mesh(single_face_mesh([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ]));
        engine.update();

        assert_eq!(engine.stats().clipped, 1);
        assert!(engine.triangles().is_empty());
    }

    #[test]
    fn degenerate_face_is_skipped() {
        let mut engine = engine();
        engine.set_mesh(single_face_mesh([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
        ]));
        engine.update();

        assert_eq!(engine.stats().degenerate, 1);
        assert!(engine.triangles().is_empty());
    }

    #[test]
    fn light_intensity_scales_face_color() {
        let mut engine = engine();
        engine.set_light(DirectionalLight::new(Vec3::new(0.0, 1.0, 1.0)));
        engine.update();

        // Front face normal is -Z; the light hits it at 45 degrees.
        let expected = colors::apply_intensity(colors::RED, std::f32::consts::FRAC_1_SQRT_2);
        for triangle in engine.triangles() {
            assert_eq!(triangle.color, expected);
        }
    }

    #[test]
    fn triangle_budget_limits_output() {
        let config = EngineConfig {
            max_triangles: 1,
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(config).unwrap();
        engine.update();

        assert_eq!(engine.triangles().len(), 1);
        assert_eq!(engine.stats().dropped, 1);
    }

    #[test]
    fn resize_rebuilds_frustum() {
        let mut engine = engine();
        let before = *engine.frustum();

        engine.resize(1600, 600).unwrap();

        assert_eq!(engine.width(), 1600);
        assert_relative_eq!(engine.projection().aspect_ratio(), 1600.0 / 600.0);
        assert_ne!(*engine.frustum(), before);
        assert_eq!(*engine.frustum(), engine.projection().frustum());
        assert!(engine.resize(0, 10).is_err());
        assert_eq!(engine.width(), 1600);
    }

    #[test]
    fn camera_turning_away_removes_cube() {
        let mut engine = engine();
        engine.camera_mut().rotate_yaw(std::f32::consts::PI);
        engine.update();

        assert!(engine.triangles().is_empty());
    }

    #[test]
    fn update_is_repeatable() {
        let mut engine = engine();
        engine.update();
        let first = engine.triangles().to_vec();
        engine.update();
        assert_eq!(engine.triangles(), &first[..]);
    }
}
