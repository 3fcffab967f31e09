//! Triangle meshes: vertex positions, faces, and a model transform.

use std::io::BufRead;
use std::path::Path;

use crate::colors;
use crate::error::LoadError;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::TexCoord;
use crate::transform::Transform;
use crate::triangle::Face;

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const UV_FIRST: [TexCoord; 3] = [
    TexCoord::new(0.0, 1.0),
    TexCoord::new(0.0, 0.0),
    TexCoord::new(1.0, 0.0),
];
const UV_SECOND: [TexCoord; 3] = [
    TexCoord::new(0.0, 1.0),
    TexCoord::new(1.0, 0.0),
    TexCoord::new(1.0, 1.0),
];

/// Two clockwise triangles per side, each side with its own color.
pub const CUBE_FACES: [Face; 12] = [
    // front
    Face::new(0, 1, 2, UV_FIRST, colors::RED),
    Face::new(0, 2, 3, UV_SECOND, colors::RED),
    // right
    Face::new(3, 2, 4, UV_FIRST, colors::BLUE),
    Face::new(3, 4, 5, UV_SECOND, colors::BLUE),
    // back
    Face::new(5, 4, 6, UV_FIRST, colors::GREEN),
    Face::new(5, 6, 7, UV_SECOND, colors::GREEN),
    // left
    Face::new(7, 6, 1, UV_FIRST, colors::YELLOW),
    Face::new(7, 1, 0, UV_SECOND, colors::YELLOW),
    // top
    Face::new(1, 6, 4, UV_FIRST, colors::MAGENTA),
    Face::new(1, 4, 2, UV_SECOND, colors::MAGENTA),
    // bottom
    Face::new(5, 7, 0, UV_FIRST, colors::CYAN),
    Face::new(5, 0, 3, UV_SECOND, colors::CYAN),
];

#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    transform: Transform,
}

impl Mesh {
    /// Builds a mesh, checking every face index against the vertex count.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        let count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices().iter().find(|&&i| i >= count) {
                return Err(LoadError::FaceIndex {
                    face: face_index,
                    index,
                    count,
                });
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            transform: Transform::default(),
        })
    }

    /// The unit cube centered on the origin, spanning [-1, 1] on each axis.
    pub fn cube() -> Self {
        Self {
            name: "cube".to_string(),
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
            transform: Transform::default(),
        }
    }

    /// Loads every object of an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated and positions/texcoords are unified into a
    /// single index stream. Corners without texture coordinates get (0, 0).
    /// Materials are ignored; faces use [`colors::FILL`].
    pub fn from_obj(file_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let (models, _materials) =
            tobj::load_obj(path, &load_options()).map_err(|source| LoadError::Obj {
                path: path.display().to_string(),
                source,
            })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_models(name, &models)
    }

    /// Like [`Mesh::from_obj`], reading OBJ text from `reader`. `mtllib`
    /// references are not followed.
    pub fn from_obj_reader(name: &str, reader: &mut impl BufRead) -> Result<Self, LoadError> {
        let (models, _materials) =
            tobj::load_obj_buf(reader, &load_options(), |_| Err(tobj::LoadError::OpenFileFailed))
                .map_err(|source| LoadError::Obj {
                    path: name.to_string(),
                    source,
                })?;

        Self::from_models(name.to_string(), &models)
    }

    fn from_models(name: String, models: &[tobj::Model]) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let mesh = &model.mesh;
            let base = vertices.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            let texcoord = |index: usize| {
                mesh.texcoords
                    .get(2 * index..2 * index + 2)
                    .map(|uv| TexCoord::from(Vec2::new(uv[0], uv[1])))
                    .unwrap_or_default()
            };

            for corners in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [corners[0], corners[1], corners[2]].map(|i| i as usize);
                faces.push(Face::new(
                    base + a,
                    base + b,
                    base + c,
                    [texcoord(a), texcoord(b), texcoord(c)],
                    colors::FILL,
                ));
            }
        }

        if faces.is_empty() {
            return Err(LoadError::Empty(name));
        }

        let mesh = Self::new(name, vertices, faces)?;
        tracing::info!(
            name = %mesh.name,
            objects = models.len(),
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            "loaded mesh"
        );
        Ok(mesh)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Positions of the three corners of `face`.
    ///
    /// Faces are validated on construction, so indexing cannot fail for faces
    /// of this mesh.
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.indices().map(|i| self.vertices[i])
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}
