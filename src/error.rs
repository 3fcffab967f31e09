use thiserror::Error;

/// Top-level error type for the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Invalid projection or engine parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field of view {0} rad must lie strictly between 0 and pi")]
    FieldOfView(f32),

    #[error("aspect ratio {0} must be positive and finite")]
    AspectRatio(f32),

    #[error("depth range [{near}, {far}] requires 0 < near < far")]
    DepthRange { near: f32, far: f32 },

    #[error("viewport {width}x{height} must not be empty")]
    Viewport { width: u32, height: u32 },

    #[error("triangle budget must be at least 1")]
    TriangleBudget,

    #[error("light direction must be a non-zero vector")]
    LightDirection,
}

/// Failure to build a mesh from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("face {face} references vertex {index}, but the mesh has {count} vertices")]
    FaceIndex {
        face: usize,
        index: usize,
        count: usize,
    },

    #[error("{0} contains no triangles")]
    Empty(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
