mod obj;
mod placement;

pub use obj::{missing_materials, scan_mtl, scan_obj, ObjSummary};
pub use placement::{
    place, ModelPlacement, PlacedModel, DRONE_POSITION, DRONE_SCALE, MAX_MODEL_EXTENT,
};

use futures::channel::{mpsc, oneshot};
use futures::StreamExt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::math::AABB;

const READ_CHUNK: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    #[error("no vertices in {path}")]
    Empty { path: String },
    #[error("asset load was cancelled before it finished")]
    Cancelled,
}

/// Which half of a model pair is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFile {
    Material,
    Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadProgress {
    pub file: AssetFile,
    pub loaded: u64,
    pub total: u64,
}

impl LoadProgress {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            self.loaded as f32 / self.total as f32 * 100.0
        }
    }
}

/// Geometry + material pair resolved from disk
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    pub name: String,
    pub bounds: AABB,
    pub vertex_count: usize,
    pub face_count: usize,
    pub group_count: usize,
    pub materials: Vec<String>,
}

/// In-flight model load: a progress stream plus the eventual result
pub struct AssetTask {
    pub progress: mpsc::UnboundedReceiver<LoadProgress>,
    result: oneshot::Receiver<Result<ModelAsset, AssetError>>,
}

impl AssetTask {
    /// Resolve the load, logging progress as it arrives
    pub async fn finish(self) -> Result<ModelAsset, AssetError> {
        let AssetTask { progress, result } = self;
        let report = progress.for_each(|p| {
            log::debug!("{:?} loading progress: {:.0}%", p.file, p.percent());
            futures::future::ready(())
        });
        let ((), outcome) = futures::future::join(report, result).await;
        outcome.unwrap_or_else(|_| Err(AssetError::Cancelled))
    }

    /// Block the calling thread until the load resolves
    pub fn wait(self) -> Result<ModelAsset, AssetError> {
        pollster::block_on(self.finish())
    }
}

/// Loads OBJ/MTL pairs on a worker thread
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    root: Option<PathBuf>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Start loading a model. The material file is read first; if it fails the geometry is never read.
    pub fn load_model(&self, obj_path: impl AsRef<Path>, mtl_path: impl AsRef<Path>) -> AssetTask {
        let obj_path = self.resolve(obj_path.as_ref());
        let mtl_path = self.resolve(mtl_path.as_ref());
        let (progress_tx, progress_rx) = mpsc::unbounded();
        let (result_tx, result_rx) = oneshot::channel();

        let thread_name = format!("asset-loader:{}", obj_path.display());
        let spawned = std::thread::Builder::new().name(thread_name).spawn(move || {
            let outcome = load_blocking(&obj_path, &mtl_path, &progress_tx);
            // receiver may have been dropped; nothing to report to
            let _ = result_tx.send(outcome);
        });
        if let Err(err) = spawned {
            log::error!("Failed to start asset loader thread: {}", err);
        }

        AssetTask {
            progress: progress_rx,
            result: result_rx,
        }
    }
}

fn load_blocking(
    obj_path: &Path,
    mtl_path: &Path,
    progress: &mpsc::UnboundedSender<LoadProgress>,
) -> Result<ModelAsset, AssetError> {
    let mtl_text = read_with_progress(mtl_path, AssetFile::Material, progress)?;
    let materials = scan_mtl(&mtl_text);
    log::info!(
        "Material file {} loaded: {} materials",
        mtl_path.display(),
        materials.len()
    );

    let obj_name = obj_path.display().to_string();
    let obj_text = read_with_progress(obj_path, AssetFile::Geometry, progress)?;
    let summary = scan_obj(&obj_text, &obj_name)?;
    let bounds = summary.bounds.ok_or_else(|| AssetError::Empty {
        path: obj_name.clone(),
    })?;

    let mtl_file = mtl_path.file_name().and_then(|name| name.to_str());
    if !summary.material_libs.is_empty()
        && !summary.material_libs.iter().any(|lib| Some(lib.as_str()) == mtl_file)
    {
        log::warn!(
            "{} references {:?} but {} was loaded",
            obj_name,
            summary.material_libs,
            mtl_path.display()
        );
    }
    for name in missing_materials(&summary, &materials) {
        log::warn!("{} uses undefined material {}", obj_name, name);
    }

    let name = obj_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("model")
        .to_string();
    log::info!(
        "Model {} loaded: {} vertices, {} faces, size {:?}, center {:?}",
        name,
        summary.vertex_count,
        summary.face_count,
        bounds.size(),
        bounds.center()
    );

    Ok(ModelAsset {
        name,
        bounds,
        vertex_count: summary.vertex_count,
        face_count: summary.face_count,
        group_count: summary.group_count,
        materials,
    })
}

fn read_with_progress(
    path: &Path,
    file: AssetFile,
    progress: &mpsc::UnboundedSender<LoadProgress>,
) -> Result<String, AssetError> {
    let read_err = |source| AssetError::Read {
        path: path.display().to_string(),
        source,
    };
    let mut handle = std::fs::File::open(path).map_err(read_err)?;
    let total = handle.metadata().map(|m| m.len()).unwrap_or(0);

    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = handle.read(&mut chunk).map_err(read_err)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        let _ = progress.unbounded_send(LoadProgress {
            file,
            loaded: bytes.len() as u64,
            total: total.max(bytes.len() as u64),
        });
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
