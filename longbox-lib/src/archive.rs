//! Extracting and packing comic archives.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use longbox_core::natural_cmp;
use longbox_model::Metadata;
use longbox_sidecar::SidecarKind;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Unsupported archive: {0}")]
    Unsupported(String),

    #[error("Work directory already exists: {0}")]
    WorkDirExists(PathBuf),

    #[error("Target already exists: {0}")]
    PathCollision(PathBuf),
}

/// Extract/pack boundary for one archive container format.
pub trait ArchiveStore {
    /// Whether this store can handle `path` (by extension).
    fn supports(&self, path: &Path) -> bool;

    fn extract(&self, source: &Path) -> Result<WorkDir, ArchiveError>;

    /// Rename the images after `target`'s stem and write the archive there.
    /// An existing `target` is a [`ArchiveError::PathCollision`].
    fn pack(&self, work: &WorkDir, metadata: &Metadata, target: &Path) -> Result<(), ArchiveError>;

    /// Remove work directories and staging files left by an earlier run.
    fn clear_cache(&self) -> Result<(), ArchiveError> {
        Ok(())
    }
}

/// Extraction directory that is removed when dropped.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    /// Create `path`. Fails if it already exists.
    pub fn create(path: PathBuf) -> Result<Self, ArchiveError> {
        if path.exists() {
            return Err(ArchiveError::WorkDirExists(path));
        }
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every file below the directory, naturally sorted by relative path.
    pub fn files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_files(&self.path, &mut files)?;
        files.sort_by(|a, b| natural_cmp(&self.relative(a), &self.relative(b)));
        Ok(files)
    }

    pub fn images(&self) -> io::Result<Vec<PathBuf>> {
        Ok(self.files()?.into_iter().filter(|p| is_image(p)).collect())
    }

    /// Delete everything that is not an image. Returns the removed paths.
    pub fn remove_extras(&self) -> io::Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for file in self.files()? {
            if !is_image(&file) {
                log::debug!("Deleting {}", self.relative(&file));
                fs::remove_file(&file)?;
                removed.push(file);
            }
        }
        Ok(removed)
    }

    /// Move the images to the top level as `{stem}-{index}.{ext}`, the index
    /// zero-padded to the digit count of the image total.
    pub fn rename_images(&self, stem: &str) -> io::Result<()> {
        let images = self.images()?;
        let width = images.len().to_string().len();

        // Two passes so a new name never lands on an image not yet moved.
        let mut staged = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let ext = extension(image);
            let tmp = self.path.join(format!(".longbox-{index}.{ext}"));
            fs::rename(image, &tmp)?;
            staged.push((tmp, index, ext));
        }
        for (tmp, index, ext) in staged {
            let name = format!("{stem}-{index:0width$}.{ext}");
            fs::rename(&tmp, self.path.join(name))?;
        }
        Ok(())
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.path)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_dir_all(&self.path) {
                log::warn!("Failed to remove {}: {e}", self.path.display());
            }
        }
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

pub fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension(path).as_str())
}

fn is_sidecar(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(SidecarKind::from_file_name)
        .is_some()
}

/// `.cbz` / `.zip` archives.
pub struct ZipStore {
    cache_root: PathBuf,
}

impl ZipStore {
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
        }
    }

    fn write_zip(&self, work: &WorkDir, destination: &Path) -> Result<(), ArchiveError> {
        let mut zip = ZipWriter::new(File::create(destination)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for file in work.files()? {
            let name = work.relative(&file);
            if is_image(&file) || is_sidecar(&file) {
                zip.start_file(name, options)?;
                io::copy(&mut File::open(&file)?, &mut zip)?;
            } else {
                log::warn!("Unsupported file found: {name}");
            }
        }
        zip.finish()?;
        Ok(())
    }
}

impl ArchiveStore for ZipStore {
    fn supports(&self, path: &Path) -> bool {
        matches!(extension(path).as_str(), "cbz" | "zip")
    }

    fn extract(&self, source: &Path) -> Result<WorkDir, ArchiveError> {
        if !self.supports(source) {
            return Err(ArchiveError::Unsupported(source.display().to_string()));
        }
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| ArchiveError::Unsupported(source.display().to_string()))?;
        log::info!("Extracting {}", source.display());

        let work = WorkDir::create(self.cache_root.join(stem))?;
        let mut archive = ZipArchive::new(File::open(source)?)?;
        archive.extract(work.path())?;
        Ok(work)
    }

    fn pack(&self, work: &WorkDir, _metadata: &Metadata, target: &Path) -> Result<(), ArchiveError> {
        if target.exists() {
            return Err(ArchiveError::PathCollision(target.to_path_buf()));
        }
        let file_name = target
            .file_name()
            .ok_or_else(|| ArchiveError::Unsupported(target.display().to_string()))?;
        let stem = target
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        log::info!("Archiving {}", file_name.to_string_lossy());

        work.rename_images(&stem)?;

        let staging_dir = work.path().parent().unwrap_or(work.path());
        let staging = staging_dir.join(file_name);
        if staging.exists() {
            return Err(ArchiveError::PathCollision(staging));
        }
        if let Err(e) = self.write_zip(work, &staging) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        move_file(&staging, target)?;
        Ok(())
    }

    fn clear_cache(&self) -> Result<(), ArchiveError> {
        if !self.cache_root.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.cache_root)? {
            let path = entry?.path();
            log::debug!("Clearing {}", path.display());
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

/// Rename, falling back to copy + delete across filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
