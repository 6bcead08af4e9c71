//! File system repository

use crate::error::{Result, RetagError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Name of the directory records are written into, and which is never scanned.
pub const OUTPUT_DIR: &str = "output";

/// Metadata file expected inside every version folder.
pub const INFO_FILE: &str = "info.json";

/// A first-level folder of the tree. Its name becomes the tag's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFolder {
    pub name: OsString,
    pub path: PathBuf,
}

/// An `info.json` found at `<root>/<root_id>/<ver_folder>/info.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSource {
    pub root_id: String,
    pub ver_folder: String,
    pub info_path: PathBuf,
}

/// Abstract repository for a two-level metadata tree
pub trait MetadataRepository {
    /// Get the working directory of this repository
    fn root(&self) -> &Path;

    /// Directory output records are written into
    fn output_dir(&self) -> PathBuf {
        self.root().join(OUTPUT_DIR)
    }

    /// Create the output directory if it does not exist yet
    fn ensure_output_dir(&self) -> Result<()>;

    /// First-level folders except `output`, in file name order
    fn list_root_folders(&self) -> Result<Vec<RootFolder>>;

    /// Version folders of `root` holding an `info.json`, in file name order
    fn list_sources(&self, root: &RootFolder) -> Result<Vec<VersionSource>>;
}

/// File system implementation of MetadataRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given working directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Repository rooted at the process's current directory
    pub fn current() -> Result<Self> {
        Ok(FileSystemRepository::new(std::env::current_dir()?))
    }

    /// Immediate subdirectories of `dir`, sorted by name. Symlinks are followed;
    /// dangling ones are skipped like any other non-directory entry.
    fn subdirectories(dir: &Path) -> Result<Vec<(OsString, PathBuf)>> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if Self::is_dangling(&err) => {
                    debug!("Skipping dangling entry: {:?}", err.path());
                    continue;
                }
                Err(err) => return Err(RetagError::Walk(err)),
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_os_string();
            dirs.push((name, entry.into_path()));
        }

        Ok(dirs)
    }

    fn is_dangling(err: &walkdir::Error) -> bool {
        err.depth() > 0
            && err
                .io_error()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
    }

    /// Read a file that is known to exist
    pub fn read_info(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(RetagError::Io)
    }

    /// Write an output record, replacing any earlier file of the same name.
    /// Content lands in a temp file first so readers never see a partial record.
    pub fn write_output(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir().join(file_name);

        let tmp_name = format!("{}.vertag-tmp-{}", file_name, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(err) = Self::replace_with(&tmp_path, &path, content) {
            if tmp_path.exists() {
                let _ = fs::remove_file(&tmp_path);
            }
            return Err(RetagError::Io(err));
        }

        Ok(path)
    }

    fn replace_with(tmp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
        fs::write(tmp_path, content)?;

        if path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)
    }
}

impl MetadataRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_output_dir(&self) -> Result<()> {
        let output = self.output_dir();
        if !output.is_dir() {
            debug!("Creating output directory {}", output.display());
        }
        fs::create_dir_all(&output).map_err(RetagError::Io)
    }

    fn list_root_folders(&self) -> Result<Vec<RootFolder>> {
        Ok(Self::subdirectories(&self.root)?
            .into_iter()
            .filter(|(name, _)| name != OUTPUT_DIR)
            .map(|(name, path)| RootFolder { name, path })
            .collect())
    }

    fn list_sources(&self, root: &RootFolder) -> Result<Vec<VersionSource>> {
        let mut sources = Vec::new();

        for (ver_name, ver_path) in Self::subdirectories(&root.path)? {
            let info_path = ver_path.join(INFO_FILE);
            if !info_path.is_file() {
                debug!("No {} in {}, skipping", INFO_FILE, ver_path.display());
                continue;
            }

            // The id is written into the record, so it has to be text
            let root_id = root
                .name
                .to_str()
                .ok_or_else(|| RetagError::NonUtf8Name(root.path.clone()))?
                .to_string();

            sources.push(VersionSource {
                root_id,
                ver_folder: ver_name.to_string_lossy().into_owned(),
                info_path,
            });
        }

        Ok(sources)
    }
}
