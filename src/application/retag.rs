//! Retag use case

use crate::domain::{AppVersion, MetadataRecord, VersionTag};
use crate::error::{Result, RetagError};
use crate::infrastructure::{FileSystemRepository, MetadataRepository, VersionSource};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct RetagOptions {
    pub dry_run: bool,
}

/// One record moved from its `info.json` to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetaggedRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagReport {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub records: Vec<RetaggedRecord>,
}

/// Rewrite every `info.json` under the repository into `output/`.
///
/// Root folders are listed up front; each root's version folders are listed and
/// processed before the next root is touched. `on_record` runs right after each
/// record is written (or, on a dry run, composed), so progress is reported even when
/// a later record aborts the run. The first error stops the batch; files already
/// written stay on disk.
pub fn retag_tree<F>(
    repository: &FileSystemRepository,
    options: RetagOptions,
    mut on_record: F,
) -> Result<RetagReport>
where
    F: FnMut(&RetaggedRecord),
{
    if !repository.root().is_dir() {
        return Err(RetagError::RootNotFound(repository.root().to_path_buf()));
    }

    if !options.dry_run {
        repository.ensure_output_dir()?;
    }

    let roots = repository.list_root_folders()?;
    info!(
        "Found {} root folder(s) under {}",
        roots.len(),
        repository.root().display()
    );

    let mut records = Vec::new();
    for root in &roots {
        for source in repository.list_sources(root)? {
            let retagged = retag_source(repository, &source, options.dry_run)?;
            on_record(&retagged);
            records.push(retagged);
        }
    }

    Ok(RetagReport {
        output_dir: repository.output_dir(),
        dry_run: options.dry_run,
        records,
    })
}

fn retag_source(
    repository: &FileSystemRepository,
    source: &VersionSource,
    dry_run: bool,
) -> Result<RetaggedRecord> {
    let contents = repository.read_info(&source.info_path)?;
    let (record, tag) = retag_record(&contents, source)?;
    let file_name = tag.file_name();

    let destination = if dry_run {
        repository.output_dir().join(&file_name)
    } else {
        repository.write_output(&file_name, &record.to_compact_json()?)?
    };

    debug!("{} / {} -> {}", source.root_id, source.ver_folder, file_name);

    Ok(RetaggedRecord {
        source: source.info_path.clone(),
        destination,
        version: tag.to_string(),
    })
}

/// Parse one record and replace its `Version` with the composed tag.
pub fn retag_record(
    contents: &str,
    source: &VersionSource,
) -> Result<(MetadataRecord, VersionTag)> {
    let mut record = MetadataRecord::parse(contents, &source.info_path)?;

    let version = record
        .version()
        .ok_or_else(|| RetagError::MissingVersion(source.info_path.clone()))?;
    let app = AppVersion::parse(version).ok_or_else(|| RetagError::NoVersionDigits {
        path: source.info_path.clone(),
        version: version.to_string(),
    })?;

    let tag = VersionTag::new(app, &source.ver_folder, &source.root_id);
    record.set_version(tag.to_string());

    Ok((record, tag))
}
