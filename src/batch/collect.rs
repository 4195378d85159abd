//! Input collection for batch runs.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use crossbeam::queue::SegQueue;
use jwalk::WalkDir;

/// Lock-free parallel result collector using `SegQueue`
pub struct ParallelCollector<T> {
    queue: SegQueue<T>,
}

impl<T> ParallelCollector<T> {
    /// Create a new empty collector.
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: SegQueue::new(),
        }
    }

    /// Push an item (lock-free, wait-free).
    #[inline]
    pub fn push(&self, item: T) {
        self.queue.push(item);
    }

    /// Number of collected items.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain all items with pre-allocated capacity.
    pub fn drain_with_capacity(self, capacity: usize) -> Vec<T> {
        let mut results = Vec::with_capacity(capacity);
        while let Some(item) = self.queue.pop() {
            results.push(item);
        }
        results
    }
}

impl<T> Default for ParallelCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `path` has the `.svg` extension (any case).
#[inline]
pub fn is_svg_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Collect all `*.svg` files below `dir`, sorted.
pub fn collect_svg_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_svg_file(p))
        .collect();
    files.sort();
    files
}

/// Expand CLI paths into the list of files to convert.
///
/// - `-` alone: read paths from stdin (one per line)
/// - directory: every `*.svg` below it
/// - file: taken as given, whatever its extension
///
/// Paths that do not exist are an error; duplicates are removed.
pub fn collect_svg_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for path in &paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(collect_svg_dir(path));
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    let mut seen = rustc_hash::FxHashSet::default();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    read_paths(io::stdin().lock())
}

fn read_paths(reader: impl BufRead) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}
