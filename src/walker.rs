//! Breadth-first, depth-bounded directory traversal.
//!
//! [`traverse`] yields every non-directory entry below a root, level by
//! level. Directories are queued together with their depth; the root is
//! depth 0. A `max_depth` of 0 means the walk is unbounded.

use globset::{GlobBuilder, GlobMatcher};
use std::collections::VecDeque;
use std::fs::{self, ReadDir};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// A directory waiting to be listed.
#[derive(Debug)]
struct TraversalTask {
    depth: usize,
    path: PathBuf,
}

/// Lazy iterator over the files below a root directory.
///
/// The iterator is single use. If a directory cannot be read the error is
/// yielded once and the traversal stops.
#[derive(Debug)]
pub struct Traversal {
    max_depth: usize,
    queue: VecDeque<TraversalTask>,
    current: Option<(usize, PathBuf, ReadDir)>,
    failed: bool,
}

/// Starts a breadth-first traversal of `root`.
pub fn traverse<P: AsRef<Path>>(root: P, max_depth: usize) -> Traversal {
    let mut queue = VecDeque::new();
    queue.push_back(TraversalTask { depth: 0, path: root.as_ref().to_path_buf() });
    Traversal { max_depth, queue, current: None, failed: false }
}

impl Traversal {
    /// Restricts the traversal to paths accepted by `matcher`.
    pub fn matching(self, matcher: PathMatcher) -> Matching {
        Matching { inner: self, matcher }
    }

    fn fail(&mut self, path: PathBuf, source: std::io::Error) -> Option<Result<PathBuf>> {
        self.failed = true;
        self.queue.clear();
        self.current = None;
        Some(Err(Error::TraversalError { path, source }))
    }
}

impl Iterator for Traversal {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((depth, dir, entries)) = self.current.as_mut() {
                match entries.next() {
                    Some(Ok(entry)) => {
                        let child = entry.path();
                        if child.is_dir() {
                            if self.max_depth == 0 || *depth < self.max_depth {
                                let depth = *depth + 1;
                                self.queue.push_back(TraversalTask { depth, path: child });
                            }
                        } else {
                            return Some(Ok(child));
                        }
                    }
                    Some(Err(e)) => {
                        let dir = dir.clone();
                        return self.fail(dir, e);
                    }
                    None => self.current = None,
                }
            } else {
                let task = self.queue.pop_front()?;
                match fs::read_dir(&task.path) {
                    Ok(entries) => self.current = Some((task.depth, task.path, entries)),
                    Err(e) => return self.fail(task.path, e),
                }
            }
        }
    }
}

/// A [`Traversal`] filtered through a [`PathMatcher`].
#[derive(Debug)]
pub struct Matching {
    inner: Traversal,
    matcher: PathMatcher,
}

impl Iterator for Matching {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(path) if !self.matcher.is_match(&path) => continue,
                item => return Some(item),
            }
        }
    }
}

/// Glob test anchored at the end of a path.
///
/// A relative pattern with N components is checked against the last N
/// components of the path, so `*.json` accepts `a/b/c.json` and
/// `*.anim/*.json` accepts `a/x.anim/y.json`. An absolute pattern has to
/// match the whole path. `*` never crosses a separator.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    matcher: GlobMatcher,
    components: usize,
    absolute: bool,
}

impl PathMatcher {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// * `Error::PatternError` if the glob is invalid
    /// * `Error::ConfigError` if the pattern is empty
    pub fn new(pattern: &str) -> Result<Self> {
        let components = pattern.split('/').filter(|part| !part.is_empty()).count();
        if components == 0 {
            return Err(Error::ConfigError(format!("empty file pattern '{pattern}'")));
        }
        let absolute = pattern.starts_with('/');
        let matcher =
            GlobBuilder::new(pattern).literal_separator(true).build()?.compile_matcher();
        Ok(Self { matcher, components, absolute })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        if self.absolute {
            return self.matcher.is_match(path);
        }
        let parts: Vec<_> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();
        if parts.len() < self.components {
            return false;
        }
        let tail = parts[parts.len() - self.components..].join("/");
        self.matcher.is_match(tail)
    }
}
