// SPDX-License-Identifier: MPL-2.0
//! Embedded resource tables.
//!
//! A table maps fully qualified, dot separated names to byte streams. Every
//! call to [`ResourceTable::open`] hands out a fresh stream which is released
//! when the returned box is dropped.
//!
//! Three implementations are provided:
//!
//! - [`ResourceMap`]: explicit name to stream-factory mapping filled by the
//!   embedding application
//! - [`EmbeddedAssets`]: a folder embedded at compile time with `rust-embed`
//! - [`DirectoryResources`]: the same view over a directory on disk

use crate::error::Result;
use crate::resource::name;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of named byte streams.
pub trait ResourceTable: Send + Sync {
    /// Opens the resource stored under `name`, or `None` when there is none.
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>>;

    /// Names of every resource in the table, sorted.
    fn names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }
}

type StreamFactory = Arc<dyn Fn() -> Box<dyn Read + Send> + Send + Sync>;

/// Explicit mapping from resource name to a byte stream factory.
#[derive(Clone, Default)]
pub struct ResourceMap {
    entries: HashMap<String, StreamFactory>,
}

impl ResourceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory producing a new stream for each open.
    pub fn insert_with<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Read + Send> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(factory));
        self
    }

    /// Registers static bytes, typically from `include_bytes!`.
    pub fn insert_bytes(&mut self, name: impl Into<String>, data: &'static [u8]) -> &mut Self {
        self.insert_with(name, move || -> Box<dyn Read + Send> { Box::new(Cursor::new(data)) })
    }

    /// Registers owned bytes shared between all opened streams.
    pub fn insert_owned(&mut self, name: impl Into<String>, data: Vec<u8>) -> &mut Self {
        let data: Arc<[u8]> = data.into();
        self.insert_with(name, move || -> Box<dyn Read + Send> {
            Box::new(Cursor::new(Arc::clone(&data)))
        })
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ResourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMap")
            .field("names", &self.names())
            .finish()
    }
}

impl ResourceTable for ResourceMap {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let factory = self.entries.get(name)?;
        let stream: Box<dyn Read + '_> = factory();
        Some(stream)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Files of a `rust-embed` folder exposed under `<Module>.<dotted path>`.
///
/// ```ignore
/// #[derive(rust_embed::RustEmbed)]
/// #[folder = "assets/"]
/// struct Assets;
///
/// let table = EmbeddedAssets::<Assets>::new("MyApp");
/// assert!(table.contains("MyApp.icons.star.svg"));
/// ```
pub struct EmbeddedAssets<E> {
    paths: HashMap<String, String>,
    _embed: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedAssets<E> {
    /// Indexes every embedded file under the given module name.
    #[must_use]
    pub fn new(module_name: &str) -> Self {
        let paths = E::iter()
            .map(|file| {
                let path = file.into_owned();
                (name::qualify(module_name, &path), path)
            })
            .collect();

        Self {
            paths,
            _embed: PhantomData,
        }
    }
}

impl<E> fmt::Debug for EmbeddedAssets<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets")
            .field("files", &self.paths.len())
            .finish()
    }
}

impl<E: RustEmbed> ResourceTable for EmbeddedAssets<E> {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let path = self.paths.get(name)?;
        let file = E::get(path)?;
        Some(Box::new(Cursor::new(file.data)))
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.paths.keys().cloned().collect();
        names.sort();
        names
    }

    fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }
}

/// Files below a directory exposed under `<Module>.<dotted path>`.
///
/// The directory is indexed once when the table is created; files are read
/// lazily on open.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
    paths: HashMap<String, PathBuf>,
}

impl DirectoryResources {
    /// Recursively indexes `root`.
    ///
    /// Returns an error if the directory (or one of its subdirectories)
    /// cannot be read.
    pub fn scan(root: &Path, module_name: &str) -> Result<Self> {
        let mut files = Vec::new();
        collect_files(root, &mut files)?;

        let paths = files
            .into_iter()
            .filter_map(|path| {
                let relative = path.strip_prefix(root).ok()?;
                let relative: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                Some((name::qualify(module_name, &relative.join("/")), path))
            })
            .collect();

        Ok(Self {
            root: root.to_path_buf(),
            paths,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

impl ResourceTable for DirectoryResources {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        let path = self.paths.get(name)?;
        match File::open(path) {
            Ok(file) => Some(Box::new(BufReader::new(file))),
            Err(err) => {
                log::warn!("Failed to open '{}': {}", path.display(), err);
                None
            }
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.paths.keys().cloned().collect();
        names.sort();
        names
    }

    fn contains(&self, name: &str) -> bool {
        self.paths.contains_key(name)
    }
}
