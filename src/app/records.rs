use crate::io::fetch_record;
use crate::record::{ParsedRecord, Program};
use color_eyre::eyre::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Boundary to whatever turns a program's output into a [`ParsedRecord`].
pub trait RecordLoader {
    fn load(&self, program: Program, directory: &str, file: &str) -> Result<ParsedRecord>;
}

/// Loader for records that were parsed ahead of time and stored as YAML
/// under `<root>/<directory>/<file>.yaml`.
pub struct YamlRecordLoader {
    root: PathBuf,
}

impl YamlRecordLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RecordLoader for YamlRecordLoader {
    fn load(&self, _program: Program, directory: &str, file: &str) -> Result<ParsedRecord> {
        fetch_record(&self.root, directory, file)
    }
}

type RecordKey = (Program, String, String);

/// Registry that caches loaded records, so each output is parsed at most
/// once per run.
pub struct RecordRegistry<L: RecordLoader> {
    loader: L,
    cache: HashMap<RecordKey, ParsedRecord>,
}

impl<L: RecordLoader> RecordRegistry<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cache: HashMap::new(),
        }
    }

    pub fn load(&mut self, program: Program, directory: &str, file: &str) -> Result<&ParsedRecord> {
        let key = (program, directory.to_string(), file.to_string());
        match self.cache.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                info!("Loading {} record {}/{}", program, directory, file);
                let record = self.loader.load(program, directory, file)?;
                Ok(entry.insert(record))
            }
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
