use formatx::formatx;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// Destination for report artifacts, keyed by artifact name (e.g.
/// "loads.json", "breakdown.csv").
pub trait Output: Debug {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op, so report rendering
    /// can be skipped entirely.
    fn is_noop(&self) -> bool {
        false
    }
}

/// Writes each artifact to a file named by substituting the location key
/// into the template (one `{}` slot, e.g. `"house__{}"`).
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        let file_name = formatx!(&self.file_template, location_key)?;
        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// Collects artifacts in memory, for tests and embedding callers that want
/// the rendered bytes without touching the filesystem.
#[derive(Clone, Debug, Default)]
pub struct MemoryOutput {
    artifacts: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes written for an artifact, if any were.
    pub fn artifact(&self, location_key: &str) -> Option<Vec<u8>> {
        self.artifacts.borrow().get(location_key).cloned()
    }

    pub fn artifact_string(&self, location_key: &str) -> Option<String> {
        self.artifact(location_key)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Output for MemoryOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        Ok(MemoryWriter {
            key: location_key.to_owned(),
            artifacts: Rc::clone(&self.artifacts),
        })
    }
}

impl Output for &MemoryOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        <MemoryOutput as Output>::writer_for_location_key(self, location_key)
    }
}

struct MemoryWriter {
    key: String,
    artifacts: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.artifacts
            .borrow_mut()
            .entry(self.key.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
