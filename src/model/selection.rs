use std::fmt;
use std::sync::Arc;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file chosen through the picker. Cloning shares the underlying bytes.
#[derive(Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string();

        Self {
            name,
            mime,
            bytes: Arc::from(bytes),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

/// Holds the current file. Every replacement moves to a new generation so
/// responses issued for an older file can be recognised.
#[derive(Debug, Default)]
pub struct Selection {
    file: Option<SelectedFile>,
    generation: Generation,
}

impl Selection {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn replace(&mut self, file: SelectedFile) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.file = Some(file);
        self.generation
    }
}
