//! Opaque image payload handed to the classifier port.

use std::fmt;

/// Raw image bytes for classification.
///
/// The engine never decodes, crops, or resizes images; the payload passes
/// through to whatever classifier adapter the host wires in. Encoding and
/// dimensions are a contract between the host and its classifier.
#[derive(Clone, PartialEq, Eq)]
pub struct LesionImage(Vec<u8>);

impl LesionImage {
    /// Wraps raw image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Debug prints the size, not the payload. Image bytes would swamp logs.
impl fmt::Debug for LesionImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LesionImage({} bytes)", self.0.len())
    }
}
