//! Immutable index segments and the reader contract searchers consume.

pub mod document;
pub mod fst_segment;
pub mod memory;
pub mod reader;

pub use self::document::{Document, DocumentBuilder, Field};
pub use self::fst_segment::FstSegment;
pub use self::memory::{MemSegment, MemSegmentBuilder};
pub use self::reader::{Reader, ReaderKind};
