//! # ReadStream - Positional Streams over Sequences
//!
//! A small building block for hand-written lexers and parsers: a cursor that
//! walks a borrowed, indexable sequence (text, token buffers) and offers
//! lookahead, bounded slicing and value-terminated scanning without copying
//! the sequence.
//!
//! - **No faults at the boundaries**: reading past the end answers `None` or
//!   `false`; only the `try_*` operations return errors
//! - **Capabilities as traits**: reading ([`Stream`]) and writing
//!   ([`WriteStream`]) are separate traits, so a read-only stream simply has no
//!   write operations
//! - **Backtracking by copy**: streams are `Copy`, a saved copy is a mark
//!
//! ```rust
//! use readstream::{ReadStream, Stream};
//!
//! let mut stream = ReadStream::on("key=value;");
//! assert_eq!(stream.up_to(&'='), "key");
//! assert_eq!(stream.peek(), Some('v'));
//! assert_eq!(stream.up_to(&';'), "value");
//! assert_eq!(stream.next(), None);
//! ```

pub mod error;
pub mod positionable;
pub mod read_stream;
pub mod sequence;
pub mod stream;

pub use error::StreamError;
pub use positionable::{PositionableStream, VIRGIN};
pub use read_stream::{ReadStream, stream_on, stream_on_range};
pub use sequence::{ElementOf, Sequence};
pub use stream::{Stream, WriteStream};
