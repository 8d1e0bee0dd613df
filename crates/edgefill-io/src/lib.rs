//! edgefill-io - Image codec for the edgefill pipeline
//!
//! Converts between PNG files on disk and 32 bpp RGBA [`Pix`] buffers.
//!
//! - [`read_image`] decodes any PNG color model to 8-bit RGBA
//! - [`write_image`] encodes 8-bit RGBA, replacing the destination only
//!   once the whole file has been written

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use edgefill_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be opened or read,
/// [`IoError::DecodeError`] if it is not a well-formed PNG.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let pix = read_png(BufReader::new(file))?;
    log::debug!(
        "read {} ({}x{})",
        path.display(),
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Write an image to a file path.
///
/// The PNG is first written to a temporary file in the destination
/// directory and renamed over `path` only after encoding succeeded, so a
/// failed write never leaves a partial file behind.
///
/// # Errors
///
/// [`IoError::Io`] on any filesystem failure, [`IoError::EncodeError`]
/// if the encoder rejects the image.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        write_png(pix, &mut writer)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| IoError::Io(e.error))?;

    log::debug!(
        "wrote {} ({}x{})",
        path.display(),
        pix.width(),
        pix.height()
    );
    Ok(())
}
