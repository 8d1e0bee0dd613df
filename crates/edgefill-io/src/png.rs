//! PNG image format support
//!
//! Every decoded image is normalized to 8-bit RGBA: 16-bit samples are
//! stripped to their high byte, palettes and low bit depths are expanded,
//! `tRNS` becomes an alpha channel, gray is replicated into R, G and B,
//! and a missing alpha channel is synthesized as fully opaque.

use crate::{IoError, IoResult};
use edgefill_core::{Pix, PixelDepth};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a 32 bpp RGBA `Pix`.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::DecodeError(format!(
            "unexpected output bit depth after expansion: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::DecodeError("palette was not expanded".to_string()));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if data.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "frame holds {} bytes, expected {} rows of {}",
            data.len(),
            height,
            bytes_per_row
        )));
    }

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        let row = &data[row_start..row_start + width as usize * samples];
        for px in row.chunks_exact(samples) {
            let expanded = match *px {
                [g] => [g, g, g, 0xff],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 0xff],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!(),
            };
            rgba.extend_from_slice(&expanded);
        }
    }
    let pix = Pix::from_rgba_bytes(width, height, &rgba)?;

    log::debug!("decoded {}x{} PNG ({:?} -> RGBA)", width, height, color_type);
    Ok(pix)
}

/// Write a 32 bpp image as 8-bit RGBA PNG.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(IoError::EncodeError(format!(
            "PNG output requires 32 bpp RGBA, got {} bpp",
            pix.depth().bits()
        )));
    }

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = pix.to_rgba_bytes()?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(width: u32, height: u32, ct: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut enc = Encoder::new(&mut out, width, height);
            enc.set_color(ct);
            enc.set_depth(depth);
            let mut w = enc.write_header().unwrap();
            w.write_image_data(data).unwrap();
            w.finish().unwrap();
        }
        out
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut pm = Pix::new(5, 5, PixelDepth::Bit32).unwrap().into_mut();
        pm.set_rgb(0, 0, 255, 0, 0).unwrap();
        pm.set_rgb(1, 1, 0, 255, 0).unwrap();
        pm.set_rgba(2, 2, 0, 0, 255, 17).unwrap();
        let pix: Pix = pm.into();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();
        let pix2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(pix2.get_rgba(0, 0), Some((255, 0, 0, 255)));
        assert_eq!(pix2.get_rgba(1, 1), Some((0, 255, 0, 255)));
        assert_eq!(pix2.get_rgba(2, 2), Some((0, 0, 255, 17)));
        assert!(pix.equals(&pix2));
    }

    #[test]
    fn test_read_gray_synthesizes_rgb_and_alpha() {
        let bytes = encode_raw(3, 1, ColorType::Grayscale, BitDepth::Eight, &[0, 128, 255]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit32);
        assert_eq!(pix.get_rgba(1, 0), Some((128, 128, 128, 255)));
        assert_eq!(pix.get_rgba(2, 0), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_read_rgb_adds_opaque_alpha() {
        let bytes = encode_raw(2, 1, ColorType::Rgb, BitDepth::Eight, &[1, 2, 3, 4, 5, 6]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some((1, 2, 3, 255)));
        assert_eq!(pix.get_rgba(1, 0), Some((4, 5, 6, 255)));
    }

    #[test]
    fn test_read_gray_alpha_keeps_alpha() {
        let bytes = encode_raw(
            2,
            2,
            ColorType::GrayscaleAlpha,
            BitDepth::Eight,
            &[10, 20, 30, 40, 50, 60, 70, 80],
        );
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(1, 0), Some((30, 30, 30, 40)));
        assert_eq!(pix.get_rgba(0, 1), Some((50, 50, 50, 60)));
        assert_eq!(pix.get_rgba(1, 1), Some((70, 70, 70, 80)));
    }

    #[test]
    fn test_read_16bit_strips_to_high_byte() {
        let bytes = encode_raw(
            1,
            1,
            ColorType::Rgb,
            BitDepth::Sixteen,
            &[0xab, 0x01, 0x12, 0xff, 0xff, 0x00],
        );
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some((0xab, 0x12, 0xff, 255)));
    }

    #[test]
    fn test_read_1bit_gray_expands() {
        // 0b1000_0000: first pixel white, rest black
        let bytes = encode_raw(2, 1, ColorType::Grayscale, BitDepth::One, &[0x80]);
        let pix = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((255, 255, 255)));
        assert_eq!(pix.get_rgb(1, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_read_garbage_is_decode_error() {
        let err = read_png(Cursor::new(b"not a png at all".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_write_gray_rejected() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        let err = write_png(&pix, Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }
}
