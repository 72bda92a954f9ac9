//! PNG encoding for rendered heatmaps.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: used when the image has ≤256 unique
//!   RGBA values. Heatmaps over a short ramp usually qualify.
//! - **RGBA PNG (color type 6)**: fallback for everything else.
//!
//! Pixels are written as straight (non-premultiplied) RGBA, which is what
//! PNG stores.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use heatmap_common::{HeatmapError, HeatmapResult};
use image::RgbaImage;
use tracing::debug;

/// PNG file signature
const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

const COLOR_TYPE_INDEXED: u8 = 3;
const COLOR_TYPE_RGBA: u8 = 6;

/// Encode an image, choosing indexed or RGBA layout automatically.
pub fn encode_png(image: &RgbaImage) -> HeatmapResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let pixels = image.as_raw();

    let png = match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices)?,
        None => encode_rgba(pixels, width, height)?,
    };

    debug!(width, height, bytes = png.len(), "Encoded PNG");
    Ok(png)
}

/// Encode `image` and write it to `path`.
pub fn write_png(path: impl AsRef<Path>, image: &RgbaImage) -> HeatmapResult<()> {
    let png = encode_png(image)?;
    std::fs::write(path.as_ref(), png)?;
    Ok(())
}

/// Pack RGBA bytes into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(pixel: &[u8]) -> u32 {
    u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]])
}

/// Collect the distinct colors of `pixels` and the index of every pixel.
///
/// Returns `None` once more than [`MAX_PALETTE_SIZE`] colors are seen.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut lookup: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for pixel in pixels.chunks_exact(4) {
        let packed = pack_color(pixel);
        let index = match lookup.get(&packed) {
            Some(&index) => index,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let index = palette.len() as u8;
                palette.push([pixel[0], pixel[1], pixel[2], pixel[3]]);
                lookup.insert(packed, index);
                index
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Indexed PNG with a PLTE chunk, plus tRNS when any entry is translucent.
fn encode_indexed(
    width: u32,
    height: u32,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> HeatmapResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height, COLOR_TYPE_INDEXED));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width as usize, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Truecolor PNG with an alpha channel.
fn encode_rgba(pixels: &[u8], width: u32, height: u32) -> HeatmapResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height, COLOR_TYPE_RGBA));

    let idat = deflate_scanlines(pixels, width as usize * 4, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// IHDR payload: 8-bit depth, deflate, no filter method extensions, no interlace.
fn header(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(color_type);
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    ihdr
}

/// Prefix every row with filter type 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], row_bytes: usize, rows: usize) -> HeatmapResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(rows * (row_bytes + 1));
    for row in data.chunks_exact(row_bytes.max(1)).take(rows) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&raw)
        .map_err(|e| HeatmapError::EncodeError(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| HeatmapError::EncodeError(format!("IDAT compression failed: {}", e)))
}

/// Append a length-prefixed, CRC-terminated chunk.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
