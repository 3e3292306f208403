//! Stock thumbnail image.
//!
//! Cut files embed a small preview image. The converter does not render
//! artwork, so it ships a blank white 1-bit Windows bitmap instead.

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const PALETTE_LEN: u32 = 8;
/// Pixels per metre reported in the bitmap header (144 dpi).
const PIXELS_PER_METRE: u32 = 5669;

/// Builds an all-white monochrome BMP of the given size.
///
/// Rows are padded to four bytes as the format requires. The default
/// 88x88 image is 1118 bytes.
pub fn blank_bitmap(width: u32, height: u32) -> Vec<u8> {
    let row_len = width.div_ceil(32) * 4;
    let pixel_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + PALETTE_LEN;
    let file_len = pixel_offset + row_len * height;

    let mut bytes = Vec::with_capacity(file_len as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_len.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_offset.to_le_bytes());

    bytes.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
    bytes.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    bytes.extend_from_slice(&0u32.to_le_bytes()); // no compression
    bytes.extend_from_slice(&0u32.to_le_bytes()); // image size, may be 0 when uncompressed
    bytes.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    bytes.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes()); // colours used
    bytes.extend_from_slice(&2u32.to_le_bytes()); // important colours

    // Palette: index 0 black, index 1 white (BGRA, opaque).
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0xff]);
    bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);

    let full_bytes = (width / 8) as usize;
    let tail_bits = width % 8;
    for _ in 0..height {
        let mut row = vec![0u8; row_len as usize];
        row[..full_bytes].fill(0xff);
        if tail_bits > 0 {
            row[full_bytes] = 0xffu8 << (8 - tail_bits);
        }
        bytes.extend_from_slice(&row);
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    /// The stock 88x88 preview the cutting software ships with
    const STOCK_THUMBNAIL: &str = "Qk1eBAAAAAAAAD4AAAAoAAAAWAAAAFgAAAABAAEAAAAAAAAAAAAlFgAAJRYAAAIAAAACAAAAAAAA////////////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////\
        /////////wD//////////////wD//////////////wD//////////////wD//////////////wD/////////////\
        /wD//////////////wD//////////////wD//////////////wD//////////////wD//////////////wA=";

    #[test]
    fn test_default_thumbnail_layout() {
        let bmp = blank_bitmap(88, 88);
        assert_eq!(bmp.len(), 1118);
        assert_eq!(&bmp[0..2], b"BM");
        assert_eq!(u32::from_le_bytes([bmp[2], bmp[3], bmp[4], bmp[5]]), 1118);
        assert_eq!(bmp[10], 62);
        // First pixel row: 11 white bytes then one padding byte.
        assert_eq!(&bmp[62..73], &[0xff; 11]);
        assert_eq!(bmp[73], 0x00);
    }

    #[test]
    fn test_default_thumbnail_matches_stock_image() {
        let stock = STOCK_THUMBNAIL.replace(char::is_whitespace, "");
        let stock = STANDARD.decode(stock).unwrap();
        let bmp = blank_bitmap(88, 88);
        assert_eq!(&bmp[54..62], &[0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(bmp, stock);
    }

    #[test]
    fn test_partial_byte_rows_are_masked() {
        let bmp = blank_bitmap(3, 1);
        assert_eq!(bmp.len(), 62 + 4);
        assert_eq!(&bmp[62..66], &[0b1110_0000, 0, 0, 0]);
    }
}
