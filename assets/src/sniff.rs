//! Content-type detection from byte signatures.
//!
//! The catalog never trusts file extensions; the mime type is decided by the
//! payload's magic number at insertion time. Unrecognized payloads fall back
//! to `application/octet-stream` rather than failing.

use mime::Mime;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF87A: &[u8] = b"GIF87a";
const GIF89A: &[u8] = b"GIF89a";
const BMP: &[u8] = b"BM";
const ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00];

fn is_webp(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
}

fn parse_or_octet_stream(mime: &str) -> Mime {
    mime.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

/// Infers the mime type of `bytes` from its signature.
#[must_use]
pub fn sniff(bytes: &[u8]) -> Mime {
    if bytes.starts_with(PNG) {
        mime::IMAGE_PNG
    } else if bytes.starts_with(JPEG) {
        mime::IMAGE_JPEG
    } else if bytes.starts_with(GIF87A) || bytes.starts_with(GIF89A) {
        mime::IMAGE_GIF
    } else if is_webp(bytes) {
        parse_or_octet_stream("image/webp")
    } else if bytes.starts_with(ICO) {
        parse_or_octet_stream("image/x-icon")
    } else if bytes.starts_with(BMP) {
        mime::IMAGE_BMP
    } else {
        mime::APPLICATION_OCTET_STREAM
    }
}

#[cfg(test)]
mod tests {
    use super::sniff;

    #[test]
    fn recognizes_common_image_signatures() {
        assert_eq!(sniff(b"\x89PNG\r\n\x1a\n....").essence_str(), "image/png");
        assert_eq!(sniff(&[0xFF, 0xD8, 0xFF, 0xE0]).essence_str(), "image/jpeg");
        assert_eq!(sniff(b"GIF89a..").essence_str(), "image/gif");
        assert_eq!(sniff(b"GIF87a..").essence_str(), "image/gif");
        assert_eq!(sniff(b"RIFF\x00\x00\x00\x00WEBPVP8 ").essence_str(), "image/webp");
        assert_eq!(sniff(b"BM......").essence_str(), "image/bmp");
        assert_eq!(sniff(&[0x00, 0x00, 0x01, 0x00]).essence_str(), "image/x-icon");
    }

    #[test]
    fn unknown_signatures_fall_back_to_octet_stream() {
        assert_eq!(sniff(b"hello").essence_str(), "application/octet-stream");
        assert_eq!(sniff(&[]).essence_str(), "application/octet-stream");
        // A truncated RIFF header is not WebP.
        assert_eq!(sniff(b"RIFF").essence_str(), "application/octet-stream");
    }
}
