/// Sniff a MIME type from magic bytes.
///
/// HEIC/HEIF brands hide inside the ftyp box, which `infer` misses for some
/// encoders, so that case is checked by hand first.
pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    if data.len() > 12 {
        let ftyp = &data[4..12];
        if ftyp.starts_with(b"ftyp") {
            let brand = &ftyp[4..8];
            if brand == b"heic" || brand == b"heif" || brand == b"hevc" {
                return Some("image/heic".to_string());
            }
        }
    }

    infer::get(data).map(|kind| kind.mime_type().to_string())
}

/// Canonicalize the aliases clients commonly send.
pub fn normalize_image_mime(mime_type: &str) -> String {
    let lowered = mime_type.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "image/jpg" => "image/jpeg".to_string(),
        _ => lowered,
    }
}

/// Image MIME types the vision model accepts.
pub fn is_supported_image_mime(mime_type: &str) -> bool {
    matches!(
        mime_type,
        "image/png" | "image/jpeg" | "image/webp" | "image/heic" | "image/heif"
    )
}

/// Pick the MIME type to send alongside image bytes.
///
/// The client's declared type wins when it is one the model supports;
/// otherwise the sniffed type is tried. `None` means the payload is not an
/// image the model can take.
pub fn resolve_image_mime(bytes: &[u8], declared: Option<&str>) -> Option<String> {
    let mut candidates = Vec::new();
    if let Some(declared) = declared {
        if !declared.trim().is_empty() {
            candidates.push(declared.to_string());
        }
    }
    if let Some(detected) = detect_mime_type(bytes) {
        candidates.push(detected);
    }

    for candidate in candidates {
        let normalized = normalize_image_mime(&candidate);
        if is_supported_image_mime(&normalized) {
            return Some(normalized);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
    ];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00];

    #[test]
    fn sniffs_common_image_magics() {
        assert_eq!(detect_mime_type(PNG_MAGIC).as_deref(), Some("image/png"));
        assert_eq!(detect_mime_type(JPEG_MAGIC).as_deref(), Some("image/jpeg"));
        assert_eq!(detect_mime_type(b"not an image"), None);
    }

    #[test]
    fn sniffs_heic_ftyp_box() {
        let mut data = vec![0x00, 0x00, 0x00, 0x18];
        data.extend_from_slice(b"ftypheic");
        data.extend_from_slice(&[0u8; 8]);
        assert_eq!(detect_mime_type(&data).as_deref(), Some("image/heic"));
    }

    #[test]
    fn normalizes_the_jpg_alias() {
        assert_eq!(normalize_image_mime("image/JPG"), "image/jpeg");
        assert_eq!(normalize_image_mime(" image/png "), "image/png");
    }

    #[test]
    fn declared_type_wins_when_supported() {
        assert_eq!(
            resolve_image_mime(PNG_MAGIC, Some("image/jpg")).as_deref(),
            Some("image/jpeg")
        );
        // Unsupported declaration falls back to the sniffed type.
        assert_eq!(
            resolve_image_mime(PNG_MAGIC, Some("application/pdf")).as_deref(),
            Some("image/png")
        );
        // Nothing usable at all.
        assert_eq!(resolve_image_mime(b"plain text", Some("text/plain")), None);
    }
}
