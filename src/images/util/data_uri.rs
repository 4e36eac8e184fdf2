use mime::Mime;

const DATA_IMAGE_PREFIX: &str = "data:image";

pub fn encode(mime_type: &Mime, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, base64::encode(bytes))
}

pub fn encode_png(bytes: &[u8]) -> String {
    encode(&mime::IMAGE_PNG, bytes)
}

/// Leaves image data URIs untouched and treats anything else as bare
/// base64 PNG data.
pub fn normalize(image: &str) -> String {
    if image.starts_with(DATA_IMAGE_PREFIX) {
        return image.to_string();
    }

    format!("data:{};base64,{}", mime::IMAGE_PNG, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_bytes() {
        assert_eq!(encode_png(b"png"), "data:image/png;base64,cG5n");
    }

    #[test]
    fn encodes_empty_body() {
        assert_eq!(encode_png(&[]), "data:image/png;base64,");
    }

    #[test]
    fn normalize_keeps_data_uris() {
        let uri = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(normalize(uri), uri);
    }

    #[test]
    fn normalize_prefixes_raw_base64() {
        assert_eq!(normalize("cG5n"), "data:image/png;base64,cG5n");
    }
}
