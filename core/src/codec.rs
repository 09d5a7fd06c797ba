use crate::ImageRef;

/// Serializes the ordered list as a JSON array of strings.
pub fn encode_image_refs(refs: &[ImageRef]) -> Option<String> {
    serde_json::to_string(refs).ok()
}

/// Parses a JSON array of strings. Anything else, including `null` or an
/// array holding non-string values, yields `None`.
pub fn decode_image_refs(raw: &str) -> Option<Vec<ImageRef>> {
    serde_json::from_str::<Vec<ImageRef>>(raw).ok()
}
