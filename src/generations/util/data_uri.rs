pub fn encode_png(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime::IMAGE_PNG, base64::encode(bytes))
}

/// Splits a base64 data uri into its media type and decoded payload.
pub fn decode(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (media_type, data) = rest.split_once(',')?;
    let media_type = media_type.strip_suffix(";base64")?;

    match base64::decode(data) {
        Ok(bytes) => Some((media_type.to_string(), bytes)),
        Err(e) => {
            tracing::warn!(%e);
            None
        }
    }
}
