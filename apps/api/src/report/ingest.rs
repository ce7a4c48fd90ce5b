use crate::errors::AppError;

/// Decodes an uploaded contract as strict UTF-8.
///
/// Empty uploads are valid and decode to an empty string. Uploads larger than
/// `max_bytes` are rejected before decoding.
pub fn decode_contract(bytes: &[u8], max_bytes: usize) -> Result<String, AppError> {
    if bytes.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "Error reading file: upload is {} bytes, limit is {max_bytes}",
            bytes.len()
        )));
    }

    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| AppError::Validation(format!("Error reading file: {e}")))
}
