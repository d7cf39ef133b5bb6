use crate::error::AssetError;

/// Parse a 6-digit hex color (`#` prefix optional) into RGB bytes.
pub fn hex_to_rgb(color: &str) -> Result<(u8, u8, u8), AssetError> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AssetError::InvalidColor(color.to_string()));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&hex[start..start + 2], 16)
            .map_err(|_| AssetError::InvalidColor(color.to_string()))
    };

    Ok((channel(0)?, channel(2)?, channel(4)?))
}
