pub const IMAGE_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "heic", "heif",
];

/// Case-insensitive check for a `.<ext>` suffix from `IMAGE_EXTENSIONS`.
pub fn is_image_key(key: &str) -> bool {
    let key = key.to_lowercase();

    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| key.ends_with(&format!(".{}", ext)))
}
