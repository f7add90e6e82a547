//! Flat-file post listing.
//!
//! Posts live in a JSON array on disk. A missing file means no posts yet.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use identity::Post;

#[derive(Debug, thiserror::Error)]
pub enum PostsError {
    #[error("failed to read posts file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("posts file {} is not a JSON list of posts: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

/// Read every post from `path`, in file order.
///
/// # Errors
///
/// Returns [`PostsError`] if the file exists but cannot be read or parsed.
pub async fn load_posts(path: &Path) -> Result<Vec<Post>, PostsError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(PostsError::Read { path: path.to_owned(), source }),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&bytes).map_err(|source| PostsError::Parse { path: path.to_owned(), source })
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
