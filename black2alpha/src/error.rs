use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlphaError>;

#[derive(Error, Debug)]
pub enum AlphaError {
    #[error("cannot decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write PNG to {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
