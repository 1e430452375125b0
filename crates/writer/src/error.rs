use fig2ui_traits::AssetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Icon encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Storing asset failed: {0}")]
    Asset(#[from] AssetError),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
