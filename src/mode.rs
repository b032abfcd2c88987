//! Processing modes offered by the OCR service.

use crate::error::ClientError;

/// Server-side processing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Image in, image out: recognised text redrawn onto the picture
    #[default]
    ImgImg,
    /// Image in, plain text out with approximate layout
    ImgTxt,
}

impl Mode {
    /// Parse from the endpoint name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "img_img" => Some(Self::ImgImg),
            "img_txt" => Some(Self::ImgTxt),
            _ => None,
        }
    }

    /// Endpoint name, also the path segment the request is posted to
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImgImg => "img_img",
            Self::ImgTxt => "img_txt",
        }
    }

    /// How the response body of this mode is interpreted
    pub fn result_kind(&self) -> ResultKind {
        match self {
            Self::ImgImg => ResultKind::Image,
            Self::ImgTxt => ResultKind::Text,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ClientError::UnknownMode(s.to_string()))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode-specific request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Paint recognised text on a blank white page instead of the original.
    /// Only sent for [`Mode::ImgImg`].
    pub white_background: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            white_background: true,
        }
    }
}

impl SubmitOptions {
    /// Extra multipart text fields for `mode`
    pub fn form_fields(&self, mode: Mode) -> Vec<(&'static str, String)> {
        match mode {
            Mode::ImgImg => vec![("white_background", self.white_background.to_string())],
            Mode::ImgTxt => vec![],
        }
    }
}

/// What a result payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Image,
    Text,
}

impl ResultKind {
    /// File name the result is saved under
    pub fn download_name(&self) -> &'static str {
        match self {
            Self::Image => "ocr_result.png",
            Self::Text => "ocr_result.txt",
        }
    }
}
