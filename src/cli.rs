//! Command line arguments.

use crate::mode::Mode;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ocr-web-client")]
#[command(about = "Submit images to an OCR web service and inspect the results")]
#[command(version)]
pub struct Args {
    /// Base URL of the processing service
    #[arg(long, env = "OCR_SERVER_URL", default_value = "http://127.0.0.1:5001", global = true)]
    pub server: String,

    /// Request timeout in seconds
    #[arg(long, env = "OCR_TIMEOUT_SECS", default_value = "120", global = true)]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process an image and save the result
    Submit {
        /// Image to upload
        file: Option<PathBuf>,

        /// Processing mode (img_img or img_txt)
        #[arg(long, default_value = "img_img")]
        mode: Mode,

        /// Draw recognised text on a white page (img_img only)
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        white_background: bool,

        /// Directory the result is saved into
        #[arg(long, short, default_value = ".")]
        out: PathBuf,
    },

    /// Open an image in the viewer and replay a JSON array of input events,
    /// printing one transform snapshot per event
    Replay {
        /// Image to show in the viewer
        image: PathBuf,

        /// JSON event script
        script: PathBuf,

        /// Untransformed left edge of the image in the viewport
        #[arg(long, default_value = "0")]
        origin_x: f64,

        /// Untransformed top edge of the image in the viewport
        #[arg(long, default_value = "0")]
        origin_y: f64,
    },
}
