//! Client for an OCR web service: submit an image in one of the processing
//! modes, show and save the result, and inspect output images in a pan/zoom
//! modal viewer.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod mode;
pub mod replay;
pub mod source;
pub mod submission;
pub mod surface;
#[cfg(test)]
mod test_support;
pub mod viewer;
