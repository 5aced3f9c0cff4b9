// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::media::ImageRef;
use crate::infrastructure::loader::DefaultImageLoader;
use crate::ui::preview;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded preview message.
    Preview(preview::Message),
    /// The launcher's "Open preview" button.
    OpenPreview,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug)]
pub struct Flags {
    /// Images to preview, in order.
    pub images: Vec<ImageRef>,
    /// Image shown first when the preview opens.
    pub start_index: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Loader whose registry holds the local files passed on the command line.
    pub loader: DefaultImageLoader,
}
