// SPDX-License-Identifier: MPL-2.0
use iced_preview::app::{self, Flags};
use iced_preview::domain::media::source::is_valid_url;
use iced_preview::domain::media::ImageRef;
use iced_preview::infrastructure::{DefaultImageLoader, HandleRegistry};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

const HELP: &str = "\
Usage: iced_preview [OPTIONS] IMAGE...

Arguments:
  IMAGE...                 http(s)/file URLs or local file paths

Options:
  --config-dir DIR         Directory holding settings.toml
  --start-index N          Image shown first (0-based)
  -h, --help               Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });
    let start_index: Option<usize> = args.opt_value_from_str("--start-index").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --start-index");
        None
    });

    let registry = Arc::new(HandleRegistry::new());
    let images = args
        .finish()
        .into_iter()
        .filter_map(|arg| image_ref(arg, &registry))
        .collect();

    let loader = match DefaultImageLoader::with_registry(registry) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("failed to initialize the image loader: {err}");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        images,
        start_index,
        config_dir,
        loader,
    })
}

/// URLs are passed through; anything else is a local path behind a handle.
fn image_ref(arg: OsString, registry: &HandleRegistry) -> Option<ImageRef> {
    let Some(arg) = arg.to_str().map(str::to_owned) else {
        tracing::warn!(?arg, "skipping non UTF-8 argument");
        return None;
    };
    if is_valid_url(&arg) {
        return Some(ImageRef::Url(arg));
    }
    let path = PathBuf::from(&arg);
    let path = path.canonicalize().unwrap_or(path);
    Some(ImageRef::Handle(registry.register(path)))
}
