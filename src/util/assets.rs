use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty stylesheet if the
/// asset is missing from the build.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_asset("main.css")
                .and_then(|bytes| String::from_utf8(bytes.into_owned()).ok())
                .unwrap_or_default()
        })
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            load_asset("favicon.svg")
                .map(|bytes| data_uri("image/svg+xml", &bytes))
                .unwrap_or_default()
        })
        .as_str()
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let asset = EmbeddedAssets::get(path).map(|file| file.data);
    if asset.is_none() {
        tracing::warn!(path, "embedded asset missing");
    }
    asset
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        assert!(main_css().contains(".data-table"));
    }

    #[test]
    fn favicon_is_a_data_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn encodes_data_uri() {
        assert_eq!(data_uri("text/plain", b"kol"), "data:text/plain;base64,a29s");
    }
}
