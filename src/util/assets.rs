use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static GLOBE_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            let bytes = embedded("main.css");
            String::from_utf8(bytes).expect("main.css is not valid UTF-8")
        })
        .as_str()
}

/// Returns a data URI for the wireframe-globe logo.
pub fn globe_data_uri() -> &'static str {
    GLOBE_DATA_URI
        .get_or_init(|| {
            let bytes = embedded("globe.svg");
            format!("data:image/svg+xml;base64,{}", encode_base64(&bytes))
        })
        .as_str()
}

fn embedded(name: &str) -> Vec<u8> {
    EmbeddedAssets::get(name)
        .unwrap_or_else(|| panic!("missing embedded asset: {name}"))
        .data
        .into_owned()
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let mut word = 0u32;
        for (index, byte) in chunk.iter().enumerate() {
            word |= u32::from(*byte) << (16 - 8 * index);
        }
        for position in 0..4 {
            if position <= chunk.len() {
                let sextet = (word >> (18 - 6 * position)) & 0x3f;
                output.push(TABLE[sextet as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_matches_known_vectors() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn both_assets_are_embedded() {
        assert!(EmbeddedAssets::get("main.css").is_some());
        assert!(EmbeddedAssets::get("globe.svg").is_some());
    }
}
