//! Icon path resolution
//!
//! Upstream asset paths arrive in mixed case and reference raw texture
//! files; the CDN serves lowercased `.png` paths under a fixed root.

/// Community Dragon CDN root for game assets.
pub const CDRAGON_BASE: &str =
    "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default";

/// Asset-root prefix the upstream feeds embed in icon paths.
const ASSET_ROOT: &str = "/lol-game-data/assets/";

/// Resolve an upstream asset path to an absolute CDN URL.
///
/// Strips the asset-root prefix, lowercases the remainder, and rewrites a
/// trailing `.tex` or `.dds` extension to `.png`. An empty path stays
/// empty; no URL is fabricated for items without an icon.
pub fn convert_icon_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut clean = path.replace(ASSET_ROOT, "").to_lowercase();

    if let Some(stem) = clean.strip_suffix(".tex").or_else(|| clean.strip_suffix(".dds")) {
        clean = format!("{stem}.png");
    }

    format!("{CDRAGON_BASE}/{clean}")
}
