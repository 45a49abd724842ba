//! File icons by name and extension

use std::collections::HashMap;
use std::sync::LazyLock;

/// Icon for directory lines.
pub const FOLDER_ICON: &str = "📁";

/// Icon for files with no better match.
pub const DEFAULT_ICON: &str = "📄";

static EXTENSION_ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Code
        ("py", "🐍"),
        ("js", "📜"),
        ("ts", "📘"),
        ("jsx", "⚛️"),
        ("tsx", "⚛️"),
        ("java", "☕"),
        ("cpp", "⚙️"),
        ("c", "⚙️"),
        ("h", "📋"),
        ("cs", "🔷"),
        ("go", "🐹"),
        ("rs", "🦀"),
        ("php", "🐘"),
        ("rb", "💎"),
        ("swift", "🍎"),
        // Web
        ("html", "🌐"),
        ("css", "🎨"),
        ("scss", "🎨"),
        ("sass", "🎨"),
        ("vue", "💚"),
        ("svelte", "🧡"),
        // Data/Config
        ("json", "📋"),
        ("xml", "📋"),
        ("yaml", "⚙️"),
        ("yml", "⚙️"),
        ("toml", "📄"),
        ("ini", "⚙️"),
        ("cfg", "⚙️"),
        ("conf", "⚙️"),
        // Database
        ("sql", "🗄️"),
        ("db", "🗄️"),
        ("sqlite", "🗄️"),
        // Documents
        ("md", "📝"),
        ("txt", "📄"),
        ("pdf", "📕"),
        ("doc", "📘"),
        ("docx", "📘"),
        // Shell
        ("sh", "💻"),
        ("bash", "💻"),
        ("zsh", "💻"),
        ("ps1", "💻"),
        // Other
        ("dockerfile", "🐳"),
        ("env", "🔐"),
        ("gitignore", "🚫"),
        ("lock", "🔒"),
        ("jpg", "🖼️"),
        ("jpeg", "🖼️"),
        ("png", "🖼️"),
        ("gif", "🖼️"),
        ("svg", "🎨"),
    ])
});

/// Icon for a handful of well-known file names. Checked before extensions.
fn special_icon(lower_name: &str) -> Option<&'static str> {
    match lower_name {
        "dockerfile" => Some("🐳"),
        "readme.md" => Some("📖"),
        "license" => Some("⚖️"),
        "makefile" | "cmake" | "rakefile" => Some("🔨"),
        name if name.starts_with(".git") => Some("🔧"),
        _ => None,
    }
}

/// Pick the icon for a file name.
pub fn icon_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if let Some(icon) = special_icon(&lower) {
        return icon;
    }

    EXTENSION_ICONS
        .get(extension(&lower))
        .copied()
        .unwrap_or(DEFAULT_ICON)
}

/// Text after the last dot, ignoring leading dots: `.env` and `..json`
/// have no extension.
fn extension(name: &str) -> &str {
    let stem = name.trim_start_matches('.');
    match stem.rfind('.') {
        Some(idx) => &stem[idx + 1..],
        None => "",
    }
}
