//! Theme state: accent discovery, palettes, and the sidebar section model.

use std::path::{Path, PathBuf};

use crate::ops::dominant_color;
use crate::pixmap::{load_pixmap, Rgb};

/// Accent used when no profile image yields one.
pub const DEFAULT_ACCENT: Rgb = Rgb::new(0x4a, 0x90, 0xe2);

/// Profile image file names probed by [`find_profile_image`], in order.
const PROFILE_CANDIDATES: [&str; 5] = [
    "perfil.png",
    "profile.png",
    "avatar.png",
    "perfil.jpg",
    "profile.jpg",
];

/// Locate the profile image in a directory.
///
/// Probes the well-known candidate names in order and returns the first that
/// exists, or `None` if the directory has no profile image.
#[must_use]
pub fn find_profile_image<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let dir = dir.as_ref();
    PROFILE_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Derive the accent color from an image file.
///
/// Returns the image's dominant color, or [`DEFAULT_ACCENT`] when the file is
/// missing, undecodable, or empty. Theming always succeeds; only the shade
/// varies.
#[must_use]
pub fn accent_from_image<P: AsRef<Path>>(path: P) -> Rgb {
    let path = path.as_ref();
    match load_pixmap(path).and_then(|pixmap| dominant_color(&pixmap)) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(
                "Could not derive accent from {}: {err}; using default",
                path.display()
            );
            DEFAULT_ACCENT
        }
    }
}

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// The resolved color set a renderer needs for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window: Rgb,
    pub sidebar: Rgb,
    pub border: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
}

impl Palette {
    /// Dark palette with the given accent.
    #[must_use]
    pub const fn dark(accent: Rgb) -> Self {
        Self {
            window: Rgb::new(0x20, 0x20, 0x20),
            sidebar: Rgb::new(0x2d, 0x2d, 0x30),
            border: Rgb::new(0x3f, 0x3f, 0x46),
            card: Rgb::new(0x2d, 0x2d, 0x30),
            text: Rgb::new(0xff, 0xff, 0xff),
            text_muted: Rgb::new(0x96, 0x96, 0x96),
            accent,
        }
    }

    /// Light palette with the given accent.
    #[must_use]
    pub const fn light(accent: Rgb) -> Self {
        Self {
            window: Rgb::new(0xf3, 0xf3, 0xf3),
            sidebar: Rgb::new(0xff, 0xff, 0xff),
            border: Rgb::new(0xe1, 0xe5, 0xe9),
            card: Rgb::new(0xf9, 0xf9, 0xf9),
            text: Rgb::new(0x32, 0x31, 0x30),
            text_muted: Rgb::new(0xa1, 0x9f, 0x9d),
            accent,
        }
    }
}

/// A mode paired with its resolved palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
}

impl Theme {
    /// Build the theme for a mode and accent color.
    #[must_use]
    pub const fn new(mode: ThemeMode, accent: Rgb) -> Self {
        let palette = match mode {
            ThemeMode::Dark => Palette::dark(accent),
            ThemeMode::Light => Palette::light(accent),
        };
        Self { mode, palette }
    }
}

/// The sidebar sections, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    System,
    Network,
    Performance,
    Personalization,
    Apps,
    Gaming,
    AutoFixer,
    Extras,
    Tweaks,
}

impl Section {
    /// Every section, in the order the sidebar lists them.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::System,
        Self::Network,
        Self::Performance,
        Self::Personalization,
        Self::Apps,
        Self::Gaming,
        Self::AutoFixer,
        Self::Extras,
        Self::Tweaks,
    ];

    /// Page heading shown when the section is active.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::System => "System Settings",
            Self::Network => "Network Settings",
            Self::Performance => "Performance Tuning",
            Self::Personalization => "Personalization",
            Self::Apps => "Applications",
            Self::Gaming => "Gaming Hub",
            Self::AutoFixer => "Auto Fixer",
            Self::Extras => "Icon Processing Tools",
            Self::Tweaks => "System Tweaks",
        }
    }

    /// One-line description shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => "Welcome to the main dashboard",
            Self::System => "Configure system parameters and monitoring",
            Self::Network => "Manage network connections and settings",
            Self::Performance => "Optimize system performance and resources",
            Self::Personalization => "Customize appearance and themes",
            Self::Apps => "Manage installed applications and software",
            Self::Gaming => "Gaming optimization and configuration",
            Self::AutoFixer => "Automatic system repair and optimization",
            Self::Extras => "Select an image and choose processing options",
            Self::Tweaks => "Advanced system tweaks and modifications",
        }
    }

    /// Stable lowercase identifier for the section.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::System => "system",
            Self::Network => "network",
            Self::Performance => "performance",
            Self::Personalization => "personalization",
            Self::Apps => "apps",
            Self::Gaming => "gaming",
            Self::AutoFixer => "autofixer",
            Self::Extras => "extras",
            Self::Tweaks => "tweaks",
        }
    }

    /// Whether this section's title contains `query`, case-insensitively.
    ///
    /// An empty query matches every section.
    #[must_use]
    pub fn matches(self, query: &str) -> bool {
        self.title().to_lowercase().contains(&query.to_lowercase())
    }

    /// The sections whose titles match `query`, in sidebar order.
    #[must_use]
    pub fn filter(query: &str) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|section| section.matches(query))
            .collect()
    }
}
