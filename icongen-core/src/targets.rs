//! Fixed launcher-icon size tables and where each bitmap goes inside a
//! Flutter-style project tree.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeEntry {
    pub id: &'static str,
    pub px: u32,
}

const fn entry(id: &'static str, px: u32) -> SizeEntry {
    SizeEntry { id, px }
}

/// Android mipmap density folder -> launcher size.
pub const ANDROID_SIZES: [SizeEntry; 5] = [
    entry("mipmap-mdpi", 48),
    entry("mipmap-hdpi", 72),
    entry("mipmap-xhdpi", 96),
    entry("mipmap-xxhdpi", 144),
    entry("mipmap-xxxhdpi", 192),
];

/// iOS `Icon-<id>.png` suffix -> pixel size.
pub const IOS_SIZES: [SizeEntry; 13] = [
    entry("20x20", 20),
    entry("29x29", 29),
    entry("40x40", 40),
    entry("58x58", 58),
    entry("60x60", 60),
    entry("76x76", 76),
    entry("80x80", 80),
    entry("87x87", 87),
    entry("120x120", 120),
    entry("152x152", 152),
    entry("167x167", 167),
    entry("180x180", 180),
    entry("1024x1024", 1024),
];

const ANDROID_RES_DIR: &str = "android/app/src/main/res";
const IOS_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    pub fn sizes(self) -> &'static [SizeEntry] {
        match self {
            Platform::Android => &ANDROID_SIZES,
            Platform::Ios => &IOS_SIZES,
        }
    }

    pub fn output_path(self, root: &Path, id: &str) -> PathBuf {
        match self {
            Platform::Android => root.join(ANDROID_RES_DIR).join(id).join("ic_launcher.png"),
            Platform::Ios => root.join(IOS_ICONSET_DIR).join(format!("Icon-{}.png", id)),
        }
    }

    pub fn targets(self, root: &Path) -> Vec<Target> {
        self.sizes()
            .iter()
            .map(|e| Target {
                platform: self,
                id: e.id,
                px: e.px,
                path: self.output_path(root, e.id),
            })
            .collect()
    }
}

/// One size table entry resolved against a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub platform: Platform,
    pub id: &'static str,
    pub px: u32,
    pub path: PathBuf,
}

/// Every target of both platforms, Android first, in table order.
pub fn plan<P: AsRef<Path>>(root: P) -> Vec<Target> {
    Platform::ALL
        .iter()
        .flat_map(|p| p.targets(root.as_ref()))
        .collect()
}
