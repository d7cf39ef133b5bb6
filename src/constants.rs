use crate::splash::SplashSpec;

/// Directory holding the iOS app icons, relative to the project root
pub const ICON_DIR: &str = "icons/ios";
/// Source icons tried for the splash, largest resolution first
pub const ICON_CANDIDATES: [&str; 3] = ["1024.png", "512.png", "192.png"];
/// Filename of the canonical large icon
pub const CANONICAL_ICON: &str = "1024.png";
/// Edge length of the canonical large icon
pub const CANONICAL_ICON_SIZE: u32 = 1024;
/// Directory for generated launch images, relative to the project root
pub const SPLASH_DIR: &str = "splash";
/// Launch screen background
pub const SPLASH_BACKGROUND: &str = "#FDFBF7";
/// Icon edge as a fraction of the shorter canvas edge
pub const ICON_SCALE: f64 = 0.22;
/// Directories re-compressed by the PNG optimizer
pub const OPTIMIZE_DIRS: [&str; 2] = [ICON_DIR, SPLASH_DIR];

pub const SPLASH_SPECS: [SplashSpec; 3] = [
    // iPhone 14 Pro Max / 15 Pro Max
    SplashSpec::new(1290, 2796, "1290x2796.png"),
    // iPhone 14 Pro / 15 Pro
    SplashSpec::new(1179, 2556, "1179x2556.png"),
    // iPhone 13 / 14 / 15
    SplashSpec::new(1170, 2532, "1170x2532.png"),
];
