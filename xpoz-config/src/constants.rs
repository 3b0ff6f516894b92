pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:1234/api";
pub const DEFAULT_IMAGE_SERVER: &str = "http://localhost:1234/asset";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_CONFIG_PATH: &str = "XPOZ_CONFIG";
pub const ENV_API_ENDPOINT: &str = "XPOZ_API_ENDPOINT";
pub const ENV_API_TOKEN: &str = "XPOZ_API_TOKEN";
pub const ENV_API_TIMEOUT_SECS: &str = "XPOZ_API_TIMEOUT_SECS";
pub const ENV_IMAGE_SERVER: &str = "XPOZ_IMAGE_SERVER";
pub const ENV_CAROUSEL_SPACING: &str = "XPOZ_CAROUSEL_SPACING";
pub const ENV_CAROUSEL_WINDOW: &str = "XPOZ_CAROUSEL_WINDOW";
pub const ENV_CAROUSEL_ZOOMED_SCALE: &str = "XPOZ_CAROUSEL_ZOOMED_SCALE";
pub const ENV_CAROUSEL_SWIPE_THRESHOLD: &str = "XPOZ_CAROUSEL_SWIPE_THRESHOLD";
