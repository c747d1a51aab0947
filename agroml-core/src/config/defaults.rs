// Single source of truth for all default values.

// --- Gateway ---
pub const DEFAULT_CROP_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_DISEASE_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CROP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DISEASE_TIMEOUT_SECS: u64 = 15;
pub const PREDICT_PATH: &str = "/predict";

// --- Dedup ---
pub const DEFAULT_DEDUP_WINDOW_SECS: u64 = 3_600; // 1 hour

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "agroml.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
