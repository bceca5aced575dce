//! Route suffixes of the prediction service, appended to the base URL

pub const PREDICT_CROP: &str = "/predict-crop";
pub const RECOMMEND_FERTILIZER: &str = "/recommend-fertilizer";
pub const ESTIMATE_YIELD: &str = "/estimate-yield";
pub const HEALTH: &str = "/health";
pub const STATISTICS: &str = "/statistics";
