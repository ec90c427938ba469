//! 接続先（ビルド時定数）
//!
//! `FOOD_ESTIMATOR_ENDPOINT=https://... trunk build` のように指定する。

use food_estimator_common::{analyze_url, DEFAULT_BASE_URL};

pub fn endpoint_url() -> String {
    resolve(option_env!("FOOD_ESTIMATOR_ENDPOINT"))
}

fn resolve(base: Option<&str>) -> String {
    let base = base.filter(|b| !b.trim().is_empty()).unwrap_or(DEFAULT_BASE_URL);
    analyze_url(base).unwrap_or_else(|_| format!("{}/analyze", DEFAULT_BASE_URL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_estimator_common::HOSTED_BASE_URL;

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve(None), "http://localhost:5000/analyze");
        assert_eq!(resolve(Some("")), "http://localhost:5000/analyze");
    }

    #[test]
    fn test_resolve_custom() {
        assert_eq!(
            resolve(Some(HOSTED_BASE_URL)),
            format!("{}/analyze", HOSTED_BASE_URL)
        );
    }
}
