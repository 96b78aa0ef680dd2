use shared::BUILD_AND_RUN_URL;

/// Settings handed to the HTTP request sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub build_url: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            build_url: BUILD_AND_RUN_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_build_service() {
        assert_eq!(
            SenderConfig::default().build_url,
            "http://localhost:5000/build_and_run"
        );
    }
}
