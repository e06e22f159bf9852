use crate::pipeline::run::FailurePolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_batch_size: usize,
    pub fail_fast: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let max_batch_size = std::env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        let fail_fast = std::env::var("FAIL_FAST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Self {
            port,
            max_batch_size,
            fail_fast,
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Report
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            max_batch_size: 1000,
            fail_fast: true,
        }
    }
}
