//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VIDSYNTH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BIAS_THRESHOLD, DEFAULT_CORPUS_PASS_QUOTA, DEFAULT_JUDGE_DELAY_SECS,
    DEFAULT_JUDGE_THRESHOLD, DEFAULT_MIN_SUMMARY_WORDS,
};

/// Default model used when judging summary quality offline.
pub const DEFAULT_JUDGE_MODEL: &str = "gpt-4o-mini";

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VIDSYNTH_*` overrides on top of defaults.
/// All values are read once at startup; the bias threshold is the only setting
/// that can change afterwards, via the explicit threshold-update operation.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the sentence-encoder model directory (safetensors + tokenizer).
    /// `None` runs the encoder in deterministic stub mode.
    pub model_path: Option<PathBuf>,

    /// Whether bias detection runs during validation. Default: `true`.
    pub enable_bias_check: bool,

    /// Whether the comment summary is also bias-checked against the title.
    /// Default: `false` (comments are user-generated; title drift is expected).
    pub check_comment_bias: bool,

    /// Minimum whitespace-delimited word count for a summary. Default: `10`.
    pub min_summary_words: usize,

    /// Initial similarity threshold for bias detection. Default: `0.30`.
    pub bias_threshold: f32,

    /// Model identifier for the offline quality judge.
    pub judge_model: String,

    /// Pass threshold for a single judged summary. Default: `0.70`.
    pub judge_threshold: f32,

    /// Judged checks that must pass for a corpus run to promote. Default: `15`.
    pub corpus_pass_quota: usize,

    /// Delay between judged records, in seconds. Default: `2`.
    pub judge_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            enable_bias_check: true,
            check_comment_bias: false,
            min_summary_words: DEFAULT_MIN_SUMMARY_WORDS,
            bias_threshold: DEFAULT_BIAS_THRESHOLD,
            judge_model: DEFAULT_JUDGE_MODEL.to_string(),
            judge_threshold: DEFAULT_JUDGE_THRESHOLD,
            corpus_pass_quota: DEFAULT_CORPUS_PASS_QUOTA,
            judge_delay_secs: DEFAULT_JUDGE_DELAY_SECS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VIDSYNTH_PORT";
    const ENV_BIND_ADDR: &'static str = "VIDSYNTH_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "VIDSYNTH_MODEL_PATH";
    const ENV_ENABLE_BIAS_CHECK: &'static str = "VIDSYNTH_ENABLE_BIAS_CHECK";
    const ENV_CHECK_COMMENT_BIAS: &'static str = "VIDSYNTH_CHECK_COMMENT_BIAS";
    const ENV_MIN_SUMMARY_WORDS: &'static str = "VIDSYNTH_MIN_SUMMARY_WORDS";
    const ENV_BIAS_THRESHOLD: &'static str = "VIDSYNTH_BIAS_THRESHOLD";
    const ENV_JUDGE_MODEL: &'static str = "VIDSYNTH_JUDGE_MODEL";
    const ENV_JUDGE_THRESHOLD: &'static str = "VIDSYNTH_JUDGE_THRESHOLD";
    const ENV_CORPUS_PASS_QUOTA: &'static str = "VIDSYNTH_CORPUS_PASS_QUOTA";
    const ENV_JUDGE_DELAY_SECS: &'static str = "VIDSYNTH_JUDGE_DELAY_SECS";

    /// Loads configuration from environment variables. Unset variables fall
    /// back to defaults; malformed numeric values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let enable_bias_check =
            Self::parse_bool_from_env(Self::ENV_ENABLE_BIAS_CHECK, defaults.enable_bias_check);
        let check_comment_bias =
            Self::parse_bool_from_env(Self::ENV_CHECK_COMMENT_BIAS, defaults.check_comment_bias);
        let min_summary_words =
            Self::parse_number_from_env(Self::ENV_MIN_SUMMARY_WORDS, defaults.min_summary_words)?;
        let bias_threshold =
            Self::parse_number_from_env(Self::ENV_BIAS_THRESHOLD, defaults.bias_threshold)?;
        let judge_model = Self::parse_string_from_env(Self::ENV_JUDGE_MODEL, defaults.judge_model);
        let judge_threshold =
            Self::parse_number_from_env(Self::ENV_JUDGE_THRESHOLD, defaults.judge_threshold)?;
        let corpus_pass_quota =
            Self::parse_number_from_env(Self::ENV_CORPUS_PASS_QUOTA, defaults.corpus_pass_quota)?;
        let judge_delay_secs =
            Self::parse_number_from_env(Self::ENV_JUDGE_DELAY_SECS, defaults.judge_delay_secs)?;

        Ok(Self {
            port,
            bind_addr,
            model_path,
            enable_bias_check,
            check_comment_bias,
            min_summary_words,
            bias_threshold,
            judge_model,
            judge_threshold,
            corpus_pass_quota,
            judge_delay_secs,
        })
    }

    /// Validates thresholds, counts, and paths. Out-of-range values are hard
    /// errors, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.bias_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "bias_threshold",
                value: self.bias_threshold,
            });
        }

        if !(0.0..=1.0).contains(&self.judge_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "judge_threshold",
                value: self.judge_threshold,
            });
        }

        if self.min_summary_words == 0 {
            return Err(ConfigError::InvalidMinSummaryWords);
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    // Numeric overrides are hard errors when malformed: a typo in a threshold
    // must not silently run the service on the default.
    fn parse_number_from_env<T: std::str::FromStr>(
        var_name: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: var_name,
                value,
            }),
            Err(_) => Ok(default),
        }
    }
}
