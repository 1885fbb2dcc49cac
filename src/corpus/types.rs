use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::error::CorpusError;

/// One corpus entry, matching the on-disk `videoList.json` record shape.
///
/// The `*_eval_*` fields start as `null` and are filled in as the evaluator
/// works through the file, so every field except `video_url` tolerates
/// absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub comment_array: Vec<String>,
    #[serde(default)]
    pub trans_summary: Option<String>,
    #[serde(default)]
    pub comment_summary: Option<String>,
    #[serde(default)]
    pub trans_eval_score: Option<f32>,
    #[serde(default)]
    pub trans_eval_reason: Option<String>,
    #[serde(default)]
    pub comment_eval_score: Option<f32>,
    #[serde(default)]
    pub comment_eval_reason: Option<String>,
}

impl VideoRecord {
    /// Source text for judging the comment summary. Empty when no comments
    /// were collected.
    pub fn joined_comments(&self) -> Option<String> {
        if self.comment_array.is_empty() {
            None
        } else {
            Some(self.comment_array.join("\n"))
        }
    }
}

/// The `{"videoList": [...]}` wrapper used by the corpus files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoCorpus {
    #[serde(rename = "videoList")]
    pub video_list: Vec<VideoRecord>,
}

impl VideoCorpus {
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let raw = serde_json::to_string_pretty(self).map_err(|source| CorpusError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, raw).map_err(|source| CorpusError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
