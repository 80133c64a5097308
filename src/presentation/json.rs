// src/presentation/json.rs
use chrono::{DateTime, Local};
use project_stats_domain::{FileStamp, LanguageAggregate, RankedFile, RelativeAge, ScanResult};
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub total_files: usize,
    pub total_lines: usize,
    pub languages: Vec<LanguageDto>,
    pub largest_files: Vec<RankedFileDto>,
    pub empty_files: usize,
    pub small_files: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newest_file: Option<FileAgeDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_file: Option<FileAgeDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDto {
    pub ext: String,
    pub name: String,
    pub lines: usize,
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedFileDto {
    pub path: String,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAgeDto {
    pub path: String,
    pub time_ago: String,
}

impl ScanResponse {
    pub fn from_result(result: &ScanResult, now: &DateTime<Local>) -> Self {
        Self {
            total_files: result.total_files.value(),
            total_lines: result.total_lines.value(),
            languages: result.languages.iter().map(LanguageDto::from).collect(),
            largest_files: result.largest_files.iter().map(RankedFileDto::from).collect(),
            empty_files: result.empty_files.value(),
            small_files: result.small_files.value(),
            newest_file: result.newest_file.as_ref().map(|stamp| FileAgeDto::new(stamp, now)),
            oldest_file: result.oldest_file.as_ref().map(|stamp| FileAgeDto::new(stamp, now)),
        }
    }
}

impl From<&LanguageAggregate> for LanguageDto {
    fn from(lang: &LanguageAggregate) -> Self {
        Self {
            ext: lang.ext.as_str().to_string(),
            name: lang.name.to_string(),
            lines: lang.lines.value(),
            files: lang.files.value(),
        }
    }
}

impl From<&RankedFile> for RankedFileDto {
    fn from(file: &RankedFile) -> Self {
        Self { path: file.path.to_string_lossy().into_owned(), lines: file.lines.value() }
    }
}

impl FileAgeDto {
    fn new(stamp: &FileStamp, now: &DateTime<Local>) -> Self {
        Self {
            path: stamp.path.to_string_lossy().into_owned(),
            time_ago: RelativeAge::between(stamp.modified.timestamp(), now).to_string(),
        }
    }
}
