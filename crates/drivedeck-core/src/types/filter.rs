//! Filter specification for the dashboard item listings.
//!
//! Every predicate here is total: an unknown filter code degrades to the
//! pass-through variant and a missing timestamp is simply excluded from
//! every recency bucket. The engine must be safe to call on every
//! recomputation, so nothing in this module can fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Milliseconds per day, for elapsed-day bucketing.
const MS_PER_DAY: i64 = 86_400_000;

/// Horizon after which a last-modified timestamp falls in the `Older` bucket.
pub const OLDER_AFTER_ONE_YEAR: i64 = 365;

/// Horizon for the distinct `Older` bucket used by the date-added filter.
pub const OLDER_AFTER_TWO_YEARS: i64 = 730;

/// Extensions recognized as images.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "gif", "svg", "webp", "bmp"];
/// Extensions recognized as text documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx", "txt", "rtf", "odt"];
/// Extensions recognized as PDFs.
const PDF_EXTENSIONS: &[&str] = &["pdf"];
/// Extensions recognized as presentations.
const PRESENTATION_EXTENSIONS: &[&str] = &["ppt", "pptx", "key", "odp"];
/// Extensions recognized as spreadsheets.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv", "ods"];
/// Extensions recognized as video.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];
/// Extensions recognized as audio.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a"];

/// Item category filter.
///
/// `Folders` admits only folders; every file category admits only files
/// whose lowercase extension is on the corresponding allow-list. `Others`
/// is the complement of all known extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Pass-through: folders and files alike.
    #[default]
    All,
    /// Only folders.
    Folders,
    /// Image files.
    Images,
    /// Text documents.
    Documents,
    /// PDF files.
    Pdfs,
    /// Presentation files.
    Presentations,
    /// Spreadsheet files.
    Spreadsheets,
    /// Video files.
    Videos,
    /// Audio files.
    Audio,
    /// Files whose extension is not on any known allow-list.
    Others,
}

impl CategoryFilter {
    /// Parse a UI category code. Unknown codes degrade to [`Self::All`]
    /// so the engine stays pass-through rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code {
            "folders" => Self::Folders,
            "images" => Self::Images,
            "documents" => Self::Documents,
            "pdfs" => Self::Pdfs,
            "presentations" => Self::Presentations,
            "spreadsheets" => Self::Spreadsheets,
            "videos" => Self::Videos,
            "audio" => Self::Audio,
            "others" => Self::Others,
            _ => Self::All,
        }
    }

    /// The extension allow-list for a file category, if it has one.
    fn extensions(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Images => Some(IMAGE_EXTENSIONS),
            Self::Documents => Some(DOCUMENT_EXTENSIONS),
            Self::Pdfs => Some(PDF_EXTENSIONS),
            Self::Presentations => Some(PRESENTATION_EXTENSIONS),
            Self::Spreadsheets => Some(SPREADSHEET_EXTENSIONS),
            Self::Videos => Some(VIDEO_EXTENSIONS),
            Self::Audio => Some(AUDIO_EXTENSIONS),
            Self::All | Self::Folders | Self::Others => None,
        }
    }

    /// Whether an extension belongs to any known category.
    fn is_known_extension(ext: &str) -> bool {
        IMAGE_EXTENSIONS.contains(&ext)
            || DOCUMENT_EXTENSIONS.contains(&ext)
            || PDF_EXTENSIONS.contains(&ext)
            || PRESENTATION_EXTENSIONS.contains(&ext)
            || SPREADSHEET_EXTENSIONS.contains(&ext)
            || VIDEO_EXTENSIONS.contains(&ext)
            || AUDIO_EXTENSIONS.contains(&ext)
    }

    /// Evaluate this category against an item's file type.
    ///
    /// Folders carry no file type (`None`); files carry their extension.
    pub fn matches(self, file_type: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Folders => file_type.is_none(),
            Self::Others => match file_type {
                Some(ext) => !Self::is_known_extension(&ext.to_lowercase()),
                None => false,
            },
            _ => match (file_type, self.extensions()) {
                (Some(ext), Some(allowed)) => allowed.contains(&ext.to_lowercase().as_str()),
                _ => false,
            },
        }
    }
}

/// Recency bucket filter, applied to last-modified or date-added
/// timestamps.
///
/// Buckets are defined over elapsed whole days, computed by ceiling
/// division of the millisecond difference between "now" and the
/// timestamp. `Older` matches beyond a horizon supplied by the caller:
/// one year for last-modified, two years for date-added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyFilter {
    /// Pass-through.
    #[default]
    Any,
    /// Within the last day.
    Today,
    /// Within the last 7 days.
    ThisWeek,
    /// Within the last 30 days.
    ThisMonth,
    /// Within the last 365 days.
    ThisYear,
    /// Beyond the caller-supplied horizon.
    Older,
}

impl RecencyFilter {
    /// Parse a UI recency code. Unknown codes degrade to [`Self::Any`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "today" => Self::Today,
            "week" => Self::ThisWeek,
            "month" => Self::ThisMonth,
            "year" => Self::ThisYear,
            "older" => Self::Older,
            _ => Self::Any,
        }
    }

    /// Evaluate this bucket against a timestamp.
    ///
    /// A missing timestamp matches only the pass-through variant; every
    /// concrete bucket excludes it rather than failing.
    pub fn matches(
        self,
        timestamp: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        older_after_days: i64,
    ) -> bool {
        if self == Self::Any {
            return true;
        }
        let Some(ts) = timestamp else {
            return false;
        };
        let elapsed = elapsed_whole_days(ts, now);
        match self {
            Self::Any => true,
            Self::Today => elapsed <= 1,
            Self::ThisWeek => elapsed <= 7,
            Self::ThisMonth => elapsed <= 30,
            Self::ThisYear => elapsed <= 365,
            Self::Older => elapsed > older_after_days,
        }
    }
}

/// Elapsed whole days from `ts` to `now`, rounded up.
///
/// A timestamp a few hours old counts as one elapsed day; a future
/// timestamp yields zero or a negative count and therefore lands in the
/// `Today` bucket.
pub fn elapsed_whole_days(ts: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (now - ts).num_milliseconds();
    let days = ms.div_euclid(MS_PER_DAY);
    if ms.rem_euclid(MS_PER_DAY) != 0 {
        days + 1
    } else {
        days
    }
}

/// Ownership/people filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleFilter {
    /// Pass-through.
    #[default]
    Anyone,
    /// Items owned by the current user.
    Me,
    /// Items shared with at least one other person.
    Shared,
}

impl PeopleFilter {
    /// Parse a UI people code. Unknown codes degrade to [`Self::Anyone`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "me" => Self::Me,
            "shared" => Self::Shared,
            _ => Self::Anyone,
        }
    }

    /// Evaluate this filter against an item's owner and share count.
    pub fn matches(self, owner_id: UserId, shared_with: u32, current_user: UserId) -> bool {
        match self {
            Self::Anyone => true,
            Self::Me => owner_id == current_user,
            Self::Shared => shared_with > 0,
        }
    }
}

/// The full set of active filter predicates for one listing.
///
/// The default value passes every item through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Category predicate.
    pub category: CategoryFilter,
    /// Last-modified recency bucket.
    pub last_modified: RecencyFilter,
    /// Date-added recency bucket.
    pub date_added: RecencyFilter,
    /// Ownership predicate.
    pub people: PeopleFilter,
    /// Case-insensitive substring search term. Empty passes everything.
    pub search: String,
}

impl FilterSpec {
    /// Whether every predicate is pass-through.
    pub fn is_pass_through(&self) -> bool {
        self.category == CategoryFilter::All
            && self.last_modified == RecencyFilter::Any
            && self.date_added == RecencyFilter::Any
            && self.people == PeopleFilter::Anyone
            && self.search.trim().is_empty()
    }

    /// Construct a spec with only a search term set.
    pub fn search_only(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }
}
