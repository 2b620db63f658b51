use super::{layout, ReportError};
use crate::aggregate::{GroupBy, RankOrder};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// the bar chart reports retrace can draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// most used stations and bus stops
    Stops,
    /// taps per calendar month, busiest first
    Months,
    /// taps per hour of day, midnight first
    Hours,
}

impl ReportKind {
    pub fn group_by(&self) -> GroupBy {
        match self {
            ReportKind::Stops => GroupBy::Station,
            ReportKind::Months => GroupBy::Month,
            ReportKind::Hours => GroupBy::Hour,
        }
    }

    /// whether keys are stop codes that the schedule catalog can label and
    /// badge
    pub fn uses_catalog(&self) -> bool {
        matches!(self, ReportKind::Stops)
    }

    pub fn rank_order(&self) -> RankOrder {
        match self {
            ReportKind::Stops | ReportKind::Months => RankOrder::Descending,
            ReportKind::Hours => RankOrder::Natural,
        }
    }

    /// default title, width and row count. month reports show every month in
    /// the log, so the row count depends on `entry_count`.
    pub fn default_options(&self, entry_count: usize) -> ReportOptions {
        match self {
            ReportKind::Stops => ReportOptions {
                title: String::from("Top Transit Stops"),
                category_label: Some(String::from("Stops used")),
                width: 1000,
                rows: 14,
                rank_order: RankOrder::Descending,
            },
            ReportKind::Months => ReportOptions {
                title: String::from("Taps by Month"),
                category_label: Some(String::from("Months")),
                width: 800,
                rows: entry_count,
                rank_order: RankOrder::Descending,
            },
            ReportKind::Hours => ReportOptions {
                title: String::from("Taps by Hour"),
                category_label: None,
                width: 800,
                rows: 24,
                rank_order: RankOrder::Natural,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    /// names the entries in the summary line, e.g. "Stops used". without it
    /// the summary shows the tap total only.
    pub category_label: Option<String>,
    pub width: u32,
    /// maximum number of rows drawn
    pub rows: usize,
    /// order the entries were ranked in; sets the bar scale
    pub rank_order: RankOrder,
}

impl ReportOptions {
    /// (width, height) of the canvas for `entry_count` ranked entries. fails
    /// on a zero width or a canvas above [`layout::MAX_CANVAS_PIXELS`].
    pub fn canvas_size(&self, entry_count: usize) -> Result<(u32, u32), ReportError> {
        if self.width == 0 {
            return Err(ReportError::InvalidOptionsError(String::from(
                "report width must be positive",
            )));
        }
        let height = layout::canvas_height(self.rows, entry_count);
        let pixels = (self.width as u64).saturating_mul(height);
        if pixels > layout::MAX_CANVAS_PIXELS {
            return Err(ReportError::InvalidOptionsError(format!(
                "a {} x {height} report exceeds the limit of {} pixels",
                self.width,
                layout::MAX_CANVAS_PIXELS
            )));
        }
        let height = u32::try_from(height).map_err(|_| {
            ReportError::InvalidOptionsError(format!("report height {height} is too large"))
        })?;
        Ok((self.width, height))
    }
}
