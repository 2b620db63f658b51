use super::{layout, NetworkLine};
use crate::aggregate::CountEntry;
use retrace_gtfs::schedule::StopRoutesIndex;
use std::collections::HashMap;

/// leading marker drawn in front of a row label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Network(NetworkLine),
    /// coloured chip carrying a route number
    Route(String),
}

impl Badge {
    pub fn pitch(&self) -> i32 {
        match self {
            Badge::Network(_) => layout::ICON_PITCH,
            Badge::Route(_) => layout::ROUTE_CHIP_PITCH,
        }
    }
}

/// one chart row, resolved for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub key: String,
    pub label: String,
    pub count: u64,
    pub badges: Vec<Badge>,
}

impl RenderRow {
    /// resolves the display label through `labels`, falling back to the raw
    /// key. stations on a rapid transit line get that line's icons when every
    /// icon in the set is available; otherwise stops in `stop_routes` get a
    /// chip per serving route.
    pub fn resolve<F>(
        entry: &CountEntry,
        labels: &HashMap<String, String>,
        stop_routes: &StopRoutesIndex,
        icon_available: F,
    ) -> RenderRow
    where
        F: Fn(&NetworkLine) -> bool,
    {
        let key = entry.key.to_string();
        let label = labels.get(&key).cloned().unwrap_or_else(|| key.clone());
        let badges = match NetworkLine::for_station(&label) {
            Some(lines) if lines.iter().all(&icon_available) => {
                lines.iter().map(|l| Badge::Network(*l)).collect()
            }
            _ => stop_routes
                .get(&key)
                .map(|routes| routes.iter().map(|r| Badge::Route(r.clone())).collect())
                .unwrap_or_default(),
        };
        Self {
            key,
            label,
            count: entry.count,
            badges,
        }
    }

    /// x position of the first badge at `index`
    pub fn badge_x(&self, index: usize) -> i32 {
        let pitch = self.badges.first().map(Badge::pitch).unwrap_or(0);
        layout::BADGE_X + pitch * index as i32
    }

    pub fn label_x(&self) -> i32 {
        match self.badges.first() {
            None => layout::LABEL_X,
            Some(badge) => layout::LABEL_X_AFTER_BADGES + badge.pitch() * self.badges.len() as i32,
        }
    }
}
