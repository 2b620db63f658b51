use super::{
    layout, palette, truncate_label, Badge, RenderRow, ReportAssets, ReportError, ReportOptions,
    ELLIPSIS,
};
use crate::aggregate::{CountEntry, RankOrder, TapCounts};
use image::{imageops, ImageFormat, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use retrace_gtfs::schedule::StopRoutesIndex;
use std::{collections::HashMap, io::Cursor};

/// everything a report draws from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// ranked entries, drawn in order
    pub entries: &'a [CountEntry],
    /// all counts; the summary total is taken from here, not from the
    /// displayed rows
    pub counts: &'a TapCounts,
    pub stop_routes: &'a StopRoutesIndex,
    /// key → display label
    pub labels: &'a HashMap<String, String>,
}

/// draws ranked counts as a bar chart with a title band.
#[derive(Debug, Default)]
pub struct ReportRenderer {
    assets: ReportAssets,
}

impl ReportRenderer {
    pub fn new(assets: ReportAssets) -> ReportRenderer {
        Self { assets }
    }

    pub fn assets(&self) -> &ReportAssets {
        &self.assets
    }

    /// resolves the rows that fit in `options.rows`
    pub fn rows(&self, input: &ReportInput, options: &ReportOptions) -> Vec<RenderRow> {
        input
            .entries
            .iter()
            .take(options.rows)
            .map(|entry| {
                RenderRow::resolve(entry, input.labels, input.stop_routes, |line| {
                    self.assets.has_icon(line)
                })
            })
            .collect()
    }

    pub fn render(
        &self,
        input: &ReportInput,
        options: &ReportOptions,
    ) -> Result<RgbaImage, ReportError> {
        let (width, height) = options.canvas_size(input.entries.len())?;
        let mut canvas = RgbaImage::from_pixel(width, height, palette::BACKGROUND);

        self.draw_header(&mut canvas, input, options);
        let max_count = max_count(input.entries, options.rank_order);
        for (index, row) in self.rows(input, options).iter().enumerate() {
            self.draw_row(&mut canvas, row, index, max_count, options.width);
        }
        Ok(canvas)
    }

    fn draw_header(&self, canvas: &mut RgbaImage, input: &ReportInput, options: &ReportOptions) {
        let typeface = &self.assets.typeface;
        if let Some(logo) = &self.assets.logo {
            imageops::overlay(canvas, logo, 0, 0);
        }
        let x = layout::header_text_x(self.assets.logo.is_some());
        typeface.draw(
            canvas,
            palette::TEXT,
            (x, layout::TITLE_Y),
            layout::TITLE_FONT_SIZE,
            &options.title,
        );
        let summary = summary_line(input.counts.total(), input.entries.len(), options);
        typeface.draw(
            canvas,
            palette::TEXT,
            (x, layout::SUMMARY_Y),
            layout::BODY_FONT_SIZE,
            &summary,
        );
    }

    fn draw_row(
        &self,
        canvas: &mut RgbaImage,
        row: &RenderRow,
        index: usize,
        max_count: u64,
        width: u32,
    ) {
        let typeface = &self.assets.typeface;
        let y = layout::row_top(index);

        let bar = layout::bar_width(row.count, max_count, width);
        if bar > 0 {
            let rect = Rect::at(0, y).of_size(bar, layout::ROW_HEIGHT);
            draw_filled_rect_mut(canvas, rect, palette::BAR);
        }
        typeface.draw(
            canvas,
            palette::TEXT,
            (width as i32 - layout::COUNT_INSET as i32, y),
            layout::BODY_FONT_SIZE,
            &format!("{:>3}", row.count),
        );

        for (badge_index, badge) in row.badges.iter().enumerate() {
            let x = row.badge_x(badge_index);
            match badge {
                Badge::Network(line) => {
                    if let Some(icon) = self.assets.icon(line) {
                        imageops::overlay(canvas, icon, x as i64, y as i64);
                    }
                }
                Badge::Route(number) => {
                    let chip = Rect::at(x, y)
                        .of_size(layout::ROUTE_CHIP_WIDTH, layout::ROUTE_CHIP_HEIGHT);
                    draw_filled_rect_mut(canvas, chip, palette::route_colour(number));
                    let (dx, dy) = layout::ROUTE_CHIP_TEXT_CENTRE;
                    typeface.draw_centred(
                        canvas,
                        palette::TEXT,
                        (x + dx, y + dy),
                        layout::BODY_FONT_SIZE,
                        number,
                    );
                }
            }
        }

        let label_x = row.label_x();
        let limit = width as f32 - layout::LABEL_INSET as f32;
        let label = truncate_label(&row.label, label_x as f32, limit, |text| {
            typeface.text_width(text, layout::BODY_FONT_SIZE)
        });
        if label != ELLIPSIS {
            typeface.draw(canvas, palette::TEXT, (label_x, y), layout::BODY_FONT_SIZE, &label);
        }
    }
}

/// "Taps: <total>; <category>: <entries>", or just the total without a
/// category label
pub fn summary_line(total: u64, entry_count: usize, options: &ReportOptions) -> String {
    match &options.category_label {
        Some(category) => format!("Taps: {total}; {category}: {entry_count}"),
        None => format!("Taps: {total}"),
    }
}

/// the count that gets a full-width bar
fn max_count(entries: &[CountEntry], rank_order: RankOrder) -> u64 {
    match rank_order {
        RankOrder::Descending => entries.first().map(|e| e.count).unwrap_or(0),
        RankOrder::Natural => entries.iter().map(|e| e.count).max().unwrap_or(0),
    }
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, ReportError> {
    let mut bytes = Cursor::new(Vec::new());
    canvas
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|source| ReportError::ImageEncodeError { source })?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod test {
    use super::{encode_png, summary_line, ReportInput, ReportRenderer};
    use crate::aggregate::{rank, CountKey, GroupBy, RankOrder, TapCounts};
    use crate::report::{palette, ReportKind};
    use retrace_gtfs::schedule::StopRoutesIndex;
    use std::collections::{BTreeMap, HashMap};

    fn station_counts(entries: &[(&str, u64)]) -> TapCounts {
        let counts = entries
            .iter()
            .map(|(label, count)| (CountKey::station(label), *count))
            .collect::<BTreeMap<_, _>>();
        TapCounts::from_counts(GroupBy::Station, counts)
    }

    #[test]
    fn test_canvas_size_and_bars() {
        let counts = station_counts(&[("A", 10), ("B", 5), ("C", 1)]);
        let entries = rank(&counts, RankOrder::Descending);
        let stop_routes = StopRoutesIndex::default();
        let labels = HashMap::new();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: &stop_routes,
            labels: &labels,
        };
        let mut options = ReportKind::Stops.default_options(entries.len());
        options.rows = 2;
        options.width = 200;

        let canvas = ReportRenderer::default()
            .render(&input, &options)
            .expect("valid options");
        assert_eq!(canvas.dimensions(), (200, 160 + 2 * 60));
        // full bar on the first row, half bar on the second
        assert_eq!(*canvas.get_pixel(199, 170), palette::BAR);
        assert_eq!(*canvas.get_pixel(99, 230), palette::BAR);
        assert_eq!(*canvas.get_pixel(101, 230), palette::BACKGROUND);
        assert_eq!(*canvas.get_pixel(5, 5), palette::BACKGROUND);
    }

    #[test]
    fn test_empty_ranking_is_header_only() {
        let counts = TapCounts::count(&[], GroupBy::Station);
        let entries = rank(&counts, RankOrder::Descending);
        let stop_routes = StopRoutesIndex::default();
        let labels = HashMap::new();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: &stop_routes,
            labels: &labels,
        };
        let options = ReportKind::Stops.default_options(0);
        let canvas = ReportRenderer::default()
            .render(&input, &options)
            .expect("valid options");
        assert_eq!(canvas.dimensions(), (1000, 160));
    }

    #[test]
    fn test_zero_counts_draw_no_bars() {
        let counts = TapCounts::count(&[], GroupBy::Hour);
        let entries = rank(&counts, RankOrder::Natural);
        let stop_routes = StopRoutesIndex::default();
        let labels = HashMap::new();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: &stop_routes,
            labels: &labels,
        };
        let options = ReportKind::Hours.default_options(entries.len());
        let canvas = ReportRenderer::default()
            .render(&input, &options)
            .expect("valid options");
        assert_eq!(canvas.dimensions(), (800, 160 + 24 * 60));
        assert_eq!(*canvas.get_pixel(0, 170), palette::BACKGROUND);
    }

    #[test]
    fn test_route_chip_colour() {
        let counts = station_counts(&[("50001", 2)]);
        let entries = rank(&counts, RankOrder::Descending);
        let stop_routes = serde_json::from_str::<StopRoutesIndex>(r#"{"50001": ["99"]}"#)
            .expect("valid index");
        let labels = HashMap::new();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: &stop_routes,
            labels: &labels,
        };
        let options = ReportKind::Stops.default_options(entries.len());
        let canvas = ReportRenderer::default()
            .render(&input, &options)
            .expect("valid options");
        assert_eq!(*canvas.get_pixel(12, 165), palette::route_colour("99"));
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let counts = station_counts(&[("A", 1)]);
        let entries = rank(&counts, RankOrder::Descending);
        let stop_routes = StopRoutesIndex::default();
        let labels = HashMap::new();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: &stop_routes,
            labels: &labels,
        };
        let mut options = ReportKind::Stops.default_options(1);
        options.width = 0;
        assert!(ReportRenderer::default().render(&input, &options).is_err());
        options.width = u32::MAX;
        assert!(ReportRenderer::default().render(&input, &options).is_err());
    }

    #[test]
    fn test_summary_line() {
        let stops = ReportKind::Stops.default_options(3);
        assert_eq!(summary_line(42, 3, &stops), "Taps: 42; Stops used: 3");
        let hours = ReportKind::Hours.default_options(24);
        assert_eq!(summary_line(42, 24, &hours), "Taps: 42");
    }

    #[test]
    fn test_encode_png() {
        let canvas = image::RgbaImage::from_pixel(4, 4, palette::BACKGROUND);
        let bytes = encode_png(&canvas).expect("png encodes");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
