use crate::aggregate::{rank, CountEntry, NormalizationTable, TapCounts};
use crate::config::RetraceConfig;
use crate::report::{
    encode_png, ReportError, ReportInput, ReportKind, ReportOptions, ReportRenderer,
};
use crate::taps::{ParseSummary, TapLog, TapLogParser};
use image::RgbaImage;
use retrace_gtfs::schedule::{ScheduleCatalog, StopRoutesIndex};
use std::{collections::HashMap, sync::Arc};

/// the result of one report request, before encoding.
#[derive(Debug, Clone)]
pub struct Report {
    pub kind: ReportKind,
    pub summary: ParseSummary,
    pub counts: TapCounts,
    pub entries: Vec<CountEntry>,
    pub canvas: RgbaImage,
}

/// turns transaction log bytes into report images. the catalog, renderer and
/// tables are shared read-only, so a service can be cloned into any number
/// of worker threads.
#[derive(Debug, Clone)]
pub struct ReportService {
    catalog: Arc<ScheduleCatalog>,
    renderer: Arc<ReportRenderer>,
    parser: Arc<TapLogParser>,
    normalization: Arc<NormalizationTable>,
}

impl ReportService {
    pub fn new(
        catalog: Arc<ScheduleCatalog>,
        renderer: Arc<ReportRenderer>,
        normalization: NormalizationTable,
    ) -> Result<ReportService, ReportError> {
        Ok(Self {
            catalog,
            renderer,
            parser: Arc::new(TapLogParser::translink()?),
            normalization: Arc::new(normalization),
        })
    }

    /// loads the catalog and assets named in `config`. a schedule that fails
    /// integrity checks is an error; missing assets are not.
    pub fn try_from_config(config: &RetraceConfig) -> Result<ReportService, ReportError> {
        let catalog = config.load_catalog()?;
        log::info!("{catalog}");
        let renderer = ReportRenderer::new(config.load_assets());
        Self::new(
            Arc::new(catalog),
            Arc::new(renderer),
            NormalizationTable::new(&config.normalization),
        )
    }

    pub fn catalog(&self) -> &ScheduleCatalog {
        &self.catalog
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<TapLog, ReportError> {
        let log = self.parser.parse_bytes(bytes)?;
        log::debug!("{}", log.summary);
        Ok(log)
    }

    /// counts and ranks a tap log for `kind`, without drawing anything.
    pub fn ranked_counts(
        &self,
        bytes: &[u8],
        kind: ReportKind,
    ) -> Result<(TapLog, TapCounts, Vec<CountEntry>), ReportError> {
        let log = self.parse(bytes)?;
        let mut counts = TapCounts::count(&log.events, kind.group_by());
        self.normalization.apply(&mut counts);
        let entries = rank(&counts, kind.rank_order());
        Ok((log, counts, entries))
    }

    /// display labels for report keys; only stop reports have any
    pub fn labels(&self, kind: ReportKind) -> Option<&HashMap<String, String>> {
        kind.uses_catalog().then(|| self.catalog.stop_code_names())
    }

    /// route badges for report keys; only stop reports have any
    pub fn stop_routes(&self, kind: ReportKind) -> Option<&StopRoutesIndex> {
        kind.uses_catalog().then(|| self.catalog.stop_routes())
    }

    /// runs the full pipeline. without `options`, the defaults of `kind` are
    /// used.
    pub fn build_report(
        &self,
        bytes: &[u8],
        kind: ReportKind,
        options: Option<&ReportOptions>,
    ) -> Result<Report, ReportError> {
        let (log, counts, entries) = self.ranked_counts(bytes, kind)?;
        let options = match options {
            Some(options) => options.clone(),
            None => kind.default_options(entries.len()),
        };

        let no_labels = HashMap::new();
        let no_routes = StopRoutesIndex::default();
        let input = ReportInput {
            entries: &entries,
            counts: &counts,
            stop_routes: self.stop_routes(kind).unwrap_or(&no_routes),
            labels: self.labels(kind).unwrap_or(&no_labels),
        };
        let canvas = self.renderer.render(&input, &options)?;
        Ok(Report {
            kind,
            summary: log.summary,
            counts,
            entries,
            canvas,
        })
    }

    pub fn render_png(
        &self,
        bytes: &[u8],
        kind: ReportKind,
        options: Option<&ReportOptions>,
    ) -> Result<Vec<u8>, ReportError> {
        let report = self.build_report(bytes, kind, options)?;
        encode_png(&report.canvas)
    }

    pub fn stop_report(
        &self,
        bytes: &[u8],
        options: Option<&ReportOptions>,
    ) -> Result<Vec<u8>, ReportError> {
        self.render_png(bytes, ReportKind::Stops, options)
    }

    pub fn month_report(
        &self,
        bytes: &[u8],
        options: Option<&ReportOptions>,
    ) -> Result<Vec<u8>, ReportError> {
        self.render_png(bytes, ReportKind::Months, options)
    }

    pub fn hour_report(
        &self,
        bytes: &[u8],
        options: Option<&ReportOptions>,
    ) -> Result<Vec<u8>, ReportError> {
        self.render_png(bytes, ReportKind::Hours, options)
    }
}
