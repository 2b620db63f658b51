pub const ELLIPSIS: &str = "...";

/// shortens `label` until `offset + measure(text)` fits within `limit`.
///
/// each pass drops four characters from the label body and appends an
/// ellipsis, so a label of n characters takes at most ⌈n/4⌉ passes. the
/// result never grows past the original length; it is either within the
/// limit or three characters or fewer, which may be the bare ellipsis.
pub fn truncate_label<F>(label: &str, offset: f32, limit: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    let mut body = label.chars().collect::<Vec<_>>();
    let mut text = label.to_string();
    while offset + measure(&text) > limit && text.chars().count() > 3 {
        body.truncate(body.len().saturating_sub(4));
        text = body.iter().collect::<String>() + ELLIPSIS;
    }
    text
}

#[cfg(test)]
mod test {
    use super::{truncate_label, ELLIPSIS};
    use std::cell::Cell;

    fn char_width(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(truncate_label("Burrard Stn", 10.0, 500.0, char_width), "Burrard Stn");
    }

    #[test]
    fn test_truncates_to_fit() {
        // 27 chars, 10px each, needs to end by 200px from an offset of 10
        let label = "Main Street-Science World S";
        let text = truncate_label(label, 10.0, 200.0, char_width);
        assert!(text.ends_with(ELLIPSIS));
        assert!(10.0 + char_width(&text) <= 200.0);
        assert_eq!(text, "Main Street-Sci...");
    }

    #[test]
    fn test_collapses_to_ellipsis() {
        let text = truncate_label("Lonsdale Quay", 100.0, 50.0, char_width);
        assert_eq!(text, ELLIPSIS);
    }

    #[test]
    fn test_short_labels_are_kept() {
        assert_eq!(truncate_label("R4", 100.0, 0.0, char_width), "R4");
        assert_eq!(truncate_label("", 100.0, 0.0, char_width), "");
    }

    #[test]
    fn test_iterations_are_bounded() {
        for length in 0..40usize {
            let label = "x".repeat(length);
            for limit in [-50.0, 0.0, 25.0, 80.0, 1000.0] {
                let calls = Cell::new(0usize);
                let text = truncate_label(&label, 10.0, limit, |t| {
                    calls.set(calls.get() + 1);
                    char_width(t)
                });
                let passes = calls.get() - 1;
                assert!(passes <= length.div_ceil(4));
                assert!(text.chars().count() <= length);
                assert!(10.0 + char_width(&text) <= limit || text.chars().count() <= 3);
            }
        }
    }

    #[test]
    fn test_multibyte_labels() {
        let text = truncate_label("Éécole Québec Stn", 0.0, 100.0, char_width);
        assert_eq!(text, "Éécol...");
        assert!(text.ends_with(ELLIPSIS));
    }
}
