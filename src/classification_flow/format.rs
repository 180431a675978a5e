use crate::image_classifier::interface::ClassificationResult;

/// `"(0.92) pizza |(0.05) bread"` for the top two entries with a `" |"` separator.
pub fn format_classifications(
    result: &ClassificationResult,
    count: usize,
    separator: &str,
) -> String {
    result
        .top(count)
        .iter()
        .map(|c| format!("({:.2}) {}", c.confidence, c.label))
        .collect::<Vec<_>>()
        .join(separator)
}
