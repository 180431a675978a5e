use crate::error::ModelLoadError;

/// One label per line, in model output order. Blank lines are skipped.
pub fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_labels(path: &str) -> Result<Vec<String>, ModelLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Labels {
        path: path.to_string(),
        source,
    })?;

    let labels = parse_labels(&contents);
    if labels.is_empty() {
        return Err(ModelLoadError::EmptyLabels {
            path: path.to_string(),
        });
    }

    Ok(labels)
}
