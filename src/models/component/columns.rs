use super::TrainError;

/// Returns the shared length of named dataset columns.
///
/// # Errors
///
/// Returns [`TrainError::MalformedDataset`] if any column is empty or the
/// columns have different lengths.
pub(crate) fn aligned_len(columns: &[(&str, usize)]) -> Result<usize, TrainError> {
    let Some(&(first_name, expected)) = columns.first() else {
        return Err(TrainError::malformed("dataset has no columns"));
    };

    if expected == 0 {
        return Err(TrainError::malformed(format!(
            "column {first_name} is empty"
        )));
    }

    for &(name, len) in &columns[1..] {
        if len != expected {
            return Err(TrainError::malformed(format!(
                "column {name} has {len} samples, column {first_name} has {expected}"
            )));
        }
    }

    Ok(expected)
}
