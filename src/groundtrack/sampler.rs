use crate::groundtrack::types::JulianDate;

/// Epochs at which the track is evaluated.
///
/// The first sample is `start + increment`, and the loop condition is checked
/// before adding the increment, so the final sample can land up to one
/// increment past `end`. The running value is accumulated by repeated addition.
pub fn sample_epochs(start: JulianDate, end: JulianDate, increment: f64) -> Vec<JulianDate> {
    let mut epochs = Vec::new();
    if !(increment > 0.0) {
        return epochs;
    }

    let mut cursor = start;
    while cursor <= end {
        cursor += increment;
        epochs.push(cursor);
    }

    epochs
}
