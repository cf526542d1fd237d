use std::path::Path;

use colored::Colorize;

/// Map dataset loading errors to user-friendly messages
/// Returns (headline, message, details)
pub fn map_dataset_load_error(error: &dyn std::error::Error, source: &str) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("No such file") || error_string.contains("404") {
        (
            "Dataset Not Found".to_string(),
            "The breed dataset could not be found.".to_string(),
            format!(
                "Source: {}\n\nCheck that large_dog_breeds.json exists there.",
                source
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read from:\n{}", source),
        )
    } else if error_string.contains("Connection refused")
        || error_string.contains("timed out")
        || error_string.contains("dns error")
    {
        (
            "Source Unreachable".to_string(),
            "The dataset source did not respond.".to_string(),
            format!(
                "Source: {}\n\nCheck the URL and your connection, or omit --data to use the built-in snapshot.",
                source
            ),
        )
    } else if error_string.contains("expected") || error_string.contains("missing field") {
        (
            "Malformed Dataset".to_string(),
            "The dataset is not valid breed JSON.".to_string(),
            error_string,
        )
    } else {
        (
            "Error Loading Dataset".to_string(),
            "Failed to load the breed dataset.".to_string(),
            error_string,
        )
    }
}

/// Map dataset saving errors to user-friendly messages
/// Returns (headline, message, details)
pub fn map_dataset_save_error(error: &dyn std::error::Error, path: &Path) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to write to:\n{}", path.display()),
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to save the dataset.".to_string(),
        )
    } else {
        (
            "Error Saving Dataset".to_string(),
            "Failed to save the breed dataset.".to_string(),
            error_string,
        )
    }
}

/// Message shown when the curation API cannot be reached at all, as opposed
/// to answering with a structured failure.
pub fn api_unreachable_message(api_base: &str) -> String {
    format!(
        "Could not reach the breeds API at {}. Make sure the curation server is running.",
        api_base
    )
}

/// Print a mapped failure triple to stderr.
pub fn report_failure(headline: &str, message: &str, details: &str) {
    eprintln!("{}", headline.red().bold());
    eprintln!("{}", message);
    if !details.is_empty() {
        eprintln!("{}", details.dimmed());
    }
}
