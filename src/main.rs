/*!
# Dayport - Journal Export Converter

Dayport converts a Day One XML journal export bundle into a single
consolidated JSON document matching another journaling application's import
schema. It is a one-shot batch converter: run it once from the directory
containing the export, and it writes the output document in full.

## Usage

```
dayport
```

There are no command-line flags. The run either succeeds (output file
written) or fails with a non-zero exit status and the error logged.

## Configuration

The application can be configured with the following environment variables:
- `DAYPORT_SOURCE`: The source bundle directory (defaults to "Journal_dayone")
- `DAYPORT_OUTPUT`: The output file path (defaults to "import_journal/Journal.json")
- `RUST_LOG`: Log filter (defaults to "info")
*/

use dayport::convert;
use dayport::errors::AppResult;
use dayport::Config;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the dayport converter.
///
/// Coordinates the overall application flow:
/// 1. Initializes structured logging
/// 2. Loads and validates configuration
/// 3. Runs the conversion pipeline
/// 4. Logs the summary report
///
/// # Errors
///
/// Returns the fatal error classes from the pipeline: source traversal
/// failure, destination open/create failure, or JSON encoding failure.
/// Per-entry failures are logged and skipped inside the pipeline and never
/// abort the run. A returned error terminates the process with a non-zero
/// exit status.
fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting dayport");

    let config = Config::load()?;
    config.validate()?;
    debug!("Source bundle: {:?}", config.source_dir);
    debug!("Output path: {:?}", config.output_path);

    let report = convert::run(&config)?;

    info!(
        "Conversion complete: {} converted, {} skipped",
        report.converted, report.skipped
    );
    Ok(())
}
