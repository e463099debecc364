/*!
# Dayport

Dayport is a one-shot batch converter: it reads a Day One XML journal export
(one property-list-style "day entry" file per journal entry, plus photos) and
writes a single consolidated JSON document matching another journaling
application's import schema.

## Architecture

The codebase follows a modular architecture mirroring the pipeline:

- `config`: Configuration loading and validation, including the device
  identity stamped onto every entry
- `errors`: Error handling infrastructure
- `model`: Output document types (`Entry`, `Photo`, `Journal`)
- `parser`: Streaming XML parsing of one source entry file
- `enrich`: Device provenance and photo-metadata synthesis
- `convert`: Directory traversal, aggregation and JSON serialization

Data flows strictly one way: walker → parser → enricher → aggregator →
serializer, fully sequentially.

## Usage Example

```rust,no_run
use dayport::convert;
use dayport::Config;

fn main() -> dayport::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let report = convert::run(&config)?;
    println!("converted {} entries", report.converted);
    Ok(())
}
```
*/

/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// The conversion pipeline: traversal, aggregation, serialization
pub mod convert;
/// Device provenance and photo-metadata enrichment
pub mod enrich;
/// Error types and utilities for error handling
pub mod errors;
/// Output document data model
pub mod model;
/// Streaming parser for source XML entry files
pub mod parser;

// Re-export important types for convenience
pub use config::{Config, DeviceIdentity};
pub use errors::{AppError, AppResult};
pub use model::{Entry, Journal, Photo};
