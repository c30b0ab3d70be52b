//! The harvest pipeline: driver contract, session lifecycle, result-set
//! loading, URL resolution, downloading, storage, and orchestration.

pub mod downloader;
pub mod driver;
pub mod loader;
pub mod orchestrator;
pub mod progress;
pub mod resolver;
pub mod session;
pub mod storage;

pub use downloader::{DownloadOutcome, ImageFetcher};
pub use driver::{CdpPage, CdpTile, ImageSearchPage, TileHandle};
pub use orchestrator::{harvest_unit, run_worklist};
pub use progress::{ConsoleProgress, NoOpProgress, ProgressReporter};
pub use resolver::ResolvedImage;
pub use session::SearchSession;
