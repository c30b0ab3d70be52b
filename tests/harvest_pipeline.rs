//! Pipeline scenarios driven through a mock results page, with downloads
//! served by a local mock HTTP server.

mod common;

use std::path::Path;

use common::{MockDom, MockPage, TileSpec};
use faceharvest::config::HarvestConfig;
use faceharvest::crawl::downloader::ImageFetcher;
use faceharvest::crawl::orchestrator::harvest_unit;
use faceharvest::crawl::progress::NoOpProgress;
use faceharvest::worklist::CrawlUnit;

fn test_config(dataset_dir: &Path) -> HarvestConfig {
    HarvestConfig::builder()
        .dataset_dir(dataset_dir)
        .search_settle_ms(0)
        .scroll_settle_ms(0)
        .preview_settle_ms(0)
        .max_scroll_iterations(2)
        .build()
}

/// Five tiles, tiles 2 and 4 unresolvable, bound of three: exactly three
/// files, numbered 1..3, sourced from tiles 1, 3 and 5.
#[tokio::test]
async fn failed_resolutions_are_skipped_and_sequence_stays_dense() {
    let mut server = mockito::Server::new_async().await;
    let m1 = server
        .mock("GET", "/img/1.jpg")
        .with_body("one")
        .expect(1)
        .create_async()
        .await;
    let m3 = server
        .mock("GET", "/img/3.jpg")
        .with_body("three")
        .expect(1)
        .create_async()
        .await;
    let m5 = server
        .mock("GET", "/img/5.jpg")
        .with_body("five")
        .expect(1)
        .create_async()
        .await;

    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let dom = MockDom {
        heights: vec![100, 200, 200],
        tile_selector: Some("img.rg_i".to_string()),
        tiles: vec![
            // Tile 1: thumbnail is already a direct third-party URL
            TileSpec::with_src(&format!("{}/img/1.jpg", server.url())),
            // Tile 2: no source, no preview -> unresolvable
            TileSpec::unresolvable(),
            // Tile 3: data-URI thumbnail; preview pane carries the real URL
            // behind an engine-hosted placeholder that must be skipped
            TileSpec {
                src: Some("data:image/jpeg;base64,/9j/4AAQ".to_string()),
                ..TileSpec::default()
            }
            .with_preview(
                "img.sFlh5c",
                vec![
                    Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:3".to_string()),
                    Some(format!("{}/img/3.jpg", server.url())),
                ],
            ),
            // Tile 4: engine-hosted thumbnail and only engine-hosted previews
            TileSpec::with_src("https://encrypted-tbn0.gstatic.com/images?q=tbn:4").with_preview(
                "img.n3VNCb",
                vec![Some("https://www.google.com/logos/x.png".to_string())],
            ),
            // Tile 5: direct URL again
            TileSpec::with_src(&format!("{}/img/5.jpg", server.url())),
        ],
        ..MockDom::default()
    };
    let page = MockPage::new(dom);

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("X", "catA", 3);
    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 3);

    let cat_dir = dataset.path().join("catA");
    assert_eq!(std::fs::read(cat_dir.join("X_1.jpg")).unwrap(), b"one");
    assert_eq!(std::fs::read(cat_dir.join("X_2.jpg")).unwrap(), b"three");
    assert_eq!(std::fs::read(cat_dir.join("X_3.jpg")).unwrap(), b"five");
    assert!(!cat_dir.join("X_4.jpg").exists());

    m1.assert_async().await;
    m3.assert_async().await;
    m5.assert_async().await;
}

/// An exhausted selector chain yields an empty report, no files, and no
/// error out of the pipeline.
#[tokio::test]
async fn empty_result_set_reports_zero_without_failing() {
    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let page = MockPage::new(MockDom::default());
    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("Y", "catB", 10);

    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 0);
    assert!(!dataset.path().join("catB").exists());

    // The whole tile chain was probed, in configured order
    let dom = page.dom();
    let queries = &dom.borrow().queries;
    let chain: Vec<&str> = config.tile_selectors().iter().map(String::as_str).collect();
    let probed: Vec<&str> = queries.iter().map(String::as_str).collect();
    assert_eq!(probed, chain);
}

/// Downloading stops the instant the bound is reached: with five resolvable
/// tiles and a bound of two, the third URL is never requested.
#[tokio::test]
async fn max_count_bound_stops_downloads_immediately() {
    let mut server = mockito::Server::new_async().await;
    let hit1 = server
        .mock("GET", "/a/1.jpg")
        .with_body("a1")
        .expect(1)
        .create_async()
        .await;
    let hit2 = server
        .mock("GET", "/a/2.jpg")
        .with_body("a2")
        .expect(1)
        .create_async()
        .await;
    let never = server
        .mock("GET", "/a/3.jpg")
        .with_body("a3")
        .expect(0)
        .create_async()
        .await;

    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let tiles = (1..=5)
        .map(|i| TileSpec::with_src(&format!("{}/a/{}.jpg", server.url(), i)))
        .collect();
    let page = MockPage::new(MockDom {
        heights: vec![50, 50],
        tile_selector: Some("img.YQ4gaf".to_string()),
        tiles,
        ..MockDom::default()
    });

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("bounded", "catC", 2);
    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 2);
    hit1.assert_async().await;
    hit2.assert_async().await;
    never.assert_async().await;
}

/// A non-2xx response contributes nothing and the next resolved tile is
/// still attempted; the failed download's sequence index is reused.
#[tokio::test]
async fn failed_download_frees_its_sequence_index() {
    let mut server = mockito::Server::new_async().await;
    let bad = server
        .mock("GET", "/bad.jpg")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;
    let good = server
        .mock("GET", "/good.jpg")
        .with_body("ok")
        .expect(1)
        .create_async()
        .await;

    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let page = MockPage::new(MockDom {
        heights: vec![10, 10],
        tile_selector: Some("img.YQ4gaf".to_string()),
        tiles: vec![
            TileSpec::with_src(&format!("{}/bad.jpg", server.url())),
            TileSpec::with_src(&format!("{}/good.jpg", server.url())),
        ],
        ..MockDom::default()
    });

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("X", "catD", 10);
    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 1);
    let cat_dir = dataset.path().join("catD");
    assert_eq!(std::fs::read(cat_dir.join("X_1.jpg")).unwrap(), b"ok");
    assert_eq!(std::fs::read_dir(&cat_dir).unwrap().count(), 1);

    bad.assert_async().await;
    good.assert_async().await;
}

/// A stale tile handle (element removed mid-interaction) is treated like
/// any other unresolvable tile: skipped, with later tiles unaffected.
#[tokio::test]
async fn stale_tile_handles_do_not_halt_the_batch() {
    let mut server = mockito::Server::new_async().await;
    let _img = server
        .mock("GET", "/z/1.jpg")
        .with_body("z1")
        .create_async()
        .await;

    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let page = MockPage::new(MockDom {
        heights: vec![10, 10],
        tile_selector: Some("img.YQ4gaf".to_string()),
        tiles: vec![
            TileSpec::stale(),
            TileSpec::with_src(&format!("{}/z/1.jpg", server.url())),
        ],
        ..MockDom::default()
    });

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("X", "catF", 5);
    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 1);
    assert!(dataset.path().join("catF").join("X_1.jpg").exists());
}

/// A dead session surfaces as an error from the pipeline so the
/// orchestrator can absorb it at the unit boundary.
#[tokio::test]
async fn session_failure_escalates_out_of_the_pipeline() {
    let dataset = tempfile::tempdir().unwrap();
    let config = test_config(dataset.path());

    let page = MockPage::new(MockDom {
        fail_navigate: true,
        ..MockDom::default()
    });

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("X", "catG", 5);
    let result = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress).await;

    assert!(result.is_err());
    assert!(!dataset.path().join("catG").exists());
}

/// Scroll loop: growth stalls with no load-more affordance, so the loop
/// terminates early and tile location still proceeds.
#[tokio::test]
async fn stalled_growth_without_load_more_terminates_early() {
    let mut server = mockito::Server::new_async().await;
    let _img = server
        .mock("GET", "/s/1.jpg")
        .with_body("s1")
        .create_async()
        .await;

    let dataset = tempfile::tempdir().unwrap();
    let config = HarvestConfig::builder()
        .dataset_dir(dataset.path())
        .search_settle_ms(0)
        .scroll_settle_ms(0)
        .preview_settle_ms(0)
        .max_scroll_iterations(10)
        .build();

    let page = MockPage::new(MockDom {
        // initial 100, then 200 (growth), then flat
        heights: vec![100, 200, 200],
        tile_selector: Some("img.rg_i".to_string()),
        tiles: vec![TileSpec::with_src(&format!("{}/s/1.jpg", server.url()))],
        load_more_present: false,
        ..MockDom::default()
    });

    let fetcher = ImageFetcher::new(&config).unwrap();
    let unit = CrawlUnit::new("scrolling", "catE", 5);
    let report = harvest_unit(&page, &fetcher, &unit, &config, &NoOpProgress)
        .await
        .unwrap();

    assert_eq!(report.saved_count, 1);
    // Far fewer scrolls than the cap of 10: one that grew, one that stalled
    assert_eq!(page.dom().borrow().scrolls, 2);
    // Exactly one search navigation for the unit
    assert_eq!(page.dom().borrow().navigated.len(), 1);
}
