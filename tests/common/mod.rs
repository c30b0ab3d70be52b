//! In-memory mock of the browser driver contract.
//!
//! Models just enough of a results page for pipeline tests: a tile set
//! behind one selector, per-tile preview content revealed by clicking, and
//! a scripted sequence of document heights for the scroll loop.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use faceharvest::crawl::driver::{ImageSearchPage, TileHandle};

#[derive(Default, Clone)]
pub struct TileSpec {
    /// Value of the tile's `src` attribute.
    pub src: Option<String>,
    /// Preview selector -> element sources visible once this tile is open.
    pub preview: HashMap<String, Vec<Option<String>>>,
    /// Simulate a stale handle: every probe of this tile errors.
    pub stale: bool,
}

impl TileSpec {
    pub fn with_src(src: &str) -> Self {
        Self {
            src: Some(src.to_string()),
            preview: HashMap::new(),
            stale: false,
        }
    }

    pub fn unresolvable() -> Self {
        Self::default()
    }

    pub fn stale() -> Self {
        Self {
            stale: true,
            ..Self::default()
        }
    }

    pub fn with_preview(mut self, selector: &str, sources: Vec<Option<String>>) -> Self {
        self.preview.insert(selector.to_string(), sources);
        self
    }
}

#[derive(Default)]
pub struct MockDom {
    /// URLs passed to `navigate`.
    pub navigated: Vec<String>,
    /// Scripted `content_height` readings; the last value repeats.
    pub heights: Vec<i64>,
    pub height_idx: usize,
    /// Selector under which the tile set is exposed.
    pub tile_selector: Option<String>,
    pub tiles: Vec<TileSpec>,
    /// Index of the tile whose preview is currently open.
    pub open_tile: Option<usize>,
    pub load_more_present: bool,
    /// Fail every `navigate` call, as a dead browser session would.
    pub fail_navigate: bool,
    /// Number of scroll_to_bottom calls observed.
    pub scrolls: usize,
    /// Every selector passed to `find_all`, in call order.
    pub queries: Vec<String>,
}

#[derive(Clone)]
pub struct MockPage {
    dom: Rc<RefCell<MockDom>>,
}

impl MockPage {
    pub fn new(dom: MockDom) -> Self {
        Self {
            dom: Rc::new(RefCell::new(dom)),
        }
    }

    pub fn dom(&self) -> Rc<RefCell<MockDom>> {
        self.dom.clone()
    }
}

pub enum MockHandle {
    Tile {
        id: usize,
        dom: Rc<RefCell<MockDom>>,
    },
    Element {
        src: Option<String>,
    },
}

impl TileHandle for MockHandle {
    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        match self {
            MockHandle::Tile { id, dom } => {
                if dom.borrow().tiles[*id].stale {
                    anyhow::bail!("node with given id does not belong to the document");
                }
                if name != "src" {
                    return Ok(None);
                }
                Ok(dom.borrow().tiles[*id].src.clone())
            }
            MockHandle::Element { src } => {
                if name != "src" {
                    return Ok(None);
                }
                Ok(src.clone())
            }
        }
    }

    async fn click(&self) -> Result<()> {
        if let MockHandle::Tile { id, dom } = self {
            let stale = dom.borrow().tiles[*id].stale;
            if stale {
                anyhow::bail!("node with given id does not belong to the document");
            }
            dom.borrow_mut().open_tile = Some(*id);
        }
        Ok(())
    }
}

impl ImageSearchPage for MockPage {
    type Tile = MockHandle;

    async fn navigate(&self, url: &str) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        if dom.fail_navigate {
            anyhow::bail!("browser closed");
        }
        dom.navigated.push(url.to_string());
        Ok(())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<MockHandle>> {
        let mut dom = self.dom.borrow_mut();
        dom.queries.push(selector.to_string());

        if dom.tile_selector.as_deref() == Some(selector) && !dom.tiles.is_empty() {
            return Ok((0..dom.tiles.len())
                .map(|id| MockHandle::Tile {
                    id,
                    dom: self.dom.clone(),
                })
                .collect());
        }

        if let Some(open) = dom.open_tile
            && let Some(sources) = dom.tiles[open].preview.get(selector)
        {
            return Ok(sources
                .iter()
                .cloned()
                .map(|src| MockHandle::Element { src })
                .collect());
        }

        Ok(Vec::new())
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.dom.borrow_mut().scrolls += 1;
        Ok(())
    }

    async fn content_height(&self) -> Result<i64> {
        let mut dom = self.dom.borrow_mut();
        let height = if dom.heights.is_empty() {
            0
        } else {
            let idx = dom.height_idx.min(dom.heights.len() - 1);
            dom.heights[idx]
        };
        dom.height_idx += 1;
        Ok(height)
    }

    async fn click_if_present(&self, _selector: &str) -> Result<bool> {
        Ok(self.dom.borrow().load_more_present)
    }
}
