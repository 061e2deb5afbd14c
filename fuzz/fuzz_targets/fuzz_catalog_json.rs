#![no_main]

use libfuzzer_sys::fuzz_target;
use shelfmark::application::{CollectionView, RefreshOptions, ViewSettings};
use shelfmark::domain::ports::CatalogCounts;

fuzz_target!(|data: &[u8]| {
    // Fuzz catalog snapshot parsing and the full rebuild path - this should never panic
    if let Ok(counts) = serde_json::from_slice::<CatalogCounts>(data) {
        let mut view = CollectionView::new(ViewSettings::default());
        view.rebuild(counts, RefreshOptions::default());
        let _ = view.snapshot();
    }
});
