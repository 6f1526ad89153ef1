#![no_main]

use libfuzzer_sys::fuzz_target;
use lumina_discovery::models::{InvertedIndex, WorksResponse, reconstruct_abstract};

fuzz_target!(|data: &[u8]| {
    // Mapping must not panic for anything that decodes
    if let Ok(response) = serde_json::from_slice::<WorksResponse>(data) {
        for work in response.results {
            let _ = work.into_paper();
        }
    }

    if let Ok(index) = serde_json::from_slice::<InvertedIndex>(data) {
        let _ = reconstruct_abstract(&index);
    }
});
