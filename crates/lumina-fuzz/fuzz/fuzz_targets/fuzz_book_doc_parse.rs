#![no_main]

use libfuzzer_sys::fuzz_target;
use lumina_discovery::models::{BookSearchResponse, DocMapping};

fuzz_target!(|data: &[u8]| {
    if let Ok(response) = serde_json::from_slice::<BookSearchResponse>(data) {
        for doc in response.docs {
            let _ = doc.clone().into_book(DocMapping::Search);
            let _ = doc.into_book(DocMapping::Featured);
        }
    }
});
