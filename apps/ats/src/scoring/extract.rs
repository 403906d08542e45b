//! PDF text extraction. Best effort: any failure degrades to an empty string.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

/// Extracts lowercase text from raw PDF bytes.
///
/// Each page with text contributes its content followed by a single space.
/// Parse errors, and panics raised inside the PDF parser on malformed input,
/// are swallowed and yield `""`.
pub fn extract_text(filename: &str, bytes: &[u8]) -> String {
    let pages = match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!(filename, "PDF extraction failed: {e}");
            return String::new();
        }
        Err(_) => {
            warn!(filename, "PDF parser panicked; treating as empty text");
            return String::new();
        }
    };

    let text = join_pages(pages);
    if text.is_empty() {
        debug!(filename, "PDF contains no extractable text");
    }
    text
}

fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        if page.is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push(' ');
    }
    text.to_lowercase()
}
