//! PDF text extraction.
//!
//! Wraps `pdf_extract` page-by-page extraction. The library can panic on
//! malformed input instead of returning an error, so every call runs behind
//! `catch_unwind` and inside `spawn_blocking` (parsing is CPU-bound).

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error extracting PDF text: {0}")]
    Parse(String),

    #[error("Error extracting PDF text: parser panicked on malformed document")]
    Panicked,

    #[error("Error extracting PDF text: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Extracts the text of every page and joins pages with a single newline.
/// Pages without extractable text contribute an empty string.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Ok(join_pages(pages)),
        Ok(Err(e)) => Err(ExtractError::Parse(e.to_string())),
        Err(_) => Err(ExtractError::Panicked),
    }
}

/// Async wrapper that moves parsing off the runtime threads.
pub async fn extract_text_blocking(data: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text(&data)).await?
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .map(|page| if page.trim().is_empty() { String::new() } else { page })
        .collect::<Vec<_>>()
        .join("\n")
}

/// PDF fixtures built with lopdf, shared with handler tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one page per entry; an empty entry yields a page with no text.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}
