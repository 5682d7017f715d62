use scraper::Html;

/// An immutable, parsed copy of the page markup taken at activation time.
/// Extraction reads it but never mutates it, so the live page the user is
/// looking at stays untouched.
#[derive(Debug)]
pub struct DocumentSnapshot {
    document: Html,
}

impl DocumentSnapshot {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub(crate) fn document(&self) -> &Html {
        &self.document
    }
}
