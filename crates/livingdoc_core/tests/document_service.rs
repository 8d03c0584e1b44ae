use std::cell::RefCell;
use std::rc::Rc;

use livingdoc_core::{
    ApiError, ApiResult, Article, ArticleSentenceRef, Document, DocumentBackend, DocumentId,
    DocumentService, Section, Sentence,
};

/// In-memory backend capturing stored payloads and serving canned documents.
struct MockBackend {
    served: Document,
    stored: RefCell<Vec<Document>>,
    summary_headings: RefCell<Vec<String>>,
    fail_store: bool,
}

impl MockBackend {
    fn serving(served: Document) -> Self {
        Self {
            served,
            stored: RefCell::new(Vec::new()),
            summary_headings: RefCell::new(Vec::new()),
            fail_store: false,
        }
    }

    fn failing_store(served: Document) -> Self {
        Self {
            fail_store: true,
            ..Self::serving(served)
        }
    }
}

impl DocumentBackend for MockBackend {
    fn fetch_document(&self, _id: DocumentId) -> ApiResult<Document> {
        Ok(self.served.clone())
    }

    fn store_document(&self, _id: DocumentId, payload: &Document) -> ApiResult<()> {
        if self.fail_store {
            return Err(ApiError::UnexpectedStatus {
                url: "mock://store".to_string(),
                status: 500,
            });
        }
        self.stored.borrow_mut().push(payload.clone());
        Ok(())
    }

    fn user_summary(&self, _id: DocumentId) -> ApiResult<Document> {
        Ok(self.served.clone())
    }

    fn section_summary(&self, _id: DocumentId, heading: &str) -> ApiResult<Document> {
        self.summary_headings.borrow_mut().push(heading.to_string());
        Ok(self.served.clone())
    }

    fn change_word(&self, _id: DocumentId, _old: &str, _new: &str) -> ApiResult<Document> {
        Ok(self.served.clone())
    }
}

/// Shared handle so tests can inspect captured payloads after handing the
/// backend to the service.
struct SharedBackend(Rc<MockBackend>);

impl DocumentBackend for SharedBackend {
    fn fetch_document(&self, id: DocumentId) -> ApiResult<Document> {
        self.0.fetch_document(id)
    }

    fn store_document(&self, id: DocumentId, payload: &Document) -> ApiResult<()> {
        self.0.store_document(id, payload)
    }

    fn user_summary(&self, id: DocumentId) -> ApiResult<Document> {
        self.0.user_summary(id)
    }

    fn section_summary(&self, id: DocumentId, heading: &str) -> ApiResult<Document> {
        self.0.section_summary(id, heading)
    }

    fn change_word(&self, id: DocumentId, old: &str, new: &str) -> ApiResult<Document> {
        self.0.change_word(id, old, new)
    }
}

fn backend_sentence(id: i64, text: &str, position: usize) -> Sentence {
    Sentence {
        id: Some(id),
        text: text.to_string(),
        position,
        is_user_defined: false,
        is_deleted: false,
        url: None,
    }
}

fn reference(id: i64, position: usize) -> ArticleSentenceRef {
    ArticleSentenceRef { id, position }
}

/// A document the way a previous summary/save round left it: intro plus one
/// titled section, with citation articles on both levels.
fn seeded_document() -> Document {
    let mut doc = Document::new();
    doc.id = Some(7);
    doc.title = "Seeded".to_string();
    doc.sentences = vec![
        backend_sentence(1, "Intro one.", 0),
        backend_sentence(2, "Intro two.", 1),
    ];
    doc.articles = vec![Article {
        id: Some(100),
        sentences: vec![reference(1, 0), reference(2, 1)],
        ..Article::default()
    }];
    doc.sections = vec![Section {
        id: Some(50),
        heading: "History".to_string(),
        sentences: vec![
            backend_sentence(3, " Old fact.", 0),
            backend_sentence(4, "Stale fact.", 1),
        ],
        articles: vec![Article {
            id: Some(101),
            sentences: vec![reference(3, 0), reference(4, 1)],
            ..Article::default()
        }],
        ..Section::default()
    }];
    doc
}

#[test]
fn load_replaces_the_whole_document_state() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    assert!(service.document().sentences.is_empty());

    service.load(7).unwrap();

    assert_eq!(service.document().id, Some(7));
    assert_eq!(service.document().sentences.len(), 2);
    assert_eq!(service.document().sections[0].heading, "History");
}

#[test]
fn save_reconciles_intro_and_section_and_prunes_articles() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    service.load(7).unwrap();

    // "Intro two." was rewritten; the section kept its first sentence and
    // gained a fresh one in place of "Stale fact.".
    let html = "<p>Intro one. Rewritten intro.</p><p><strong>History</strong> Old fact. Fresh claim.</p>";
    let text = "Intro one. Rewritten intro.\nHistory\nOld fact. Fresh claim.";
    service.save(text, html).unwrap();

    let doc = service.document();

    assert_eq!(doc.sentences.len(), 2);
    assert_eq!(doc.sentences[0].id, Some(1));
    assert_eq!(doc.sentences[0].position, 0);
    assert_eq!(doc.sentences[1].id, None);
    assert_eq!(doc.sentences[1].text, "Rewritten intro.");
    assert!(doc.sentences[1].is_user_defined);

    // The document-level article lost its reference to edited sentence 2.
    assert_eq!(doc.articles[0].sentences, vec![reference(1, 0)]);

    let section = &doc.sections[0];
    assert_eq!(section.sentences.len(), 2);
    assert_eq!(section.sentences[0].id, Some(3));
    assert_eq!(section.sentences[0].text, " Old fact.");
    assert_eq!(section.sentences[1].id, None);
    assert_eq!(section.sentences[1].text, "Fresh claim.");

    // The section-level article lost its reference to sentence 4.
    assert_eq!(section.articles[0].sentences, vec![reference(3, 0)]);
}

#[test]
fn saved_payload_matches_the_committed_state() {
    let backend = Rc::new(MockBackend::serving(seeded_document()));
    let mut service = DocumentService::new(SharedBackend(Rc::clone(&backend)));
    service.load(7).unwrap();

    let html = "<p>Intro one. Intro two.</p>";
    service.save("Intro one. Intro two.", html).unwrap();

    // What went over the wire is exactly what the service now owns.
    let stored = backend.stored.borrow();
    assert_eq!(stored.len(), 1);
    assert_eq!(&stored[0], service.document());
}

#[test]
fn unchanged_editor_round_trip_preserves_ids_and_flags() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    service.load(7).unwrap();
    let before = service.document().clone();

    // The exact text of the loaded document, unchanged.
    let html = "<p>Intro one. Intro two.</p><p><strong>History</strong> Old fact. Stale fact.</p>";
    service
        .save("Intro one. Intro two. History Old fact. Stale fact.", html)
        .unwrap();

    let doc = service.document();
    assert_eq!(doc.sentences, before.sentences);
    assert_eq!(doc.sections[0].sentences, before.sections[0].sentences);
    assert_eq!(doc.articles, before.articles);
    assert_eq!(doc.sections[0].articles, before.sections[0].articles);
}

#[test]
fn empty_editor_text_transmits_without_reconciling() {
    let backend = Rc::new(MockBackend::serving(seeded_document()));
    let mut service = DocumentService::new(SharedBackend(Rc::clone(&backend)));
    service.load(7).unwrap();
    let before = service.document().clone();

    service.save("", "<p><strong>History</strong>garbage</p>").unwrap();

    // The payload still went out, byte-identical to the unreconciled state.
    assert_eq!(backend.stored.borrow().len(), 1);
    assert_eq!(service.document(), &before);
}

#[test]
fn unknown_heading_parts_are_skipped() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    service.load(7).unwrap();

    let html = "<p>Intro one. Intro two.</p><p><strong>Never heard of it</strong> Body.</p>";
    service.save("whatever", html).unwrap();

    // Known section untouched, unknown heading ignored.
    assert_eq!(service.document().sections.len(), 1);
    assert_eq!(service.document().sections[0].sentences.len(), 2);
}

#[test]
fn save_without_a_loaded_document_is_an_error() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    let err = service.save("text", "<p>text</p>").unwrap_err();
    assert!(matches!(err, ApiError::NoDocumentId));
}

#[test]
fn failed_store_leaves_state_untouched() {
    let mut service = DocumentService::new(MockBackend::failing_store(seeded_document()));
    service.load(7).unwrap();
    let before = service.document().clone();

    let err = service
        .save("Intro one. Edited.", "<p>Intro one. Edited.</p>")
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    assert_eq!(service.document(), &before);
}

#[test]
fn section_summary_round_trip_replaces_state() {
    let mut refreshed = seeded_document();
    refreshed.title = "Refreshed".to_string();
    let backend = Rc::new(MockBackend::serving(refreshed));
    let mut service = DocumentService::new(SharedBackend(Rc::clone(&backend)));
    service.document_mut().id = Some(7);

    service.generate_section_summary("History").unwrap();
    assert_eq!(backend.summary_headings.borrow().as_slice(), ["History"]);
    assert_eq!(service.document().title, "Refreshed");
}

#[test]
fn text_renders_intro_then_bold_headings() {
    let mut service = DocumentService::new(MockBackend::serving(seeded_document()));
    service.load(7).unwrap();

    assert_eq!(
        service.text(),
        "Intro one. Intro two.\n\n<b>History</b>\n  Old fact. Stale fact."
    );
}
