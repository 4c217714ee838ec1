use migrator_buffers::{BufferError, BufferStore};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn entire_text_returns_independent_copy() {
    let store = BufferStore::new();
    let id = store.add_buffer("main.swift", "foo bar");

    let mut text = store.entire_text(id);
    text.push_str(" mutated");

    assert_eq!(store.entire_text(id), "foo bar");
}

#[test]
fn lookups_are_stable_across_calls() {
    let store = BufferStore::new();
    let id = store.add_buffer("main.swift", "let x = 1\n");
    store.add_buffer("other.swift", "let y = 2\n");

    assert_eq!(store.entire_text(id), store.entire_text(id));
    assert_eq!(store.identifier(id), "main.swift");
}

#[test]
fn find_returns_latest_registration() {
    let store = BufferStore::new();
    let first = store.add_buffer("main.swift", "v1");
    let second = store.add_buffer("main.swift", "v2");

    assert_ne!(first, second);
    assert_eq!(store.find("main.swift"), Some(second));
    assert_eq!(store.find("missing.swift"), None);
}

#[test]
fn get_exposes_identifier_and_text() {
    let store = BufferStore::new();
    let id = store.add_buffer("main.swift", "body");
    let buffer = store.get(id).expect("buffer");
    assert_eq!(buffer.identifier, "main.swift");
    assert_eq!(&*buffer.text, "body");
}

#[test]
#[should_panic(expected = "buffer lookup failed")]
fn foreign_handle_panics_on_entire_text() {
    let first = BufferStore::new();
    let second = BufferStore::new();
    let id = first.add_buffer("a.swift", "text");
    let _ = second.entire_text(id);
}

#[test]
fn try_entire_text_reports_foreign_store() {
    let first = BufferStore::new();
    let second = BufferStore::new();
    let id = first.add_buffer("a.swift", "text");
    assert!(matches!(
        second.try_entire_text(id),
        Err(BufferError::ForeignStore { .. })
    ));
}

#[test]
fn concurrent_readers_see_the_same_text() {
    let store = Arc::new(BufferStore::new());
    let id = store.add_buffer("main.swift", "shared text");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.entire_text(id))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), "shared text");
    }
}

#[test]
fn registering_more_buffers_keeps_existing_handles_valid() {
    let store = BufferStore::new();
    let id = store.add_buffer("main.swift", "original");
    for i in 0..32 {
        store.add_buffer(format!("gen{i}.swift"), format!("// {i}"));
    }
    assert_eq!(store.entire_text(id), "original");
}
