use camino::Utf8PathBuf;
use migrator_remap::load_replacements;
use migrator_state::{
    BufferStore, FixitMigrationState, MigrationHistory, MigrationKind, Replacement,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Three-step pipeline: start, rename `foo` to `bar`, then append a newline.
fn three_step_history() -> MigrationHistory {
    let store = Arc::new(BufferStore::new());
    let v0 = store.add_buffer("main.swift", "foo()");
    let v1 = store.add_buffer("main.swift", "bar()");
    let v2 = store.add_buffer("main.swift", "bar()\n");

    let mut history = MigrationHistory::new();
    history.push(FixitMigrationState::start(store.clone(), v0));
    history.push(FixitMigrationState::new(
        store.clone(),
        v0,
        v1,
        vec![Replacement::new(0..3, "bar")],
    ));
    history.push(FixitMigrationState::new(
        store,
        v1,
        v2,
        vec![Replacement::insert(5, "\n")],
    ));
    history
}

#[test]
fn push_returns_step_numbers_in_order() {
    let store = Arc::new(BufferStore::new());
    let v0 = store.add_buffer("a.swift", "x");

    let mut history = MigrationHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.push(FixitMigrationState::start(store.clone(), v0)), 0);
    assert_eq!(history.push(FixitMigrationState::start(store, v0)), 1);
    assert_eq!(history.len(), 2);
}

#[test]
fn each_step_output_feeds_the_next_input() {
    let history = three_step_history();
    let states: Vec<_> = history.iter().collect();
    for pair in states.windows(2) {
        assert_eq!(pair[0].output_text(), pair[1].input_text());
    }
    assert_eq!(history.last().map(|s| s.output_text()).as_deref(), Some("bar()\n"));
    assert!(history.iter().all(|s| s.kind() == MigrationKind::CompilerFixits));
}

#[test]
fn dump_writes_every_step_numbered_by_position() {
    let temp = TempDir::new().expect("temp dir");
    let out = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
    let history = three_step_history();

    assert!(!history.dump(&out));
    assert_eq!(std::fs::read_dir(&out).expect("read dir").count(), 9);

    for (step, state) in history.iter().enumerate() {
        let input = out.join(format!("{step}-FixitMigrationState-Input.swift"));
        let output = out.join(format!("{step}-FixitMigrationState-Output.swift"));
        let remap = out.join(format!("{step}-FixitMigrationState-Replacements.remap"));

        assert_eq!(std::fs::read_to_string(&input).expect("input"), state.input_text());
        assert_eq!(std::fs::read_to_string(&output).expect("output"), state.output_text());
        assert_eq!(
            load_replacements(&remap).expect("remap"),
            state.as_fixit().expect("fixit").replacements().to_vec()
        );
    }
}

#[test]
fn dump_into_missing_directory_fails() {
    let temp = TempDir::new().expect("temp dir");
    let out = Utf8PathBuf::from_path_buf(temp.path().join("missing")).expect("utf8");
    assert!(three_step_history().dump(&out));
}

#[test]
fn concurrent_prints_of_one_state_agree() {
    let temp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
    let history = Arc::new(three_step_history());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let history = Arc::clone(&history);
            let dir = root.join(format!("run{i}"));
            std::fs::create_dir(&dir).expect("create run dir");
            thread::spawn(move || {
                let state = history.get(1).expect("step 1");
                assert!(!state.print(1, &dir));
                std::fs::read_to_string(dir.join("1-FixitMigrationState-Output.swift"))
                    .expect("read output")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("printer thread"), "bar()");
    }
}
