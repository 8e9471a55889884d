use std::sync::{Arc, Barrier};
use std::thread;

use sxs_toolbox::storage::{Flags, GlobalStorage, DEFAULT_STORAGE_FLAG};
use sxs_toolbox::{OutputSink, ToolboxError};

#[test]
fn test_store_and_get() {
    let storage = GlobalStorage::new();
    assert!(!storage.has_key("answer"));

    storage.store("answer", 42i64);
    assert!(storage.has_key("answer"));
    assert_eq!(storage.get::<i64>("answer").unwrap(), 42);

    storage.store("answer", String::from("forty-two"));
    assert_eq!(
        storage.get::<String>("answer").unwrap(),
        "forty-two",
        "Storing again should replace the value and its type"
    );
}

#[test]
fn test_missing_key_names_the_key() {
    let storage = GlobalStorage::new();
    let err = storage.get::<i32>("missing").unwrap_err();
    assert!(matches!(err, ToolboxError::KeyNotFound { ref key } if key == "missing"));
    assert_eq!(err.to_string(), "given key 'missing' does not exist");
}

#[test]
fn test_type_mismatch() {
    let storage = GlobalStorage::new();
    storage.store("v", vec![1.0f64, 2.0]);
    let err = storage.get::<Vec<f32>>("v").unwrap_err();
    assert!(matches!(err, ToolboxError::TypeMismatch { .. }), "got {:?}", err);
    assert!(storage.get_mut::<String>("v").is_err());
}

#[test]
fn test_get_or_initialise_creates_once() {
    let storage = GlobalStorage::new();
    {
        let mut list = storage.get_or_initialise("list", || vec![1, 2, 3]).unwrap();
        list.push(4);
    }
    let list = storage
        .get_or_initialise::<Vec<i32>, _>("list", || panic!("should not run twice"))
        .unwrap();
    assert_eq!(*list, vec![1, 2, 3, 4]);
}

#[test]
fn test_initialise_if_not_exists_keeps_existing() {
    let storage = GlobalStorage::new();
    storage.store("n", 7u32);
    storage.initialise_if_not_exists("n", || 0u32);
    storage.initialise_if_not_exists("m", || 1u32);
    assert_eq!(storage.get::<u32>("n").unwrap(), 7);
    assert_eq!(storage.get::<u32>("m").unwrap(), 1);
    assert_eq!(storage.keys(), vec!["m".to_string(), "n".to_string()]);
}

#[test]
fn test_clear() {
    let storage = GlobalStorage::new();
    storage.store("a", 1u8);
    storage.store("b", 2u8);
    storage.clear();
    assert!(storage.keys().is_empty());
    assert!(!storage.has_key("a"));
}

#[test]
fn test_clear_all_empties_every_partition() {
    let storage = Arc::new(GlobalStorage::new());
    storage.store("shared", 1u8);
    storage.partition(Flags::PerThread).store("mine", 2u8);
    {
        let storage = Arc::clone(&storage);
        thread::spawn(move || storage.partition(Flags::PerThread).store("theirs", 3u8))
            .join()
            .unwrap();
    }

    storage.partition(Flags::PerThread).clear();
    assert!(storage.has_key("shared"), "Clearing a thread's partition should leave unified storage alone");

    storage.partition(Flags::PerThread).store("mine", 2u8);
    storage.clear_all();
    assert!(!storage.has_key("shared"));
    assert!(!storage.partition(Flags::PerThread).has_key("mine"));
    let other_keys = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || storage.partition(Flags::PerThread).keys()).join().unwrap()
    };
    assert!(other_keys.is_empty());
}

#[test]
fn test_concurrent_get_or_default() {
    let storage = Arc::new(GlobalStorage::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let storage = Arc::clone(&storage);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..1000 {
                    *storage.get_or_default::<u64>("hits").unwrap() += 1;
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(storage.get::<u64>("hits").unwrap(), 8000, "No increment should be lost");
}

#[test]
fn test_per_thread_partition_is_isolated() {
    let storage = Arc::new(GlobalStorage::new());
    let local = storage.partition(Flags::PerThread);
    local.store("id", 0usize);

    let handles: Vec<_> = (1..=4usize)
        .map(|i| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                let local = storage.partition(Flags::PerThread);
                assert!(!local.has_key("id"), "Other threads' values should be invisible");
                local.store("id", i);
                local.get::<usize>("id").unwrap()
            })
        })
        .collect();
    let seen: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert_eq!(local.get::<usize>("id").unwrap(), 0);
    assert!(!storage.has_key("id"), "Per-thread values should not leak into unified storage");
}

#[test]
fn test_print_stored_info() {
    let storage = GlobalStorage::new();
    storage.store("name", String::from("x"));
    storage.store("count", 3i32);
    let sink = OutputSink::buffer();
    storage.print_stored_info(&sink).unwrap();

    let expected = format!(
        "========== Static Storage (flag={}) ==========\ncount: [type] = i32\nname: [type] = String\n====================================\n",
        DEFAULT_STORAGE_FLAG
    );
    assert_eq!(sink.contents(), expected);
    assert_eq!(DEFAULT_STORAGE_FLAG.as_str(), "unified_storage");
}
