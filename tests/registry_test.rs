//! Registry behaviour under concurrent callers

use basedev_context::{Language, LspManager, McpManager, RegistryError};
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_registration_with_distinct_names() {
    let registry = Arc::new(LspManager::new());
    let count = 64;

    let handles: Vec<_> = (0..count)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.register(
                    format!("server-{}", i),
                    format!("lang-{}", i % 4),
                    format!("bin-{}", i),
                    vec![format!("--port={}", 9000 + i)],
                )
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let servers = registry.list_servers();
    assert_eq!(servers.len(), count);
    for server in servers {
        let i: usize = server.name.trim_start_matches("server-").parse().unwrap();
        assert_eq!(server.attributes, Language::new(format!("lang-{}", i % 4)));
        assert_eq!(server.command, format!("bin-{}", i));
        assert_eq!(server.args, vec![format!("--port={}", 9000 + i)]);
        assert!(!server.running);
    }
}

#[test]
fn test_concurrent_duplicate_registration_has_one_winner() {
    let registry = Arc::new(McpManager::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.register("shared", format!("cmd-{}", i), vec![]))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(winners, 1);
    assert!(results.iter().filter_map(|r| r.as_ref().err()).all(|e| matches!(
        e,
        RegistryError::DuplicateRegistration { .. }
    )));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_concurrent_start_has_one_winner() {
    let registry = Arc::new(McpManager::new());
    registry.register("browser", "npx", vec!["playwright-mcp".to_string()]).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.start("browser"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.error_code() == "ALREADY_RUNNING"));
    assert!(registry.is_running("browser"));
}

#[test]
fn test_readers_and_writers_interleave() {
    let registry = Arc::new(LspManager::new());
    registry.register("gopls", "go", "gopls", vec![]).unwrap();

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for _ in 0..200 {
                registry.start("gopls").unwrap();
                registry.stop("gopls").unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    if let Some(server) = registry.get_by_language("go") {
                        assert!(server.running);
                        assert_eq!(server.name, "gopls");
                    }
                    assert_eq!(registry.list_servers().len(), 1);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert!(!registry.is_running("gopls"));
}

#[test]
fn test_lifecycle_round_trip() {
    let registry = LspManager::new();
    registry
        .register("flutter", "dart", "flutter", vec!["lsp".to_string()])
        .unwrap();

    registry.stop("flutter").unwrap();
    assert!(!registry.is_running("flutter"));

    registry.start("flutter").unwrap();
    assert!(registry.start("flutter").is_err());
    registry.stop("flutter").unwrap();
    registry.start("flutter").unwrap();

    assert_eq!(
        registry.get_by_language("dart").map(|s| s.name),
        Some("flutter".to_string())
    );
    assert!(matches!(
        registry.start("unknown"),
        Err(RegistryError::NotFound { kind: "lsp", .. })
    ));
}
