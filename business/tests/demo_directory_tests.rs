//! The public API composed over the in-memory demo directory.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use roster_business::{
    DirectoryStore, DirectorySummary, InMemoryGateway, LogNotifier, PAGE_SIZE, Role, Status,
    UserFilter, UserForm,
};

fn demo_store() -> DirectoryStore<InMemoryGateway<LogNotifier>, LogNotifier> {
    let _ = env_logger::builder().is_test(true).try_init();
    DirectoryStore::new(InMemoryGateway::seeded(LogNotifier), LogNotifier)
}

#[tokio::test]
async fn test_every_page_respects_page_size() {
    let store = demo_store();
    store.fetch_page(1).await;
    let total_pages = store.snapshot().total_pages();

    for page in 1..=total_pages {
        assert!(store.fetch_page(page).await);
        let state = store.snapshot();
        assert_eq!(state.current_page(), page);
        assert!(state.users().len() <= PAGE_SIZE as usize);
    }
}

#[tokio::test]
async fn test_total_pages_tracks_mutations() {
    let store = demo_store();
    store.fetch_page(1).await;

    for n in 0..7_u64 {
        let form = UserForm {
            first_name: format!("Temp{n}"),
            last_name: "Person".to_owned(),
            email: format!("temp{n}@example.com"),
            ..UserForm::default()
        };
        assert!(store.create(form.validate().unwrap()).await);

        let state = store.snapshot();
        assert_eq!(state.total(), 13 + n);
        assert_eq!(u64::from(state.total_pages()), state.total().div_ceil(6));
    }

    assert!(store.delete(1).await);
    assert_eq!(store.snapshot().total(), 18);
    assert_eq!(store.snapshot().total_pages(), 3);
}

#[tokio::test]
async fn test_summary_and_filter_over_loaded_page() {
    let store = demo_store();
    store.fetch_page(1).await;
    let state = store.snapshot();

    let summary = DirectorySummary::from_state(&state);
    assert_eq!(summary.total, 12);
    assert_eq!(summary.loaded, 6);
    assert_eq!(summary.role_count(Role::Editor), 2);
    assert_eq!(summary.status_count(Status::Pending), 1);

    let pending = UserFilter::new().status(Status::Pending).apply(state.users());
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].full_name(), "Tracey Ramos");
}

#[tokio::test(start_paused = true)]
async fn test_view_sees_loading_while_latency_elapses() {
    let gateway = InMemoryGateway::seeded(LogNotifier).with_latency(Duration::from_millis(250));
    let store = DirectoryStore::new(gateway, LogNotifier);
    let view = store.view();

    let probe = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        view.snapshot().is_loading()
    };
    let (loaded, loading_midway) = tokio::join!(store.fetch_page(1), probe);

    assert!(loaded);
    assert!(loading_midway);
    assert!(!view.snapshot().is_loading());
}
