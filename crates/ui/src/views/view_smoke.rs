use picker_core::model::Tier;
use storage::repository::{SettingsRepository, Storage};

use super::test_harness::setup_picker_harness;

#[tokio::test(flavor = "current_thread")]
async fn picker_view_starts_without_a_selection() {
    let mut harness = setup_picker_harness(&Storage::in_memory(), Tier::Easy).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("LC Problem Picker"), "missing title in {html}");
    assert!(html.contains("None"), "missing placeholder in {html}");
    assert!(html.contains("3 of 3 left"), "missing count in {html}");
    assert!(html.contains("Pick a problem"), "missing pick button in {html}");
    assert!(html.contains("Reset"), "missing reset button in {html}");
    assert!(!html.contains("Mark as Done"), "unexpected mark button in {html}");
    for tier in Tier::ALL {
        assert!(html.contains(tier.label()), "missing {} in {html}", tier.label());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn picker_view_shows_current_selection() {
    let mut harness = setup_picker_harness(&Storage::in_memory(), Tier::Hard).await;
    harness.picker.lock().await.draw(Tier::Hard);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("135"), "missing selection in {html}");
    assert!(html.contains("Mark as Done"), "missing mark button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn picker_view_reflects_persisted_completions() {
    let storage = Storage::in_memory();
    storage
        .settings
        .put_setting(services::COMPLETED_KEY, "[135]")
        .await
        .expect("seed completions");

    let mut harness = setup_picker_harness(&storage, Tier::Hard).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("All done in this tier"), "missing exhausted label in {html}");
}
