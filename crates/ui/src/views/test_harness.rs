use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use picker_core::model::{ProblemId, Tier, TierCatalog};
use services::{AppServices, SharedPicker};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::PickerView;

#[derive(Clone)]
struct TestApp {
    picker: SharedPicker,
    initial_tier: Tier,
}

impl UiApp for TestApp {
    fn picker(&self) -> SharedPicker {
        Arc::clone(&self.picker)
    }

    fn initial_tier(&self) -> Tier {
        self.initial_tier
    }
}

#[derive(Props, Clone)]
struct PickerHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for PickerHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for PickerHarnessProps {}

#[component]
fn PickerHarness(props: PickerHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { PickerView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub picker: SharedPicker,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn small_catalog() -> TierCatalog {
    let ids = |raw: &[u32]| raw.iter().copied().map(ProblemId::new).collect::<Vec<_>>();
    TierCatalog::new(ids(&[88, 27, 26]), ids(&[80, 189]), ids(&[135]))
}

pub async fn setup_picker_harness(storage: &Storage, initial_tier: Tier) -> ViewHarness {
    let services = AppServices::from_storage(storage, small_catalog(), Some(1)).await;
    let picker = services.picker();
    let app = Arc::new(TestApp {
        picker: Arc::clone(&picker),
        initial_tier,
    });

    let dom = VirtualDom::new_with_props(PickerHarness, PickerHarnessProps { app });

    ViewHarness { dom, picker }
}
