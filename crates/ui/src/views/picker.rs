use dioxus::prelude::*;
use picker_core::model::Tier;
use services::{PickerService, PickerServiceError};

use crate::context::AppContext;
use crate::vm::map_picker;

/// Buttons that touch the tracker. Tier selection only changes what is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PickerCommand {
    Pick,
    MarkDone,
    Reset,
}

/// Apply one button press, drawing from `tier` wherever a draw is needed.
async fn run_command(
    picker: &mut PickerService,
    command: PickerCommand,
    tier: Tier,
) -> Result<(), PickerServiceError> {
    match command {
        PickerCommand::Pick => {
            picker.draw(tier);
            Ok(())
        }
        PickerCommand::MarkDone => picker.mark_completed(tier).await.map(|_| ()),
        PickerCommand::Reset => {
            // Reset never redraws on its own; the view asks for a fresh problem.
            let outcome = picker.reset().await;
            picker.draw(tier);
            outcome
        }
    }
}

fn save_warning(err: &PickerServiceError) -> String {
    format!("{err}. Progress is kept until you quit.")
}

#[component]
pub fn PickerView() -> Element {
    let ctx = use_context::<AppContext>();
    let initial_tier = ctx.initial_tier();
    let mut tier = use_signal(|| initial_tier);
    let mut vm = use_signal(|| ctx.snapshot(initial_tier));
    let mut warning = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let picker = ctx.picker();
    let run = use_callback(move |command: PickerCommand| {
        if *busy.peek() {
            return;
        }
        busy.set(true);

        let picker = picker.clone();
        let drawn_from = *tier.peek();
        spawn(async move {
            let mut picker = picker.lock().await;
            match run_command(&mut picker, command, drawn_from).await {
                Ok(()) => warning.set(None),
                Err(err) => warning.set(Some(save_warning(&err))),
            }
            vm.set(map_picker(picker.tracker(), *tier.peek()));
            busy.set(false);
        });
    });

    let picker = ctx.picker();
    let select_tier = use_callback(move |next: Tier| {
        tier.set(next);
        // Never redraws. Waits behind a running command instead of dropping the click.
        match picker.try_lock() {
            Ok(picker) => vm.set(map_picker(picker.tracker(), next)),
            Err(_) => {
                let picker = picker.clone();
                spawn(async move {
                    let picker = picker.lock().await;
                    vm.set(map_picker(picker.tracker(), *tier.peek()));
                });
            }
        }
    });

    let state = vm();
    let is_busy = busy();
    let tier_buttons = state.options.iter().map(|option| {
        let tier = option.tier;
        let class = if option.selected {
            "tier-option tier-option--selected"
        } else {
            "tier-option"
        };
        rsx! {
            button {
                key: "{tier}",
                class,
                r#type: "button",
                onclick: move |_| select_tier.call(tier),
                "{option.label}"
            }
        }
    });

    rsx! {
        div { class: "page picker-page",
            h1 { class: "view-title", "LC Problem Picker" }
            section { class: "picker-number",
                p { class: "picker-caption", "Leetcode problem number" }
                p { class: "picker-value", "{state.number_label}" }
                p { class: "picker-remaining", "{state.remaining_label}" }
            }
            nav { class: "tier-picker", {tier_buttons} }
            if let Some(message) = warning() {
                p { class: "picker-warning", "{message}" }
            }
            div { class: "picker-actions",
                if state.can_mark {
                    button {
                        class: "btn btn-done",
                        r#type: "button",
                        disabled: is_busy,
                        onclick: move |_| run.call(PickerCommand::MarkDone),
                        "Mark as Done"
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: is_busy,
                    onclick: move |_| run.call(PickerCommand::Pick),
                    "Pick a problem"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: is_busy,
                    onclick: move |_| run.call(PickerCommand::Reset),
                    "Reset"
                }
            }
        }
    }
}
