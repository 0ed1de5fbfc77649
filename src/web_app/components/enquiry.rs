// web_app/components/enquiry.rs - Admission enquiry form and modal
//
// The same form backs two surfaces: the standalone section on the
// landing page (success message for 5 s, form stays open) and the
// floating-button modal (success message, then the modal closes after
// 2 s). Both reset the fields after a successful submit.

use crate::web_app::components::common::{Alert, Button, ModalWrapper, SelectString, TextInput};
use crate::web_app::content::{MODAL_CLOSE_SECS, STANDALONE_SUCCESS_SECS};
use crate::web_app::model::{ClassLevel, EnquiryInput, Excitement};
use crate::web_app::store;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

fn class_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select class".to_string())];
    options.extend(
        ClassLevel::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), c.label().to_string())),
    );
    options
}

fn excitement_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Select an option".to_string())];
    options.extend(
        Excitement::ALL
            .iter()
            .map(|x| (x.as_str().to_string(), x.label().to_string())),
    );
    options
}

/// Admission enquiry form
///
/// When `on_success` is set (modal usage) it is invoked after the
/// short success window; otherwise the success message clears itself
/// after the longer one.
#[component]
pub fn EnquiryForm(
    #[prop(optional)] on_success: Option<Callback<()>>,
    /// Standalone form preselects "yes"; the modal starts blank.
    #[prop(default = true)]
    preselect_excitement: bool,
) -> impl IntoView {
    let student_name = RwSignal::new(String::new());
    let parent_name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let class = RwSignal::new(String::new());
    let excited = RwSignal::new(if preselect_excitement {
        Excitement::Yes.as_str().to_string()
    } else {
        String::new()
    });

    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);

    let current_input = move || EnquiryInput {
        student_name: student_name.get(),
        parent_name: parent_name.get(),
        location: location.get(),
        phone: phone.get(),
        class: ClassLevel::parse(&class.get()),
        excited: Excitement::parse(&excited.get()),
    };

    // Submit stays disabled while required fields are empty or a
    // submit is in flight, so double submits cannot happen.
    let disabled = Signal::derive(move || submitting.get() || current_input().has_missing_fields());

    let reset = move || {
        student_name.set(String::new());
        parent_name.set(String::new());
        location.set(String::new());
        phone.set(String::new());
        class.set(String::new());
        excited.set(if preselect_excitement {
            Excitement::Yes.as_str().to_string()
        } else {
            String::new()
        });
    };

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if disabled.get_untracked() {
            return;
        }
        error.set(None);
        submitting.set(true);

        let input = current_input();
        spawn_local(async move {
            match store::submit_enquiry(&input).await {
                Ok(_) => {
                    success.set(true);
                    reset();
                    match on_success {
                        Some(callback) => set_timeout(
                            move || callback.run(()),
                            Duration::from_secs(MODAL_CLOSE_SECS),
                        ),
                        None => set_timeout(
                            move || success.set(false),
                            Duration::from_secs(STANDALONE_SUCCESS_SECS),
                        ),
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <Show when=move || success.get()>
                <Alert
                    message="Thank you! Your enquiry has been submitted successfully.".to_string()
                    variant="success"
                    on_dismiss=Callback::new(move |_| success.set(false))
                />
            </Show>
            {move || error.get().map(|message| view! {
                <Alert
                    message=message
                    on_dismiss=Callback::new(move |_| error.set(None))
                />
            })}

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Student Name *"</label>
                <TextInput value=student_name placeholder="Enter student's name"/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Parent Name *"</label>
                <TextInput value=parent_name placeholder="Enter parent's name"/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Location *"</label>
                <TextInput value=location placeholder="Enter your location"/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Phone Number *"</label>
                <TextInput value=phone input_type="tel" placeholder="Enter phone number"/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">"Class *"</label>
                <SelectString value=class options=class_options()/>
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">
                    "Is your child excited to join?"
                </label>
                <SelectString value=excited options=excitement_options()/>
            </div>

            <Button button_type="submit" disabled=disabled class="w-full">
                {move || if submitting.get() { "Submitting..." } else { "Submit Enquiry" }}
            </Button>
        </form>
    }
}

/// Enquiry form inside a modal shell, opened by the floating button.
#[component]
pub fn EnquiryModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <ModalWrapper
                title="Admission Enquiry"
                on_close=Callback::new(move |_| open.set(false))
            >
                <EnquiryForm
                    preselect_excitement=false
                    on_success=Callback::new(move |_| open.set(false))
                />
            </ModalWrapper>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_options_start_with_placeholder() {
        let options = class_options();
        assert_eq!(options[0].0, "");
        assert_eq!(options.len(), ClassLevel::ALL.len() + 1);
        assert!(options.iter().any(|(v, l)| v == "ukg" && l == "UKG"));
    }

    #[test]
    fn excitement_options_cover_all_answers() {
        let options = excitement_options();
        assert_eq!(options.len(), Excitement::ALL.len() + 1);
        assert!(options.iter().any(|(v, _)| v == "very-excited"));
    }

    #[test]
    fn success_windows_differ_between_surfaces() {
        assert!(STANDALONE_SUCCESS_SECS > MODAL_CLOSE_SECS);
        assert_eq!(STANDALONE_SUCCESS_SECS, 5);
        assert_eq!(MODAL_CLOSE_SECS, 2);
    }
}
