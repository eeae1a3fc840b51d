use log::{info, warn};
use yew::prelude::*;

use crate::components::fields::{SelectField, TextAreaField, TextField};
use crate::components::modal::Modal;
use crate::components::toast::{use_toast, ToastMessage};
use crate::forms::schedule::{
    today, ScheduleField, ScheduleForm, ScheduleKind, DATE_FORMAT, ROLES, TIME_SLOTS,
};
use crate::forms::{take_submission, ModalForm};

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub kind: ScheduleKind,
}

#[function_component(ScheduleModal)]
pub fn schedule_modal(props: &ScheduleModalProps) -> Html {
    html! {
        <Modal
            open={props.open}
            on_close={props.on_close.clone()}
            title={props.kind.title()}
            description={props.kind.description()}
            icon="📅"
        >
            <ScheduleRequest kind={props.kind} on_close={props.on_close.clone()} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleRequestProps {
    kind: ScheduleKind,
    on_close: Callback<()>,
}

#[function_component(ScheduleRequest)]
fn schedule_request(props: &ScheduleRequestProps) -> Html {
    let form = use_state(ScheduleForm::default);
    let toaster = use_toast();
    let kind = props.kind;

    let on_field = {
        let form = form.clone();
        move |field: ScheduleField| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            })
        }
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next
                .check_date(today())
                .and_then(|_| take_submission(&mut next));
            match outcome {
                Ok(request) => {
                    info!(
                        "{} request submitted with {} fields filled",
                        kind.title(),
                        request.filled_fields()
                    );
                    toaster.show(ToastMessage::success(
                        kind.confirmation_title(),
                        kind.confirmation_message(),
                    ));
                    form.set(next);
                    on_close.emit(());
                }
                Err(err) => {
                    warn!("{} request blocked: {}", kind.title(), err);
                    toaster.show(ToastMessage::destructive("Check your details", err.to_string()));
                }
            }
        })
    };

    let min_date = today().format(DATE_FORMAT).to_string();

    html! {
        <form class="modal-form schedule-request" {onsubmit}>
            <div class="form-row">
                <TextField id="scheduleName" label="Full Name" icon="👤"
                    value={form.name.clone()} on_change={on_field(ScheduleField::Name)}
                    placeholder="Enter your full name" required=true />
                <TextField id="scheduleEmail" label="Email Address" input_type="email" icon="✉"
                    value={form.email.clone()} on_change={on_field(ScheduleField::Email)}
                    placeholder="your.email@example.com" required=true />
            </div>
            <div class="form-row">
                <TextField id="schedulePhone" label="Phone Number" icon="📞"
                    value={form.phone.clone()} on_change={on_field(ScheduleField::Phone)}
                    placeholder="+91 9876543210" />
                <TextField id="scheduleOrganization" label="Organization" icon="🏢"
                    value={form.organization.clone()} on_change={on_field(ScheduleField::Organization)}
                    placeholder="Hospital / Blood Bank / NGO" required=true />
            </div>
            <SelectField id="scheduleRole" label="Your Role" options={ROLES}
                value={form.role.clone()} on_change={on_field(ScheduleField::Role)}
                placeholder="Select your role" />
            <div class="form-row">
                <TextField id="scheduleDate" label="Preferred Date" input_type="date" icon="📅"
                    min={min_date}
                    value={form.preferred_date.clone()} on_change={on_field(ScheduleField::PreferredDate)} />
                <SelectField id="scheduleTime" label="Preferred Time" icon="🕒" options={TIME_SLOTS}
                    value={form.preferred_time.clone()} on_change={on_field(ScheduleField::PreferredTime)}
                    placeholder="Select time slot" />
            </div>
            <TextAreaField id="scheduleRequirements" label={kind.requirements_label()}
                value={form.requirements.clone()} on_change={on_field(ScheduleField::Requirements)}
                placeholder={kind.requirements_placeholder()} />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary grow">{ kind.title() }</button>
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}
