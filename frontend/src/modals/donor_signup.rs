use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::fields::{CheckboxField, SelectField, TextField};
use crate::components::modal::Modal;
use crate::components::toast::{use_toast, ToastMessage};
use crate::forms::donor::{
    DonorField, DonorOutcome, DonorSignup, WizardStep, BLOOD_TYPES, INDIAN_STATES, MAX_DONOR_AGE,
    MIN_DONOR_AGE,
};
use crate::forms::{FormError, ModalForm};

#[derive(Properties, PartialEq)]
pub struct DonorSignupModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(DonorSignupModal)]
pub fn donor_signup_modal(props: &DonorSignupModalProps) -> Html {
    html! {
        <Modal
            open={props.open}
            on_close={props.on_close.clone()}
            title="Join as a Life Saver"
            icon="❤"
        >
            <DonorSignupForm on_close={props.on_close.clone()} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct DonorSignupFormProps {
    on_close: Callback<()>,
}

#[function_component(DonorSignupForm)]
fn donor_signup_form(props: &DonorSignupFormProps) -> Html {
    let wizard = use_state(DonorSignup::default);
    let toaster = use_toast();

    let on_field = {
        let wizard = wizard.clone();
        move |field: DonorField| {
            let wizard = wizard.clone();
            Callback::from(move |value: String| {
                let mut next = (*wizard).clone();
                next.set_field(field, value);
                wizard.set(next);
            })
        }
    };

    let on_notifications = {
        let wizard = wizard.clone();
        Callback::from(move |on: bool| {
            let mut next = (*wizard).clone();
            next.set_notifications(on);
            wizard.set(next);
        })
    };

    let on_consent = {
        let wizard = wizard.clone();
        Callback::from(move |accepted: bool| {
            let mut next = (*wizard).clone();
            next.set_privacy_consent(accepted);
            wizard.set(next);
        })
    };

    let on_previous = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let wizard = wizard.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            match next.submit() {
                Ok(DonorOutcome::Advanced(step)) => {
                    debug!("Donor signup moved to step {}", step.number());
                    wizard.set(next);
                }
                Ok(DonorOutcome::Completed(profile)) => {
                    info!(
                        "Donor profile created with {} fields filled",
                        profile.filled_fields()
                    );
                    toaster.show(ToastMessage::success(
                        "Welcome to BloodLink AI!",
                        "Your donor profile has been created. You'll receive notifications about donation opportunities.",
                    ));
                    wizard.set(next);
                    on_close.emit(());
                }
                Err(err @ FormError::ConsentRequired) => {
                    warn!("Donor signup blocked at final step: {}", err);
                    toaster.show(ToastMessage::destructive(
                        "Privacy Consent Required",
                        err.to_string(),
                    ));
                }
                Err(err) => {
                    warn!("Donor signup blocked at step {}: {}", wizard.step().number(), err);
                    toaster.show(ToastMessage::destructive("Check your details", err.to_string()));
                }
            }
        })
    };

    let step = wizard.step();
    let form = wizard.form();

    let fields = match step {
        WizardStep::Personal => html! {
            <>
                <div class="form-row">
                    <TextField id="name" label="Full Name" icon="👤"
                        value={form.name.clone()} on_change={on_field(DonorField::Name)}
                        placeholder="Enter your full name" required=true />
                    <TextField id="age" label="Age" input_type="number"
                        min={MIN_DONOR_AGE.to_string()}
                        max={MAX_DONOR_AGE.to_string()}
                        value={form.age.clone()} on_change={on_field(DonorField::Age)}
                        placeholder="18-65 years" required=true />
                </div>
                <div class="form-row">
                    <TextField id="email" label="Email Address" input_type="email" icon="✉"
                        value={form.email.clone()} on_change={on_field(DonorField::Email)}
                        placeholder="your.email@example.com" required=true />
                    <TextField id="phone" label="Phone Number" icon="📞"
                        value={form.phone.clone()} on_change={on_field(DonorField::Phone)}
                        placeholder="+91 9876543210" required=true />
                </div>
                <div class="form-row">
                    <TextField id="city" label="City" icon="📍"
                        value={form.city.clone()} on_change={on_field(DonorField::City)}
                        placeholder="Enter your city" required=true />
                    <SelectField id="state" label="State" options={INDIAN_STATES}
                        value={form.state.clone()} on_change={on_field(DonorField::State)}
                        placeholder="Select your state" />
                </div>
            </>
        },
        WizardStep::Medical => html! {
            <>
                <div class="form-row">
                    <SelectField id="bloodType" label="Blood Type" options={BLOOD_TYPES}
                        value={form.blood_type.clone()} on_change={on_field(DonorField::BloodType)}
                        placeholder="Select blood type" />
                    <TextField id="lastDonation" label="Last Donation (if any)" input_type="date"
                        icon="📅"
                        value={form.last_donation.clone()} on_change={on_field(DonorField::LastDonation)} />
                </div>
                <TextField id="medicalConditions" label="Medical Conditions"
                    value={form.medical_conditions.clone()} on_change={on_field(DonorField::MedicalConditions)}
                    placeholder="Any medical conditions that might affect donation (optional)" />
                <TextField id="emergencyContact" label="Emergency Contact"
                    value={form.emergency_contact.clone()} on_change={on_field(DonorField::EmergencyContact)}
                    placeholder="Emergency contact person and phone number" />
            </>
        },
        WizardStep::Consent => html! {
            <>
                <CheckboxField id="notifications" checked={form.notifications} on_toggle={on_notifications}>
                    {"I want to receive notifications about donation opportunities and health tips"}
                </CheckboxField>
                <CheckboxField id="privacy" checked={form.privacy_consent} on_toggle={on_consent}>
                    {"I accept the "}
                    <a href="/privacy" target="_blank" rel="noopener">{"Privacy Policy"}</a>
                    {" and agree to share my health data securely for blood donation matching *"}
                </CheckboxField>
                <div class="info-card">
                    <h3>{"🛡 Your Privacy is Protected"}</h3>
                    <ul>
                        <li>{"All medical data is encrypted and HIPAA compliant"}</li>
                        <li>{"We only share anonymized data for matching purposes"}</li>
                        <li>{"You can delete your profile anytime"}</li>
                        <li>{"Location data is used only for proximity matching"}</li>
                    </ul>
                </div>
            </>
        },
    };

    html! {
        <form class="modal-form donor-signup" {onsubmit}>
            <p class="modal-description step-indicator">
                { format!("Step {} of {}: {}", step.number(), WizardStep::COUNT, step.title()) }
            </p>
            { fields }
            <div class="form-actions">
                if step.previous().is_some() {
                    <button type="button" class="btn btn-outline" onclick={on_previous}>{"Previous"}</button>
                }
                <button type="submit" class="btn btn-primary grow">
                    { if step.is_last() { "Create Donor Profile" } else { "Next Step" } }
                </button>
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}
