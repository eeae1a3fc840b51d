use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::fields::{SelectField, TextAreaField, TextField};
use crate::components::modal::Modal;
use crate::components::toast::{use_toast, ToastMessage};
use crate::forms::hospital::{
    HospitalField, HospitalForm, BED_CAPACITIES, HOSPITAL_TYPES, INTEGRATION_OPTIONS,
    PATIENT_VOLUMES,
};
use crate::forms::{take_submission, ModalForm};

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "🗄",
        "Real-time Integration",
        "Seamless connection with e-RaktKosh and your existing systems",
    ),
    ("👥", "95% Match Accuracy", "AI-powered donor-patient matching for critical cases"),
    ("🛡", "HIPAA Compliant", "Full healthcare data protection and privacy standards"),
];

#[derive(Properties, PartialEq)]
pub struct HospitalModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(HospitalModal)]
pub fn hospital_modal(props: &HospitalModalProps) -> Html {
    html! {
        <Modal
            open={props.open}
            on_close={props.on_close.clone()}
            title="Hospital Partnership Program"
            description="Join leading healthcare institutions using BloodLink AI to transform blood donation management"
            icon="🩺"
            wide=true
        >
            <div class="benefit-grid">
                { for BENEFITS.iter().map(|(icon, title, text)| html! {
                    <div class="info-card">
                        <div class="info-card-icon">{ *icon }</div>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                }) }
            </div>
            <PartnershipForm on_close={props.on_close.clone()} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct PartnershipFormProps {
    on_close: Callback<()>,
}

#[function_component(PartnershipForm)]
fn partnership_form(props: &PartnershipFormProps) -> Html {
    let form = use_state(HospitalForm::default);
    let toaster = use_toast();

    let on_field = {
        let form = form.clone();
        move |field: HospitalField| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            })
        }
    };

    let on_integration = {
        let form = form.clone();
        move |option: &'static str| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                next.toggle_integration(option, input.checked());
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
            match take_submission(&mut next) {
                Ok(request) => {
                    info!(
                        "Hospital partnership request submitted with {} fields filled",
                        request.filled_fields()
                    );
                    toaster.show(ToastMessage::success(
                        "Hospital Registration Submitted",
                        "Our enterprise team will contact you within 24 hours to discuss your implementation.",
                    ));
                    form.set(next);
                    on_close.emit(());
                }
                Err(err) => {
                    warn!("Hospital partnership request blocked: {}", err);
                    toaster.show(ToastMessage::destructive("Check your details", err.to_string()));
                }
            }
        })
    };

    html! {
        <form class="modal-form hospital-partnership" {onsubmit}>
            <div class="form-row">
                <TextField id="hospitalName" label="Hospital Name" icon="🏢"
                    value={form.hospital_name.clone()} on_change={on_field(HospitalField::HospitalName)}
                    placeholder="Enter hospital name" required=true />
                <TextField id="contactPerson" label="Contact Person"
                    value={form.contact_person.clone()} on_change={on_field(HospitalField::ContactPerson)}
                    placeholder="Chief Medical Officer / Administrator" required=true />
            </div>
            <div class="form-row">
                <TextField id="hospitalEmail" label="Email Address" input_type="email"
                    value={form.email.clone()} on_change={on_field(HospitalField::Email)}
                    placeholder="contact@hospital.com" required=true />
                <TextField id="hospitalPhone" label="Phone Number"
                    value={form.phone.clone()} on_change={on_field(HospitalField::Phone)}
                    placeholder="+91 9876543210" required=true />
            </div>
            <div class="form-row three">
                <SelectField id="hospitalType" label="Hospital Type" options={HOSPITAL_TYPES}
                    value={form.hospital_type.clone()} on_change={on_field(HospitalField::HospitalType)}
                    placeholder="Select type" />
                <SelectField id="bedCapacity" label="Bed Capacity" options={BED_CAPACITIES}
                    value={form.bed_capacity.clone()} on_change={on_field(HospitalField::BedCapacity)}
                    placeholder="Select capacity" />
                <SelectField id="patientVolume" label="Monthly Thalassemia Patients" options={PATIENT_VOLUMES}
                    value={form.patient_volume.clone()} on_change={on_field(HospitalField::PatientVolume)}
                    placeholder="Select range" />
            </div>
            <TextField id="currentSystem" label="Current Blood Management System"
                value={form.current_system.clone()} on_change={on_field(HospitalField::CurrentSystem)}
                placeholder="e.g., Manual records, e-RaktKosh, Custom system" />

            <fieldset class="integration-needs">
                <legend>{"Integration Requirements"}</legend>
                <div class="form-row">
                    { for INTEGRATION_OPTIONS.iter().enumerate().map(|(i, option)| {
                        let id = format!("integration-{}", i);
                        html! {
                            <div class="checkbox-field">
                                <input
                                    id={id.clone()}
                                    type="checkbox"
                                    checked={form.needs_integration(option)}
                                    onchange={on_integration(*option)}
                                />
                                <label for={id}>{ *option }</label>
                            </div>
                        }
                    }) }
                </div>
            </fieldset>

            <TextAreaField id="challenges" label="Current Challenges & Goals"
                value={form.challenges.clone()} on_change={on_field(HospitalField::Challenges)}
                placeholder="Describe your current blood donation challenges and what you hope to achieve with BloodLink AI" />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary grow">{"Submit Partnership Request"}</button>
                <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}
