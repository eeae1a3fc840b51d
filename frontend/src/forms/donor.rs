use super::{count_filled, require, Choice, FormError, ModalForm};

pub const BLOOD_TYPES: &[Choice] = &[
    Choice::same("A+"),
    Choice::same("A-"),
    Choice::same("B+"),
    Choice::same("B-"),
    Choice::same("AB+"),
    Choice::same("AB-"),
    Choice::same("O+"),
    Choice::same("O-"),
];

pub const INDIAN_STATES: &[Choice] = &[
    Choice::same("Andhra Pradesh"),
    Choice::same("Assam"),
    Choice::same("Bihar"),
    Choice::same("Delhi"),
    Choice::same("Gujarat"),
    Choice::same("Haryana"),
    Choice::same("Karnataka"),
    Choice::same("Kerala"),
    Choice::same("Maharashtra"),
    Choice::same("Punjab"),
    Choice::same("Rajasthan"),
    Choice::same("Tamil Nadu"),
    Choice::same("Uttar Pradesh"),
    Choice::same("West Bengal"),
    Choice::same("Other"),
];

pub const MIN_DONOR_AGE: u8 = 18;
pub const MAX_DONOR_AGE: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Personal,
    Medical,
    Consent,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Medical => 2,
            WizardStep::Consent => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Information",
            WizardStep::Medical => "Medical Details",
            WizardStep::Consent => "Preferences & Consent",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Personal => Some(WizardStep::Medical),
            WizardStep::Medical => Some(WizardStep::Consent),
            WizardStep::Consent => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Personal => None,
            WizardStep::Medical => Some(WizardStep::Personal),
            WizardStep::Consent => Some(WizardStep::Medical),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Text-valued donor fields. The two checkboxes have their own setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorField {
    Name,
    Age,
    Email,
    Phone,
    City,
    State,
    BloodType,
    LastDonation,
    MedicalConditions,
    EmergencyContact,
}

impl DonorField {
    pub fn label(self) -> &'static str {
        match self {
            DonorField::Name => "Full Name",
            DonorField::Age => "Age",
            DonorField::Email => "Email Address",
            DonorField::Phone => "Phone Number",
            DonorField::City => "City",
            DonorField::State => "State",
            DonorField::BloodType => "Blood Type",
            DonorField::LastDonation => "Last Donation",
            DonorField::MedicalConditions => "Medical Conditions",
            DonorField::EmergencyContact => "Emergency Contact",
        }
    }

    pub fn step(self) -> WizardStep {
        match self {
            DonorField::Name
            | DonorField::Age
            | DonorField::Email
            | DonorField::Phone
            | DonorField::City
            | DonorField::State => WizardStep::Personal,
            DonorField::BloodType
            | DonorField::LastDonation
            | DonorField::MedicalConditions
            | DonorField::EmergencyContact => WizardStep::Medical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub blood_type: String,
    pub city: String,
    pub state: String,
    pub last_donation: String,
    pub medical_conditions: String,
    pub emergency_contact: String,
    pub notifications: bool,
    pub privacy_consent: bool,
}

impl Default for DonorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            age: String::new(),
            blood_type: String::new(),
            city: String::new(),
            state: String::new(),
            last_donation: String::new(),
            medical_conditions: String::new(),
            emergency_contact: String::new(),
            notifications: true,
            privacy_consent: false,
        }
    }
}

impl DonorForm {
    pub fn get(&self, field: DonorField) -> &str {
        match field {
            DonorField::Name => &self.name,
            DonorField::Age => &self.age,
            DonorField::Email => &self.email,
            DonorField::Phone => &self.phone,
            DonorField::City => &self.city,
            DonorField::State => &self.state,
            DonorField::BloodType => &self.blood_type,
            DonorField::LastDonation => &self.last_donation,
            DonorField::MedicalConditions => &self.medical_conditions,
            DonorField::EmergencyContact => &self.emergency_contact,
        }
    }

    pub fn set(&mut self, field: DonorField, value: String) {
        let slot = match field {
            DonorField::Name => &mut self.name,
            DonorField::Age => &mut self.age,
            DonorField::Email => &mut self.email,
            DonorField::Phone => &mut self.phone,
            DonorField::City => &mut self.city,
            DonorField::State => &mut self.state,
            DonorField::BloodType => &mut self.blood_type,
            DonorField::LastDonation => &mut self.last_donation,
            DonorField::MedicalConditions => &mut self.medical_conditions,
            DonorField::EmergencyContact => &mut self.emergency_contact,
        };
        *slot = value;
    }

    /// Checks the required fields shown on `step`.
    pub fn validate_step(&self, step: WizardStep) -> Result<(), FormError> {
        if step != WizardStep::Personal {
            return Ok(());
        }
        for field in [DonorField::Name, DonorField::Age] {
            require(self.get(field), field.label())?;
        }
        // Number inputs accept forms like "18.0" and "2e1".
        let in_range = |age: f64| {
            age.fract() == 0.0
                && (f64::from(MIN_DONOR_AGE)..=f64::from(MAX_DONOR_AGE)).contains(&age)
        };
        match self.age.trim().parse::<f64>() {
            Ok(age) if in_range(age) => {}
            _ => return Err(FormError::AgeOutOfRange),
        }
        for field in [DonorField::Email, DonorField::Phone, DonorField::City] {
            require(self.get(field), field.label())?;
        }
        Ok(())
    }
}

impl ModalForm for DonorForm {
    fn validate(&self) -> Result<(), FormError> {
        self.validate_step(WizardStep::Personal)?;
        self.validate_step(WizardStep::Medical)?;
        if !self.privacy_consent {
            return Err(FormError::ConsentRequired);
        }
        Ok(())
    }

    fn filled_fields(&self) -> usize {
        count_filled(&[
            &self.name,
            &self.email,
            &self.phone,
            &self.age,
            &self.blood_type,
            &self.city,
            &self.state,
            &self.last_donation,
            &self.medical_conditions,
            &self.emergency_contact,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorOutcome {
    Advanced(WizardStep),
    Completed(DonorForm),
}

/// The three-step donor signup wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DonorSignup {
    step: WizardStep,
    form: DonorForm,
}

impl DonorSignup {
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &DonorForm {
        &self.form
    }

    pub fn set_field(&mut self, field: DonorField, value: String) {
        self.form.set(field, value);
    }

    pub fn set_notifications(&mut self, on: bool) {
        self.form.notifications = on;
    }

    pub fn set_privacy_consent(&mut self, accepted: bool) {
        self.form.privacy_consent = accepted;
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
    }

    /// Advances the wizard, or on the last step hands back the finished form
    /// and returns the wizard to step one with empty fields.
    ///
    /// On error nothing changes.
    pub fn submit(&mut self) -> Result<DonorOutcome, FormError> {
        self.form.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
            return Ok(DonorOutcome::Advanced(next));
        }
        let form = super::take_submission(&mut self.form)?;
        self.step = WizardStep::Personal;
        Ok(DonorOutcome::Completed(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_details(wizard: &mut DonorSignup) {
        wizard.set_field(DonorField::Name, "Asha Rao".into());
        wizard.set_field(DonorField::Age, "29".into());
        wizard.set_field(DonorField::Email, "asha@example.com".into());
        wizard.set_field(DonorField::Phone, "+91 9876543210".into());
        wizard.set_field(DonorField::City, "Pune".into());
        wizard.set_field(DonorField::State, "Maharashtra".into());
    }

    #[test]
    fn defaults_match_a_fresh_dialog() {
        let wizard = DonorSignup::default();
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert!(wizard.form().notifications);
        assert!(!wizard.form().privacy_consent);
        assert_eq!(wizard.form().filled_fields(), 0);
    }

    #[test]
    fn steps_one_and_two_advance_and_keep_values() {
        let mut wizard = DonorSignup::default();
        personal_details(&mut wizard);

        assert_eq!(
            wizard.submit(),
            Ok(DonorOutcome::Advanced(WizardStep::Medical))
        );
        wizard.set_field(DonorField::BloodType, "O-".into());

        assert_eq!(
            wizard.submit(),
            Ok(DonorOutcome::Advanced(WizardStep::Consent))
        );
        assert_eq!(wizard.form().name, "Asha Rao");
        assert_eq!(wizard.form().blood_type, "O-");
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn missing_consent_blocks_final_step() {
        let mut wizard = DonorSignup::default();
        personal_details(&mut wizard);
        wizard.submit().unwrap();
        wizard.submit().unwrap();

        let before = wizard.clone();
        assert_eq!(wizard.submit(), Err(FormError::ConsentRequired));
        assert_eq!(wizard, before);
        assert_eq!(wizard.step(), WizardStep::Consent);
    }

    #[test]
    fn consent_completes_and_resets() {
        let mut wizard = DonorSignup::default();
        personal_details(&mut wizard);
        wizard.submit().unwrap();
        wizard.submit().unwrap();
        wizard.set_notifications(false);
        wizard.set_privacy_consent(true);

        match wizard.submit() {
            Ok(DonorOutcome::Completed(form)) => {
                assert_eq!(form.city, "Pune");
                assert!(!form.notifications);
                assert!(form.privacy_consent);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(wizard, DonorSignup::default());
    }

    #[test]
    fn step_one_requires_personal_fields() {
        let mut wizard = DonorSignup::default();
        wizard.set_field(DonorField::Name, "Asha".into());
        assert_eq!(wizard.submit(), Err(FormError::MissingField("Age")));
        assert_eq!(wizard.step(), WizardStep::Personal);

        wizard.set_field(DonorField::Age, "30".into());
        assert_eq!(
            wizard.submit(),
            Err(FormError::MissingField("Email Address"))
        );
    }

    #[test]
    fn age_must_be_within_donor_range() {
        let mut form = DonorForm {
            name: "A".into(),
            email: "a@b.c".into(),
            phone: "1".into(),
            city: "Delhi".into(),
            ..DonorForm::default()
        };
        for bad in ["17", "66", "abc", "-3", "18.5", "NaN", "inf"] {
            form.age = bad.into();
            assert_eq!(
                form.validate_step(WizardStep::Personal),
                Err(FormError::AgeOutOfRange),
                "age {bad}"
            );
        }
        for good in ["18", "65", " 40 ", "18.0", "2e1"] {
            form.age = good.into();
            assert_eq!(form.validate_step(WizardStep::Personal), Ok(()));
        }
    }

    #[test]
    fn back_never_goes_below_step_one() {
        let mut wizard = DonorSignup::default();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Personal);

        personal_details(&mut wizard);
        wizard.submit().unwrap();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert_eq!(wizard.form().email, "asha@example.com");
    }

    #[test]
    fn step_metadata() {
        let titles: Vec<_> = [
            WizardStep::Personal,
            WizardStep::Medical,
            WizardStep::Consent,
        ]
        .iter()
        .map(|s| (s.number(), s.title()))
        .collect();
        assert_eq!(
            titles,
            vec![
                (1, "Personal Information"),
                (2, "Medical Details"),
                (3, "Preferences & Consent"),
            ]
        );
        assert!(WizardStep::Consent.is_last());
        assert_eq!(DonorField::EmergencyContact.step(), WizardStep::Medical);
    }
}
