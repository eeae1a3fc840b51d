use super::{count_filled, require, Choice, FormError, ModalForm};

pub const HOSPITAL_TYPES: &[Choice] = &[
    Choice::new("government", "Government Hospital"),
    Choice::new("private", "Private Hospital"),
    Choice::new("trust", "Trust Hospital"),
    Choice::new("specialty", "Specialty Hospital"),
    Choice::new("blood-bank", "Blood Bank"),
];

pub const BED_CAPACITIES: &[Choice] = &[
    Choice::new("<100", "Less than 100 beds"),
    Choice::new("100-300", "100-300 beds"),
    Choice::new("300-500", "300-500 beds"),
    Choice::new("500-1000", "500-1000 beds"),
    Choice::new(">1000", "More than 1000 beds"),
];

pub const PATIENT_VOLUMES: &[Choice] = &[
    Choice::new("<10", "Less than 10"),
    Choice::new("10-50", "10-50 patients"),
    Choice::new("50-100", "50-100 patients"),
    Choice::new("100-200", "100-200 patients"),
    Choice::new(">200", "More than 200"),
];

pub const INTEGRATION_OPTIONS: &[&str] = &[
    "e-RaktKosh Integration",
    "Hospital Management System (HMS)",
    "Laboratory Information System (LIS)",
    "Electronic Health Records (EHR)",
    "Inventory Management System",
    "Patient Portal Integration",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalField {
    HospitalName,
    ContactPerson,
    Email,
    Phone,
    HospitalType,
    BedCapacity,
    PatientVolume,
    CurrentSystem,
    Challenges,
}

impl HospitalField {
    pub fn label(self) -> &'static str {
        match self {
            HospitalField::HospitalName => "Hospital Name",
            HospitalField::ContactPerson => "Contact Person",
            HospitalField::Email => "Email Address",
            HospitalField::Phone => "Phone Number",
            HospitalField::HospitalType => "Hospital Type",
            HospitalField::BedCapacity => "Bed Capacity",
            HospitalField::PatientVolume => "Monthly Thalassemia Patients",
            HospitalField::CurrentSystem => "Current Blood Management System",
            HospitalField::Challenges => "Current Challenges & Goals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HospitalForm {
    pub hospital_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub hospital_type: String,
    pub bed_capacity: String,
    pub current_system: String,
    pub patient_volume: String,
    pub challenges: String,
    integration_needs: Vec<String>,
}

impl HospitalForm {
    pub fn get(&self, field: HospitalField) -> &str {
        match field {
            HospitalField::HospitalName => &self.hospital_name,
            HospitalField::ContactPerson => &self.contact_person,
            HospitalField::Email => &self.email,
            HospitalField::Phone => &self.phone,
            HospitalField::HospitalType => &self.hospital_type,
            HospitalField::BedCapacity => &self.bed_capacity,
            HospitalField::PatientVolume => &self.patient_volume,
            HospitalField::CurrentSystem => &self.current_system,
            HospitalField::Challenges => &self.challenges,
        }
    }

    pub fn set(&mut self, field: HospitalField, value: String) {
        let slot = match field {
            HospitalField::HospitalName => &mut self.hospital_name,
            HospitalField::ContactPerson => &mut self.contact_person,
            HospitalField::Email => &mut self.email,
            HospitalField::Phone => &mut self.phone,
            HospitalField::HospitalType => &mut self.hospital_type,
            HospitalField::BedCapacity => &mut self.bed_capacity,
            HospitalField::PatientVolume => &mut self.patient_volume,
            HospitalField::CurrentSystem => &mut self.current_system,
            HospitalField::Challenges => &mut self.challenges,
        };
        *slot = value;
    }

    pub fn integration_needs(&self) -> &[String] {
        &self.integration_needs
    }

    pub fn needs_integration(&self, option: &str) -> bool {
        self.integration_needs.iter().any(|n| n == option)
    }

    /// Checking appends in click order; checking twice is a no-op.
    pub fn toggle_integration(&mut self, option: &str, checked: bool) {
        if checked {
            if !self.needs_integration(option) {
                self.integration_needs.push(option.to_string());
            }
        } else {
            self.integration_needs.retain(|n| n != option);
        }
    }
}

impl ModalForm for HospitalForm {
    fn validate(&self) -> Result<(), FormError> {
        for field in [
            HospitalField::HospitalName,
            HospitalField::ContactPerson,
            HospitalField::Email,
            HospitalField::Phone,
        ] {
            require(self.get(field), field.label())?;
        }
        Ok(())
    }

    fn filled_fields(&self) -> usize {
        count_filled(&[
            &self.hospital_name,
            &self.contact_person,
            &self.email,
            &self.phone,
            &self.hospital_type,
            &self.bed_capacity,
            &self.current_system,
            &self.patient_volume,
            &self.challenges,
        ]) + usize::from(!self.integration_needs.is_empty())
    }
}
