use chrono::NaiveDate;

use super::{count_filled, require, Choice, FormError, ModalForm};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const ROLES: &[Choice] = &[
    Choice::new("doctor", "Doctor / Physician"),
    Choice::new("administrator", "Hospital Administrator"),
    Choice::new("blood-bank-manager", "Blood Bank Manager"),
    Choice::new("it-manager", "IT Manager"),
    Choice::new("ngo-coordinator", "NGO Coordinator"),
    Choice::new("other", "Other"),
];

pub const TIME_SLOTS: &[Choice] = &[
    Choice::new("9-10", "9:00 AM - 10:00 AM"),
    Choice::new("10-11", "10:00 AM - 11:00 AM"),
    Choice::new("11-12", "11:00 AM - 12:00 PM"),
    Choice::new("2-3", "2:00 PM - 3:00 PM"),
    Choice::new("3-4", "3:00 PM - 4:00 PM"),
    Choice::new("4-5", "4:00 PM - 5:00 PM"),
];

/// What the visitor is booking. Drives every piece of copy in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleKind {
    #[default]
    Demo,
    Consultation,
}

impl ScheduleKind {
    pub fn noun(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "demo",
            ScheduleKind::Consultation => "consultation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "Schedule Demo",
            ScheduleKind::Consultation => "Schedule Consultation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "Book a personalized demo of BloodLink AI platform",
            ScheduleKind::Consultation => "Schedule a consultation to discuss your specific needs",
        }
    }

    pub fn requirements_label(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "Specific Areas of Interest",
            ScheduleKind::Consultation => "Consultation Requirements",
        }
    }

    pub fn requirements_placeholder(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "What aspects of BloodLink AI are you most interested in seeing?",
            ScheduleKind::Consultation => {
                "Tell us about your current challenges and what you hope to achieve"
            }
        }
    }

    pub fn confirmation_title(self) -> &'static str {
        match self {
            ScheduleKind::Demo => "Demo Scheduled",
            ScheduleKind::Consultation => "Consultation Scheduled",
        }
    }

    pub fn confirmation_message(self) -> String {
        format!(
            "We'll contact you within 24 hours to confirm your {}.",
            self.noun()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    Name,
    Email,
    Phone,
    Organization,
    Role,
    PreferredDate,
    PreferredTime,
    Requirements,
}

impl ScheduleField {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleField::Name => "Full Name",
            ScheduleField::Email => "Email Address",
            ScheduleField::Phone => "Phone Number",
            ScheduleField::Organization => "Organization",
            ScheduleField::Role => "Your Role",
            ScheduleField::PreferredDate => "Preferred Date",
            ScheduleField::PreferredTime => "Preferred Time",
            ScheduleField::Requirements => "Requirements",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub requirements: String,
}

impl ScheduleForm {
    pub fn get(&self, field: ScheduleField) -> &str {
        match field {
            ScheduleField::Name => &self.name,
            ScheduleField::Email => &self.email,
            ScheduleField::Phone => &self.phone,
            ScheduleField::Organization => &self.organization,
            ScheduleField::Role => &self.role,
            ScheduleField::PreferredDate => &self.preferred_date,
            ScheduleField::PreferredTime => &self.preferred_time,
            ScheduleField::Requirements => &self.requirements,
        }
    }

    pub fn set(&mut self, field: ScheduleField, value: String) {
        let slot = match field {
            ScheduleField::Name => &mut self.name,
            ScheduleField::Email => &mut self.email,
            ScheduleField::Phone => &mut self.phone,
            ScheduleField::Organization => &mut self.organization,
            ScheduleField::Role => &mut self.role,
            ScheduleField::PreferredDate => &mut self.preferred_date,
            ScheduleField::PreferredTime => &mut self.preferred_time,
            ScheduleField::Requirements => &mut self.requirements,
        };
        *slot = value;
    }

    /// The preferred date is optional, but when given it can't be before
    /// `today`. Mirrors the `min` attribute on the date input.
    pub fn check_date(&self, today: NaiveDate) -> Result<(), FormError> {
        let raw = self.preferred_date.trim();
        if raw.is_empty() {
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate(raw.to_string()))?;
        if date < today {
            return Err(FormError::DateInPast);
        }
        Ok(())
    }
}

impl ModalForm for ScheduleForm {
    fn validate(&self) -> Result<(), FormError> {
        for field in [
            ScheduleField::Name,
            ScheduleField::Email,
            ScheduleField::Organization,
        ] {
            require(self.get(field), field.label())?;
        }
        Ok(())
    }

    fn filled_fields(&self) -> usize {
        count_filled(&[
            &self.name,
            &self.email,
            &self.phone,
            &self.organization,
            &self.role,
            &self.preferred_date,
            &self.preferred_time,
            &self.requirements,
        ])
    }
}

/// Today's date on the visitor's local calendar.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn copy_follows_kind() {
        assert_eq!(ScheduleKind::default(), ScheduleKind::Demo);
        assert_eq!(ScheduleKind::Demo.title(), "Schedule Demo");
        assert_eq!(
            ScheduleKind::Consultation.confirmation_title(),
            "Consultation Scheduled"
        );
        assert_eq!(
            ScheduleKind::Consultation.confirmation_message(),
            "We'll contact you within 24 hours to confirm your consultation."
        );
        assert_eq!(
            ScheduleKind::Demo.requirements_label(),
            "Specific Areas of Interest"
        );
    }

    #[test]
    fn phone_is_optional_organization_is_not() {
        let mut form = ScheduleForm::default();
        form.set(ScheduleField::Name, "Nikhil".into());
        form.set(ScheduleField::Email, "nikhil@ngo.org".into());
        assert_eq!(
            form.validate(),
            Err(FormError::MissingField("Organization"))
        );
        form.set(ScheduleField::Organization, "Thalassemia Trust".into());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn preferred_date_is_checked_against_today() {
        let today = day("2026-03-10");
        let mut form = ScheduleForm::default();
        assert_eq!(form.check_date(today), Ok(()));

        form.preferred_date = "2026-03-10".into();
        assert_eq!(form.check_date(today), Ok(()));

        form.preferred_date = "2026-03-09".into();
        assert_eq!(form.check_date(today), Err(FormError::DateInPast));

        form.preferred_date = "10/03/2026".into();
        assert_eq!(
            form.check_date(today),
            Err(FormError::InvalidDate("10/03/2026".into()))
        );
    }

    #[test]
    fn time_slots_skip_lunch_hour() {
        let values: Vec<_> = TIME_SLOTS.iter().map(|c| c.value).collect();
        assert!(!values.contains(&"12-1"));
        assert_eq!(values.len(), 6);
    }
}
