use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::answers::{Answer, Answers};
use super::steps;

/// Field name → message for every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Required,
    Email,
    TenDigits,
    PastDate,
    PositiveInteger,
    MinItems(usize),
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub checks: Vec<(Check, &'static str)>,
}

impl Rule {
    fn new(checks: Vec<(Check, &'static str)>) -> Self {
        Self { checks }
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn mobile_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("mobile pattern is valid"))
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Validation rules for wizard fields. Fields without a rule always pass.
#[derive(Debug, Clone)]
pub struct Schema {
    rules: BTreeMap<&'static str, Rule>,
    today: NaiveDate,
}

impl Schema {
    pub fn empty(today: NaiveDate) -> Self {
        Self { rules: BTreeMap::new(), today }
    }

    pub fn with_rule(mut self, field: &'static str, checks: Vec<(Check, &'static str)>) -> Self {
        self.rules.insert(field, Rule::new(checks));
        self
    }

    /// Rules for the account-creation flow.
    pub fn account(today: NaiveDate) -> Self {
        use steps::*;
        use Check::*;

        let min2 = |msg: &'static str| vec![(MinItems(2), msg)];
        let required = |msg: &'static str| vec![(Required, msg)];

        Self::empty(today)
            .with_rule(USER_GENDER, required("Gender is required"))
            .with_rule(
                EMAIL,
                vec![(Required, "Email is required"), (Email, "Invalid email format")],
            )
            .with_rule(USERNAME, required("Username is required"))
            .with_rule(
                MOBILE,
                vec![(Required, "Mobile number is required"), (TenDigits, "Invalid mobile number")],
            )
            .with_rule(
                DOB,
                vec![(Required, "Date of birth is required"), (PastDate, "Enter a valid date of birth")],
            )
            .with_rule(GENDER_PRONOUNS, required("Gender pronouns are required"))
            .with_rule(RELIGION, required("A religion selection is required"))
            .with_rule(
                LIFE_PATH_NUMBER,
                vec![
                    (Required, "Life-path number is required"),
                    (PositiveInteger, "Life-path number must be a positive integer"),
                ],
            )
            .with_rule(ZODIAC, required("Zodiac sign is required"))
            .with_rule(FOODING, required("Fooding preference is required"))
            .with_rule(WHAT_YOU_DO, required("Occupation is required"))
            .with_rule(LOOKING_FOR, required("Relationship preference is required"))
            .with_rule(SMOKING, required("Smoking preference is required"))
            .with_rule(DRINK, required("Drinking preference is required"))
            .with_rule(HOBBIES, min2("Select at least 2 hobbies"))
            .with_rule(SPORTS, min2("Select at least 2 sports"))
            .with_rule(ART, min2("Select at least 2 arts"))
            .with_rule(PETS, required("Pet selection is required"))
            .with_rule(HABITS, min2("Select at least 2 habits"))
            .with_rule(ACTIVITIES, min2("Select at least 2 activities"))
            .with_rule(MOVIES, min2("Select at least 2 movies"))
            .with_rule(TRAVEL, min2("Select at least 2 travel options"))
            .with_rule(INTERESTS, required("Tell us who you are interested in"))
            .with_rule(
                PREFER_AGE,
                vec![
                    (Required, "Preferred age is required"),
                    (OneOf(AGE_RANGES), "Pick one of the listed age ranges"),
                ],
            )
            .with_rule(LOCATION, required("Location is required"))
            .with_rule(PREFERRED_LOCATION, required("Preferred location is required"))
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// First failing message for `field`, if any.
    pub fn check_field(&self, answers: &Answers, field: &str) -> Option<&'static str> {
        let rule = self.rules.get(field)?;
        let answer = answers.get(field);
        rule.checks
            .iter()
            .find(|(check, _)| !self.passes(check, answer, answers, field))
            .map(|(_, msg)| *msg)
    }

    /// Validates the named fields; `Ok` only when every one passes.
    pub fn validate<'a>(
        &self,
        answers: &Answers,
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in fields {
            if let Some(msg) = self.check_field(answers, field) {
                errors.insert(field, msg);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn passes(&self, check: &Check, answer: Option<&Answer>, answers: &Answers, field: &str) -> bool {
        match check {
            Check::Required => match answer {
                Some(Answer::List(items)) => !items.is_empty(),
                Some(_) => answers.text(field).is_some(),
                None => false,
            },
            Check::MinItems(n) => answers.list(field).map_or(0, |l| l.len()) >= *n,
            // Format checks only judge values that are present.
            _ => match answers.text(field) {
                None => true,
                Some(text) => self.passes_format(check, &text),
            },
        }
    }

    fn passes_format(&self, check: &Check, text: &str) -> bool {
        match check {
            Check::Email => email_re().is_match(text),
            Check::TenDigits => mobile_re().is_match(text),
            Check::PastDate => parse_date(text).is_some_and(|d| d < self.today),
            Check::PositiveInteger => text.parse::<u64>().is_ok_and(|n| n > 0),
            Check::OneOf(options) => options.iter().any(|o| *o == text),
            Check::Required | Check::MinItems(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::steps::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn text(a: &mut Answers, field: &str, value: &str) {
        a.set(field, Answer::Text(value.into()));
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        assert_eq!(schema.check_field(&a, USERNAME), Some("Username is required"));
        text(&mut a, USERNAME, "   ");
        assert_eq!(schema.check_field(&a, USERNAME), Some("Username is required"));
        text(&mut a, USERNAME, "ada");
        assert_eq!(schema.check_field(&a, USERNAME), None);
    }

    #[test]
    fn email_format_is_checked_after_presence() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        assert_eq!(schema.check_field(&a, EMAIL), Some("Email is required"));
        text(&mut a, EMAIL, "not-an-email");
        assert_eq!(schema.check_field(&a, EMAIL), Some("Invalid email format"));
        text(&mut a, EMAIL, "ada@example.com");
        assert_eq!(schema.check_field(&a, EMAIL), None);
    }

    #[test]
    fn mobile_needs_exactly_ten_digits() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        for bad in ["12345", "12345678901", "12345abcde", "+919876543"] {
            text(&mut a, MOBILE, bad);
            assert_eq!(schema.check_field(&a, MOBILE), Some("Invalid mobile number"), "{bad}");
        }
        text(&mut a, MOBILE, "9876543210");
        assert_eq!(schema.check_field(&a, MOBILE), None);
    }

    #[test]
    fn dob_must_be_a_past_date() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        text(&mut a, DOB, "1995-02-30");
        assert!(schema.check_field(&a, DOB).is_some());
        text(&mut a, DOB, "2030-01-01");
        assert!(schema.check_field(&a, DOB).is_some());
        text(&mut a, DOB, "1995-02-28");
        assert_eq!(schema.check_field(&a, DOB), None);
    }

    #[test]
    fn life_path_number_is_positive_integer() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        text(&mut a, LIFE_PATH_NUMBER, "0");
        assert!(schema.check_field(&a, LIFE_PATH_NUMBER).is_some());
        text(&mut a, LIFE_PATH_NUMBER, "-3");
        assert!(schema.check_field(&a, LIFE_PATH_NUMBER).is_some());
        text(&mut a, LIFE_PATH_NUMBER, "2.5");
        assert!(schema.check_field(&a, LIFE_PATH_NUMBER).is_some());
        a.set(LIFE_PATH_NUMBER, Answer::Number(7));
        assert_eq!(schema.check_field(&a, LIFE_PATH_NUMBER), None);
    }

    #[test]
    fn multi_choice_needs_two_selections() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        assert!(schema.check_field(&a, HOBBIES).is_some());
        a.toggle(HOBBIES, "Reading");
        assert_eq!(schema.check_field(&a, HOBBIES), Some("Select at least 2 hobbies"));
        a.toggle(HOBBIES, "Music");
        assert_eq!(schema.check_field(&a, HOBBIES), None);
    }

    #[test]
    fn preferred_age_must_be_listed() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        text(&mut a, PREFER_AGE, "40-50");
        assert_eq!(
            schema.check_field(&a, PREFER_AGE),
            Some("Pick one of the listed age ranges")
        );
        text(&mut a, PREFER_AGE, "above 30");
        assert_eq!(schema.check_field(&a, PREFER_AGE), None);
    }

    #[test]
    fn fields_without_rules_pass() {
        let schema = Schema::account(today());
        let a = Answers::new();
        assert_eq!(schema.check_field(&a, HEIGHT), None);
        assert_eq!(schema.check_field(&a, INTRO), None);
    }

    #[test]
    fn validate_collects_every_failure() {
        let schema = Schema::account(today());
        let mut a = Answers::new();
        text(&mut a, EMAIL, "ada@example.com");
        let errors = schema
            .validate(&a, account_steps()[0].field_names())
            .unwrap_err();
        let failed: Vec<_> = errors.fields().collect();
        assert_eq!(failed, vec![DOB, MOBILE, USER_GENDER, USERNAME]);
    }
}
