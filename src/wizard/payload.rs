use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::answers::Answers;
use super::schema::parse_date;
use super::steps::*;
use crate::principal::Principal;

/// Profile record in the shape `add_user_profile` expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub id: Principal,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub dob: Option<String>,
    pub gender_pronouns: Option<String>,
    pub religion: Option<String>,
    pub height: Option<String>,
    pub zodiac: Option<String>,
    pub diet: Option<String>,
    pub occupation: Option<String>,
    pub looking_for: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub hobbies: Option<Vec<String>>,
    pub sports: Option<Vec<String>>,
    pub art_and_culture: Option<Vec<String>>,
    pub pets: Option<String>,
    pub general_habits: Option<Vec<String>>,
    pub outdoor_activities: Option<Vec<String>>,
    pub travel: Option<Vec<String>>,
    pub movies: Option<Vec<String>>,
    pub interests_in: Option<String>,
    pub age: Option<u64>,
    pub location: Option<String>,
    pub min_preferred_age: Option<u64>,
    pub max_preferred_age: Option<u64>,
    pub preferred_gender: Option<String>,
    pub preferred_location: Option<String>,
    pub introduction: Option<String>,
}

impl SubmissionPayload {
    /// Renames and flattens the wizard answers. `today` anchors the age.
    pub fn build(answers: &Answers, id: Principal, today: NaiveDate) -> Self {
        let age_range = answers.text(PREFER_AGE).and_then(|r| age_bounds(&r));
        let age = answers
            .text(DOB)
            .and_then(|d| parse_date(&d))
            .and_then(|dob| today.years_since(dob))
            .map(u64::from);

        Self {
            id,
            gender: answers.text(USER_GENDER),
            email: answers.text(EMAIL),
            name: answers.text(USERNAME),
            mobile_number: answers.text(MOBILE),
            dob: answers.text(DOB),
            gender_pronouns: answers.text(GENDER_PRONOUNS),
            religion: answers.text(RELIGION),
            height: answers.text(HEIGHT),
            zodiac: answers.text(ZODIAC),
            diet: answers.text(FOODING),
            occupation: answers.text(WHAT_YOU_DO),
            looking_for: answers.text(LOOKING_FOR),
            smoking: answers.text(SMOKING),
            drinking: answers.text(DRINK),
            hobbies: answers.list(HOBBIES),
            sports: answers.list(SPORTS),
            art_and_culture: answers.list(ART),
            pets: answers.text(PETS),
            general_habits: answers.list(HABITS),
            outdoor_activities: answers.list(ACTIVITIES),
            travel: answers.list(TRAVEL),
            movies: answers.list(MOVIES),
            interests_in: answers.text(INTERESTS),
            age,
            location: answers.text(LOCATION),
            min_preferred_age: age_range.map(|(lo, _)| lo),
            max_preferred_age: age_range.map(|(_, hi)| hi),
            preferred_gender: answers.text(INTERESTS),
            preferred_location: answers.text(PREFERRED_LOCATION),
            introduction: answers.text(INTRO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::answers::Answer;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn principal() -> Principal {
        "2vxsx-fae".parse().unwrap()
    }

    #[test]
    fn renames_draft_keys() {
        let mut a = Answers::new();
        a.set(USER_GENDER, Answer::Text("Woman".into()));
        a.set(USERNAME, Answer::Text("ada".into()));
        a.set(MOBILE, Answer::Text("9876543210".into()));
        a.set(FOODING, Answer::Text("Vegan".into()));
        a.set(HABITS, Answer::List(vec!["Fitness".into(), "Journaling".into()]));
        a.set(LOOKING_FOR, Answer::Text("Dating".into()));

        let p = SubmissionPayload::build(&a, principal(), today());
        assert_eq!(p.gender.as_deref(), Some("Woman"));
        assert_eq!(p.name.as_deref(), Some("ada"));
        assert_eq!(p.mobile_number.as_deref(), Some("9876543210"));
        assert_eq!(p.diet.as_deref(), Some("Vegan"));
        assert_eq!(p.looking_for.as_deref(), Some("Dating"));
        assert_eq!(
            p.general_habits,
            Some(vec!["Fitness".to_string(), "Journaling".to_string()])
        );
        assert_eq!(p.email, None);
    }

    #[test]
    fn age_is_whole_years_before_today() {
        let mut a = Answers::new();
        a.set(DOB, Answer::Text("2000-06-02".into()));
        assert_eq!(SubmissionPayload::build(&a, principal(), today()).age, Some(23));
        a.set(DOB, Answer::Text("2000-06-01".into()));
        assert_eq!(SubmissionPayload::build(&a, principal(), today()).age, Some(24));
    }

    #[test]
    fn preferred_age_range_is_split() {
        let mut a = Answers::new();
        a.set(PREFER_AGE, Answer::Text("20-25".into()));
        let p = SubmissionPayload::build(&a, principal(), today());
        assert_eq!((p.min_preferred_age, p.max_preferred_age), (Some(20), Some(25)));

        a.set(PREFER_AGE, Answer::Text("above 30".into()));
        let p = SubmissionPayload::build(&a, principal(), today());
        assert_eq!((p.min_preferred_age, p.max_preferred_age), (Some(30), Some(60)));
    }

    #[test]
    fn interests_fill_both_interest_fields() {
        let mut a = Answers::new();
        a.set(INTERESTS, Answer::Text("All".into()));
        let p = SubmissionPayload::build(&a, principal(), today());
        assert_eq!(p.interests_in.as_deref(), Some("All"));
        assert_eq!(p.preferred_gender.as_deref(), Some("All"));
    }

    #[test]
    fn draft_only_keys_are_not_serialized() {
        let mut a = Answers::new();
        a.set(LIFE_PATH_NUMBER, Answer::Number(7));
        a.set(PREFER_AGE, Answer::Text("18-20".into()));
        let json = serde_json::to_value(SubmissionPayload::build(&a, principal(), today())).unwrap();
        let obj = json.as_object().unwrap();
        for draft_key in [LIFE_PATH_NUMBER, PREFER_AGE, USER_GENDER, USERNAME, MOBILE] {
            assert!(!obj.contains_key(draft_key), "{draft_key} leaked");
        }
        assert_eq!(obj["id"], "2vxsx-fae");
        assert_eq!(obj.len(), 31);
    }
}
