//! Field catalog and step layout of the account-creation wizard.

pub const USER_GENDER: &str = "usergender";
pub const EMAIL: &str = "email";
pub const USERNAME: &str = "username";
pub const MOBILE: &str = "mobile";
pub const DOB: &str = "dob";

pub const GENDER_PRONOUNS: &str = "genderPronouns";
pub const RELIGION: &str = "selectedReligion";
pub const HEIGHT: &str = "selectedHeight";
pub const LIFE_PATH_NUMBER: &str = "selectedLifePathNumber";
pub const ZODIAC: &str = "selectedZodiac";
pub const FOODING: &str = "selectedFooding";
pub const WHAT_YOU_DO: &str = "selectedWhatYouDo";
pub const LOOKING_FOR: &str = "selectedLookingFor";

pub const SMOKING: &str = "selectedsmoking";
pub const DRINK: &str = "selecteddrink";
pub const HOBBIES: &str = "selectedhobbies";
pub const SPORTS: &str = "selectedsports";
pub const ART: &str = "selectedArt";
pub const PETS: &str = "selectedPets";
pub const HABITS: &str = "selectedHabits";
pub const ACTIVITIES: &str = "selectedActivities";
pub const MOVIES: &str = "selectedMovies";
pub const TRAVEL: &str = "selectedTravel";

pub const INTERESTS: &str = "selectedintrests";
pub const PREFER_AGE: &str = "selectedpreferAge";
pub const LOCATION: &str = "selectedLocation";
pub const PREFERRED_LOCATION: &str = "selectedPrefferedLocation";
pub const INTRO: &str = "selectedIntro";

pub const AGE_RANGES: &[&str] = &["18-20", "20-25", "25-30", "above 30"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Number,
    LongText,
    Single(&'static [&'static str]),
    Multi(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepDefinition {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

const ABOUT_YOU: &[FieldSpec] = &[
    field(USER_GENDER, "Gender", FieldKind::Single(&["Man", "Woman", "Non-binary"])),
    field(EMAIL, "Email", FieldKind::Email),
    field(USERNAME, "Username", FieldKind::Text),
    field(MOBILE, "Mobile number", FieldKind::Phone),
    field(DOB, "Date of birth", FieldKind::Date),
];

const IDENTITY: &[FieldSpec] = &[
    field(
        GENDER_PRONOUNS,
        "Gender pronouns",
        FieldKind::Single(&["He/Him", "She/Her", "They/Them", "Other"]),
    ),
    field(
        RELIGION,
        "Religion",
        FieldKind::Single(&["Hindu", "Muslim", "Christian", "Sikh", "Buddhist", "Jain", "Other", "None"]),
    ),
    field(HEIGHT, "Height", FieldKind::Text),
    field(LIFE_PATH_NUMBER, "Life-path number", FieldKind::Number),
    field(
        ZODIAC,
        "Zodiac sign",
        FieldKind::Single(&[
            "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo",
            "Libra", "Scorpio", "Sagittarius", "Capricorn", "Aquarius", "Pisces",
        ]),
    ),
    field(FOODING, "Diet", FieldKind::Single(&["Vegetarian", "Non-vegetarian", "Vegan", "Eggetarian"])),
    field(
        WHAT_YOU_DO,
        "What you do",
        FieldKind::Single(&["Student", "Employed", "Self-employed", "Freelancer", "Other"]),
    ),
    field(
        LOOKING_FOR,
        "Looking for",
        FieldKind::Single(&["Friendship", "Dating", "Marriage", "Networking"]),
    ),
];

const LIFESTYLE: &[FieldSpec] = &[
    field(SMOKING, "Smoking", FieldKind::Single(&["Never", "Occasionally", "Regularly"])),
    field(DRINK, "Drinking", FieldKind::Single(&["Never", "Socially", "Regularly"])),
    field(
        HOBBIES,
        "Hobbies",
        FieldKind::Multi(&["Reading", "Cooking", "Gaming", "Music", "Photography", "Dancing"]),
    ),
    field(
        SPORTS,
        "Sports",
        FieldKind::Multi(&["Cricket", "Football", "Tennis", "Badminton", "Swimming", "Running"]),
    ),
    field(ART, "Art & culture", FieldKind::Multi(&["Painting", "Theatre", "Museums", "Poetry", "Sculpture"])),
    field(PETS, "Pets", FieldKind::Single(&["Dog", "Cat", "Bird", "None"])),
    field(
        HABITS,
        "General habits",
        FieldKind::Multi(&["Early bird", "Night owl", "Fitness", "Meditation", "Journaling"]),
    ),
    field(
        ACTIVITIES,
        "Outdoor activities",
        FieldKind::Multi(&["Hiking", "Camping", "Cycling", "Fishing", "Gardening"]),
    ),
    field(MOVIES, "Movies", FieldKind::Multi(&["Action", "Comedy", "Drama", "Horror", "Romance", "Sci-fi"])),
    field(TRAVEL, "Travel", FieldKind::Multi(&["Beaches", "Mountains", "Cities", "Road trips", "Backpacking"])),
];

const PREFERENCES: &[FieldSpec] = &[
    field(INTERESTS, "Your interests in", FieldKind::Single(&["Men", "Women", "All"])),
    field(PREFER_AGE, "Preferred age", FieldKind::Single(AGE_RANGES)),
    field(LOCATION, "Location", FieldKind::Text),
    field(PREFERRED_LOCATION, "Preferred location", FieldKind::Text),
    field(INTRO, "Introduce yourself", FieldKind::LongText),
];

const ACCOUNT_STEPS: &[StepDefinition] = &[
    StepDefinition { title: "About you", fields: ABOUT_YOU },
    StepDefinition { title: "Who you are", fields: IDENTITY },
    StepDefinition { title: "Lifestyle & interests", fields: LIFESTYLE },
    StepDefinition { title: "What you are looking for", fields: PREFERENCES },
];

/// Steps of the account-creation flow, in order.
pub fn account_steps() -> &'static [StepDefinition] {
    ACCOUNT_STEPS
}

/// Draft cache key for a step, `form1` for the first step.
pub fn draft_key(index: usize) -> String {
    format!("form{}", index + 1)
}

/// Bounds of a preferred-age option; `above 30` maps to 30..=60.
pub fn age_bounds(range: &str) -> Option<(u64, u64)> {
    if range.trim() == "above 30" {
        return Some((30, 60));
    }
    let (lo, hi) = range.split_once('-')?;
    let lo: u64 = lo.trim().parse().ok()?;
    let hi: u64 = hi.trim().parse().ok()?;
    (lo <= hi).then_some((lo, hi))
}
