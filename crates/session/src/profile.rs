//! Profile page form.
//!
//! Every field is optional. Values are stored into the session's
//! `user_info` under the keys in [`keys`] when the user moves on.

use crate::state::UserInfo;

pub mod keys {
    pub const EMAIL: &str = "email";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const DOB_DAY: &str = "dob_day";
    pub const DOB_MONTH: &str = "dob_month";
    pub const DOB_YEAR: &str = "dob_year";
    pub const GENDER: &str = "gender";
    pub const PHONE_CODE: &str = "phone_code";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const COUNTRY: &str = "country";
}

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const GENDERS: [&str; 4] = ["Male", "Female", "Non-binary", "Prefer not to say"];

pub const COUNTRY_CODES: [&str; 8] = [
    "+1 (US)", "+44 (UK)", "+91 (IN)", "+61 (AU)", "+81 (JP)", "+86 (CN)", "+33 (FR)", "+49 (DE)",
];

pub const COUNTRIES: [&str; 11] = [
    "United States", "United Kingdom", "Canada", "Australia", "Germany", "France", "Japan",
    "India", "Brazil", "Mexico", "Other",
];

/// Birth years offered run from 100 years before this to 10 years before it
const REFERENCE_YEAR: u16 = 2024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub dob_day: Option<u8>,
    pub dob_month: Option<String>,
    pub dob_year: Option<u16>,
    pub gender: Option<String>,
    pub phone_code: Option<String>,
    pub phone_number: String,
    pub city: String,
    pub state: String,
    pub country: Option<String>,
}

impl ProfileForm {
    /// Pre-fill from what the session already knows
    pub fn from_user_info(info: &UserInfo) -> Self {
        let text = |key: &str| info.get(key).cloned().unwrap_or_default();
        let choice = |key: &str| info.get(key).filter(|v| !v.is_empty()).cloned();

        Self {
            first_name: text(keys::FIRST_NAME),
            last_name: text(keys::LAST_NAME),
            dob_day: choice(keys::DOB_DAY).and_then(|v| v.parse().ok()),
            dob_month: choice(keys::DOB_MONTH),
            dob_year: choice(keys::DOB_YEAR).and_then(|v| v.parse().ok()),
            gender: choice(keys::GENDER),
            phone_code: choice(keys::PHONE_CODE),
            phone_number: text(keys::PHONE_NUMBER),
            city: text(keys::CITY),
            state: text(keys::STATE),
            country: choice(keys::COUNTRY),
        }
    }

    /// Range of birth years the form accepts
    pub fn birth_years() -> std::ops::Range<u16> {
        (REFERENCE_YEAR - 100)..(REFERENCE_YEAR - 10)
    }

    /// First out-of-list selection, if any
    pub fn violation(&self) -> Option<String> {
        if let Some(day) = self.dob_day.filter(|d| !(1..=31).contains(d)) {
            return Some(format!("Day must be between 1 and 31, got {day}."));
        }
        if let Some(year) = self.dob_year.filter(|y| !Self::birth_years().contains(y)) {
            return Some(format!("Year {year} is outside the accepted range."));
        }
        let checks: [(&Option<String>, &[&str], &str); 4] = [
            (&self.dob_month, &MONTHS, "month"),
            (&self.gender, &GENDERS, "gender"),
            (&self.phone_code, &COUNTRY_CODES, "phone code"),
            (&self.country, &COUNTRIES, "country"),
        ];
        checks.into_iter().find_map(|(value, options, label)| {
            value
                .as_deref()
                .filter(|v| !options.contains(v))
                .map(|v| format!("Unknown {label}: {v}."))
        })
    }

    /// Store every field, overwriting earlier answers
    pub fn apply_to(&self, info: &mut UserInfo) {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        let entries = [
            (keys::FIRST_NAME, self.first_name.clone()),
            (keys::LAST_NAME, self.last_name.clone()),
            (keys::DOB_DAY, self.dob_day.map(|d| d.to_string()).unwrap_or_default()),
            (keys::DOB_MONTH, opt(&self.dob_month)),
            (keys::DOB_YEAR, self.dob_year.map(|y| y.to_string()).unwrap_or_default()),
            (keys::GENDER, opt(&self.gender)),
            (keys::PHONE_CODE, opt(&self.phone_code)),
            (keys::PHONE_NUMBER, self.phone_number.clone()),
            (keys::CITY, self.city.clone()),
            (keys::STATE, self.state.clone()),
            (keys::COUNTRY, opt(&self.country)),
        ];
        for (key, value) in entries {
            info.insert(key.to_string(), value);
        }
    }
}
