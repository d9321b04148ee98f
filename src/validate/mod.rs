use std::collections::HashSet;

/// Outcome of checking a workbook header against a profile's required
/// columns. Missing columns are a reported result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { missing: Vec<String> },
}

/// Report which of `required` are absent from `headers`, preserving
/// `required`'s order. Valid iff every required name is present.
pub fn validate(headers: &[String], required: &[&str]) -> Validation {
    let have: HashSet<&str> = headers.iter().map(String::as_str).collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !have.contains(**name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid { missing }
    }
}

/// One form variant: a name and the columns its workbook must carry.
/// Both variants share the flow; only the list differs.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub required_columns: &'static [&'static str],
}

impl Profile {
    pub fn by_name(name: &str) -> Option<&'static Profile> {
        PROFILES.iter().find(|p| p.name == name)
    }
}

/// Year-round BAES enrollment form: identity columns plus one
/// Estado/Pago pair per benefit month, March through December.
static BAES_ANUAL_COLUMNS: &[&str] = &[
    "RUTc",
    "DV",
    "SEDE",
    "VIGENCIA",
    "NOMBRES",
    "Estado-mar",
    "Pago-mar",
    "Estado-abr",
    "Pago-abr",
    "Estado-may",
    "Pago-may",
    "Estado-jun",
    "Pago-jun",
    "Estado-jul",
    "Pago-jul",
    "Estado-ago",
    "Pago-ago",
    "Estado-sep",
    "Pago-sep",
    "Estado-oct",
    "Pago-oct",
    "Estado-nov",
    "Pago-nov",
    "Estado-dic",
    "Pago-dic",
];

/// First-semester variant of the same form, March through July.
static BAES_SEMESTRAL_COLUMNS: &[&str] = &[
    "RUTc",
    "DV",
    "SEDE",
    "VIGENCIA",
    "NOMBRES",
    "Estado-mar",
    "Pago-mar",
    "Estado-abr",
    "Pago-abr",
    "Estado-may",
    "Pago-may",
    "Estado-jun",
    "Pago-jun",
    "Estado-jul",
    "Pago-jul",
];

pub static PROFILES: &[Profile] = &[
    Profile {
        name: "baes",
        required_columns: BAES_ANUAL_COLUMNS,
    },
    Profile {
        name: "baes-semestral",
        required_columns: BAES_SEMESTRAL_COLUMNS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn valid_when_required_is_subset() {
        let h = headers(&["RUTc", "DV", "SEDE", "extra"]);
        assert_eq!(validate(&h, &["RUTc", "SEDE"]), Validation::Valid);
    }

    #[test]
    fn missing_preserves_required_order() {
        let h = headers(&["DV"]);
        let result = validate(&h, &["RUTc", "DV", "SEDE", "VIGENCIA"]);
        assert_eq!(
            result,
            Validation::Invalid {
                missing: vec![
                    "RUTc".to_string(),
                    "SEDE".to_string(),
                    "VIGENCIA".to_string()
                ]
            }
        );
    }

    #[test]
    fn empty_header_reports_everything_missing() {
        let result = validate(&[], &["RUTc", "DV"]);
        assert_eq!(
            result,
            Validation::Invalid {
                missing: vec!["RUTc".to_string(), "DV".to_string()]
            }
        );
    }

    #[test]
    fn duplicate_required_names_are_reported_per_occurrence() {
        let result = validate(&[], &["SEDE", "SEDE"]);
        assert_eq!(
            result,
            Validation::Invalid {
                missing: vec!["SEDE".to_string(), "SEDE".to_string()]
            }
        );
    }

    #[test]
    fn header_order_does_not_matter() {
        let h = headers(&["SEDE", "RUTc"]);
        assert_eq!(validate(&h, &["RUTc", "SEDE"]), Validation::Valid);
    }

    #[test]
    fn profiles_resolve_by_name() {
        assert_eq!(Profile::by_name("baes").unwrap().required_columns.len(), 25);
        assert_eq!(
            Profile::by_name("baes-semestral")
                .unwrap()
                .required_columns
                .len(),
            15
        );
        assert!(Profile::by_name("tne").is_none());
    }

    #[test]
    fn both_profiles_carry_the_naming_column() {
        for profile in PROFILES {
            assert!(profile.required_columns.contains(&"SEDE"), "{}", profile.name);
        }
    }
}
