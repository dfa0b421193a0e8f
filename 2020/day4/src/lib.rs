use std::{collections::HashMap, error, fmt::Display, path::Path};

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    RepeatedPropInPassport(String), // Name of repeated property.
    InvalidPropText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::RepeatedPropInPassport(name) => {
                write!(f, "Found repeated property({}) in passport text.", name)
            }
            Error::InvalidPropText(s) => write!(
                f,
                "Invalid property text({}) in passport, expect \"name:value\".",
                s
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Input(e) => error::Error::source(e),
            _ => None,
        }
    }
}

impl From<aoc_common::Error> for Error {
    fn from(value: aoc_common::Error) -> Self {
        Error::Input(value)
    }
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    #[command(flatten)]
    pub input: aoc_common::InputArgs,
}

pub const REQUIRED_PROP_NAMES: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

#[derive(Debug, Default)]
pub struct Passport {
    props: HashMap<String, String>,
}

impl Passport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_prop(&self, p_name: &str) -> bool {
        self.props.contains_key(p_name)
    }

    pub fn prop(&self, p_name: &str) -> Option<&str> {
        self.props.get(p_name).map(|s| s.as_str())
    }

    pub fn has_required_props(&self) -> bool {
        REQUIRED_PROP_NAMES
            .iter()
            .all(|p_name| self.contains_prop(p_name))
    }

    pub fn is_valid(&self, validators: &[&dyn PropValidator]) -> bool {
        validators
            .iter()
            .all(|vad| self.prop(vad.name()).is_some_and(|s| vad.validate(s)))
    }

    fn add_props(&mut self, text: &str) -> Result<(), Error> {
        static PROP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+):(\S+)$").unwrap());

        for field in text.split_whitespace() {
            let caps = PROP_PATTERN
                .captures(field)
                .ok_or_else(|| Error::InvalidPropText(field.to_string()))?;
            if self.contains_prop(&caps[1]) {
                return Err(Error::RepeatedPropInPassport(caps[1].to_string()));
            }

            self.props.insert(caps[1].to_string(), caps[2].to_string());
        }

        Ok(())
    }
}

pub trait PropValidator {
    fn name(&self) -> &'static str;
    fn validate(&self, value: &str) -> bool;
}

fn year_in(value: &str, low: u32, high: u32) -> bool {
    value.len() == 4
        && value
            .parse::<u32>()
            .is_ok_and(|year| (low..=high).contains(&year))
}

pub struct BirthYearVad;

impl PropValidator for BirthYearVad {
    fn name(&self) -> &'static str {
        "byr"
    }

    fn validate(&self, value: &str) -> bool {
        year_in(value, 1920, 2002)
    }
}

pub struct IssueYearVad;

impl PropValidator for IssueYearVad {
    fn name(&self) -> &'static str {
        "iyr"
    }

    fn validate(&self, value: &str) -> bool {
        year_in(value, 2010, 2020)
    }
}

pub struct ExpirYearVad;

impl PropValidator for ExpirYearVad {
    fn name(&self) -> &'static str {
        "eyr"
    }

    fn validate(&self, value: &str) -> bool {
        year_in(value, 2020, 2030)
    }
}

pub struct HeightVad;

impl PropValidator for HeightVad {
    fn name(&self) -> &'static str {
        "hgt"
    }

    fn validate(&self, value: &str) -> bool {
        static HEIGHT_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)(cm|in)$").unwrap());

        HEIGHT_PATTERN.captures(value).is_some_and(|caps| {
            let range = if &caps[2] == "cm" { 150..=193 } else { 59..=76 };
            caps[1].parse::<u32>().is_ok_and(|h| range.contains(&h))
        })
    }
}

pub struct HairColorVad;

impl PropValidator for HairColorVad {
    fn name(&self) -> &'static str {
        "hcl"
    }

    fn validate(&self, value: &str) -> bool {
        static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-f]{6}$").unwrap());
        COLOR_PATTERN.is_match(value)
    }
}

pub struct EyeColorVad;

impl PropValidator for EyeColorVad {
    fn name(&self) -> &'static str {
        "ecl"
    }

    fn validate(&self, value: &str) -> bool {
        matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth")
    }
}

pub struct PassportIDVad;

impl PropValidator for PassportIDVad {
    fn name(&self) -> &'static str {
        "pid"
    }

    fn validate(&self, value: &str) -> bool {
        static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
        ID_PATTERN.is_match(value)
    }
}

pub const PROP_VALIDATORS: [&dyn PropValidator; 7] = [
    &BirthYearVad,
    &IssueYearVad,
    &ExpirYearVad,
    &HeightVad,
    &HairColorVad,
    &EyeColorVad,
    &PassportIDVad,
];

pub fn parse_pp<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Passport>, Error> {
    aoc_common::split_groups(lines)
        .into_iter()
        .map(|group| {
            let mut pp = Passport::new();
            for line in group {
                pp.add_props(line)?;
            }

            Ok(pp)
        })
        .collect()
}

pub fn read_pp<P: AsRef<Path>>(path: P) -> Result<Vec<Passport>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_pp(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 13] = [
        "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd",
        "byr:1937 iyr:2017 cid:147 hgt:183cm",
        "",
        "iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884",
        "hcl:#cfa07d byr:1929",
        "",
        "hcl:#ae17e1 iyr:2013",
        "eyr:2024",
        "ecl:brn pid:760753108 byr:1931",
        "hgt:179cm",
        "",
        "hcl:#cfa07d eyr:2025 pid:166559648",
        "iyr:2011 ecl:brn hgt:59in",
    ];

    #[test]
    fn required_props_present() {
        let passports = parse_pp(&SAMPLE).unwrap();
        assert_eq!(passports.len(), 4);
        let valid = passports.iter().filter(|pp| pp.has_required_props()).count();
        assert_eq!(valid, 2);
    }

    #[test]
    fn field_validators() {
        assert!(BirthYearVad.validate("2002"));
        assert!(!BirthYearVad.validate("2003"));
        assert!(!BirthYearVad.validate("01990"));
        assert!(!IssueYearVad.validate("+2015"));
        assert!(HeightVad.validate("60in"));
        assert!(HeightVad.validate("190cm"));
        assert!(!HeightVad.validate("190in"));
        assert!(!HeightVad.validate("190"));
        assert!(HairColorVad.validate("#123abc"));
        assert!(!HairColorVad.validate("#123abz"));
        assert!(!HairColorVad.validate("123abc"));
        assert!(EyeColorVad.validate("brn"));
        assert!(!EyeColorVad.validate("wat"));
        assert!(PassportIDVad.validate("000000001"));
        assert!(!PassportIDVad.validate("0123456789"));
    }

    #[test]
    fn repeated_prop_is_rejected() {
        assert!(matches!(
            parse_pp(&["byr:1937 byr:1938"]),
            Err(Error::RepeatedPropInPassport(name)) if name == "byr"
        ));
    }

    #[test]
    fn strict_validation() {
        let passports = parse_pp(&[
            "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980",
            "hcl:#623a2f",
            "",
            "eyr:1972 cid:100",
            "hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926",
        ])
        .unwrap();
        let valid = passports
            .iter()
            .map(|pp| pp.is_valid(&PROP_VALIDATORS))
            .collect::<Vec<_>>();
        assert_eq!(valid, vec![true, false]);
    }
}
