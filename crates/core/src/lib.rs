#![forbid(unsafe_code)]

pub mod partition;
pub mod seed;

pub mod ids {
    use std::fmt;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct RollNo(i64);

    impl RollNo {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn get(self) -> i64 {
            self.0
        }

        pub fn parse(value: &str) -> Result<Self, IdParseError> {
            parse_id(value).map(Self)
        }
    }

    impl fmt::Display for RollNo {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct GroupId(i64);

    impl GroupId {
        pub fn new(value: i64) -> Self {
            Self(value)
        }

        pub fn get(self) -> i64 {
            self.0
        }

        pub fn parse(value: &str) -> Result<Self, IdParseError> {
            parse_id(value).map(Self)
        }
    }

    impl fmt::Display for GroupId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum IdParseError {
        Empty,
        NotAnInteger,
    }

    impl IdParseError {
        pub fn message(&self) -> &'static str {
            match self {
                Self::Empty => "identifier must not be empty",
                Self::NotAnInteger => "identifier must be an integer",
            }
        }
    }

    fn parse_id(value: &str) -> Result<i64, IdParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdParseError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| IdParseError::NotAnInteger)
    }
}

pub mod model {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub enum Status {
        #[default]
        Active,
        Blacklisted,
    }

    impl Status {
        pub fn as_str(self) -> &'static str {
            match self {
                Status::Active => "active",
                Status::Blacklisted => "blacklisted",
            }
        }

        pub fn parse(value: &str) -> Option<Self> {
            match value.trim() {
                "active" => Some(Self::Active),
                "blacklisted" => Some(Self::Blacklisted),
                _ => None,
            }
        }
    }

    pub const SGPA_MIN: f64 = 0.0;
    pub const SGPA_MAX: f64 = 10.0;

    /// Score validated against the inclusive `[0, 10]` range at construction.
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct Sgpa(f64);

    impl Sgpa {
        pub fn try_new(value: f64) -> Result<Self, SgpaError> {
            if value.is_nan() {
                return Err(SgpaError::NotANumber);
            }
            if !(SGPA_MIN..=SGPA_MAX).contains(&value) {
                return Err(SgpaError::OutOfRange);
            }
            Ok(Self(value))
        }

        pub fn parse(value: &str) -> Result<Self, SgpaError> {
            let parsed = value
                .trim()
                .parse::<f64>()
                .map_err(|_| SgpaError::NotANumber)?;
            Self::try_new(parsed)
        }

        pub fn get(self) -> f64 {
            self.0
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum SgpaError {
        NotANumber,
        OutOfRange,
    }

    impl SgpaError {
        pub fn message(&self) -> &'static str {
            match self {
                Self::NotANumber => "Invalid SGPA! Please enter a number.",
                Self::OutOfRange => "SGPA must be between 0 and 10.",
            }
        }
    }

    pub const NAME_MAX_CHARS: usize = 128;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PersonName(String);

    impl PersonName {
        pub fn try_new(value: impl Into<String>) -> Result<Self, PersonNameError> {
            let value = value.into();
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(PersonNameError::Empty);
            }
            if trimmed.chars().count() > NAME_MAX_CHARS {
                return Err(PersonNameError::TooLong);
            }
            if trimmed.chars().any(|c| c.is_control()) {
                return Err(PersonNameError::ContainsControl);
            }
            Ok(Self(trimmed.to_string()))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum PersonNameError {
        Empty,
        TooLong,
        ContainsControl,
    }

    impl PersonNameError {
        pub fn message(&self) -> &'static str {
            match self {
                Self::Empty => "name must not be empty",
                Self::TooLong => "name is too long",
                Self::ContainsControl => "name contains control characters",
            }
        }
    }

}
