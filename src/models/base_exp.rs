//! Mixed list entry shown for the active date

use std::fmt;

use super::amount::Amount;
use super::expenditure::Expenditure;
use super::fields::{Info, Tag};
use super::repeat::Repeat;

/// Either a one-off expenditure or a recurring template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseExp {
    Expenditure(Expenditure),
    Repeat(Repeat),
}

impl BaseExp {
    pub fn info(&self) -> &Info {
        match self {
            Self::Expenditure(e) => &e.info,
            Self::Repeat(r) => r.info(),
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Self::Expenditure(e) => e.amount,
            Self::Repeat(r) => r.amount(),
        }
    }

    pub fn tag(&self) -> &Tag {
        match self {
            Self::Expenditure(e) => &e.tag,
            Self::Repeat(r) => r.tag(),
        }
    }

    /// Short label for the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Expenditure(_) => "expenditure",
            Self::Repeat(_) => "repeat",
        }
    }

    pub fn as_expenditure(&self) -> Option<&Expenditure> {
        match self {
            Self::Expenditure(e) => Some(e),
            Self::Repeat(_) => None,
        }
    }

    pub fn as_repeat(&self) -> Option<&Repeat> {
        match self {
            Self::Repeat(r) => Some(r),
            Self::Expenditure(_) => None,
        }
    }
}

impl From<Expenditure> for BaseExp {
    fn from(e: Expenditure) -> Self {
        Self::Expenditure(e)
    }
}

impl From<Repeat> for BaseExp {
    fn from(r: Repeat) -> Self {
        Self::Repeat(r)
    }
}

impl fmt::Display for BaseExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expenditure(e) => e.fmt(f),
            Self::Repeat(r) => r.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Date, Period};

    #[test]
    fn test_accessors_dispatch_on_variant() {
        let exp = Expenditure::new(
            Info::new("Lunch").unwrap(),
            Amount::new(5.0).unwrap(),
            Date::parse("2020-03-22").unwrap(),
            Tag::new("Food").unwrap(),
        );
        let rep = Repeat::new(
            Info::new("Bus").unwrap(),
            Amount::new(1.5).unwrap(),
            Date::parse("2020-03-01").unwrap(),
            Date::parse("2020-03-31").unwrap(),
            Tag::new("Transport").unwrap(),
            Period::Daily,
        )
        .unwrap();

        let a = BaseExp::from(exp.clone());
        let b = BaseExp::from(rep.clone());

        assert_eq!(a.info().as_str(), "Lunch");
        assert_eq!(b.tag().as_str(), "Transport");
        assert_eq!(b.amount(), Amount::new(1.5).unwrap());
        assert_eq!(a.as_expenditure(), Some(&exp));
        assert!(a.as_repeat().is_none());
        assert_eq!(b.as_repeat(), Some(&rep));
        assert_eq!(b.kind(), "repeat");
    }
}
