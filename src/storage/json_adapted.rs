//! On-disk shapes of the account list
//!
//! Each adapter mirrors one model type using plain strings and numbers.
//! Converting back into the model runs every value through its validating
//! constructor, so a hand-edited file can never smuggle in a negative amount
//! or an inverted repeat. The first bad entry fails the whole load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{SaveItError, SaveItResult};
use crate::models::{
    Account, AccountName, Amount, Date, Expenditure, Info, Period, Repeat, Tag, UniqueList,
    YearMonth,
};

/// Stored form of an expenditure
///
/// Older files carry an `id` field instead of a tag; it is ignored and the
/// default tag applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonAdaptedExpenditure {
    pub info: String,
    pub amount: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl JsonAdaptedExpenditure {
    pub fn to_model(&self) -> SaveItResult<Expenditure> {
        Ok(Expenditure::new(
            Info::new(&self.info)?,
            Amount::new(self.amount)?,
            Date::parse(&self.date)?,
            optional_tag(self.tag.as_deref())?,
        ))
    }
}

impl From<&Expenditure> for JsonAdaptedExpenditure {
    fn from(e: &Expenditure) -> Self {
        Self {
            info: e.info.to_string(),
            amount: e.amount.value(),
            date: e.date.to_string(),
            tag: Some(e.tag.to_string()),
        }
    }
}

/// Stored form of a repeat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonAdaptedRepeat {
    pub info: String,
    pub amount: f64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub period: String,
}

impl JsonAdaptedRepeat {
    pub fn to_model(&self) -> SaveItResult<Repeat> {
        Ok(Repeat::new(
            Info::new(&self.info)?,
            Amount::new(self.amount)?,
            Date::parse(&self.start_date)?,
            Date::parse(&self.end_date)?,
            optional_tag(self.tag.as_deref())?,
            Period::parse(&self.period)?,
        )?)
    }
}

impl From<&Repeat> for JsonAdaptedRepeat {
    fn from(r: &Repeat) -> Self {
        Self {
            info: r.info().to_string(),
            amount: r.amount().value(),
            start_date: r.start_date().to_string(),
            end_date: r.end_date().to_string(),
            tag: Some(r.tag().to_string()),
            period: r.period().to_string(),
        }
    }
}

/// Stored form of one account's contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonAdaptedAccount {
    #[serde(default)]
    pub expenditures: Vec<JsonAdaptedExpenditure>,
    #[serde(default)]
    pub repeats: Vec<JsonAdaptedRepeat>,
    #[serde(default)]
    pub budgets: BTreeMap<String, f64>,
}

impl JsonAdaptedAccount {
    pub fn to_model(&self, name: &str) -> SaveItResult<Account> {
        let context = |what: String, err: SaveItError| {
            SaveItError::DataIntegrity(format!("account '{}', {}: {}", name, what, err))
        };

        let account_name = AccountName::new(name)
            .map_err(|e| SaveItError::DataIntegrity(format!("account '{}': {}", name, e)))?;

        let expenditures = self
            .expenditures
            .iter()
            .enumerate()
            .map(|(i, e)| e.to_model().map_err(|err| context(format!("expenditure {}", i + 1), err)))
            .collect::<SaveItResult<Vec<_>>>()?;
        let expenditures = UniqueList::from_items(expenditures)
            .map_err(|err| context("expenditures".into(), err))?;

        let repeats = self
            .repeats
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_model().map_err(|err| context(format!("repeat {}", i + 1), err)))
            .collect::<SaveItResult<Vec<_>>>()?;
        let repeats =
            UniqueList::from_items(repeats).map_err(|err| context("repeats".into(), err))?;

        let mut budgets = BTreeMap::new();
        for (month, amount) in &self.budgets {
            let month = YearMonth::parse(month)
                .map_err(|e| context(format!("budget '{}'", month), e.into()))?;
            let amount = Amount::new(*amount)
                .map_err(|e| context(format!("budget {}", month), e.into()))?;
            budgets.insert(month, amount);
        }

        Ok(Account::with_contents(
            account_name,
            expenditures,
            repeats,
            budgets,
        ))
    }
}

impl From<&Account> for JsonAdaptedAccount {
    fn from(account: &Account) -> Self {
        Self {
            expenditures: account.expenditures().iter().map(Into::into).collect(),
            repeats: account.repeats().iter().map(Into::into).collect(),
            budgets: account
                .budgets()
                .iter()
                .map(|(month, amount)| (month.to_string(), amount.value()))
                .collect(),
        }
    }
}

/// The whole file: account name to account contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSerializableAccountList {
    pub accounts: BTreeMap<String, JsonAdaptedAccount>,
}

impl JsonSerializableAccountList {
    pub fn to_model(&self) -> SaveItResult<Vec<Account>> {
        self.accounts
            .iter()
            .map(|(name, account)| account.to_model(name))
            .collect()
    }

    pub fn from_accounts<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.name().to_string(), a.into()))
                .collect(),
        }
    }
}

fn optional_tag(tag: Option<&str>) -> SaveItResult<Tag> {
    match tag {
        Some(t) => Ok(Tag::new(t)?),
        None => Ok(Tag::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SaveItResult<Vec<Account>> {
        let list: JsonSerializableAccountList = serde_json::from_str(json).unwrap();
        list.to_model()
    }

    #[test]
    fn test_valid_document() {
        let accounts = parse(
            r#"{
                "default": {
                    "expenditures": [
                        {"info": "Lunch", "amount": 12.5, "date": "2020-03-22", "tag": "Food"}
                    ],
                    "repeats": [
                        {"info": "Gym", "amount": 2.0, "start_date": "2020-03-01",
                         "end_date": "2020-03-31", "tag": "Health", "period": "weekly"}
                    ],
                    "budgets": {"2020-03": 100.0}
                },
                "school": {}
            }"#,
        )
        .unwrap();

        assert_eq!(accounts.len(), 2);
        let default = &accounts[0];
        assert_eq!(default.name().as_str(), "default");
        assert_eq!(default.expenditures().len(), 1);
        assert_eq!(default.repeats().len(), 1);
        assert_eq!(
            default.budget_for(&YearMonth::parse("2020-03").unwrap()),
            Some(Amount::new(100.0).unwrap())
        );
        assert!(accounts[1].expenditures().is_empty());
    }

    #[test]
    fn test_legacy_id_field_is_ignored() {
        let accounts = parse(
            r#"{"default": {"expenditures": [
                {"info": "Lunch", "amount": 3.0, "date": "2020-03-22", "id": "7"}
            ]}}"#,
        )
        .unwrap();
        let exp = accounts[0].expenditures().get(0).unwrap();
        assert_eq!(exp.tag, Tag::default());
    }

    #[test]
    fn test_negative_amount_fails_load() {
        let err = parse(
            r#"{"default": {"expenditures": [
                {"info": "Lunch", "amount": -3.0, "date": "2020-03-22", "tag": "Food"}
            ]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SaveItError::DataIntegrity(_)));
        assert!(err.to_string().contains("expenditure 1"));
    }

    #[test]
    fn test_bad_date_and_inverted_repeat_fail_load() {
        let bad_date = parse(
            r#"{"default": {"expenditures": [
                {"info": "Lunch", "amount": 3.0, "date": "2020-02-30", "tag": "Food"}
            ]}}"#,
        );
        assert!(matches!(bad_date, Err(SaveItError::DataIntegrity(_))));

        let inverted = parse(
            r#"{"default": {"repeats": [
                {"info": "Gym", "amount": 2.0, "start_date": "2020-03-31",
                 "end_date": "2020-03-01", "period": "daily"}
            ]}}"#,
        );
        assert!(matches!(inverted, Err(SaveItError::DataIntegrity(_))));
    }

    #[test]
    fn test_duplicate_entries_fail_load() {
        let err = parse(
            r#"{"default": {"expenditures": [
                {"info": "Lunch", "amount": 3.0, "date": "2020-03-22", "tag": "Food"},
                {"info": "Lunch", "amount": 3.0, "date": "2020-03-22", "tag": "Food"}
            ]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SaveItError::DataIntegrity(_)));
    }

    #[test]
    fn test_invalid_account_name_fails_load() {
        let err = parse(r#"{"my account": {}}"#).unwrap_err();
        assert!(matches!(err, SaveItError::DataIntegrity(_)));
    }

    #[test]
    fn test_model_to_document() {
        let mut account = Account::new(AccountName::new("default").unwrap());
        account
            .add_expenditure(Expenditure::new(
                Info::new("Lunch").unwrap(),
                Amount::new(4.0).unwrap(),
                Date::parse("2020-03-22").unwrap(),
                Tag::new("Food").unwrap(),
            ))
            .unwrap();
        account.set_budget(YearMonth::parse("2020-03").unwrap(), Amount::new(50.0).unwrap());

        let doc = JsonSerializableAccountList::from_accounts([&account]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["default"]["expenditures"][0]["date"], "2020-03-22");
        assert_eq!(json["default"]["budgets"]["2020-03"], 50.0);
    }
}
