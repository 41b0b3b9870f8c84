use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::raw::RawVacancy;

/// Placeholder substituted when the API reports no application URL.
pub const UNKNOWN_URL: &str = "unknown";

/// The normalized vacancy record. All ten fields are always present after
/// normalization; nullable source data is carried as `Option` rather than
/// the assorted numeric placeholders the upstream API sometimes implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    pub salary_from: u32,
    pub salary_to: u32,
    pub currency: Option<String>,
    pub published_at: String,
    pub archived: bool,
    pub url: String,
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

/// Result of comparing two vacancies by salary. This is a partial order:
/// records with different currencies, or with `salary_from`/`salary_to`
/// disagreeing in direction, are `Incomparable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryOrder {
    Less,
    Greater,
    Equal,
    Incomparable,
}

/// Compare two vacancies on their salary fields, gated by currency match.
///
/// `Equal` requires both bounds equal, `Less`/`Greater` require BOTH
/// bounds strictly on the same side. Everything else is `Incomparable`,
/// which a stable sort leaves in encounter order. Deliberately not an
/// `Ord`/`PartialOrd` impl: callers must handle the incomparable case.
pub fn compare_salary(a: &Vacancy, b: &Vacancy) -> SalaryOrder {
    if a.currency != b.currency {
        return SalaryOrder::Incomparable;
    }
    if a.salary_from == b.salary_from && a.salary_to == b.salary_to {
        SalaryOrder::Equal
    } else if a.salary_from < b.salary_from && a.salary_to < b.salary_to {
        SalaryOrder::Less
    } else if a.salary_from > b.salary_from && a.salary_to > b.salary_to {
        SalaryOrder::Greater
    } else {
        SalaryOrder::Incomparable
    }
}

/// Map a raw API record onto the fixed ten-field shape.
///
/// Strict on structure: a record without `id`, `name`, `published_at` or
/// `archived` cannot be displayed or compared and is rejected with the
/// missing key named. Nullable sub-fields expand per the rules in the
/// module docs: null salary block -> 0/0/no currency, null snippet ->
/// no requirement/responsibility, null URL -> placeholder.
pub fn normalize(raw: RawVacancy) -> Result<Vacancy, AppError> {
    let id = raw.id.ok_or(AppError::MissingField("id"))?;
    let name = raw.name.ok_or(AppError::MissingField("name"))?;
    let published_at = raw
        .published_at
        .ok_or(AppError::MissingField("published_at"))?;
    let archived = raw.archived.ok_or(AppError::MissingField("archived"))?;

    let (salary_from, salary_to, currency) = match raw.salary {
        Some(salary) => (
            clamp_amount(salary.from),
            clamp_amount(salary.to),
            salary.currency,
        ),
        None => (0, 0, None),
    };

    let (requirement, responsibility) = match raw.snippet {
        Some(snippet) => (snippet.requirement, snippet.responsibility),
        None => (None, None),
    };

    Ok(Vacancy {
        id,
        name,
        salary_from,
        salary_to,
        currency,
        published_at,
        archived,
        url: raw
            .apply_alternate_url
            .unwrap_or_else(|| UNKNOWN_URL.to_string()),
        requirement,
        responsibility,
    })
}

// Salary bounds are non-negative by contract; a null or negative source
// value collapses to 0.
fn clamp_amount(value: Option<i64>) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or_default()
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID {}, NAME: {}, SALARY: {} - {} {}, URL: {}, PUBLISHED: {}",
            self.id,
            self.name,
            self.salary_from,
            self.salary_to,
            self.currency.as_deref().unwrap_or("?"),
            self.url,
            self.published_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::{RawSalary, RawSnippet};

    fn raw(salary: Option<RawSalary>) -> RawVacancy {
        RawVacancy {
            id: Some("93353083".to_string()),
            name: Some("Quality engineer".to_string()),
            salary,
            published_at: Some("2024-02-16T14:58:28+0300".to_string()),
            archived: Some(false),
            apply_alternate_url: Some("https://hh.ru/vacancy/93353083".to_string()),
            snippet: Some(RawSnippet {
                requirement: Some("Attention to detail".to_string()),
                responsibility: Some("Test things".to_string()),
            }),
        }
    }

    fn vacancy(from: u32, to: u32, currency: &str) -> Vacancy {
        Vacancy {
            id: "1".to_string(),
            name: "n".to_string(),
            salary_from: from,
            salary_to: to,
            currency: Some(currency.to_string()),
            published_at: "2024-01-01T00:00:00+0300".to_string(),
            archived: false,
            url: "u".to_string(),
            requirement: None,
            responsibility: None,
        }
    }

    #[test]
    fn normalize_copies_scalar_fields() {
        let v = normalize(raw(Some(RawSalary {
            from: Some(350_000),
            to: Some(450_000),
            currency: Some("RUR".to_string()),
        })))
        .unwrap();

        assert_eq!(v.id, "93353083");
        assert_eq!(v.name, "Quality engineer");
        assert_eq!(v.salary_from, 350_000);
        assert_eq!(v.salary_to, 450_000);
        assert_eq!(v.currency.as_deref(), Some("RUR"));
        assert_eq!(v.published_at, "2024-02-16T14:58:28+0300");
        assert!(!v.archived);
        assert_eq!(v.url, "https://hh.ru/vacancy/93353083");
        assert_eq!(v.requirement.as_deref(), Some("Attention to detail"));
        assert_eq!(v.responsibility.as_deref(), Some("Test things"));
    }

    #[test]
    fn normalize_null_salary_block() {
        let v = normalize(raw(None)).unwrap();
        assert_eq!(v.salary_from, 0);
        assert_eq!(v.salary_to, 0);
        assert_eq!(v.currency, None);
    }

    #[test]
    fn normalize_partially_null_salary() {
        let v = normalize(raw(Some(RawSalary {
            from: Some(800),
            to: None,
            currency: Some("BYR".to_string()),
        })))
        .unwrap();
        assert_eq!(v.salary_from, 800);
        assert_eq!(v.salary_to, 0);
        assert_eq!(v.currency.as_deref(), Some("BYR"));
    }

    #[test]
    fn normalize_negative_salary_clamps_to_zero() {
        let v = normalize(raw(Some(RawSalary {
            from: Some(-100),
            to: Some(200),
            currency: None,
        })))
        .unwrap();
        assert_eq!(v.salary_from, 0);
        assert_eq!(v.salary_to, 200);
    }

    #[test]
    fn normalize_null_snippet() {
        let mut input = raw(None);
        input.snippet = None;
        let v = normalize(input).unwrap();
        assert_eq!(v.requirement, None);
        assert_eq!(v.responsibility, None);
    }

    #[test]
    fn normalize_null_url_gets_placeholder() {
        let mut input = raw(None);
        input.apply_alternate_url = None;
        let v = normalize(input).unwrap();
        assert_eq!(v.url, UNKNOWN_URL);
    }

    #[test]
    fn normalize_rejects_missing_name() {
        let mut input = raw(None);
        input.name = None;
        let err = normalize(input).unwrap_err();
        assert!(matches!(err, AppError::MissingField("name")));
    }

    #[test]
    fn equal_is_symmetric() {
        let a = vacancy(100, 200, "RUR");
        let b = vacancy(100, 200, "RUR");
        assert_eq!(compare_salary(&a, &b), SalaryOrder::Equal);
        assert_eq!(compare_salary(&b, &a), SalaryOrder::Equal);
    }

    #[test]
    fn less_and_greater_are_consistent() {
        let a = vacancy(100, 200, "RUR");
        let b = vacancy(300, 400, "RUR");
        assert_eq!(compare_salary(&a, &b), SalaryOrder::Less);
        assert_eq!(compare_salary(&b, &a), SalaryOrder::Greater);
    }

    #[test]
    fn different_currencies_are_incomparable() {
        let a = vacancy(100, 200, "RUR");
        let b = vacancy(100, 200, "KZT");
        assert_eq!(compare_salary(&a, &b), SalaryOrder::Incomparable);
        assert_eq!(compare_salary(&b, &a), SalaryOrder::Incomparable);
    }

    #[test]
    fn disagreeing_bounds_are_incomparable() {
        // from is larger but to is smaller: no ordering holds
        let a = vacancy(300, 150, "RUR");
        let b = vacancy(100, 200, "RUR");
        assert_eq!(compare_salary(&a, &b), SalaryOrder::Incomparable);
        assert_eq!(compare_salary(&b, &a), SalaryOrder::Incomparable);
    }

    #[test]
    fn absent_currencies_compare_equal() {
        let mut a = vacancy(0, 0, "RUR");
        let mut b = vacancy(0, 0, "RUR");
        a.currency = None;
        b.currency = None;
        assert_eq!(compare_salary(&a, &b), SalaryOrder::Equal);
    }
}
