use serde::Deserialize;

/// One vacancy exactly as the API returns it. Every field is optional:
/// the upstream payload carries several dozen keys, most of them nullable,
/// and only the ones below survive normalization. Unknown keys are dropped
/// by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVacancy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<RawSalary>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub apply_alternate_url: Option<String>,
    #[serde(default)]
    pub snippet: Option<RawSnippet>,
}

/// Nested salary block. `from`/`to` are nullable independently of the
/// block itself being null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSalary {
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnippet {
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default)]
    pub responsibility: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_real_payload_shape() {
        // Trimmed-down item from an actual search response; extra keys
        // and independently-null sub-fields must not break decoding.
        let payload = r#"{
            "id": "93353083",
            "premium": false,
            "name": "Quality engineer",
            "department": null,
            "salary": {"from": 350000, "to": null, "currency": "RUR", "gross": false},
            "published_at": "2024-02-16T14:58:28+0300",
            "archived": false,
            "apply_alternate_url": "https://hh.ru/applicant/vacancy_response?vacancyId=93353083",
            "snippet": {"requirement": "Attention to detail", "responsibility": null},
            "employer": {"id": "1122462", "name": "Skyeng"}
        }"#;

        let raw: RawVacancy = serde_json::from_str(payload).unwrap();
        assert_eq!(raw.id.as_deref(), Some("93353083"));
        let salary = raw.salary.unwrap();
        assert_eq!(salary.from, Some(350_000));
        assert_eq!(salary.to, None);
        let snippet = raw.snippet.unwrap();
        assert_eq!(snippet.requirement.as_deref(), Some("Attention to detail"));
        assert_eq!(snippet.responsibility, None);
    }

    #[test]
    fn null_salary_block_decodes_to_none() {
        let raw: RawVacancy =
            serde_json::from_str(r#"{"id": "1", "salary": null, "snippet": null}"#).unwrap();
        assert!(raw.salary.is_none());
        assert!(raw.snippet.is_none());
        assert!(raw.name.is_none());
    }
}
