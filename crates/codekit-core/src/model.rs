use serde::{Deserialize, Serialize};

///
/// CodeNameModel
///
/// Pairs a stable machine-facing `code` with a human-readable `name`.
/// Both fields always hold a value; the empty string is the unset sentinel.
///
/// Field declaration order is a wire contract: `code` and `name` serialize
/// before any field a wrapping type may add.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CodeNameModel {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,
}

impl CodeNameModel {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

///
/// CodeNameDescriptionModel
///
/// `CodeNameModel` widened with a human-readable `description`.
/// `description` serializes after `code` and `name`, before anything else.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CodeNameDescriptionModel {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

impl CodeNameDescriptionModel {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<CodeNameModel> for CodeNameDescriptionModel {
    fn from(model: CodeNameModel) -> Self {
        Self {
            code: model.code,
            name: model.name,
            description: String::new(),
        }
    }
}

impl From<CodeNameDescriptionModel> for CodeNameModel {
    fn from(model: CodeNameDescriptionModel) -> Self {
        Self {
            code: model.code,
            name: model.name,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_not_absent() {
        let model = CodeNameModel::default();
        assert_eq!(model.code, "");
        assert_eq!(model.name, "");

        let model = CodeNameDescriptionModel::default();
        assert_eq!(model.description, "");
    }

    #[test]
    fn code_and_name_serialize_first() {
        let model = CodeNameModel::new("EUR", "Euro");
        let json = serde_json::to_string(&model).unwrap();

        assert_eq!(json, r#"{"code":"EUR","name":"Euro"}"#);
    }

    #[test]
    fn description_serializes_after_code_and_name() {
        let model = CodeNameDescriptionModel::new("EUR", "Euro", "Single currency");
        let json = serde_json::to_string(&model).unwrap();

        assert_eq!(
            json,
            r#"{"code":"EUR","name":"Euro","description":"Single currency"}"#
        );
    }

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let model: CodeNameDescriptionModel = serde_json::from_str(r#"{"code":"EUR"}"#).unwrap();

        assert_eq!(model.code, "EUR");
        assert_eq!(model.name, "");
        assert_eq!(model.description, "");
    }

    #[test]
    fn widening_and_narrowing_conversions() {
        let base = CodeNameModel::new("EUR", "Euro");
        let wide = CodeNameDescriptionModel::from(base.clone());

        assert_eq!(wide.code, "EUR");
        assert_eq!(wide.description, "");
        assert_eq!(CodeNameModel::from(wide), base);
    }
}
