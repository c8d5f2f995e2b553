use crate::domain::entities::role::AnsibleRole;
use crate::domain::value_objects::scm_type::ScmType;
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

/// ManifestService関連のエラー
#[derive(Debug, Error)]
pub enum ManifestServiceError {
    #[error("Invalid YAML format: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("expected a list of roles or a mapping with a `roles` list, found {found}")]
    UnexpectedShape { found: &'static str },

    #[error("role entry #{index}: {message}")]
    InvalidEntry { index: usize, message: String },
}

/// requirementsファイルをロールのリストに変換するサービス
///
/// `name`と`src`が空でなく、`scm`が`git`のエントリだけを残す。
/// それ以外の型の不一致はエラーとして扱う。
#[derive(Debug, Clone, Default)]
pub struct ManifestService;

impl ManifestService {
    pub fn new() -> Self {
        Self
    }

    /// YAML文字列からgitロールを抽出
    pub fn parse_roles(&self, content: &str) -> Result<Vec<AnsibleRole>, ManifestServiceError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: Value = serde_yaml::from_str(content)?;
        let entries = match document {
            Value::Null => return Ok(Vec::new()),
            Value::Sequence(entries) => entries,
            Value::Mapping(mut mapping) => match mapping.remove("roles") {
                Some(Value::Sequence(entries)) => entries,
                // collections-only requirements
                Some(Value::Null) | None => return Ok(Vec::new()),
                Some(other) => {
                    return Err(ManifestServiceError::UnexpectedShape {
                        found: value_kind(&other),
                    })
                }
            },
            other => {
                return Err(ManifestServiceError::UnexpectedShape {
                    found: value_kind(&other),
                })
            }
        };

        let mut roles = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                // galaxy shorthand such as `geerlingguy.docker`
                Value::String(name) => {
                    debug!(role = %name, "skipping galaxy role");
                }
                Value::Mapping(mapping) => {
                    if let Some(role) = self.parse_entry(index, mapping)? {
                        roles.push(role);
                    }
                }
                other => {
                    return Err(ManifestServiceError::InvalidEntry {
                        index,
                        message: format!("expected a mapping, found {}", value_kind(other)),
                    })
                }
            }
        }

        Ok(roles)
    }

    fn parse_entry(
        &self,
        index: usize,
        mapping: &Mapping,
    ) -> Result<Option<AnsibleRole>, ManifestServiceError> {
        let name = string_field(index, mapping, "name")?;
        let src = string_field(index, mapping, "src")?;
        let scm = string_field(index, mapping, "scm")?;

        let (Some(name), Some(src)) = (name, src) else {
            debug!(index, "skipping entry without name or src");
            return Ok(None);
        };
        if scm.as_deref().and_then(|s| s.parse::<ScmType>().ok()) != Some(ScmType::Git) {
            debug!(role = %name, scm = ?scm, "skipping non-git role");
            return Ok(None);
        }

        let version = string_field(index, mapping, "version")?;
        Ok(Some(AnsibleRole {
            name,
            src,
            scm: ScmType::Git,
            version,
        }))
    }
}

/// Read an optional string field; empty strings count as absent
fn string_field(
    index: usize,
    mapping: &Mapping,
    field: &str,
) -> Result<Option<String>, ManifestServiceError> {
    match mapping.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ManifestServiceError::InvalidEntry {
            index,
            message: format!(
                "field `{}` must be a string, found {} (quote the value)",
                field,
                value_kind(other)
            ),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
