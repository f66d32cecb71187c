//! Trigger rules.
//!
//! A trigger rule is the security predicate that decides whether a request
//! may invoke a hook. The add flow offers three canned rules plus free-form
//! text. Anything else found in a hand-edited file is kept as an opaque
//! mapping so it survives a rewrite unchanged.
//!
//! # Document forms
//!
//! ```yaml
//! # IpWhitelist
//! match:
//! - type: ip-whitelist
//!   ip-range: 192.168.1.0/24
//!
//! # Custom
//! custom: |-
//!   {"and": [...]}
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};

#[cfg(test)]
#[path = "trigger_rule_tests.rs"]
mod tests;

/// Header carrying the GitHub payload signature.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Header carrying the GitLab secret token.
pub const GITLAB_TOKEN_HEADER: &str = "X-Gitlab-Token";

/// Placeholder IP range written for new allow-list rules.
pub const DEFAULT_IP_RANGE: &str = "192.168.1.0/24";

/// Placeholder secret written for new GitHub signature rules.
pub const PLACEHOLDER_SECRET: &str = "your-secret-here";

/// Placeholder token written for new GitLab token rules.
pub const PLACEHOLDER_TOKEN: &str = "your-token-here";

/// A hook's trigger rule.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerRule {
    /// Only requests from the given IP range are accepted.
    IpWhitelist { ip_range: String },

    /// The payload must carry a valid SHA-1 HMAC in `X-Hub-Signature`.
    GithubSignature { secret: String },

    /// The `X-Gitlab-Token` header must equal the token.
    GitlabToken { token: String },

    /// Free-form rule text, stored verbatim under a `custom` key.
    Custom { text: String },

    /// Any other mapping, kept as found.
    Opaque(Mapping),
}

impl TriggerRule {
    /// Short name of the rule kind for display.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TriggerRule::IpWhitelist { .. } => TriggerRuleTemplate::IpWhitelist.token(),
            TriggerRule::GithubSignature { .. } => TriggerRuleTemplate::GithubSignature.token(),
            TriggerRule::GitlabToken { .. } => TriggerRuleTemplate::GitlabToken.token(),
            TriggerRule::Custom { .. } => TriggerRuleTemplate::Custom.token(),
            TriggerRule::Opaque(_) => "hand-written",
        }
    }

    /// Converts the rule to its document form.
    pub fn to_value(&self) -> Value {
        let mut root = Mapping::new();
        match self {
            TriggerRule::IpWhitelist { ip_range } => {
                let mut rule = Mapping::new();
                rule.insert("type".into(), "ip-whitelist".into());
                rule.insert("ip-range".into(), ip_range.as_str().into());
                root.insert("match".into(), single_match(rule));
            }
            TriggerRule::GithubSignature { secret } => {
                let mut rule = Mapping::new();
                rule.insert("type".into(), "payload-hash-sha1".into());
                rule.insert("secret".into(), secret.as_str().into());
                rule.insert("parameter".into(), header_parameter(GITHUB_SIGNATURE_HEADER));
                root.insert("match".into(), single_match(rule));
            }
            TriggerRule::GitlabToken { token } => {
                let mut rule = Mapping::new();
                rule.insert("type".into(), "value".into());
                rule.insert("value".into(), token.as_str().into());
                rule.insert("parameter".into(), header_parameter(GITLAB_TOKEN_HEADER));
                root.insert("match".into(), single_match(rule));
            }
            TriggerRule::Custom { text } => {
                root.insert("custom".into(), text.as_str().into());
            }
            TriggerRule::Opaque(mapping) => return Value::Mapping(mapping.clone()),
        }
        Value::Mapping(root)
    }

    /// Builds a rule from a document mapping.
    ///
    /// Canned variants are recognised only on an exact match of keys and
    /// fixed values; everything else becomes [`TriggerRule::Opaque`].
    pub fn from_mapping(mapping: Mapping) -> Self {
        recognise(&mapping).unwrap_or(TriggerRule::Opaque(mapping))
    }

    /// Deserializes an optional `trigger-rule` field.
    ///
    /// A missing key, `null`, and `{}` all mean "no rule". Non-mapping
    /// values are rejected.
    pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Mapping(mapping)) if mapping.is_empty() => Ok(None),
            Some(Value::Mapping(mapping)) => Ok(Some(Self::from_mapping(mapping))),
            Some(other) => Err(D::Error::custom(format!(
                "trigger-rule must be a mapping, found {}",
                value_kind(&other)
            ))),
        }
    }
}

impl Serialize for TriggerRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TriggerRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Mapping(mapping) => Ok(Self::from_mapping(mapping)),
            other => Err(D::Error::custom(format!(
                "trigger-rule must be a mapping, found {}",
                value_kind(&other)
            ))),
        }
    }
}

/// The rule templates offered by the add flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerRuleTemplate {
    IpWhitelist,
    GithubSignature,
    GitlabToken,
    Custom,
}

impl TriggerRuleTemplate {
    /// All templates, in menu order.
    pub const ALL: [TriggerRuleTemplate; 4] = [
        TriggerRuleTemplate::IpWhitelist,
        TriggerRuleTemplate::GithubSignature,
        TriggerRuleTemplate::GitlabToken,
        TriggerRuleTemplate::Custom,
    ];

    pub fn token(self) -> &'static str {
        match self {
            TriggerRuleTemplate::IpWhitelist => "ip-whitelist",
            TriggerRuleTemplate::GithubSignature => "github-signature",
            TriggerRuleTemplate::GitlabToken => "gitlab-token",
            TriggerRuleTemplate::Custom => "custom",
        }
    }

    /// Menu label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            TriggerRuleTemplate::IpWhitelist => "ip-whitelist - IP allow-list",
            TriggerRuleTemplate::GithubSignature => "github-signature - GitHub payload signature",
            TriggerRuleTemplate::GitlabToken => "gitlab-token - GitLab secret token",
            TriggerRuleTemplate::Custom => "custom - free-form rule (advanced)",
        }
    }

    /// The canned rule for this template, with placeholder values the user
    /// is expected to edit. `None` for [`TriggerRuleTemplate::Custom`],
    /// which needs text from the user.
    pub fn canned_rule(self) -> Option<TriggerRule> {
        match self {
            TriggerRuleTemplate::IpWhitelist => Some(TriggerRule::IpWhitelist {
                ip_range: DEFAULT_IP_RANGE.to_string(),
            }),
            TriggerRuleTemplate::GithubSignature => Some(TriggerRule::GithubSignature {
                secret: PLACEHOLDER_SECRET.to_string(),
            }),
            TriggerRuleTemplate::GitlabToken => Some(TriggerRule::GitlabToken {
                token: PLACEHOLDER_TOKEN.to_string(),
            }),
            TriggerRuleTemplate::Custom => None,
        }
    }
}

fn single_match(rule: Mapping) -> Value {
    Value::Sequence(vec![Value::Mapping(rule)])
}

fn header_parameter(header: &str) -> Value {
    let mut parameter = Mapping::new();
    parameter.insert("source".into(), "header".into());
    parameter.insert("name".into(), header.into());
    Value::Mapping(parameter)
}

fn recognise(mapping: &Mapping) -> Option<TriggerRule> {
    if mapping.len() != 1 {
        return None;
    }

    if let Some(Value::String(text)) = mapping.get("custom") {
        return Some(TriggerRule::Custom { text: text.clone() });
    }

    let Value::Sequence(matches) = mapping.get("match")? else {
        return None;
    };
    let [Value::Mapping(rule)] = matches.as_slice() else {
        return None;
    };

    match str_field(rule, "type")? {
        "ip-whitelist" if rule.len() == 2 => Some(TriggerRule::IpWhitelist {
            ip_range: str_field(rule, "ip-range")?.to_string(),
        }),
        "payload-hash-sha1"
            if rule.len() == 3 && is_header_parameter(rule, GITHUB_SIGNATURE_HEADER) =>
        {
            Some(TriggerRule::GithubSignature {
                secret: str_field(rule, "secret")?.to_string(),
            })
        }
        "value" if rule.len() == 3 && is_header_parameter(rule, GITLAB_TOKEN_HEADER) => {
            Some(TriggerRule::GitlabToken {
                token: str_field(rule, "value")?.to_string(),
            })
        }
        _ => None,
    }
}

fn str_field<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a str> {
    match mapping.get(key)? {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

fn is_header_parameter(rule: &Mapping, header: &str) -> bool {
    match rule.get("parameter") {
        Some(Value::Mapping(parameter)) => {
            parameter.len() == 2
                && str_field(parameter, "source") == Some("header")
                && str_field(parameter, "name") == Some(header)
        }
        _ => false,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
