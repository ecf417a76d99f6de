use crate::config::Configuration;
use crate::entity::{Entity, Value};
use crate::error::{GraphError, Result};

/// 实体名: "{TypeName}_{identity}"
///
/// 未经 slugify；类型名参与其中，不同类型的同值身份不会混淆。
pub fn entity_name(config: &Configuration, entity: &dyn Entity) -> Result<String> {
    let type_name = entity.type_name();
    let attr = config.id_attr(type_name)?;

    let value = entity
        .attribute(attr)
        .ok_or_else(|| GraphError::MissingAttribute {
            type_name: type_name.to_string(),
            attr: attr.to_string(),
        })?;

    let identity = match &value {
        Value::Str(s) => s.clone(),
        Value::Seq(_) => value
            .as_string_seq()
            .map(|parts| parts.join("_"))
            .ok_or_else(|| invalid(type_name, attr))?,
        Value::Opaque => return Err(invalid(type_name, attr)),
    };

    Ok(format!("{}_{}", type_name, identity))
}

fn invalid(type_name: &str, attr: &str) -> GraphError {
    GraphError::InvalidIdentity {
        type_name: type_name.to_string(),
        attr: attr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ChildRef;

    struct Account {
        region: &'static str,
        number: &'static str,
    }

    impl Entity for Account {
        fn type_name(&self) -> &str {
            "Account"
        }

        fn attributes(&self) -> Vec<(String, Value)> {
            vec![
                ("region".to_string(), Value::str(self.region)),
                ("number".to_string(), Value::str(self.number)),
                ("balance".to_string(), Value::Opaque),
            ]
        }

        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "key" => Some(Value::strs([self.region, self.number])),
                "label" => Some(Value::str(format!("{}-{}", self.region, self.number))),
                _ => self.attributes().into_iter().find(|(k, _)| k == name).map(|(_, v)| v),
            }
        }

        fn child_refs(&self, _name: &str) -> Option<ChildRef<'_>> {
            None
        }
    }

    fn account() -> Account {
        Account { region: "eu", number: "42" }
    }

    #[test]
    fn test_plain_field() {
        let config = Configuration::new().with_id_attr("Account", "number");
        assert_eq!(entity_name(&config, &account()).unwrap(), "Account_42");
    }

    #[test]
    fn test_accessor() {
        let config = Configuration::new().with_id_attr("Account", "label");
        assert_eq!(entity_name(&config, &account()).unwrap(), "Account_eu-42");
    }

    #[test]
    fn test_tuple_joined() {
        let config = Configuration::new().with_id_attr("Account", "key");
        assert_eq!(entity_name(&config, &account()).unwrap(), "Account_eu_42");
    }

    #[test]
    fn test_unregistered_type() {
        let err = entity_name(&Configuration::new(), &account()).unwrap_err();
        assert!(matches!(err, GraphError::MissingIdAttr { .. }));
    }

    #[test]
    fn test_missing_attribute() {
        let config = Configuration::new().with_id_attr("Account", "iban");
        let err = entity_name(&config, &account()).unwrap_err();
        assert_eq!(
            err,
            GraphError::MissingAttribute {
                type_name: "Account".to_string(),
                attr: "iban".to_string(),
            }
        );
    }

    #[test]
    fn test_opaque_identity_rejected() {
        let config = Configuration::new().with_id_attr("Account", "balance");
        let err = entity_name(&config, &account()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidIdentity { .. }));
        assert!(err.is_configuration());
    }
}
