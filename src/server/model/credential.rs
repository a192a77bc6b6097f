/// Per-clinic override of a gateway endpoint or API key.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientCredential {
    pub service_type: String,
    pub api_key: Option<String>,
    pub instance_url: Option<String>,
    pub model: Option<String>,
}

impl ClientCredential {
    pub fn from_entity(entity: entity::client_credential::Model) -> Self {
        Self {
            service_type: entity.service_type,
            api_key: entity.api_key,
            instance_url: entity.instance_url,
            model: entity.model,
        }
    }
}
