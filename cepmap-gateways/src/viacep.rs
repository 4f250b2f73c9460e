use serde::Deserialize;

use cepmap_core::gateways::{
    directory::{Locality, PostalDirectory},
    GatewayError,
};
use cepmap_entities::postal_code::PostalCode;

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Client for the ViaCEP postal-code directory.
#[derive(Debug, Clone)]
pub struct ViaCep {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ViaCep {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ViaCep {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Response of `/ws/{code}/json/`. An unknown code is signalled by the
/// explicit `erro` marker, not by an HTTP error status.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default, deserialize_with = "deserialize_erro")]
    erro: bool,
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
}

/// The marker used to be a JSON boolean; the current API serves the
/// string `"true"`. Both shapes must be accepted.
fn deserialize_erro<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Marker {
        Bool(bool),
        Text(String),
    }
    Ok(match Option::<Marker>::deserialize(deserializer)? {
        Some(Marker::Bool(marker)) => marker,
        Some(Marker::Text(marker)) => marker == "true",
        None => false,
    })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

impl From<ViaCepResponse> for Locality {
    fn from(from: ViaCepResponse) -> Self {
        let ViaCepResponse {
            logradouro,
            bairro,
            localidade,
            uf,
            ..
        } = from;
        Self {
            street: non_empty(logradouro),
            neighborhood: non_empty(bairro),
            city: non_empty(localidade),
            state: non_empty(uf),
            // ViaCEP never returns coordinates.
            pos: None,
        }
    }
}

impl PostalDirectory for ViaCep {
    fn lookup(&self, postal_code: &PostalCode) -> Result<Option<Locality>, GatewayError> {
        let url = format!("{}/ws/{}/json/", self.base_url, postal_code.as_digits());
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| GatewayError::Transport(err.into()))?;
        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }
        let body: ViaCepResponse = response
            .json()
            .map_err(|err| GatewayError::Response(err.into()))?;
        if body.erro {
            log::debug!("Postal code {postal_code} is not registered in the directory");
            return Ok(None);
        }
        Ok(Some(body.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_registered_postal_code() {
        let json = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "612 até 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308"
        }"#;
        let response: ViaCepResponse = serde_json::from_str(json).unwrap();
        assert!(!response.erro);
        let locality = Locality::from(response);
        assert_eq!(Some("Avenida Paulista".to_string()), locality.street);
        assert_eq!(Some("Bela Vista".to_string()), locality.neighborhood);
        assert_eq!(Some("São Paulo".to_string()), locality.city);
        assert_eq!(Some("SP".to_string()), locality.state);
        assert_eq!(None, locality.pos);
    }

    #[test]
    fn deserialize_not_found_marker_boolean() {
        let response: ViaCepResponse = serde_json::from_str(r#"{ "erro": true }"#).unwrap();
        assert!(response.erro);
    }

    #[test]
    fn deserialize_not_found_marker_string() {
        let response: ViaCepResponse = serde_json::from_str(r#"{ "erro": "true" }"#).unwrap();
        assert!(response.erro);
    }

    #[test]
    fn blank_locality_fields_become_absent() {
        let json = r#"{
            "logradouro": "",
            "bairro": "",
            "localidade": "Ourinhos",
            "uf": "SP"
        }"#;
        let locality = Locality::from(serde_json::from_str::<ViaCepResponse>(json).unwrap());
        assert_eq!(None, locality.street);
        assert_eq!(None, locality.neighborhood);
        assert_eq!(Some("Ourinhos".to_string()), locality.city);
    }
}
