//! Order intake payloads and their validation rules.
//!
//! Wire field names stay in French: they are the contract the form and any
//! existing client speak.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[validate(length(
        min = 2,
        message = "Le nom de l'entreprise doit contenir au moins 2 caractères."
    ))]
    pub nom_entreprise: String,

    #[validate(length(min = 1, message = "Le numéro de téléphone est requis."))]
    pub numero_telephone: String,

    #[validate(custom(function = validate_time_of_day))]
    pub horaire_disponibilite_debut: String,

    #[validate(custom(function = validate_time_of_day))]
    pub horaire_disponibilite_fin: String,

    #[validate(custom(function = validate_order_lines))]
    pub menus: Vec<OrderLine>,

    #[serde(default)]
    pub informations_supplementaires: Option<String>,
}

/// Quantities are `u32`: a negative quantity is unrepresentable and gets
/// rejected at deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderLine {
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[validate(length(min = 1, message = "Numéro de commande et nouveau statut requis"))]
    pub order_number: String,

    #[validate(length(min = 1, message = "Numéro de commande et nouveau statut requis"))]
    pub new_status: String,
}

fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        let mut error = ValidationError::new("time_of_day");
        error.message =
            Some("Veuillez entrer un horaire valide au format 24h (ex: 14:30).".into());
        error
    })?;
    Ok(())
}

fn validate_order_lines(lines: &[OrderLine]) -> Result<(), ValidationError> {
    if lines.iter().any(|line| line.quantity > 0) {
        Ok(())
    } else {
        let mut error = ValidationError::new("at_least_one_menu");
        error.message = Some("Veuillez sélectionner au moins un menu.".into());
        Err(error)
    }
}
