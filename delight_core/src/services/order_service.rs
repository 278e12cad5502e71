//! Pricing and notification building for order submissions.

use chrono::{SecondsFormat, Utc};

use crate::catalog::{MenuCatalog, MenuItem};
use crate::discord::types::{
    ActionRow, Button, Embed, EmbedField, EmbedFooter, MessageEdit, WebhookPayload, COLOR_BLUE,
    COLOR_GREEN, COLOR_ORANGE, COLOR_YELLOW, CUSTOM_ID_MARK_AS_PROCESSED, CUSTOM_ID_PROCESS_ORDER,
    STATUS_FIELD_NAME, STATUS_PENDING, STATUS_PROCESSED, STATUS_PROCESSING,
};
use crate::models::order::OrderSubmission;

#[derive(Debug, Clone)]
pub struct OrderService {
    catalog: MenuCatalog,
}

impl OrderService {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Unknown menu ids resolve to a zero-price placeholder instead of an
    /// error, matching the intake contract.
    fn resolve(&self, id: &str) -> MenuItem {
        self.catalog
            .get(id)
            .cloned()
            .unwrap_or_else(|| MenuItem::new(id, "Menu inconnu", "", 0.0))
    }

    pub fn order_total(&self, submission: &OrderSubmission) -> f64 {
        submission
            .menus
            .iter()
            .filter(|line| line.quantity > 0)
            .map(|line| self.resolve(&line.id).price * f64::from(line.quantity))
            .sum()
    }

    pub fn menu_summary(&self, submission: &OrderSubmission) -> String {
        let lines: Vec<String> = submission
            .menus
            .iter()
            .filter(|line| line.quantity > 0)
            .map(|line| {
                let menu = self.resolve(&line.id);
                let line_total = menu.price * f64::from(line.quantity);
                format!(
                    "• **{}** (x{})\n  {}\n  Prix: {:.2}$",
                    menu.name, line.quantity, menu.description, line_total
                )
            })
            .collect();

        if lines.is_empty() {
            "Aucun menu sélectionné".to_string()
        } else {
            lines.join("\n\n")
        }
    }

    pub fn build_order_notification(&self, submission: &OrderSubmission) -> WebhookPayload {
        let mut fields = vec![
            EmbedField::new("🏢 Entreprise", &submission.nom_entreprise),
            EmbedField::new("☎️ Téléphone", &submission.numero_telephone),
            EmbedField::new(
                "🕒 Tranche horaire de disponibilité",
                &format!(
                    "{} - {}",
                    submission.horaire_disponibilite_debut, submission.horaire_disponibilite_fin
                ),
            ),
            EmbedField::new("🍴 Menus commandés", &self.menu_summary(submission)),
            EmbedField::new(
                "💰 Prix total",
                &format!("{:.2}$", self.order_total(submission)),
            ),
        ];

        if let Some(notes) = submission
            .informations_supplementaires
            .as_deref()
            .filter(|notes| !notes.is_empty())
        {
            fields.push(EmbedField::new("📝 Informations supplémentaires", notes));
        }

        fields.push(EmbedField::new(STATUS_FIELD_NAME, STATUS_PENDING));

        let embed = Embed {
            title: Some("🍽️ Nouvelle Commande Delight".to_string()),
            color: Some(COLOR_YELLOW),
            fields,
            footer: Some(EmbedFooter {
                text: "Commande Delight".to_string(),
            }),
            timestamp: Some(now_iso()),
            extra: Default::default(),
        };

        WebhookPayload {
            embeds: vec![embed],
            components: vec![ActionRow::new(vec![Button::primary(
                "Traiter la commande",
                CUSTOM_ID_PROCESS_ORDER,
            )])],
        }
    }

    pub fn build_status_notification(order_number: &str, new_status: &str) -> WebhookPayload {
        let embed = Embed {
            title: Some(format!("🔄 Mise à jour de la Commande #{}", order_number)),
            color: Some(COLOR_BLUE),
            fields: vec![EmbedField::new("📊 Nouveau Statut", new_status)],
            footer: Some(EmbedFooter {
                text: format!("Commande Delight #{}", order_number),
            }),
            timestamp: Some(now_iso()),
            extra: Default::default(),
        };

        WebhookPayload {
            embeds: vec![embed],
            components: vec![],
        }
    }
}

/// Rewrites the status field in place, appending it when the embed never
/// had one, and recolors the embed.
fn apply_status(mut embed: Embed, status: &str, color: u32) -> Embed {
    embed.color = Some(color);
    match embed
        .fields
        .iter_mut()
        .find(|field| field.name == STATUS_FIELD_NAME)
    {
        Some(field) => field.value = status.to_string(),
        None => embed.fields.push(EmbedField::new(STATUS_FIELD_NAME, status)),
    }
    embed
}

/// Edit moving an order to "processing": orange, one button left.
pub fn processing_edit(embed: Embed) -> MessageEdit {
    MessageEdit {
        embeds: vec![apply_status(embed, STATUS_PROCESSING, COLOR_ORANGE)],
        components: vec![ActionRow::new(vec![Button::success(
            "Marquer comme traitée",
            CUSTOM_ID_MARK_AS_PROCESSED,
        )])],
    }
}

/// Terminal edit: green, every button stripped.
pub fn processed_edit(embed: Embed) -> MessageEdit {
    MessageEdit {
        embeds: vec![apply_status(embed, STATUS_PROCESSED, COLOR_GREEN)],
        components: vec![],
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
