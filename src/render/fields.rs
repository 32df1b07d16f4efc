//! Field rendering.
//!
//! Maps the fixed set of recognized response keys to display labels and icons,
//! and turns a lookup result into an ordered sequence of display blocks.

use strum::IntoEnumIterator;

use crate::lookup::{FieldKey, LookupResult};
use crate::render::escape_html;

/// Static display configuration for one response key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The response key this descriptor renders.
    pub key: FieldKey,
    /// Display label.
    pub label: &'static str,
    /// Display icon.
    pub icon: &'static str,
}

/// Returns the display descriptor for `key`.
pub fn descriptor(key: FieldKey) -> FieldDescriptor {
    let (label, icon) = match key {
        FieldKey::Ip => ("Endereço IP", "💻"),
        FieldKey::Hostname => ("Hostname", "🌐"),
        FieldKey::City => ("Cidade", "🏙️"),
        FieldKey::Region => ("Estado/Região", "🗺️"),
        FieldKey::Country => ("País (Código)", "🌍"),
        FieldKey::Loc => ("Latitude/Longitude", "📍"),
        FieldKey::Org => ("Provedor (ISP)", "🏢"),
        FieldKey::Postal => ("CEP/Código Postal", "✉️"),
        FieldKey::Timezone => ("Fuso Horário", "⏰"),
    };
    FieldDescriptor { key, label, icon }
}

/// One rendered display block: icon, label, and the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlock {
    /// The response key this block renders.
    pub key: FieldKey,
    /// Display label.
    pub label: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// The raw value as returned by the API.
    pub value: String,
}

impl FieldBlock {
    /// Emits card markup for an HTML rendering target.
    ///
    /// The value is HTML-escaped: it normally comes from well-formed API JSON,
    /// but it is attacker-influenceable in principle.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"field-card\">\n  <p class=\"field-label\">{} <span>{}</span></p>\n  <p class=\"field-value\">{}</p>\n</div>",
            self.icon,
            self.label,
            escape_html(&self.value)
        )
    }
}

/// Renders the display blocks for `result`.
///
/// Emits one block per recognized key with a non-empty value, in descriptor
/// table order — not the order keys appear in the response.
pub fn render_fields(result: &LookupResult) -> Vec<FieldBlock> {
    FieldKey::iter()
        .filter_map(|key| {
            result.field(key).map(|value| {
                let descriptor = descriptor(key);
                FieldBlock {
                    key,
                    label: descriptor.label,
                    icon: descriptor.icon,
                    value: value.to_string(),
                }
            })
        })
        .collect()
}
