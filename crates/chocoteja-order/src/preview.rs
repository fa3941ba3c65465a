//! Box Preview Model
//!
//! What the preview pane should draw for a given color and message.

use crate::color::BoxColor;

/// Background used while no color is picked
const UNSET_BACKGROUND: &str = "bg-muted";
const UNSET_LABEL: &str = "Selecciona un color";
const PICK_COLOR_PROMPT: &str = "👆 Selecciona un color arriba para ver tu caja personalizada";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxPreview {
    pub label: &'static str,
    pub background: &'static str,
    pub shadow: &'static str,
    /// Sticky note text, only when there is something to show
    pub note: Option<String>,
    /// Hint shown under the box until a color is picked
    pub prompt: Option<&'static str>,
}

pub fn box_preview(color: Option<BoxColor>, message: &str) -> BoxPreview {
    let note = (!message.is_empty()).then(|| message.to_string());
    match color {
        Some(color) => {
            let style = color.style();
            BoxPreview {
                label: color.label(),
                background: style.background,
                shadow: style.shadow,
                note,
                prompt: None,
            }
        }
        None => BoxPreview {
            label: UNSET_LABEL,
            background: UNSET_BACKGROUND,
            shadow: "",
            note,
            prompt: Some(PICK_COLOR_PROMPT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_color_shows_prompt() {
        let preview = box_preview(None, "");
        assert_eq!(preview.label, "Selecciona un color");
        assert_eq!(preview.background, "bg-muted");
        assert!(preview.prompt.is_some());
        assert_eq!(preview.note, None);
    }

    #[test]
    fn test_color_maps_to_its_style() {
        let preview = box_preview(Some(BoxColor::Dorado), "");
        assert_eq!(preview.label, "Dorado Especial");
        assert_eq!(preview.background, "bg-yellow-600");
        assert_eq!(preview.shadow, "shadow-yellow-500/50");
        assert_eq!(preview.prompt, None);
    }

    #[test]
    fn test_note_only_for_non_empty_message() {
        let preview = box_preview(Some(BoxColor::Rojo), "Te quiero");
        assert_eq!(preview.note.as_deref(), Some("Te quiero"));

        let preview = box_preview(None, "Hola");
        assert_eq!(preview.note.as_deref(), Some("Hola"));
    }
}
