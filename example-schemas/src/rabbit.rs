//! Rabbit intake schema.

use intake_types::{FieldKind, FieldSchema, FormSchema, SectionSchema, VisibilityRule};

/// The rabbit ("conejo") intake form.
///
/// Covers the conditional patterns observed in the source: discharge
/// location shown only when discharge is present, gestation only for
/// females, and appetite detail only for partial or total anorexia.
pub fn rabbit() -> FormSchema {
    FormSchema::new()
        .with_title("Conejo")
        .with_section(SectionSchema::new("general", "Datos generales", 0).with_icon("clipboard"))
        .with_section(SectionSchema::new("cabeza", "Cabeza y cuello", 1).with_icon("skull"))
        .with_section(SectionSchema::new("digestivo", "Sistema digestivo", 2).with_icon("stomach"))
        .with_field(
            FieldSchema::new("nombre", "general", "Nombre", FieldKind::Text).required(),
        )
        .with_field(FieldSchema::new("fecha_ingreso", "general", "Fecha de ingreso", FieldKind::Date))
        .with_field(
            FieldSchema::new(
                "sexo",
                "general",
                "Sexo",
                FieldKind::select(["hembra", "macho", "indeterminado"]),
            )
            .required(),
        )
        .with_field(
            FieldSchema::new("gestante", "general", "Gestante", FieldKind::YesNo)
                .with_default("NO")
                .visible_when(VisibilityRule::equals("sexo", "hembra")),
        )
        .with_field(FieldSchema::new("peso", "general", "Peso (g)", FieldKind::Text).required())
        .with_field(
            FieldSchema::new(
                "condicion_corporal",
                "general",
                "Condición corporal",
                FieldKind::select(["caquexia", "delgado", "normal", "sobrepeso", "obeso"]),
            )
            .required()
            .with_default("normal"),
        )
        .with_field(
            FieldSchema::new("secreciones", "cabeza", "Secreciones", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
        .with_field(
            FieldSchema::new(
                "secreciones_localizacion",
                "cabeza",
                "Localización de secreciones",
                FieldKind::Text,
            )
            .visible_when(VisibilityRule::not_equals("secreciones", "NO")),
        )
        .with_field(
            FieldSchema::new(
                "estado_dientes",
                "cabeza",
                "Estado de los dientes",
                FieldKind::select(["normal", "sobrecrecimiento", "maloclusión"]),
            )
            .required()
            .with_default("normal"),
        )
        .with_field(
            FieldSchema::new(
                "apetito",
                "digestivo",
                "Apetito",
                FieldKind::select(["normal", "aumentado", "anorexia_parcial", "anorexia_total"]),
            )
            .required()
            .with_default("normal"),
        )
        .with_field(
            FieldSchema::new(
                "apetito_desde",
                "digestivo",
                "Desde cuándo",
                FieldKind::Text,
            )
            .visible_when(VisibilityRule::one_of("apetito", [
                "anorexia_parcial",
                "anorexia_total",
            ])),
        )
        .with_field(
            FieldSchema::new(
                "heces",
                "digestivo",
                "Heces",
                FieldKind::select(["normales", "blandas", "diarrea", "ausentes"]),
            )
            .required()
            .with_default("normales"),
        )
}
