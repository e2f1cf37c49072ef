//! Bird intake schema.

use intake_types::{FieldKind, FieldSchema, FormSchema, SectionSchema, VisibilityRule};

/// The bird ("ave") intake form.
pub fn bird() -> FormSchema {
    FormSchema::new()
        .with_title("Ave")
        .with_section(SectionSchema::new("general", "Datos generales", 0).with_icon("clipboard"))
        .with_section(SectionSchema::new("plumaje", "Plumaje y piel", 1).with_icon("feather"))
        .with_section(SectionSchema::new("respiratorio", "Sistema respiratorio", 2).with_icon("lungs"))
        .with_field(FieldSchema::new("especie", "general", "Especie", FieldKind::Text).required())
        .with_field(
            FieldSchema::new(
                "sexo",
                "general",
                "Sexo",
                FieldKind::select(["hembra", "macho", "indeterminado"]),
            )
            .required()
            .with_default("indeterminado"),
        )
        .with_field(FieldSchema::new("peso", "general", "Peso (g)", FieldKind::Text).required())
        .with_field(
            FieldSchema::new(
                "estado_plumaje",
                "plumaje",
                "Estado del plumaje",
                FieldKind::select(["normal", "erizado", "picaje", "muda"]),
            )
            .required()
            .with_default("normal"),
        )
        .with_field(
            FieldSchema::new("picaje_zona", "plumaje", "Zona de picaje", FieldKind::Text)
                .visible_when(VisibilityRule::equals("estado_plumaje", "picaje")),
        )
        .with_field(
            FieldSchema::new("disnea", "respiratorio", "Disnea", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
        .with_field(
            FieldSchema::new(
                "disnea_grado",
                "respiratorio",
                "Grado de disnea",
                FieldKind::select(["leve", "moderada", "severa"]),
            )
            .visible_when(VisibilityRule::not_equals("disnea", "NO")),
        )
        .with_field(
            FieldSchema::new("estornudos", "respiratorio", "Estornudos", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
}
