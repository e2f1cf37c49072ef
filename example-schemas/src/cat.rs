//! Cat intake schema.

use intake_types::{FieldKind, FieldSchema, FormSchema, SectionSchema, VisibilityRule};

/// The cat ("gato") intake form.
pub fn cat() -> FormSchema {
    FormSchema::new()
        .with_title("Gato")
        .with_section(SectionSchema::new("general", "Datos generales", 0).with_icon("clipboard"))
        .with_section(SectionSchema::new("examen_fisico", "Examen físico", 1).with_icon("stethoscope"))
        .with_section(SectionSchema::new("comportamiento", "Comportamiento", 2).with_icon("paw"))
        .with_field(FieldSchema::new("nombre", "general", "Nombre", FieldKind::Text).required())
        .with_field(
            FieldSchema::new(
                "sexo",
                "general",
                "Sexo",
                FieldKind::select(["hembra", "macho"]),
            )
            .required(),
        )
        .with_field(
            FieldSchema::new("esterilizado", "general", "Esterilizado", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
        .with_field(FieldSchema::new("peso", "general", "Peso (kg)", FieldKind::Text).required())
        .with_field(
            FieldSchema::new(
                "mucosas",
                "examen_fisico",
                "Mucosas",
                FieldKind::select(["rosadas", "pálidas", "ictéricas", "cianóticas"]),
            )
            .required()
            .with_default("rosadas"),
        )
        .with_field(
            FieldSchema::new("heridas", "examen_fisico", "Heridas", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
        .with_field(
            FieldSchema::new(
                "heridas_descripcion",
                "examen_fisico",
                "Descripción de heridas",
                FieldKind::Text,
            )
            .visible_when(VisibilityRule::not_equals("heridas", "NO")),
        )
        .with_field(
            FieldSchema::new(
                "actitud",
                "comportamiento",
                "Actitud",
                FieldKind::select(["alerta", "deprimido", "agresivo", "letárgico"]),
            )
            .required()
            .with_default("alerta"),
        )
        .with_field(
            FieldSchema::new(
                "agresividad_contexto",
                "comportamiento",
                "Contexto de la agresividad",
                FieldKind::Text,
            )
            .visible_when(VisibilityRule::equals("actitud", "agresivo")),
        )
}
