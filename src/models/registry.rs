//! Data-driven type registry.
//!
//! Each vocabulary type is a table entry: a name, an optional parent, and
//! the attributes it recognizes with the validator bound to each. Attribute
//! lookup walks the parent chain, so `Question` answers for `actor` through
//! `Activity`. The table is built once and shared read-only by every object.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::validation::{
    AnyOfValidator, HeightValidator, HrefValidator, MediaTypeValidator, NameValidator,
    OneOfValidator, ReferenceValidator, UrlValidator, Validator, WidthValidator,
};

// Validator instances are stateless and shared across all validation calls.
static ANY_OF: Lazy<AnyOfValidator> = Lazy::new(AnyOfValidator::new);
static ONE_OF: Lazy<OneOfValidator> = Lazy::new(OneOfValidator::new);
static HEIGHT: Lazy<HeightValidator> = Lazy::new(HeightValidator::new);
static WIDTH: Lazy<WidthValidator> = Lazy::new(WidthValidator::new);
static HREF: Lazy<HrefValidator> = Lazy::new(HrefValidator::new);
static URL: Lazy<UrlValidator> = Lazy::new(UrlValidator::new);
static NAME: Lazy<NameValidator> = Lazy::new(NameValidator::new);
static MEDIA_TYPE: Lazy<MediaTypeValidator> = Lazy::new(MediaTypeValidator::new);
static REFERENCE: Lazy<ReferenceValidator> = Lazy::new(ReferenceValidator::new);

/// One vocabulary type: its name, parent, and own attribute bindings.
pub struct TypeSpec {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    attributes: Vec<(&'static str, &'static dyn Validator)>,
}

impl TypeSpec {
    /// Validator bound to `attribute` on this type alone, ignoring parents.
    pub fn own_validator(&self, attribute: &str) -> Option<&'static dyn Validator> {
        self.attributes
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, validator)| *validator)
    }

    pub fn own_attribute_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().map(|(name, _)| *name)
    }
}

static REGISTRY: Lazy<HashMap<&'static str, TypeSpec>> = Lazy::new(|| {
    let types = [
        TypeSpec {
            name: "Object",
            parent: None,
            attributes: vec![
                ("attributedTo", &*REFERENCE as &dyn Validator),
                ("mediaType", &*MEDIA_TYPE),
                ("name", &*NAME),
                ("url", &*URL),
            ],
        },
        TypeSpec {
            name: "Link",
            parent: None,
            attributes: vec![
                ("height", &*HEIGHT as &dyn Validator),
                ("href", &*HREF),
                ("mediaType", &*MEDIA_TYPE),
                ("name", &*NAME),
                ("width", &*WIDTH),
            ],
        },
        TypeSpec {
            name: "Activity",
            parent: Some("Object"),
            attributes: vec![
                ("actor", &*REFERENCE as &dyn Validator),
                ("object", &*REFERENCE),
                ("origin", &*REFERENCE),
                ("target", &*REFERENCE),
            ],
        },
        TypeSpec {
            name: "IntransitiveActivity",
            parent: Some("Activity"),
            attributes: vec![],
        },
        TypeSpec {
            name: "Question",
            parent: Some("IntransitiveActivity"),
            attributes: vec![
                ("anyOf", &*ANY_OF as &dyn Validator),
                ("oneOf", &*ONE_OF),
            ],
        },
        TypeSpec {
            name: "Note",
            parent: Some("Object"),
            attributes: vec![],
        },
        TypeSpec {
            name: "Article",
            parent: Some("Object"),
            attributes: vec![],
        },
        TypeSpec {
            name: "Join",
            parent: Some("Activity"),
            attributes: vec![],
        },
        TypeSpec {
            name: "Image",
            parent: Some("Object"),
            attributes: vec![
                ("height", &*HEIGHT as &dyn Validator),
                ("width", &*WIDTH),
            ],
        },
    ];

    types.into_iter().map(|spec| (spec.name, spec)).collect()
});

/// Look up a type by name.
pub fn spec(name: &str) -> Option<&'static TypeSpec> {
    REGISTRY.get(name)
}

/// Validator bound to `attribute` for `type_name`, walking the parent chain.
pub fn validator_for(type_name: &str, attribute: &str) -> Option<&'static dyn Validator> {
    let mut current = spec(type_name);

    while let Some(type_spec) = current {
        if let Some(validator) = type_spec.own_validator(attribute) {
            return Some(validator);
        }
        current = type_spec.parent.and_then(spec);
    }

    None
}

/// All attribute names `type_name` recognizes, own and inherited, sorted.
pub fn attribute_names(type_name: &str) -> Option<Vec<&'static str>> {
    spec(type_name)?;

    let mut names = Vec::new();
    let mut current = spec(type_name);

    while let Some(type_spec) = current {
        names.extend(type_spec.own_attribute_names());
        current = type_spec.parent.and_then(spec);
    }

    names.sort_unstable();
    names.dedup();
    Some(names)
}

/// All registered type names, sorted for stable output.
pub fn type_names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
