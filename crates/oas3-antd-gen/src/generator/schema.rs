use oas3::spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet};

use crate::generator::{
  model::{ModelSchema, PropertyDefinition},
  naming::identifiers::title_case,
};

const ANY_TYPE: &str = "any";
const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Builds the template-facing definition of a component schema.
pub(crate) fn model_schema(name: &str, schema: &ObjectSchema) -> ModelSchema {
  let properties = schema
    .properties
    .iter()
    .map(|(prop_name, prop_ref)| property_definition(prop_name, prop_ref, schema.required.contains(prop_name)))
    .collect();

  ModelSchema {
    name: name.to_string(),
    title: schema.title.clone(),
    description: schema.description.clone(),
    custom_tag: String::new(),
    properties,
  }
}

/// Binary string payloads are stream models.
pub(crate) fn is_stream_schema(schema: &ObjectSchema) -> bool {
  matches!(&schema.schema_type, Some(SchemaTypeSet::Single(SchemaType::String)))
    && schema.format.as_deref() == Some("binary")
}

fn property_definition(name: &str, prop_ref: &ObjectOrReference<ObjectSchema>, required: bool) -> PropertyDefinition {
  match prop_ref {
    ObjectOrReference::Ref { .. } => {
      let ref_name = component_name(prop_ref);
      PropertyDefinition {
        name: name.to_string(),
        ts_type: ref_name.clone().unwrap_or_else(|| ANY_TYPE.to_string()),
        required,
        description: None,
        is_array: false,
        ref_name,
      }
    }
    ObjectOrReference::Object(schema) => {
      let is_array = matches!(&schema.schema_type, Some(SchemaTypeSet::Single(SchemaType::Array)));
      let ref_name = if is_array { array_item_ref(schema) } else { None };
      PropertyDefinition {
        name: name.to_string(),
        ts_type: ts_type(schema),
        required,
        description: schema.description.clone(),
        is_array,
        ref_name,
      }
    }
  }
}

/// Title-cased component name of an internal `#/components/schemas/` reference.
fn component_name(reference: &ObjectOrReference<ObjectSchema>) -> Option<String> {
  match reference {
    ObjectOrReference::Ref { ref_path, .. } => ref_path.strip_prefix(SCHEMA_REF_PREFIX).map(title_case),
    ObjectOrReference::Object(_) => None,
  }
}

fn array_item_ref(schema: &ObjectSchema) -> Option<String> {
  match schema.items.as_deref()? {
    Schema::Object(items) => component_name(items),
    Schema::Boolean(_) => None,
  }
}

/// Maps a schema onto the TypeScript type used in `data.ts`.
pub(crate) fn ts_type(schema: &ObjectSchema) -> String {
  if !schema.enum_values.is_empty() {
    return enum_literal_union(schema);
  }

  match &schema.schema_type {
    Some(SchemaTypeSet::Single(single)) => single_ts_type(*single, schema),
    Some(SchemaTypeSet::Multiple(types)) => {
      let mut variants = types
        .iter()
        .filter(|ty| **ty != SchemaType::Null)
        .map(|ty| single_ts_type(*ty, schema))
        .collect::<Vec<_>>();
      if types.contains(&SchemaType::Null) {
        variants.push("null".to_string());
      }
      if variants.is_empty() {
        ANY_TYPE.to_string()
      } else {
        variants.join(" | ")
      }
    }
    None if !schema.properties.is_empty() => "Record<string, any>".to_string(),
    None => ANY_TYPE.to_string(),
  }
}

fn single_ts_type(schema_type: SchemaType, schema: &ObjectSchema) -> String {
  match schema_type {
    SchemaType::Boolean => "boolean".to_string(),
    SchemaType::Integer | SchemaType::Number => "number".to_string(),
    SchemaType::String => "string".to_string(),
    SchemaType::Null => "null".to_string(),
    SchemaType::Object => "Record<string, any>".to_string(),
    SchemaType::Array => {
      let item = match schema.items.as_deref() {
        Some(Schema::Object(items)) => match items.as_ref() {
          reference @ ObjectOrReference::Ref { .. } => {
            component_name(reference).unwrap_or_else(|| ANY_TYPE.to_string())
          }
          ObjectOrReference::Object(inner) => ts_type(inner),
        },
        Some(Schema::Boolean(_)) | None => ANY_TYPE.to_string(),
      };
      if item.contains(' ') {
        format!("({item})[]")
      } else {
        format!("{item}[]")
      }
    }
  }
}

fn enum_literal_union(schema: &ObjectSchema) -> String {
  schema
    .enum_values
    .iter()
    .map(|value| match value {
      serde_json::Value::String(text) => format!("'{}'", text.replace('\'', "\\'")),
      other => other.to_string(),
    })
    .collect::<Vec<_>>()
    .join(" | ")
}
