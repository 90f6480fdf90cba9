use bom_map::{ColumnMapper, ColumnPlan, ColumnRole, MappingError};
use bom_model::{IDENTIFIER_COLUMN, PartAttribute};
use proptest::prelude::*;

fn header(names: &[&'static str]) -> Vec<(&'static str, usize)> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| (*name, index + 1))
        .collect()
}

#[test]
fn maps_trimmed_names_and_skips_blanks() {
    let map = ColumnMapper::new()
        .build(header(&[" PartNumber ", "", "  ", "Manufacturer\t"]))
        .expect("build map");

    assert_eq!(map.len(), 2);
    assert_eq!(map.identifier_position(), 1);
    assert_eq!(map.get("Manufacturer"), Some(4));
    assert!(!map.contains(""));
}

#[test]
fn duplicate_name_takes_last_position() {
    let map = ColumnMapper::new()
        .build(header(&["Price", "PartNumber", "Price"]))
        .expect("build map");

    assert_eq!(map.get("Price"), Some(3));
    let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Price", "PartNumber"]);
}

#[test]
fn missing_identifier_is_fatal() {
    let error = ColumnMapper::new()
        .build(header(&["partnumber", "Manufacturer"]))
        .unwrap_err();
    assert_eq!(
        error,
        MappingError::MissingIdentifierColumn(IDENTIFIER_COLUMN.to_string())
    );
    assert_eq!(error.to_string(), "table must contain a 'PartNumber' column");
}

#[test]
fn plan_assigns_roles() {
    let map = ColumnMapper::new()
        .build(header(&["Notes", "PartNumber", "Stock", "Price"]))
        .expect("build map");
    let plan = ColumnPlan::from_map(&map);

    assert_eq!(plan.identifier_position, 2);
    let roles: Vec<ColumnRole> = plan.columns.iter().map(|column| column.role).collect();
    assert_eq!(
        roles,
        vec![
            ColumnRole::Passthrough,
            ColumnRole::Identifier,
            ColumnRole::Attribute(PartAttribute::Stock),
            ColumnRole::Attribute(PartAttribute::Price),
        ]
    );
    let attributes: Vec<(PartAttribute, usize)> = plan.attribute_columns().collect();
    assert_eq!(
        attributes,
        vec![(PartAttribute::Stock, 3), (PartAttribute::Price, 4)]
    );
    assert_eq!(plan.passthrough_columns().collect::<Vec<_>>(), vec!["Notes"]);
}

fn column_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Manufacturer".to_string()),
        Just("Price".to_string()),
        Just(" ".to_string()),
        "[A-Za-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn build_succeeds_iff_identifier_present(
        mut names in prop::collection::vec(column_name(), 0..8),
        insert_at in any::<prop::sample::Index>(),
        with_identifier in any::<bool>(),
    ) {
        if with_identifier {
            let index = insert_at.index(names.len() + 1);
            names.insert(index, IDENTIFIER_COLUMN.to_string());
        }
        let header: Vec<(&str, usize)> = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index + 1))
            .collect();
        let has_identifier = names.iter().any(|name| name.trim() == IDENTIFIER_COLUMN);

        match ColumnMapper::new().build(header) {
            Ok(map) => {
                prop_assert!(has_identifier);
                let position = map.identifier_position();
                prop_assert_eq!(names[position - 1].trim(), IDENTIFIER_COLUMN);
            }
            Err(error) => {
                prop_assert!(!has_identifier);
                prop_assert_eq!(
                    error,
                    MappingError::MissingIdentifierColumn(IDENTIFIER_COLUMN.to_string())
                );
            }
        }
    }
}
