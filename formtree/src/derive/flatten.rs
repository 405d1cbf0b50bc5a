use crate::data::{Field, Node};

/// Every leaf field reachable from `items`, depth first, left to right.
///
/// Sections are entered, rows and columns expanded, and *all* variant
/// branches visited in declaration order regardless of which one is
/// selected. This answers "which fields can ever exist", not "which fields
/// are visible".
pub fn flatten(items: &[Node]) -> Vec<&Field> {
    let mut out = Vec::new();
    flatten_into(items, &mut out);
    out
}

fn flatten_into<'a>(items: &'a [Node], out: &mut Vec<&'a Field>) {
    for item in items {
        match item {
            Node::Field(field) => out.push(field),
            Node::Row(row) => out.extend(&row.fields),
            Node::Section(section) => flatten_into(&section.items, out),
            Node::Variant(variant) => {
                for branch in variant.variants.values() {
                    flatten_into(branch, out);
                }
            }
            Node::Columns(columns) => {
                for column in &columns.columns {
                    flatten_into(column, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{FormBuilder, SectionOptions, VariantOptions};

    fn names(fields: &[&Field]) -> Vec<String> {
        fields.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_flatten_order() {
        let form = FormBuilder::new()
            .add_field(Field::new("a", "UInput"))
            .add_row(vec![Field::new("b", "UInput"), Field::new("c", "UInput")])
            .add_section(SectionOptions::new("s", "S"), |b| {
                b.add_field(Field::new("d", "UInput"));
            })
            .build();

        assert_eq!(names(&flatten(form.items())), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_flatten_visits_every_branch() {
        for default in ["x", "y"] {
            let form = FormBuilder::new()
                .add_variant(VariantOptions::new("v", default), |v| {
                    v.branch("x", |b| {
                        b.add_field(Field::new("a", "UInput"));
                    });
                    v.branch("y", |b| {
                        b.add_field(Field::new("b", "UInput"));
                    });
                })
                .build();

            assert_eq!(names(&flatten(form.items())), ["a", "b"]);
        }
    }

    #[test]
    fn test_flatten_columns_in_column_order() {
        let form = FormBuilder::new()
            .add_columns([6u32, 6], |cols| {
                cols[1].add_field(Field::new("right", "UInput"));
                cols[0].add_field(Field::new("left", "UInput"));
                cols[0].add_field(Field::new("left2", "UInput"));
            })
            .build();

        assert_eq!(names(&flatten(form.items())), ["left", "left2", "right"]);
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(&[]).is_empty());
    }
}
