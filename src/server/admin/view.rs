use sea_orm::DatabaseConnection;

use crate::server::admin::{
    choice::{Choice, FormField},
    descriptor::AdminModel,
};

/// The synthesized create/edit form for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub entity: &'static str,
    pub fields: Vec<FormField>,
}

/// Administrative CRUD view bound to one entity.
///
/// Display and form columns default to the entity's full static column
/// list (primary key included) unless overridden. Form scaffolding injects
/// a choice field for every declared relationship not already bound; the
/// augmented column list is cached on the view for the process lifetime,
/// and re-scaffolding is idempotent.
pub struct ModelView {
    model: AdminModel,
    column_list: Vec<String>,
    form_columns: Vec<String>,
}

impl ModelView {
    pub fn new(model: AdminModel) -> Self {
        let columns: Vec<String> = model.columns().iter().map(|c| c.to_string()).collect();

        Self {
            model,
            column_list: columns.clone(),
            form_columns: columns,
        }
    }

    /// Overrides the default form columns.
    pub fn with_form_columns(mut self, columns: &[&str]) -> Self {
        self.form_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn model(&self) -> AdminModel {
        self.model
    }

    pub fn column_list(&self) -> &[String] {
        &self.column_list
    }

    pub fn form_columns(&self) -> &[String] {
        &self.form_columns
    }

    /// Builds the entity's form, injecting one single-choice field per
    /// declared relationship.
    ///
    /// Choice loading failures degrade instead of propagating: the failure
    /// is logged and the field gets an empty choice list, keeping the rest
    /// of the form functional.
    pub async fn scaffold_form(&mut self, db: &DatabaseConnection) -> FormSchema {
        let relations = self.model.relations();

        // Relationship names always render as selects, so they are skipped
        // here even once cached in form_columns.
        let mut fields: Vec<FormField> = self
            .form_columns
            .iter()
            .filter(|column| relations.iter().all(|rel| rel.name != column.as_str()))
            .map(|column| FormField::Text {
                name: column.clone(),
            })
            .collect();

        for rel in relations {
            if fields.iter().any(|field| field.name() == rel.name) {
                continue;
            }

            let choices = match rel.related.list_rows(db).await {
                Ok(rows) => {
                    let mut choices = vec![Choice::unselected(rel.related.display_name())];
                    choices.extend(rows.into_iter().map(|row| Choice::new(row.id, row.label)));
                    choices
                }
                Err(err) => {
                    tracing::error!(
                        "Failed to load choices for relationship '{}' on {}: {}",
                        rel.name,
                        self.model.display_name(),
                        err
                    );
                    Vec::new()
                }
            };

            fields.push(FormField::Select {
                name: rel.name.to_string(),
                choices,
            });

            if !self.form_columns.iter().any(|column| column == rel.name) {
                self.form_columns.push(rel.name.to_string());
            }
        }

        FormSchema {
            entity: self.model.slug(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use orrery_test_utils::prelude::*;

    use crate::server::admin::{
        choice::{Choice, FormField},
        descriptor::AdminModel,
    };

    use super::ModelView;

    fn field_names(fields: &[FormField]) -> Vec<&str> {
        fields.iter().map(|field| field.name()).collect()
    }

    /// Expect default columns to cover the entity's full column list
    #[test]
    fn defaults_to_full_column_list() {
        let view = ModelView::new(AdminModel::Favorite);

        assert_eq!(
            view.column_list(),
            &["id", "type", "planet_id", "people_id", "user_id"]
        );
        assert_eq!(view.form_columns(), view.column_list());
    }

    /// Expect a select field per relationship, with the sentinel first and
    /// rows ordered by id
    #[tokio::test]
    async fn scaffold_injects_choice_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        test.insert_planet("Tatooine").await?;
        test.insert_planet("Alderaan").await?;
        test.insert_user("ana@example.com", "Ana Solo").await?;

        let mut view = ModelView::new(AdminModel::Favorite);
        let form = view.scaffold_form(&test.db).await;

        assert_eq!(
            field_names(&form.fields),
            vec![
                "id",
                "type",
                "planet_id",
                "people_id",
                "user_id",
                "planet",
                "people",
                "user"
            ]
        );

        let planet_field = form
            .fields
            .iter()
            .find(|field| field.name() == "planet")
            .unwrap();
        match planet_field {
            FormField::Select { choices, .. } => {
                assert_eq!(choices[0], Choice::unselected("Planet"));
                assert_eq!(choices[1].label, "Tatooine");
                assert_eq!(choices[2].label, "Alderaan");
                assert!(choices[1].value.unwrap() < choices[2].value.unwrap());
            }
            other => panic!("expected select field, got {:?}", other),
        }

        let user_field = form
            .fields
            .iter()
            .find(|field| field.name() == "user")
            .unwrap();
        match user_field {
            FormField::Select { choices, .. } => {
                assert_eq!(choices[0], Choice::unselected("User"));
                assert_eq!(choices[1].label, "Ana Solo");
            }
            other => panic!("expected select field, got {:?}", other),
        }

        Ok(())
    }

    /// Expect scaffolding twice to produce the same field set with no
    /// duplicated columns
    #[tokio::test]
    async fn scaffold_is_idempotent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        test.insert_planet("Tatooine").await?;

        let mut view = ModelView::new(AdminModel::Favorite);
        let first = view.scaffold_form(&test.db).await;
        let second = view.scaffold_form(&test.db).await;

        assert_eq!(first, second);

        let user_columns = view
            .form_columns()
            .iter()
            .filter(|column| column.as_str() == "user")
            .count();
        assert_eq!(user_columns, 1);

        Ok(())
    }

    /// Expect an empty choice list and no raised fault when the related
    /// table cannot be queried
    #[tokio::test]
    async fn scaffold_degrades_on_choice_load_failure() -> Result<(), TestError> {
        // planet table deliberately missing
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::People)
            .with_table(entity::prelude::Favorite)
            .build()
            .await?;
        test.insert_people("Luke Skywalker").await?;

        let mut view = ModelView::new(AdminModel::Favorite);
        let form = view.scaffold_form(&test.db).await;

        let planet_field = form
            .fields
            .iter()
            .find(|field| field.name() == "planet")
            .unwrap();
        assert_eq!(
            planet_field,
            &FormField::Select {
                name: "planet".to_string(),
                choices: Vec::new()
            }
        );

        // The other relationships still get working choice lists
        let people_field = form
            .fields
            .iter()
            .find(|field| field.name() == "people")
            .unwrap();
        match people_field {
            FormField::Select { choices, .. } => assert_eq!(choices.len(), 2),
            other => panic!("expected select field, got {:?}", other),
        }

        Ok(())
    }

    /// Expect entities without relationships to scaffold plain text fields
    #[tokio::test]
    async fn scaffold_without_relationships() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let mut view = ModelView::new(AdminModel::Planet);
        let form = view.scaffold_form(&test.db).await;

        assert_eq!(field_names(&form.fields), vec!["id", "name"]);
        assert!(form
            .fields
            .iter()
            .all(|field| matches!(field, FormField::Text { .. })));

        Ok(())
    }

    /// Expect explicitly configured form columns to survive augmentation
    #[tokio::test]
    async fn scaffold_respects_configured_columns() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let mut view = ModelView::new(AdminModel::Favorite).with_form_columns(&["type"]);
        let form = view.scaffold_form(&test.db).await;

        assert_eq!(
            field_names(&form.fields),
            vec!["type", "planet", "people", "user"]
        );

        Ok(())
    }
}
